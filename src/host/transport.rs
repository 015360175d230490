//! Bridge transport seam and in-process channel implementation.
//!
//! The bridge rests on two ordered, one-way channels: host → editor for
//! message payloads, editor → host for state projections. Delivery is
//! fire-and-forget and at-most-once; ordering is the transport's
//! responsibility and is what serializes mutations on the document model.
//!
//! This module defines the [`BridgeTransport`] posting seam plus
//! [`channel`], the in-process `mpsc`-backed implementation used by the
//! default wiring. A WebView or other host substrate supplies its own
//! transport behind the same trait.

use crate::domain::{BridgeError, Result};
use std::sync::mpsc;

/// An ordered, one-way, fire-and-forget payload channel.
pub trait BridgeTransport {
    /// Posts a serialized payload toward the far end.
    ///
    /// Does not wait for or interpret a result.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] if the far end has gone away.
    fn post(&self, payload: String) -> Result<()>;
}

/// [`BridgeTransport`] over an in-process `mpsc` sender.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    tx: mpsc::Sender<String>,
}

impl BridgeTransport for ChannelTransport {
    fn post(&self, payload: String) -> Result<()> {
        self.tx
            .send(payload)
            .map_err(|e| BridgeError::Transport(e.to_string()))
    }
}

/// The host side of a bridge channel pair.
///
/// Posts message payloads toward the editing context and drains returned
/// state payloads.
#[derive(Debug)]
pub struct HostEndpoint {
    messages: ChannelTransport,
    state_rx: mpsc::Receiver<String>,
}

impl HostEndpoint {
    /// Posts a serialized bridge message toward the editing context.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] if the editing context has gone
    /// away.
    pub fn post_message(&self, payload: String) -> Result<()> {
        self.messages.post(payload)
    }

    /// Returns the next pending state payload, if one has been delivered.
    ///
    /// Non-blocking; a message that never arrives simply never appears here.
    pub fn try_recv_state(&self) -> Option<String> {
        self.state_rx.try_recv().ok()
    }
}

/// The editing-context side of a bridge channel pair.
///
/// Drains inbound message payloads in delivery order and posts state
/// projections back to the host.
#[derive(Debug)]
pub struct EditorEndpoint {
    message_rx: mpsc::Receiver<String>,
    state: ChannelTransport,
}

impl EditorEndpoint {
    /// Returns the next pending message payload, if one has been delivered.
    pub fn try_recv_message(&self) -> Option<String> {
        self.message_rx.try_recv().ok()
    }

    /// Posts a serialized state projection back toward the host.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] if the host has gone away.
    pub fn post_state(&self, payload: String) -> Result<()> {
        self.state.post(payload)
    }
}

/// Creates a connected pair of bridge endpoints over in-process channels.
///
/// # Example
///
/// ```rust
/// use mediabridge::host::transport;
///
/// let (host, editor) = transport::channel();
/// host.post_message("{}".to_string()).unwrap();
/// assert_eq!(editor.try_recv_message().as_deref(), Some("{}"));
/// ```
#[must_use]
pub fn channel() -> (HostEndpoint, EditorEndpoint) {
    let (message_tx, message_rx) = mpsc::channel();
    let (state_tx, state_rx) = mpsc::channel();

    (
        HostEndpoint {
            messages: ChannelTransport { tx: message_tx },
            state_rx,
        },
        EditorEndpoint {
            message_rx,
            state: ChannelTransport { tx: state_tx },
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_are_delivered_in_order() {
        let (host, editor) = channel();
        host.post_message("one".to_string()).unwrap();
        host.post_message("two".to_string()).unwrap();

        assert_eq!(editor.try_recv_message().as_deref(), Some("one"));
        assert_eq!(editor.try_recv_message().as_deref(), Some("two"));
        assert!(editor.try_recv_message().is_none());
    }

    #[test]
    fn post_after_far_end_dropped_is_transport_error() {
        let (host, editor) = channel();
        drop(editor);

        let err = host.post_message("late".to_string()).unwrap_err();
        assert!(matches!(err, BridgeError::Transport(_)));
    }

    #[test]
    fn state_flows_back_on_its_own_channel() {
        let (host, editor) = channel();
        editor.post_state("{\"currentMedia\":[]}".to_string()).unwrap();

        assert!(host.try_recv_state().is_some());
        assert!(host.try_recv_state().is_none());
    }
}
