//! Caller-owned editing session.
//!
//! This module defines [`EditorSession`], the explicit session object that
//! replaces the original's framework-global editor instance. A session pairs a
//! [`BridgeHandler`] with the editing-context end of the bridge channel: it
//! drains inbound message payloads in delivery order, dispatches each one, and
//! publishes the refreshed state projection back to the host after every
//! delivery.

use crate::bridge::handler::BridgeHandler;
use crate::bridge::projection::EditorState;
use crate::domain::Result;
use crate::engine::DocumentEngine;
use crate::host::transport::EditorEndpoint;

/// One editing session: a bridge handler wired to its channel endpoint.
///
/// The session is owned by the caller and processes messages only when pumped;
/// there is no background thread. Message processing is strictly sequential,
/// in delivery order.
pub struct EditorSession<E: DocumentEngine> {
    handler: BridgeHandler<E>,
    endpoint: EditorEndpoint,
}

impl<E: DocumentEngine> EditorSession<E> {
    /// Creates a session from a handler and the editor end of a bridge
    /// channel.
    pub fn new(handler: BridgeHandler<E>, endpoint: EditorEndpoint) -> Self {
        Self { handler, endpoint }
    }

    /// Drains and dispatches all pending inbound messages.
    ///
    /// After every delivery, handled or not, the current state projection
    /// is recomputed from the live document model and posted back to the
    /// host, so the host always observes the latest state.
    ///
    /// # Returns
    ///
    /// The number of payloads that were recognized and dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`](crate::domain::BridgeError) if the
    /// host has gone away, or a codec error if the projection cannot be
    /// serialized.
    pub fn pump(&mut self) -> Result<usize> {
        let mut handled = 0;

        while let Some(payload) = self.endpoint.try_recv_message() {
            if self.handler.handle_payload(&payload) {
                handled += 1;
            }
            self.publish_state()?;
        }

        tracing::debug!(handled, "bridge pump complete");
        Ok(handled)
    }

    /// Computes the current projection and posts it to the host.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the host has gone away.
    pub fn publish_state(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.handler.state())?;
        self.endpoint.post_state(payload)
    }

    /// Returns the current state projection without publishing it.
    #[must_use]
    pub fn state(&self) -> EditorState {
        self.handler.state()
    }

    /// Returns a shared reference to the bridge handler.
    pub fn handler(&self) -> &BridgeHandler<E> {
        &self.handler
    }

    /// Returns a mutable reference to the bridge handler.
    ///
    /// Useful for driving the session directly in tests or embedding
    /// scenarios without a transport.
    pub fn handler_mut(&mut self) -> &mut BridgeHandler<E> {
        &mut self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtensionConfig;
    use crate::engine::MemoryDocument;
    use crate::host::transport;

    fn session() -> (transport::HostEndpoint, EditorSession<MemoryDocument>) {
        let (host, editor) = transport::channel();
        let handler = BridgeHandler::new(MemoryDocument::new(), ExtensionConfig::default());
        (host, EditorSession::new(handler, editor))
    }

    #[test]
    fn pump_dispatches_in_delivery_order_and_publishes_state() {
        let (host, mut session) = session();
        host.post_message(
            r#"{"type":"set-youtube","payload":{"src":"https://youtu.be/a"}}"#.to_string(),
        )
        .unwrap();
        host.post_message(
            r#"{"type":"set-twitter","payload":{"src":"https://twitter.com/x/status/1"}}"#
                .to_string(),
        )
        .unwrap();

        let handled = session.pump().unwrap();
        assert_eq!(handled, 2);

        let media = &session.state().current_media;
        assert_eq!(media[0].type_name, "youtube");
        assert_eq!(media[1].type_name, "twitter");

        // One projection per delivery.
        assert!(host.try_recv_state().is_some());
        assert!(host.try_recv_state().is_some());
        assert!(host.try_recv_state().is_none());
    }

    #[test]
    fn unrecognized_payload_still_publishes_latest_state() {
        let (host, mut session) = session();
        host.post_message(r#"{"type":"set-video","payload":{"src":"v.mp4"}}"#.to_string())
            .unwrap();

        let handled = session.pump().unwrap();
        assert_eq!(handled, 0);
        assert!(session.state().current_media.is_empty());
        assert!(host.try_recv_state().is_some());
    }

    #[test]
    fn pump_with_no_pending_messages_is_a_no_op() {
        let (host, mut session) = session();
        assert_eq!(session.pump().unwrap(), 0);
        assert!(host.try_recv_state().is_none());
    }
}
