//! Host-side typed call surface.
//!
//! This module defines [`HostAdapter`], the native-side face of the bridge:
//! one method per media operation, each constructing the matching
//! [`BridgeMessage`], serializing it, and posting it toward the editing
//! context. Calls are fire-and-forget; the adapter does not wait for or
//! interpret a structured result beyond the state projections that arrive
//! asynchronously on the return channel.
//!
//! The adapter expects its caller not to issue overlapping operations without
//! waiting for the prior one's effect; the ordered transport serializes
//! deliveries, and nothing here enforces further mutual exclusion.

use crate::bridge::messages::BridgeMessage;
use crate::bridge::projection::EditorState;
use crate::domain::Result;
use crate::host::transport::HostEndpoint;

/// Options accepted by [`HostAdapter::set_media_image`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Alternative text.
    pub alt: Option<String>,
    /// Display width in pixels.
    pub width: Option<u32>,
    /// Display height in pixels.
    pub height: Option<u32>,
}

/// Options accepted by [`HostAdapter::set_audio`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioOptions {
    /// Human-readable title.
    pub title: Option<String>,
    /// Whether playback controls are shown.
    pub controls: Option<bool>,
}

/// Options accepted by the embed operations (YouTube, Vimeo, SoundCloud).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Embed width in pixels.
    pub width: Option<u32>,
    /// Embed height in pixels.
    pub height: Option<u32>,
}

/// The native-side face of the bridge.
///
/// Owns the host end of the bridge channel. Mutating methods serialize one
/// bridge message each; [`state`](Self::state) drains the return channel and
/// keeps only the newest projection, which is the latest observable editor
/// state.
///
/// # Example
///
/// ```rust
/// use mediabridge::{initialize, Config};
/// use mediabridge::host::EmbedOptions;
///
/// let (mut adapter, mut session) = initialize(&Config::default());
/// adapter.set_youtube("https://youtu.be/abc", EmbedOptions::default())?;
/// session.pump()?;
///
/// let state = adapter.state()?.unwrap();
/// assert_eq!(state.current_media[0].type_name, "youtube");
/// # Ok::<(), mediabridge::domain::BridgeError>(())
/// ```
#[derive(Debug)]
pub struct HostAdapter {
    endpoint: HostEndpoint,
    last_state: Option<EditorState>,
}

impl HostAdapter {
    /// Creates an adapter over the host end of a bridge channel.
    #[must_use]
    pub fn new(endpoint: HostEndpoint) -> Self {
        Self {
            endpoint,
            last_state: None,
        }
    }

    /// Requests insertion of an image node.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the editing context has gone away.
    pub fn set_media_image(&self, src: impl Into<String>, options: ImageOptions) -> Result<()> {
        self.post(&BridgeMessage::media_image(
            src,
            options.alt,
            options.width,
            options.height,
        ))
    }

    /// Requests the engine's native "set audio" operation.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the editing context has gone away.
    pub fn set_audio(&self, src: impl Into<String>, options: AudioOptions) -> Result<()> {
        self.post(&BridgeMessage::audio(src, options.title, options.controls))
    }

    /// Requests insertion of a YouTube embed node.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the editing context has gone away.
    pub fn set_youtube(&self, src: impl Into<String>, options: EmbedOptions) -> Result<()> {
        self.post(&BridgeMessage::youtube(src, options.width, options.height))
    }

    /// Requests insertion of a Vimeo embed node.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the editing context has gone away.
    pub fn set_vimeo(&self, src: impl Into<String>, options: EmbedOptions) -> Result<()> {
        self.post(&BridgeMessage::vimeo(src, options.width, options.height))
    }

    /// Requests insertion of a SoundCloud embed node.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the editing context has gone away.
    pub fn set_sound_cloud(&self, src: impl Into<String>, options: EmbedOptions) -> Result<()> {
        self.post(&BridgeMessage::sound_cloud(
            src,
            options.width,
            options.height,
        ))
    }

    /// Requests insertion of a Twitter embed node.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails or a transport error if
    /// the editing context has gone away.
    pub fn set_twitter(&self, src: impl Into<String>) -> Result<()> {
        self.post(&BridgeMessage::twitter(src))
    }

    /// Returns the latest observable editor state.
    ///
    /// Drains all projections delivered since the last call, keeping only the
    /// newest, and caches it: later calls keep returning the same snapshot
    /// until a newer one arrives. Returns `None` if no projection has been
    /// delivered yet.
    ///
    /// # Errors
    ///
    /// Returns a codec error if a delivered projection payload cannot be
    /// decoded.
    pub fn state(&mut self) -> Result<Option<EditorState>> {
        while let Some(payload) = self.endpoint.try_recv_state() {
            self.last_state = Some(serde_json::from_str(&payload)?);
        }
        Ok(self.last_state.clone())
    }

    /// Serializes a message and posts it toward the editing context.
    fn post(&self, message: &BridgeMessage) -> Result<()> {
        let payload = serde_json::to_string(message)?;
        tracing::debug!(message = ?message, payload_len = payload.len(), "posting bridge message");
        self.endpoint.post_message(payload)
    }
}
