//! Bridge message dispatch.
//!
//! This module implements [`BridgeHandler`], the document-context side of the
//! bridge. It receives bridge messages, maps each to exactly one document
//! mutation through the engine seam, and exposes the recomputed editor state
//! projection after each change.
//!
//! # Dispatch Contract
//!
//! Given a bridge message, apply the corresponding mutation and report whether
//! the message was recognized:
//!
//! | Message | Mutation |
//! |---|---|
//! | `SetMediaImage` | insert Image node with fixed presentation defaults plus payload attrs |
//! | `SetAudio` | engine's native set-audio operation |
//! | `SetYoutube` | insert Youtube node with configured playback defaults (payload dims forwarded) |
//! | `SetVimeo` | insert Vimeo node with payload attrs |
//! | `SetSoundCloud` | insert SoundCloud node with payload attrs |
//! | `SetTwitter` | insert Twitter node with the configured static style flattened in |
//! | undecodable payload | no mutation, `false` |
//!
//! Payloads are not validated here: a malformed payload is handed to the
//! engine, which fails according to its own contract. An engine failure is
//! logged and does not change the "recognized" result.

use crate::bridge::messages::BridgeMessage;
use crate::bridge::projection::EditorState;
use crate::config::ExtensionConfig;
use crate::domain::{
    AudioAttrs, EmbedAttrs, ImageAttrs, MediaNode, Result, TwitterAttrs, YoutubeAttrs,
};
use crate::engine::DocumentEngine;

/// The document-context side of the bridge.
///
/// Owns a handle to the document engine and the static extension
/// configuration. Messages are processed sequentially, one at a time; the
/// handler relies on the ordered transport for serialization and does not
/// enforce mutual exclusion itself.
///
/// # Example
///
/// ```rust
/// use mediabridge::bridge::{BridgeHandler, BridgeMessage};
/// use mediabridge::config::ExtensionConfig;
/// use mediabridge::engine::MemoryDocument;
///
/// let mut handler = BridgeHandler::new(MemoryDocument::new(), ExtensionConfig::default());
/// let handled = handler.handle_message(BridgeMessage::youtube("https://youtu.be/abc", None, None));
/// assert!(handled);
/// assert_eq!(handler.state().current_media.len(), 1);
/// ```
#[derive(Debug)]
pub struct BridgeHandler<E: DocumentEngine> {
    /// Handle to the engine-owned document model.
    engine: E,

    /// Static per-variant presentation defaults, fixed at construction.
    config: ExtensionConfig,
}

impl<E: DocumentEngine> BridgeHandler<E> {
    /// Creates a handler over the given engine with the given static
    /// configuration.
    pub fn new(engine: E, config: ExtensionConfig) -> Self {
        Self { engine, config }
    }

    /// Returns a shared reference to the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Decodes a raw inbound payload and dispatches it.
    ///
    /// This is the transport-facing entry point. An undecodable payload (an
    /// unknown message tag, or malformed JSON) produces no mutation and
    /// returns `false`; no error propagates.
    pub fn handle_payload(&mut self, payload: &str) -> bool {
        match serde_json::from_str::<BridgeMessage>(payload) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::debug!(error = %e, "unrecognized bridge payload - not handled");
                false
            }
        }
    }

    /// Dispatches one bridge message into exactly one document mutation.
    ///
    /// Returns `true` for every recognized variant. Engine rejections (e.g. a
    /// payload invalid under the engine's schema) are logged and swallowed:
    /// the bridge is a pass-through boundary, not a validation boundary.
    pub fn handle_message(&mut self, message: BridgeMessage) -> bool {
        let _span = tracing::debug_span!("handle_bridge_message", message = ?message).entered();

        let result = match message {
            BridgeMessage::SetMediaImage {
                src,
                alt,
                width,
                height,
            } => self.handle_media_image(src, alt, width, height),
            BridgeMessage::SetAudio {
                src,
                title,
                controls,
            } => self.engine.set_audio(AudioAttrs {
                src,
                title,
                controls,
            }),
            BridgeMessage::SetYoutube { src, width, height } => {
                self.handle_youtube(src, width, height)
            }
            BridgeMessage::SetVimeo { src, width, height } => {
                self.engine
                    .insert_media(MediaNode::Vimeo(EmbedAttrs { src, width, height }))
            }
            BridgeMessage::SetSoundCloud { src, width, height } => self
                .engine
                .insert_media(MediaNode::SoundCloud(EmbedAttrs { src, width, height })),
            BridgeMessage::SetTwitter { src } => self.handle_twitter(src),
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "engine rejected mutation");
        }
        true
    }

    /// Computes the editor state projection from the live document model.
    ///
    /// Re-derived on every call; the session layer publishes this to the host
    /// after each mutation.
    #[must_use]
    pub fn state(&self) -> EditorState {
        EditorState::project(&self.engine)
    }

    /// Inserts an image node: payload attrs merged with the fixed
    /// presentation defaults from the extension configuration.
    fn handle_media_image(
        &mut self,
        src: String,
        alt: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<()> {
        let defaults = &self.config.image;
        self.engine.insert_media(MediaNode::Image(ImageAttrs {
            src,
            alt,
            width,
            height,
            display: defaults.display.clone(),
            margin: defaults.margin.clone(),
            clear: defaults.clear.clone(),
            float: defaults.float.clone(),
            object_fit: defaults.object_fit.clone(),
        }))
    }

    /// Inserts a YouTube node with the configured playback defaults. Payload
    /// dimensions are forwarded into the node's attrs.
    fn handle_youtube(
        &mut self,
        src: String,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<()> {
        let defaults = &self.config.youtube;
        self.engine.insert_media(MediaNode::Youtube(YoutubeAttrs {
            src,
            width,
            height,
            controls: defaults.controls,
            autoplay: defaults.autoplay,
        }))
    }

    /// Inserts a Twitter node: src plus the configured static style fields
    /// flattened into the attribute map.
    fn handle_twitter(&mut self, src: String) -> Result<()> {
        self.engine.insert_media(MediaNode::Twitter(TwitterAttrs {
            src,
            style: self.config.twitter.style.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryDocument;

    fn handler() -> BridgeHandler<MemoryDocument> {
        BridgeHandler::new(MemoryDocument::new(), ExtensionConfig::default())
    }

    #[test]
    fn image_merges_payload_with_fixed_presentation_defaults() {
        let mut handler = handler();
        assert!(handler.handle_message(BridgeMessage::media_image(
            "https://example.com/a.png",
            Some("a picture".to_string()),
            Some(320),
            None,
        )));

        let state = handler.state();
        assert_eq!(state.current_media.len(), 1);
        let image = &state.current_media[0];
        assert_eq!(image.type_name, "image");
        assert_eq!(image.attrs["src"], "https://example.com/a.png");
        assert_eq!(image.attrs["alt"], "a picture");
        assert_eq!(image.attrs["width"], 320);
        assert_eq!(image.attrs["display"], "block");
        assert_eq!(image.attrs["margin"], "0in");
        assert_eq!(image.attrs["clear"], "none");
        assert_eq!(image.attrs["float"], "unset");
        assert_eq!(image.attrs["objectFit"], "contain");
    }

    #[test]
    fn audio_goes_through_native_engine_operation() {
        let mut handler = handler();
        assert!(handler.handle_message(BridgeMessage::audio(
            "https://example.com/a.mp3",
            Some("clip".to_string()),
            Some(true),
        )));

        let audio = &handler.state().current_media[0];
        assert_eq!(audio.type_name, "audio");
        assert_eq!(audio.attrs["title"], "clip");
        assert_eq!(audio.attrs["controls"], true);
        // Audio nodes carry no dimension attrs.
        assert!(!audio.attrs.contains_key("width"));
    }

    #[test]
    fn youtube_applies_configured_playback_defaults() {
        let mut handler = handler();
        assert!(handler.handle_message(BridgeMessage::youtube("https://youtu.be/abc", None, None)));

        let state = handler.state();
        assert_eq!(state.current_media.len(), 1);
        let youtube = &state.current_media[0];
        assert_eq!(youtube.type_name, "youtube");
        assert_eq!(youtube.attrs["src"], "https://youtu.be/abc");
        assert_eq!(youtube.attrs["controls"], 1);
        assert_eq!(youtube.attrs["autoplay"], 0);
        assert!(!youtube.attrs.contains_key("width"));
    }

    #[test]
    fn youtube_forwards_payload_dimensions() {
        let mut handler = handler();
        handler.handle_message(BridgeMessage::youtube(
            "https://youtu.be/abc",
            Some(640),
            Some(360),
        ));

        let youtube = &handler.state().current_media[0];
        assert_eq!(youtube.attrs["width"], 640);
        assert_eq!(youtube.attrs["height"], 360);
        assert_eq!(youtube.attrs["controls"], 1);
    }

    #[test]
    fn vimeo_and_soundcloud_pass_attrs_through() {
        let mut handler = handler();
        handler.handle_message(BridgeMessage::vimeo("https://vimeo.com/1", Some(500), None));
        handler.handle_message(BridgeMessage::sound_cloud(
            "https://soundcloud.com/a/b",
            None,
            Some(166),
        ));

        let state = handler.state();
        assert_eq!(state.current_media[0].type_name, "vimeo");
        assert_eq!(state.current_media[0].attrs["width"], 500);
        assert_eq!(state.current_media[1].type_name, "soundcloud");
        assert_eq!(state.current_media[1].attrs["height"], 166);
    }

    #[test]
    fn twitter_flattens_configured_static_style() {
        let mut handler = handler();
        handler.handle_message(BridgeMessage::twitter("https://twitter.com/x/status/1"));

        let tweet = &handler.state().current_media[0];
        assert_eq!(tweet.type_name, "twitter");
        assert_eq!(tweet.attrs["src"], "https://twitter.com/x/status/1");
        assert_eq!(tweet.attrs["data-chrome"], "transparent noheader nofooter");
        assert_eq!(tweet.attrs["data-dnt"], "true");
    }

    #[test]
    fn each_mutation_grows_current_media_by_exactly_one() {
        let mut handler = handler();
        let messages = [
            BridgeMessage::media_image("a.png", None, None, None),
            BridgeMessage::audio("a.mp3", None, None),
            BridgeMessage::youtube("https://youtu.be/a", None, None),
            BridgeMessage::vimeo("https://vimeo.com/1", None, None),
            BridgeMessage::sound_cloud("https://soundcloud.com/a", None, None),
            BridgeMessage::twitter("https://twitter.com/x/status/1"),
        ];

        for (i, message) in messages.into_iter().enumerate() {
            let expected_kind = match &message {
                BridgeMessage::SetMediaImage { .. } => "image",
                BridgeMessage::SetAudio { .. } => "audio",
                BridgeMessage::SetYoutube { .. } => "youtube",
                BridgeMessage::SetVimeo { .. } => "vimeo",
                BridgeMessage::SetSoundCloud { .. } => "soundcloud",
                BridgeMessage::SetTwitter { .. } => "twitter",
            };
            assert!(handler.handle_message(message));

            let state = handler.state();
            assert_eq!(state.current_media.len(), i + 1);
            assert_eq!(state.current_media.last().unwrap().type_name, expected_kind);
        }
    }

    #[test]
    fn undecodable_payload_is_not_handled_and_leaves_document_unchanged() {
        let mut handler = handler();
        handler.handle_message(BridgeMessage::twitter("https://twitter.com/x/status/1"));
        let before = handler.state();

        assert!(!handler.handle_payload(r#"{"type":"set-video","payload":{"src":"v.mp4"}}"#));
        assert!(!handler.handle_payload("not json at all"));

        assert_eq!(handler.state(), before);
    }

    #[test]
    fn recognized_payload_dispatches_through_decode_entry_point() {
        let mut handler = handler();
        let handled = handler
            .handle_payload(r#"{"type":"set-youtube","payload":{"src":"https://youtu.be/abc"}}"#);

        assert!(handled);
        let youtube = &handler.state().current_media[0];
        assert_eq!(youtube.attrs["src"], "https://youtu.be/abc");
        assert_eq!(youtube.attrs["controls"], 1);
        assert_eq!(youtube.attrs["autoplay"], 0);
    }

    #[test]
    fn engine_rejection_is_swallowed_but_message_stays_recognized() {
        let mut handler = handler();
        // Empty src violates the memory engine's schema.
        assert!(handler.handle_message(BridgeMessage::twitter("")));
        assert!(handler.state().current_media.is_empty());
    }
}
