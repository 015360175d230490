//! Bridge message taxonomy.
//!
//! This module defines [`BridgeMessage`], the closed set of requests the host
//! sends into the document-editing context. Each variant corresponds to one
//! media operation and carries exactly the payload needed to construct the
//! matching media node. Messages are created by the host adapter per user
//! action and consumed exactly once by the bridge handler; nothing is
//! persisted.
//!
//! # Wire Format
//!
//! Messages are adjacently tagged JSON, matching the bridge's established wire
//! contract:
//!
//! ```json
//! {"type": "set-youtube", "payload": {"src": "https://youtu.be/abc"}}
//! ```

use serde::{Deserialize, Serialize};

/// Macro to generate constructors for the same-shaped embed variants.
///
/// YouTube, Vimeo, and SoundCloud requests all carry a source locator plus
/// optional dimensions; this generates one convenience constructor per
/// variant.
macro_rules! embed_message_builders {
    ($($builder_name:ident($variant:ident)),* $(,)?) => {
        impl BridgeMessage {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` message.")]
                #[must_use]
                pub fn $builder_name(
                    src: impl Into<String>,
                    width: Option<u32>,
                    height: Option<u32>,
                ) -> Self {
                    Self::$variant {
                        src: src.into(),
                        width,
                        height,
                    }
                }
            )*
        }
    };
}

embed_message_builders! {
    youtube(SetYoutube),
    vimeo(SetVimeo),
    sound_cloud(SetSoundCloud),
}

/// Requests sent from the host into the document-editing context.
///
/// A closed, tagged set of request variants, one per media operation. The
/// handler dispatches over this enum exhaustively; an inbound payload whose
/// tag is outside this set fails to decode and is reported as "not handled"
/// without touching the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum BridgeMessage {
    /// Insert an image node with fixed presentation defaults plus these attrs.
    SetMediaImage {
        /// Source locator for the image.
        src: String,

        /// Alternative text.
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,

        /// Display width in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,

        /// Display height in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },

    /// Invoke the engine's native "set audio" operation.
    SetAudio {
        /// Source locator for the audio clip.
        src: String,

        /// Human-readable title.
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,

        /// Whether playback controls are shown.
        #[serde(skip_serializing_if = "Option::is_none")]
        controls: Option<bool>,
    },

    /// Insert a YouTube node with configured playback defaults.
    SetYoutube {
        /// Source locator for the video.
        src: String,

        /// Player width in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,

        /// Player height in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },

    /// Insert a Vimeo node with the given attrs.
    SetVimeo {
        /// Source locator for the embed.
        src: String,

        /// Embed width in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,

        /// Embed height in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },

    /// Insert a SoundCloud node with the given attrs.
    #[serde(rename = "set-soundcloud")]
    SetSoundCloud {
        /// Source locator for the embed.
        src: String,

        /// Embed width in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,

        /// Embed height in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },

    /// Insert a Twitter node with the configured static style.
    SetTwitter {
        /// Source locator for the tweet.
        src: String,
    },
}

impl BridgeMessage {
    /// Creates a `SetMediaImage` message.
    #[must_use]
    pub fn media_image(
        src: impl Into<String>,
        alt: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        Self::SetMediaImage {
            src: src.into(),
            alt,
            width,
            height,
        }
    }

    /// Creates a `SetAudio` message.
    #[must_use]
    pub fn audio(src: impl Into<String>, title: Option<String>, controls: Option<bool>) -> Self {
        Self::SetAudio {
            src: src.into(),
            title,
            controls,
        }
    }

    /// Creates a `SetTwitter` message.
    #[must_use]
    pub fn twitter(src: impl Into<String>) -> Self {
        Self::SetTwitter { src: src.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_are_stable() {
        let cases = [
            (
                BridgeMessage::media_image("s", None, None, None),
                "set-media-image",
            ),
            (BridgeMessage::audio("s", None, None), "set-audio"),
            (BridgeMessage::youtube("s", None, None), "set-youtube"),
            (BridgeMessage::vimeo("s", None, None), "set-vimeo"),
            (
                BridgeMessage::sound_cloud("s", None, None),
                "set-soundcloud",
            ),
            (BridgeMessage::twitter("s"), "set-twitter"),
        ];

        for (message, expected_tag) in cases {
            let value = serde_json::to_value(&message).unwrap();
            assert_eq!(value["type"], expected_tag);
            assert_eq!(value["payload"]["src"], "s");
        }
    }

    #[test]
    fn decodes_host_shaped_payload() {
        let payload = r#"{"type":"set-media-image","payload":{"src":"a.png","alt":"pic","width":320}}"#;
        let message: BridgeMessage = serde_json::from_str(payload).unwrap();
        assert_eq!(
            message,
            BridgeMessage::media_image("a.png", Some("pic".to_string()), Some(320), None)
        );
    }

    #[test]
    fn unknown_tag_fails_to_decode() {
        let payload = r#"{"type":"set-video","payload":{"src":"v.mp4"}}"#;
        assert!(serde_json::from_str::<BridgeMessage>(payload).is_err());
    }
}
