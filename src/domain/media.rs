//! Media node domain model.
//!
//! This module defines the closed set of embeddable media variants ([`MediaKind`])
//! and the typed document node representation ([`MediaNode`]) the bridge inserts
//! into the document model. Every media node carries a source locator plus the
//! presentation attributes that are meaningful for its variant; the variant set
//! is fixed and dispatch over it is always exhaustive.
//!
//! # Serialization
//!
//! `MediaNode` serializes internally tagged, producing the flat
//! `{"type": "...", ...attrs}` attribute shape the document model and the state
//! projection both use:
//!
//! ```rust
//! use mediabridge::domain::{MediaNode, YoutubeAttrs};
//!
//! let node = MediaNode::Youtube(YoutubeAttrs {
//!     src: "https://youtu.be/abc".to_string(),
//!     width: None,
//!     height: None,
//!     controls: 1,
//!     autoplay: 0,
//! });
//! let value = serde_json::to_value(&node).unwrap();
//! assert_eq!(value["type"], "youtube");
//! assert_eq!(value["controls"], 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of embeddable media variants.
///
/// Every media node's type tag is one of these variants; the projection layer
/// uses the same set to decide which top-level document nodes count as media.
/// The lowercase tag strings are stable wire values shared with the document
/// model (`"image"`, `"video"`, `"audio"`, `"youtube"`, `"vimeo"`,
/// `"soundcloud"`, `"twitter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A bitmap image (`<img>`-style element).
    Image,
    /// A hosted video file played through the engine's video element.
    Video,
    /// An audio clip played through the engine's audio element.
    Audio,
    /// An embedded YouTube player iframe.
    Youtube,
    /// An embedded Vimeo player iframe.
    Vimeo,
    /// An embedded SoundCloud player iframe.
    SoundCloud,
    /// An embedded tweet.
    Twitter,
}

impl MediaKind {
    /// All media variants, in a fixed order used for tag-membership checks.
    pub const ALL: [Self; 7] = [
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::Youtube,
        Self::Vimeo,
        Self::SoundCloud,
        Self::Twitter,
    ];

    /// Returns the stable lowercase type tag for this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::SoundCloud => "soundcloud",
            Self::Twitter => "twitter",
        }
    }

    /// Returns `true` if `tag` is the type tag of one of the media variants.
    ///
    /// Used by the state projection to filter top-level document nodes down to
    /// embedded media.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mediabridge::domain::MediaKind;
    ///
    /// assert!(MediaKind::is_media_tag("soundcloud"));
    /// assert!(!MediaKind::is_media_tag("paragraph"));
    /// ```
    #[must_use]
    pub fn is_media_tag(tag: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.as_str() == tag)
    }
}

/// Attributes of an inserted image node.
///
/// The optional fields come from the host's payload; the remaining presentation
/// fields are fixed defaults supplied from [`ExtensionConfig`] at dispatch time
/// (`display=block`, `margin="0in"`, `clear=none`, `float=unset`,
/// `objectFit=contain` out of the box).
///
/// [`ExtensionConfig`]: crate::config::ExtensionConfig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttrs {
    /// Source locator for the image.
    pub src: String,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Display width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Display height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// CSS display mode.
    pub display: String,

    /// CSS margin.
    pub margin: String,

    /// CSS clear behavior.
    pub clear: String,

    /// CSS float behavior.
    pub float: String,

    /// CSS object-fit behavior.
    #[serde(rename = "objectFit")]
    pub object_fit: String,
}

/// Attributes of a video node.
///
/// No bridge message currently constructs video nodes (the host surface never
/// shipped one), but the variant remains part of the media set: documents may
/// already contain video nodes and the projection must report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAttrs {
    /// Source locator for the video file.
    pub src: String,

    /// Display width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Display height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Whether playback controls are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<bool>,
}

/// Attributes of an audio node.
///
/// Audio nodes carry no width/height semantics; sizing is the engine's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAttrs {
    /// Source locator for the audio clip.
    pub src: String,

    /// Human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether playback controls are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<bool>,
}

/// Attributes of an embedded YouTube player node.
///
/// `controls` and `autoplay` are playback defaults taken from the extension
/// configuration (`1` and `0` respectively out of the box); width and height
/// are forwarded from the host payload when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeAttrs {
    /// Source locator for the video.
    pub src: String,

    /// Player width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Player height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Whether player controls are shown (`1`) or hidden (`0`).
    pub controls: u8,

    /// Whether playback starts automatically (`1`) or not (`0`).
    pub autoplay: u8,
}

/// Attributes shared by the Vimeo and SoundCloud embed nodes.
///
/// Both variants take a source locator plus optional dimensions and nothing
/// else; the payload is passed to the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAttrs {
    /// Source locator for the embed.
    pub src: String,

    /// Embed width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Embed height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Attributes of an embedded tweet node.
///
/// The configured static Twitter presentation style is flattened directly into
/// the attribute map alongside `src`, so a serialized Twitter node reads
/// `{"type": "twitter", "src": ..., "data-dnt": "true", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterAttrs {
    /// Source locator for the tweet.
    pub src: String,

    /// Static presentation fields copied from the extension configuration.
    #[serde(flatten)]
    pub style: BTreeMap<String, String>,
}

/// A typed media document node.
///
/// This is the closed tagged representation of an embedded multimedia element:
/// one variant per [`MediaKind`], each carrying exactly the attribute struct
/// that is meaningful for that variant. Serialization is internally tagged so
/// a node flattens to the document model's `{"type", ...attrs}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaNode {
    /// A bitmap image.
    Image(ImageAttrs),
    /// A hosted video file.
    Video(VideoAttrs),
    /// An audio clip.
    Audio(AudioAttrs),
    /// An embedded YouTube player.
    Youtube(YoutubeAttrs),
    /// An embedded Vimeo player.
    Vimeo(EmbedAttrs),
    /// An embedded SoundCloud player.
    SoundCloud(EmbedAttrs),
    /// An embedded tweet.
    Twitter(TwitterAttrs),
}

impl MediaNode {
    /// Returns the [`MediaKind`] of this node.
    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::Image(_) => MediaKind::Image,
            Self::Video(_) => MediaKind::Video,
            Self::Audio(_) => MediaKind::Audio,
            Self::Youtube(_) => MediaKind::Youtube,
            Self::Vimeo(_) => MediaKind::Vimeo,
            Self::SoundCloud(_) => MediaKind::SoundCloud,
            Self::Twitter(_) => MediaKind::Twitter,
        }
    }

    /// Returns the node's source locator.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Image(attrs) => &attrs.src,
            Self::Video(attrs) => &attrs.src,
            Self::Audio(attrs) => &attrs.src,
            Self::Youtube(attrs) => &attrs.src,
            Self::Vimeo(attrs) | Self::SoundCloud(attrs) => &attrs.src,
            Self::Twitter(attrs) => &attrs.src,
        }
    }
}
