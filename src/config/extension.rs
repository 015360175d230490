//! Static per-variant presentation configuration.
//!
//! This module defines [`ExtensionConfig`], the declarative configuration the
//! bridge handler consumes at construction: CSS classes, iframe permission
//! strings, fixed presentation attributes for inserted images, YouTube playback
//! defaults, and the static style map flattened into Twitter nodes. The
//! configuration is fixed for the lifetime of a session; it is initialization
//! data, not a runtime interface.
//!
//! Built-in defaults cover the stock editor styling. A custom configuration can
//! be loaded from a TOML file, overriding only the tables and keys it names.
//!
//! # TOML Format
//!
//! ```toml
//! [image]
//! class = "media-image"
//! margin = "0in"
//!
//! [youtube]
//! controls = 1
//! autoplay = 0
//! allow = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
//!
//! [twitter.style]
//! data-chrome = "transparent noheader nofooter"
//! data-dnt = "true"
//! ```

use crate::domain::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn default_image_class() -> String {
    "media-image".to_string()
}

fn default_image_display() -> String {
    "block".to_string()
}

fn default_image_margin() -> String {
    "0in".to_string()
}

fn default_image_clear() -> String {
    "none".to_string()
}

fn default_image_float() -> String {
    "unset".to_string()
}

fn default_image_object_fit() -> String {
    "contain".to_string()
}

fn default_video_class() -> String {
    "media-video".to_string()
}

fn default_audio_class() -> String {
    "media-audio".to_string()
}

fn default_youtube_class() -> String {
    "media-youtube".to_string()
}

fn default_youtube_allow() -> String {
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
        .to_string()
}

fn default_youtube_controls() -> u8 {
    1
}

fn default_vimeo_class() -> String {
    "media-vimeo".to_string()
}

fn default_soundcloud_class() -> String {
    "media-soundcloud".to_string()
}

fn default_twitter_class() -> String {
    "media-twitter twitter-tweet".to_string()
}

fn default_twitter_style() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "data-chrome".to_string(),
            "transparent noheader nofooter".to_string(),
        ),
        ("data-dnt".to_string(), "true".to_string()),
    ])
}

fn default_true() -> bool {
    true
}

/// Presentation defaults for image nodes.
///
/// The CSS-like fields (`display`, `margin`, `clear`, `float`, `object_fit`)
/// are the fixed presentation attributes merged into every inserted image node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDefaults {
    /// CSS class applied to rendered image elements.
    #[serde(default = "default_image_class")]
    pub class: String,

    /// Whether rendered images expose a resize gripper.
    #[serde(default = "default_true")]
    pub resize_gripper: bool,

    /// Whether rendered images are draggable.
    #[serde(default = "default_true")]
    pub draggable: bool,

    /// Fixed display mode for inserted image nodes.
    #[serde(default = "default_image_display")]
    pub display: String,

    /// Fixed margin for inserted image nodes.
    #[serde(default = "default_image_margin")]
    pub margin: String,

    /// Fixed clear behavior for inserted image nodes.
    #[serde(default = "default_image_clear")]
    pub clear: String,

    /// Fixed float behavior for inserted image nodes.
    #[serde(default = "default_image_float")]
    pub float: String,

    /// Fixed object-fit behavior for inserted image nodes.
    #[serde(default = "default_image_object_fit")]
    pub object_fit: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            class: default_image_class(),
            resize_gripper: true,
            draggable: true,
            display: default_image_display(),
            margin: default_image_margin(),
            clear: default_image_clear(),
            float: default_image_float(),
            object_fit: default_image_object_fit(),
        }
    }
}

/// Presentation defaults for video nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDefaults {
    /// CSS class applied to rendered video elements.
    #[serde(default = "default_video_class")]
    pub class: String,

    /// Whether rendered videos expose a resize gripper.
    #[serde(default = "default_true")]
    pub resize_gripper: bool,

    /// Whether rendered videos show playback controls.
    #[serde(default = "default_true")]
    pub controls: bool,
}

impl Default for VideoDefaults {
    fn default() -> Self {
        Self {
            class: default_video_class(),
            resize_gripper: true,
            controls: true,
        }
    }
}

/// Presentation defaults for audio nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDefaults {
    /// CSS class applied to rendered audio elements.
    #[serde(default = "default_audio_class")]
    pub class: String,

    /// Whether rendered audio players expose a resize gripper.
    #[serde(default = "default_true")]
    pub resize_gripper: bool,

    /// Whether rendered audio players show playback controls.
    #[serde(default = "default_true")]
    pub controls: bool,
}

impl Default for AudioDefaults {
    fn default() -> Self {
        Self {
            class: default_audio_class(),
            resize_gripper: true,
            controls: true,
        }
    }
}

/// Presentation and playback defaults for YouTube embed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeDefaults {
    /// CSS class applied to rendered YouTube iframes.
    #[serde(default = "default_youtube_class")]
    pub class: String,

    /// Whether rendered embeds expose a resize gripper.
    #[serde(default = "default_true")]
    pub resize_gripper: bool,

    /// Whether the iframe may enter fullscreen.
    #[serde(default = "default_true")]
    pub allowfullscreen: bool,

    /// Iframe permission string (`allow` attribute).
    #[serde(default = "default_youtube_allow")]
    pub allow: String,

    /// Playback default merged into inserted nodes: show player controls.
    #[serde(default = "default_youtube_controls")]
    pub controls: u8,

    /// Playback default merged into inserted nodes: start automatically.
    #[serde(default)]
    pub autoplay: u8,
}

impl Default for YoutubeDefaults {
    fn default() -> Self {
        Self {
            class: default_youtube_class(),
            resize_gripper: true,
            allowfullscreen: true,
            allow: default_youtube_allow(),
            controls: 1,
            autoplay: 0,
        }
    }
}

/// Presentation defaults for Vimeo embed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VimeoDefaults {
    /// CSS class applied to rendered Vimeo iframes.
    #[serde(default = "default_vimeo_class")]
    pub class: String,

    /// Whether rendered embeds expose a resize gripper.
    #[serde(default = "default_true")]
    pub resize_gripper: bool,
}

impl Default for VimeoDefaults {
    fn default() -> Self {
        Self {
            class: default_vimeo_class(),
            resize_gripper: true,
        }
    }
}

/// Presentation defaults for SoundCloud embed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCloudDefaults {
    /// CSS class applied to rendered SoundCloud iframes.
    #[serde(default = "default_soundcloud_class")]
    pub class: String,

    /// Whether rendered embeds expose a resize gripper.
    #[serde(default = "default_true")]
    pub resize_gripper: bool,
}

impl Default for SoundCloudDefaults {
    fn default() -> Self {
        Self {
            class: default_soundcloud_class(),
            resize_gripper: true,
        }
    }
}

/// Presentation defaults for Twitter embed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterDefaults {
    /// CSS class applied to rendered tweet containers.
    #[serde(default = "default_twitter_class")]
    pub class: String,

    /// Whether pasting a tweet URL converts it into an embed.
    #[serde(default = "default_true")]
    pub add_paste_handler: bool,

    /// Whether tweets render inline with text rather than as blocks.
    #[serde(default)]
    pub inline: bool,

    /// Static style fields flattened into every inserted Twitter node's
    /// attribute map.
    #[serde(default = "default_twitter_style")]
    pub style: BTreeMap<String, String>,
}

impl Default for TwitterDefaults {
    fn default() -> Self {
        Self {
            class: default_twitter_class(),
            add_paste_handler: true,
            inline: false,
            style: default_twitter_style(),
        }
    }
}

/// Complete per-variant presentation configuration for the bridge.
///
/// Consumed once by [`BridgeHandler`](crate::bridge::BridgeHandler) at
/// construction; never varied at runtime. The built-in [`Default`] mirrors the
/// stock editor configuration, and [`ExtensionConfig::from_file`] loads TOML
/// overrides on top of it.
///
/// # Example
///
/// ```rust
/// use mediabridge::config::ExtensionConfig;
///
/// let config = ExtensionConfig::default();
/// assert_eq!(config.youtube.controls, 1);
/// assert_eq!(config.image.margin, "0in");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtensionConfig {
    /// Image presentation defaults.
    #[serde(default)]
    pub image: ImageDefaults,

    /// Video presentation defaults.
    #[serde(default)]
    pub video: VideoDefaults,

    /// Audio presentation defaults.
    #[serde(default)]
    pub audio: AudioDefaults,

    /// YouTube presentation and playback defaults.
    #[serde(default)]
    pub youtube: YoutubeDefaults,

    /// Vimeo presentation defaults.
    #[serde(default)]
    pub vimeo: VimeoDefaults,

    /// SoundCloud presentation defaults.
    #[serde(default)]
    pub soundcloud: SoundCloudDefaults,

    /// Twitter presentation defaults and static node style.
    #[serde(default)]
    pub twitter: TwitterDefaults,
}

impl ExtensionConfig {
    /// Loads an extension configuration from a TOML file.
    ///
    /// Tables and keys absent from the file keep their built-in defaults, so a
    /// file may override a single field without restating the rest.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Io`] if the file cannot be read and
    /// [`BridgeError::Config`] if it is not valid TOML for this schema.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| BridgeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_mirror_stock_configuration() {
        let config = ExtensionConfig::default();

        assert_eq!(config.image.class, "media-image");
        assert_eq!(config.image.display, "block");
        assert_eq!(config.image.margin, "0in");
        assert_eq!(config.image.clear, "none");
        assert_eq!(config.image.float, "unset");
        assert_eq!(config.image.object_fit, "contain");

        assert_eq!(config.youtube.controls, 1);
        assert_eq!(config.youtube.autoplay, 0);
        assert!(config.youtube.allow.contains("picture-in-picture"));

        assert_eq!(config.twitter.class, "media-twitter twitter-tweet");
        assert_eq!(
            config.twitter.style.get("data-chrome").map(String::as_str),
            Some("transparent noheader nofooter")
        );
        assert_eq!(
            config.twitter.style.get("data-dnt").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn from_file_overrides_only_named_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[youtube]\nautoplay = 1\n\n[twitter.style]\ndata-dnt = \"false\"\n"
        )
        .unwrap();

        let config = ExtensionConfig::from_file(file.path()).unwrap();

        assert_eq!(config.youtube.autoplay, 1);
        // Unnamed keys in a named table keep their defaults.
        assert_eq!(config.youtube.controls, 1);
        assert_eq!(config.youtube.class, "media-youtube");
        // Unnamed tables keep their defaults entirely.
        assert_eq!(config.image, ImageDefaults::default());

        assert_eq!(
            config.twitter.style.get("data-dnt").map(String::as_str),
            Some("false")
        );
    }

    #[test]
    fn from_file_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[youtube\nautoplay = ").unwrap();

        let err = ExtensionConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn from_file_missing_file_is_io_error() {
        let err = ExtensionConfig::from_file("/nonexistent/extension.toml").unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }
}
