//! Mediabridge: a message bridge adding multimedia embedding to a sandboxed
//! rich-text editing context.
//!
//! Mediabridge lets native host code request document mutations (insert an
//! image, embed a tweet) inside a document-editing context it cannot touch
//! directly, and lets that context report selection and content state back:
//!
//! - Typed host surface for images, audio, YouTube, Vimeo, SoundCloud, and
//!   Twitter embeds
//! - A closed, tagged message set with exhaustive-match dispatch
//! - A derived, read-only editor state projection (embedded media list plus
//!   the currently selected element) recomputed after every mutation
//! - A narrow engine trait so any document model can sit behind the bridge
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs or embedding application)       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Layer (host/)                                 │  ← Typed calls
//! │  - HostAdapter call surface                         │
//! │  - Ordered channel transport                        │
//! └─────────────────────────────────────────────────────┘
//!                        │  serialized messages / state
//! ┌─────────────────────────────────────────────────────┐
//! │  Bridge Layer (bridge/)                             │  ← Dispatch
//! │  - Message taxonomy                                 │
//! │  - Exhaustive-match dispatch                        │
//! │  - State projection                                 │
//! │  - Caller-owned session                             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine Seam (engine/)                              │  ← Document model
//! │  - DocumentEngine trait                             │
//! │  - MemoryDocument implementation                    │
//! └─────────────────────────────────────────────────────┘
//!
//!   domain/ (media model, errors)   config/ (static presentation defaults)
//!   observability/ (tracing)
//! ```
//!
//! # Control Flow
//!
//! Host adapter call → serialized message → bridge handler mutates the
//! document model → projection recomputed → state delivered back to the host
//! on its own channel. Messages are ordered and delivered at most once; the
//! handler processes them strictly sequentially and relies on the transport
//! for serialization.
//!
//! # Example
//!
//! ```rust
//! use mediabridge::{initialize, Config};
//! use mediabridge::host::EmbedOptions;
//!
//! let (mut adapter, mut session) = initialize(&Config::default());
//!
//! adapter.set_youtube("https://youtu.be/abc", EmbedOptions::default())?;
//! session.pump()?;
//!
//! let state = adapter.state()?.unwrap();
//! assert_eq!(state.current_media.len(), 1);
//! assert_eq!(state.current_media[0].type_name, "youtube");
//! # Ok::<(), mediabridge::domain::BridgeError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Closed variants over runtime registration
//!
//! The original extension pattern registered capabilities by name at
//! configuration time. Here both the message set and the media node model are
//! closed enums with exhaustive-match dispatch; an unknown inbound payload
//! fails to decode and is reported as "not handled" without touching the
//! document.
//!
//! ## Caller-owned sessions
//!
//! There is no global editor instance. [`initialize`] returns an explicit
//! ([`HostAdapter`], [`EditorSession`]) pair and the caller owns both; the
//! document model is reached only through the [`engine::DocumentEngine`]
//! handle inside the session.
//!
//! ## Pass-through validation boundary
//!
//! The bridge does not validate payloads. A malformed payload reaches the
//! engine and fails under the engine's own contract; the handler logs the
//! rejection and moves on.

pub mod bridge;
pub mod config;
pub mod domain;
pub mod engine;
pub mod host;
pub mod observability;

pub use bridge::{BridgeHandler, BridgeMessage, EditorSession, EditorState};
pub use config::ExtensionConfig;
pub use domain::{BridgeError, MediaKind, MediaNode, Result};
pub use engine::{DocumentEngine, MemoryDocument};
pub use host::HostAdapter;

use std::collections::BTreeMap;

/// Runtime configuration for bridge initialization.
///
/// Values are typically provided by the embedding host as a string map and
/// parsed with [`Config::from_map`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a TOML file overriding the built-in extension configuration.
    ///
    /// See [`ExtensionConfig::from_file`] for the format. Default: built-in
    /// presentation defaults.
    pub extension_file: Option<String>,

    /// Tracing level for diagnostics.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// Unknown keys are ignored; missing keys fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mediabridge::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.extension_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            extension_file: map.get("extension_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }
}

/// Initializes a wired bridge over the in-process channel transport.
///
/// Creates a connected ([`HostAdapter`], [`EditorSession`]) pair backed by a
/// fresh [`MemoryDocument`]. The extension configuration is loaded from
/// `config.extension_file` when set, falling back to the built-in defaults if
/// the file cannot be loaded.
///
/// # Parameters
///
/// * `config` - Runtime configuration
///
/// # Example
///
/// ```rust
/// use mediabridge::{initialize, Config};
///
/// let (adapter, session) = initialize(&Config::default());
/// assert!(session.state().current_media.is_empty());
/// # let _ = adapter;
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (HostAdapter, EditorSession<MemoryDocument>) {
    tracing::debug!("initializing mediabridge session");

    let extension = config.extension_file.as_ref().map_or_else(
        ExtensionConfig::default,
        |extension_file| {
            ExtensionConfig::from_file(extension_file).unwrap_or_else(|e| {
                tracing::debug!(
                    extension_file = %extension_file,
                    error = %e,
                    "failed to load extension config, using defaults"
                );
                ExtensionConfig::default()
            })
        },
    );

    let (host, editor) = host::transport::channel();
    let handler = BridgeHandler::new(MemoryDocument::new(), extension);

    (HostAdapter::new(host), EditorSession::new(handler, editor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AudioOptions, EmbedOptions, ImageOptions};

    #[test]
    fn end_to_end_flow_matches_bridge_contract() {
        let (mut adapter, mut session) = initialize(&Config::default());

        adapter
            .set_media_image("a.png", ImageOptions::default())
            .unwrap();
        adapter
            .set_audio("a.mp3", AudioOptions::default())
            .unwrap();
        adapter
            .set_youtube("https://youtu.be/abc", EmbedOptions::default())
            .unwrap();
        adapter
            .set_vimeo("https://vimeo.com/1", EmbedOptions { width: Some(640), height: None })
            .unwrap();
        adapter
            .set_sound_cloud("https://soundcloud.com/a/b", EmbedOptions::default())
            .unwrap();
        adapter.set_twitter("https://twitter.com/x/status/1").unwrap();

        assert_eq!(session.pump().unwrap(), 6);

        let state = adapter.state().unwrap().unwrap();
        let kinds: Vec<&str> = state
            .current_media
            .iter()
            .map(|m| m.type_name.as_str())
            .collect();
        assert_eq!(
            kinds,
            ["image", "audio", "youtube", "vimeo", "soundcloud", "twitter"]
        );

        let youtube = &state.current_media[2];
        assert_eq!(youtube.attrs["src"], "https://youtu.be/abc");
        assert_eq!(youtube.attrs["controls"], 1);
        assert_eq!(youtube.attrs["autoplay"], 0);

        let tweet = &state.current_media[5];
        assert_eq!(tweet.attrs["data-dnt"], "true");

        // Inserts left the anchor at document end.
        assert!(state.selected_element.is_none());
    }

    #[test]
    fn config_from_map_ignores_unknown_keys() {
        let map = BTreeMap::from([
            ("extension_file".to_string(), "/tmp/ext.toml".to_string()),
            ("unrelated".to_string(), "x".to_string()),
        ]);

        let config = Config::from_map(&map);
        assert_eq!(config.extension_file.as_deref(), Some("/tmp/ext.toml"));
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn initialize_falls_back_to_default_extension_config() {
        let config = Config {
            extension_file: Some("/nonexistent/extension.toml".to_string()),
            ..Default::default()
        };

        let (mut adapter, mut session) = initialize(&config);
        adapter.set_twitter("https://twitter.com/x/status/1").unwrap();
        session.pump().unwrap();

        let state = adapter.state().unwrap().unwrap();
        assert_eq!(
            state.current_media[0].attrs["data-chrome"],
            "transparent noheader nofooter"
        );
    }
}
