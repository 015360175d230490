//! Core domain types for the bridge.
//!
//! This module contains the crate's foundational types: the closed media node
//! model shared by the dispatch and projection layers, and the centralized
//! error type.
//!
//! # Modules
//!
//! - [`error`]: `BridgeError` and the crate-wide `Result` alias
//! - [`media`]: `MediaKind`, `MediaNode`, and the per-variant attribute structs

pub mod error;
pub mod media;

pub use error::{BridgeError, Result};
pub use media::{
    AudioAttrs, EmbedAttrs, ImageAttrs, MediaKind, MediaNode, TwitterAttrs, VideoAttrs,
    YoutubeAttrs,
};
