//! Static configuration consumed by the bridge at construction.
//!
//! # Modules
//!
//! - [`extension`]: per-variant presentation defaults (CSS classes, iframe
//!   permission strings, fixed node attributes), with built-in defaults and
//!   optional TOML overrides

pub mod extension;

pub use extension::ExtensionConfig;
