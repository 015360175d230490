//! The native (host) side of the bridge.
//!
//! # Modules
//!
//! - [`adapter`]: [`HostAdapter`], the typed call surface posting bridge
//!   messages and observing state projections
//! - [`transport`]: the ordered channel seam connecting host and editing
//!   context

pub mod adapter;
pub mod transport;

pub use adapter::{AudioOptions, EmbedOptions, HostAdapter, ImageOptions};
pub use transport::{BridgeTransport, EditorEndpoint, HostEndpoint};
