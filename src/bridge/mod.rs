//! The document-context side of the bridge.
//!
//! This module owns the bridge's message taxonomy, the dispatch of each
//! message into a document mutation, the derived editor state projection, and
//! the caller-owned session object that ties them to a transport.
//!
//! # Control Flow
//!
//! ```text
//! Host Adapter call → serialized message → BridgeHandler mutates document
//!     → projection recomputed → state delivered back to Host Adapter
//! ```
//!
//! # Modules
//!
//! - [`messages`]: the closed [`BridgeMessage`] request set and wire format
//! - [`handler`]: exhaustive-match dispatch into the engine seam
//! - [`projection`]: the read-only [`EditorState`] snapshot
//! - [`session`]: [`EditorSession`], pumping messages and publishing state

pub mod handler;
pub mod messages;
pub mod projection;
pub mod session;

pub use handler::BridgeHandler;
pub use messages::BridgeMessage;
pub use projection::{EditorState, MediaSummary, SelectedElement};
pub use session::EditorSession;
