//! Document engine abstraction.
//!
//! This module defines the [`DocumentEngine`] trait that abstracts over the
//! underlying rich-text document model. The document is owned entirely by the
//! engine; the bridge never holds its own copy and only reads and writes
//! through this interface.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal and focused on the operations the bridge
//! actually performs, not a generic document API. Each method maps directly to
//! a use case in the dispatch or projection layer.

use crate::domain::{AudioAttrs, MediaNode, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A read-only snapshot of one top-level document node.
///
/// Snapshots are what the engine exposes to the projection layer: the node's
/// type tag, its raw attribute map, and its text content. Media nodes carry an
/// empty `text`; text nodes carry an empty attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The node's type tag (e.g. `"paragraph"`, `"youtube"`).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Raw attribute map of the node.
    pub attrs: Map<String, Value>,

    /// Concatenated text content of the node.
    pub text: String,
}

/// The current selection as a half-open position range `[from, to)`.
///
/// A caret selection has `from == to`. Positions are engine-defined offsets;
/// the bridge only relays them into the state projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    /// Inclusive start position of the selection.
    pub from: usize,

    /// Exclusive end position of the selection.
    pub to: usize,
}

/// Abstraction over the underlying rich-text document model.
///
/// Implementations own the document tree and the selection. The bridge issues
/// sequential, one-at-a-time mutations through this trait and re-derives its
/// state projection from the query methods after each one; it does not enforce
/// mutual exclusion itself.
///
/// # Implementations
///
/// - [`MemoryDocument`](crate::engine::MemoryDocument): in-process node list,
///   used by the default session wiring and by tests
pub trait DocumentEngine {
    /// Inserts a media node at the current selection anchor.
    ///
    /// The node becomes a top-level document node; the anchor moves past it so
    /// consecutive inserts preserve call order.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the mutation, e.g. for a payload
    /// that is invalid under the engine's own schema. The bridge does not
    /// validate payloads before calling this.
    fn insert_media(&mut self, node: MediaNode) -> Result<()>;

    /// Invokes the engine's native "set audio" operation with the given attrs.
    ///
    /// Unlike the generic [`insert_media`](Self::insert_media) path, audio
    /// embedding is delegated to the engine's own audio command.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the mutation.
    fn set_audio(&mut self, attrs: AudioAttrs) -> Result<()>;

    /// Returns snapshots of all top-level nodes in document order.
    fn content(&self) -> Vec<NodeSnapshot>;

    /// Returns the current selection range.
    fn selection(&self) -> SelectionRange;

    /// Returns a snapshot of the node immediately following the selection
    /// anchor, or `None` if no node follows (e.g. selection at document end).
    fn node_after_anchor(&self) -> Option<NodeSnapshot>;
}
