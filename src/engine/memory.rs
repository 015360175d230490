//! In-process document engine.
//!
//! This module implements [`MemoryDocument`], a [`DocumentEngine`] backed by a
//! plain ordered node list. It is the engine the default session wiring uses
//! and the reference implementation the bridge is tested against; a real
//! editor engine plugs in behind the same trait.
//!
//! # Document Model
//!
//! The document is a flat sequence of top-level nodes (paragraphs and media
//! nodes). The selection anchor is a gap index between nodes: position `n`
//! sits immediately before the node at index `n`. Inserting places the new
//! node at the anchor and advances the anchor past it, so consecutive inserts
//! land in call order, matching caret-after-insert editor behavior.

use crate::domain::{AudioAttrs, BridgeError, MediaNode, Result};
use crate::engine::backend::{DocumentEngine, NodeSnapshot, SelectionRange};
use serde_json::{Map, Value};

/// A top-level node of the in-memory document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    /// A plain text paragraph.
    Paragraph(String),
    /// An embedded media element.
    Media(MediaNode),
}

impl DocumentNode {
    /// Produces the read-only snapshot of this node.
    fn snapshot(&self) -> NodeSnapshot {
        match self {
            Self::Paragraph(text) => NodeSnapshot {
                type_name: "paragraph".to_string(),
                attrs: Map::new(),
                text: text.clone(),
            },
            Self::Media(node) => {
                // MediaNode serializes internally tagged; splitting the tag out
                // of the flat map yields the snapshot shape.
                let value = serde_json::to_value(node).unwrap_or(Value::Null);
                let mut attrs = match value {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                let type_name = attrs
                    .remove("type")
                    .and_then(|v| v.as_str().map(ToString::to_string))
                    .unwrap_or_default();
                NodeSnapshot {
                    type_name,
                    attrs,
                    text: String::new(),
                }
            }
        }
    }
}

/// An in-process document model with a gap-index selection anchor.
///
/// # Example
///
/// ```rust
/// use mediabridge::engine::{DocumentEngine, MemoryDocument};
/// use mediabridge::domain::{EmbedAttrs, MediaNode};
///
/// let mut doc = MemoryDocument::new();
/// doc.insert_paragraph("hello");
/// doc.insert_media(MediaNode::Vimeo(EmbedAttrs {
///     src: "https://vimeo.com/1".to_string(),
///     width: None,
///     height: None,
/// }))?;
/// assert_eq!(doc.len(), 2);
/// # Ok::<(), mediabridge::domain::BridgeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    /// Top-level nodes in document order.
    nodes: Vec<DocumentNode>,

    /// Selection anchor as a gap index in `0..=nodes.len()`.
    anchor: usize,
}

impl MemoryDocument {
    /// Creates an empty document with the anchor at position 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a paragraph at the anchor and advances the anchor past it.
    pub fn insert_paragraph(&mut self, text: &str) {
        self.nodes
            .insert(self.anchor, DocumentNode::Paragraph(text.to_string()));
        self.anchor += 1;
    }

    /// Moves the selection anchor, clamping it to the document bounds.
    pub fn set_anchor(&mut self, anchor: usize) {
        self.anchor = anchor.min(self.nodes.len());
    }

    /// Inserts a node at the anchor after validating it against the document's
    /// own schema (media nodes must carry a non-empty source locator).
    fn insert_node(&mut self, node: DocumentNode) -> Result<()> {
        if let DocumentNode::Media(ref media) = node {
            if media.src().is_empty() {
                return Err(BridgeError::Engine(format!(
                    "invalid {} node: empty src",
                    media.kind().as_str()
                )));
            }
        }
        self.nodes.insert(self.anchor, node);
        self.anchor += 1;
        Ok(())
    }
}

impl DocumentEngine for MemoryDocument {
    fn insert_media(&mut self, node: MediaNode) -> Result<()> {
        tracing::debug!(kind = node.kind().as_str(), src = node.src(), "inserting media node");
        self.insert_node(DocumentNode::Media(node))
    }

    fn set_audio(&mut self, attrs: AudioAttrs) -> Result<()> {
        tracing::debug!(src = %attrs.src, "setting audio");
        self.insert_node(DocumentNode::Media(MediaNode::Audio(attrs)))
    }

    fn content(&self) -> Vec<NodeSnapshot> {
        self.nodes.iter().map(DocumentNode::snapshot).collect()
    }

    fn selection(&self) -> SelectionRange {
        SelectionRange {
            from: self.anchor,
            to: self.anchor,
        }
    }

    fn node_after_anchor(&self) -> Option<NodeSnapshot> {
        self.nodes.get(self.anchor).map(DocumentNode::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmbedAttrs, VideoAttrs};

    fn embed(src: &str) -> MediaNode {
        MediaNode::Vimeo(EmbedAttrs {
            src: src.to_string(),
            width: None,
            height: None,
        })
    }

    #[test]
    fn insert_at_anchor_preserves_call_order() {
        let mut doc = MemoryDocument::new();
        doc.insert_media(embed("https://vimeo.com/1")).unwrap();
        doc.insert_media(embed("https://vimeo.com/2")).unwrap();

        let content = doc.content();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0].attrs["src"], "https://vimeo.com/1");
        assert_eq!(content[1].attrs["src"], "https://vimeo.com/2");
    }

    #[test]
    fn insert_lands_at_moved_anchor() {
        let mut doc = MemoryDocument::new();
        doc.insert_paragraph("first");
        doc.insert_paragraph("last");
        doc.set_anchor(1);
        doc.insert_media(embed("https://vimeo.com/mid")).unwrap();

        let content = doc.content();
        assert_eq!(content[0].text, "first");
        assert_eq!(content[1].type_name, "vimeo");
        assert_eq!(content[2].text, "last");
    }

    #[test]
    fn anchor_advances_past_inserted_node() {
        let mut doc = MemoryDocument::new();
        doc.insert_paragraph("tail");
        doc.set_anchor(0);
        doc.insert_media(embed("https://vimeo.com/1")).unwrap();

        // Anchor sits between the new node and the paragraph.
        let after = doc.node_after_anchor().unwrap();
        assert_eq!(after.type_name, "paragraph");
        assert_eq!(after.text, "tail");
    }

    #[test]
    fn node_after_anchor_is_none_at_document_end() {
        let mut doc = MemoryDocument::new();
        assert!(doc.node_after_anchor().is_none());

        doc.insert_media(embed("https://vimeo.com/1")).unwrap();
        assert!(doc.node_after_anchor().is_none());

        doc.set_anchor(0);
        assert!(doc.node_after_anchor().is_some());
    }

    #[test]
    fn set_audio_inserts_audio_node() {
        let mut doc = MemoryDocument::new();
        doc.set_audio(AudioAttrs {
            src: "https://example.com/a.mp3".to_string(),
            title: Some("clip".to_string()),
            controls: Some(true),
        })
        .unwrap();

        let content = doc.content();
        assert_eq!(content[0].type_name, "audio");
        assert_eq!(content[0].attrs["title"], "clip");
    }

    #[test]
    fn empty_src_is_rejected_by_engine_schema() {
        let mut doc = MemoryDocument::new();
        let err = doc.insert_media(embed("")).unwrap_err();
        assert!(matches!(err, BridgeError::Engine(_)));
        assert!(doc.is_empty());
    }

    #[test]
    fn video_nodes_snapshot_without_message_support() {
        let mut doc = MemoryDocument::new();
        doc.insert_media(MediaNode::Video(VideoAttrs {
            src: "https://example.com/v.mp4".to_string(),
            width: Some(640),
            height: Some(360),
            controls: Some(true),
        }))
        .unwrap();

        let snapshot = &doc.content()[0];
        assert_eq!(snapshot.type_name, "video");
        assert_eq!(snapshot.attrs["width"], 640);
        assert!(snapshot.text.is_empty());
    }

    #[test]
    fn selection_is_caret_at_anchor() {
        let mut doc = MemoryDocument::new();
        doc.insert_paragraph("a");
        doc.set_anchor(99);

        let selection = doc.selection();
        assert_eq!(selection.from, 1);
        assert_eq!(selection.from, selection.to);
    }
}
