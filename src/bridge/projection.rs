//! Editor state projection.
//!
//! This module computes [`EditorState`], the derived, read-only snapshot the
//! bridge delivers back to the host after every document change. The
//! projection is a pure read of the engine: it is recomputed from the live
//! document model, never mutated independently, and never cached beyond the
//! current document revision.
//!
//! # Fields
//!
//! - `current_media`: summaries of the top-level nodes whose type tag is in
//!   the fixed media-variant set, in document order
//! - `selected_element`: the node immediately following the selection anchor,
//!   or `None` if nothing follows (e.g. selection at document end)

use crate::domain::MediaKind;
use crate::engine::{DocumentEngine, SelectionRange};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary of one embedded media node: its type tag plus its raw attributes,
/// flattened to the document model's `{type, ...attrs}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSummary {
    /// The node's media type tag.
    #[serde(rename = "type")]
    pub type_name: String,

    /// The node's raw attributes.
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// Summary of the node immediately following the selection anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedElement {
    /// The node's type tag.
    #[serde(rename = "type")]
    pub type_name: String,

    /// The node's raw attributes.
    pub attrs: Map<String, Value>,

    /// The node's text content.
    pub text: String,

    /// The current selection as a half-open `[from, to)` range.
    pub position: SelectionRange,
}

/// The derived, read-only editor state delivered to the host.
///
/// # Example
///
/// ```rust
/// use mediabridge::bridge::EditorState;
/// use mediabridge::engine::MemoryDocument;
///
/// let state = EditorState::project(&MemoryDocument::new());
/// assert!(state.current_media.is_empty());
/// assert!(state.selected_element.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorState {
    /// Embedded media summaries in document order.
    #[serde(rename = "currentMedia")]
    pub current_media: Vec<MediaSummary>,

    /// The node immediately following the selection anchor, if any.
    #[serde(rename = "selectedElement")]
    pub selected_element: Option<SelectedElement>,
}

impl EditorState {
    /// Computes the projection from the engine's current document and
    /// selection.
    ///
    /// Pure read: calling this twice without an intervening mutation yields
    /// identical results.
    #[must_use]
    pub fn project<E: DocumentEngine>(engine: &E) -> Self {
        let current_media = engine
            .content()
            .into_iter()
            .filter(|node| MediaKind::is_media_tag(&node.type_name))
            .map(|node| MediaSummary {
                type_name: node.type_name,
                attrs: node.attrs,
            })
            .collect();

        let selected_element = engine.node_after_anchor().map(|node| SelectedElement {
            type_name: node.type_name,
            attrs: node.attrs,
            text: node.text,
            position: engine.selection(),
        });

        Self {
            current_media,
            selected_element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmbedAttrs, MediaNode, YoutubeAttrs};
    use crate::engine::MemoryDocument;

    fn doc_with_media() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.insert_paragraph("intro");
        doc.insert_media(MediaNode::Youtube(YoutubeAttrs {
            src: "https://youtu.be/abc".to_string(),
            width: None,
            height: None,
            controls: 1,
            autoplay: 0,
        }))
        .unwrap();
        doc.insert_paragraph("outro");
        doc.insert_media(MediaNode::Vimeo(EmbedAttrs {
            src: "https://vimeo.com/1".to_string(),
            width: Some(640),
            height: None,
        }))
        .unwrap();
        doc
    }

    #[test]
    fn current_media_filters_and_preserves_document_order() {
        let state = EditorState::project(&doc_with_media());

        assert_eq!(state.current_media.len(), 2);
        assert_eq!(state.current_media[0].type_name, "youtube");
        assert_eq!(state.current_media[1].type_name, "vimeo");
        assert_eq!(state.current_media[1].attrs["width"], 640);
    }

    #[test]
    fn selected_element_is_node_after_anchor() {
        let mut doc = doc_with_media();
        doc.set_anchor(1);

        let state = EditorState::project(&doc);
        let selected = state.selected_element.unwrap();
        assert_eq!(selected.type_name, "youtube");
        assert_eq!(selected.attrs["src"], "https://youtu.be/abc");
        assert!(selected.text.is_empty());
        assert_eq!(selected.position.from, 1);
        assert_eq!(selected.position.to, 1);
    }

    #[test]
    fn selected_element_null_iff_nothing_follows_anchor() {
        let mut doc = doc_with_media();

        // Fresh inserts leave the anchor at document end.
        assert!(EditorState::project(&doc).selected_element.is_none());

        for anchor in 0..doc.len() {
            doc.set_anchor(anchor);
            assert!(EditorState::project(&doc).selected_element.is_some());
        }

        doc.set_anchor(doc.len());
        assert!(EditorState::project(&doc).selected_element.is_none());
    }

    #[test]
    fn projection_is_idempotent_between_mutations() {
        let doc = doc_with_media();
        assert_eq!(EditorState::project(&doc), EditorState::project(&doc));
    }

    #[test]
    fn serializes_with_host_facing_field_names() {
        let state = EditorState::project(&doc_with_media());
        let value = serde_json::to_value(&state).unwrap();

        assert!(value.get("currentMedia").is_some());
        assert!(value.get("selectedElement").is_some());
        assert_eq!(value["currentMedia"][0]["type"], "youtube");
        assert_eq!(value["currentMedia"][0]["controls"], 1);
    }
}
