//! The host-owned editor state value and its selection.
//!
//! `EditorState` follows an immutable-update discipline: the editor never
//! mutates a state in place. Every interaction produces a new value which is
//! handed to the host through the change notifier; the host must feed it back
//! as the next state for the change to become visible. Clones are cheap
//! because the block list is shared.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::block::{BlockType, ContentBlock};

/// A position inside the document: a block key plus a char offset within it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub block: SmolStr,
    pub offset: usize,
}

impl Position {
    pub fn new(block: impl Into<SmolStr>, offset: usize) -> Self {
        Self {
            block: block.into(),
            offset,
        }
    }
}

/// Selection with anchor and focus positions.
///
/// The anchor is where the selection started, the focus is where the cursor
/// is now. They may be in any order within a block; use `range_in_block` for
/// ordered bounds. Paste and drop handlers receive this to know where dropped
/// or pasted content should be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    pub anchor: Position,
    pub focus: Position,
}

impl SelectionState {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    /// A collapsed selection (caret) at the given position.
    pub fn collapsed(block: impl Into<SmolStr>, offset: usize) -> Self {
        let position = Position::new(block, offset);
        Self {
            anchor: position.clone(),
            focus: position,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Whether both ends sit in the same block.
    pub fn is_within_block(&self) -> bool {
        self.anchor.block == self.focus.block
    }

    /// Ordered offsets when the selection is confined to a single block.
    pub fn range_in_block(&self) -> Option<std::ops::Range<usize>> {
        if !self.is_within_block() {
            return None;
        }
        let start = self.anchor.offset.min(self.focus.offset);
        let end = self.anchor.offset.max(self.focus.offset);
        Some(start..end)
    }

    /// Whether the focus precedes the anchor. Only resolvable within a block.
    pub fn is_backward(&self) -> Option<bool> {
        self.is_within_block()
            .then(|| self.focus.offset < self.anchor.offset)
    }

    /// Collapse onto the focus position.
    pub fn collapse_to_focus(&self) -> Self {
        Self {
            anchor: self.focus.clone(),
            focus: self.focus.clone(),
        }
    }
}

/// The entire state of the editor: content blocks plus selection.
///
/// This is the opaque value the host owns and supplies on every render pass.
/// All mutators return a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    blocks: Arc<Vec<ContentBlock>>,
    selection: SelectionState,
}

impl EditorState {
    /// Build a state from a block list, with the caret at the start of the
    /// first block. An empty list is normalized to a single empty unstyled
    /// block so the document always has somewhere to put the caret.
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        let blocks = if blocks.is_empty() {
            vec![ContentBlock::new("root", BlockType::Unstyled)]
        } else {
            blocks
        };
        let selection = SelectionState::collapsed(blocks[0].key.clone(), 0);
        Self {
            blocks: Arc::new(blocks),
            selection,
        }
    }

    /// An empty document.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn block(&self, key: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.key == key)
    }

    /// Whether the document has no text at all. Drives placeholder display.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_empty())
    }

    /// New state with a different selection; block storage is shared.
    pub fn with_selection(&self, selection: SelectionState) -> Self {
        Self {
            blocks: Arc::clone(&self.blocks),
            selection,
        }
    }

    /// New state with replaced content. The selection carries over verbatim;
    /// reconciling it against the new blocks is the producer's concern.
    pub fn with_blocks(&self, blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks: Arc::new(blocks),
            selection: self.selection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_block_state() -> EditorState {
        EditorState::new(vec![
            ContentBlock::new("a", BlockType::Unstyled).with_text("hello"),
            ContentBlock::new("b", BlockType::Blockquote).with_text("world"),
        ])
    }

    #[test]
    fn test_selection_range_in_block() {
        let sel = SelectionState::new(Position::new("a", 7), Position::new("a", 3));
        assert_eq!(sel.range_in_block(), Some(3..7));
        assert_eq!(sel.is_backward(), Some(true));
        assert!(!sel.is_collapsed());
    }

    #[test]
    fn test_selection_across_blocks() {
        let sel = SelectionState::new(Position::new("a", 2), Position::new("b", 1));
        assert!(!sel.is_within_block());
        assert_eq!(sel.range_in_block(), None);
        assert_eq!(sel.is_backward(), None);
    }

    #[test]
    fn test_collapse_to_focus() {
        let sel = SelectionState::new(Position::new("a", 2), Position::new("b", 1));
        let collapsed = sel.collapse_to_focus();
        assert!(collapsed.is_collapsed());
        assert_eq!(collapsed.anchor, Position::new("b", 1));
    }

    #[test]
    fn test_empty_state_normalized() {
        let state = EditorState::empty();
        assert_eq!(state.blocks().len(), 1);
        assert!(state.is_empty());
        assert_eq!(state.selection().anchor.offset, 0);
    }

    #[test]
    fn test_with_selection_shares_blocks() {
        let state = two_block_state();
        let moved = state.with_selection(SelectionState::collapsed("b", 3));
        assert_eq!(moved.blocks(), state.blocks());
        assert_ne!(moved.selection(), state.selection());
        // Original untouched: immutable-update discipline.
        assert_eq!(state.selection().anchor.offset, 0);
    }

    #[test]
    fn test_with_blocks_replaces_content() {
        let state = two_block_state();
        assert!(!state.is_empty());
        let cleared = state.with_blocks(vec![ContentBlock::new("a", BlockType::Unstyled)]);
        assert!(cleared.is_empty());
        assert_eq!(state.blocks().len(), 2);
    }

    #[test]
    fn test_block_lookup() {
        let state = two_block_state();
        assert_eq!(state.block("b").map(|b| b.text.as_str()), Some("world"));
        assert!(state.block("missing").is_none());
    }
}
