//! Content blocks: the structural units of editor content.
//!
//! A document is a flat sequence of blocks. Each block carries a stable key,
//! a type discriminant, its text, and a list-nesting depth. The type
//! discriminant is what the view-boundary contract consumes: the block style
//! classifier, the block renderer selector, and the block render map are all
//! keyed on it.

use smol_str::SmolStr;

/// Block type discriminant.
///
/// Named variants cover the stock vocabulary of the default render map;
/// `Custom` is the escape hatch for host-defined block types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockType {
    Unstyled,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    Blockquote,
    CodeBlock,
    UnorderedListItem,
    OrderedListItem,
    /// A block rendered entirely by a custom renderer (embeds, media).
    Atomic,
    Custom(SmolStr),
}

impl BlockType {
    /// The wire/storage name of this block type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unstyled => "unstyled",
            Self::HeaderOne => "header-one",
            Self::HeaderTwo => "header-two",
            Self::HeaderThree => "header-three",
            Self::HeaderFour => "header-four",
            Self::HeaderFive => "header-five",
            Self::HeaderSix => "header-six",
            Self::Blockquote => "blockquote",
            Self::CodeBlock => "code-block",
            Self::UnorderedListItem => "unordered-list-item",
            Self::OrderedListItem => "ordered-list-item",
            Self::Atomic => "atomic",
            Self::Custom(name) => name,
        }
    }

    /// Whether this is a list item type (renders inside a wrapper element).
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::UnorderedListItem | Self::OrderedListItem)
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        match name {
            "unstyled" => Self::Unstyled,
            "header-one" => Self::HeaderOne,
            "header-two" => Self::HeaderTwo,
            "header-three" => Self::HeaderThree,
            "header-four" => Self::HeaderFour,
            "header-five" => Self::HeaderFive,
            "header-six" => Self::HeaderSix,
            "blockquote" => Self::Blockquote,
            "code-block" => Self::CodeBlock,
            "unordered-list-item" => Self::UnorderedListItem,
            "ordered-list-item" => Self::OrderedListItem,
            "atomic" => Self::Atomic,
            other => Self::Custom(SmolStr::new(other)),
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of structural content: one paragraph, heading, list item, etc.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentBlock {
    /// Stable key identifying this block across state values.
    pub key: SmolStr,
    pub block_type: BlockType,
    pub text: String,
    /// List nesting depth. Zero for non-nested blocks.
    pub depth: u8,
}

impl ContentBlock {
    pub fn new(key: impl Into<SmolStr>, block_type: BlockType) -> Self {
        Self {
            key: key.into(),
            block_type,
            text: String::new(),
            depth: 0,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Length of the block text in chars.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
