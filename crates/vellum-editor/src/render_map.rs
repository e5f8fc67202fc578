//! The block render map.
//!
//! Maps each block type to the element it renders as, plus an optional
//! wrapper element shared by adjacent blocks of the same type (list items
//! under a `ul`/`ol`). The map is used symmetrically: forward for rendering,
//! and in reverse for interpreting pasted markup back into block types.
//! It is the one required presentation field of the configuration record.

use std::collections::BTreeMap;

use smol_str::SmolStr;
use vellum_editor_core::{BlockType, ContentBlock};

use crate::config::{BlockRenderOverride, EditorConfig};

/// Rendering configuration for one block type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(all(test, not(feature = "serde")), derive(serde::Serialize))]
pub struct BlockRenderConfig {
    /// Element tag the block renders as.
    pub element: SmolStr,
    /// Wrapper element shared by runs of blocks of this type.
    pub wrapper: Option<SmolStr>,
    /// Additional element tags recognized as this block type when
    /// reconstructing pasted markup.
    pub aliased_elements: Vec<SmolStr>,
}

impl BlockRenderConfig {
    pub fn element(tag: impl Into<SmolStr>) -> Self {
        Self {
            element: tag.into(),
            wrapper: None,
            aliased_elements: Vec::new(),
        }
    }

    pub fn with_wrapper(mut self, tag: impl Into<SmolStr>) -> Self {
        self.wrapper = Some(tag.into());
        self
    }

    pub fn with_aliases<I>(mut self, aliases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        self.aliased_elements = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `tag` selects this config, either as the element or an alias.
    pub fn matches_element(&self, tag: &str) -> bool {
        self.element == tag || self.aliased_elements.iter().any(|alias| alias == tag)
    }
}

/// Mapping from block type to render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockRenderMap {
    entries: BTreeMap<BlockType, BlockRenderConfig>,
}

impl BlockRenderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock vocabulary: headings, list items with their wrappers,
    /// blockquote, code, atomic embeds, and unstyled text (which also
    /// claims pasted `p` elements).
    pub fn default_map() -> Self {
        let mut map = Self::new();
        map.insert(
            BlockType::Unstyled,
            BlockRenderConfig::element("div").with_aliases(["p"]),
        );
        map.insert(BlockType::HeaderOne, BlockRenderConfig::element("h1"));
        map.insert(BlockType::HeaderTwo, BlockRenderConfig::element("h2"));
        map.insert(BlockType::HeaderThree, BlockRenderConfig::element("h3"));
        map.insert(BlockType::HeaderFour, BlockRenderConfig::element("h4"));
        map.insert(BlockType::HeaderFive, BlockRenderConfig::element("h5"));
        map.insert(BlockType::HeaderSix, BlockRenderConfig::element("h6"));
        map.insert(
            BlockType::Blockquote,
            BlockRenderConfig::element("blockquote"),
        );
        map.insert(BlockType::CodeBlock, BlockRenderConfig::element("pre"));
        map.insert(
            BlockType::UnorderedListItem,
            BlockRenderConfig::element("li").with_wrapper("ul"),
        );
        map.insert(
            BlockType::OrderedListItem,
            BlockRenderConfig::element("li").with_wrapper("ol"),
        );
        map.insert(BlockType::Atomic, BlockRenderConfig::element("figure"));
        map
    }

    pub fn insert(&mut self, block_type: BlockType, config: BlockRenderConfig) {
        self.entries.insert(block_type, config);
    }

    pub fn get(&self, block_type: &BlockType) -> Option<&BlockRenderConfig> {
        self.entries.get(block_type)
    }

    /// This map overlaid with `overrides`; overriding entries win.
    pub fn merged(&self, overrides: BlockRenderMap) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides.entries);
        Self { entries }
    }

    /// Reverse lookup for paste reconstruction: which block type claims the
    /// given element tag. The element name wins over aliases when both match
    /// somewhere in the map.
    pub fn block_type_for_element(&self, tag: &str) -> Option<&BlockType> {
        self.entries
            .iter()
            .find(|(_, config)| config.element == tag)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(_, config)| config.aliased_elements.iter().any(|alias| alias == tag))
            })
            .map(|(block_type, _)| block_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BlockType, &BlockRenderConfig)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(BlockType, BlockRenderConfig)> for BlockRenderMap {
    fn from_iter<I: IntoIterator<Item = (BlockType, BlockRenderConfig)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// How one block gets rendered, after consulting the renderer selector.
#[derive(Debug)]
pub enum BlockRenderer<'a> {
    /// Host-substituted renderer from the block renderer selector.
    Custom(BlockRenderOverride),
    /// Stock renderer from the block render map.
    Stock(&'a BlockRenderConfig),
}

impl EditorConfig {
    /// Resolve the renderer for a block: the block renderer selector first,
    /// then the render map. `None` means the map has no entry for this block
    /// type and the block cannot be rendered.
    pub fn renderer_for(&self, block: &ContentBlock) -> Option<BlockRenderer<'_>> {
        if let Some(f) = &self.block_renderer_fn {
            if let Some(custom) = f(block) {
                return Some(BlockRenderer::Custom(custom));
            }
        }
        self.block_render_map
            .get(&block.block_type)
            .map(BlockRenderer::Stock)
    }

    /// CSS-equivalent class name for a block type, from the block style
    /// classifier.
    pub fn block_class(&self, block_type: &BlockType) -> Option<SmolStr> {
        self.block_style_fn.as_ref().and_then(|f| f(block_type))
    }
}
