//! Inline style resolution.
//!
//! Two complementary mechanisms resolve inline style names to visual styles:
//! the custom style map (name to descriptor, the common case) and the custom
//! style function (whole style set to descriptor, for styles that depend on
//! combinations). Both may be supplied; the consuming renderer merges them
//! with the function's output winning on conflicting properties.

use std::collections::BTreeMap;

use smol_str::SmolStr;
use vellum_editor_core::{InlineStyle, InlineStyleSet};

use crate::config::EditorConfig;

/// A concrete visual style: an ordered property-to-value map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDescriptor {
    properties: BTreeMap<SmolStr, SmolStr>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(SmolStr::as_str)
    }

    /// Overlay `other` onto this descriptor; `other` wins on conflicts.
    pub fn merge(&mut self, other: &StyleDescriptor) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &SmolStr)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Mapping from inline style name to style descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomStyleMap {
    entries: BTreeMap<InlineStyle, StyleDescriptor>,
}

impl CustomStyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, style: InlineStyle, descriptor: StyleDescriptor) -> Self {
        self.entries.insert(style, descriptor);
        self
    }

    pub fn get(&self, style: &InlineStyle) -> Option<&StyleDescriptor> {
        self.entries.get(style)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EditorConfig {
    /// Resolve an active style set to one merged descriptor.
    ///
    /// Walks the set in its deterministic order through the custom style
    /// map, then applies the custom style function's output on top.
    pub fn resolved_inline_style(&self, styles: &InlineStyleSet) -> StyleDescriptor {
        let mut resolved = StyleDescriptor::new();
        if let Some(map) = &self.custom_style_map {
            for style in styles {
                if let Some(descriptor) = map.get(style) {
                    resolved.merge(descriptor);
                }
            }
        }
        if let Some(f) = &self.custom_style_fn {
            if let Some(descriptor) = f(styles) {
                resolved.merge(&descriptor);
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use vellum_editor_core::EditorState;

    use super::*;
    use crate::render_map::BlockRenderMap;

    fn bold_red_map() -> CustomStyleMap {
        CustomStyleMap::new()
            .with(
                InlineStyle::Bold,
                StyleDescriptor::new().with("font-weight", "700"),
            )
            .with(
                InlineStyle::Custom(SmolStr::new("RED")),
                StyleDescriptor::new().with("color", "red"),
            )
    }

    #[test]
    fn test_descriptor_merge_overwrites() {
        let mut base = StyleDescriptor::new()
            .with("color", "red")
            .with("font-weight", "700");
        base.merge(&StyleDescriptor::new().with("color", "blue"));
        assert_eq!(base.get("color"), Some("blue"));
        assert_eq!(base.get("font-weight"), Some("700"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_map_only_resolution() {
        let config = EditorConfig::builder()
            .state(EditorState::empty())
            .on_change(|_| {})
            .block_render_map(BlockRenderMap::default_map())
            .custom_style_map(bold_red_map())
            .build()
            .expect("config builds");

        let styles: InlineStyleSet = [
            InlineStyle::Bold,
            InlineStyle::Custom(SmolStr::new("RED")),
            // Unknown styles resolve to nothing rather than failing.
            InlineStyle::Italic,
        ]
        .into_iter()
        .collect();
        let resolved = config.resolved_inline_style(&styles);
        assert_eq!(resolved.get("font-weight"), Some("700"));
        assert_eq!(resolved.get("color"), Some("red"));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_style_fn_wins_over_map() {
        let config = EditorConfig::builder()
            .state(EditorState::empty())
            .on_change(|_| {})
            .block_render_map(BlockRenderMap::default_map())
            .custom_style_map(bold_red_map())
            .custom_style_fn(|styles| {
                // Bold text dims instead of using the map's weight.
                styles.contains(&InlineStyle::Bold).then(|| {
                    StyleDescriptor::new()
                        .with("font-weight", "500")
                        .with("opacity", "0.8")
                })
            })
            .build()
            .expect("config builds");

        let styles: InlineStyleSet = [InlineStyle::Bold].into_iter().collect();
        let resolved = config.resolved_inline_style(&styles);
        assert_eq!(resolved.get("font-weight"), Some("500"));
        assert_eq!(resolved.get("opacity"), Some("0.8"));
    }

    #[test]
    fn test_no_mechanisms_resolves_empty() {
        let config = EditorConfig::builder()
            .state(EditorState::empty())
            .on_change(|_| {})
            .block_render_map(BlockRenderMap::default_map())
            .build()
            .expect("config builds");
        let styles: InlineStyleSet = [InlineStyle::Bold].into_iter().collect();
        assert!(config.resolved_inline_style(&styles).is_empty());
    }
}
