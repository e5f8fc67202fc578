//! Named character-level styles.
//!
//! An inline style names a visual treatment for a text range (bold, italic,
//! a host-defined highlight). The view-boundary contract resolves these names
//! to concrete style descriptors through the custom style map and function.

use std::collections::BTreeSet;

use smol_str::SmolStr;

/// A named inline style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Custom(SmolStr),
}

impl InlineStyle {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::Underline => "UNDERLINE",
            Self::Code => "CODE",
            Self::Strikethrough => "STRIKETHROUGH",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for InlineStyle {
    fn from(name: &str) -> Self {
        match name {
            "BOLD" => Self::Bold,
            "ITALIC" => Self::Italic,
            "UNDERLINE" => Self::Underline,
            "CODE" => Self::Code,
            "STRIKETHROUGH" => Self::Strikethrough,
            other => Self::Custom(SmolStr::new(other)),
        }
    }
}

impl std::fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of inline styles active on a text range.
///
/// Iteration order is deterministic so style resolution produces stable
/// output no matter the insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineStyleSet(BTreeSet<InlineStyle>);

impl InlineStyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set plus one style; the original is untouched.
    pub fn with(&self, style: InlineStyle) -> Self {
        let mut set = self.0.clone();
        set.insert(style);
        Self(set)
    }

    /// The set minus one style; the original is untouched.
    pub fn without(&self, style: &InlineStyle) -> Self {
        let mut set = self.0.clone();
        set.remove(style);
        Self(set)
    }

    pub fn contains(&self, style: &InlineStyle) -> bool {
        self.0.contains(style)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InlineStyle> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<InlineStyle> for InlineStyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InlineStyleSet {
    type Item = &'a InlineStyle;
    type IntoIter = std::collections::btree_set::Iter<'a, InlineStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(InlineStyle::Bold.as_str(), "BOLD");
        assert_eq!(InlineStyle::from("CODE"), InlineStyle::Code);
        assert_eq!(
            InlineStyle::from("HIGHLIGHT"),
            InlineStyle::Custom(SmolStr::new("HIGHLIGHT"))
        );
    }

    #[test]
    fn test_set_value_semantics() {
        let set = InlineStyleSet::new().with(InlineStyle::Bold);
        let both = set.with(InlineStyle::Italic);
        assert_eq!(set.len(), 1);
        assert_eq!(both.len(), 2);
        assert!(both.contains(&InlineStyle::Bold));
        assert!(!both.without(&InlineStyle::Bold).contains(&InlineStyle::Bold));
    }

    #[test]
    fn test_deterministic_order() {
        let a: InlineStyleSet = [InlineStyle::Italic, InlineStyle::Bold].into_iter().collect();
        let b: InlineStyleSet = [InlineStyle::Bold, InlineStyle::Italic].into_iter().collect();
        let names_a: Vec<_> = a.iter().map(InlineStyle::as_str).collect();
        let names_b: Vec<_> = b.iter().map(InlineStyle::as_str).collect();
        assert_eq!(names_a, names_b);
    }
}
