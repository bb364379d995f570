use compact_str::{format_compact, CompactString};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace binding attached to a qualified name
///
/// CSS distinguishes four cases for the part before `|`:
///
/// | written    | variant          |
/// |------------|------------------|
/// | `name`     | [`None`]         |
/// | `\|name`   | [`Empty`]        |
/// | `*\|name`  | [`Any`]          |
/// | `ns\|name` | [`Named`]        |
///
/// [`None`]: NamespacePrefix::None
/// [`Empty`]: NamespacePrefix::Empty
/// [`Any`]: NamespacePrefix::Any
/// [`Named`]: NamespacePrefix::Named
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum NamespacePrefix {
    /// No prefix was written; the default namespace applies
    #[default]
    None,
    /// Explicitly no namespace
    Empty,
    /// Any namespace, including none
    Any,
    /// A declared prefix
    Named(CompactString),
}

impl NamespacePrefix {
    /// Build a prefix from the text the parser saw before `|`.
    ///
    /// `None` means no `|` was present. `""` and `"*"` map to
    /// [`Empty`](Self::Empty) and [`Any`](Self::Any).
    #[must_use]
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            None => Self::None,
            Some("") => Self::Empty,
            Some("*") => Self::Any,
            Some(prefix) => Self::Named(prefix.into()),
        }
    }

    /// A declared prefix
    #[must_use]
    pub fn named(prefix: impl Into<CompactString>) -> Self {
        Self::Named(prefix.into())
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// True when the prefix pins down one namespace (empty or named)
    #[must_use]
    pub const fn is_specific(&self) -> bool {
        matches!(self, Self::Empty | Self::Named(_))
    }

    /// The text before `|`, or `None` when no prefix was written
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Empty => Some(""),
            Self::Any => Some("*"),
            Self::Named(prefix) => Some(prefix.as_str()),
        }
    }

    /// Format `name` qualified by this prefix
    #[must_use]
    pub fn format(&self, name: &str) -> CompactString {
        match self.text() {
            None => name.into(),
            Some(prefix) => format_compact!("{prefix}|{name}"),
        }
    }
}

impl fmt::Display for NamespacePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        assert_eq!(NamespacePrefix::from_text(None), NamespacePrefix::None);
        assert_eq!(NamespacePrefix::from_text(Some("")), NamespacePrefix::Empty);
        assert_eq!(NamespacePrefix::from_text(Some("*")), NamespacePrefix::Any);
        assert_eq!(
            NamespacePrefix::from_text(Some("svg")),
            NamespacePrefix::named("svg")
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(NamespacePrefix::None.format("div"), "div");
        assert_eq!(NamespacePrefix::Empty.format("div"), "|div");
        assert_eq!(NamespacePrefix::Any.format("div"), "*|div");
        assert_eq!(NamespacePrefix::named("svg").format("rect"), "svg|rect");
    }

    #[test]
    fn test_predicates() {
        assert!(NamespacePrefix::default().is_none());
        assert!(NamespacePrefix::Empty.is_specific());
        assert!(NamespacePrefix::named("svg").is_specific());
        assert!(!NamespacePrefix::Any.is_specific());
        assert!(!NamespacePrefix::None.is_specific());
    }
}
