//! # Selector Events
//!
//! The vocabulary a selector parser uses to report recognized productions.
//!
//! ## Overview
//!
//! Every production a generator can react to is one variant of
//! [`SelectorEvent`]. The set is closed, so generators match on it
//! exhaustively and the compiler flags any production a backend forgot
//! to handle when the vocabulary grows.
//!
//! [`EventKind`] is the payload-free discriminant of an event. It is `Copy`
//! and cheap to store, which makes it the currency of logs, validators and
//! error messages.
//!
//! ## Call Shape
//!
//! ```text
//! Init
//!   Selector  Type|Universal?  (Id|Class|Attribute*|structural)*
//!             (combinator  Type|Universal?  filters*)*
//!   Selector  ...
//! Close
//! ```

mod namespace;
mod render;

pub use namespace::NamespacePrefix;
pub use render::render_css;

use compact_str::CompactString;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grammar production recognized by the selector parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SelectorEvent {
    /// Start of a selector list
    Init,
    /// End of the selector list; generators may finalize their output
    Close,
    /// Emitted before the first component of every alternative in the list
    Selector,

    /// Element type, optionally namespace-qualified (`svg|rect`)
    Type {
        prefix: NamespacePrefix,
        name: CompactString,
    },
    /// The `*` wildcard
    Universal,
    /// `#value`
    Id(CompactString),
    /// `.value`
    Class(CompactString),

    /// `[name]`
    AttributeExists {
        prefix: NamespacePrefix,
        name: CompactString,
    },
    /// `[name=value]`
    AttributeExact {
        prefix: NamespacePrefix,
        name: CompactString,
        value: CompactString,
    },
    /// `[name~=value]`: value is one of the whitespace-separated words
    AttributeIncludes {
        prefix: NamespacePrefix,
        name: CompactString,
        value: CompactString,
    },
    /// `[name|=value]`: exactly value, or value followed by `-`
    AttributeDashMatch {
        prefix: NamespacePrefix,
        name: CompactString,
        value: CompactString,
    },
    /// `[name^=value]`
    AttributePrefixMatch {
        prefix: NamespacePrefix,
        name: CompactString,
        value: CompactString,
    },
    /// `[name$=value]`
    AttributeSuffixMatch {
        prefix: NamespacePrefix,
        name: CompactString,
        value: CompactString,
    },
    /// `[name*=value]`
    AttributeSubstring {
        prefix: NamespacePrefix,
        name: CompactString,
        value: CompactString,
    },

    FirstChild,
    LastChild,
    /// `:nth-child(an+b)`, coefficients as written
    NthChild { a: i32, b: i32 },
    OnlyChild,
    Empty,

    /// `>`
    Child,
    /// whitespace
    Descendant,
    /// `+`
    Adjacent,
    /// `~`
    GeneralSibling,
}

impl SelectorEvent {
    /// Get the discriminant of this event
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Init => EventKind::Init,
            Self::Close => EventKind::Close,
            Self::Selector => EventKind::Selector,
            Self::Type { .. } => EventKind::Type,
            Self::Universal => EventKind::Universal,
            Self::Id(_) => EventKind::Id,
            Self::Class(_) => EventKind::Class,
            Self::AttributeExists { .. } => EventKind::AttributeExists,
            Self::AttributeExact { .. } => EventKind::AttributeExact,
            Self::AttributeIncludes { .. } => EventKind::AttributeIncludes,
            Self::AttributeDashMatch { .. } => EventKind::AttributeDashMatch,
            Self::AttributePrefixMatch { .. } => EventKind::AttributePrefixMatch,
            Self::AttributeSuffixMatch { .. } => EventKind::AttributeSuffixMatch,
            Self::AttributeSubstring { .. } => EventKind::AttributeSubstring,
            Self::FirstChild => EventKind::FirstChild,
            Self::LastChild => EventKind::LastChild,
            Self::NthChild { .. } => EventKind::NthChild,
            Self::OnlyChild => EventKind::OnlyChild,
            Self::Empty => EventKind::Empty,
            Self::Child => EventKind::Child,
            Self::Descendant => EventKind::Descendant,
            Self::Adjacent => EventKind::Adjacent,
            Self::GeneralSibling => EventKind::GeneralSibling,
        }
    }

    /// Borrow the qualified name and (if any) the operand of an attribute event.
    ///
    /// Returns `None` for every non-attribute event.
    #[must_use]
    pub fn attribute(&self) -> Option<(&NamespacePrefix, &str, Option<&str>)> {
        match self {
            Self::AttributeExists { prefix, name } => Some((prefix, name.as_str(), None)),
            Self::AttributeExact {
                prefix,
                name,
                value,
            }
            | Self::AttributeIncludes {
                prefix,
                name,
                value,
            }
            | Self::AttributeDashMatch {
                prefix,
                name,
                value,
            }
            | Self::AttributePrefixMatch {
                prefix,
                name,
                value,
            }
            | Self::AttributeSuffixMatch {
                prefix,
                name,
                value,
            }
            | Self::AttributeSubstring {
                prefix,
                name,
                value,
            } => Some((prefix, name.as_str(), Some(value.as_str()))),
            _ => None,
        }
    }
}

/// Payload-free discriminant of a [`SelectorEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum EventKind {
    Init,
    Close,
    Selector,
    Type,
    Universal,
    Id,
    Class,
    AttributeExists,
    AttributeExact,
    AttributeIncludes,
    AttributeDashMatch,
    AttributePrefixMatch,
    AttributeSuffixMatch,
    AttributeSubstring,
    FirstChild,
    LastChild,
    NthChild,
    OnlyChild,
    Empty,
    Child,
    Descendant,
    Adjacent,
    GeneralSibling,
}

/// Where an event sits in the call-sequence grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// `Init` and `Close`
    Lifecycle,
    /// The selector-boundary marker
    Delimiter,
    /// Type or universal; may only open a simple-selector sequence
    Type,
    /// Id, class, attribute and structural predicates
    Filter,
    /// Joins two simple-selector sequences
    Combinator,
}

impl EventKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 23] = [
        Self::Init,
        Self::Close,
        Self::Selector,
        Self::Type,
        Self::Universal,
        Self::Id,
        Self::Class,
        Self::AttributeExists,
        Self::AttributeExact,
        Self::AttributeIncludes,
        Self::AttributeDashMatch,
        Self::AttributePrefixMatch,
        Self::AttributeSuffixMatch,
        Self::AttributeSubstring,
        Self::FirstChild,
        Self::LastChild,
        Self::NthChild,
        Self::OnlyChild,
        Self::Empty,
        Self::Child,
        Self::Descendant,
        Self::Adjacent,
        Self::GeneralSibling,
    ];

    /// Stable kebab-case name, used in logs and error messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Close => "close",
            Self::Selector => "selector",
            Self::Type => "type",
            Self::Universal => "universal",
            Self::Id => "id",
            Self::Class => "class",
            Self::AttributeExists => "attribute-exists",
            Self::AttributeExact => "attribute-exact",
            Self::AttributeIncludes => "attribute-includes",
            Self::AttributeDashMatch => "attribute-dash-match",
            Self::AttributePrefixMatch => "attribute-prefix-match",
            Self::AttributeSuffixMatch => "attribute-suffix-match",
            Self::AttributeSubstring => "attribute-substring",
            Self::FirstChild => "first-child",
            Self::LastChild => "last-child",
            Self::NthChild => "nth-child",
            Self::OnlyChild => "only-child",
            Self::Empty => "empty",
            Self::Child => "child",
            Self::Descendant => "descendant",
            Self::Adjacent => "adjacent",
            Self::GeneralSibling => "general-sibling",
        }
    }

    #[must_use]
    pub const fn category(self) -> EventCategory {
        match self {
            Self::Init | Self::Close => EventCategory::Lifecycle,
            Self::Selector => EventCategory::Delimiter,
            Self::Type | Self::Universal => EventCategory::Type,
            Self::Child | Self::Descendant | Self::Adjacent | Self::GeneralSibling => {
                EventCategory::Combinator
            }
            _ => EventCategory::Filter,
        }
    }

    #[must_use]
    pub const fn is_combinator(self) -> bool {
        matches!(self.category(), EventCategory::Combinator)
    }

    #[must_use]
    pub const fn is_attribute(self) -> bool {
        matches!(
            self,
            Self::AttributeExists
                | Self::AttributeExact
                | Self::AttributeIncludes
                | Self::AttributeDashMatch
                | Self::AttributePrefixMatch
                | Self::AttributeSuffixMatch
                | Self::AttributeSubstring
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
