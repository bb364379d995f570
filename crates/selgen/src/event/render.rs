use super::{NamespacePrefix, SelectorEvent};
use std::fmt::{self, Write};

/// Renders the CSS fragment an event was recognized from.
///
/// `Init`, `Close` and `Selector` have no text of their own and render empty;
/// use [`render_css`] to rebuild a whole selector list including the commas.
impl fmt::Display for SelectorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init | Self::Close | Self::Selector => Ok(()),
            Self::Type { prefix, name } => f.write_str(&prefix.format(name)),
            Self::Universal => f.write_char('*'),
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::AttributeExists { prefix, name } => {
                write!(f, "[{}]", prefix.format(name))
            }
            Self::AttributeExact {
                prefix,
                name,
                value,
            } => write_attribute(f, prefix, name, "=", value),
            Self::AttributeIncludes {
                prefix,
                name,
                value,
            } => write_attribute(f, prefix, name, "~=", value),
            Self::AttributeDashMatch {
                prefix,
                name,
                value,
            } => write_attribute(f, prefix, name, "|=", value),
            Self::AttributePrefixMatch {
                prefix,
                name,
                value,
            } => write_attribute(f, prefix, name, "^=", value),
            Self::AttributeSuffixMatch {
                prefix,
                name,
                value,
            } => write_attribute(f, prefix, name, "$=", value),
            Self::AttributeSubstring {
                prefix,
                name,
                value,
            } => write_attribute(f, prefix, name, "*=", value),
            Self::FirstChild => f.write_str(":first-child"),
            Self::LastChild => f.write_str(":last-child"),
            Self::NthChild { a, b } => {
                f.write_str(":nth-child(")?;
                write_an_plus_b(f, *a, *b)?;
                f.write_char(')')
            }
            Self::OnlyChild => f.write_str(":only-child"),
            Self::Empty => f.write_str(":empty"),
            Self::Child => f.write_str(" > "),
            Self::Descendant => f.write_char(' '),
            Self::Adjacent => f.write_str(" + "),
            Self::GeneralSibling => f.write_str(" ~ "),
        }
    }
}

fn write_attribute(
    f: &mut fmt::Formatter<'_>,
    prefix: &NamespacePrefix,
    name: &str,
    op: &str,
    value: &str,
) -> fmt::Result {
    write!(f, "[{}{op}\"", prefix.format(name))?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_str("\"]")
}

fn write_an_plus_b(f: &mut fmt::Formatter<'_>, a: i32, b: i32) -> fmt::Result {
    match a {
        0 => return write!(f, "{b}"),
        1 => f.write_char('n')?,
        -1 => f.write_str("-n")?,
        _ => write!(f, "{a}n")?,
    }
    match b {
        0 => Ok(()),
        b if b > 0 => write!(f, "+{b}"),
        b => write!(f, "{b}"),
    }
}

/// Rebuild the selector text of a recorded event stream.
///
/// Alternatives are joined with `", "`. The output is meant for logs and
/// error messages; it is normalized, not a byte-for-byte copy of the input.
pub fn render_css<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a SelectorEvent>,
{
    let mut out = String::new();
    let mut alternatives = 0usize;
    for event in events {
        if matches!(event, SelectorEvent::Selector) {
            if alternatives > 0 {
                out.push_str(", ");
            }
            alternatives += 1;
            continue;
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{event}");
    }
    out
}
