//! Markup escaping for cell values and attributes.
//!
//! Every piece of text that ends up inside the serialized document passes
//! through this module. Cell values are stored as [`Markup`], which can only
//! be constructed by escaping raw text, so an unescaped value can never reach
//! the serializer.
//!
//! Escaping targets XML attribute values, which is where mxGraph stores cell
//! labels. Besides the five predefined entities, whitespace control characters
//! are written as character references so that attribute-value normalization
//! in a conforming parser gives back the original text.

use std::fmt;

/// Text that has been escaped for embedding in an XML attribute value.
///
/// # Examples
///
/// ```
/// # use archboard_core::escape::Markup;
/// let markup = Markup::escape("R&D <core>");
/// assert_eq!(markup.as_str(), "R&amp;D &lt;core&gt;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escapes raw text into markup.
    pub fn escape(raw: &str) -> Self {
        Self(escape_attr(raw))
    }

    /// Returns an empty value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the escaped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes text for use inside a double- or single-quoted XML attribute.
///
/// Characters that XML 1.0 does not allow at all (most C0 control characters)
/// are dropped, since no escape sequence can represent them.
pub fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            ch if is_xml_char(ch) => escaped.push(ch),
            _ => {}
        }
    }
    escaped
}

/// Returns true if the character is allowed in an XML 1.0 document.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
