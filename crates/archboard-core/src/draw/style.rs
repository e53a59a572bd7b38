//! mxGraph style descriptors.
//!
//! An mxGraph style is a `;`-separated list of `key=value` pairs, optionally
//! starting with a bare style name such as `text` or `edgeLabel`:
//!
//! ```text
//! text;fontSize=12;align=left;verticalAlign=top;
//! ```
//!
//! Values are written uninterpreted. Colors in particular are not validated;
//! a malformed value reaches the document as-is and is left to the viewer.

use std::fmt;

/// An ordered set of style properties.
///
/// Setting a key that is already present replaces its value in place, so the
/// output order is the order in which keys were first set.
///
/// # Examples
///
/// ```
/// # use archboard_core::draw::Style;
/// let style = Style::named("text")
///     .with("fontSize", 12)
///     .with("align", "left");
/// assert_eq!(style.to_string(), "text;fontSize=12;align=left;");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    name: Option<&'static str>,
    entries: Vec<(&'static str, String)>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style starting with a bare style name.
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            entries: Vec::new(),
        }
    }

    /// Sets a property, replacing any previous value for the key.
    pub fn set(&mut self, key: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets a property (builder style).
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the value of a property, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the bare style name, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name {
            write!(f, "{name};")?;
        }
        for (key, value) in &self.entries {
            write!(f, "{key}={value};")?;
        }
        Ok(())
    }
}
