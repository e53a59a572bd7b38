//! Loosely-typed input records.
//!
//! A [`Record`] is one row of tabular input: an ordered mapping from field
//! name to a scalar string. Numbers, booleans and dates are stringified when
//! a record is deserialized, arrays are joined into a `;`-delimited list and
//! nested tables into `key: value` items, so that every field reads the same
//! way regardless of its source format. Values of any other shape are kept as
//! blank fields rather than failing the load.
//!
//! Records are read-only for panels; typed schemas pull values out of them
//! once, at the boundary, with the accessors defined here.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// Separators accepted between items of a list-valued field.
const LIST_DELIMITERS: [char; 2] = [';', '|'];

/// Key under which TOML dates and times reach serde as a one-entry table.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

/// A single scalar cell as it appears in the input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Scalar>),
    Table(IndexMap<String, Scalar>),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value,
            Self::List(items) => items
                .into_iter()
                .map(Scalar::into_text)
                .collect::<Vec<_>>()
                .join("; "),
            Self::Table(mut entries) => match entries.swap_remove(TOML_DATETIME_FIELD) {
                Some(datetime) if entries.is_empty() => datetime.into_text(),
                _ => entries
                    .into_iter()
                    .map(|(key, value)| format!("{key}: {}", value.into_text()))
                    .collect::<Vec<_>>()
                    .join("; "),
            },
            Self::Other(_) => String::new(),
        }
    }
}

/// An ordered mapping from field name to scalar string.
///
/// # Examples
///
/// ```
/// # use archboard::record::Record;
/// let record: Record = [("name", "Checkout"), ("tags", "web; mobile |api")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(record.get("name"), Some("Checkout"));
/// assert_eq!(record.get_list("tags"), vec!["web", "mobile", "api"]);
/// assert_eq!(record.get_or("owner", "Unassigned"), "Unassigned");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IndexMap::<String, Scalar>::deserialize(deserializer)?;
        Ok(fields
            .into_iter()
            .map(|(key, value)| (key, value.into_text()))
            .collect())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// Field names are matched case-insensitively, with spaces and dashes
/// treated as underscores.
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, field: impl AsRef<str>, value: impl Into<String>) {
        self.fields
            .insert(normalize_key(field.as_ref()), value.into());
    }

    /// Sets a field (builder style).
    pub fn with(mut self, field: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Returns the trimmed value of a field.
    ///
    /// Blank values are treated as absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(&normalize_key(field))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Returns the first present field among several aliases.
    pub fn get_any(&self, fields: &[&str]) -> Option<&str> {
        fields.iter().find_map(|field| self.get(field))
    }

    /// Returns the value of a field, or `default` when absent.
    pub fn get_or(&self, field: &str, default: &str) -> String {
        self.get(field).unwrap_or(default).to_string()
    }

    /// Splits a list-valued field on `;` or `|`.
    ///
    /// Items are trimmed and empty items are dropped. An absent field yields
    /// an empty list.
    pub fn get_list(&self, field: &str) -> Vec<String> {
        self.get(field)
            .map(|value| {
                value
                    .split(LIST_DELIMITERS)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parses a numeric field.
    ///
    /// Currency symbols, thousands separators and surrounding whitespace are
    /// ignored, and a trailing `k` or `m` scales the value by a thousand or
    /// a million. Returns `None` when the field is absent or not a number.
    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(parse_number)
    }

    /// Parses a boolean field (`true`/`false`, `yes`/`no`, `y`/`n`, `1`/`0`).
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        match self.get(field)?.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        }
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the raw fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',' | '_' | ' ' | '%'))
        .collect();

    let (digits, scale) = match cleaned.chars().last()? {
        'k' | 'K' => (&cleaned[..cleaned.len() - 1], 1_000.0),
        'm' | 'M' => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    digits
        .parse::<f64>()
        .ok()
        .map(|value| value * scale)
        .filter(|value| value.is_finite())
}
