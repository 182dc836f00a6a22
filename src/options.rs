//! Options segment of a connection URI.

use std::fmt;

use indexmap::IndexMap;

use crate::constants::LIST_SEPARATOR;
use crate::encoding;
use crate::error::UriErrorKind;

/// Options from the `?` segment of a connection URI.
///
/// Pairs are separated by `,` rather than `&`. Iteration and formatting
/// follow insertion order; equality ignores order.
///
/// # Examples
///
/// ```
/// use conn_uri::UriOptions;
///
/// let mut options = UriOptions::new();
/// options.insert("replicaSet", "rs0");
/// options.insert("authSource", "admin");
/// assert_eq!(options.to_string(), "replicaSet=rs0,authSource=admin");
/// assert_eq!(options.get("authSource"), Some("admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriOptions {
    entries: IndexMap<String, String>,
}

impl UriOptions {
    /// Creates an empty options map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the options segment (without the leading `?`).
    ///
    /// Each pair is split on its first `=`; key and value are
    /// percent-decoded. Empty pairs are skipped.
    pub(crate) fn parse(input: &str) -> Result<Self, UriErrorKind> {
        let mut entries = IndexMap::new();

        for pair in input.split(LIST_SEPARATOR) {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').ok_or_else(|| UriErrorKind::InvalidOption {
                pair: pair.to_string(),
            })?;

            entries.insert(
                encoding::decode_component(key, "option key")?,
                encoding::decode_component(value, "option value")?,
            );
        }

        Ok(Self { entries })
    }

    /// Returns the value for an option, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Sets an option, returning the previous value.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes an option, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Returns true if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Formats the encoded `key=value` pairs joined by `,`.
impl fmt::Display for UriOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{LIST_SEPARATOR}")?;
            }
            write!(f, "{}={}", encoding::encode(key), encoding::encode(value))?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for UriOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for UriOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
