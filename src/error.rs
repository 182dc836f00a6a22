//! Error types for connection URI parsing and formatting.

use std::fmt;

/// Errors that can occur when parsing or formatting a connection URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriError {
    /// The input that failed (the URI string, or the formatted record)
    pub input: String,
    /// The specific error that occurred
    pub kind: UriErrorKind,
}

impl UriError {
    pub(crate) fn new(input: impl Into<String>, kind: UriErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Returns true if the URI's scheme did not match the codec's expected scheme.
    #[must_use]
    pub const fn is_scheme_mismatch(&self) -> bool {
        self.kind.is_scheme_mismatch()
    }

    /// Returns true if the input was structurally malformed.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        self.kind.is_malformed()
    }
}

/// Specific error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriErrorKind {
    /// No `://` separator found
    MissingSchemeSeparator,
    /// The scheme differs from the one the codec was configured with
    SchemeMismatch {
        /// The configured scheme
        expected: String,
        /// The scheme that was found
        found: String,
    },
    /// A scheme that cannot appear in a URI
    InvalidScheme {
        /// The rejected scheme
        scheme: String,
    },
    /// A component contained a malformed percent-escape
    InvalidEncoding {
        /// Name of the component being decoded
        component: &'static str,
        /// The underlying decoding failure
        source: EncodingError,
    },
    /// Invalid port number
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// An options pair without `=`
    InvalidOption {
        /// The offending pair
        pair: String,
    },
}

impl UriErrorKind {
    /// Returns true for [`UriErrorKind::SchemeMismatch`].
    #[must_use]
    pub const fn is_scheme_mismatch(&self) -> bool {
        matches!(self, Self::SchemeMismatch { .. })
    }

    /// Returns true for every kind that describes a malformed URI.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        !self.is_scheme_mismatch()
    }
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid connection URI '{}': ", self.input)?;
        match &self.kind {
            UriErrorKind::MissingSchemeSeparator => {
                write!(f, "no scheme found; URI must contain '://'")
            }
            UriErrorKind::SchemeMismatch { expected, found } => {
                write!(f, "URI must begin with '{expected}://', found '{found}://'")
            }
            UriErrorKind::InvalidScheme { scheme } => {
                write!(f, "scheme '{scheme}' must not contain '://'")
            }
            UriErrorKind::InvalidEncoding { component, source } => {
                write!(f, "invalid {component}: {source}")
            }
            UriErrorKind::InvalidPort { value, reason } => {
                write!(f, "invalid port '{value}': {reason}")
            }
            UriErrorKind::InvalidOption { pair } => {
                write!(f, "option '{pair}' is missing '='")
            }
        }
    }
}

impl std::error::Error for UriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UriErrorKind::InvalidEncoding { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors for percent-decoding a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// `%` not followed by two characters
    TruncatedEscape {
        /// Byte offset of the `%`
        position: usize,
    },
    /// `%` followed by something other than two hex digits
    InvalidHexDigit {
        /// Byte offset of the `%`
        position: usize,
    },
    /// Decoded bytes are not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedEscape { position } => {
                write!(f, "truncated percent-escape at position {position}")
            }
            Self::InvalidHexDigit { position } => {
                write!(
                    f,
                    "percent-escape at position {position} is not followed by two hex digits"
                )
            }
            Self::InvalidUtf8 => write!(f, "percent-decoded bytes are not valid UTF-8"),
        }
    }
}

impl std::error::Error for EncodingError {}
