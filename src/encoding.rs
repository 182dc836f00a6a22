//! Percent-encoding of individual URI components.
//!
//! Every byte except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped,
//! so reserved delimiters (`:`, `@`, `/`, `?`, `,`, `=`) never leak into a
//! formatted component.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::{EncodingError, UriErrorKind};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a component.
pub(crate) fn encode(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, COMPONENT).into()
}

/// Percent-decodes a component, rejecting malformed escapes.
pub(crate) fn decode(input: &str) -> Result<Cow<'_, str>, EncodingError> {
    validate_escapes(input)?;
    percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| EncodingError::InvalidUtf8)
}

/// Decodes a named component into an owned string.
pub(crate) fn decode_component(
    input: &str,
    component: &'static str,
) -> Result<String, UriErrorKind> {
    decode(input)
        .map(Cow::into_owned)
        .map_err(|source| UriErrorKind::InvalidEncoding { component, source })
}

// `percent_decode_str` passes bad escapes through verbatim.
fn validate_escapes(input: &str) -> Result<(), EncodingError> {
    let bytes = input.as_bytes();
    for (position, _) in input.match_indices('%') {
        match bytes.get(position + 1..position + 3) {
            None => return Err(EncodingError::TruncatedEscape { position }),
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => {}
            Some(_) => return Err(EncodingError::InvalidHexDigit { position }),
        }
    }
    Ok(())
}
