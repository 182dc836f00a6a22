//! The `user[:password]` segment preceding `@`.

use crate::encoding;
use crate::error::UriErrorKind;

/// Decoded credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: Option<String>,
}

impl Credentials {
    /// Splits on the first `:` and decodes each side independently.
    pub(crate) fn parse(segment: &str) -> Result<Self, UriErrorKind> {
        let (username, password) = match segment.split_once(':') {
            Some((username, password)) => (username, Some(password)),
            None => (segment, None),
        };
        Ok(Self {
            username: encoding::decode_component(username, "username")?,
            password: password
                .map(|p| encoding::decode_component(p, "password"))
                .transpose()?,
        })
    }
}

/// Writes `user[:password]@`, or nothing when the username is empty.
///
/// An empty password is dropped along with its colon.
pub(crate) fn write_credentials(out: &mut String, username: Option<&str>, password: Option<&str>) {
    let Some(username) = username.filter(|u| !u.is_empty()) else {
        return;
    };
    out.push_str(&encoding::encode(username));
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        out.push(':');
        out.push_str(&encoding::encode(password));
    }
    out.push('@');
}
