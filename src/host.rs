//! Host entries and the comma-separated address list.
//!
//! # Grammar
//!
//! ```text
//! address-list = host-entry *( "," host-entry )
//! host-entry   = host [ ":" port ]
//! ```
//!
//! Hosts are percent-decoded. Ports are base-10 and must fit in a `u16`.

use std::fmt;

use crate::constants::LIST_SEPARATOR;
use crate::encoding;
use crate::error::UriErrorKind;

/// A single `host[:port]` entry of the address list.
///
/// # Examples
///
/// ```
/// use conn_uri::HostEntry;
///
/// let entry = HostEntry::new("db1.example.com").with_port(27017);
/// assert_eq!(entry.host(), "db1.example.com");
/// assert_eq!(entry.port(), Some(27017));
/// assert_eq!(entry.to_string(), "db1.example.com:27017");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostEntry {
    host: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    port: Option<u16>,
}

impl HostEntry {
    /// Creates an entry without a port.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
        }
    }

    /// Returns a copy of this entry with the given port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Returns the decoded host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    fn parse(entry: &str) -> Result<Self, UriErrorKind> {
        let (host, port) = match entry.split_once(':') {
            Some((host, port)) => (host, Some(parse_port(port)?)),
            None => (entry, None),
        };
        Ok(Self {
            host: encoding::decode_component(host, "host")?,
            port,
        })
    }
}

/// Formats the entry in its encoded wire form.
impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoding::encode(&self.host))?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

fn parse_port(value: &str) -> Result<u16, UriErrorKind> {
    if value.is_empty() {
        return Err(UriErrorKind::InvalidPort {
            value: value.to_string(),
            reason: "port cannot be empty",
        });
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UriErrorKind::InvalidPort {
            value: value.to_string(),
            reason: "port must be a base-10 integer",
        });
    }
    value.parse().map_err(|_| UriErrorKind::InvalidPort {
        value: value.to_string(),
        reason: "port must be 0-65535",
    })
}

/// Parses the address list into its entries, preserving order.
///
/// Always yields at least one entry; an empty list is a single empty host.
pub(crate) fn parse_address_list(address: &str) -> Result<Vec<HostEntry>, UriErrorKind> {
    address.split(LIST_SEPARATOR).map(HostEntry::parse).collect()
}

/// Writes the encoded address list.
pub(crate) fn write_address_list(out: &mut String, hosts: &[HostEntry]) {
    for (i, entry) in hosts.iter().enumerate() {
        if i > 0 {
            out.push(LIST_SEPARATOR);
        }
        out.push_str(&entry.to_string());
    }
}
