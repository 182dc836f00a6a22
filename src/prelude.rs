//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use conn_uri::prelude::*;
//!
//! let record = UriRecord::parse("mongodb://localhost:27017").unwrap();
//! assert_eq!(record.hosts()[0], HostEntry::new("localhost").with_port(27017));
//! ```
//!
//! Builder state markers (`NoHosts`, `HasHosts`) are intentionally excluded
//! as they are implementation details.

pub use crate::{
    // Core types
    CodecConfig, HostEntry, UriCodec, UriOptions, UriRecord,
    // Builder
    UriRecordBuilder,
    // Errors
    EncodingError, UriError, UriErrorKind,
    // Constants
    DEFAULT_HOST, DEFAULT_SCHEME,
};
