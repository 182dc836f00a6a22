//! Constants for connection URI parsing and formatting.

/// Scheme used when neither the codec nor the record specifies one.
pub const DEFAULT_SCHEME: &str = "mongodb";

/// Host emitted when formatting without a record.
pub const DEFAULT_HOST: &str = "localhost";

/// Token separating the scheme from the rest of the URI.
pub const SCHEME_SEPARATOR: &str = "://";

/// Separates the credentials segment from the address list.
pub const CREDENTIALS_DELIMITER: char = '@';

/// Separates the options segment.
pub const OPTIONS_DELIMITER: char = '?';

/// Separates the database segment.
pub const DATABASE_DELIMITER: char = '/';

/// Separates hosts in the address list and pairs in the options segment.
pub const LIST_SEPARATOR: char = ',';
