/// Identity ids are opaque strings (the front-end mints them, e.g. `"1"`).
pub type IdentityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
