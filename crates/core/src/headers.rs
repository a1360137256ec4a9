//! Names that make up the trust boundary.

/// Marks a request that needs no identity.
pub const HEADER_X_PUBLIC: &str = "X-Public";

/// Resolved client (application) id. Only the gate may set it.
pub const HEADER_X_CLIENT_ID: &str = "X-Client-Id";

/// Resolved caller (end user) id. Only the gate may set it.
pub const HEADER_X_CALLER_ID: &str = "X-Caller-Id";

/// Query parameter carrying the token id.
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// Token service path; the token id is appended as one segment.
pub const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";
