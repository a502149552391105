pub const SERVICE: &str = "gateway-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const GATEWAY_API_PORT: &str = "GATEWAY_API_PORT";

/// Identifier forwarded on every lookup. The upstream contract pins this
/// literal; the endpoint takes no caller input.
pub const USER_LOOKUP_ID: &str = "200";

// Middleware configuration
pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
pub const RATE_LIMIT_BURST: &str = "RATE_LIMIT_BURST";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
