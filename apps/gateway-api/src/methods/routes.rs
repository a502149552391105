// Gateway routes
pub const FEIGN_GET_BY_ID_PATH: &str = "/feign/getById";

// Root-level service routes
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
