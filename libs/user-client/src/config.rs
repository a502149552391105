use std::time::Duration;

const USER_SERVICE_NAME: &str = "USER_SERVICE_NAME";
const USER_SERVICE_INSTANCES: &str = "USER_SERVICE_INSTANCES";
const USER_CLIENT_TIMEOUT_SECS: &str = "USER_CLIENT_TIMEOUT_SECS";

const DEFAULT_SERVICE_NAME: &str = "user-service";
const DEFAULT_INSTANCES: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Logical name of the downstream service
    pub service_name: String,
    /// Base URLs of the physical instances backing the logical name
    pub instances: Vec<String>,
    pub request_timeout: Duration,
}

impl UserServiceConfig {
    pub fn from_env() -> Self {
        let service_name = std::env::var(USER_SERVICE_NAME)
            .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
        let instances = std::env::var(USER_SERVICE_INSTANCES)
            .unwrap_or_else(|_| DEFAULT_INSTANCES.to_string());
        let instances = parse_instance_list(&instances);
        let timeout_secs: u64 = std::env::var(USER_CLIENT_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            service_name,
            instances,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn parse_instance_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
