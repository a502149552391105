use std::fmt;

#[derive(Debug)]
pub enum UserClientError {
    /// No instance could be resolved for the logical service name
    ServiceUnresolvable(String),
    /// HTTP request failed (connect error, timeout, ...)
    RequestFailed(String),
    /// Downstream answered with a non-success status
    ErrorStatus { status: u16, body: String },
    /// Response body could not be read
    InvalidResponse(String),
}

impl fmt::Display for UserClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserClientError::ServiceUnresolvable(service) => {
                write!(f, "no instance available for service: {service}")
            }
            UserClientError::RequestFailed(msg) => write!(f, "user service request failed: {msg}"),
            UserClientError::ErrorStatus { status, body } => {
                write!(f, "user service returned status {status}: {body}")
            }
            UserClientError::InvalidResponse(msg) => {
                write!(f, "invalid response from user service: {msg}")
            }
        }
    }
}

impl std::error::Error for UserClientError {}

impl From<reqwest::Error> for UserClientError {
    fn from(err: reqwest::Error) -> Self {
        UserClientError::RequestFailed(err.to_string())
    }
}
