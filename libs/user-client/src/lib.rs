pub mod client;
pub mod config;
pub mod errors;
pub mod resolver;

pub use client::{HttpUserClient, UserClient};
pub use config::UserServiceConfig;
pub use errors::UserClientError;
pub use resolver::{RoundRobinResolver, ServiceResolver};
