use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use crate::errors::UserClientError;

/// Maps a logical service name to the base URL of one physical instance.
///
/// This is the seam where a real load balancer or service registry would
/// plug in; the gateway only needs "give me an instance for this name".
pub trait ServiceResolver: Send + Sync {
    fn resolve(&self, service: &str) -> Result<Url, UserClientError>;
}

/// Static resolver rotating through a configured instance list per service.
pub struct RoundRobinResolver {
    services: HashMap<String, Vec<Url>>,
    next: AtomicUsize,
}

impl RoundRobinResolver {
    pub fn new(service: &str, instances: &[String]) -> Result<Self, UserClientError> {
        let urls = instances
            .iter()
            .map(|raw| {
                Url::parse(raw).map_err(|e| {
                    UserClientError::ServiceUnresolvable(format!(
                        "invalid instance url {raw}: {e}"
                    ))
                })
            })
            .collect::<Result<Vec<Url>, UserClientError>>()?;

        if urls.is_empty() {
            return Err(UserClientError::ServiceUnresolvable(format!(
                "no instances configured for {service}"
            )));
        }

        let mut services = HashMap::new();
        services.insert(service.to_string(), urls);

        Ok(Self {
            services,
            next: AtomicUsize::new(0),
        })
    }
}

impl ServiceResolver for RoundRobinResolver {
    fn resolve(&self, service: &str) -> Result<Url, UserClientError> {
        let instances = self
            .services
            .get(service)
            .filter(|urls| !urls.is_empty())
            .ok_or_else(|| UserClientError::ServiceUnresolvable(service.to_string()))?;

        let index = self.next.fetch_add(1, Ordering::Relaxed) % instances.len();
        Ok(instances[index].clone())
    }
}
