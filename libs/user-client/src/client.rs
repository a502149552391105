use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::UserServiceConfig;
use crate::errors::UserClientError;
use crate::resolver::ServiceResolver;

const GET_BY_ID_PATH: &str = "user/getById";

/// Remote lookup against the downstream user service.
#[async_trait]
pub trait UserClient: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<String, UserClientError>;
}

/// Hand-written HTTP implementation of [`UserClient`].
///
/// Each call resolves the logical service name to one physical instance
/// through the injected resolver and issues a single GET against it. The
/// downstream body is returned as-is; no retries, no fallback.
pub struct HttpUserClient {
    config: UserServiceConfig,
    http: Client,
    resolver: Arc<dyn ServiceResolver>,
}

impl HttpUserClient {
    pub fn new(
        config: UserServiceConfig,
        resolver: Arc<dyn ServiceResolver>,
    ) -> Result<Self, UserClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| UserClientError::RequestFailed(e.to_string()))?;

        Ok(Self {
            config,
            http,
            resolver,
        })
    }
}

#[async_trait]
impl UserClient for HttpUserClient {
    async fn get_by_id(&self, id: &str) -> Result<String, UserClientError> {
        let mut url = self.resolver.resolve(&self.config.service_name)?;
        // Append to any path prefix the instance URL carries, do not replace it.
        url.path_segments_mut()
            .map_err(|()| {
                UserClientError::ServiceUnresolvable(self.config.service_name.clone())
            })?
            .pop_if_empty()
            .extend(GET_BY_ID_PATH.split('/'));
        url.query_pairs_mut().append_pair("id", id);

        tracing::debug!(service = %self.config.service_name, instance = %url.host_str().unwrap_or(""), "calling user service");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UserClientError::ErrorStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| UserClientError::InvalidResponse(e.to_string()))
    }
}
