use std::sync::Arc;

use user_client::{HttpUserClient, UserClient};

pub struct AppState<C = HttpUserClient>
where
    C: UserClient + Send + Sync + 'static,
{
    pub user_client: Arc<C>,
    pub env: String,
}

// Manual impl: a derive would demand C: Clone, but the client is shared
// through the Arc and never cloned itself.
impl<C> Clone for AppState<C>
where
    C: UserClient + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            user_client: Arc::clone(&self.user_client),
            env: self.env.clone(),
        }
    }
}
