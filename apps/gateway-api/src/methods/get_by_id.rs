use axum::extract::State;

use user_client::UserClient;

use crate::constants::USER_LOOKUP_ID;
use crate::error::{handle_client_error, ApiError};
use crate::methods::routes::FEIGN_GET_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = FEIGN_GET_BY_ID_PATH,
    tag = "feign",
    responses(
        (status = 200, description = "Raw user payload from the downstream service", body = String),
        (status = 502, description = "Downstream user service call failed"),
    )
)]
pub async fn get_by_id<C>(State(state): State<AppState<C>>) -> Result<String, ApiError>
where
    C: UserClient + Send + Sync + 'static,
{
    // Fixed lookup key; the downstream body is passed through untouched.
    state
        .user_client
        .get_by_id(USER_LOOKUP_ID)
        .await
        .map_err(|e| handle_client_error(e, &state.env, "get_by_id"))
}
