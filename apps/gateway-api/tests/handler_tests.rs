use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

use gateway_api::methods::get_by_id::get_by_id;
use gateway_api::methods::health_check::health_check;
use gateway_api::methods::routes::{FEIGN_GET_BY_ID_PATH, SERVICE_HEALTH_PATH};
use gateway_api::state::AppState;
use user_client::{UserClient, UserClientError};

// ==================== MOCKS ====================

mock! {
    pub Client {}

    #[async_trait]
    impl UserClient for Client {
        async fn get_by_id(&self, id: &str) -> Result<String, UserClientError>;
    }
}

// ==================== TEST HELPERS ====================

fn test_app(client: MockClient, env: &str) -> Router {
    Router::new()
        .route(FEIGN_GET_BY_ID_PATH, get(get_by_id::<MockClient>))
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .with_state(AppState {
            user_client: Arc::new(client),
            env: env.to_string(),
        })
}

async fn send_get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

// ==================== GET BY ID HANDLER TESTS ====================

#[tokio::test]
async fn test_get_by_id_success() {
    let mut client = MockClient::new();
    client
        .expect_get_by_id()
        .times(1)
        .returning(|_| Ok("user-200-payload".to_string()));

    let app = test_app(client, "local");

    let (status, body) = send_get(app, FEIGN_GET_BY_ID_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
    assert_eq!(body, b"user-200-payload");
}

#[tokio::test]
async fn test_get_by_id_forwards_fixed_identifier() {
    let mut client = MockClient::new();
    client
        .expect_get_by_id()
        .withf(|id| id == "200")
        .times(1)
        .returning(|_| Ok("ok".to_string()));

    let app = test_app(client, "local");

    let (status, _) = send_get(app, FEIGN_GET_BY_ID_PATH).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_by_id_body_is_verbatim() {
    // Payload that would change under any re-encoding or wrapping
    let payload = "{\"id\":200,\"name\":\"Zoë\"}\n";
    let expected = payload.to_string();

    let mut client = MockClient::new();
    client
        .expect_get_by_id()
        .times(1)
        .returning(move |_| Ok(payload.to_string()));

    let app = test_app(client, "local");

    let (status, body) = send_get(app, FEIGN_GET_BY_ID_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), expected);
}

#[tokio::test]
async fn test_get_by_id_client_failure_returns_502() {
    let mut client = MockClient::new();
    client
        .expect_get_by_id()
        .times(1)
        .returning(|_| Err(UserClientError::RequestFailed("connection refused".to_string())));

    let app = test_app(client, "local");

    let (status, body) = send_get(app, FEIGN_GET_BY_ID_PATH).await;

    // Never a silent empty 200 on dependency failure
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "bad_gateway");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_get_by_id_downstream_error_status_returns_502() {
    let mut client = MockClient::new();
    client.expect_get_by_id().times(1).returning(|_| {
        Err(UserClientError::ErrorStatus {
            status: 500,
            body: "downstream exploded".to_string(),
        })
    });

    let app = test_app(client, "local");

    let (status, _) = send_get(app, FEIGN_GET_BY_ID_PATH).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_get_by_id_failure_message_redacted_in_prod() {
    let mut client = MockClient::new();
    client
        .expect_get_by_id()
        .times(1)
        .returning(|_| Err(UserClientError::RequestFailed("10.0.0.7 unreachable".to_string())));

    let app = test_app(client, "prod01");

    let (status, body) = send_get(app, FEIGN_GET_BY_ID_PATH).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "upstream service unavailable");
}

// ==================== APP STATE TESTS ====================

#[tokio::test]
async fn test_app_state_clone_shares_client() {
    let mut client = MockClient::new();
    client
        .expect_get_by_id()
        .times(1)
        .returning(|_| Ok("shared".to_string()));

    let state = AppState {
        user_client: Arc::new(client),
        env: "local".to_string(),
    };

    // Cloning must not require the client itself to be Clone; both copies
    // see the same instance through the Arc.
    let cloned = state.clone();
    assert_eq!(cloned.env, state.env);
    assert!(Arc::ptr_eq(&cloned.user_client, &state.user_client));

    let result = cloned.user_client.get_by_id("200").await;
    assert_eq!(result.unwrap(), "shared");
}

// ==================== HEALTH CHECK TESTS ====================

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = test_app(MockClient::new(), "local");

    let (status, body) = send_get(app, SERVICE_HEALTH_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

// ==================== API ERROR MAPPING TESTS ====================

#[tokio::test]
async fn test_api_error_bad_gateway() {
    use axum::response::IntoResponse;
    use gateway_api::error::ApiError;

    let error = ApiError::BadGateway("upstream down".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_api_error_internal() {
    use axum::response::IntoResponse;
    use gateway_api::error::ApiError;

    let error = ApiError::Internal("unexpected".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ==================== IS_PROD_LIKE TESTS ====================

#[tokio::test]
async fn test_is_prod_like() {
    use gateway_api::error::is_prod_like;

    assert!(!is_prod_like("local"));
    assert!(!is_prod_like("dev"));
    assert!(!is_prod_like("test"));
    assert!(is_prod_like("prod"));
    assert!(is_prod_like("PROD"));
    assert!(is_prod_like("prod01"));
    assert!(is_prod_like("production"));
}
