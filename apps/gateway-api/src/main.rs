mod config;
mod constants;
mod error;
mod methods;
mod shutdown;
mod state;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_client::{HttpUserClient, RoundRobinResolver, UserServiceConfig};

use crate::config::MiddlewareConfig;
use crate::constants::{ENV, GATEWAY_API_PORT, LOCAL_ENV, SERVICE};
use crate::methods::get_by_id::__path_get_by_id;
use crate::methods::get_by_id::get_by_id;
use crate::methods::health_check::health_check;
use crate::methods::routes::{FEIGN_GET_BY_ID_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH};
use crate::shutdown::shutdown_signal;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_by_id),
    tags(
        (name = "feign", description = "Downstream user lookup endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env = std::env::var(ENV)
        .map_err(|_| format!("{} environment variable must be set", ENV))?;

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    // Load middleware configuration from environment
    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        rate_limit_per_minute = middleware_config.rate_limit_per_minute,
        rate_limit_burst = middleware_config.rate_limit_burst,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    // Build the downstream user-service client
    let client_config = UserServiceConfig::from_env();
    tracing::info!(
        service_name = %client_config.service_name,
        instance_count = client_config.instances.len(),
        timeout_secs = client_config.request_timeout.as_secs(),
        "user service client configuration loaded"
    );

    let resolver = RoundRobinResolver::new(&client_config.service_name, &client_config.instances)
        .map_err(|e| format!("Failed to build service resolver: {}", e))?;
    let user_client = HttpUserClient::new(client_config, Arc::new(resolver))
        .map_err(|e| format!("Failed to build user service client: {}", e))?;

    let app_state = AppState {
        user_client: Arc::new(user_client),
        env: env.clone(),
    };

    // Build routes: the gateway endpoint plus health and docs at root
    let mut app = Router::new()
        .route(FEIGN_GET_BY_ID_PATH, get(get_by_id::<HttpUserClient>))
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // ============================================
    // Middleware stack (applied inner to outer)
    // Order: Request → Rate Limit → Timeout → CORS → Body Limit → Request ID → Trace → Handler
    // ============================================

    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static("x-request-id");
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            MakeRequestUuid,
        ));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(middleware_config.max_body_size));

    // 4. CORS layer
    let cors_layer = if middleware_config.cors_allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, x_request_id])
    } else {
        let origins: Vec<_> = middleware_config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static("x-request-id"),
            ])
    };
    app = app.layer(cors_layer);

    // 5. Timeout layer (returns 408 Request Timeout)
    app = app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        middleware_config.request_timeout,
    ));

    // 6. Rate limiting layer (outermost)
    // Calculate milliseconds between requests: 60000ms / requests_per_minute
    let replenish_interval_ms = 60_000 / middleware_config.rate_limit_per_minute as u64;
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms)
            .burst_size(middleware_config.rate_limit_burst)
            .finish()
            .expect("failed to build governor config"),
    );
    app = app.layer(GovernorLayer {
        config: governor_conf,
    });

    // Read port from env (default to 3000)
    let port: u16 = std::env::var(GATEWAY_API_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    let public_url = format!("http://127.0.0.1:{}", port);

    let listener = TcpListener::bind(&addr).await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!(
        "gateway-api is ready to accept requests at: {}",
        public_url
    );

    // Serve with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(middleware_config.shutdown_timeout))
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
