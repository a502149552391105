use std::time::Duration;
use tokio::signal;

/// Resolves once the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal(drain_timeout: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(
        signal = signal_name,
        drain_timeout_secs = drain_timeout.as_secs(),
        "shutting down, draining connections"
    );
}
