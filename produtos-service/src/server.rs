use std::sync::Arc;

use axum::{http::StatusCode, response::Response, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{self, fail};
use crate::app;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub apps: Arc<app::Container>,
}

impl AppState {
    pub fn new(apps: app::Container) -> Self {
        Self { apps: Arc::new(apps) }
    }
}

/// 构建完整路由
pub fn create_app(state: AppState) -> Router {
    api::register()
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> Response {
    fail(StatusCode::NOT_FOUND, "rota não encontrada")
}

/// 等待 Ctrl-C 或 SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
