//! HTTP transport implementation.
//!
//! Endpoints:
//! - `GET /tools` - tool catalogue
//! - `POST /execute` - execute one function call
//! - `GET /health` - liveness probe
//! - `GET /` - service info
//!
//! Every execution request gets a 200 with a success or error envelope,
//! whatever the body size. Unknown routes and wrong methods get a JSON 404;
//! internal task failures get a 500.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::io::BufRead;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

use super::{TransportConfig, TransportError, TransportResult};
use crate::core::FunctionServer;
use crate::domains::tools::{FunctionResponse, ToolError};

/// HTTP transport handler.
pub struct HttpTransport {
    config: TransportConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C or the quit key.
    pub async fn run(self, server: FunctionServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on http://{} (CORS {})", addr, cors_status);
        info!("  → Tools:   GET /tools");
        info!("  → Execute: POST /execute");
        info!("  → Health:  GET /health");
        if self.config.quit_key {
            info!("Enter 'q' to quit the server");
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(self.config.quit_key))
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        info!("HTTP transport stopped");
        Ok(())
    }
}

/// Build the application router.
pub fn build_router(server: FunctionServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/tools", get(handle_tools))
        .route("/execute", post(handle_execute))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(server);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<FunctionServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "endpoints": {
            "tools": "GET /tools",
            "execute": "POST /execute",
            "health": "GET /health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Tool catalogue query.
async fn handle_tools(State(server): State<FunctionServer>) -> impl IntoResponse {
    info!("Processing tool catalogue request");
    Json(server.list_tools())
}

/// Function execution.
///
/// Operations are CPU-bound, so they run on the blocking pool.
#[instrument(skip_all)]
async fn handle_execute(
    State(server): State<FunctionServer>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read request body: {}", e);
            let response = FunctionResponse::from_error("", &ToolError::MalformedRequest);
            return (StatusCode::OK, Json(response)).into_response();
        }
    };

    match tokio::task::spawn_blocking(move || server.execute(&body)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Function execution task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Fallback for unknown routes.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}

/// Resolve on Ctrl-C, or on a `q` line from stdin when enabled.
async fn shutdown_signal(quit_key: bool) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let quit = async {
        // A closed stdin drops the sender; keep serving in that case.
        if !quit_key || spawn_quit_listener().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = quit => info!("Quit key pressed, shutting down"),
    }
}

/// Watch stdin on a detached thread so a pending read never blocks exit.
fn spawn_quit_listener() -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => {
                    let _ = tx.send(());
                    return;
                }
                Ok(_) => continue,
                Err(_) => return,
            }
        }
    });
    rx
}
