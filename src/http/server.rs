//! Health endpoint HTTP server.
//!
//! # Responsibilities
//! - Create the Axum router serving the aggregated status
//! - Wire up middleware (tracing, request timeout)
//! - Serve until shutdown is signalled
//!
//! # Design Decisions
//! - Handlers only ever snapshot the status store; they never mutate
//!   shared state and never wait on an in-progress cycle
//! - Every path answers with the status, matching the legacy listener's
//!   catch-all handler

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::status::store::StatusStore;

const HANDLER_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub status: Arc<StatusStore>,
}

/// HTTP server exposing the aggregated health verdict.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server reading from the given status store.
    pub fn new(status: Arc<StatusStore>) -> Self {
        let state = AppState { status };
        let router = Router::new()
            .route("/", get(status_handler))
            .route("/{*path}", get(status_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(HANDLER_TIMEOUT))
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Serve requests on the given listener until shutdown is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "health endpoint starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("health endpoint received shutdown signal");
            })
            .await?;

        tracing::info!("health endpoint stopped");
        Ok(())
    }
}

/// Answer with the most recently published aggregated status.
async fn status_handler(State(state): State<AppState>) -> Response {
    let snapshot = state.status.snapshot();
    tracing::debug!(status_code = snapshot.status_code, "answering health request");

    let body = match serde_json::to_string(&snapshot.payload()) {
        Ok(json) => json + "\n",
        Err(e) => {
            tracing::error!(error = %e, "unable to serialize status payload");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let status =
        StatusCode::from_u16(snapshot.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
