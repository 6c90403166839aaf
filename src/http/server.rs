//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up the request pipeline (tracing, CORS, body limit, logging, id checks)
//! - Bind server to listener
//! - Serve until the shutdown channel fires, then drain

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handlers::{create_project, delete_project, list_projects, replace_project};
use crate::http::middleware::{cors_layer, log_request, validate_project_id};
use crate::store::ProjectStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}

/// HTTP server for the projects API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: ServiceConfig, store: Arc<dyn ProjectStore>) -> Self {
        let router = Self::build_router(&config, AppState::new(store));
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let by_id = Router::new()
            .route(
                "/projects/{id}",
                put(replace_project).delete(delete_project),
            )
            .route_layer(middleware::from_fn(validate_project_id));

        let router = Router::new()
            .route("/projects", get(list_projects).post(create_project))
            .route("/projects/", get(list_projects).post(create_project))
            .merge(by_id)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(DefaultBodyLimit::max(config.security.max_body_size))
                    .layer(middleware::from_fn(log_request)),
            );

        let router = if config.cors.enabled {
            router.layer(cors_layer())
        } else {
            router
        };

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
