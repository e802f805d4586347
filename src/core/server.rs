use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::{InMemoryMenuStore, LocalStorage};
use crate::core::handlers::{self, AppState};
use crate::core::openapi::{LogoPolicy, SchemaPublisher};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/menus/:date", get(handlers::get_menu))
        .route("/menus/", get(handlers::get_menus))
        .route("/openapi.json", get(handlers::openapi_json))
        .route("/redoc", get(handlers::redoc))
        .fallback(handlers::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the repository named by the configuration; the sample menus when none is set.
pub async fn build_repository<C: ConfigProvider>(config: &C) -> Result<InMemoryMenuStore> {
    match config.menus_file() {
        Some(path) => {
            let storage = LocalStorage::new(".".to_string());
            InMemoryMenuStore::load(&storage, path).await
        }
        None => {
            tracing::info!("📋 No menus file configured, serving sample menus");
            InMemoryMenuStore::sample()
        }
    }
}

pub struct MenuServer {
    state: AppState,
}

impl MenuServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let repository = build_repository(config).await?;
        let schema = SchemaPublisher::new(config.logo_path(), LogoPolicy::Optional);
        Ok(Self::new(AppState::new(Arc::new(repository), schema)))
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Serves until Ctrl-C.
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        self.run_until(listener, shutdown_signal()).await
    }

    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("🚀 Menu import API listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server on {} stopped", addr);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
