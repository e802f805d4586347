//! OpenAPI document for the menu endpoints.
//!
//! Paths and schemas come from the `#[utoipa::path]` handlers and the `ToSchema`
//! models. The document is generated on first request and then reused for the lifetime of
//! the [`SchemaPublisher`]. The branding logo is read from disk at generation time
//! and embedded as a `data:` URI under `info.x-logo.url`.

use crate::core::handlers;
use crate::domain::model::{Category, Item, Menu, Menus, Message};
use crate::utils::error::{MenuError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use std::path::PathBuf;
use tokio::sync::OnceCell;
use utoipa::OpenApi;

pub const API_TITLE: &str = "VisioLab Menu Import API";
pub const API_DESCRIPTION: &str = "API for importing menus into the VisioLab backend.";

/// What to do when the logo file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPolicy {
    /// Fail document generation (documentation export).
    Required,
    /// Log a warning and publish the document without `x-logo` (live service).
    Optional,
}

#[derive(Debug)]
pub struct SchemaPublisher {
    logo_path: PathBuf,
    policy: LogoPolicy,
    document: OnceCell<Value>,
    #[cfg(test)]
    generations: std::sync::atomic::AtomicUsize,
}

impl SchemaPublisher {
    pub fn new(logo_path: impl Into<PathBuf>, policy: LogoPolicy) -> Self {
        Self {
            logo_path: logo_path.into(),
            policy,
            document: OnceCell::new(),
            #[cfg(test)]
            generations: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Returns the memoized document, generating it on first call.
    /// Concurrent first callers wait on a single generation.
    pub async fn document(&self) -> Result<&Value> {
        self.document.get_or_try_init(|| self.generate()).await
    }

    pub fn is_generated(&self) -> bool {
        self.document.initialized()
    }

    async fn generate(&self) -> Result<Value> {
        #[cfg(test)]
        self.generations.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        let mut document = build_openapi_document()?;

        if let Some(url) = self.load_logo().await? {
            document["info"]["x-logo"] = json!({ "url": url });
        }

        tracing::info!("📄 Generated OpenAPI document");
        Ok(document)
    }

    async fn load_logo(&self) -> Result<Option<String>> {
        match tokio::fs::read(&self.logo_path).await {
            Ok(bytes) => Ok(Some(logo_data_uri(&bytes))),
            Err(e) => match self.policy {
                LogoPolicy::Required => {
                    tracing::error!("❌ Cannot read logo {}: {}", self.logo_path.display(), e);
                    Err(MenuError::LogoMissing {
                        path: self.logo_path.display().to_string(),
                    })
                }
                LogoPolicy::Optional => {
                    tracing::warn!(
                        "Logo {} unavailable ({}), publishing schema without x-logo",
                        self.logo_path.display(),
                        e
                    );
                    Ok(None)
                }
            },
        }
    }
}

pub fn logo_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Contract derived from the handler annotations and the model schemas.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "VisioLab Menu Import API",
        description = "API for importing menus into the VisioLab backend."
    ),
    paths(handlers::get_menu, handlers::get_menus),
    components(schemas(Item, Category, Menu, Menus, Message)),
    tags((name = "menus", description = "Menu retrieval by date or date range"))
)]
pub struct ApiDoc;

/// Builds the OpenAPI document without the logo. Pure and deterministic.
pub fn build_openapi_document() -> Result<Value> {
    Ok(serde_json::to_value(ApiDoc::openapi())?)
}
