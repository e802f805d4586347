use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::docs::render_html;
use crate::core::openapi::SchemaPublisher;
use crate::domain::model::{Menu, Menus, Message};
use crate::domain::ports::MenuRepository;
use crate::domain::services::MenuService;
use crate::utils::error::{MenuError, Result};

/// Shared state handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub menus: MenuService,
    pub schema: Arc<SchemaPublisher>,
}

impl AppState {
    pub fn new(repository: Arc<dyn MenuRepository>, schema: SchemaPublisher) -> Self {
        Self {
            menus: MenuService::new(repository),
            schema: Arc::new(schema),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

/// Get menu for date
#[utoipa::path(
    get,
    path = "/menus/{date}",
    params(
        ("date" = String, Path, description = "Date for which the menu is requested.", example = "2023-01-01")
    ),
    responses(
        (status = 200, description = "The menu.", body = Menu),
        (status = 400, description = "The date is not an ISO-8601 date.", body = Message),
        (status = 404, description = "No menu available for the requested date.", body = Message)
    ),
    tag = "menus"
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Menu>> {
    let menu = state.menus.get_menu(&date).await?;
    Ok(Json(menu))
}

/// Get menus for date range
///
/// Get items available in cash register to synchronize prices.
#[utoipa::path(
    get,
    path = "/menus/",
    params(
        ("start" = String, Query, description = "Start date for which the menus are requested.", example = "2023-01-01"),
        ("end" = String, Query, description = "End date for which the menus are requested (inclusive).", example = "2023-01-02")
    ),
    responses(
        (status = 200, description = "The menus.", body = Menus),
        (status = 400, description = "Missing or malformed dates, or start after end.", body = Message),
        (status = 404, description = "No menus available for the requested date range.", body = Message)
    ),
    tag = "menus"
)]
pub async fn get_menus(
    State(state): State<AppState>,
    query: std::result::Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Menus>> {
    let Query(range) = query.map_err(|e| MenuError::invalid_argument("query", e.body_text()))?;
    let menus = state.menus.get_menus(&range.start, &range.end).await?;
    Ok(Json(menus))
}

pub async fn openapi_json(State(state): State<AppState>) -> Result<Json<Value>> {
    let document = state.schema.document().await?;
    Ok(Json(document.clone()))
}

pub async fn redoc(State(state): State<AppState>) -> Result<Html<String>> {
    let document = state.schema.document().await?;
    Ok(Html(render_html(document)?))
}

/// 未註冊的路徑也回傳 `Message`
pub async fn not_found(uri: Uri) -> MenuError {
    MenuError::not_found(format!("No route for {}", uri.path()))
}
