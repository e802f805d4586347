pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{InMemoryMenuStore, LocalStorage};
pub use crate::core::docs::DocsExporter;
pub use crate::core::handlers::AppState;
pub use crate::core::openapi::{LogoPolicy, SchemaPublisher};
pub use crate::core::server::{create_router, MenuServer};
pub use domain::model::{Category, Item, Menu, Menus, Message};
pub use domain::services::MenuService;
pub use utils::error::{MenuError, Result};
