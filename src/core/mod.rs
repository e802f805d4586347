pub mod docs;
pub mod handlers;
pub mod openapi;
pub mod server;

pub use crate::domain::model::{Category, Item, Menu, Menus, Message};
pub use crate::domain::ports::{ConfigProvider, MenuRepository, Storage};
pub use crate::utils::error::Result;
