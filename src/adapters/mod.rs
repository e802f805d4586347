// Adapters layer: concrete implementations of the domain ports (menu store, file storage).

pub mod menu_store;
pub mod storage;

pub use menu_store::InMemoryMenuStore;
pub use storage::LocalStorage;
