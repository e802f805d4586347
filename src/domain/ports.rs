use crate::domain::model::Menu;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn logo_path(&self) -> &str;
    fn menus_file(&self) -> Option<&str>;
}

/// Read-only access to menus keyed by calendar date.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn menu_for(&self, date: NaiveDate) -> Result<Option<Menu>>;

    /// Menus with `start <= date <= end`, ascending by date.
    async fn menus_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Menu>>;
}
