use crate::domain::model::{Menu, Menus};
use crate::domain::ports::MenuRepository;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{parse_date_range, parse_iso_date};
use std::sync::Arc;

pub const MENU_NOT_FOUND: &str = "No menu available for the requested date.";
pub const MENUS_NOT_FOUND: &str = "No menus available for the requested date range.";

/// Turns raw request parameters into repository lookups.
#[derive(Clone)]
pub struct MenuService {
    repository: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_menu(&self, date: &str) -> Result<Menu> {
        let date = parse_iso_date("date", date)?;
        tracing::debug!(%date, "Looking up menu");

        self.repository
            .menu_for(date)
            .await?
            .ok_or_else(|| MenuError::not_found(MENU_NOT_FOUND))
    }

    pub async fn get_menus(&self, start: &str, end: &str) -> Result<Menus> {
        let (start, end) = parse_date_range(start, end)?;
        tracing::debug!(%start, %end, "Looking up menus in range");

        let menus = self.repository.menus_between(start, end).await?;
        if menus.is_empty() {
            return Err(MenuError::not_found(MENUS_NOT_FOUND));
        }
        Ok(Menus::new(menus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Category, Item};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    struct MockRepository {
        menus: BTreeMap<NaiveDate, Menu>,
    }

    impl MockRepository {
        fn new(dates: &[&str]) -> Self {
            let menus = dates
                .iter()
                .map(|d| {
                    let key = NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
                    let menu = Menu::new(*d, vec![Item::new("Soup", 2.0, "7", Category::Soup)]);
                    (key, menu)
                })
                .collect();
            Self { menus }
        }
    }

    #[async_trait]
    impl MenuRepository for MockRepository {
        async fn menu_for(&self, date: NaiveDate) -> Result<Option<Menu>> {
            Ok(self.menus.get(&date).cloned())
        }

        async fn menus_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Menu>> {
            Ok(self.menus.range(start..=end).map(|(_, m)| m.clone()).collect())
        }
    }

    fn service(dates: &[&str]) -> MenuService {
        MenuService::new(Arc::new(MockRepository::new(dates)))
    }

    #[tokio::test]
    async fn test_get_menu_returns_matching_date() {
        let service = service(&["2023-01-01", "2023-01-05"]);
        let menu = service.get_menu("2023-01-05").await.unwrap();
        assert_eq!(menu.date, "2023-01-05");
    }

    #[tokio::test]
    async fn test_get_menu_not_found() {
        let service = service(&["2023-01-01"]);
        let err = service.get_menu("2099-12-31").await.unwrap_err();
        assert!(matches!(err, MenuError::NotFound { ref message } if message == MENU_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_menu_rejects_malformed_date() {
        let service = service(&["2023-01-01"]);
        let err = service.get_menu("tomorrow").await.unwrap_err();
        assert!(matches!(err, MenuError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_get_menus_is_inclusive() {
        let service = service(&["2022-12-31", "2023-01-01", "2023-01-02", "2023-01-03"]);
        let menus = service.get_menus("2023-01-01", "2023-01-02").await.unwrap();

        let dates: Vec<&str> = menus.menus.iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-01-01", "2023-01-02"]);
    }

    #[tokio::test]
    async fn test_get_menus_single_day_range() {
        let service = service(&["2023-01-01", "2023-01-02"]);
        let menus = service.get_menus("2023-01-02", "2023-01-02").await.unwrap();
        assert_eq!(menus.len(), 1);
    }

    #[tokio::test]
    async fn test_get_menus_empty_range_is_not_found() {
        let service = service(&["2023-01-01"]);
        let err = service.get_menus("2024-01-01", "2024-01-31").await.unwrap_err();
        assert!(matches!(err, MenuError::NotFound { ref message } if message == MENUS_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_menus_rejects_reversed_range() {
        let service = service(&["2023-01-01"]);
        let err = service.get_menus("2023-01-02", "2023-01-01").await.unwrap_err();
        assert!(matches!(err, MenuError::InvalidArgument { .. }));
    }
}
