use crate::domain::model::{Category, Item, Menu, Menus};
use crate::domain::ports::{MenuRepository, Storage};
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{parse_iso_date, Validate};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Immutable date-keyed menu store. Built once at startup and shared across requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuStore {
    menus: BTreeMap<NaiveDate, Menu>,
}

impl InMemoryMenuStore {
    /// Builds a store after validating every menu. Duplicate dates are rejected.
    pub fn from_menus(menus: Menus) -> Result<Self> {
        menus.validate()?;

        let mut by_date = BTreeMap::new();
        for menu in menus.menus {
            let date = parse_iso_date("date", &menu.date)?;
            if by_date.insert(date, menu).is_some() {
                return Err(MenuError::ValidationError {
                    message: format!("More than one menu for date {}", date),
                });
            }
        }

        Ok(Self { menus: by_date })
    }

    /// The two sample menus published with the API contract.
    pub fn sample() -> Result<Self> {
        let menus = Menus::new(vec![
            Menu::new(
                "2023-01-01",
                vec![
                    Item::new("Burger", 3.0, "123", Category::Main),
                    Item::new("Salad", 1.5, "456", Category::Salad),
                ],
            ),
            Menu::new(
                "2023-01-02",
                vec![
                    Item::new("Pasta", 3.0, "123", Category::Main),
                    Item::new("Salad", 1.5, "546", Category::Salad),
                ],
            ),
        ]);

        Self::from_menus(menus)
    }

    /// Loads a `{"menus": [...]}` JSON document through the given storage.
    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage.read_file(path).await?;
        let menus: Menus = serde_json::from_slice(&bytes)?;
        let store = Self::from_menus(menus).map_err(|e| MenuError::ValidationError {
            message: format!("menus file '{}': {}", path, e),
        })?;

        tracing::info!("📋 Loaded {} menus from {}", store.len(), path);
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuStore {
    async fn menu_for(&self, date: NaiveDate) -> Result<Option<Menu>> {
        Ok(self.menus.get(&date).cloned())
    }

    async fn menus_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Menu>> {
        if start > end {
            return Ok(Vec::new());
        }
        Ok(self
            .menus
            .range(start..=end)
            .map(|(_, menu)| menu.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.as_bytes().to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                MenuError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(path.to_string())
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_sample_store_contents() {
        let store = InMemoryMenuStore::sample().unwrap();
        assert_eq!(store.len(), 2);

        let menu = store.menu_for(date("2023-01-02")).await.unwrap().unwrap();
        assert_eq!(menu.items[0].name, "Pasta");
        assert_eq!(menu.items[1].price_lookup, "546");

        assert!(store.menu_for(date("2099-12-31")).await.unwrap().is_none());
    }

    #[test]
    fn test_store_is_shared_across_threads() {
        let store = Arc::new(InMemoryMenuStore::sample().unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    tokio_test::block_on(store.menu_for(date("2023-01-01")))
                        .unwrap()
                        .unwrap()
                })
            })
            .collect();

        let menus: Vec<Menu> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(menus.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_range_is_inclusive_and_ordered() {
        let store = InMemoryMenuStore::sample().unwrap();

        let menus = store
            .menus_between(date("2022-12-01"), date("2023-01-31"))
            .await
            .unwrap();
        let dates: Vec<&str> = menus.iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-01-01", "2023-01-02"]);

        let menus = store
            .menus_between(date("2023-01-02"), date("2023-01-02"))
            .await
            .unwrap();
        assert_eq!(menus.len(), 1);

        let menus = store
            .menus_between(date("2023-01-02"), date("2023-01-01"))
            .await
            .unwrap();
        assert!(menus.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_storage() {
        let json = r#"{"menus":[
            {"date":"2023-03-02","items":[{"id":"s1","name":"Tomato Soup","price":2.5,"priceLookup":"77","category":"SOUP"}]},
            {"date":"2023-03-01","items":[]}
        ]}"#;
        let storage = MockStorage::with_file("menus.json", json);

        let store = InMemoryMenuStore::load(&storage, "menus.json").await.unwrap();
        assert_eq!(store.len(), 2);

        let menus = store
            .menus_between(date("2023-03-01"), date("2023-03-31"))
            .await
            .unwrap();
        assert_eq!(menus[0].date, "2023-03-01");
        assert_eq!(menus[1].items[0].id.as_deref(), Some("s1"));
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_dates() {
        let json = r#"{"menus":[
            {"date":"2023-03-01","items":[]},
            {"date":"2023-03-01","items":[]}
        ]}"#;
        let storage = MockStorage::with_file("menus.json", json);

        let err = InMemoryMenuStore::load(&storage, "menus.json").await.unwrap_err();
        assert!(matches!(err, MenuError::ValidationError { .. }));
    }

    #[test]
    fn test_differently_spelled_dates_do_not_overwrite() {
        let menus = Menus::new(vec![
            Menu::new("2023-03-01", vec![Item::new("A", 1.0, "1", Category::Main)]),
            Menu::new("2023-3-1", vec![Item::new("B", 2.0, "2", Category::Main)]),
        ]);

        let err = InMemoryMenuStore::from_menus(menus).unwrap_err();
        assert!(matches!(err, MenuError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_sample_goes_through_validation() {
        let store = InMemoryMenuStore::sample().unwrap();
        let menus = store
            .menus_between(date("2023-01-01"), date("2023-01-02"))
            .await
            .unwrap();

        assert!(Menus::new(menus).validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_category() {
        let json = r#"{"menus":[{"date":"2023-03-01","items":[
            {"name":"Pizza","price":8.0,"priceLookup":"1","category":"PIZZA"}
        ]}]}"#;
        let storage = MockStorage::with_file("menus.json", json);

        let err = InMemoryMenuStore::load(&storage, "menus.json").await.unwrap_err();
        assert!(matches!(err, MenuError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let storage = MockStorage::with_file("other.json", "{}");
        let err = InMemoryMenuStore::load(&storage, "menus.json").await.unwrap_err();
        assert!(matches!(err, MenuError::IoError(_)));
    }
}
