use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{parse_iso_date, validate_item_id, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use utoipa::ToSchema;

/// Category of the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Main,
    Side,
    Bottle,
    Dessert,
    Drink,
    Salad,
    Soup,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Main,
        Category::Side,
        Category::Bottle,
        Category::Dessert,
        Category::Drink,
        Category::Salad,
        Category::Soup,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "MAIN",
            Category::Side => "SIDE",
            Category::Bottle => "BOTTLE",
            Category::Dessert => "DESSERT",
            Category::Drink => "DRINK",
            Category::Salad => "SALAD",
            Category::Soup => "SOUP",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sellable article on a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Optional unique identifier for the article, such as a GUID. Must not contain any "." or "/" characters. Different articles with the same price on different days should still have different IDs. If not set, a unique ID will be generated internally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "abc")]
    pub id: Option<String>,
    /// Display name of the article. Names do not need to be unique.
    #[schema(example = "Burger")]
    pub name: String,
    /// The default price for the articles. Default prices are shown to guests before authentication. Yet, the final price is based on priceLookup if present.
    #[schema(example = 3.0)]
    pub price: f64,
    /// The price lookup code for the article. Whatever identifier is used in the cash register to identify the price group of articles, such as an article ID.
    #[schema(example = "123")]
    pub price_lookup: String,
    pub category: Category,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        price_lookup: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            price_lookup: price_lookup.into(),
            category,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The explicit id, or one derived from the menu date and the item's position.
    /// Derived ids are internal only and never serialized. They contain a `.`,
    /// which explicit ids may not, so the two never collide.
    pub fn resolved_id(&self, date: &str, position: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("auto.{}.{}", date, position),
        }
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validate_item_id(id)?;
        }
        Ok(())
    }
}

/// Items valid on a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "date": "2022-10-07",
    "items": [
        {"id": "abc", "name": "Burger", "price": 3.0, "priceLookup": "123", "category": "MAIN"},
        {"id": "def", "name": "Salad", "price": 1.5, "priceLookup": "456", "category": "SALAD"}
    ]
}))]
pub struct Menu {
    /// ISO date for which the menu is valid.
    #[schema(example = "2023-01-01")]
    pub date: String,
    /// List of items on the menu.
    pub items: Vec<Item>,
}

impl Menu {
    pub fn new(date: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            date: date.into(),
            items,
        }
    }
}

impl Validate for Menu {
    fn validate(&self) -> Result<()> {
        parse_iso_date("date", &self.date)?;

        let mut seen = HashSet::new();
        for (position, item) in self.items.iter().enumerate() {
            item.validate()?;
            let id = item.resolved_id(&self.date, position);
            if !seen.insert(id.clone()) {
                return Err(MenuError::ValidationError {
                    message: format!("Duplicate item id '{}' on menu {}", id, self.date),
                });
            }
        }
        Ok(())
    }
}

/// Menus on separate dates, answering a range query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "menus": [
        {"date": "2023-01-01", "items": [
            {"name": "Burger", "price": 3.0, "priceLookup": "123", "category": "MAIN"},
            {"name": "Salad", "price": 1.5, "priceLookup": "456", "category": "SALAD"}
        ]},
        {"date": "2023-01-02", "items": [
            {"name": "Pasta", "price": 3.0, "priceLookup": "123", "category": "MAIN"},
            {"name": "Salad", "price": 1.5, "priceLookup": "546", "category": "SALAD"}
        ]}
    ]
}))]
pub struct Menus {
    /// List of menus on separate dates.
    pub menus: Vec<Menu>,
}

impl Menus {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus }
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }
}

impl Validate for Menus {
    fn validate(&self) -> Result<()> {
        let mut dates = HashSet::new();
        for menu in &self.menus {
            menu.validate()?;
            if !dates.insert(menu.date.as_str()) {
                return Err(MenuError::ValidationError {
                    message: format!("More than one menu for date {}", menu.date),
                });
            }
        }
        Ok(())
    }
}

/// Message for additional information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
