use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Product categories offered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Home Appliances")]
    HomeAppliances,
    Tools,
    #[default]
    Books,
    Clothing,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::HomeAppliances => "Home Appliances",
            Category::Tools => "Tools",
            Category::Books => "Books",
            Category::Clothing => "Clothing",
        };
        f.write_str(name)
    }
}

/// One catalog row. `quantity` and `available` seed the ledger's stock table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub quantity: u32,
    pub available: bool,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate product id {0} in catalog")]
    DuplicateProduct(ProductId),
}

/// The read-only product catalog, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.product_id)) {
            return Err(CatalogError::DuplicateProduct(dup.product_id));
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of [`CatalogItem`]s.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&json)
    }

    /// The demo catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}
