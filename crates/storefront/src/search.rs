//! Catalog search: filter by category and an inclusive price range, then paginate.

use crate::model::{Catalog, CatalogItem, Category};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Search parameters. Build with [`SearchQuery::new`] and override the defaults
/// (category `Books`, page 1, size 10) as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub category: Category,
    pub min_price: f64,
    pub max_price: f64,
    pub page: u32,
    pub size: u32,
}

impl SearchQuery {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            category: Category::default(),
            min_price,
            max_price,
            page: 1,
            size: 10,
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    fn validate(&self) -> Result<(), SearchError> {
        // `!(x > 0.0)` also rejects NaN
        if !(self.min_price > 0.0) {
            return Err(SearchError::InvalidQuery { field: "min_price" });
        }
        if !(self.max_price > 0.0) {
            return Err(SearchError::InvalidQuery { field: "max_price" });
        }
        if self.page == 0 {
            return Err(SearchError::InvalidQuery { field: "page" });
        }
        if self.size == 0 {
            return Err(SearchError::InvalidQuery { field: "size" });
        }
        if self.min_price >= self.max_price {
            return Err(SearchError::PriceRange);
        }
        Ok(())
    }
}

/// One page of search results. Totals are absent when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub items: Vec<CatalogItem>,
    pub total_items: Option<usize>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    #[error("{field} must be greater than zero")]
    InvalidQuery { field: &'static str },

    #[error("max price should be greater than minimum price")]
    PriceRange,

    #[error("No such page. Page number should not be more than {total_pages}")]
    PageOutOfRange { total_pages: u32, page: u32 },

    #[error("No such page.")]
    NoSuchPage,
}

impl SearchError {
    /// Every search error is caused by the query.
    pub fn is_client_error(&self) -> bool {
        true
    }

    pub fn detail(&self) -> Value {
        match self {
            SearchError::InvalidQuery { field } => {
                json!({ "msg": self.to_string(), "field": field })
            }
            SearchError::PageOutOfRange { page, .. } => {
                json!({ "msg": self.to_string(), "page_entered": page })
            }
            SearchError::PriceRange | SearchError::NoSuchPage => Value::String(self.to_string()),
        }
    }
}

impl Catalog {
    /// Items of `query.category` priced within `[min_price, max_price]`, in catalog
    /// order, sliced to the requested page.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchPage, SearchError> {
        query.validate()?;

        let matches: Vec<&CatalogItem> = self
            .items()
            .iter()
            .filter(|item| {
                item.category == query.category
                    && item.price >= query.min_price
                    && item.price <= query.max_price
            })
            .collect();
        let total = matches.len();
        let size = query.size as usize;
        let total_pages = total.div_ceil(size) as u32;
        debug!(category = %query.category, total, total_pages, "Search");

        let (total_items, total_pages) = if total > 0 {
            if query.page > total_pages {
                return Err(SearchError::PageOutOfRange {
                    total_pages,
                    page: query.page,
                });
            }
            (Some(total), Some(total_pages))
        } else {
            if query.page > 1 {
                return Err(SearchError::NoSuchPage);
            }
            (None, None)
        };

        let offset = (query.page as usize - 1) * size;
        let items = matches
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(SearchPage {
            items,
            total_items,
            current_page: query.page,
            page_size: query.size,
            total_pages,
        })
    }
}
