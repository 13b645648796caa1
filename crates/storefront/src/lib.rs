//! # Storefront
//!
//! A small storefront service built on [`storefront_actor`]:
//!
//! - **[ledger_actor]**: the cart/stock ledger. Add, update and delete cart items
//!   against per-product stock, with every operation applied atomically.
//! - **[blog_actor]**: blog posts, archived to a JSON file.
//! - **[profile_actor]**: profile uploads with avatar validation and storage.
//! - **[account_actor]**: registration with e-mailed one-time passwords.
//! - **[search]**: category and price-range search over the catalog, paginated.
//!
//! Supporting modules:
//!
//! - **[model]**: records and payloads.
//! - **[clients]**: typed wrappers such as [`CartClient`](clients::CartClient).
//! - **[lifecycle]**: [`StorefrontSystem`](lifecycle::StorefrontSystem) starts and stops
//!   every actor.
//! - **[config]**: `STOREFRONT_*` environment settings.

pub mod account_actor;
pub mod blog_actor;
pub mod clients;
pub mod config;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod profile_actor;
pub mod search;
pub mod validation;
