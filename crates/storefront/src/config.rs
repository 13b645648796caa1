//! Runtime settings, read from `STOREFRONT_*` environment variables.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const BLOG_ARCHIVE_VAR: &str = "STOREFRONT_BLOG_ARCHIVE";
pub const AVATAR_DIR_VAR: &str = "STOREFRONT_AVATAR_DIR";
pub const MAIL_FROM_VAR: &str = "STOREFRONT_MAIL_FROM";
pub const MAILBOX_VAR: &str = "STOREFRONT_MAILBOX";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Catalog document; `None` means the catalog bundled with the crate.
    pub catalog_path: Option<PathBuf>,
    pub blog_archive: PathBuf,
    pub avatar_dir: PathBuf,
    pub mail_from: String,
    /// Channel capacity of every actor.
    pub mailbox: usize,
}

const DEFAULT_BLOG_ARCHIVE: &str = "blog_post.json";
const DEFAULT_AVATAR_DIR: &str = "image";
const DEFAULT_MAIL_FROM: &str = "no-reply@storefront.local";
const DEFAULT_MAILBOX: usize = 32;

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            blog_archive: PathBuf::from(DEFAULT_BLOG_ARCHIVE),
            avatar_dir: PathBuf::from(DEFAULT_AVATAR_DIR),
            mail_from: DEFAULT_MAIL_FROM.to_string(),
            mailbox: DEFAULT_MAILBOX,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = match lookup(CATALOG_VAR) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                info!("{CATALOG_VAR} not set, using bundled catalog");
                None
            }
        };

        let mailbox: usize = load(&lookup, MAILBOX_VAR, &DEFAULT_MAILBOX.to_string())?;
        if mailbox == 0 {
            warn!("Invalid {MAILBOX_VAR} value: 0");
            return Err(ConfigError::Invalid {
                key: MAILBOX_VAR,
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            catalog_path,
            blog_archive: load(&lookup, BLOG_ARCHIVE_VAR, DEFAULT_BLOG_ARCHIVE)?,
            avatar_dir: load(&lookup, AVATAR_DIR_VAR, DEFAULT_AVATAR_DIR)?,
            mail_from: load(&lookup, MAIL_FROM_VAR, DEFAULT_MAIL_FROM)?,
            mailbox,
        })
    }
}

fn load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }
    })
}
