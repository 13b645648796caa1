use crate::account_actor::OtpMailer;
use crate::blog_actor::{BlogArchive, BlogError};
use crate::clients::{AccountClient, BlogClient, CartClient, ProfileClient};
use crate::config::{ConfigError, StorefrontConfig};
use crate::ledger_actor::CartError;
use crate::model::{Catalog, CatalogError, LedgerCreate};
use crate::profile_actor::AvatarStore;
use crate::search::{SearchError, SearchPage, SearchQuery};
use std::sync::Arc;
use storefront_actor::ActorClient;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Collaborators injected into the actors as their context.
pub struct Services {
    pub archive: BlogArchive,
    pub avatars: AvatarStore,
    pub mailer: Arc<dyn OtpMailer>,
    /// Channel capacity of every actor.
    pub mailbox: usize,
}

impl Services {
    pub fn from_config(config: &StorefrontConfig, mailer: Arc<dyn OtpMailer>) -> Self {
        Self {
            archive: BlogArchive::new(&config.blog_archive),
            avatars: AvatarStore::new(&config.avatar_dir),
            mailer,
            mailbox: config.mailbox,
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to open the ledger: {0}")]
    Ledger(CartError),
    #[error("failed to open the blog archive: {0}")]
    Blog(BlogError),
}

/// Owns every actor of the storefront and the read-only catalog.
///
/// # Architecture
///
/// - **Ledger actor**: one `Ledger` entity holding stock and cart, seeded from the catalog
/// - **Blog actor**: posts, appended to the archive file
/// - **Profile actor**: profiles, avatars written to the avatar directory
/// - **Account actor**: registrations, OTPs sent through the mailer
///
/// Search runs directly against the shared catalog and needs no actor.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::from_config(&config, mailer).await?;
/// system.cart_client.add_item(ProductId(1), 4).await?;
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    pub blog_client: BlogClient,
    pub profile_client: ProfileClient,
    pub account_client: AccountClient,
    catalog: Arc<Catalog>,
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns all actors with their context and opens the ledger over `catalog`.
    pub async fn new(catalog: Catalog, services: Services) -> Result<Self, StartupError> {
        let Services {
            archive,
            avatars,
            mailer,
            mailbox,
        } = services;

        // 1. Create actors
        let (ledger_actor, ledger_client) = crate::ledger_actor::new(mailbox);
        let (blog_actor, blog_client) = crate::blog_actor::resume(mailbox, &archive)
            .await
            .map_err(StartupError::Blog)?;
        let (profile_actor, profile_client) = crate::profile_actor::new(mailbox);
        let (account_actor, account_client) = crate::account_actor::new(mailbox);

        // 2. Start them with their context
        let handles = vec![
            tokio::spawn(ledger_actor.run(())),
            tokio::spawn(blog_actor.run(archive)),
            tokio::spawn(profile_actor.run(avatars)),
            tokio::spawn(account_actor.run(mailer)),
        ];

        // 3. Seed the ledger
        let ledger_id = ledger_client
            .create(LedgerCreate::from_catalog(&catalog))
            .await
            .map_err(|e| StartupError::Ledger(CartClient::map_error(e)))?;
        info!(%ledger_id, products = catalog.items().len(), "Storefront started");

        Ok(Self {
            cart_client: CartClient::new(ledger_client, ledger_id),
            blog_client: BlogClient::new(blog_client),
            profile_client: ProfileClient::new(profile_client),
            account_client: AccountClient::new(account_client),
            catalog: Arc::new(catalog),
            handles,
        })
    }

    /// Loads the catalog named by `config` (or the bundled one) and starts the system.
    pub async fn from_config(
        config: &StorefrontConfig,
        mailer: Arc<dyn OtpMailer>,
    ) -> Result<Self, StartupError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path).await?,
            None => Catalog::bundled()?,
        };
        Self::new(catalog, Services::from_config(config, mailer)).await
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    pub fn search(&self, query: &SearchQuery) -> Result<SearchPage, SearchError> {
        self.catalog.search(query)
    }

    /// Drops every client so the actors drain their queues and exit, then waits for
    /// their tasks.
    ///
    /// Clients cloned out of the system keep their actor alive until they are
    /// dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.blog_client);
        drop(self.profile_client);
        drop(self.account_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
