//! # Storefront demo
//!
//! Starts the [`StorefrontSystem`] from `STOREFRONT_*` settings and walks through
//! each feature once:
//! 1. Cart: add, update, a rejected update, delete.
//! 2. Catalog search.
//! 3. Blog post creation.
//! 4. Profile upload.
//! 5. Registration and OTP verification, with mails kept in an [`OutboxMailer`].
//!
//! Run with `RUST_LOG=info` to follow the actors.

use std::sync::Arc;
use storefront::account_actor::{OtpMailer, OutboxMailer};
use storefront::config::StorefrontConfig;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{
    AvatarUpload, BlogCreate, Category, ProductId, ProfileCreate, Registration,
};
use storefront::search::SearchQuery;
use storefront_actor::tracing::setup_tracing;
use tracing::{error, info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    let outbox = OutboxMailer::new(config.mail_from.clone());
    let mailer: Arc<dyn OtpMailer> = Arc::new(outbox.clone());

    info!("Starting storefront");
    let system = StorefrontSystem::from_config(&config, mailer)
        .await
        .map_err(|e| e.to_string())?;

    // 1. Cart
    async {
        let cart = &system.cart_client;
        let added = cart.add_item(ProductId(1), 4).await.map_err(|e| e.to_string())?;
        info!(message = %added.message, items = added.cart_items.len(), "Add");

        let updated = cart.update_item(ProductId(1), 9).await.map_err(|e| e.to_string())?;
        info!(message = %updated.message, "Update");

        match cart.update_item(ProductId(1), 20).await {
            Ok(_) => error!("Update beyond stock was accepted"),
            Err(e) => info!(detail = %e.detail(), "Update rejected"),
        }

        cart.delete_item(ProductId(1)).await.map_err(|e| e.to_string())?;
        let stock = cart.stock_of(ProductId(1)).await.map_err(|e| e.to_string())?;
        info!(?stock, "Deleted, stock restored");
        Ok::<_, String>(())
    }
    .instrument(info_span!("cart_flow"))
    .await?;

    // 2. Search
    {
        let _span = info_span!("search").entered();
        let query = SearchQuery::new(1.0, 100.0).category(Category::Books).size(2);
        match system.search(&query) {
            Ok(page) => info!(
                found = page.items.len(),
                total_items = ?page.total_items,
                total_pages = ?page.total_pages,
                "Search"
            ),
            Err(e) => error!(detail = %e.detail(), "Search failed"),
        }
    }

    // 3. Blog
    async {
        let post = BlogCreate {
            title: "Opening day".to_string(),
            content: "The storefront is open.".to_string(),
            author: Some("staff".to_string()),
        };
        match system.blog_client.create_post(post).await {
            Ok(post) => info!(id = %post.id, "Post published"),
            Err(e) => error!(error = %e, "Post failed"),
        }
    }
    .instrument(info_span!("blog"))
    .await;

    // 4. Profile
    async {
        let profile = ProfileCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: AvatarUpload {
                file_name: "ada.png".to_string(),
                bytes: vec![0x89, b'P', b'N', b'G'],
            },
        };
        match system.profile_client.upload_profile(profile).await {
            Ok(profile) => info!(avatar = %profile.avatar_path.display(), "Profile saved"),
            Err(e) => error!(detail = %e.detail(), "Profile rejected"),
        }
    }
    .instrument(info_span!("profile"))
    .await;

    // 5. Registration
    async {
        let email = "grace@example.com";
        let receipt = system
            .account_client
            .register(Registration {
                email: email.to_string(),
                password: "correct horse battery".to_string(),
                phone: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(user_id = %receipt.user_id, msg = %receipt.msg, "Registered");

        let Some(otp) = outbox.last_to(email).await.and_then(|m| extract_otp(&m.html)) else {
            return Err("no OTP mail was sent".to_string());
        };
        let verified = system
            .account_client
            .verify(receipt.user_id, &otp)
            .await
            .map_err(|e| e.to_string())?;
        info!(message = %verified.message, "Verified");
        Ok::<_, String>(())
    }
    .instrument(info_span!("registration"))
    .await?;

    system.shutdown().await?;

    info!("Storefront demo completed");
    Ok(())
}

/// Pulls the code out of the `<h2>` of an OTP mail.
fn extract_otp(html: &str) -> Option<String> {
    let start = html.find("<h2>")? + "<h2>".len();
    let end = html[start..].find("</h2>")? + start;
    Some(html[start..end].to_string())
}
