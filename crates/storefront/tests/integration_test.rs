use std::sync::Arc;
use storefront::account_actor::{AccountError, OtpMailer, OutboxMailer};
use storefront::blog_actor::{BlogArchive, BlogError};
use storefront::config::StorefrontConfig;
use storefront::ledger_actor::CartError;
use storefront::lifecycle::{Services, StartupError, StorefrontSystem};
use storefront::model::{
    AccountId, AvatarUpload, BlogCreate, Catalog, CatalogItem, Category, ProductId, ProfileCreate,
    Registration, Verified,
};
use storefront::profile_actor::{AvatarStore, ProfileError};
use storefront::search::{SearchError, SearchQuery};
use storefront_actor::ActorClient;
use tempfile::TempDir;

fn item(id: u32, category: Category, price: f64, quantity: u32, available: bool) -> CatalogItem {
    CatalogItem {
        product_id: ProductId(id),
        name: format!("product {id}"),
        category,
        price,
        quantity,
        available,
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        item(1, Category::Electronics, 199.0, 10, true),
        item(2, Category::Books, 20.0, 3, true),
        item(3, Category::Tools, 45.0, 5, false),
        item(4, Category::Books, 35.0, 20, true),
    ])
    .unwrap()
}

async fn start(dir: &TempDir) -> (StorefrontSystem, OutboxMailer) {
    let outbox = OutboxMailer::new("no-reply@shop.test");
    let mailer: Arc<dyn OtpMailer> = Arc::new(outbox.clone());
    let services = Services {
        archive: BlogArchive::new(dir.path().join("blog_post.json")),
        avatars: AvatarStore::new(dir.path().join("image")),
        mailer,
        mailbox: 16,
    };
    let system = StorefrontSystem::new(catalog(), services)
        .await
        .expect("Failed to start storefront");
    (system, outbox)
}

/// Add, update, rejected update, delete, against a real ledger actor.
#[tokio::test]
async fn test_cart_add_update_delete_flow() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;
    let cart = &system.cart_client;

    let added = cart.add_item(ProductId(1), 4).await.expect("add failed");
    assert_eq!(added.message, "Item added successfully.");
    assert_eq!(added.cart_items[&ProductId(1)].quantity, 4);
    assert_eq!(added.cart_items[&ProductId(1)].item, "product1");
    assert_eq!(cart.stock_of(ProductId(1)).await.unwrap().unwrap().quantity, 6);

    let updated = cart.update_item(ProductId(1), 9).await.expect("update failed");
    assert_eq!(updated.message, "Item was updated successfully.");
    assert_eq!(updated.cart_items[&ProductId(1)].quantity, 9);
    assert_eq!(cart.stock_of(ProductId(1)).await.unwrap().unwrap().quantity, 1);

    let err = cart.update_item(ProductId(1), 20).await.unwrap_err();
    assert_eq!(
        err,
        CartError::InsufficientStock {
            product_id: ProductId(1),
            available: 1,
            requested: 20,
        }
    );
    assert_eq!(err.detail()["available_quantity"], 1);
    assert_eq!(cart.stock_of(ProductId(1)).await.unwrap().unwrap().quantity, 1);
    assert_eq!(cart.cart_items().await.unwrap()[&ProductId(1)].quantity, 9);

    cart.delete_item(ProductId(1)).await.expect("delete failed");
    assert!(cart.cart_items().await.unwrap().is_empty());
    assert_eq!(cart.stock_of(ProductId(1)).await.unwrap().unwrap().quantity, 10);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_cart_rejections_leave_ledger_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;
    let cart = &system.cart_client;

    let unknown = cart.add_item(ProductId(999), 1).await.unwrap_err();
    assert!(unknown.is_not_found());
    assert_eq!(unknown.detail()["msg"], "Invalid product id");

    let unavailable = cart.add_item(ProductId(3), 1).await.unwrap_err();
    assert_eq!(unavailable.detail()["available_status"], "no");

    let too_many = cart.add_item(ProductId(2), 4).await.unwrap_err();
    assert!(matches!(
        too_many,
        CartError::InsufficientStock {
            available: 3,
            requested: 4,
            ..
        }
    ));

    let missing = cart.delete_item(ProductId(2)).await.unwrap_err();
    assert_eq!(
        missing,
        CartError::NotInCart {
            product_id: ProductId(2)
        }
    );
    let missing_update = cart.update_item(ProductId(4), 1).await.unwrap_err();
    assert_eq!(missing_update.detail()["msg"], "Product id not in cart");
    assert!(missing_update.is_not_found());

    assert!(cart.cart_items().await.unwrap().is_empty());
    for (id, quantity) in [(1, 10), (2, 3), (3, 5), (4, 20)] {
        let record = cart.stock_of(ProductId(id)).await.unwrap().unwrap();
        assert_eq!(record.quantity, quantity);
    }

    // the whole ledger is also readable through the generic client
    let ledger = cart.get(cart.ledger_id()).await.unwrap().expect("ledger missing");
    assert!(ledger.cart_items().is_empty());

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent adds never reserve more than the stock.
#[tokio::test]
async fn test_concurrent_adds_never_oversell() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;

    let mut tasks = Vec::new();
    for _ in 0..25 {
        let cart = system.cart_client.clone();
        tasks.push(tokio::spawn(async move { cart.add_item(ProductId(4), 1).await }));
    }

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(e) => assert!(matches!(e, CartError::InsufficientStock { available: 0, .. })),
        }
    }
    assert_eq!(accepted, 20);

    let cart = &system.cart_client;
    assert_eq!(cart.stock_of(ProductId(4)).await.unwrap().unwrap().quantity, 0);
    assert_eq!(cart.cart_items().await.unwrap()[&ProductId(4)].quantity, 20);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Interleaved updates and deletes from many tasks keep stock + cart constant.
#[tokio::test]
async fn test_concurrent_mixed_operations_conserve_stock() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;
    system.cart_client.add_item(ProductId(1), 2).await.unwrap();

    let mut tasks = Vec::new();
    for n in 0..40u32 {
        let cart = system.cart_client.clone();
        tasks.push(tokio::spawn(async move {
            let _ = match n % 3 {
                0 => cart.add_item(ProductId(1), 1 + n % 4).await.map(|_| ()),
                1 => cart.update_item(ProductId(1), 1 + n % 7).await.map(|_| ()),
                _ => cart.delete_item(ProductId(1)).await,
            };
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let cart = &system.cart_client;
    let stock = cart.stock_of(ProductId(1)).await.unwrap().unwrap().quantity;
    let reserved = cart
        .cart_items()
        .await
        .unwrap()
        .get(&ProductId(1))
        .map(|entry| entry.quantity)
        .unwrap_or(0);
    assert_eq!(stock + reserved, 10);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_search_over_system_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;

    let page = system.search(&SearchQuery::new(20.0, 35.0)).unwrap();
    let ids: Vec<u32> = page.items.iter().map(|item| item.product_id.0).collect();
    assert_eq!(ids, vec![2, 4]);
    assert_eq!(page.total_items, Some(2));

    let err = system
        .search(&SearchQuery::new(1.0, 500.0).page(2))
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::PageOutOfRange {
            total_pages: 1,
            page: 2
        }
    );

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_blog_posts_are_archived() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;
    let blog = &system.blog_client;

    let first = blog
        .create_post(BlogCreate {
            title: "Hello".to_string(),
            content: "First post".to_string(),
            author: None,
        })
        .await
        .expect("create failed");
    blog.create_post(BlogCreate {
        title: "Again".to_string(),
        content: "Second post".to_string(),
        author: Some("ada".to_string()),
    })
    .await
    .expect("create failed");

    let rejected = blog
        .create_post(BlogCreate {
            title: " ".to_string(),
            content: "x".to_string(),
            author: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(rejected, BlogError::Validation(_)));

    let posts = blog.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0], first);

    let archived = BlogArchive::new(dir.path().join("blog_post.json"))
        .entries()
        .await
        .unwrap();
    assert_eq!(archived.len(), 2);
    assert_eq!(archived[1]["author"], "ada");

    system.shutdown().await.expect("Failed to shutdown system");
}

/// A restarted system keeps numbering posts after the ones already archived.
#[tokio::test]
async fn test_post_ids_stay_unique_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let post = |title: &str| BlogCreate {
        title: title.to_string(),
        content: "body".to_string(),
        author: None,
    };

    let (system, _) = start(&dir).await;
    let first = system.blog_client.create_post(post("before")).await.unwrap();
    system.shutdown().await.expect("Failed to shutdown system");

    let (system, _) = start(&dir).await;
    let second = system.blog_client.create_post(post("after")).await.unwrap();
    system.shutdown().await.expect("Failed to shutdown system");

    assert_ne!(first.id, second.id);
    let ids: Vec<_> = BlogArchive::new(dir.path().join("blog_post.json"))
        .entries()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry["id"].clone())
        .collect();
    assert_eq!(ids, vec![serde_json::json!(1), serde_json::json!(2)]);
}

/// An unreadable archive stops startup instead of risking duplicate ids.
#[tokio::test]
async fn test_startup_fails_on_corrupt_archive() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blog_post.json"), "not json").unwrap();

    let services = Services {
        archive: BlogArchive::new(dir.path().join("blog_post.json")),
        avatars: AvatarStore::new(dir.path().join("image")),
        mailer: Arc::new(OutboxMailer::new("no-reply@shop.test")),
        mailbox: 16,
    };
    let err = StorefrontSystem::new(catalog(), services)
        .await
        .err()
        .expect("startup should fail");
    assert!(matches!(err, StartupError::Blog(BlogError::Archive { .. })));
}

#[tokio::test]
async fn test_profile_upload_stores_avatar() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _) = start(&dir).await;
    let profiles = &system.profile_client;

    let profile = profiles
        .upload_profile(ProfileCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: AvatarUpload {
                file_name: "ada.PNG".to_string(),
                bytes: vec![7; 1024],
            },
        })
        .await
        .expect("upload failed");
    assert_eq!(profile.avatar_path.parent(), Some(dir.path().join("image").as_path()));
    assert_eq!(tokio::fs::read(&profile.avatar_path).await.unwrap().len(), 1024);

    let err = profiles
        .upload_profile(ProfileCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: AvatarUpload {
                file_name: "ada.bmp".to_string(),
                bytes: vec![0; 400_000],
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::InvalidAvatar { .. }));
    assert_eq!(err.detail()["uploaded_file_size"], "400kb");
    assert_eq!(err.detail()["uploaded_extention"], "bmp");

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_registration_and_otp_verification() {
    let dir = tempfile::tempdir().unwrap();
    let (system, outbox) = start(&dir).await;
    let accounts = &system.account_client;

    let receipt = accounts
        .register(Registration {
            email: "grace@example.com".to_string(),
            password: "correct horse".to_string(),
            phone: Some("+15550100".to_string()),
        })
        .await
        .expect("register failed");
    assert_eq!(
        receipt.msg,
        "Registration successful. Check your email to verify OTP."
    );

    let mail = outbox.last_to("grace@example.com").await.expect("no mail sent");
    assert_eq!(mail.from, "no-reply@shop.test");
    assert!(mail.html.contains("Hello <strong>grace!</strong>"));
    let start = mail.html.find("<h2>").unwrap() + 4;
    let otp = mail.html[start..start + 6].to_string();

    let account = accounts.get(receipt.user_id).await.unwrap().unwrap();
    assert!(!account.is_active);
    assert!(!account.password_hash.contains("correct horse"));

    let wrong = if otp == "999999" { "000000" } else { "999999" };
    let err = accounts.verify(receipt.user_id, wrong).await.unwrap_err();
    assert_eq!(err.detail()["otp_entered"], wrong);

    let verified = accounts.verify(receipt.user_id, &otp).await.unwrap();
    assert_eq!(verified, Verified::default());
    assert!(accounts.get(receipt.user_id).await.unwrap().unwrap().is_active);

    assert_eq!(
        accounts.verify(receipt.user_id, &otp).await.unwrap_err(),
        AccountError::AlreadyVerified
    );
    assert!(matches!(
        accounts.verify(AccountId(77), "123456").await.unwrap_err(),
        AccountError::NotFound(_)
    ));

    let weak = accounts
        .register(Registration {
            email: "x@example.com".to_string(),
            password: "short".to_string(),
            phone: None,
        })
        .await
        .unwrap_err();
    assert_eq!(weak, AccountError::WeakPassword);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_start_from_config_with_bundled_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig {
        blog_archive: dir.path().join("posts.json"),
        avatar_dir: dir.path().join("avatars"),
        ..StorefrontConfig::default()
    };
    let mailer: Arc<dyn OtpMailer> = Arc::new(OutboxMailer::new(config.mail_from.clone()));

    let system = StorefrontSystem::from_config(&config, mailer)
        .await
        .expect("Failed to start storefront");
    assert_eq!(system.catalog().items().len(), 13);

    let response = system.cart_client.add_item(ProductId(1), 4).await.unwrap();
    assert_eq!(response.cart_items[&ProductId(1)].quantity, 4);

    system.shutdown().await.expect("Failed to shutdown system");
}
