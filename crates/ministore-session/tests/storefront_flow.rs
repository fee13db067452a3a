//! End-to-end storefront flow against an in-memory catalog.

use ministore_commerce::browse::SortMode;
use ministore_commerce::cart::parse_quantity;
use ministore_commerce::catalog::Product;
use ministore_commerce::ProductId;
use ministore_data::{CatalogApi, InMemoryCatalog};
use ministore_session::{StorefrontSession, PRODUCT_NOT_FOUND};

fn make_product(id: u64, title: &str, category: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        description: format!("{title} description"),
        price,
        category: category.to_string(),
        brand: Some("Acme".to_string()),
        model: None,
        color: None,
        discount: None,
        image: format!("https://img.example/{id}.png"),
    }
}

fn demo_catalog() -> InMemoryCatalog {
    let mut discounted = make_product(4, "Noise Cancelling Earbuds", "audio", 45.0);
    discounted.discount = Some(25.0);

    InMemoryCatalog::new(vec![
        make_product(1, "Wireless Headphones", "audio", 89.0),
        make_product(2, "Game Controller", "gaming", 59.0),
        make_product(3, "Bluetooth Speaker", "audio", 39.0),
        discounted,
        make_product(5, "Smart TV Remote", "tv", 19.0),
    ])
}

#[tokio::test]
async fn test_browse_filter_and_checkout_flow() {
    let catalog = demo_catalog();
    let mut session = StorefrontSession::new();

    // Landing: everything visible, categories in first-seen order.
    session.listing.refresh(&catalog).await;
    assert_eq!(session.listing.result_count(), 5);
    assert_eq!(session.listing.categories(), ["audio", "gaming", "tv"]);

    // Narrow down to one product.
    session.listing.set_category(Some("audio".to_string()));
    session.listing.set_query("wireless");
    assert_eq!(session.listing.result_count(), 1);
    let picked = session.listing.visible()[0].clone();
    assert_eq!(picked.title, "Wireless Headphones");

    // Add it twice: one line, quantity two.
    session.cart.add(&picked);
    session.cart.add(&picked);
    assert_eq!(session.cart.line_count(), 1);
    assert_eq!(session.cart.item_count(), 2);

    // Quantity picker input "3".
    let quantity = parse_quantity("3").unwrap();
    assert!(session.cart.set_quantity(picked.id, quantity));
    assert_eq!(session.cart.item_count(), 3);

    let summary = session.cart.summary();
    assert!((summary.subtotal - 267.0).abs() < 1e-9);
    assert!((summary.tax - 26.7).abs() < 1e-9);
    assert_eq!(summary.shipping, 0.0);
    assert!((summary.total - 293.7).abs() < 1e-9);

    // Filters reset without touching the cart.
    session.listing.clear_filters();
    assert_eq!(session.listing.result_count(), 5);
    assert_eq!(session.cart.item_count(), 3);

    // Detail screen for the picked product, then for a missing one.
    session.detail.load(&catalog, picked.id).await;
    assert_eq!(
        session.detail.product().map(|p| p.title.as_str()),
        Some("Wireless Headphones")
    );

    session.detail.load(&catalog, ProductId::new(999)).await;
    assert_eq!(session.detail.error(), Some(PRODUCT_NOT_FOUND));

    // Emptying the cart.
    assert!(session.cart.remove(picked.id));
    assert!(session.cart.is_empty());
    assert_eq!(session.cart.summary().total, 0.0);
}

#[tokio::test]
async fn test_server_category_listing_matches_client_side_filter() {
    let catalog = demo_catalog();

    let from_server = catalog.fetch_products_in_category("audio").await.unwrap();

    let mut session = StorefrontSession::new();
    session.listing.refresh(&catalog).await;
    session.listing.set_category(Some("audio".to_string()));

    assert_eq!(from_server.len(), session.listing.result_count());
    assert_eq!(from_server.len(), 3);
}

#[tokio::test]
async fn test_sorting_by_discount_surfaces_sale_items() {
    let catalog = demo_catalog();
    let mut session = StorefrontSession::new();

    session.listing.refresh(&catalog).await;
    session.listing.set_sort(SortMode::DiscountDesc);

    let first = &session.listing.visible()[0];
    assert_eq!(first.title, "Noise Cancelling Earbuds");
    assert!(first.is_on_sale());
}

#[tokio::test]
async fn test_favorites_survive_filter_changes() {
    let catalog = demo_catalog();
    let mut session = StorefrontSession::new();

    session.listing.refresh(&catalog).await;
    let id = session.listing.visible()[0].id;
    session.listing.toggle_favorite(id);

    session.listing.set_category(Some("tv".to_string()));
    session.listing.set_query("remote");

    assert!(session.listing.is_favorite(id));
}
