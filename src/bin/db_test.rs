use chrono::Utc;
use dotenvy::dotenv;
use product_store::database::db::connection::get_db_pool;
use product_store::database::db::queries::{self, ProductFilter, SortKey, SortOrder};
use product_store::database::models::Product;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    /* ==========Testing========== */
    let pool = get_db_pool().await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    println!("Migrations ran successfully!");

    // ----------------------------------------------------
    // TEST: CREATE PRODUCT
    // ----------------------------------------------------
    println!("\n--- Testing: create_product ---");
    let mut product = Product {
        title: "Smoke Test Kettle".to_string(),
        name: "kettle".to_string(),
        image_url: "http://example.com/kettle.png".to_string(),
        price: 24.99,
        description: "1.7L electric kettle".to_string(),
        specifications: "220V, 2200W".to_string(),
        quantity: 3,
        in_cart: true,
        ..Product::default()
    };
    product.id = queries::create_product(&pool, &product).await?;
    println!("   > Product created successfully {}", product.id);
    assert!(product.id > 0, "Failed to create Product, ID invalid.");

    println!("\n--- Testing: get_product_by_id ---");
    let fetched = queries::get_product_by_id(&pool, product.id).await?;
    println!("   > Acquired product: {:?}", fetched);
    assert_eq!(fetched.title, product.title, "product title not matched");
    assert_eq!(fetched.quantity, 3, "product quantity not matched");

    // ----------------------------------------------------
    // TEST: FILTERED SEARCH
    // ----------------------------------------------------
    println!("\n--- Testing: get_filtered_products ---");
    let filter = ProductFilter {
        search: Some("KETTLE".to_string()),
        min_price: Some(10.0),
        max_price: Some(50.0),
        sort: Some(SortKey::Price),
        order: SortOrder::Desc,
    };
    let found = queries::get_filtered_products(&pool, &filter).await?;
    println!("   > Number of matches: {}", found.len());
    assert!(
        found.iter().any(|p| p.id == product.id),
        "filter did not return the created product"
    );
    assert!(
        found.windows(2).all(|w| w[0].price >= w[1].price),
        "results not sorted by price descending"
    );

    // ----------------------------------------------------
    // TEST: TOGGLES
    // ----------------------------------------------------
    println!("\n--- Testing: toggle_favorite (twice) ---");
    queries::toggle_favorite(&pool, product.id).await?;
    let flipped = queries::get_product_by_id(&pool, product.id).await?;
    assert!(flipped.is_favorite, "first toggle did not set the flag");
    queries::toggle_favorite(&pool, product.id).await?;
    let restored = queries::get_product_by_id(&pool, product.id).await?;
    assert!(!restored.is_favorite, "second toggle did not restore the flag");

    // ----------------------------------------------------
    // TEST: QUANTITY UPDATE
    // ----------------------------------------------------
    println!("\n--- Testing: update_product_quantity ---");
    queries::update_product_quantity(&pool, product.id, 7).await?;
    let updated = queries::get_product_by_id(&pool, product.id).await?;
    assert_eq!(updated.quantity, 7, "quantity update not applied");

    // ----------------------------------------------------
    // TEST: CREATE ORDER + CART CLEAR
    // ----------------------------------------------------
    println!("\n--- Testing: create_order ---");
    let snapshot = queries::get_product_by_id(&pool, product.id).await?;
    let order_id = queries::create_order(
        &pool,
        "smoke-test-user",
        snapshot.price,
        Utc::now(),
        std::slice::from_ref(&snapshot),
    )
    .await?;
    println!("   > Order created successfully {}", order_id);
    assert!(order_id > 0, "Failed to create Order, ID invalid.");

    let cleared = queries::get_product_by_id(&pool, product.id).await?;
    assert!(!cleared.in_cart, "cart flag not cleared after order");
    assert_eq!(cleared.quantity, 0, "quantity not zeroed after order");

    println!("\n--- Testing: get_orders_by_user ---");
    let orders = queries::get_orders_by_user(&pool, "smoke-test-user").await?;
    println!("   > Number of orders: {}", orders.len());
    assert!(
        orders.iter().any(|o| o.id == order_id),
        "created order missing from user listing"
    );
    let nobody = queries::get_orders_by_user(&pool, "no-such-user").await?;
    assert!(nobody.is_empty(), "unknown user should have no orders");

    // ----------------------------------------------------
    // TEST: DELETE PRODUCT
    // ----------------------------------------------------
    println!("\n--- Testing: delete_product ---");
    queries::delete_product(&pool, product.id).await?;
    let gone = queries::get_product_by_id(&pool, product.id).await;
    assert!(
        matches!(gone, Err(sqlx::Error::RowNotFound)),
        "deleted product still readable"
    );
    let missing = queries::delete_product(&pool, product.id).await;
    assert!(
        matches!(missing, Err(sqlx::Error::RowNotFound)),
        "double delete should report missing row"
    );

    println!("\nAll smoke tests passed!");
    Ok(())
}
