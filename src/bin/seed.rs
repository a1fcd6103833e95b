use product_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let inserted = seed_products(&pool).await?;

    println!("Seed completed. Inserted {inserted} products");
    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<u64> {
    let products = vec![
        ("Axum Hoodie", "Warm hoodie for Rustaceans", 55.0, 50),
        ("Ferris Mug", "Coffee tastes better with Ferris", 12.0, 100),
        ("Rust Sticker Pack", "Decorate your laptop", 5.0, 200),
        ("E-book: Async Rust", "Learn async Rust patterns", 25.0, 75),
    ];

    let mut inserted = 0;
    for (name, desc, price, quantity) in products {
        // Skip names that are already present so the seed can be rerun.
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, quantity)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = $1)
            "#,
        )
        .bind(name)
        .bind(desc)
        .bind(price)
        .bind(quantity)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(inserted)
}
