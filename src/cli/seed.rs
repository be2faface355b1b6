use crate::models::CreateProduct;
use crate::services::catalog::{self, CatalogError};
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

const DEMO_PRODUCTS: &[(i64, &str, &str, i64)] = &[
    (100001, "Tommy", "High split shirt", 25),
    (100002, "Tommy", "Tall stripped black shirt", 40),
    (100003, "Shein", "Tall buttoned black shirt", 15),
    (100004, "Shein", "Long sleeve red dress", 30),
    (100005, "Reiss", "Roll up sleeve black shirt", 12),
    (100006, "Next", "Cold shoulder red dress", 50),
    (100007, "Next", "Slim fit denim jacket", 20),
    (100008, "Zara", "Oversized wool blend coat", 8),
];

/// Inserts a demo catalog through the real create path, so slugs get the
/// same brand rules and uniqueness treatment as API writes.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path, config.database.pool_size)?;

    db.migrate()?;

    let mut created = 0;
    for &(sku, brand, title, quantity) in DEMO_PRODUCTS {
        let input = CreateProduct {
            sku,
            brand: brand.to_string(),
            title: title.to_string(),
            quantity,
        };
        match catalog::create_product(&db, &input) {
            Ok(product) => {
                tracing::info!(sku, slug = %product.slug, "seeded product");
                created += 1;
            }
            Err(CatalogError::DuplicateSku(_)) => {
                tracing::warn!(sku, "already seeded, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("Seeded {} product(s)", created);

    Ok(())
}
