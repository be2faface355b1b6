use crate::models::{Brand, CreateProduct, Product, ProductSummary};
use crate::services::registry::{self, ActiveSlugs, SuffixUsage};
use crate::services::slug;
use crate::Database;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use thiserror::Error;

const CREATE_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product with SKU {0} already exists")]
    DuplicateSku(i64),
    #[error("Product not found")]
    NotFound,
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Suffix lookup backed by the active rows of the products table. Queried
/// inside the create transaction, so the view is consistent with the
/// insert that follows.
struct ConnSlugs<'a>(&'a Connection);

impl ActiveSlugs for ConnSlugs<'_> {
    fn usage(&self, base: &str) -> anyhow::Result<SuffixUsage> {
        let mut stmt = self.0.prepare(
            "SELECT slug FROM products WHERE is_deleted = 0 AND (slug = ?1 OR slug LIKE ?1 || '-%')",
        )?;
        let slugs = stmt
            .query_map([base], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<String>, _>>()?;

        let mut usage = SuffixUsage::default();
        for s in slugs {
            if s == base {
                usage.bare = true;
            } else if let Some(n) = s
                .strip_prefix(base)
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|rest| rest.parse::<u32>().ok())
            {
                usage.numbered.insert(n);
            }
        }
        Ok(usage)
    }
}

/// Creates a product: SKU-uniqueness check, slug derivation and
/// reservation, insert — one IMMEDIATE transaction, so concurrent creators
/// in this process serialize on the write lock. A racing writer from
/// another process trips the active-slug unique index instead; that is
/// retried with a fresh suffix selection rather than reported.
pub fn create_product(db: &Database, input: &CreateProduct) -> Result<Product, CatalogError> {
    let mut conn = db.get()?;

    for attempt in 1..CREATE_RETRIES {
        match try_create(&mut conn, input) {
            Err(CatalogError::Db(ref e)) if is_unique_violation(e) => {
                tracing::warn!(sku = input.sku, attempt, "slug reservation raced, retrying");
            }
            result => return result,
        }
    }
    try_create(&mut conn, input)
}

fn try_create(conn: &mut Connection, input: &CreateProduct) -> Result<Product, CatalogError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let sku_taken: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM products WHERE sku = ?1 AND is_deleted = 0)",
        [input.sku],
        |row| row.get(0),
    )?;
    if sku_taken {
        return Err(CatalogError::DuplicateSku(input.sku));
    }

    let mut base = slug::base_slug(Brand::from_name(&input.brand), &input.title);
    if base.is_empty() {
        base = format!("product-{}", input.sku);
    }
    let final_slug = registry::reserve(&ConnSlugs(&tx), &base)?;

    tx.execute(
        "INSERT INTO products (sku, brand, slug, title, quantity, is_deleted, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
        params![
            input.sku,
            input.brand,
            final_slug,
            input.title,
            input.quantity,
            chrono::Utc::now().to_rfc3339(),
        ],
    )?;
    let id = tx.last_insert_rowid();

    let product = tx.query_row(
        "SELECT id, sku, brand, slug, title, quantity, created_at FROM products WHERE id = ?1",
        [id],
        row_to_product,
    )?;
    tx.commit()?;

    tracing::info!(id = product.id, slug = %product.slug, "product created");
    Ok(product)
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(f, _) if f.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Soft delete. The row keeps its SKU and slug but stops counting as
/// active, which frees both for a future create.
pub fn delete_product(db: &Database, id: i64) -> Result<(), CatalogError> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE products SET is_deleted = 1 WHERE id = ?1 AND is_deleted = 0",
        [id],
    )?;
    if changed == 0 {
        return Err(CatalogError::NotFound);
    }
    tracing::info!(id, "product soft-deleted");
    Ok(())
}

pub fn get_product(db: &Database, id: i64) -> Result<Product, CatalogError> {
    let conn = db.get()?;
    conn.query_row(
        "SELECT id, sku, brand, slug, title, quantity, created_at FROM products WHERE id = ?1 AND is_deleted = 0",
        [id],
        row_to_product,
    )
    .optional()?
    .ok_or(CatalogError::NotFound)
}

/// Active products in insertion order. Brand filter is a case-insensitive
/// substring match.
pub fn list_products(
    db: &Database,
    brand: Option<&str>,
    skip: usize,
    limit: usize,
) -> Result<Vec<ProductSummary>, CatalogError> {
    let conn = db.get()?;

    let mut sql =
        String::from("SELECT id, sku, brand, slug, title FROM products WHERE is_deleted = 0");
    let mut params: Vec<String> = Vec::new();

    if let Some(brand) = brand {
        sql.push_str(" AND brand LIKE '%' || ? || '%'");
        params.push(brand.to_string());
    }

    sql.push_str(" ORDER BY id LIMIT ? OFFSET ?");

    let mut stmt = conn.prepare(&sql)?;

    let param_refs: Vec<&dyn rusqlite::ToSql> = params
        .iter()
        .map(|s| s as &dyn rusqlite::ToSql)
        .chain(std::iter::once(&limit as &dyn rusqlite::ToSql))
        .chain(std::iter::once(&skip as &dyn rusqlite::ToSql))
        .collect();

    let products = stmt
        .query_map(param_refs.as_slice(), |row| {
            Ok(ProductSummary {
                id: row.get(0)?,
                sku: row.get(1)?,
                brand: row.get(2)?,
                slug: row.get(3)?,
                title: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(products)
}

fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        sku: row.get(1)?,
        brand: row.get(2)?,
        slug: row.get(3)?,
        title: row.get(4)?,
        quantity: row.get(5)?,
        created_at: row.get(6)?,
    })
}
