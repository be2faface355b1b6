use stockroom::models::CreateProduct;
use stockroom::services::catalog::{self, CatalogError};
use stockroom::Database;

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

fn product(sku: i64, brand: &str, title: &str) -> CreateProduct {
    CreateProduct {
        sku,
        brand: brand.to_string(),
        title: title.to_string(),
        quantity: 10,
    }
}

mod create_tests {
    use super::*;

    #[test]
    fn test_create_applies_brand_rule() {
        let db = create_test_db();

        let created = catalog::create_product(&db, &product(1, "Tommy", "High split shirt"))
            .expect("Failed to create product");

        assert!(created.id > 0);
        assert_eq!(created.sku, 1);
        assert_eq!(created.slug, "high-split-solid-shirt");
        assert_eq!(created.brand, "Tommy");
        assert_eq!(created.quantity, 10);
    }

    #[test]
    fn test_duplicate_sku_rejected() {
        let db = create_test_db();

        catalog::create_product(&db, &product(7, "Next", "Cold shoulder red dress")).unwrap();
        let err = catalog::create_product(&db, &product(7, "Next", "Slim fit denim jacket"))
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateSku(7)));
    }

    #[test]
    fn test_same_base_slug_gets_numbered() {
        let db = create_test_db();

        let first =
            catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        let second =
            catalog::create_product(&db, &product(2, "Tommy", "High split shirt")).unwrap();
        let third =
            catalog::create_product(&db, &product(3, "Tommy", "High split shirt")).unwrap();

        assert_eq!(first.slug, "high-split-solid-shirt");
        assert_eq!(second.slug, "high-split-solid-shirt-1");
        assert_eq!(third.slug, "high-split-solid-shirt-2");
    }

    // The three brand rules transform "High split shirt" into three
    // different bases, so no auto-numbering fires across brands.
    #[test]
    fn test_cross_brand_bases_do_not_collide() {
        let db = create_test_db();

        let tommy = catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        let shein = catalog::create_product(&db, &product(2, "Shein", "High split shirt")).unwrap();
        let next = catalog::create_product(&db, &product(3, "Next", "High split shirt")).unwrap();

        assert_eq!(tommy.slug, "high-split-solid-shirt");
        assert_eq!(shein.slug, "high-curved-split-item");
        assert_eq!(next.slug, "high-split-shirt-item");
    }

    #[test]
    fn test_blank_title_falls_back_to_sku_slug() {
        let db = create_test_db();

        let created = catalog::create_product(&db, &product(42, "Next", "  ")).unwrap();
        assert_eq!(created.slug, "product-42");
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn test_delete_then_get_returns_not_found() {
        let db = create_test_db();

        let created =
            catalog::create_product(&db, &product(1, "Next", "Cold shoulder red dress")).unwrap();
        catalog::delete_product(&db, created.id).unwrap();

        let err = catalog::get_product(&db, created.id).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[test]
    fn test_delete_missing_returns_not_found() {
        let db = create_test_db();

        let err = catalog::delete_product(&db, 999).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[test]
    fn test_delete_twice_returns_not_found() {
        let db = create_test_db();

        let created =
            catalog::create_product(&db, &product(1, "Next", "Cold shoulder red dress")).unwrap();
        catalog::delete_product(&db, created.id).unwrap();

        let err = catalog::delete_product(&db, created.id).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[test]
    fn test_slug_reused_after_delete() {
        let db = create_test_db();

        let first =
            catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        assert_eq!(first.slug, "high-split-solid-shirt");

        catalog::delete_product(&db, first.id).unwrap();

        let second =
            catalog::create_product(&db, &product(2, "Tommy", "High split shirt")).unwrap();
        assert_eq!(second.slug, "high-split-solid-shirt");
    }

    #[test]
    fn test_sku_reused_after_delete() {
        let db = create_test_db();

        let first =
            catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        catalog::delete_product(&db, first.id).unwrap();

        let second =
            catalog::create_product(&db, &product(1, "Next", "Cold shoulder red dress")).unwrap();
        assert_eq!(second.sku, 1);
    }

    #[test]
    fn test_freed_suffix_filled_first() {
        let db = create_test_db();

        catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        let holder_1 =
            catalog::create_product(&db, &product(2, "Tommy", "High split shirt")).unwrap();
        catalog::create_product(&db, &product(3, "Tommy", "High split shirt")).unwrap();
        assert_eq!(holder_1.slug, "high-split-solid-shirt-1");

        catalog::delete_product(&db, holder_1.id).unwrap();

        let replacement =
            catalog::create_product(&db, &product(4, "Tommy", "High split shirt")).unwrap();
        assert_eq!(replacement.slug, "high-split-solid-shirt-1");
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn test_list_insertion_order_and_fields() {
        let db = create_test_db();

        catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        catalog::create_product(&db, &product(2, "Next", "Cold shoulder red dress")).unwrap();

        let products = catalog::list_products(&db, None, 0, 10).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sku, 1);
        assert_eq!(products[1].sku, 2);
        assert_eq!(products[0].slug, "high-split-solid-shirt");
    }

    #[test]
    fn test_list_excludes_deleted() {
        let db = create_test_db();

        let first =
            catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        catalog::create_product(&db, &product(2, "Next", "Cold shoulder red dress")).unwrap();
        catalog::delete_product(&db, first.id).unwrap();

        let products = catalog::list_products(&db, None, 0, 10).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, 2);
    }

    #[test]
    fn test_list_skip_and_limit() {
        let db = create_test_db();

        for sku in 1..=5 {
            catalog::create_product(&db, &product(sku, "Next", &format!("Red dress size {}", sku)))
                .unwrap();
        }

        let page = catalog::list_products(&db, None, 2, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].sku, 3);
        assert_eq!(page[1].sku, 4);
    }

    #[test]
    fn test_list_brand_filter_substring_case_insensitive() {
        let db = create_test_db();

        catalog::create_product(&db, &product(1, "Tommy", "High split shirt")).unwrap();
        catalog::create_product(&db, &product(2, "Next", "Cold shoulder red dress")).unwrap();

        let products = catalog::list_products(&db, Some("tom"), 0, 10).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].brand, "Tommy");

        let none = catalog::list_products(&db, Some("reiss"), 0, 10).unwrap();
        assert!(none.is_empty());
    }
}

mod concurrency_tests {
    use super::*;
    use std::collections::HashSet;

    fn create_file_test_db() -> Database {
        use rand::Rng;
        let id: u32 = rand::thread_rng().gen();
        let path = std::env::temp_dir().join(format!("stockroom_test_{}.db", id));

        let db = Database::open(path.to_str().unwrap(), 10).expect("Failed to create test database");
        db.migrate().expect("Failed to run migrations");
        db
    }

    #[test]
    fn test_concurrent_creates_get_distinct_slugs() {
        let db = create_file_test_db();
        let workers = 8;

        let handles: Vec<_> = (0..workers)
            .map(|i| {
                let db = db.clone();
                std::thread::spawn(move || {
                    catalog::create_product(
                        &db,
                        &product(1000 + i, "Next", "Alpha beta gamma delta"),
                    )
                    .expect("Concurrent create failed")
                })
            })
            .collect();

        let slugs: HashSet<String> = handles
            .into_iter()
            .map(|h| h.join().expect("Worker panicked").slug)
            .collect();

        assert_eq!(slugs.len(), workers as usize, "slugs must be distinct");
        assert!(slugs.contains("alpha-beta-gamma-delta"));
        for n in 1..workers {
            assert!(slugs.contains(&format!("alpha-beta-gamma-delta-{}", n)));
        }
    }
}
