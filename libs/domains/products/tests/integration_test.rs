//! Integration tests for the products domain
//!
//! `PgProductRepository` against a real PostgreSQL from testcontainers.
//! Run with `cargo test -- --ignored` on a machine with Docker.

use chrono::Duration;
use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

async fn seed_ascending(repo: &PgProductRepository, n: i64) {
    for i in 1..=n {
        let mut product = Product::new(format!("Product {i}"), i as f64).unwrap();
        product.created_at += Duration::milliseconds(i);
        repo.create(product).await.unwrap();
    }
}

async fn names(repo: &PgProductRepository, page: PageRequest) -> Vec<String> {
    repo.find_all(page)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect()
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_and_find_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let product = Product::new(builder.name("product", "main"), 10.0).unwrap();
    let created = repo.create(product.clone()).await.unwrap();
    assert_eq!(created, product);

    let found = repo.find_by_id(product.id).await.unwrap();
    assert_uuid_eq(found.id, product.id, "found product id");
    assert_eq!(found, product);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_missing_product_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let err = assert_err(repo.find_by_id(Uuid::now_v7()).await, "missing product");
    assert!(matches!(err, ProductError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_duplicate_id_is_storage_error() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let product = Product::new("Duplicate", 5.0).unwrap();
    repo.create(product.clone()).await.unwrap();

    let err = assert_err(repo.create(product).await, "duplicate insert");
    assert!(matches!(err, ProductError::Storage(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_round_trip() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let mut product = repo.create(Product::new("Chair", 80.0).unwrap()).await.unwrap();
    product.name = "Armchair".to_string();
    repo.update(product.clone()).await.unwrap();

    let found = repo.find_by_id(product.id).await.unwrap();
    assert_uuid_eq(found.id, product.id, "updated product id");
    assert_eq!(found.name, "Armchair");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let err = assert_err(
        repo.update(Product::new("Ghost", 1.0).unwrap()).await,
        "update of missing product",
    );
    assert!(matches!(err, ProductError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_then_find() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let product = repo.create(Product::new("Lamp", 20.0).unwrap()).await.unwrap();
    repo.delete(product.id).await.unwrap();

    let err = assert_err(repo.find_by_id(product.id).await, "deleted product");
    assert!(matches!(err, ProductError::NotFound(_)));

    repo.delete(product.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_all_pages() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    seed_ascending(&repo, 23).await;

    let expected = |from: usize, to: usize| -> Vec<String> {
        (from..=to).map(|i| format!("Product {i}")).collect()
    };

    let page = |n| PageRequest::new(n, 10, SortOrder::Asc);
    assert_eq!(names(&repo, page(0)).await, expected(1, 10));
    assert_eq!(names(&repo, page(1)).await, expected(11, 20));
    assert_eq!(names(&repo, page(2)).await, expected(21, 23));
    assert!(names(&repo, page(3)).await.is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_all_unknown_sort_is_ascending() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    seed_ascending(&repo, 5).await;

    let xyz = PageRequest::new(0, 10, SortOrder::from_query("xyz"));
    let asc = PageRequest::new(0, 10, SortOrder::Asc);
    assert_eq!(names(&repo, xyz).await, names(&repo, asc).await);

    let desc = names(&repo, PageRequest::new(0, 2, SortOrder::Desc)).await;
    assert_eq!(desc, ["Product 5", "Product 4"]);
}
