use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use shopseed_core::default_catalog;
use shopseed_generate::{
    GenerateOptions, PurchaseGenerator, PurchaseRecord, UserGenerator, seeded_rng,
};
use shopseed_load::{LoadRequest, Loader, SqliteLoader, Target, load_from_url, seed_database};
use sqlx::{Connection, SqliteConnection};

#[derive(Debug, sqlx::FromRow)]
struct StoredUser {
    id_user: i64,
    title: String,
    first_name: String,
    surname: String,
}

#[derive(Debug, sqlx::FromRow)]
struct StoredPurchase {
    id_purchase: i64,
    id_user: i64,
    category: String,
    item: String,
    date: NaiveDateTime,
    price: i64,
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 20)
        .and_then(|date| date.and_hms_micro_opt(8, 15, 30, 123_456))
        .expect("valid timestamp")
}

async fn memory_loader() -> Result<SqliteLoader> {
    let conn = SqliteConnection::connect("sqlite::memory:")
        .await
        .context("opening in-memory sqlite")?;
    Ok(SqliteLoader::new(conn))
}

async fn count(conn: &mut SqliteConnection, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
    Ok(sqlx::query_scalar(&sql).fetch_one(conn).await?)
}

#[tokio::test]
async fn loads_small_dataset_and_round_trips() -> Result<()> {
    let catalog = default_catalog()?;
    let mut rng = seeded_rng(Some(2024)).rng;
    let users = UserGenerator::new(5, 1000, &mut rng)?.collect::<Result<Vec<_>, _>>()?;
    let purchases: Vec<_> = PurchaseGenerator::new(10, 5, now(), &mut rng)?.collect();

    let mut loader = memory_loader().await?;
    loader.create_tables(&catalog).await?;
    let report = loader
        .load(&catalog, &users, &mut purchases.clone().into_iter())
        .await?;

    assert_eq!(report.users_inserted, 5);
    assert_eq!(report.purchases_inserted, 10);
    assert_eq!(report.user_id_offset, 0);

    let conn = loader.connection();
    assert_eq!(count(conn, "user").await?, 5);
    assert_eq!(count(conn, "purchase").await?, 10);

    let stored_users: Vec<StoredUser> =
        sqlx::query_as("SELECT id_user, title, first_name, surname FROM \"user\" ORDER BY id_user")
            .fetch_all(&mut *conn)
            .await?;
    for (stored, generated) in stored_users.iter().zip(&users) {
        assert_eq!(stored.id_user, generated.id);
        assert_eq!(stored.title, generated.title);
        assert_eq!(stored.first_name, generated.first_name);
        assert_eq!(stored.surname, generated.surname);
    }

    let stored_purchases: Vec<StoredPurchase> = sqlx::query_as(
        "SELECT id_purchase, id_user, category, item, date, price FROM purchase ORDER BY id_purchase",
    )
    .fetch_all(&mut *conn)
    .await?;
    assert_eq!(stored_purchases.len(), purchases.len());
    for (stored, generated) in stored_purchases.iter().zip(&purchases) {
        assert_eq!(stored.id_purchase, generated.id);
        assert_eq!(stored.id_user, generated.user_id);
        assert!((1..=4).contains(&stored.id_user));
        assert_eq!(stored.category, generated.category);
        assert_eq!(stored.item, generated.item);
        assert_eq!(stored.date, generated.date);
        assert_eq!(stored.price, generated.price);
    }

    Ok(())
}

#[tokio::test]
async fn zero_purchases_leaves_purchase_table_empty() -> Result<()> {
    let catalog = default_catalog()?;
    let mut rng = seeded_rng(Some(1)).rng;
    let users = UserGenerator::new(8, 1000, &mut rng)?.collect::<Result<Vec<_>, _>>()?;

    let mut loader = memory_loader().await?;
    loader.create_tables(&catalog).await?;
    loader
        .load(&catalog, &users, &mut std::iter::empty::<PurchaseRecord>())
        .await?;

    let conn = loader.connection();
    assert_eq!(count(conn, "user").await?, 8);
    assert_eq!(count(conn, "purchase").await?, 0);
    Ok(())
}

#[tokio::test]
async fn create_tables_is_idempotent() -> Result<()> {
    let catalog = default_catalog()?;
    let mut loader = memory_loader().await?;
    loader.create_tables(&catalog).await?;
    loader.create_tables(&catalog).await?;
    assert_eq!(count(loader.connection(), "user").await?, 0);
    Ok(())
}

#[tokio::test]
async fn failed_insert_rolls_back_everything() -> Result<()> {
    let catalog = default_catalog()?;
    let mut rng = seeded_rng(Some(3)).rng;
    let users = UserGenerator::new(4, 1000, &mut rng)?.collect::<Result<Vec<_>, _>>()?;
    let mut purchases: Vec<_> = PurchaseGenerator::new(3, 4, now(), &mut rng)?.collect();
    // duplicate primary key on the last purchase
    purchases[2].id = purchases[0].id;

    let mut loader = memory_loader().await?;
    loader.create_tables(&catalog).await?;
    let result = loader
        .load(&catalog, &users, &mut purchases.into_iter())
        .await;
    assert!(result.is_err());

    let conn = loader.connection();
    assert_eq!(count(conn, "user").await?, 0);
    assert_eq!(count(conn, "purchase").await?, 0);
    Ok(())
}

#[tokio::test]
async fn loading_twice_doubles_rows() -> Result<()> {
    let path = temp_db_path("twice");
    let target = Target::parse(path.to_str().context("utf-8 temp path")?)?;
    let request = LoadRequest {
        options: GenerateOptions {
            user_count: 5,
            purchase_count: 10,
            ..GenerateOptions::default()
        },
        seed: Some(77),
        now: Some(now()),
    };

    let first = seed_database(&target, &request).await?;
    let second = seed_database(&target, &request).await?;
    assert_eq!(first.user_id_offset, 0);
    assert_eq!(second.user_id_offset, 5);
    assert_eq!(second.purchase_id_offset, 10);

    let mut conn = SqliteConnection::connect(target.url()).await?;
    assert_eq!(count(&mut conn, "user").await?, 10);
    assert_eq!(count(&mut conn, "purchase").await?, 20);

    let dangling: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM purchase p LEFT JOIN \"user\" u ON u.id_user = p.id_user WHERE u.id_user IS NULL",
    )
    .fetch_one(&mut conn)
    .await?;
    assert_eq!(dangling, 0);

    conn.close().await?;
    std::fs::remove_file(&path).ok();
    Ok(())
}

#[tokio::test]
async fn load_from_url_uses_default_counts() -> Result<()> {
    let path = temp_db_path("url");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let report = load_from_url(&url).await?;
    assert_eq!(report.users_inserted, 100);
    assert_eq!(report.purchases_inserted, 1000);

    let mut conn = SqliteConnection::connect(&url).await?;
    assert_eq!(count(&mut conn, "user").await?, 100);
    assert_eq!(count(&mut conn, "purchase").await?, 1000);

    let max_user: i64 = sqlx::query_scalar("SELECT MAX(id_user) FROM purchase")
        .fetch_one(&mut conn)
        .await?;
    assert!((1..=99).contains(&max_user));

    conn.close().await?;
    std::fs::remove_file(&path).ok();
    Ok(())
}

fn temp_db_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("shopseed_load_{label}_{}.sqlite", uuid::Uuid::new_v4()));
    path
}
