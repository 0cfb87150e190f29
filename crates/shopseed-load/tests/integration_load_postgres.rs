use std::env;

use anyhow::Result;
use shopseed_generate::GenerateOptions;
use shopseed_load::{LoadRequest, Target, seed_database};
use sqlx::{Connection, PgConnection};

fn database_url() -> Option<String> {
    env::var("TEST_DATABASE_URL").ok()
}

async fn count(conn: &mut PgConnection, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
    Ok(sqlx::query_scalar(&sql).fetch_one(conn).await?)
}

#[tokio::test]
async fn seeds_postgres_and_appends_on_rerun() -> Result<()> {
    let Some(db_url) = database_url() else {
        eprintln!("skipping: set TEST_DATABASE_URL to run Postgres integration tests");
        return Ok(());
    };

    let mut conn = PgConnection::connect(&db_url).await?;
    sqlx::query("DROP TABLE IF EXISTS \"purchase\"")
        .execute(&mut conn)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS \"user\"")
        .execute(&mut conn)
        .await?;

    let target = Target::parse(&db_url)?;
    let request = LoadRequest {
        options: GenerateOptions {
            user_count: 5,
            purchase_count: 10,
            ..GenerateOptions::default()
        },
        seed: Some(11),
        now: None,
    };

    let report = seed_database(&target, &request).await?;
    assert_eq!(report.users_inserted, 5);
    assert_eq!(count(&mut conn, "user").await?, 5);
    assert_eq!(count(&mut conn, "purchase").await?, 10);

    let max_user: i64 = sqlx::query_scalar("SELECT MAX(id_user) FROM purchase")
        .fetch_one(&mut conn)
        .await?;
    assert!(max_user <= 4);

    seed_database(&target, &request).await?;
    assert_eq!(count(&mut conn, "user").await?, 10);
    assert_eq!(count(&mut conn, "purchase").await?, 20);

    Ok(())
}
