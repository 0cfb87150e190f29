//! Loader implementation shared by the sqlx backends.
//!
//! sqlx connection types are concrete per database, so the transaction flow
//! is expanded once per backend.

macro_rules! impl_loader {
    ($loader:ident, $db:ty, $conn:ty, $dialect:expr) => {
        impl $loader {
            pub fn new(conn: $conn) -> Self {
                Self { conn }
            }

            /// Borrow the underlying connection, e.g. to read rows back.
            pub fn connection(&mut self) -> &mut $conn {
                &mut self.conn
            }
        }

        #[async_trait::async_trait]
        impl $crate::adapter::Loader for $loader {
            async fn create_tables(
                &mut self,
                catalog: &shopseed_core::Catalog,
            ) -> Result<(), $crate::error::LoadError> {
                shopseed_core::validate_catalog(catalog)?;
                for statement in shopseed_core::create_statements(catalog, $dialect) {
                    sqlx::query(&statement).execute(&mut self.conn).await?;
                }
                tracing::info!(event = "tables_ready", dialect = %$dialect, tables = catalog.len());
                Ok(())
            }

            async fn load(
                &mut self,
                catalog: &shopseed_core::Catalog,
                users: &[shopseed_generate::UserRecord],
                purchases: &mut (dyn Iterator<Item = shopseed_generate::PurchaseRecord> + Send),
            ) -> Result<$crate::report::LoadReport, $crate::error::LoadError> {
                use sqlx::Connection;

                use $crate::sql::{
                    PURCHASE_COLUMNS, USER_BATCH_ROWS, USER_COLUMNS, ensure_columns,
                    insert_prefix, insert_row_sql, max_id_sql,
                };

                let user_table = catalog.require(shopseed_core::USER_TABLE)?;
                let purchase_table = catalog.require(shopseed_core::PURCHASE_TABLE)?;
                ensure_columns(user_table, USER_COLUMNS)?;
                ensure_columns(purchase_table, PURCHASE_COLUMNS)?;

                let start = std::time::Instant::now();
                let mut tx = self.conn.begin().await?;
                tracing::info!(event = "transaction_opened");

                let user_id_offset: i64 = sqlx::query_scalar(&max_id_sql(user_table)?)
                    .fetch_one(&mut *tx)
                    .await?;
                let purchase_id_offset: i64 = sqlx::query_scalar(&max_id_sql(purchase_table)?)
                    .fetch_one(&mut *tx)
                    .await?;
                if user_id_offset > 0 || purchase_id_offset > 0 {
                    tracing::info!(
                        event = "existing_rows",
                        user_id_offset,
                        purchase_id_offset,
                        "appending after existing rows"
                    );
                }

                let prefix = insert_prefix(user_table);
                for chunk in users.chunks(USER_BATCH_ROWS) {
                    let mut builder = sqlx::QueryBuilder::<$db>::new(prefix.as_str());
                    builder.push_values(chunk, |mut row, user| {
                        row.push_bind(user.id + user_id_offset)
                            .push_bind(user.title.clone())
                            .push_bind(user.first_name.clone())
                            .push_bind(user.surname.clone());
                    });
                    builder.build().execute(&mut *tx).await?;
                }
                tracing::info!(event = "users_inserted", rows = users.len());

                let sql = insert_row_sql(purchase_table, $dialect);
                let mut purchases_inserted = 0_u64;
                for purchase in purchases {
                    sqlx::query(&sql)
                        .bind(purchase.id + purchase_id_offset)
                        .bind(purchase.user_id + user_id_offset)
                        .bind(purchase.category)
                        .bind(purchase.item)
                        .bind(purchase.date)
                        .bind(purchase.price)
                        .execute(&mut *tx)
                        .await?;
                    purchases_inserted += 1;
                }
                tracing::info!(event = "purchases_inserted", rows = purchases_inserted);

                tx.commit().await?;
                let duration_ms = start.elapsed().as_millis() as u64;
                tracing::info!(event = "transaction_committed", duration_ms);

                Ok($crate::report::LoadReport {
                    dialect: $dialect,
                    users_inserted: users.len() as u64,
                    purchases_inserted,
                    user_id_offset,
                    purchase_id_offset,
                    duration_ms,
                })
            }

            async fn close(self: Box<Self>) -> Result<(), $crate::error::LoadError> {
                use sqlx::Connection;

                let loader = *self;
                loader.conn.close().await?;
                tracing::info!(event = "connection_closed");
                Ok(())
            }
        }
    };
}

pub(crate) use impl_loader;
