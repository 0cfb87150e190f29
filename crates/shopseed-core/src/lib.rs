//! Core contracts for shopseed.
//!
//! This crate defines the table model for the `user` and `purchase` tables,
//! the catalog that registers them, and DDL rendering shared by the loader
//! and the CLI.

pub mod catalog;
pub mod constraints;
pub mod ddl;
pub mod error;
pub mod redaction;
pub mod schema;
pub mod validation;

pub use catalog::{Catalog, PURCHASE_TABLE, USER_TABLE, default_catalog, define_tables};
pub use constraints::{ForeignKey, PrimaryKey};
pub use ddl::{Dialect, create_statements, create_table_sql, quote_ident};
pub use error::{Error, Result};
pub use redaction::{RedactedConnection, redact_connection_string};
pub use schema::{Column, ColumnType, Table};
pub use validation::validate_catalog;
