//! Statement text shared by the backends.

use shopseed_core::{Dialect, Error, Table, quote_ident};

/// Users per multi-row `INSERT`, kept well under bind-parameter limits.
pub const USER_BATCH_ROWS: usize = 1000;

pub const USER_COLUMNS: &[&str] = &["id_user", "title", "first_name", "surname"];
pub const PURCHASE_COLUMNS: &[&str] = &["id_purchase", "id_user", "category", "item", "date", "price"];

/// Fail unless `table` declares exactly `expected`, in order.
pub fn ensure_columns(table: &Table, expected: &[&str]) -> Result<(), Error> {
    if table.column_names() != expected {
        return Err(Error::InvalidSchema(format!(
            "table '{}' must declare columns {}",
            table.name,
            expected.join(", ")
        )));
    }
    Ok(())
}

/// `INSERT INTO "t" ("a", "b") ` with the `VALUES` part left to the caller.
pub fn insert_prefix(table: &Table) -> String {
    let columns: Vec<String> = table.columns.iter().map(|col| quote_ident(&col.name)).collect();
    format!(
        "INSERT INTO {} ({}) ",
        quote_ident(&table.name),
        columns.join(", ")
    )
}

/// Single-row insert with dialect placeholders.
pub fn insert_row_sql(table: &Table, dialect: Dialect) -> String {
    let placeholders: Vec<String> = (1..=table.columns.len())
        .map(|idx| match dialect {
            Dialect::Postgres => format!("${idx}"),
            Dialect::Sqlite => "?".to_string(),
        })
        .collect();
    format!("{}VALUES ({})", insert_prefix(table), placeholders.join(", "))
}

/// Highest stored value of the table's primary key, or 0 when empty.
pub fn max_id_sql(table: &Table) -> Result<String, Error> {
    let pk = table
        .primary_key
        .as_ref()
        .and_then(|pk| pk.columns.first())
        .ok_or_else(|| Error::InvalidSchema(format!("table '{}' has no primary key", table.name)))?;
    Ok(format!(
        "SELECT COALESCE(MAX({}), 0) FROM {}",
        quote_ident(pk),
        quote_ident(&table.name)
    ))
}
