use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::schema::{ColumnType, Table};

/// SQL dialect targeted by DDL rendering and the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    fn type_name(&self, column_type: ColumnType) -> &'static str {
        match (self, column_type) {
            (Dialect::Postgres, ColumnType::Integer) => "BIGINT",
            (Dialect::Sqlite, ColumnType::Integer) => "INTEGER",
            (_, ColumnType::Text) => "TEXT",
            (Dialect::Postgres, ColumnType::Timestamp) => "TIMESTAMP",
            (Dialect::Sqlite, ColumnType::Timestamp) => "DATETIME",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quote an identifier. `user` is reserved in Postgres, so every name is quoted.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Render `CREATE TABLE IF NOT EXISTS` for one table.
pub fn create_table_sql(table: &Table, dialect: Dialect) -> String {
    let pk_columns: Vec<&str> = table
        .primary_key
        .as_ref()
        .map(|pk| pk.columns.iter().map(String::as_str).collect())
        .unwrap_or_default();

    let mut lines: Vec<String> = table
        .columns
        .iter()
        .map(|col| {
            let not_null = if pk_columns.contains(&col.name.as_str()) {
                " NOT NULL"
            } else {
                ""
            };
            format!(
                "    {} {}{not_null}",
                quote_ident(&col.name),
                dialect.type_name(col.column_type)
            )
        })
        .collect();

    if !pk_columns.is_empty() {
        lines.push(format!("    PRIMARY KEY ({})", quote_list(&pk_columns)));
    }

    for fk in &table.foreign_keys {
        let columns: Vec<&str> = fk.columns.iter().map(String::as_str).collect();
        let referenced: Vec<&str> = fk.referenced_columns.iter().map(String::as_str).collect();
        lines.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_list(&columns),
            quote_ident(&fk.referenced_table),
            quote_list(&referenced)
        ));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
        quote_ident(&table.name),
        lines.join(",\n")
    )
}

/// DDL for every table in registration order.
pub fn create_statements(catalog: &Catalog, dialect: Dialect) -> Vec<String> {
    catalog
        .tables()
        .map(|table| create_table_sql(table, dialect))
        .collect()
}

fn quote_list(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| quote_ident(name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PURCHASE_TABLE, USER_TABLE, default_catalog};

    #[test]
    fn user_table_is_quoted() {
        let catalog = default_catalog().expect("catalog");
        let sql = create_table_sql(catalog.require(USER_TABLE).expect("user"), Dialect::Postgres);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"user\" ("));
        assert!(sql.contains("\"id_user\" BIGINT NOT NULL"));
        assert!(sql.contains("\"surname\" TEXT"));
        assert!(sql.contains("PRIMARY KEY (\"id_user\")"));
    }

    #[test]
    fn purchase_table_renders_per_dialect() {
        let catalog = default_catalog().expect("catalog");
        let purchase = catalog.require(PURCHASE_TABLE).expect("purchase");

        let pg = create_table_sql(purchase, Dialect::Postgres);
        assert!(pg.contains("\"date\" TIMESTAMP"));
        assert!(pg.contains("FOREIGN KEY (\"id_user\") REFERENCES \"user\" (\"id_user\")"));

        let sqlite = create_table_sql(purchase, Dialect::Sqlite);
        assert!(sqlite.contains("\"date\" DATETIME"));
        assert!(sqlite.contains("\"price\" INTEGER"));
    }

    #[test]
    fn statements_follow_registration_order() {
        let catalog = default_catalog().expect("catalog");
        let statements = create_statements(&catalog, Dialect::Sqlite);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("\"user\" ("));
        assert!(statements[1].contains("\"purchase\" ("));
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
