use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{ColumnType, Table};

/// Name of the customer table.
pub const USER_TABLE: &str = "user";
/// Name of the purchase table.
pub const PURCHASE_TABLE: &str = "purchase";

/// Registry of table definitions, kept in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tables: Vec<Table>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table definition.
    ///
    /// Registering an identical definition again is a no-op. A different
    /// definition under an existing name is rejected.
    pub fn register(&mut self, table: Table) -> Result<&Table> {
        if let Some(idx) = self.tables.iter().position(|t| t.name == table.name) {
            if self.tables[idx] != table {
                return Err(Error::InvalidSchema(format!(
                    "table '{}' already registered with a different definition",
                    table.name
                )));
            }
            return Ok(&self.tables[idx]);
        }
        self.tables.push(table);
        let last = self.tables.len() - 1;
        Ok(&self.tables[last])
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Look up a table, failing with a schema error when it is missing.
    pub fn require(&self, name: &str) -> Result<&Table> {
        self.table(name)
            .ok_or_else(|| Error::InvalidSchema(format!("table '{name}' is not registered")))
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Register the `user` and `purchase` tables.
pub fn define_tables(catalog: &mut Catalog) -> Result<()> {
    catalog.register(user_table())?;
    catalog.register(purchase_table())?;
    Ok(())
}

/// Build a catalog containing only the shopseed tables.
pub fn default_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();
    define_tables(&mut catalog)?;
    Ok(catalog)
}

fn user_table() -> Table {
    Table::new(USER_TABLE)
        .column("id_user", ColumnType::Integer)
        .column("title", ColumnType::Text)
        .column("first_name", ColumnType::Text)
        .column("surname", ColumnType::Text)
        .primary_key(&["id_user"])
}

fn purchase_table() -> Table {
    Table::new(PURCHASE_TABLE)
        .column("id_purchase", ColumnType::Integer)
        .column("id_user", ColumnType::Integer)
        .column("category", ColumnType::Text)
        .column("item", ColumnType::Text)
        .column("date", ColumnType::Timestamp)
        .column("price", ColumnType::Integer)
        .primary_key(&["id_purchase"])
        .foreign_key("id_user", USER_TABLE, "id_user")
}
