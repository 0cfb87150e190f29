use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Validate internal consistency of a catalog.
///
/// This checks:
/// - at least one table is registered
/// - duplicate columns
/// - primary key columns exist
/// - foreign key columns exist and reference a table registered earlier
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(Error::InvalidSchema("catalog has no tables".to_string()));
    }

    let mut seen: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for table in catalog.tables() {
        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }

        if let Some(pk) = &table.primary_key {
            for column in &pk.columns {
                if !columns.contains(column.as_str()) {
                    return Err(Error::InvalidSchema(format!(
                        "primary key column not found: {}.{}",
                        table.name, column
                    )));
                }
            }
        }

        for fk in &table.foreign_keys {
            if fk.columns.len() != fk.referenced_columns.len() {
                return Err(Error::InvalidSchema(format!(
                    "foreign key on {} has mismatched column counts",
                    table.name
                )));
            }
            for column in &fk.columns {
                if !columns.contains(column.as_str()) {
                    return Err(Error::InvalidSchema(format!(
                        "foreign key column not found: {}.{}",
                        table.name, column
                    )));
                }
            }

            let referenced = if fk.referenced_table == table.name {
                &columns
            } else {
                seen.get(fk.referenced_table.as_str()).ok_or_else(|| {
                    Error::InvalidSchema(format!(
                        "foreign key on {} references unknown table {}",
                        table.name, fk.referenced_table
                    ))
                })?
            };
            for column in &fk.referenced_columns {
                if !referenced.contains(column.as_str()) {
                    return Err(Error::InvalidSchema(format!(
                        "referenced column not found: {}.{}",
                        fk.referenced_table, column
                    )));
                }
            }
        }

        seen.insert(table.name.as_str(), columns);
    }

    Ok(())
}
