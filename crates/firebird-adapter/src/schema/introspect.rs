//! Catalog queries against Firebird's system tables.

use tracing::debug;

use crate::adapter::FirebirdAdapter;
use crate::client::{RawField, Value};
use crate::error::{AdapterError, Result};
use crate::schema::column::{ColumnDescriptor, SqlTypeMetadata};

impl FirebirdAdapter {
    /// List user table names, in catalog order.
    pub async fn tables(&mut self) -> Result<Vec<String>> {
        let names = self.client.table_names().await?;
        debug!(count = names.len(), "listed tables");
        Ok(names)
    }

    /// List view names, in catalog order.
    pub async fn views(&mut self) -> Result<Vec<String>> {
        let names = self.client.view_names().await?;
        debug!(count = names.len(), "listed views");
        Ok(names)
    }

    /// Primary key column names for a table, lower-cased and trimmed of the
    /// CHAR(31) padding the catalog stores them with.
    ///
    /// The lookup is case-insensitive in its input: Firebird stores
    /// unquoted identifiers upper-cased, so the table name is upper-cased
    /// before matching.
    pub async fn primary_keys(&mut self, table_name: &str) -> Result<Vec<String>> {
        if table_name.trim().is_empty() {
            return Err(AdapterError::config("table name must not be empty"));
        }

        let relation = table_name.to_uppercase().replace('\'', "''");

        // Joining rdb$relation_constraints with an outer join and then
        // testing c.rdb$constraint_type in WHERE produces exactly this
        // inner join: the equality test discards every NULL-padded row an
        // outer join would add for indexes that back no constraint. The
        // join is written inner to make that explicit.
        let sql = format!(
            r#"
            SELECT
              s.rdb$field_name
            FROM
              rdb$indices i
              JOIN rdb$index_segments s ON i.rdb$index_name = s.rdb$index_name
              JOIN rdb$relation_constraints c ON i.rdb$index_name = c.rdb$index_name
            WHERE
              i.rdb$relation_name = '{relation}'
              AND c.rdb$constraint_type = 'PRIMARY KEY'
            "#
        );

        let values = self.query_values(&sql).await?;
        let names: Vec<String> = values
            .iter()
            .filter_map(Value::as_str)
            .map(|name| name.trim().to_lowercase())
            .collect();

        debug!(table = table_name, primary_key = ?names, "resolved primary key");
        Ok(names)
    }

    /// Raw column rows for a table, as delivered by the client.
    pub async fn column_definitions(&mut self, table_name: &str) -> Result<Vec<RawField>> {
        Ok(self.client.columns(table_name).await?)
    }

    /// Structured column descriptors for a table.
    pub async fn columns(&mut self, table_name: &str) -> Result<Vec<ColumnDescriptor>> {
        let fields = self.column_definitions(table_name).await?;
        let columns = fields
            .into_iter()
            .map(|field| self.new_column_from_field(table_name, field))
            .collect::<Vec<_>>();
        debug!(table = table_name, count = columns.len(), "loaded columns");
        Ok(columns)
    }

    /// Build a column descriptor from one raw catalog row.
    pub fn new_column_from_field(&self, table_name: &str, field: RawField) -> ColumnDescriptor {
        let type_metadata = self.fetch_type_metadata(&field.sql_type, &field);
        ColumnDescriptor {
            name: field.name.clone(),
            default: field.default.clone(),
            nullable: field.nullable,
            table_name: table_name.to_string(),
            sql_type_metadata: type_metadata,
            raw_field: field,
        }
    }

    /// Resolve type metadata for a raw field against the configured boolean
    /// domain.
    pub fn fetch_type_metadata(&self, sql_type: &str, extra: &RawField) -> SqlTypeMetadata {
        SqlTypeMetadata::resolve(sql_type, extra, &self.config.boolean_domain)
    }
}
