//! The seam to the underlying Firebird client library.
//!
//! The adapter does not speak the wire protocol itself; it drives a client
//! through [`FirebirdClient`] and re-establishes connections through
//! [`ClientConnector`]. Concrete implementations wrap whatever driver the
//! application links against; the test suite supplies an in-memory mock.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::config::AdapterConfig;
use crate::error::ClientError;

/// A single result value delivered by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Borrow the textual content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract an integer, if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// One result row.
pub type Row = Vec<Value>;

/// A raw column row as delivered by the client's catalog listing.
///
/// Shapes what Firebird keeps in `rdb$relation_fields`/`rdb$fields`,
/// normalized by the client: names unpadded, scale made non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawField {
    /// Column name.
    pub name: String,

    /// Native SQL type string, e.g. `varchar(255)` or `blob sub_type text`.
    pub sql_type: String,

    /// Declared default value, if any.
    pub default: Option<Value>,

    /// Whether the column allows NULL.
    pub nullable: bool,

    /// Source domain name, for columns declared against a named domain.
    pub domain: Option<String>,

    /// Numeric precision.
    pub precision: Option<u32>,

    /// Numeric scale.
    pub scale: Option<u32>,

    /// Character or byte length.
    pub length: Option<u32>,
}

/// Operations the adapter consumes from the underlying Firebird client.
#[async_trait]
pub trait FirebirdClient: Send {
    /// Whether the connection is currently open.
    fn is_open(&self) -> bool;

    /// The connection's character set, under its Firebird name.
    fn encoding(&self) -> &str;

    /// Execute a statement and collect its result rows.
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>, ClientError>;

    /// List user table names, in catalog order.
    async fn table_names(&mut self) -> Result<Vec<String>, ClientError>;

    /// List view names, in catalog order.
    async fn view_names(&mut self) -> Result<Vec<String>, ClientError>;

    /// Raw column rows for a table.
    async fn columns(&mut self, table_name: &str) -> Result<Vec<RawField>, ClientError>;

    /// Close the connection.
    async fn close(&mut self) -> Result<(), ClientError>;
}

/// Establishes client connections from adapter configuration.
///
/// Kept separate from [`FirebirdClient`] so the adapter can drop a dead
/// connection and dial a fresh one from the same stored configuration.
#[async_trait]
pub trait ClientConnector: Send + Sync {
    /// Open a new connection.
    async fn connect(&self, config: &AdapterConfig) -> Result<Box<dyn FirebirdClient>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_as_str() {
        assert_eq!(Value::Text("ID".into()).as_str(), Some("ID"));
        assert_eq!(Value::Int(1).as_str(), None);
        assert_eq!(Value::Null.as_str(), None);
    }

    #[test]
    fn test_value_as_i64() {
        assert_eq!(Value::Int(42).as_i64(), Some(42));
        assert_eq!(Value::Text("42".into()).as_i64(), None);
    }
}
