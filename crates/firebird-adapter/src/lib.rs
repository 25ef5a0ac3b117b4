//! # firebird-adapter
//!
//! Firebird database adapter for relational data-access frameworks.
//!
//! This library bridges an abstract relational model onto Firebird's
//! concrete SQL dialect and system catalogs:
//!
//! - **Type catalog** mapping abstract column kinds to native declarations,
//!   including the smallint-domain representation of booleans
//! - **Schema introspection** over `rdb$indices`, `rdb$index_segments`,
//!   and `rdb$relation_constraints`
//! - **Error translation** from raw driver messages into a standard
//!   taxonomy (foreign key violation, uniqueness violation, general)
//! - **Connection lifecycle** (health probe, reconnect, disconnect) over a
//!   pluggable client
//!
//! The wire protocol itself stays outside this crate: the adapter drives
//! any client implementing [`FirebirdClient`], reconnecting through a
//! [`ClientConnector`].
//!
//! ## Example
//!
//! ```no_run
//! use firebird_adapter::{AdapterConfig, FirebirdDialect};
//!
//! fn main() -> firebird_adapter::Result<()> {
//!     let config = AdapterConfig::load("database.yml")?;
//!     let dialect = FirebirdDialect::new(&config);
//!     assert_eq!(dialect.name(), "firebird");
//!     assert_eq!(dialect.quoted_true(), "1");
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod client;
pub mod config;
pub mod dialect;
mod encoding;
pub mod error;
pub mod schema;

// Re-exports for convenient access
pub use adapter::FirebirdAdapter;
pub use client::{ClientConnector, FirebirdClient, RawField, Row, Value};
pub use config::{AdapterConfig, BooleanDomain};
pub use dialect::{ColumnKind, FirebirdDialect, NativeTypeSpec, NativeTypes};
pub use error::{translate_exception, AdapterError, ClientError, Result};
pub use schema::{ColumnDescriptor, SqlTypeMetadata};
