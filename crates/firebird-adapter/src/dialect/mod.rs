//! Firebird SQL dialect: identifier and literal quoting plus DDL type
//! rendering. One instance serves one adapter; it is built from the
//! adapter's configuration and holds the resolved native type catalog.

pub mod types;

pub use types::{ColumnKind, NativeTypeSpec, NativeTypes};

use crate::config::{AdapterConfig, BooleanDomain};
use crate::error::{AdapterError, Result};

/// Maximum identifier length. Firebird stores object names in CHAR(31)
/// catalog columns; longer names are rejected at parse time.
pub const MAX_IDENTIFIER_LENGTH: usize = 31;

/// Validate an identifier before it is interpolated into SQL.
///
/// Rejects empty names, names containing null bytes, and names exceeding
/// the catalog limit.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AdapterError::config("identifier cannot be empty"));
    }

    if name.contains('\0') {
        return Err(AdapterError::Config(format!(
            "identifier contains null byte: {name:?}"
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(AdapterError::Config(format!(
            "identifier exceeds maximum length of {MAX_IDENTIFIER_LENGTH} bytes \
             (got {} bytes): {name:?}",
            name.len()
        )));
    }

    Ok(())
}

/// Firebird dialect implementation.
#[derive(Debug, Clone)]
pub struct FirebirdDialect {
    types: NativeTypes,
    boolean_domain: BooleanDomain,
}

impl FirebirdDialect {
    /// Build the dialect for an adapter configuration.
    pub fn new(config: &AdapterConfig) -> Self {
        Self {
            types: NativeTypes::new(&config.boolean_domain),
            boolean_domain: config.boolean_domain.clone(),
        }
    }

    /// Dialect identifier.
    pub fn name(&self) -> &str {
        "firebird"
    }

    /// The native type catalog resolved for this adapter.
    pub fn native_types(&self) -> &NativeTypes {
        &self.types
    }

    /// Quote an identifier.
    ///
    /// Firebird (dialect 3) uses double quotes; inner quotes are doubled.
    pub fn quote_ident(&self, name: &str) -> Result<String> {
        validate_identifier(name)?;
        Ok(format!("\"{}\"", name.replace('"', "\"\"")))
    }

    /// Quote a string literal, doubling single quotes.
    pub fn quote_string(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// The literal stored for `true` under the configured boolean domain.
    pub fn quoted_true(&self) -> String {
        self.boolean_domain.true_value.to_string()
    }

    /// The literal stored for `false` under the configured boolean domain.
    pub fn quoted_false(&self) -> String {
        self.boolean_domain.false_value.to_string()
    }

    /// Render the DDL type declaration for an abstract kind.
    ///
    /// `limit` applies to string kinds, `precision`/`scale` to decimal;
    /// omitted parameters fall back to the catalog defaults.
    pub fn type_to_sql(
        &self,
        kind: ColumnKind,
        limit: Option<u32>,
        precision: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String> {
        let spec = self.types.get(kind);

        match kind {
            ColumnKind::String => {
                let limit = limit.or(spec.limit);
                Ok(match limit {
                    Some(l) => format!("{}({})", spec.name, l),
                    None => spec.name.clone(),
                })
            }
            ColumnKind::Decimal => {
                let precision = precision.or(spec.precision);
                let scale = scale.or(spec.scale);
                match (precision, scale) {
                    (Some(p), Some(s)) => Ok(format!("{}({},{})", spec.name, p, s)),
                    (Some(p), None) => Ok(format!("{}({})", spec.name, p)),
                    (None, Some(_)) => Err(AdapterError::config(
                        "decimal scale requires an explicit precision",
                    )),
                    (None, None) => Ok(spec.name.clone()),
                }
            }
            _ => Ok(spec.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialect() -> FirebirdDialect {
        let config = AdapterConfig::from_yaml(
            r#"
database: app.fdb
user: SYSDBA
"#,
        )
        .unwrap();
        FirebirdDialect::new(&config)
    }

    #[test]
    fn test_quote_ident() {
        let d = dialect();
        assert_eq!(d.quote_ident("ORDERS").unwrap(), "\"ORDERS\"");
        assert_eq!(d.quote_ident("odd\"name").unwrap(), "\"odd\"\"name\"");
    }

    #[test]
    fn test_quote_ident_rejects_empty() {
        assert!(dialect().quote_ident("").is_err());
    }

    #[test]
    fn test_quote_ident_rejects_null_byte() {
        assert!(dialect().quote_ident("a\0b").is_err());
    }

    #[test]
    fn test_quote_ident_enforces_catalog_limit() {
        let d = dialect();
        let max = "A".repeat(MAX_IDENTIFIER_LENGTH);
        assert!(d.quote_ident(&max).is_ok());

        let too_long = "A".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert!(d.quote_ident(&too_long).is_err());
    }

    #[test]
    fn test_quote_string() {
        let d = dialect();
        assert_eq!(d.quote_string("plain"), "'plain'");
        assert_eq!(d.quote_string("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn test_boolean_literals_follow_domain() {
        let d = dialect();
        assert_eq!(d.quoted_true(), "1");
        assert_eq!(d.quoted_false(), "0");
    }

    #[test]
    fn test_type_to_sql_string() {
        let d = dialect();
        assert_eq!(
            d.type_to_sql(ColumnKind::String, None, None, None).unwrap(),
            "varchar(255)"
        );
        assert_eq!(
            d.type_to_sql(ColumnKind::String, Some(120), None, None)
                .unwrap(),
            "varchar(120)"
        );
    }

    #[test]
    fn test_type_to_sql_decimal() {
        let d = dialect();
        assert_eq!(
            d.type_to_sql(ColumnKind::Decimal, None, None, None).unwrap(),
            "decimal"
        );
        assert_eq!(
            d.type_to_sql(ColumnKind::Decimal, None, Some(10), Some(2))
                .unwrap(),
            "decimal(10,2)"
        );
        assert_eq!(
            d.type_to_sql(ColumnKind::Decimal, None, Some(18), None)
                .unwrap(),
            "decimal(18)"
        );
        assert!(d
            .type_to_sql(ColumnKind::Decimal, None, None, Some(2))
            .is_err());
    }

    #[test]
    fn test_type_to_sql_plain_kinds() {
        let d = dialect();
        assert_eq!(
            d.type_to_sql(ColumnKind::PrimaryKey, None, None, None)
                .unwrap(),
            "integer not null primary key"
        );
        assert_eq!(
            d.type_to_sql(ColumnKind::Text, None, None, None).unwrap(),
            "blob sub_type text"
        );
        assert_eq!(
            d.type_to_sql(ColumnKind::Boolean, None, None, None).unwrap(),
            "smallint"
        );
        // Non-string kinds ignore a supplied limit.
        assert_eq!(
            d.type_to_sql(ColumnKind::Integer, Some(8), None, None)
                .unwrap(),
            "integer"
        );
    }
}
