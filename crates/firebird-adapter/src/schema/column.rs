//! Structured column metadata produced by introspection.

use crate::client::{RawField, Value};
use crate::config::BooleanDomain;
use crate::dialect::ColumnKind;

/// Resolved type metadata for one introspected column.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlTypeMetadata {
    /// Native SQL type string, verbatim from the catalog.
    pub sql_type: String,

    /// Cast kind resolved for the type (boolean when the column's domain is
    /// the configured boolean domain).
    pub cast_kind: ColumnKind,

    /// Numeric precision.
    pub precision: Option<u32>,

    /// Numeric scale.
    pub scale: Option<u32>,

    /// Character or byte length.
    pub limit: Option<u32>,
}

impl SqlTypeMetadata {
    /// Resolve metadata for a raw catalog field.
    ///
    /// A column whose domain name equals the configured boolean domain casts
    /// as boolean regardless of its literal SQL type; every other column
    /// casts by its SQL type string. Precision, scale, and limit are copied
    /// from the raw field.
    pub fn resolve(sql_type: &str, field: &RawField, boolean_domain: &BooleanDomain) -> Self {
        let cast_kind = if field.domain.as_deref() == Some(boolean_domain.name.as_str()) {
            ColumnKind::Boolean
        } else {
            ColumnKind::from_sql_type(sql_type)
        };

        Self {
            sql_type: sql_type.to_string(),
            cast_kind,
            precision: field.precision,
            scale: field.scale,
            limit: field.length,
        }
    }
}

/// One introspected column. Immutable; rebuilt on every schema query.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,

    /// Declared default value, if any.
    pub default: Option<Value>,

    /// Whether the column allows NULL.
    pub nullable: bool,

    /// Owning table.
    pub table_name: String,

    /// Resolved type metadata.
    pub sql_type_metadata: SqlTypeMetadata,

    /// The raw catalog row this descriptor was built from.
    pub raw_field: RawField,
}

impl ColumnDescriptor {
    /// The resolved cast kind.
    pub fn cast_kind(&self) -> ColumnKind {
        self.sql_type_metadata.cast_kind
    }

    /// The native SQL type string.
    pub fn sql_type(&self) -> &str {
        &self.sql_type_metadata.sql_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smallint_field(domain: Option<&str>) -> RawField {
        RawField {
            name: "ACTIVE".to_string(),
            sql_type: "smallint".to_string(),
            default: None,
            nullable: true,
            domain: domain.map(str::to_string),
            precision: None,
            scale: None,
            length: Some(2),
        }
    }

    #[test]
    fn test_resolve_boolean_domain_match() {
        let domain = BooleanDomain {
            name: "D_BOOLEAN".to_string(),
            ..BooleanDomain::default()
        };
        let field = smallint_field(Some("D_BOOLEAN"));

        let meta = SqlTypeMetadata::resolve(&field.sql_type, &field, &domain);
        assert_eq!(meta.cast_kind, ColumnKind::Boolean);
        assert_eq!(meta.sql_type, "smallint");
        assert_eq!(meta.limit, Some(2));
    }

    #[test]
    fn test_resolve_boolean_ignores_literal_sql_type() {
        // Domain equality wins even when the SQL type spells something else.
        let domain = BooleanDomain {
            name: "D_BOOLEAN".to_string(),
            ..BooleanDomain::default()
        };
        let mut field = smallint_field(Some("D_BOOLEAN"));
        field.sql_type = "integer".to_string();

        let meta = SqlTypeMetadata::resolve("integer", &field, &domain);
        assert_eq!(meta.cast_kind, ColumnKind::Boolean);
        assert_eq!(meta.sql_type, "integer");
    }

    #[test]
    fn test_resolve_non_matching_domain_uses_sql_type() {
        let domain = BooleanDomain {
            name: "D_BOOLEAN".to_string(),
            ..BooleanDomain::default()
        };
        let field = smallint_field(Some("D_MONEY"));

        let meta = SqlTypeMetadata::resolve("smallint", &field, &domain);
        assert_eq!(meta.cast_kind, ColumnKind::Integer);
    }

    #[test]
    fn test_resolve_without_domain_uses_sql_type() {
        let field = RawField {
            name: "NAME".to_string(),
            sql_type: "varchar(120)".to_string(),
            length: Some(120),
            ..RawField::default()
        };

        let meta = SqlTypeMetadata::resolve("varchar(120)", &field, &BooleanDomain::default());
        assert_eq!(meta.cast_kind, ColumnKind::String);
        assert_eq!(meta.limit, Some(120));
    }

    #[test]
    fn test_resolve_copies_precision_and_scale() {
        let field = RawField {
            name: "PRICE".to_string(),
            sql_type: "decimal(10,2)".to_string(),
            precision: Some(10),
            scale: Some(2),
            ..RawField::default()
        };

        let meta = SqlTypeMetadata::resolve("decimal(10,2)", &field, &BooleanDomain::default());
        assert_eq!(meta.cast_kind, ColumnKind::Decimal);
        assert_eq!(meta.precision, Some(10));
        assert_eq!(meta.scale, Some(2));
    }
}
