//! The abstract-kind → native-type catalog and the reverse cast-type lookup.

use tracing::debug;

use crate::config::BooleanDomain;

/// Abstract column kinds the adapter knows how to render and cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    PrimaryKey,
    String,
    Text,
    Integer,
    Float,
    Decimal,
    DateTime,
    Timestamp,
    Date,
    Binary,
    Boolean,
}

impl ColumnKind {
    /// Resolve the cast kind for a native Firebird type string.
    ///
    /// Accepts parameterized spellings (`varchar(255)`, `decimal(10,2)`).
    /// Unknown types fall back to the permissive string kind.
    pub fn from_sql_type(sql_type: &str) -> ColumnKind {
        let normalized = sql_type.trim().to_lowercase();
        // Strip any parameter list: "varchar(255)" -> "varchar".
        let base = normalized
            .split('(')
            .next()
            .unwrap_or_default()
            .trim();

        match base {
            "varchar" | "character varying" | "char varying" => ColumnKind::String,
            "char" | "character" => ColumnKind::String,
            "blob sub_type text" | "blob sub_type 1" => ColumnKind::Text,
            "blob" | "blob sub_type 0" | "blob sub_type binary" => ColumnKind::Binary,
            "smallint" | "integer" | "int" | "bigint" => ColumnKind::Integer,
            "float" | "double precision" | "real" => ColumnKind::Float,
            "decimal" | "numeric" => ColumnKind::Decimal,
            "timestamp" | "time" => ColumnKind::DateTime,
            "date" => ColumnKind::Date,
            "boolean" => ColumnKind::Boolean,
            other => {
                debug!(sql_type = other, "unknown native type, casting as string");
                ColumnKind::String
            }
        }
    }
}

/// Literal native type declaration for one abstract kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeTypeSpec {
    /// Type name emitted into DDL.
    pub name: String,

    /// Default length, for kinds that carry one.
    pub limit: Option<u32>,

    /// Default numeric precision.
    pub precision: Option<u32>,

    /// Default numeric scale.
    pub scale: Option<u32>,
}

impl NativeTypeSpec {
    fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            limit: None,
            precision: None,
            scale: None,
        }
    }
}

/// The native type catalog, built once per adapter from its configured
/// boolean domain. Pure lookup; every kind has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeTypes {
    primary_key: NativeTypeSpec,
    string: NativeTypeSpec,
    text: NativeTypeSpec,
    integer: NativeTypeSpec,
    float: NativeTypeSpec,
    decimal: NativeTypeSpec,
    datetime: NativeTypeSpec,
    timestamp: NativeTypeSpec,
    date: NativeTypeSpec,
    binary: NativeTypeSpec,
    boolean: NativeTypeSpec,
}

impl NativeTypes {
    /// Build the catalog for the given boolean domain.
    pub fn new(boolean_domain: &BooleanDomain) -> Self {
        Self {
            primary_key: NativeTypeSpec::plain("integer not null primary key"),
            string: NativeTypeSpec {
                name: "varchar".to_string(),
                limit: Some(255),
                precision: None,
                scale: None,
            },
            text: NativeTypeSpec::plain("blob sub_type text"),
            integer: NativeTypeSpec::plain("integer"),
            float: NativeTypeSpec::plain("float"),
            decimal: NativeTypeSpec::plain("decimal"),
            datetime: NativeTypeSpec::plain("timestamp"),
            timestamp: NativeTypeSpec::plain("timestamp"),
            date: NativeTypeSpec::plain("date"),
            binary: NativeTypeSpec::plain("blob"),
            boolean: NativeTypeSpec {
                name: boolean_domain.name.clone(),
                limit: boolean_domain.limit,
                precision: None,
                scale: None,
            },
        }
    }

    /// The native declaration for an abstract kind.
    pub fn get(&self, kind: ColumnKind) -> &NativeTypeSpec {
        match kind {
            ColumnKind::PrimaryKey => &self.primary_key,
            ColumnKind::String => &self.string,
            ColumnKind::Text => &self.text,
            ColumnKind::Integer => &self.integer,
            ColumnKind::Float => &self.float,
            ColumnKind::Decimal => &self.decimal,
            ColumnKind::DateTime => &self.datetime,
            ColumnKind::Timestamp => &self.timestamp,
            ColumnKind::Date => &self.date,
            ColumnKind::Binary => &self.binary,
            ColumnKind::Boolean => &self.boolean,
        }
    }
}
