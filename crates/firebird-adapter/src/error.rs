//! Error types for the adapter library.

use thiserror::Error;

/// Main error type for adapter operations.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Configuration error (invalid YAML, missing fields, bad identifiers).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error surfaced by the underlying Firebird client.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// A statement violated a foreign key constraint.
    #[error("Foreign key violation: {message}")]
    InvalidForeignKey { message: String },

    /// A statement violated a primary or unique key constraint.
    #[error("Record not unique: {message}")]
    NotUnique { message: String },

    /// Any other statement failure.
    #[error("Statement failed: {message}")]
    General { message: String },

    /// IO error (configuration file operations).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AdapterError {
    /// Create a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        AdapterError::Config(message.into())
    }

    /// Create a General error.
    pub fn general(message: impl Into<String>) -> Self {
        AdapterError::General {
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Raw error reported by the underlying Firebird client.
///
/// Carries the driver's message text verbatim; [`translate_exception`]
/// classifies it into the adapter taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ClientError {
    /// Driver message text.
    pub message: String,
    /// Firebird status code, when the driver reports one.
    pub code: Option<i32>,
}

impl ClientError {
    /// Create a client error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a client error with a status code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }
}

/// Classification target for a translated client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    InvalidForeignKey,
    NotUnique,
    General,
}

/// Ordered classification rules, evaluated top to bottom. The first rule
/// whose pattern occurs in the raw driver message wins; unmatched messages
/// fall through to [`ErrorKind::General`].
const CLASSIFICATION_RULES: &[(&str, ErrorKind)] = &[
    ("violation of FOREIGN KEY constraint", ErrorKind::InvalidForeignKey),
    (
        "violation of PRIMARY or UNIQUE KEY constraint",
        ErrorKind::NotUnique,
    ),
    ("attempt to store duplicate value", ErrorKind::NotUnique),
    (
        "This operation is not defined for system tables",
        ErrorKind::General,
    ),
];

/// Translate a raw client error into the adapter error taxonomy.
///
/// `message` becomes the payload of the resulting error; the raw driver
/// text is only consulted for classification. Classification itself never
/// fails: anything the rule table does not match becomes a
/// [`AdapterError::General`].
pub fn translate_exception(e: &ClientError, message: impl Into<String>) -> AdapterError {
    let message = message.into();
    let kind = CLASSIFICATION_RULES
        .iter()
        .find(|(pattern, _)| e.message.contains(pattern))
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::General);

    match kind {
        ErrorKind::InvalidForeignKey => AdapterError::InvalidForeignKey { message },
        ErrorKind::NotUnique => AdapterError::NotUnique { message },
        ErrorKind::General => AdapterError::General { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(raw: &str) -> AdapterError {
        let e = ClientError::new(raw);
        translate_exception(&e, raw)
    }

    #[test]
    fn test_translate_foreign_key_violation() {
        let err = translate(
            "violation of FOREIGN KEY constraint \"FK_ORDERS_CUSTOMER\" on table \"ORDERS\"",
        );
        assert!(matches!(err, AdapterError::InvalidForeignKey { .. }));
    }

    #[test]
    fn test_translate_primary_or_unique_violation() {
        let err = translate(
            "violation of PRIMARY or UNIQUE KEY constraint \"PK_ORDERS\" on table \"ORDERS\"",
        );
        assert!(matches!(err, AdapterError::NotUnique { .. }));
    }

    #[test]
    fn test_translate_duplicate_value() {
        let err = translate("attempt to store duplicate value (visible to active transactions)");
        assert!(matches!(err, AdapterError::NotUnique { .. }));
    }

    #[test]
    fn test_translate_system_table_rejection() {
        let err = translate("This operation is not defined for system tables");
        assert!(matches!(err, AdapterError::General { .. }));
    }

    #[test]
    fn test_translate_unmatched_falls_back_to_general() {
        let err = translate("arithmetic exception, numeric overflow, or string truncation");
        assert!(matches!(err, AdapterError::General { .. }));

        let err = translate("");
        assert!(matches!(err, AdapterError::General { .. }));
    }

    #[test]
    fn test_translate_keeps_provided_message() {
        let e = ClientError::new("violation of FOREIGN KEY constraint \"FK_X\"");
        let err = translate_exception(&e, "INSERT INTO orders ... failed");
        match err {
            AdapterError::InvalidForeignKey { message } => {
                assert_eq!(message, "INSERT INTO orders ... failed");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_classification_is_substring_based() {
        // The patterns match anywhere inside the driver text.
        let err = translate("-803: attempt to store duplicate value, key ID=7");
        assert!(matches!(err, AdapterError::NotUnique { .. }));
    }
}
