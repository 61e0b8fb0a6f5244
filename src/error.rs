//! Error types for tiergen

use std::fmt;

/// Errors that can occur while generating DDL, transform SQL or config rows.
///
/// All of these are local validation failures: nothing is retried and no
/// partially-built statement is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Malformed input: empty schema, missing column name/type,
    /// unrecognized aggregate method or table type
    Configuration {
        reason: String,
    },
    /// A free-text value cannot be embedded in a string literal
    Escaping {
        field: String,
        reason: String,
    },
    /// A table or column name is not a valid unquoted SQL identifier
    Identifier {
        value: String,
        reason: String,
    },
}

impl GenerateError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        GenerateError::Configuration { reason: reason.into() }
    }

    pub fn escaping(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GenerateError::Escaping {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn identifier(value: impl Into<String>, reason: impl Into<String>) -> Self {
        GenerateError::Identifier {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Configuration { reason } => {
                write!(f, "Configuration error: {}", reason)
            }
            GenerateError::Escaping { field, reason } => {
                write!(f, "Cannot escape '{}': {}", field, reason)
            }
            GenerateError::Identifier { value, reason } => {
                write!(f, "Invalid identifier '{}': {}", value, reason)
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Errors that can occur while reading a generation request
#[derive(Debug)]
pub enum ParseError {
    /// IO error reading file
    Io {
        path: String,
        source: std::io::Error,
    },
    /// YAML (or JSON) deserialization error
    Yaml {
        source: serde_yaml::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            ParseError::Yaml { source } => {
                write!(f, "Invalid YAML: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Yaml { source } => Some(source),
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io {
            path: String::new(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Yaml { source: err }
    }
}
