//! Validated SQL identifiers

use std::fmt;
use crate::error::GenerateError;

/// An unquoted SQL identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Once constructed it can be spliced into a statement without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Result<Self, GenerateError> {
        let value = value.into();
        validate(&value)?;
        Ok(Identifier(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased copy, used for physical table names
    pub fn to_lowercase(&self) -> Identifier {
        Identifier(self.0.to_lowercase())
    }

    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

fn validate(value: &str) -> Result<(), GenerateError> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Err(GenerateError::identifier(value, "identifier is empty"));
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(GenerateError::identifier(
            value,
            "must start with a letter or underscore",
        ));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(GenerateError::identifier(
            value,
            format!("contains disallowed character '{}'", bad),
        ));
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(Identifier::new("orders").is_ok());
        assert!(Identifier::new("_private").is_ok());
        assert!(Identifier::new("Toll_Stage_2").is_ok());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(matches!(
            Identifier::new(""),
            Err(GenerateError::Identifier { .. })
        ));
        assert!(Identifier::new("2fast").is_err());
        assert!(Identifier::new("user-id").is_err());
        assert!(Identifier::new("orders; DROP TABLE x").is_err());
        assert!(Identifier::new("naïve").is_err());
    }

    #[test]
    fn test_case_helpers() {
        let id = Identifier::new("Toll_Stage").unwrap();
        assert_eq!(id.to_lowercase().as_str(), "toll_stage");
        assert_eq!(id.to_uppercase(), "TOLL_STAGE");
    }
}
