//! Validated name of the persisted frames table.

use std::fmt;

use crate::{FramesError, FramesResult};

/// Longest identifier accepted, matching the PostgreSQL limit so names stay portable.
const MAX_IDENTIFIER_LEN: usize = 63;

/// A table name that is safe to place in SQL text.
///
/// Only plain identifiers (`[A-Za-z_][A-Za-z0-9_]*`) are accepted, so the name
/// never needs escaping beyond double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> FramesResult<Self> {
        let name = name.into();

        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_')
            .unwrap_or(false);
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest || name.len() > MAX_IDENTIFIER_LEN {
            return Err(FramesError::InvalidConfig(format!(
                "table name '{}' is not a plain SQL identifier",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted form for use in statements.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TableName {
    type Err = FramesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
