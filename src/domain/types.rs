//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., trimmed non-wildcard search
//! keywords, finite numeric parameters) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::ops::Deref;

use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided parameter could not be read as a finite number.
    #[error("{0} must be of type number")]
    NotANumber(&'static str),
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string was the match-everything wildcard.
    #[error("wildcard matches everything")]
    Wildcard,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wildcard accepted in place of a keyword to mean "no filter".
pub const SEARCH_WILDCARD: &str = "*";

/// Trimmed, non-empty, non-wildcard substring used to filter employee names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchKeyword(String);

impl SearchKeyword {
    /// Trims whitespace and rejects empty or wildcard inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed == SEARCH_WILDCARD {
            return Err(TypeConstraintError::Wildcard);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the keyword as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for SearchKeyword {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_trimmed() {
        let keyword = SearchKeyword::new("  ann ").unwrap();
        assert_eq!(keyword.as_str(), "ann");
    }

    #[test]
    fn keyword_rejects_blank_and_wildcard() {
        assert_eq!(
            SearchKeyword::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
        assert_eq!(SearchKeyword::new(" * "), Err(TypeConstraintError::Wildcard));
    }

    #[test]
    fn keyword_keeps_embedded_wildcard() {
        let keyword = SearchKeyword::new("a*b").unwrap();
        assert_eq!(&*keyword, "a*b");
    }
}
