//! Request validation
//!
//! Validation never stops at the first problem: every violated rule is
//! collected into a [`ValidationErrors`] so the caller sees all of them at
//! once. The admin pipeline refuses to act on a request while any remain.

use std::fmt;
use thiserror::Error;

/// A single violated rule
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Id absent or empty
    #[error("must specify id for stored script")]
    MissingId,
    /// Id contains the reserved `#` delimiter
    #[error("id cannot contain '#' for stored script")]
    IdContainsDelimiter,
    /// Lang contains the reserved `#` delimiter
    #[error("lang cannot contain '#' for stored script")]
    LangContainsDelimiter,
    /// No script body
    #[error("must specify code for stored script")]
    MissingContent,
}

/// Aggregate of every violated rule
///
/// Renders the way the admin pipeline reports failures:
/// `Validation Failed: 1: <first>;2: <second>;`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merge another set of violations into this one
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// True when nothing was violated
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Violations in the order they were found
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether a given rule was violated
    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }

    /// Human-readable messages in order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation Failed: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "{}: {};", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
