use std::fmt;

use serde::Serialize;

/// Raised when a required argument is empty or null-equivalent.
///
/// Carries the name label of the offending argument. This is the only error
/// kind in the workspace; it propagates to the caller unrecovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentError {
  pub name: String,
}

impl ArgumentError {
  pub fn new(name: &str) -> Self {
    Self { name: name.to_string() }
  }
}

impl fmt::Display for ArgumentError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "argument `{}` must not be empty", self.name)
  }
}

impl std::error::Error for ArgumentError {}
