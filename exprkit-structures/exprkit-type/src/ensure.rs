//! Argument-validation guards.
//!
//! Callers name the argument they are validating; the label ends up in the
//! error so the failure points at the right parameter.

use crate::error::ArgumentError;
use crate::method::MethodDescriptor;

/// A value with an empty or null-equivalent degenerate form.
pub trait MaybeEmpty {
  fn is_empty_value(&self) -> bool;
}

impl MaybeEmpty for MethodDescriptor {
  fn is_empty_value(&self) -> bool {
    self.is_empty()
  }
}

impl MaybeEmpty for str {
  fn is_empty_value(&self) -> bool {
    self.is_empty()
  }
}

impl MaybeEmpty for String {
  fn is_empty_value(&self) -> bool {
    self.is_empty()
  }
}

impl<T> MaybeEmpty for [T] {
  fn is_empty_value(&self) -> bool {
    self.is_empty()
  }
}

impl<T> MaybeEmpty for Vec<T> {
  fn is_empty_value(&self) -> bool {
    self.is_empty()
  }
}

/// Fails with an [`ArgumentError`] carrying `name` when `value` is empty,
/// otherwise returns without effect.
pub fn is_not_empty<T: MaybeEmpty + ?Sized>(
  value: &T,
  name: &str,
) -> Result<(), ArgumentError> {
  if value.is_empty_value() {
    return Err(ArgumentError::new(name));
  }

  Ok(())
}
