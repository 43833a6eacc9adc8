use exprkit_type::method::MethodDescriptor;
use serde::{Deserialize, Serialize};

use super::Expression;

/// Method call expression: `target.method(arg0, arg1)`.
///
/// Arguments keep the order they were supplied in. The descriptor is not
/// checked against the argument list here; arity and type mismatches surface
/// in whatever consumes the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodCallExpression {
  pub target: Box<Expression>,
  pub method: MethodDescriptor,
  pub arguments: Vec<Expression>,
}

impl MethodCallExpression {
  pub fn new(
    target: Box<Expression>,
    method: MethodDescriptor,
    arguments: Vec<Expression>,
  ) -> Self {
    Self {
      target,
      method,
      arguments,
    }
  }
}
