use exprkit_type::{Type, value::Value};
use serde::{Deserialize, Serialize};

/// Constant expression: `5`, `"hello"`, `true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstantExpression {
  pub value: Value,
  pub ty: Type,
}

impl ConstantExpression {
  /// A constant labelled with its value's own type.
  pub fn new(value: Value) -> Self {
    let ty = value.value_type();
    Self { value, ty }
  }

  /// A constant with an explicit type label, for values inhabiting a wider
  /// type than their own: a `Null` passed where a `Named` type is expected.
  pub fn typed(
    value: Value,
    ty: Type,
  ) -> Self {
    Self { value, ty }
  }
}
