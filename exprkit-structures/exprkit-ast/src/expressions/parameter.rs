use exprkit_type::Type;
use serde::{Deserialize, Serialize};

/// Parameter expression: the placeholder a lambda abstracts over, the
/// `instance` in `(instance: Counter) => instance.get_value()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterExpression {
  pub ty: Type,
  /// Display name; anonymous parameters render as `param`.
  pub name: Option<String>,
}

impl ParameterExpression {
  pub fn new(ty: Type) -> Self {
    Self { ty, name: None }
  }

  pub fn named(
    ty: Type,
    name: String,
  ) -> Self {
    Self { ty, name: Some(name) }
  }
}
