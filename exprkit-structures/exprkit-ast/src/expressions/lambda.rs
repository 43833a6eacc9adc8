use exprkit_type::Type;
use serde::{Deserialize, Serialize};

use super::Expression;
use super::parameter::ParameterExpression;

/// Lambda expression over a single parameter:
/// `(instance: Counter) => instance.get_value()`.
///
/// Conceptually `InstanceType -> ReturnType`; the instance type is the
/// parameter's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LambdaExpression {
  pub parameter: ParameterExpression,
  pub body: Box<Expression>,
  pub return_type: Type,
}

impl LambdaExpression {
  pub fn new(
    parameter: ParameterExpression,
    body: Box<Expression>,
    return_type: Type,
  ) -> Self {
    Self {
      parameter,
      body,
      return_type,
    }
  }

  pub fn instance_type(&self) -> &Type {
    &self.parameter.ty
  }
}
