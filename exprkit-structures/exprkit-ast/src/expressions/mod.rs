pub mod constant;
pub mod lambda;
pub mod method_call;
pub mod parameter;

use constant::ConstantExpression;
use exprkit_type::Type;
use lambda::LambdaExpression;
use method_call::MethodCallExpression;
use parameter::ParameterExpression;
use serde::{Deserialize, Serialize};

/// An expression-tree node.
///
/// Nodes own their children outright; a produced tree transfers entirely to
/// the caller and is never mutated afterwards. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
  Constant(Box<ConstantExpression>),
  Lambda(Box<LambdaExpression>),
  MethodCall(Box<MethodCallExpression>),
  Parameter(Box<ParameterExpression>),
}

impl Expression {
  /// The type this node evaluates to.
  pub fn expression_type(&self) -> &Type {
    match self {
      Expression::Constant(expr) => &expr.ty,
      Expression::Lambda(expr) => &expr.return_type,
      Expression::MethodCall(expr) => &expr.method.return_type,
      Expression::Parameter(expr) => &expr.ty,
    }
  }
}

impl From<LambdaExpression> for Expression {
  fn from(lambda: LambdaExpression) -> Self {
    Expression::Lambda(Box::new(lambda))
  }
}

impl From<ConstantExpression> for Expression {
  fn from(constant: ConstantExpression) -> Self {
    Expression::Constant(Box::new(constant))
  }
}
