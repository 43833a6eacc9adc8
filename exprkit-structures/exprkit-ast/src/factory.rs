//! Factory functions producing typed lambda expressions that call an
//! instance method.
//!
//! Each call is stateless: it allocates a fresh parameter, binds the method
//! descriptor and arguments into a call node, and wraps the call in a lambda
//! owned entirely by the caller. Nothing is shared or cached between calls.

use exprkit_type::{Type, ensure, error::ArgumentError, method::MethodDescriptor};

use crate::Expression;
use crate::expressions::lambda::LambdaExpression;
use crate::expressions::method_call::MethodCallExpression;
use crate::expressions::parameter::ParameterExpression;

/// Creates a lambda expression representing a call to an instance method
/// that takes no arguments: `(instance: TInstance) => instance.method()`.
///
/// The descriptor is only checked for emptiness. Whether it actually belongs
/// to `instance_type` or returns `return_type` is not validated; such
/// mismatches surface when the produced expression is consumed.
pub fn create_method_call(
  instance_type: Type,
  return_type: Type,
  method: &MethodDescriptor,
) -> Result<LambdaExpression, ArgumentError> {
  ensure::is_not_empty(method, "method")?;

  let parameter = ParameterExpression::named(instance_type, "instance".to_string());
  let call = MethodCallExpression::new(
    Box::new(Expression::Parameter(Box::new(parameter.clone()))),
    method.clone(),
    Vec::new(),
  );

  Ok(LambdaExpression::new(
    parameter,
    Box::new(Expression::MethodCall(Box::new(call))),
    return_type,
  ))
}

/// Creates a lambda expression representing a call to an instance method
/// that takes the provided arguments:
/// `(instance: TInstance) => instance.method(arguments...)`.
///
/// Argument order is preserved exactly as supplied. The argument list is not
/// checked against the descriptor's parameter list; with an empty list the
/// result is structurally identical to [`create_method_call`].
pub fn create_method_call_with_arguments(
  instance_type: Type,
  return_type: Type,
  method: &MethodDescriptor,
  arguments: Vec<Expression>,
) -> Result<LambdaExpression, ArgumentError> {
  ensure::is_not_empty(method, "method")?;

  let parameter = ParameterExpression::named(instance_type, "instance".to_string());
  let call = MethodCallExpression::new(
    Box::new(Expression::Parameter(Box::new(parameter.clone()))),
    method.clone(),
    arguments,
  );

  Ok(LambdaExpression::new(
    parameter,
    Box::new(Expression::MethodCall(Box::new(call))),
    return_type,
  ))
}
