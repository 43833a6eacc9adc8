use exprkit_ast::display::ExpressionPrinter;
use exprkit_ast::expressions::constant::ConstantExpression;
use exprkit_ast::{Expression, create_method_call, create_method_call_with_arguments};
use exprkit_type::Type;
use exprkit_type::method::MethodDescriptor;
use exprkit_type::value::Value;
use insta::assert_snapshot;

#[test]
fn print_no_arg_call() {
  let descriptor = MethodDescriptor::new(
    Type::Named("Counter".to_string()),
    "get_value".to_string(),
    Vec::new(),
    Type::Int32,
  );
  let lambda =
    create_method_call(Type::Named("Counter".to_string()), Type::Int32, &descriptor).unwrap();
  let rendered = ExpressionPrinter::new(&Expression::from(lambda)).print();

  assert_snapshot!("print_no_arg_call", rendered);
}

#[test]
fn print_call_with_arguments() {
  let descriptor = MethodDescriptor::new(
    Type::Named("Logger".to_string()),
    "log".to_string(),
    vec![Type::String, Type::Boolean, Type::Int32],
    Type::Void,
  );
  let arguments = vec![
    Expression::from(ConstantExpression::new(Value::String("ready".to_string()))),
    Expression::from(ConstantExpression::new(Value::Boolean(true))),
    Expression::from(ConstantExpression::new(Value::Int32(3))),
  ];
  let lambda = create_method_call_with_arguments(
    Type::Named("Logger".to_string()),
    Type::Void,
    &descriptor,
    arguments,
  )
  .unwrap();
  let rendered = ExpressionPrinter::new(&Expression::from(lambda)).print();

  assert_snapshot!("print_call_with_arguments", rendered);
}

#[test]
fn print_null_argument() {
  let descriptor = MethodDescriptor::new(
    Type::Named("Cache".to_string()),
    "replace".to_string(),
    vec![Type::Named("Entry".to_string())],
    Type::Void,
  );
  let arguments = vec![Expression::from(ConstantExpression::typed(
    Value::Null,
    Type::Named("Entry".to_string()),
  ))];
  let lambda = create_method_call_with_arguments(
    Type::Named("Cache".to_string()),
    Type::Void,
    &descriptor,
    arguments,
  )
  .unwrap();
  let rendered = ExpressionPrinter::new(&Expression::from(lambda)).print();

  assert_snapshot!("print_null_argument", rendered);
}
