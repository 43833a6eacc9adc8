use exprkit_type::Type;
use exprkit_type::value::Value;
use ordered_float::OrderedFloat;

#[test]
fn values_know_their_type() {
  assert_eq!(Value::Int32(5).value_type(), Type::Int32);
  assert_eq!(Value::Float64(OrderedFloat(3.14)).value_type(), Type::Float64);
  assert_eq!(Value::Boolean(true).value_type(), Type::Boolean);
  assert_eq!(Value::String("hello".to_string()).value_type(), Type::String);
  assert_eq!(Value::Null.value_type(), Type::Void);
}

#[test]
fn display_quotes_text_values() {
  assert_eq!(Value::String("hello".to_string()).to_string(), "\"hello\"");
  assert_eq!(Value::Char('a').to_string(), "'a'");
}

#[test]
fn display_renders_scalars_bare() {
  assert_eq!(Value::Int64(-7).to_string(), "-7");
  assert_eq!(Value::Float64(OrderedFloat(3.14)).to_string(), "3.14");
  assert_eq!(Value::Boolean(false).to_string(), "false");
  assert_eq!(Value::Null.to_string(), "null");
}
