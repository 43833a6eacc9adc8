use std::fmt::Display;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::Type;

/// A constant value carried by a constant expression.
///
/// Floats are stored as `OrderedFloat` so values can derive `Eq` and `Hash`
/// alongside the rest of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
  Int8(i8),
  Int16(i16),
  Int32(i32),
  Int64(i64),
  UnsignedInt8(u8),
  UnsignedInt16(u16),
  UnsignedInt32(u32),
  UnsignedInt64(u64),
  Float32(OrderedFloat<f32>),
  Float64(OrderedFloat<f64>),
  Boolean(bool),
  Char(char),
  String(String),
  Null,
}

impl Value {
  /// The type this value inhabits.
  pub fn value_type(&self) -> Type {
    match self {
      Value::Int8(_) => Type::Int8,
      Value::Int16(_) => Type::Int16,
      Value::Int32(_) => Type::Int32,
      Value::Int64(_) => Type::Int64,
      Value::UnsignedInt8(_) => Type::UnsignedInt8,
      Value::UnsignedInt16(_) => Type::UnsignedInt16,
      Value::UnsignedInt32(_) => Type::UnsignedInt32,
      Value::UnsignedInt64(_) => Type::UnsignedInt64,
      Value::Float32(_) => Type::Float32,
      Value::Float64(_) => Type::Float64,
      Value::Boolean(_) => Type::Boolean,
      Value::Char(_) => Type::Char,
      Value::String(_) => Type::String,
      Value::Null => Type::Void,
    }
  }
}

impl Display for Value {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      Value::Int8(v) => write!(f, "{}", v),
      Value::Int16(v) => write!(f, "{}", v),
      Value::Int32(v) => write!(f, "{}", v),
      Value::Int64(v) => write!(f, "{}", v),
      Value::UnsignedInt8(v) => write!(f, "{}", v),
      Value::UnsignedInt16(v) => write!(f, "{}", v),
      Value::UnsignedInt32(v) => write!(f, "{}", v),
      Value::UnsignedInt64(v) => write!(f, "{}", v),
      Value::Float32(v) => write!(f, "{}", v),
      Value::Float64(v) => write!(f, "{}", v),
      Value::Boolean(v) => write!(f, "{}", v),
      Value::Char(v) => write!(f, "'{}'", v),
      Value::String(v) => write!(f, "\"{}\"", v),
      Value::Null => write!(f, "null"),
    }
  }
}
