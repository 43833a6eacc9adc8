pub mod ensure;
pub mod error;
pub mod method;
pub mod value;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A type label carried by expression-tree nodes.
///
/// Types are plain values: building an expression never consults a type
/// store or registry, so nodes own their labels outright.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
  Int8,
  Int16,
  Int32,
  Int64,
  UnsignedInt8,
  UnsignedInt16,
  UnsignedInt32,
  UnsignedInt64,
  Float32,
  Float64,
  Boolean,
  Char,
  String,
  Void,
  /// A user-defined type, identified by name: `Counter`, `Order`.
  Named(String),
  /// A callable shape: parameter types and a return type.
  Function(Vec<Type>, Box<Type>),
}

impl Display for Type {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      Type::Int8 => write!(f, "i8"),
      Type::Int16 => write!(f, "i16"),
      Type::Int32 => write!(f, "i32"),
      Type::Int64 => write!(f, "i64"),
      Type::UnsignedInt8 => write!(f, "u8"),
      Type::UnsignedInt16 => write!(f, "u16"),
      Type::UnsignedInt32 => write!(f, "u32"),
      Type::UnsignedInt64 => write!(f, "u64"),
      Type::Float32 => write!(f, "f32"),
      Type::Float64 => write!(f, "f64"),
      Type::Boolean => write!(f, "boolean"),
      Type::Char => write!(f, "char"),
      Type::String => write!(f, "string"),
      Type::Void => write!(f, "void"),
      Type::Named(name) => write!(f, "{}", name),
      Type::Function(params, ret) => {
        write!(f, "(")?;
        for (i, param) in params.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{}", param)?;
        }
        write!(f, ") -> {}", ret)
      },
    }
  }
}
