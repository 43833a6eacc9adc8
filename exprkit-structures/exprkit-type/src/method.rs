use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Type;

/// Metadata identifying an instance method without invoking it: the declaring
/// type, the method name, and the signature.
///
/// Descriptors are plain values with structural equality. A descriptor whose
/// name is the empty string is the null-equivalent degenerate form and is
/// rejected wherever a real method is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
  pub declaring_type: Type,
  pub name: String,
  pub parameters: Vec<Type>,
  pub return_type: Type,
}

impl MethodDescriptor {
  pub fn new(
    declaring_type: Type,
    name: String,
    parameters: Vec<Type>,
    return_type: Type,
  ) -> Self {
    Self {
      declaring_type,
      name,
      parameters,
      return_type,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.name.is_empty()
  }
}

impl Display for MethodDescriptor {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "{}.{}(", self.declaring_type, self.name)?;
    for (i, param) in self.parameters.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", param)?;
    }
    write!(f, "): {}", self.return_type)
  }
}
