use std::fmt::Write;

use crate::Expression;

/// Renders an expression tree in lambda notation:
/// `(instance: Counter) => instance.get_value(1, 2)`.
pub struct ExpressionPrinter<'a> {
  expression: &'a Expression,
  output: String,
}

impl<'a> ExpressionPrinter<'a> {
  pub fn new(expression: &'a Expression) -> Self {
    Self {
      expression,
      output: String::new(),
    }
  }

  pub fn print(mut self) -> String {
    let expression = self.expression;
    self.write_expression(expression);

    self.output
  }

  fn write_expression(
    &mut self,
    expression: &Expression,
  ) {
    match expression {
      Expression::Constant(expr) => {
        write!(self.output, "{}", expr.value).unwrap();
      },
      Expression::Parameter(expr) => {
        self.output.push_str(expr.name.as_deref().unwrap_or("param"));
      },
      Expression::MethodCall(expr) => {
        self.write_expression(&expr.target);
        write!(self.output, ".{}(", expr.method.name).unwrap();

        for (i, argument) in expr.arguments.iter().enumerate() {
          if i > 0 {
            self.output.push_str(", ");
          }
          self.write_expression(argument);
        }

        self.output.push(')');
      },
      Expression::Lambda(expr) => {
        let name = expr.parameter.name.as_deref().unwrap_or("param");
        write!(self.output, "({}: {}) => ", name, expr.parameter.ty).unwrap();
        self.write_expression(&expr.body);
      },
    }
  }
}

impl std::fmt::Display for Expression {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "{}", ExpressionPrinter::new(self).print())
  }
}
