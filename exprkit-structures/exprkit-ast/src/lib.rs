pub mod display;
pub mod expressions;
pub mod factory;

pub use expressions::Expression;
pub use factory::{create_method_call, create_method_call_with_arguments};
