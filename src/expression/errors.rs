use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpressionBuildError {
    #[error("Operator {operator} requires at least one operand.")]
    EmptyOperands { operator: &'static str },

    #[error("Operator {operator} expects {expected} operand(s) but {got} were supplied.")]
    OperandArity {
        operator: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Function {name} expects {expected} argument(s) but {got} were supplied.")]
    FunctionArity {
        name: String,
        expected: String,
        got: usize,
    },
}
