//! Operator applications: comparison, boolean, arithmetic, string, and list
//! membership operators, with precedence-driven parenthesization.
//!
//! Fixed-arity operators take their operands by signature, so a wrong
//! operand count is unrepresentable. Variadic constructors (`and`, `or`,
//! `xor`, `plus`, `times`) take a vector and fail at construction on an
//! empty operand list.

use super::errors::ExpressionBuildError;
use super::{Expression, IntoExpression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // binary
    Equal,            // =
    NotEqual,         // <>
    LessThan,         // <
    GreaterThan,      // >
    LessThanEqual,    // <=
    GreaterThanEqual, // >=
    RegexMatch,       // =~
    Subtraction,      // -
    Division,         // /
    ModuloDivision,   // %
    Exponentiation,   // ^
    In,               // IN [...]
    // String predicates
    StartsWith, // STARTS WITH
    EndsWith,   // ENDS WITH
    Contains,   // CONTAINS
    // variadic
    And,
    Or,
    Xor,
    Addition,       // + (also string concatenation)
    Multiplication, // *
    // unary
    Not,
    // postfix
    IsNull,    // e.g. city IS NULL
    IsNotNull, // e.g. city IS NOT NULL
}

/// How the operator sits relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanEqual => "<=",
            Operator::GreaterThanEqual => ">=",
            Operator::RegexMatch => "=~",
            Operator::Subtraction => "-",
            Operator::Division => "/",
            Operator::ModuloDivision => "%",
            Operator::Exponentiation => "^",
            Operator::In => "IN",
            Operator::StartsWith => "STARTS WITH",
            Operator::EndsWith => "ENDS WITH",
            Operator::Contains => "CONTAINS",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Addition => "+",
            Operator::Multiplication => "*",
            Operator::Not => "NOT",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }

    /// Binding strength; a nested application renders parenthesized when it
    /// binds looser than its parent (or equally loose in a trailing
    /// position, which keeps non-associative chains unambiguous).
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Or => 1,
            Operator::Xor => 2,
            Operator::And => 3,
            Operator::Not => 4,
            Operator::Equal
            | Operator::NotEqual
            | Operator::LessThan
            | Operator::GreaterThan
            | Operator::LessThanEqual
            | Operator::GreaterThanEqual
            | Operator::RegexMatch
            | Operator::In
            | Operator::StartsWith
            | Operator::EndsWith
            | Operator::Contains => 5,
            Operator::Addition | Operator::Subtraction => 6,
            Operator::Multiplication | Operator::Division | Operator::ModuloDivision => 7,
            Operator::Exponentiation => 8,
            Operator::IsNull | Operator::IsNotNull => 9,
        }
    }

    pub(crate) fn fixity(&self) -> Fixity {
        match self {
            Operator::Not => Fixity::Prefix,
            Operator::IsNull | Operator::IsNotNull => Fixity::Postfix,
            _ => Fixity::Infix,
        }
    }

    /// Expected operand count: exact for fixed-arity operators, minimum for
    /// the variadic ones.
    fn arity(&self) -> OperandArity {
        match self {
            Operator::Not | Operator::IsNull | Operator::IsNotNull => OperandArity::Exactly(1),
            Operator::And
            | Operator::Or
            | Operator::Xor
            | Operator::Addition
            | Operator::Multiplication => OperandArity::AtLeast(1),
            _ => OperandArity::Exactly(2),
        }
    }
}

enum OperandArity {
    Exactly(usize),
    AtLeast(usize),
}

/// An operator applied to one or more operand expressions.
#[derive(Debug, Clone)]
pub struct OperatorApplication {
    pub(crate) operator: Operator,
    pub(crate) operands: Vec<Expression>,
}

impl OperatorApplication {
    /// Validating constructor. Fails at construction, never at compile time,
    /// when the operand count does not fit the operator.
    pub fn new(
        operator: Operator,
        operands: Vec<Expression>,
    ) -> Result<Self, ExpressionBuildError> {
        if operands.is_empty() {
            return Err(ExpressionBuildError::EmptyOperands {
                operator: operator.symbol(),
            });
        }
        match operator.arity() {
            OperandArity::Exactly(expected) if operands.len() != expected => {
                Err(ExpressionBuildError::OperandArity {
                    operator: operator.symbol(),
                    expected,
                    got: operands.len(),
                })
            }
            OperandArity::AtLeast(minimum) if operands.len() < minimum => {
                Err(ExpressionBuildError::OperandArity {
                    operator: operator.symbol(),
                    expected: minimum,
                    got: operands.len(),
                })
            }
            _ => Ok(Self { operator, operands }),
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Arity is validated by the public constructors, so this stays internal.
    fn exact(operator: Operator, operands: Vec<Expression>) -> Self {
        Self { operator, operands }
    }
}

fn binary(operator: Operator, lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    Expression::Operator(OperatorApplication::exact(
        operator,
        vec![lhs.into_expression(), rhs.into_expression()],
    ))
}

fn variadic(
    operator: Operator,
    operands: Vec<Expression>,
) -> Result<Expression, ExpressionBuildError> {
    Ok(Expression::Operator(OperatorApplication::new(
        operator, operands,
    )?))
}

/// `lhs = rhs`
pub fn eq(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::Equal, lhs, rhs)
}

/// `lhs <> rhs`
pub fn neq(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::NotEqual, lhs, rhs)
}

/// `lhs < rhs`
pub fn lt(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::LessThan, lhs, rhs)
}

/// `lhs <= rhs`
pub fn lte(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::LessThanEqual, lhs, rhs)
}

/// `lhs > rhs`
pub fn gt(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::GreaterThan, lhs, rhs)
}

/// `lhs >= rhs`
pub fn gte(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::GreaterThanEqual, lhs, rhs)
}

/// `lhs =~ rhs`
pub fn regex_match(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::RegexMatch, lhs, rhs)
}

/// `lhs IN rhs`
pub fn in_list(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::In, lhs, rhs)
}

/// `lhs STARTS WITH rhs`
pub fn starts_with(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::StartsWith, lhs, rhs)
}

/// `lhs ENDS WITH rhs`
pub fn ends_with(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::EndsWith, lhs, rhs)
}

/// `lhs CONTAINS rhs`
pub fn contains(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::Contains, lhs, rhs)
}

/// `lhs - rhs`
pub fn minus(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::Subtraction, lhs, rhs)
}

/// `lhs / rhs`
pub fn divide(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::Division, lhs, rhs)
}

/// `lhs % rhs`
pub fn modulo(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::ModuloDivision, lhs, rhs)
}

/// `lhs ^ rhs`
pub fn pow(lhs: impl IntoExpression, rhs: impl IntoExpression) -> Expression {
    binary(Operator::Exponentiation, lhs, rhs)
}

/// `a AND b AND ...` — fails on an empty operand list.
pub fn and(operands: Vec<Expression>) -> Result<Expression, ExpressionBuildError> {
    variadic(Operator::And, operands)
}

/// `a OR b OR ...` — fails on an empty operand list.
pub fn or(operands: Vec<Expression>) -> Result<Expression, ExpressionBuildError> {
    variadic(Operator::Or, operands)
}

/// `a XOR b XOR ...` — fails on an empty operand list.
pub fn xor(operands: Vec<Expression>) -> Result<Expression, ExpressionBuildError> {
    variadic(Operator::Xor, operands)
}

/// `a + b + ...` (addition and string concatenation) — fails on an empty
/// operand list.
pub fn plus(operands: Vec<Expression>) -> Result<Expression, ExpressionBuildError> {
    variadic(Operator::Addition, operands)
}

/// `a * b * ...` — fails on an empty operand list.
pub fn times(operands: Vec<Expression>) -> Result<Expression, ExpressionBuildError> {
    variadic(Operator::Multiplication, operands)
}

/// `NOT operand`
pub fn not(operand: impl IntoExpression) -> Expression {
    Expression::Operator(OperatorApplication::exact(
        Operator::Not,
        vec![operand.into_expression()],
    ))
}

/// `operand IS NULL`
pub fn is_null(operand: impl IntoExpression) -> Expression {
    Expression::Operator(OperatorApplication::exact(
        Operator::IsNull,
        vec![operand.into_expression()],
    ))
}

/// `operand IS NOT NULL`
pub fn is_not_null(operand: impl IntoExpression) -> Expression {
    Expression::Operator(OperatorApplication::exact(
        Operator::IsNotNull,
        vec![operand.into_expression()],
    ))
}

/// Internal AND used by filter accumulation; both operands already exist so
/// the arity check cannot fail.
pub(crate) fn and_pair(lhs: Expression, rhs: Expression) -> Expression {
    Expression::Operator(OperatorApplication::exact(Operator::And, vec![lhs, rhs]))
}
