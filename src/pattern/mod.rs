//! Pattern layer of the AST: node patterns, relationship patterns, and
//! linear path chains built from them.
//!
//! Pattern elements are immutable value holders once constructed; the fluent
//! builder methods consume and return `self`. Every element owns a binding
//! [`Variable`] (anonymous unless an explicit one is supplied), and cloning
//! a pattern clones the handle, so a node shared between a `MATCH` and a
//! later `DELETE` compiles to the same generated name.
//!
//! [`Variable`]: crate::expression::Variable

pub mod errors;
pub mod node;
pub mod path;
pub mod relationship;

pub use errors::PatternBuildError;
pub use node::NodePattern;
pub use path::PathPattern;
pub use relationship::{Direction, RelationshipPattern, VariableLengthSpec};

use crate::expression::{
    Expression, FunctionCall, IntoExpression, Literal, ListComprehension, OperatorApplication,
    Parameter, PropertyRef, RawExpression, Variable,
};
use crate::value::Value;

/// Normalization for inline property values in node/relationship patterns.
///
/// Expressions pass through unchanged; bare values become fresh anonymous
/// [`Parameter`]s, so inline property maps are parameterized by default.
pub trait IntoPropertyValue {
    fn into_property_value(self) -> Expression;
}

impl IntoPropertyValue for Expression {
    fn into_property_value(self) -> Expression {
        self
    }
}

impl IntoPropertyValue for Parameter {
    fn into_property_value(self) -> Expression {
        Expression::Parameter(self)
    }
}

impl IntoPropertyValue for Literal {
    fn into_property_value(self) -> Expression {
        Expression::Literal(self)
    }
}

impl IntoPropertyValue for Variable {
    fn into_property_value(self) -> Expression {
        Expression::Variable(self)
    }
}

impl IntoPropertyValue for &Variable {
    fn into_property_value(self) -> Expression {
        Expression::Variable(self.clone())
    }
}

impl IntoPropertyValue for PropertyRef {
    fn into_property_value(self) -> Expression {
        Expression::Property(self)
    }
}

impl IntoPropertyValue for OperatorApplication {
    fn into_property_value(self) -> Expression {
        Expression::Operator(self)
    }
}

impl IntoPropertyValue for FunctionCall {
    fn into_property_value(self) -> Expression {
        Expression::Function(self)
    }
}

impl IntoPropertyValue for ListComprehension {
    fn into_property_value(self) -> Expression {
        self.into_expression()
    }
}

impl IntoPropertyValue for RawExpression {
    fn into_property_value(self) -> Expression {
        Expression::Raw(self)
    }
}

impl IntoPropertyValue for Value {
    fn into_property_value(self) -> Expression {
        Expression::Parameter(Parameter::new(self))
    }
}

impl IntoPropertyValue for bool {
    fn into_property_value(self) -> Expression {
        Value::from(self).into_property_value()
    }
}

impl IntoPropertyValue for i32 {
    fn into_property_value(self) -> Expression {
        Value::from(self).into_property_value()
    }
}

impl IntoPropertyValue for i64 {
    fn into_property_value(self) -> Expression {
        Value::from(self).into_property_value()
    }
}

impl IntoPropertyValue for f64 {
    fn into_property_value(self) -> Expression {
        Value::from(self).into_property_value()
    }
}

impl IntoPropertyValue for &str {
    fn into_property_value(self) -> Expression {
        Value::from(self).into_property_value()
    }
}

impl IntoPropertyValue for String {
    fn into_property_value(self) -> Expression {
        Value::from(self).into_property_value()
    }
}
