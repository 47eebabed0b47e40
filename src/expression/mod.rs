//! Expression layer of the AST: literals, parameters, variables, property
//! references, operator applications, function calls, and the raw escape
//! hatch. Every expression renders to a text fragment and may contribute
//! entries to the parameter map through the active [`Environment`].
//!
//! [`Environment`]: crate::environment::Environment

pub mod comprehension;
pub mod errors;
pub mod functions;
pub mod operators;
pub mod raw;

use std::rc::Rc;

use crate::environment::RefId;
use crate::value::Value;

pub use comprehension::ListComprehension;
pub use errors::ExpressionBuildError;
pub use functions::FunctionCall;
pub use operators::{Operator, OperatorApplication};
pub use raw::{RawExpression, RawFragment};

/// Any compilable expression.
///
/// Variants are value holders; all composition happens through constructors
/// and the fluent helpers. Cloning an expression clones handles, not
/// identities: a cloned `Parameter` or `Variable` still names the same slot.
#[derive(Debug, Clone)]
pub enum Expression {
    Literal(Literal),
    Parameter(Parameter),
    Variable(Variable),
    Property(PropertyRef),
    Operator(OperatorApplication),
    Function(FunctionCall),
    List(Vec<Expression>),
    Map(Vec<(String, Expression)>),
    HasLabel(LabelPredicate),
    ListComprehension(ListComprehension),
    Raw(RawExpression),
}

impl Expression {
    /// A list expression from anything convertible to expressions.
    pub fn list(items: Vec<Expression>) -> Self {
        Expression::List(items)
    }

    /// A map expression; keys are escaped at render time when needed.
    pub fn map(entries: Vec<(String, Expression)>) -> Self {
        Expression::Map(entries)
    }
}

/// An inline constant embedded directly in the query text, bypassing
/// parameterization. Use [`Parameter`] unless the value must appear verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal(pub Value);

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Literal(value.into())
    }

    pub fn null() -> Self {
        Literal(Value::Null)
    }
}

pub(crate) struct ParameterInner {
    pub(crate) name: Option<String>,
    pub(crate) value: Value,
}

impl std::fmt::Debug for ParameterInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

/// A named placeholder bound to a caller-supplied value.
///
/// Identity-significant: clones share one slot in the output map, while two
/// separately constructed parameters holding equal values stay distinct.
#[derive(Debug, Clone)]
pub struct Parameter {
    inner: Rc<ParameterInner>,
}

impl Parameter {
    /// Anonymous parameter, auto-named `param0`, `param1`, ... at compile time.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            inner: Rc::new(ParameterInner {
                name: None,
                value: value.into(),
            }),
        }
    }

    /// Parameter with a caller-chosen key. The caller owns collision
    /// avoidance against other explicit names; reusing a key already bound
    /// in the same compilation aborts the build.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            inner: Rc::new(ParameterInner {
                name: Some(name.into()),
                value: value.into(),
            }),
        }
    }

    pub fn value(&self) -> &Value {
        &self.inner.value
    }

    pub(crate) fn explicit_name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    pub(crate) fn ref_id(&self) -> RefId<ParameterInner> {
        RefId::new(Rc::clone(&self.inner))
    }
}

#[derive(Debug)]
pub(crate) struct VariableInner {
    pub(crate) prefix: &'static str,
    pub(crate) name: Option<String>,
}

/// A named or anonymous reference to a query-language binding.
///
/// Anonymous variables receive a name only at compile time; named variables
/// carry the caller-supplied identifier verbatim. Clones share identity, so
/// a variable threaded through several clauses renders one consistent name.
#[derive(Debug, Clone)]
pub struct Variable {
    inner: Rc<VariableInner>,
}

impl Variable {
    /// Anonymous variable (`var0`, `var1`, ... at compile time).
    pub fn new() -> Self {
        Self::scoped("var")
    }

    /// Variable with a caller-supplied name, emitted verbatim.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(VariableInner {
                prefix: "var",
                name: Some(name.into()),
            }),
        }
    }

    pub(crate) fn scoped(prefix: &'static str) -> Self {
        Self {
            inner: Rc::new(VariableInner { prefix, name: None }),
        }
    }

    /// Reference a property of this variable.
    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef {
            variable: self.clone(),
            key: key.into(),
        }
    }

    /// Boolean label test, `this0:`Person``.
    pub fn has_label(&self, label: impl Into<String>) -> Expression {
        Expression::HasLabel(LabelPredicate {
            variable: self.clone(),
            label: label.into(),
        })
    }

    pub(crate) fn explicit_name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    pub(crate) fn prefix(&self) -> &'static str {
        self.inner.prefix
    }

    pub(crate) fn ref_id(&self) -> RefId<VariableInner> {
        RefId::new(Rc::clone(&self.inner))
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new()
    }
}

/// A variable plus a property key, rendered `variable.key`.
#[derive(Debug, Clone)]
pub struct PropertyRef {
    pub(crate) variable: Variable,
    pub(crate) key: String,
}

impl PropertyRef {
    pub fn new(variable: &Variable, key: impl Into<String>) -> Self {
        variable.property(key)
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Label test on a variable, `variable:Label`.
#[derive(Debug, Clone)]
pub struct LabelPredicate {
    pub(crate) variable: Variable,
    pub(crate) label: String,
}

/// Normalize a raw value into the expression capability.
///
/// Expressions pass through unchanged; bare values are wrapped in a fresh
/// [`Literal`]. Pattern property maps normalize differently (raw values
/// become parameters there, see the pattern layer).
pub trait IntoExpression {
    fn into_expression(self) -> Expression;
}

impl IntoExpression for Expression {
    fn into_expression(self) -> Expression {
        self
    }
}

impl IntoExpression for Literal {
    fn into_expression(self) -> Expression {
        Expression::Literal(self)
    }
}

impl IntoExpression for Parameter {
    fn into_expression(self) -> Expression {
        Expression::Parameter(self)
    }
}

impl IntoExpression for Variable {
    fn into_expression(self) -> Expression {
        Expression::Variable(self)
    }
}

impl IntoExpression for &Variable {
    fn into_expression(self) -> Expression {
        Expression::Variable(self.clone())
    }
}

impl IntoExpression for PropertyRef {
    fn into_expression(self) -> Expression {
        Expression::Property(self)
    }
}

impl IntoExpression for OperatorApplication {
    fn into_expression(self) -> Expression {
        Expression::Operator(self)
    }
}

impl IntoExpression for FunctionCall {
    fn into_expression(self) -> Expression {
        Expression::Function(self)
    }
}

impl IntoExpression for ListComprehension {
    fn into_expression(self) -> Expression {
        Expression::ListComprehension(self)
    }
}

impl IntoExpression for RawExpression {
    fn into_expression(self) -> Expression {
        Expression::Raw(self)
    }
}

impl IntoExpression for Value {
    fn into_expression(self) -> Expression {
        Expression::Literal(Literal(self))
    }
}

impl IntoExpression for bool {
    fn into_expression(self) -> Expression {
        Value::from(self).into_expression()
    }
}

impl IntoExpression for i32 {
    fn into_expression(self) -> Expression {
        Value::from(self).into_expression()
    }
}

impl IntoExpression for i64 {
    fn into_expression(self) -> Expression {
        Value::from(self).into_expression()
    }
}

impl IntoExpression for f64 {
    fn into_expression(self) -> Expression {
        Value::from(self).into_expression()
    }
}

impl IntoExpression for &str {
    fn into_expression(self) -> Expression {
        Value::from(self).into_expression()
    }
}

impl IntoExpression for String {
    fn into_expression(self) -> Expression {
        Value::from(self).into_expression()
    }
}
