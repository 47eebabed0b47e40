//! Function-call expressions and the known-function registry.
//!
//! `FunctionCall::new` accepts any name for forward compatibility;
//! `FunctionCall::known` validates the name and argument count against the
//! registry of standard Cypher functions.

use std::collections::HashMap;

use super::errors::ExpressionBuildError;
use super::{Expression, IntoExpression};

/// Arity entry for a registered function.
#[derive(Clone, Copy)]
pub struct FunctionSignature {
    /// Canonical name as it renders in query text
    pub name: &'static str,
    pub min_args: usize,
    /// None means variadic beyond `min_args`
    pub max_args: Option<usize>,
}

/// Look up a registered function signature by case-insensitive name.
pub fn signature(name: &str) -> Option<FunctionSignature> {
    let lower = name.to_lowercase();
    KNOWN_FUNCTIONS.get(lower.as_str()).copied()
}

// Static signature table
lazy_static::lazy_static! {
    static ref KNOWN_FUNCTIONS: HashMap<&'static str, FunctionSignature> = {
        let mut m = HashMap::new();
        let mut add = |name: &'static str, min_args: usize, max_args: Option<usize>| {
            m.insert(name, FunctionSignature { name, min_args, max_args });
        };

        // ===== SCALAR =====
        add("coalesce", 1, None);
        add("size", 1, Some(1));
        add("length", 1, Some(1));
        add("type", 1, Some(1));
        add("id", 1, Some(1));
        add("elementid", 1, Some(1));
        add("head", 1, Some(1));
        add("last", 1, Some(1));
        add("properties", 1, Some(1));
        add("randomuuid", 0, Some(0));
        add("timestamp", 0, Some(0));

        // ===== LIST =====
        add("labels", 1, Some(1));
        add("keys", 1, Some(1));
        add("nodes", 1, Some(1));
        add("relationships", 1, Some(1));
        add("tail", 1, Some(1));
        add("reverse", 1, Some(1));
        add("range", 2, Some(3));

        // ===== AGGREGATING =====
        add("count", 1, Some(1));
        add("collect", 1, Some(1));
        add("sum", 1, Some(1));
        add("avg", 1, Some(1));
        add("min", 1, Some(1));
        add("max", 1, Some(1));

        // ===== STRING =====
        add("toupper", 1, Some(1));
        add("tolower", 1, Some(1));
        add("trim", 1, Some(1));
        add("ltrim", 1, Some(1));
        add("rtrim", 1, Some(1));
        add("split", 2, Some(2));
        add("replace", 3, Some(3));
        add("substring", 2, Some(3));
        add("left", 2, Some(2));
        add("right", 2, Some(2));

        // ===== CONVERSION =====
        add("tostring", 1, Some(1));
        add("tointeger", 1, Some(1));
        add("tofloat", 1, Some(1));
        add("toboolean", 1, Some(1));

        // ===== NUMERIC =====
        add("abs", 1, Some(1));
        add("ceil", 1, Some(1));
        add("floor", 1, Some(1));
        add("round", 1, Some(2));
        add("sign", 1, Some(1));
        add("sqrt", 1, Some(1));
        add("rand", 0, Some(0));

        // ===== PATH =====
        add("startnode", 1, Some(1));
        add("endnode", 1, Some(1));
        add("shortestpath", 1, Some(1));

        m
    };
}

/// A function applied to ordered argument expressions, rendered
/// `name(arg1, arg2, ...)`.
#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub(crate) name: String,
    pub(crate) args: Vec<Expression>,
}

impl FunctionCall {
    /// Call an arbitrary function by name. No validation is applied; use
    /// [`FunctionCall::known`] for registry-backed arity checking.
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Call a registered function, validating the name and argument count at
    /// construction time. The canonical registry spelling is used in the
    /// rendered text regardless of the casing supplied.
    pub fn known(name: &str, args: Vec<Expression>) -> Result<Self, ExpressionBuildError> {
        let sig = signature(name)
            .ok_or_else(|| ExpressionBuildError::UnknownFunction(name.to_string()))?;
        let fits = args.len() >= sig.min_args
            && sig.max_args.map(|max| args.len() <= max).unwrap_or(true);
        if !fits {
            return Err(ExpressionBuildError::FunctionArity {
                name: sig.name.to_string(),
                expected: match sig.max_args {
                    Some(max) if max == sig.min_args => format!("{}", sig.min_args),
                    Some(max) => format!("{}..{}", sig.min_args, max),
                    None => format!("{}+", sig.min_args),
                },
                got: args.len(),
            });
        }
        Ok(Self {
            name: sig.name.to_string(),
            args,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `coalesce(a, b, ...)`
pub fn coalesce(args: Vec<Expression>) -> Result<Expression, ExpressionBuildError> {
    Ok(Expression::Function(FunctionCall::known("coalesce", args)?))
}

/// `count(arg)`
pub fn count(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("count", vec![arg.into_expression()]))
}

/// `collect(arg)`
pub fn collect(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("collect", vec![arg.into_expression()]))
}

/// `size(arg)`
pub fn size(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("size", vec![arg.into_expression()]))
}

/// `labels(arg)`
pub fn labels(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("labels", vec![arg.into_expression()]))
}

/// `keys(arg)`
pub fn keys(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("keys", vec![arg.into_expression()]))
}

/// `id(arg)`
pub fn id(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("id", vec![arg.into_expression()]))
}

/// `type(arg)`
pub fn type_of(arg: impl IntoExpression) -> Expression {
    Expression::Function(FunctionCall::new("type", vec![arg.into_expression()]))
}
