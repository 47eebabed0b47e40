//! `CALL { ... }` subqueries and `CALL proc.name(...)` procedure calls.

use super::Statement;
use crate::expression::{Expression, IntoExpression, Variable};

/// A subquery clause. The body compiles in a child scope, so names generated
/// inside never collide with the outer statement, while parameters surface
/// in the one flat output map.
#[derive(Debug, Clone)]
pub struct Call {
    pub(crate) body: Statement,
    pub(crate) imports: Vec<Variable>,
}

impl Call {
    pub fn new(body: impl Into<Statement>) -> Self {
        Self {
            body: body.into(),
            imports: Vec::new(),
        }
    }

    /// Import an outer variable into the subquery body (a leading `WITH`
    /// line inside the braces). The variable resolves to the same name it
    /// carries outside.
    pub fn import(mut self, variable: Variable) -> Self {
        self.imports.push(variable);
        self
    }
}

/// A procedure invocation: `CALL db.labels() YIELD label`.
#[derive(Debug, Clone)]
pub struct CallProcedure {
    pub(crate) name: String,
    pub(crate) args: Vec<Expression>,
    pub(crate) yields: Vec<String>,
}

impl CallProcedure {
    /// Procedure names can include dots (`db.labels`, `dbms.components`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            yields: Vec::new(),
        }
    }

    /// Append an argument expression.
    pub fn arg(mut self, arg: impl IntoExpression) -> Self {
        self.args.push(arg.into_expression());
        self
    }

    /// Select a return field via `YIELD`.
    pub fn yield_item(mut self, item: impl Into<String>) -> Self {
        self.yields.push(item.into());
        self
    }
}
