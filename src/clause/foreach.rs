//! `FOREACH (<var> IN <list> | <body>)`.

use super::Clause;
use crate::expression::{Expression, IntoExpression, Variable};

/// Runs an updating clause once per element of a list. The body compiles in
/// a child scope, so its generated names never collide with names outside
/// the loop, and it is spliced after `|` with no leading separator.
#[derive(Debug, Clone)]
pub struct Foreach {
    pub(crate) variable: Variable,
    pub(crate) list: Expression,
    pub(crate) body: Box<Clause>,
}

impl Foreach {
    pub fn new(
        variable: Variable,
        list: impl IntoExpression,
        body: impl Into<Clause>,
    ) -> Self {
        Self {
            variable,
            list: list.into_expression(),
            body: Box::new(body.into()),
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}
