//! Predicate accumulator shared by every clause that supports `WHERE`.

use crate::environment::Environment;
use crate::expression::operators::and_pair;
use crate::expression::Expression;
use crate::renderer::errors::RenderError;
use crate::renderer::Render;

/// Accumulates filter predicates; each attachment combines with logical AND,
/// never replacement. Embedded by value in the clauses that support WHERE.
#[derive(Debug, Clone, Default)]
pub struct WhereFilter {
    predicate: Option<Expression>,
}

impl WhereFilter {
    pub(crate) fn and(&mut self, predicate: Expression) {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => and_pair(existing, predicate),
            None => predicate,
        });
    }

    /// Rendered `WHERE ...` line, or an empty string when no predicate was
    /// attached (callers splice through `join_non_empty`).
    pub(crate) fn render_line(&self, env: &mut Environment) -> Result<String, RenderError> {
        match &self.predicate {
            Some(predicate) => Ok(format!("WHERE {}", predicate.render(env)?)),
            None => Ok(String::new()),
        }
    }
}
