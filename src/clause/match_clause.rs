//! `MATCH` / `OPTIONAL MATCH`.

use super::filter::WhereFilter;
use crate::expression::{Expression, IntoExpression};
use crate::pattern::PathPattern;

/// Matches one or more path patterns, with AND-accumulated filtering.
///
/// ```text
/// MATCH (this0:`Movie`)
/// WHERE this0.title = $param0
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) patterns: Vec<PathPattern>,
    pub(crate) filter: WhereFilter,
    pub(crate) optional: bool,
}

impl Match {
    pub fn new(pattern: impl Into<PathPattern>) -> Self {
        Self {
            patterns: vec![pattern.into()],
            filter: WhereFilter::default(),
            optional: false,
        }
    }

    /// Match an additional pattern alongside the existing ones.
    pub fn pattern(mut self, pattern: impl Into<PathPattern>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Render as `OPTIONAL MATCH`.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach a filter predicate. Repeated calls AND together; nothing is
    /// ever retracted.
    pub fn filter(mut self, predicate: impl IntoExpression) -> Self {
        self.filter.and(predicate.into_expression());
        self
    }

    /// In-place variant of [`Match::filter`] for conditional composition.
    pub fn and_filter(&mut self, predicate: Expression) {
        self.filter.and(predicate);
    }
}
