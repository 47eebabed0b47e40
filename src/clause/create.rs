//! `CREATE`, with optional trailing `SET` assignments.

use super::assignments::SetAssignments;
use crate::expression::{IntoExpression, PropertyRef};
use crate::pattern::PathPattern;

#[derive(Debug, Clone)]
pub struct Create {
    pub(crate) patterns: Vec<PathPattern>,
    pub(crate) assignments: SetAssignments,
}

impl Create {
    pub fn new(pattern: impl Into<PathPattern>) -> Self {
        Self {
            patterns: vec![pattern.into()],
            assignments: SetAssignments::default(),
        }
    }

    /// Create an additional pattern alongside the existing ones.
    pub fn pattern(mut self, pattern: impl Into<PathPattern>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Attach a `SET target = value` assignment.
    pub fn set(mut self, target: PropertyRef, value: impl IntoExpression) -> Self {
        self.assignments.push(target, value.into_expression());
        self
    }
}
