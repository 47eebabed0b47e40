//! `MERGE`, with `ON CREATE SET` / `ON MATCH SET` actions.

use super::assignments::SetAssignments;
use crate::expression::{IntoExpression, PropertyRef};
use crate::pattern::PathPattern;

#[derive(Debug, Clone)]
pub struct Merge {
    pub(crate) pattern: PathPattern,
    pub(crate) on_create: SetAssignments,
    pub(crate) on_match: SetAssignments,
}

impl Merge {
    pub fn new(pattern: impl Into<PathPattern>) -> Self {
        Self {
            pattern: pattern.into(),
            on_create: SetAssignments::default(),
            on_match: SetAssignments::default(),
        }
    }

    /// Assignment applied when the merge creates the pattern.
    pub fn on_create_set(mut self, target: PropertyRef, value: impl IntoExpression) -> Self {
        self.on_create.push(target, value.into_expression());
        self
    }

    /// Assignment applied when the merge matches an existing pattern.
    pub fn on_match_set(mut self, target: PropertyRef, value: impl IntoExpression) -> Self {
        self.on_match.push(target, value.into_expression());
        self
    }
}
