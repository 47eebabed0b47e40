//! Standalone `SET` and `REMOVE` clauses.
//!
//! Both constructors take their first item, so an empty clause is
//! unrepresentable rather than checked.

use super::assignments::SetAssignments;
use crate::expression::{IntoExpression, PropertyRef};

#[derive(Debug, Clone)]
pub struct Set {
    pub(crate) assignments: SetAssignments,
}

impl Set {
    pub fn new(target: PropertyRef, value: impl IntoExpression) -> Self {
        let mut assignments = SetAssignments::default();
        assignments.push(target, value.into_expression());
        Self { assignments }
    }

    /// Attach a further assignment.
    pub fn and(mut self, target: PropertyRef, value: impl IntoExpression) -> Self {
        self.assignments.push(target, value.into_expression());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Remove {
    pub(crate) items: Vec<PropertyRef>,
}

impl Remove {
    pub fn new(target: PropertyRef) -> Self {
        Self {
            items: vec![target],
        }
    }

    /// Remove a further property.
    pub fn and(mut self, target: PropertyRef) -> Self {
        self.items.push(target);
        self
    }
}
