//! Relationship patterns: `-[this1:`ACTED_IN` { role: $param0 }]->`, with
//! optional variable-length specifiers like `*1..3`.

use super::errors::PatternBuildError;
use super::IntoPropertyValue;
use crate::expression::{Expression, PropertyRef, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `-[..]->`
    Outgoing,
    /// `<-[..]-`
    Incoming,
    /// `-[..]-`
    Either,
}

/// Variable-length path specification: `*`, `*2`, `*1..3`, `*2..`, `*..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableLengthSpec {
    pub(crate) min_hops: Option<u32>,
    pub(crate) max_hops: Option<u32>,
}

impl VariableLengthSpec {
    /// Fixed-length spec: `*2` becomes min=2, max=2.
    pub fn fixed(hops: u32) -> Self {
        Self {
            min_hops: Some(hops),
            max_hops: Some(hops),
        }
    }

    /// Range spec: `*1..3`. Fails when min exceeds max.
    pub fn range(min: u32, max: u32) -> Result<Self, PatternBuildError> {
        if min > max {
            return Err(PatternBuildError::InvalidHopRange { min, max });
        }
        Ok(Self {
            min_hops: Some(min),
            max_hops: Some(max),
        })
    }

    /// Upper-bounded spec: `*..5`.
    pub fn max_only(max: u32) -> Self {
        Self {
            min_hops: None,
            max_hops: Some(max),
        }
    }

    /// Lower-bounded spec: `*2..` (unbounded above).
    pub fn min_only(min: u32) -> Self {
        Self {
            min_hops: Some(min),
            max_hops: None,
        }
    }

    /// Unbounded spec: `*`.
    pub fn unbounded() -> Self {
        Self {
            min_hops: None,
            max_hops: None,
        }
    }

    pub(crate) fn to_fragment(self) -> String {
        match (self.min_hops, self.max_hops) {
            (Some(min), Some(max)) if min == max => format!("*{}", min),
            (Some(min), Some(max)) => format!("*{}..{}", min, max),
            (Some(min), None) => format!("*{}..", min),
            (None, Some(max)) => format!("*..{}", max),
            (None, None) => "*".to_string(),
        }
    }
}

/// A relationship pattern between two nodes of a path.
///
/// Owns a binding variable like node patterns do. Rendered on its own (the
/// decomposed mode) it emits only the bracket fragment, `[this1:`TYPE`]`,
/// without dashes or endpoints.
#[derive(Debug, Clone)]
pub struct RelationshipPattern {
    pub(crate) variable: Variable,
    pub(crate) rel_type: Option<String>,
    pub(crate) direction: Direction,
    pub(crate) properties: Vec<(String, Expression)>,
    pub(crate) length: Option<VariableLengthSpec>,
}

impl RelationshipPattern {
    /// Untyped relationship in the given direction.
    pub fn new(direction: Direction) -> Self {
        Self {
            variable: Variable::scoped("this"),
            rel_type: None,
            direction,
            properties: Vec::new(),
            length: None,
        }
    }

    /// Typed relationship in the given direction.
    pub fn typed(rel_type: impl Into<String>, direction: Direction) -> Self {
        let mut rel = Self::new(direction);
        rel.rel_type = Some(rel_type.into());
        rel
    }

    /// `-[:TYPE]->`
    pub fn outgoing(rel_type: impl Into<String>) -> Self {
        Self::typed(rel_type, Direction::Outgoing)
    }

    /// `<-[:TYPE]-`
    pub fn incoming(rel_type: impl Into<String>) -> Self {
        Self::typed(rel_type, Direction::Incoming)
    }

    /// `-[:TYPE]-`
    pub fn either(rel_type: impl Into<String>) -> Self {
        Self::typed(rel_type, Direction::Either)
    }

    /// Bind this relationship to an explicit variable.
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variable = variable;
        self
    }

    /// Attach an inline property. Raw values become anonymous parameters.
    pub fn property(mut self, key: impl Into<String>, value: impl IntoPropertyValue) -> Self {
        self.properties.push((key.into(), value.into_property_value()));
        self
    }

    /// Attach a variable-length specifier.
    pub fn length(mut self, spec: VariableLengthSpec) -> Self {
        self.length = Some(spec);
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The binding variable.
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// Property access through the binding variable.
    pub fn prop(&self, key: impl Into<String>) -> PropertyRef {
        self.variable.property(key)
    }
}
