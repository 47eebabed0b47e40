//! Linear path patterns: an alternating chain of node and relationship
//! patterns, optionally bound to a path variable (`p0 = (a)-[r]->(b)`).

use super::{NodePattern, RelationshipPattern};
use crate::expression::Variable;

/// An ordered chain alternating node and relationship patterns.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pub(crate) start: NodePattern,
    pub(crate) segments: Vec<(RelationshipPattern, NodePattern)>,
    pub(crate) path_variable: Option<Variable>,
}

impl PathPattern {
    /// A path consisting of a single standalone node.
    pub fn from_node(start: NodePattern) -> Self {
        Self {
            start,
            segments: Vec::new(),
            path_variable: None,
        }
    }

    /// Extend the chain with one more hop.
    pub fn extend(mut self, relationship: RelationshipPattern, node: NodePattern) -> Self {
        self.segments.push((relationship, node));
        self
    }

    /// Bind the whole path to an anonymous path variable (`p0 = ...`).
    pub fn named(mut self) -> Self {
        self.path_variable = Some(Variable::scoped("p"));
        self
    }

    /// Bind the whole path to the given variable.
    pub fn named_as(mut self, variable: Variable) -> Self {
        self.path_variable = Some(variable);
        self
    }

    /// The path variable, when one was assigned.
    pub fn path_variable(&self) -> Option<&Variable> {
        self.path_variable.as_ref()
    }

    /// The starting node of the chain.
    pub fn start(&self) -> &NodePattern {
        &self.start
    }

    /// Number of relationship hops in the chain.
    pub fn hops(&self) -> usize {
        self.segments.len()
    }
}

impl From<NodePattern> for PathPattern {
    fn from(node: NodePattern) -> Self {
        PathPattern::from_node(node)
    }
}
