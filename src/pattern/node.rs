//! Node patterns: `(this0:`Movie` { title: $param0 })`.

use super::{IntoPropertyValue, PathPattern, RelationshipPattern};
use crate::expression::{Expression, PropertyRef, Variable};

/// A node pattern: zero or more labels plus an optional inline property map.
///
/// Every node owns a binding variable. By default it is anonymous and gets a
/// `this{n}` name at compile time; `with_variable` substitutes an explicit
/// one. Inline property values normalize raw values to parameters.
#[derive(Debug, Clone)]
pub struct NodePattern {
    pub(crate) variable: Variable,
    pub(crate) labels: Vec<String>,
    pub(crate) properties: Vec<(String, Expression)>,
}

impl NodePattern {
    /// An unlabeled node, `(this0)`.
    pub fn new() -> Self {
        Self {
            variable: Variable::scoped("this"),
            labels: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// A node with a single label, `(this0:`Movie`)`.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new().label(label)
    }

    /// Append a label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Bind this node to an explicit variable instead of the anonymous one.
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variable = variable;
        self
    }

    /// Attach an inline property. Raw values become anonymous parameters.
    pub fn property(mut self, key: impl Into<String>, value: impl IntoPropertyValue) -> Self {
        self.properties.push((key.into(), value.into_property_value()));
        self
    }

    /// The binding variable; reference it from filters and projections.
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// Property access through the binding variable, `this0.title`.
    pub fn prop(&self, key: impl Into<String>) -> PropertyRef {
        self.variable.property(key)
    }

    /// Start a path: `self -relationship-> node`.
    pub fn related_to(self, relationship: RelationshipPattern, node: NodePattern) -> PathPattern {
        PathPattern::from_node(self).extend(relationship, node)
    }
}

impl Default for NodePattern {
    fn default() -> Self {
        Self::new()
    }
}
