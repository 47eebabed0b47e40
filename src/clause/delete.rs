//! `DELETE` / `DETACH DELETE`.

use super::errors::ClauseBuildError;
use crate::expression::Variable;

#[derive(Debug, Clone)]
pub struct Delete {
    pub(crate) detach: bool,
    pub(crate) items: Vec<Variable>,
}

impl Delete {
    /// Delete the given bindings. At least one variable is required.
    pub fn new(items: Vec<Variable>) -> Result<Self, ClauseBuildError> {
        if items.is_empty() {
            return Err(ClauseBuildError::EmptyDelete);
        }
        Ok(Self {
            detach: false,
            items,
        })
    }

    /// Switch to `DETACH DELETE`.
    pub fn detach(mut self) -> Self {
        self.detach = true;
        self
    }
}
