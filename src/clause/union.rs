//! `UNION` / `UNION ALL` over independently compiled statement branches.

use super::errors::ClauseBuildError;
use super::Statement;

#[derive(Debug, Clone)]
pub struct Union {
    pub(crate) branches: Vec<Statement>,
    pub(crate) all: bool,
}

impl Union {
    /// Join two or more statements with `UNION`. Fewer than two branches is
    /// a construction error.
    pub fn new(branches: Vec<Statement>) -> Result<Self, ClauseBuildError> {
        if branches.len() < 2 {
            return Err(ClauseBuildError::UnionTooFewBranches(branches.len()));
        }
        Ok(Self {
            branches,
            all: false,
        })
    }

    /// Keep duplicate rows (`UNION ALL`).
    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }
}
