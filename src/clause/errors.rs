use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClauseBuildError {
    #[error("UNION requires at least two branches but {0} were supplied.")]
    UnionTooFewBranches(usize),

    #[error("DELETE requires at least one variable.")]
    EmptyDelete,
}
