//! Crate-level error umbrella.
//!
//! Each module area keeps its own error enum; this type exists for callers
//! that funnel construction and compilation through one `Result`.

use thiserror::Error;

use crate::clause::ClauseBuildError;
use crate::expression::ExpressionBuildError;
use crate::pattern::PatternBuildError;
use crate::renderer::errors::RenderError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Expression(#[from] ExpressionBuildError),

    #[error(transparent)]
    Pattern(#[from] PatternBuildError),

    #[error(transparent)]
    Clause(#[from] ClauseBuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
