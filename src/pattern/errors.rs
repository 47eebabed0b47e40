use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatternBuildError {
    #[error("Invalid variable-length range: minimum hops ({min}) cannot be greater than maximum hops ({max}).")]
    InvalidHopRange { min: u32, max: u32 },
}
