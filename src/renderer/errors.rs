use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    #[error("Parameter key collision: '{0}' is already bound in this compilation.")]
    ParameterKeyCollision(String),

    #[error("{keyword} requires at least one projection item.")]
    EmptyProjection { keyword: &'static str },

    #[error("Raw fragment failed to render: {0}")]
    RawFragment(String),
}
