//! Raw passthrough clause, the statement-level counterpart of
//! [`RawExpression`](crate::expression::RawExpression).

use std::fmt;
use std::rc::Rc;

use crate::environment::Environment;
use crate::expression::raw::{RawFragment, RawRender};
use crate::renderer::errors::RenderError;

/// A caller-rendered clause. Parameters returned by the closure merge under
/// caller-chosen keys; a key already bound in the same compilation aborts
/// the build.
#[derive(Clone)]
pub struct RawClause {
    pub(crate) render_fn: Rc<RawRender>,
}

impl RawClause {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&mut Environment) -> Result<RawFragment, RenderError> + 'static,
    {
        Self {
            render_fn: Rc::new(render),
        }
    }

    /// Fixed text with no parameters.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| Ok(RawFragment::new(text.clone())))
    }
}

impl fmt::Debug for RawClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawClause(..)")
    }
}
