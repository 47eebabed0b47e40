//! Raw passthrough expression: the designed escape hatch for constructs the
//! structured layer does not model.
//!
//! The caller supplies a rendering closure that receives the active
//! [`Environment`] (so it can allocate or reuse names) and returns literal
//! text plus any ad hoc parameters to merge into the output map. Parameters
//! merge under their caller-chosen keys with collision detection; a key
//! already bound in the same compilation aborts the build.
//!
//! [`Environment`]: crate::environment::Environment

use std::fmt;
use std::rc::Rc;

use crate::environment::Environment;
use crate::renderer::errors::RenderError;
use crate::value::Value;

/// Output of a raw rendering closure: literal text plus extra parameters
/// keyed by caller-chosen names, kept in insertion order so merge failures
/// are deterministic.
#[derive(Debug, Clone)]
pub struct RawFragment {
    pub(crate) text: String,
    pub(crate) parameters: Vec<(String, Value)>,
}

impl RawFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Vec::new(),
        }
    }

    /// Attach an ad hoc parameter under a caller-chosen key.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }
}

pub(crate) type RawRender = dyn Fn(&mut Environment) -> Result<RawFragment, RenderError>;

/// A caller-rendered expression fragment. Invoked exactly once per compile
/// pass with a handle to the current scope.
#[derive(Clone)]
pub struct RawExpression {
    pub(crate) render_fn: Rc<RawRender>,
}

impl RawExpression {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&mut Environment) -> Result<RawFragment, RenderError> + 'static,
    {
        Self {
            render_fn: Rc::new(render),
        }
    }

    /// Fixed text with no parameters; the common case when splicing a
    /// construct the builder does not model.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| Ok(RawFragment::new(text.clone())))
    }
}

// Closures have no useful Debug form; render the type name only.
impl fmt::Debug for RawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawExpression(..)")
    }
}
