//! The compiler: a depth-first, single-pass walk over the AST that produces
//! the final query text and the accumulated parameter map.
//!
//! Every AST kind implements [`Render`]; `build` is the single entry point
//! that allocates a fresh root [`Environment`], walks the tree once, and
//! returns the finished `(text, parameters)` pair. `join`/`join_with`
//! concatenate already-rendered output without re-traversing any AST.
//!
//! [`Environment`]: crate::environment::Environment

pub mod clauses;
pub mod errors;
pub mod expressions;

use std::collections::HashMap;

use log::debug;

use crate::environment::Environment;
use crate::value::Value;
use errors::RenderError;

/// Anything that can produce a fragment of query text, contributing
/// parameter entries through the environment as it goes.
pub trait Render {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError>;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        (**self).render(env)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        (**self).render(env)
    }
}

/// Finished output of a compile pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledQuery {
    pub text: String,
    pub parameters: HashMap<String, Value>,
}

/// Compile a clause, statement, or bare expression.
///
/// Each call gets a fresh root environment: compiling the same untouched AST
/// twice is side-effect-free and yields identical output, and concurrent
/// builds never share naming state.
pub fn build(root: &impl Render) -> Result<CompiledQuery, RenderError> {
    let mut env = Environment::new();
    let text = root.render(&mut env)?;
    let ordered = env.parameters();
    debug!(
        "compiled query: {} chars, {} parameter(s)",
        text.len(),
        ordered.len()
    );
    Ok(CompiledQuery {
        text,
        parameters: ordered.into_iter().collect(),
    })
}

/// One input to [`join`]: either plain text or an already-compiled query.
#[derive(Debug, Clone)]
pub enum Fragment {
    Text(String),
    Compiled(CompiledQuery),
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<CompiledQuery> for Fragment {
    fn from(query: CompiledQuery) -> Self {
        Fragment::Compiled(query)
    }
}

/// Join already-rendered fragments with newlines. See [`join_with`].
pub fn join(fragments: Vec<Fragment>) -> Result<CompiledQuery, RenderError> {
    join_with(fragments, "\n")
}

/// Join already-rendered fragments with the given separator, unioning their
/// parameter maps. No AST is re-traversed. Empty input yields the empty
/// query; a single fragment passes through unchanged.
///
/// Two fragments binding the same parameter key indicate caller error
/// unless the bound values are identical (the shared-instance case), and
/// abort the join.
pub fn join_with(fragments: Vec<Fragment>, separator: &str) -> Result<CompiledQuery, RenderError> {
    let mut texts = Vec::with_capacity(fragments.len());
    let mut parameters: HashMap<String, Value> = HashMap::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => texts.push(text),
            Fragment::Compiled(query) => {
                texts.push(query.text);
                for (key, value) in query.parameters {
                    match parameters.get(&key) {
                        Some(existing) if *existing == value => {}
                        Some(_) => return Err(RenderError::ParameterKeyCollision(key)),
                        None => {
                            parameters.insert(key, value);
                        }
                    }
                }
            }
        }
    }
    Ok(CompiledQuery {
        text: texts.join(separator),
        parameters,
    })
}
