//! Cypherforge - composable Cypher query construction
//!
//! This crate builds a declarative AST for Cypher queries and compiles it
//! into parameterized query text:
//! - Expression, pattern, and clause builders for every statement kind
//! - Deterministic, collision-free naming of anonymous variables
//! - Identity-keyed parameter deduplication into one flat output map
//! - Subquery scoping with globally unique names per compiled statement
//!
//! ```
//! use cypherforge::clause::{Match, Return, Statement};
//! use cypherforge::expression::{operators, Parameter};
//! use cypherforge::pattern::NodePattern;
//! use cypherforge::renderer::build;
//!
//! let movie = NodePattern::labeled("Movie");
//! let title = Parameter::new("The Matrix");
//! let statement = Statement::new()
//!     .clause(Match::new(movie.clone()).filter(operators::eq(movie.prop("title"), title)))
//!     .clause(Return::new().item(movie.prop("title")));
//!
//! let compiled = build(&statement).unwrap();
//! assert_eq!(
//!     compiled.text,
//!     "MATCH (this0:`Movie`)\nWHERE this0.title = $param0\nRETURN this0.title"
//! );
//! ```

pub mod clause;
pub mod environment;
pub mod errors;
pub mod expression;
pub mod pattern;
pub mod renderer;
pub mod utils;
pub mod value;

pub use environment::Environment;
pub use errors::{Error, Result};
pub use expression::{Expression, Literal, Parameter, PropertyRef, Variable};
pub use pattern::{Direction, NodePattern, PathPattern, RelationshipPattern};
pub use renderer::{build, join, join_with, CompiledQuery, Fragment, Render};
pub use value::Value;
