//! Property-assignment accumulator shared by `CREATE ... SET`, `MERGE`
//! actions, and the standalone `SET` clause.

use crate::environment::Environment;
use crate::expression::{Expression, PropertyRef};
use crate::renderer::errors::RenderError;
use crate::renderer::Render;
use crate::utils::escape_identifier;

/// Ordered `target = value` pairs rendered behind a SET-style keyword.
#[derive(Debug, Clone, Default)]
pub struct SetAssignments {
    items: Vec<(PropertyRef, Expression)>,
}

impl SetAssignments {
    pub(crate) fn push(&mut self, target: PropertyRef, value: Expression) {
        self.items.push((target, value));
    }

    /// Rendered `{keyword} a.b = x, c.d = y` line, or an empty string when
    /// nothing was attached. The keyword varies: `SET`, `ON CREATE SET`,
    /// `ON MATCH SET`.
    pub(crate) fn render_line(
        &self,
        keyword: &str,
        env: &mut Environment,
    ) -> Result<String, RenderError> {
        if self.items.is_empty() {
            return Ok(String::new());
        }
        let mut rendered = Vec::with_capacity(self.items.len());
        for (target, value) in &self.items {
            let name = env.variable_name(target.variable());
            rendered.push(format!(
                "{}.{} = {}",
                name,
                escape_identifier(target.key()),
                value.render(env)?
            ));
        }
        Ok(format!("{} {}", keyword, rendered.join(", ")))
    }
}
