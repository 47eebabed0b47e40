//! Render impls for the clause layer and statement sequences.

use super::errors::RenderError;
use super::Render;
use crate::clause::projection::{OrderByItem, Projection};
use crate::clause::{
    Call, CallProcedure, Clause, Create, Delete, Foreach, Match, Merge, RawClause, Remove, Return,
    Set, Statement, Union, Unwind, With,
};
use crate::environment::Environment;
use crate::pattern::PathPattern;
use crate::utils::{escape_identifier, indent, join_non_empty};

impl Render for Clause {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        match self {
            Clause::Match(clause) => clause.render(env),
            Clause::Create(clause) => clause.render(env),
            Clause::Merge(clause) => clause.render(env),
            Clause::Delete(clause) => clause.render(env),
            Clause::Set(clause) => clause.render(env),
            Clause::Remove(clause) => clause.render(env),
            Clause::Call(clause) => clause.render(env),
            Clause::CallProcedure(clause) => clause.render(env),
            Clause::With(clause) => clause.render(env),
            Clause::Return(clause) => clause.render(env),
            Clause::Unwind(clause) => clause.render(env),
            Clause::Foreach(clause) => clause.render(env),
            Clause::Union(clause) => clause.render(env),
            Clause::Raw(clause) => clause.render(env),
        }
    }
}

impl Render for Statement {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(self.clauses.len());
        for clause in &self.clauses {
            parts.push(clause.render(env)?);
        }
        Ok(join_non_empty(&parts, "\n"))
    }
}

fn render_patterns(
    patterns: &[PathPattern],
    env: &mut Environment,
) -> Result<String, RenderError> {
    let rendered: Result<Vec<String>, _> = patterns.iter().map(|p| p.render(env)).collect();
    Ok(rendered?.join(", "))
}

impl Render for Match {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let keyword = if self.optional {
            "OPTIONAL MATCH"
        } else {
            "MATCH"
        };
        let parts = vec![
            format!("{} {}", keyword, render_patterns(&self.patterns, env)?),
            self.filter.render_line(env)?,
        ];
        Ok(join_non_empty(&parts, "\n"))
    }
}

impl Render for Create {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let parts = vec![
            format!("CREATE {}", render_patterns(&self.patterns, env)?),
            self.assignments.render_line("SET", env)?,
        ];
        Ok(join_non_empty(&parts, "\n"))
    }
}

impl Render for Merge {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let parts = vec![
            format!("MERGE {}", self.pattern.render(env)?),
            self.on_create.render_line("ON CREATE SET", env)?,
            self.on_match.render_line("ON MATCH SET", env)?,
        ];
        Ok(join_non_empty(&parts, "\n"))
    }
}

impl Render for Delete {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let keyword = if self.detach { "DETACH DELETE" } else { "DELETE" };
        let names: Vec<String> = self
            .items
            .iter()
            .map(|variable| env.variable_name(variable))
            .collect();
        Ok(format!("{} {}", keyword, names.join(", ")))
    }
}

impl Render for Set {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        self.assignments.render_line("SET", env)
    }
}

impl Render for Remove {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let rendered: Result<Vec<String>, _> =
            self.items.iter().map(|item| item.render(env)).collect();
        Ok(format!("REMOVE {}", rendered?.join(", ")))
    }
}

impl Render for Call {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let mut child = env.child();
        let mut body = self.body.render(&mut child)?;
        if !self.imports.is_empty() {
            let names: Vec<String> = self
                .imports
                .iter()
                .map(|variable| child.variable_name(variable))
                .collect();
            body = format!("WITH {}\n{}", names.join(", "), body);
        }
        Ok(format!("CALL {{\n{}\n}}", indent(&body)))
    }
}

impl Render for CallProcedure {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let args: Result<Vec<String>, _> = self.args.iter().map(|arg| arg.render(env)).collect();
        let mut out = format!("CALL {}({})", self.name, args?.join(", "));
        if !self.yields.is_empty() {
            let items: Vec<String> = self
                .yields
                .iter()
                .map(|item| escape_identifier(item))
                .collect();
            out.push_str(&format!(" YIELD {}", items.join(", ")));
        }
        Ok(out)
    }
}

/// Shared projection-body rendering for WITH and RETURN.
fn render_projection_head(
    keyword: &'static str,
    distinct: bool,
    star: bool,
    items: &[Projection],
    env: &mut Environment,
) -> Result<String, RenderError> {
    if !star && items.is_empty() {
        return Err(RenderError::EmptyProjection { keyword });
    }
    let body = if star {
        "*".to_string()
    } else {
        let mut rendered = Vec::with_capacity(items.len());
        for item in items {
            let text = item.expression.render(env)?;
            rendered.push(match &item.alias {
                Some(alias) => format!("{} AS {}", text, escape_identifier(alias)),
                None => text,
            });
        }
        rendered.join(", ")
    };
    let distinct = if distinct { " DISTINCT" } else { "" };
    Ok(format!("{}{} {}", keyword, distinct, body))
}

fn render_order_by(
    order_by: &[OrderByItem],
    env: &mut Environment,
) -> Result<String, RenderError> {
    if order_by.is_empty() {
        return Ok(String::new());
    }
    let mut rendered = Vec::with_capacity(order_by.len());
    for item in order_by {
        let direction: &'static str = item.order.into();
        rendered.push(format!("{} {}", item.expression.render(env)?, direction));
    }
    Ok(format!("ORDER BY {}", rendered.join(", ")))
}

impl Render for With {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let parts = vec![
            render_projection_head("WITH", self.distinct, self.star, &self.items, env)?,
            render_order_by(&self.order_by, env)?,
            self.skip.map(|n| format!("SKIP {}", n)).unwrap_or_default(),
            self.limit
                .map(|n| format!("LIMIT {}", n))
                .unwrap_or_default(),
            self.filter.render_line(env)?,
        ];
        Ok(join_non_empty(&parts, "\n"))
    }
}

impl Render for Return {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let parts = vec![
            render_projection_head("RETURN", self.distinct, self.star, &self.items, env)?,
            render_order_by(&self.order_by, env)?,
            self.skip.map(|n| format!("SKIP {}", n)).unwrap_or_default(),
            self.limit
                .map(|n| format!("LIMIT {}", n))
                .unwrap_or_default(),
        ];
        Ok(join_non_empty(&parts, "\n"))
    }
}

impl Render for Unwind {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let list = self.list.render(env)?;
        let name = env.variable_name(&self.variable);
        Ok(format!("UNWIND {} AS {}", list, name))
    }
}

impl Render for Foreach {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        // The list is evaluated in the enclosing scope; only the loop
        // variable and the body live in the child scope.
        let list = self.list.render(env)?;
        let mut child = env.child();
        let name = child.variable_name(&self.variable);
        let body = self.body.render(&mut child)?;
        Ok(format!("FOREACH ({} IN {} | {})", name, list, body))
    }
}

impl Render for Union {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let separator = if self.all { "\nUNION ALL\n" } else { "\nUNION\n" };
        let mut rendered = Vec::with_capacity(self.branches.len());
        for branch in &self.branches {
            let mut child = env.child();
            rendered.push(branch.render(&mut child)?);
        }
        Ok(rendered.join(separator))
    }
}

impl Render for RawClause {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let fragment = (self.render_fn)(env)?;
        for (key, value) in fragment.parameters {
            env.add_raw_parameter(key, value)?;
        }
        Ok(fragment.text)
    }
}
