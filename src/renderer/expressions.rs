//! Render impls for the expression and pattern layers.

use super::errors::RenderError;
use super::Render;
use crate::environment::Environment;
use crate::expression::operators::Fixity;
use crate::expression::{
    Expression, FunctionCall, LabelPredicate, ListComprehension, Literal, Operator,
    OperatorApplication, Parameter, PropertyRef, RawExpression, Variable,
};
use crate::pattern::{Direction, NodePattern, PathPattern, RelationshipPattern};
use crate::utils::{escape_identifier, escape_label};

impl Render for Expression {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        match self {
            Expression::Literal(literal) => literal.render(env),
            Expression::Parameter(parameter) => parameter.render(env),
            Expression::Variable(variable) => variable.render(env),
            Expression::Property(property) => property.render(env),
            Expression::Operator(application) => application.render(env),
            Expression::Function(call) => call.render(env),
            Expression::List(items) => {
                let rendered: Result<Vec<String>, _> =
                    items.iter().map(|item| item.render(env)).collect();
                Ok(format!("[{}]", rendered?.join(", ")))
            }
            Expression::Map(entries) => render_map(entries, env),
            Expression::HasLabel(predicate) => predicate.render(env),
            Expression::ListComprehension(comprehension) => comprehension.render(env),
            Expression::Raw(raw) => raw.render(env),
        }
    }
}

impl Render for Literal {
    fn render(&self, _env: &mut Environment) -> Result<String, RenderError> {
        Ok(self.0.to_cypher())
    }
}

impl Render for Parameter {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        Ok(format!("${}", env.parameter(self)?))
    }
}

impl Render for Variable {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        Ok(env.variable_name(self))
    }
}

impl Render for PropertyRef {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let name = env.variable_name(&self.variable);
        Ok(format!("{}.{}", name, escape_identifier(&self.key)))
    }
}

impl Render for LabelPredicate {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let name = env.variable_name(&self.variable);
        Ok(format!("{}:{}", name, escape_label(&self.label)))
    }
}

impl Render for OperatorApplication {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let operator = self.operator;
        match operator.fixity() {
            Fixity::Prefix => {
                let operand = &self.operands[0];
                let text = operand.render(env)?;
                // NOT always parenthesizes a compound operand
                if matches!(operand, Expression::Operator(_)) {
                    Ok(format!("{} ({})", operator.symbol(), text))
                } else {
                    Ok(format!("{} {}", operator.symbol(), text))
                }
            }
            Fixity::Postfix => {
                let operand = &self.operands[0];
                let text = render_operand(operator, operand, false, env)?;
                Ok(format!("{} {}", text, operator.symbol()))
            }
            Fixity::Infix => {
                let mut rendered = Vec::with_capacity(self.operands.len());
                for (index, operand) in self.operands.iter().enumerate() {
                    rendered.push(render_operand(operator, operand, index == 0, env)?);
                }
                Ok(rendered.join(&format!(" {} ", operator.symbol())))
            }
        }
    }
}

/// Wrap a nested application when it binds looser than its parent, or
/// equally loose in a trailing position. Leading same-precedence operands
/// associate naturally and stay bare.
fn render_operand(
    parent: Operator,
    operand: &Expression,
    leading: bool,
    env: &mut Environment,
) -> Result<String, RenderError> {
    let text = operand.render(env)?;
    let wrap = match operand {
        Expression::Operator(inner) => {
            let child = inner.operator().precedence();
            let parent = parent.precedence();
            child < parent || (child == parent && !leading)
        }
        _ => false,
    };
    if wrap {
        Ok(format!("({})", text))
    } else {
        Ok(text)
    }
}

impl Render for FunctionCall {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let args: Result<Vec<String>, _> = self.args.iter().map(|arg| arg.render(env)).collect();
        Ok(format!("{}({})", self.name, args?.join(", ")))
    }
}

impl Render for ListComprehension {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let variable = env.variable_name(&self.variable);
        let list = self.list.render(env)?;
        let mut out = format!("[{} IN {}", variable, list);
        if let Some(filter) = &self.filter {
            out.push_str(&format!(" WHERE {}", filter.render(env)?));
        }
        if let Some(map) = &self.map {
            out.push_str(&format!(" | {}", map.render(env)?));
        }
        out.push(']');
        Ok(out)
    }
}

impl Render for RawExpression {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let fragment = (self.render_fn)(env)?;
        for (key, value) in fragment.parameters {
            env.add_raw_parameter(key, value)?;
        }
        Ok(fragment.text)
    }
}

pub(crate) fn render_map(
    entries: &[(String, Expression)],
    env: &mut Environment,
) -> Result<String, RenderError> {
    if entries.is_empty() {
        return Ok("{}".to_string());
    }
    let mut rendered = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        rendered.push(format!(
            "{}: {}",
            escape_identifier(key),
            value.render(env)?
        ));
    }
    Ok(format!("{{ {} }}", rendered.join(", ")))
}

impl Render for NodePattern {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let name = env.variable_name(&self.variable);
        let labels: String = self
            .labels
            .iter()
            .map(|label| format!(":{}", escape_label(label)))
            .collect();
        let properties = if self.properties.is_empty() {
            String::new()
        } else {
            format!(" {}", render_map(&self.properties, env)?)
        };
        Ok(format!("({}{}{})", name, labels, properties))
    }
}

impl RelationshipPattern {
    /// The bracket fragment shared by standalone (decomposed) rendering and
    /// path rendering: `[this1:`TYPE`*1..3 { key: $param0 }]`.
    pub(crate) fn bracket(&self, env: &mut Environment) -> Result<String, RenderError> {
        let name = env.variable_name(&self.variable);
        let rel_type = self
            .rel_type
            .as_ref()
            .map(|t| format!(":{}", escape_label(t)))
            .unwrap_or_default();
        let length = self
            .length
            .map(|spec| spec.to_fragment())
            .unwrap_or_default();
        let properties = if self.properties.is_empty() {
            String::new()
        } else {
            format!(" {}", render_map(&self.properties, env)?)
        };
        Ok(format!("[{}{}{}{}]", name, rel_type, length, properties))
    }
}

impl Render for RelationshipPattern {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        self.bracket(env)
    }
}

impl Render for PathPattern {
    fn render(&self, env: &mut Environment) -> Result<String, RenderError> {
        let mut out = String::new();
        if let Some(path_variable) = &self.path_variable {
            out.push_str(&format!("{} = ", env.variable_name(path_variable)));
        }
        out.push_str(&self.start.render(env)?);
        for (relationship, node) in &self.segments {
            let bracket = relationship.bracket(env)?;
            let arrow = match relationship.direction {
                Direction::Outgoing => format!("-{}->", bracket),
                Direction::Incoming => format!("<-{}-", bracket),
                Direction::Either => format!("-{}-", bracket),
            };
            out.push_str(&arrow);
            out.push_str(&node.render(env)?);
        }
        Ok(out)
    }
}
