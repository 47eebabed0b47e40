//! `RETURN` projections, including the `*` wildcard, `DISTINCT`, ordering,
//! and pagination.

use super::projection::{OrderByItem, Projection, SortOrder};
use crate::expression::IntoExpression;

#[derive(Debug, Clone, Default)]
pub struct Return {
    pub(crate) items: Vec<Projection>,
    pub(crate) star: bool,
    pub(crate) distinct: bool,
    pub(crate) order_by: Vec<OrderByItem>,
    pub(crate) skip: Option<i64>,
    pub(crate) limit: Option<i64>,
}

impl Return {
    /// Empty projection list; attach items before compiling, or use
    /// [`Return::star`].
    pub fn new() -> Self {
        Self::default()
    }

    /// `RETURN *`
    pub fn star() -> Self {
        Self {
            star: true,
            ..Self::default()
        }
    }

    /// Project an expression.
    pub fn item(mut self, expression: impl IntoExpression) -> Self {
        self.items.push(Projection::new(expression));
        self
    }

    /// Project an expression under an alias.
    pub fn item_as(mut self, expression: impl IntoExpression, alias: impl Into<String>) -> Self {
        self.items.push(Projection::aliased(expression, alias));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn order_by(mut self, expression: impl IntoExpression, order: SortOrder) -> Self {
        self.order_by.push(OrderByItem::new(expression, order));
        self
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
