//! Object types exposed by the schema.
//!
//! The entity records derive `SimpleObject` themselves; this module adds the
//! relational fields of `Order`, which are fetched only when selected.

use async_graphql::{ComplexObject, Context, PathSegment, QueryPathSegment};

use crate::error::ShopError;
use crate::model::{Entity, Table};
use crate::storage::{Backend, Filter};

pub use crate::model::{Order, OrderItem, OrderStatus, Product, User, Warehouse};

// Backend failures here are reported as field errors, unlike the root fields
// which log them and resolve to null. A failed field keeps its key with a null
// value, so the enclosing order survives.
#[ComplexObject]
impl Order {
    /// Lines belonging to this order.
    async fn items(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<OrderItem>>> {
        let Some(id) = self.id.as_deref() else {
            return Ok(Some(Vec::new()));
        };
        let backend = ctx.data::<Backend>()?;
        let rows = match backend
            .reader(Table::OrderItems)
            .select(Table::OrderItems, Some(&Filter::eq("order_id", id)))
            .await
        {
            Ok(rows) => rows,
            Err(e) => return Ok(field_error(ctx, e)),
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            match OrderItem::from_record(row) {
                Ok(item) => items.push(item),
                Err(e) => report(ctx, e),
            }
        }
        Ok(Some(items))
    }

    /// Current status of this order.
    async fn status(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<OrderStatus>> {
        let Some(status_id) = self.status_id.as_deref() else {
            let e = ShopError::NotFound(format!(
                "order {} has no status_id",
                self.id.as_deref().unwrap_or("<unknown>")
            ));
            return Ok(field_error(ctx, e));
        };
        let backend = ctx.data::<Backend>()?;
        let fetched = backend
            .reader(Table::OrderStatuses)
            .select_single(Table::OrderStatuses, &Filter::eq("id", status_id))
            .await
            .and_then(OrderStatus::from_record);
        match fetched {
            Ok(status) => Ok(Some(status)),
            Err(e) => Ok(field_error(ctx, e)),
        }
    }
}

/// Record `error` against the field being resolved.
fn report(ctx: &Context<'_>, error: ShopError) {
    let mut server_error = async_graphql::Error::from(error).into_server_error(ctx.item.pos);
    if let Some(node) = ctx.path_node {
        let mut path: Vec<PathSegment> = std::iter::once(&node)
            .chain(node.parents())
            .map(|n| match n.segment {
                QueryPathSegment::Name(name) => PathSegment::Field(name.to_string()),
                QueryPathSegment::Index(idx) => PathSegment::Index(idx),
            })
            .collect();
        path.reverse();
        server_error.path = path;
    }
    ctx.add_error(server_error);
}

/// Report `error` and resolve the field to null.
fn field_error<T>(ctx: &Context<'_>, error: ShopError) -> Option<T> {
    report(ctx, error);
    None
}
