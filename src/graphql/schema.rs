use async_graphql::{Context, EmptySubscription, Object, Schema};
use tracing::error;

use crate::model::{self, Entity, Insertable, Table};
use crate::storage::{Backend, DataSource, Filter};

use super::types::*;

pub type ShopSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Compose the query and mutation roots over `backend`.
pub fn build_schema(backend: Backend) -> ShopSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(backend)
        .finish()
}

/// Fetch one row by id. Any failure is logged and reads as "no such row".
async fn fetch_one<E: Entity + Send>(source: &dyn DataSource, id: &str) -> Option<E> {
    let fetched = source
        .select_single(E::TABLE, &Filter::eq("id", id))
        .await
        .and_then(E::from_record);
    match fetched {
        Ok(entity) => Some(entity),
        Err(e) => {
            error!(table = %E::TABLE, id, error = %e, "lookup failed");
            None
        }
    }
}

/// Fetch every row. A failed call is logged and reads as an empty table; a
/// row that fails to decode is logged and left out.
async fn fetch_all<E: Entity + Send>(source: &dyn DataSource) -> Vec<E> {
    let rows = match source.select(E::TABLE, None).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(table = %E::TABLE, error = %e, "listing failed");
            return Vec::new();
        }
    };

    rows.into_iter()
        .filter_map(|row| match E::from_record(row) {
            Ok(entity) => Some(entity),
            Err(e) => {
                error!(table = %E::TABLE, error = %e, "row skipped");
                None
            }
        })
        .collect()
}

/// Insert a validated payload and decode the stored row.
///
/// Validation errors go back to the caller; backend failures are logged and
/// read as null.
async fn insert_returning<E: Entity + Send, N: Insertable + Send>(
    ctx: &Context<'_>,
    new: N,
) -> async_graphql::Result<Option<E>> {
    new.validate()?;
    let row = new.to_record()?;
    let backend = ctx.data::<Backend>()?;

    let inserted = backend
        .writer()
        .insert(N::TABLE, row)
        .await
        .and_then(E::from_record);
    match inserted {
        Ok(entity) => Ok(Some(entity)),
        Err(e) => {
            error!(table = %N::TABLE, error = %e, "insert failed");
            Ok(None)
        }
    }
}

fn reader<'a>(ctx: &Context<'a>, table: Table) -> async_graphql::Result<&'a dyn DataSource> {
    Ok(ctx.data::<Backend>()?.reader(table))
}

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Get a single product by ID
    async fn product(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Product>> {
        let source = reader(ctx, Table::Products)?;
        Ok(fetch_one::<Product>(source, &id).await)
    }

    /// List all products
    async fn products(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Product>> {
        let source = reader(ctx, Table::Products)?;
        Ok(fetch_all::<Product>(source).await)
    }

    /// Get a single user by ID
    async fn user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<User>> {
        let source = reader(ctx, Table::Users)?;
        Ok(fetch_one::<User>(source, &id).await)
    }

    /// List all users
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let source = reader(ctx, Table::Users)?;
        Ok(fetch_all::<User>(source).await)
    }

    /// Get a single warehouse by ID
    async fn warehouse(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<Warehouse>> {
        let source = reader(ctx, Table::Warehouses)?;
        Ok(fetch_one::<Warehouse>(source, &id).await)
    }

    /// List all warehouses
    async fn warehouses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Warehouse>> {
        let source = reader(ctx, Table::Warehouses)?;
        Ok(fetch_all::<Warehouse>(source).await)
    }

    /// Get a single order status by ID
    async fn order_status(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<OrderStatus>> {
        let source = reader(ctx, Table::OrderStatuses)?;
        Ok(fetch_one::<OrderStatus>(source, &id).await)
    }

    /// List all order statuses
    async fn order_statuses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<OrderStatus>> {
        let source = reader(ctx, Table::OrderStatuses)?;
        Ok(fetch_all::<OrderStatus>(source).await)
    }

    /// Get a single order by ID
    async fn order(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Order>> {
        let source = reader(ctx, Table::Orders)?;
        Ok(fetch_one::<Order>(source, &id).await)
    }

    /// List all orders
    async fn orders(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Order>> {
        let source = reader(ctx, Table::Orders)?;
        Ok(fetch_all::<Order>(source).await)
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation", rename_args = "snake_case")]
impl MutationRoot {
    /// Register a user
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        last_name: String,
        first_name: String,
        middle_name: Option<String>,
        email: String,
        phone: String,
        password_hash: String,
        role: String,
    ) -> async_graphql::Result<Option<User>> {
        let new = model::NewUser {
            last_name,
            first_name,
            middle_name,
            email,
            phone,
            password_hash,
            role,
        };
        insert_returning::<User, _>(ctx, new).await
    }

    /// Create a warehouse
    async fn create_warehouse(
        &self,
        ctx: &Context<'_>,
        name: String,
        address: String,
        phone: Option<String>,
        description: Option<String>,
        working_hours: String,
    ) -> async_graphql::Result<Option<Warehouse>> {
        let new = model::NewWarehouse {
            name,
            address,
            phone,
            description,
            working_hours,
        };
        insert_returning::<Warehouse, _>(ctx, new).await
    }

    /// Place an order
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        status_id: String,
        total_price: String,
        delivery_address: String,
        comment: Option<String>,
    ) -> async_graphql::Result<Option<Order>> {
        let new = model::NewOrder {
            user_id,
            status_id,
            total_price,
            delivery_address,
            comment,
        };
        insert_returning::<Order, _>(ctx, new).await
    }

    /// Add a line to an order
    async fn add_order_item(
        &self,
        ctx: &Context<'_>,
        order_id: String,
        product_id: String,
        quantity: i32,
        price: String,
    ) -> async_graphql::Result<Option<OrderItem>> {
        let new = model::NewOrderItem {
            order_id,
            product_id,
            quantity,
            price,
        };
        insert_returning::<OrderItem, _>(ctx, new).await
    }
}
