//! PostgreSQL-backed `OrderRepository` driving `sp_ordenes_crear`.
//!
//! The procedure inserts the header and every line, then opens two cursors:
//! the header (or a sentinel row) and the created lines. Both are fetched
//! inside the transaction that called the procedure. The lines cursor is only
//! fetched once the header resolves to a record; a rejected call may never
//! open it.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Jsonb};
use diesel_async::RunQueryDsl;
use serde_json::{Value, json};
use tracing::warn;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{NewOrder, Order, OrderHeader, OrderLine};

use super::diesel_error_mapping;
use super::pool::{DbPool, PoolError};
use super::procedures::{CREATE_ORDER, FETCH_ORDER_HEADER, FETCH_ORDER_LINES};
use super::rows::{OrderHeaderRow, OrderLineRow, ProcedureFailure, first_outcome};

/// Diesel-backed implementation of the `OrderRepository` port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    diesel_error_mapping::map_pool_error(error, OrderRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    diesel_error_mapping::map_diesel_error(
        error,
        "sp_ordenes_crear",
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

/// Lines as the procedure expects them: `[{"productoId": n, "cantidad": n}]`.
fn lines_payload(order: &NewOrder) -> Value {
    Value::Array(
        order
            .lines()
            .iter()
            .map(|line| json!({ "productoId": line.product_id, "cantidad": line.quantity }))
            .collect(),
    )
}

/// Settle the header stream before the lines cursor is touched.
fn resolve_header(headers: Vec<OrderHeaderRow>) -> Result<OrderHeader, OrderRepositoryError> {
    match first_outcome(headers) {
        Some(Ok(header)) => Ok(header),
        Some(Err(ProcedureFailure::Rejected { code, message })) => {
            warn!(code, %message, "order creation rejected");
            Err(OrderRepositoryError::rejected(code, message))
        }
        Some(Err(failure @ ProcedureFailure::NullColumn { .. })) => {
            Err(OrderRepositoryError::query(failure.to_string()))
        }
        None => Err(OrderRepositoryError::missing()),
    }
}

fn compose_order(header: OrderHeader, lines: Vec<OrderLineRow>) -> Order {
    Order::compose(header, lines.into_iter().map(OrderLine::from).collect())
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, OrderRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let client_id = order.client_id();
        let payload = lines_payload(order);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                sql_query(CREATE_ORDER)
                    .bind::<BigInt, _>(client_id)
                    .bind::<Jsonb, _>(&payload)
                    .execute(conn)
                    .await?;
                let headers: Vec<OrderHeaderRow> =
                    sql_query(FETCH_ORDER_HEADER).load(conn).await?;
                let header = match resolve_header(headers) {
                    Ok(header) => header,
                    Err(error) => return Ok(Err(error)),
                };
                let lines: Vec<OrderLineRow> = sql_query(FETCH_ORDER_LINES).load(conn).await?;
                Ok::<_, diesel::result::Error>(Ok(compose_order(header, lines)))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)?
    }
}
