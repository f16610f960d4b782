//! Driving port for order creation.
//!
//! The request is validated structurally (zero order id, at least one line)
//! before anything reaches the database; the aggregate in a successful
//! outcome joins the created header with every created line.

use async_trait::async_trait;

use crate::domain::{Order, OrderRequest, Outcome};

/// Use-case port for creating orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersCommand: Send + Sync {
    /// Create an order with its lines.
    async fn create_order(&self, request: OrderRequest) -> Outcome<Order>;
}
