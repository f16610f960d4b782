//! Order creation use-case.
//!
//! Validation here is structural only. Everything else (client existence,
//! stock, taxes) is decided by the database, whose messages are passed
//! through verbatim as the single error of a failed outcome.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{OrderRepository, OrdersCommand};
use crate::domain::{NewOrder, Order, OrderRequest, Outcome};

const CREATED_MESSAGE: &str = "Orden creada exitosamente";
const CREATE_FAILED_MESSAGE: &str = "Error al crear la orden";
const PROCESS_FAILED_MESSAGE: &str = "Error al procesar la orden";

/// Order service implementing [`OrdersCommand`].
#[derive(Clone)]
pub struct OrderService<R> {
    repo: Arc<R>,
}

impl<R> OrderService<R> {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Pick the envelope message for a failed order from the underlying error.
///
/// Failures mentioning the client are reported as creation errors; anything
/// else is reported as a processing error.
fn failure_message(error: &str) -> &'static str {
    if error.contains("cliente") {
        CREATE_FAILED_MESSAGE
    } else {
        PROCESS_FAILED_MESSAGE
    }
}

#[async_trait]
impl<R> OrdersCommand for OrderService<R>
where
    R: OrderRepository,
{
    async fn create_order(&self, request: OrderRequest) -> Outcome<Order> {
        let order = match NewOrder::try_from(request) {
            Ok(order) => order,
            Err(error) => return Outcome::failure(CREATE_FAILED_MESSAGE, error.to_string()),
        };
        match self.repo.create_order(&order).await {
            Ok(created) => Outcome::ok(CREATED_MESSAGE, created),
            Err(error) => {
                warn!(client_id = order.client_id(), %error, "order creation failed");
                let text = error.detail();
                Outcome::failure(failure_message(&text), text)
            }
        }
    }
}
