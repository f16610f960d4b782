//! Port for atomic order creation.
//!
//! The adapter creates the order header and every line in one database
//! transaction and hands back the composed aggregate. Stock decrement, tax
//! and totals are computed by the database.

use async_trait::async_trait;

use crate::domain::{NewOrder, Order};

use super::{NO_DATABASE, define_port_error};

define_port_error! {
    /// Errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "order repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "order repository query failed: {message}",
        /// The header stream carried a sentinel error row.
        Rejected { code: i32, message: String } => "{message}",
        /// The header stream was empty.
        Missing => "order procedure returned no header",
    }
}

impl OrderRepositoryError {
    /// Underlying database text, without the adapter prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Connection { message }
            | Self::Query { message }
            | Self::Rejected { message, .. } => message.clone(),
            Self::Missing => self.to_string(),
        }
    }
}

/// Port for creating orders together with their lines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create an order and return the header joined with its lines.
    ///
    /// Lines appear in the order the database yields them; the line count
    /// equals the number of rows in the lines stream.
    async fn create_order(&self, order: &NewOrder) -> Result<Order, OrderRepositoryError>;
}

/// Fixture repository for running without a database.
///
/// Every order is refused with a connection error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderRepository;

#[async_trait]
impl OrderRepository for FixtureOrderRepository {
    async fn create_order(&self, _order: &NewOrder) -> Result<Order, OrderRepositoryError> {
        Err(OrderRepositoryError::connection(NO_DATABASE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderLineRequest, OrderRequest};
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_refuses_orders() {
        let order = NewOrder::try_from(OrderRequest {
            order_id: 0,
            client_id: 3,
            lines: vec![OrderLineRequest {
                product_id: 10,
                quantity: 2,
            }],
        })
        .expect("valid order");

        let err = FixtureOrderRepository
            .create_order(&order)
            .await
            .expect_err("fixture cannot store");

        assert_eq!(err.detail(), "no database configured");
    }

    #[rstest]
    #[case(OrderRepositoryError::query("El cliente 99 no existe"), "El cliente 99 no existe")]
    #[case(OrderRepositoryError::connection("timed out"), "timed out")]
    #[case(OrderRepositoryError::rejected(2_i32, "Stock insuficiente"), "Stock insuficiente")]
    #[case(OrderRepositoryError::missing(), "order procedure returned no header")]
    fn detail_drops_adapter_prefix(#[case] error: OrderRepositoryError, #[case] expected: &str) {
        assert_eq!(error.detail(), expected);
    }
}
