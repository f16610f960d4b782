//! Orders and the aggregate composed from the order-creation procedure.
//!
//! An order is created atomically with its lines by one stored procedure
//! that yields two row streams: the header and the lines. [`Order::compose`]
//! joins them without reordering the lines.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// One requested line: which product and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// Order creation request as received from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Must be `0`; the identifier is generated by the database.
    pub order_id: i64,
    pub client_id: i64,
    pub lines: Vec<OrderLineRequest>,
}

/// Validated order creation input handed to the repository.
///
/// ## Invariants
/// - `lines` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    client_id: i64,
    lines: Vec<OrderLineRequest>,
}

impl NewOrder {
    /// Client placing the order.
    pub fn client_id(&self) -> i64 {
        self.client_id
    }

    /// Requested lines in caller order.
    pub fn lines(&self) -> &[OrderLineRequest] {
        &self.lines
    }
}

/// Structural validation failures for order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("El ordenId debe ser 0 para una nueva orden.")]
    IdNotZero,
    #[error("Debe tener al menos un detalle.")]
    NoLines,
}

impl TryFrom<OrderRequest> for NewOrder {
    type Error = OrderValidationError;

    fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
        if request.order_id != 0 {
            return Err(OrderValidationError::IdNotZero);
        }
        if request.lines.is_empty() {
            return Err(OrderValidationError::NoLines);
        }
        Ok(Self {
            client_id: request.client_id,
            lines: request.lines,
        })
    }
}

/// Header row of a freshly created order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHeader {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: NaiveDateTime,
}

/// One persisted order line with amounts computed by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    /// Product name copied at creation time.
    pub product_name: String,
    pub quantity: i32,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Order aggregate: header fields plus every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: NaiveDateTime,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Join a header with its lines, keeping the lines in stream order.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use storefront_backend::domain::{Order, OrderHeader};
    ///
    /// let created_at = NaiveDate::from_ymd_opt(2024, 5, 1)
    ///     .and_then(|d| d.and_hms_opt(10, 0, 0))
    ///     .expect("valid timestamp");
    /// let header = OrderHeader {
    ///     id: 9,
    ///     client_id: 1,
    ///     client_name: "Juan Pérez".to_owned(),
    ///     subtotal: Decimal::ZERO,
    ///     tax: Decimal::ZERO,
    ///     total: Decimal::ZERO,
    ///     created_at,
    /// };
    /// let order = Order::compose(header, Vec::new());
    /// assert_eq!(order.id, 9);
    /// assert!(order.lines.is_empty());
    /// ```
    pub fn compose(header: OrderHeader, lines: Vec<OrderLine>) -> Self {
        let OrderHeader {
            id,
            client_id,
            client_name,
            subtotal,
            tax,
            total,
            created_at,
        } = header;
        Self {
            id,
            client_id,
            client_name,
            subtotal,
            tax,
            total,
            created_at,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn header() -> OrderHeader {
        OrderHeader {
            id: 40,
            client_id: 7,
            client_name: "Juan Pérez".to_owned(),
            subtotal: dec!(30.00),
            tax: dec!(4.50),
            total: dec!(34.50),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|d| d.and_hms_opt(12, 30, 0))
                .expect("fixture timestamp"),
        }
    }

    fn line(id: i64, product_id: i64) -> OrderLine {
        OrderLine {
            id,
            order_id: 40,
            product_id,
            product_name: format!("producto {product_id}"),
            quantity: 1,
            subtotal: dec!(10.00),
            tax: dec!(1.50),
            total: dec!(11.50),
        }
    }

    #[rstest]
    fn compose_keeps_line_order_as_given(header: OrderHeader) {
        let lines = vec![line(3, 30), line(1, 10), line(2, 20)];
        let order = Order::compose(header, lines.clone());

        assert_eq!(order.lines, lines);
        assert_eq!(order.id, 40);
        assert_eq!(order.total, dec!(34.50));
    }

    #[rstest]
    fn request_with_lines_and_zero_id_validates() {
        let request = OrderRequest {
            order_id: 0,
            client_id: 7,
            lines: vec![OrderLineRequest {
                product_id: 1,
                quantity: 2,
            }],
        };

        let order = NewOrder::try_from(request).expect("valid request");
        assert_eq!(order.client_id(), 7);
        assert_eq!(order.lines().len(), 1);
    }

    #[rstest]
    #[case(5, vec![OrderLineRequest { product_id: 1, quantity: 1 }], OrderValidationError::IdNotZero)]
    #[case(0, Vec::new(), OrderValidationError::NoLines)]
    #[case(5, Vec::new(), OrderValidationError::IdNotZero)]
    fn request_validation_failures(
        #[case] order_id: i64,
        #[case] lines: Vec<OrderLineRequest>,
        #[case] expected: OrderValidationError,
    ) {
        let request = OrderRequest {
            order_id,
            client_id: 7,
            lines,
        };
        assert_eq!(NewOrder::try_from(request), Err(expected));
    }

    #[rstest]
    fn no_lines_message_matches_api_contract() {
        assert_eq!(
            OrderValidationError::NoLines.to_string(),
            "Debe tener al menos un detalle."
        );
    }
}
