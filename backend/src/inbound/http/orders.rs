//! Order HTTP handler.
//!
//! ```text
//! POST /Orden/Insertar
//! {"ordenId":0,"clienteId":7,"detalle":[{"productoId":1,"cantidad":2}]}
//! ```

use actix_web::{post, web};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Order, OrderLine, OrderLineRequest, OrderRequest, Outcome};
use crate::inbound::http::state::HttpState;

/// One requested line on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderLineRequestPayload {
    #[serde(rename = "productoId", alias = "productId")]
    pub product_id: i64,
    #[serde(rename = "cantidad", alias = "quantity")]
    pub quantity: i32,
}

/// Order creation body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderRequestPayload {
    #[serde(rename = "ordenId", alias = "orderId")]
    pub order_id: i64,
    #[serde(rename = "clienteId", alias = "clientId")]
    pub client_id: i64,
    #[serde(rename = "detalle", alias = "lines")]
    pub lines: Vec<OrderLineRequestPayload>,
}

impl From<OrderRequestPayload> for OrderRequest {
    fn from(value: OrderRequestPayload) -> Self {
        Self {
            order_id: value.order_id,
            client_id: value.client_id,
            lines: value
                .lines
                .into_iter()
                .map(|line| OrderLineRequest {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// Created order line as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLinePayload {
    #[serde(rename = "detalleOrdenId")]
    pub id: i64,
    #[serde(rename = "ordenId")]
    pub order_id: i64,
    #[serde(rename = "productoId")]
    pub product_id: i64,
    #[serde(rename = "productoNombre")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    pub subtotal: Decimal,
    #[serde(rename = "impuesto")]
    pub tax: Decimal,
    pub total: Decimal,
}

impl From<OrderLine> for OrderLinePayload {
    fn from(value: OrderLine) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            subtotal: value.subtotal,
            tax: value.tax,
            total: value.total,
        }
    }
}

/// Created order with its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    #[serde(rename = "ordenId")]
    pub id: i64,
    #[serde(rename = "clienteId")]
    pub client_id: i64,
    #[serde(rename = "clienteNombre")]
    pub client_name: String,
    pub subtotal: Decimal,
    #[serde(rename = "impuesto")]
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(rename = "fechaCreacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "detalles")]
    pub lines: Vec<OrderLinePayload>,
}

impl From<Order> for OrderPayload {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            client_id: value.client_id,
            client_name: value.client_name,
            subtotal: value.subtotal,
            tax: value.tax,
            total: value.total,
            created_at: value.created_at,
            lines: value.lines.into_iter().map(OrderLinePayload::from).collect(),
        }
    }
}

/// Create an order with its lines in one call.
#[post("/Orden/Insertar")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<OrderRequestPayload>,
) -> web::Json<Outcome<OrderPayload>> {
    let outcome = state.orders.create_order(payload.into_inner().into()).await;
    web::Json(outcome.map(OrderPayload::from))
}
