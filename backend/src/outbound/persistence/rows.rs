//! Typed procedure rows and the sentinel-row decision.
//!
//! A row either carries a record or, when `code_status` is set, a business
//! rejection. [`ProcedureRow::into_outcome`] decides which exactly once;
//! nothing downstream inspects the status columns again.

use chrono::NaiveDateTime;
use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Integer, Nullable, Numeric, Text, Timestamp};
use rust_decimal::Decimal;

use crate::domain::{Client, OrderHeader, OrderLine, Product};

/// Status columns appended to single-row procedure results.
#[derive(Debug, Clone, Default, PartialEq, Eq, QueryableByName)]
pub(super) struct ProcedureStatus {
    #[diesel(sql_type = Nullable<Integer>)]
    pub(super) code_status: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) message_status: Option<String>,
}

/// Why a procedure row could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(super) enum ProcedureFailure {
    /// Sentinel row emitted by the procedure.
    #[error("{message}")]
    Rejected { code: i32, message: String },
    /// A record column came back null on a non-sentinel row.
    #[error("procedure returned null for column {column}")]
    NullColumn { column: &'static str },
}

/// Row shape of a single-row procedure.
pub(super) trait ProcedureRow: Sized {
    type Record;

    fn status(&self) -> &ProcedureStatus;

    fn into_record(self) -> Result<Self::Record, ProcedureFailure>;

    /// Decide between record and rejection.
    fn into_outcome(self) -> Result<Self::Record, ProcedureFailure> {
        if let Some(code) = self.status().code_status {
            let message = self.status().message_status.clone().unwrap_or_default();
            return Err(ProcedureFailure::Rejected { code, message });
        }
        self.into_record()
    }
}

/// Decode the first row of a single-row procedure result.
///
/// `None` means the procedure yielded no row at all.
pub(super) fn first_outcome<R: ProcedureRow>(
    rows: Vec<R>,
) -> Option<Result<R::Record, ProcedureFailure>> {
    rows.into_iter().next().map(ProcedureRow::into_outcome)
}

fn required<T>(value: Option<T>, column: &'static str) -> Result<T, ProcedureFailure> {
    value.ok_or(ProcedureFailure::NullColumn { column })
}

#[derive(Debug, Clone, QueryableByName)]
pub(super) struct ClientListRow {
    #[diesel(sql_type = BigInt)]
    cliente_id: i64,
    #[diesel(sql_type = Text)]
    nombre: String,
    #[diesel(sql_type = Text)]
    identidad: String,
}

impl From<ClientListRow> for Client {
    fn from(row: ClientListRow) -> Self {
        Self {
            id: row.cliente_id,
            name: row.nombre,
            identity: row.identidad,
        }
    }
}

#[derive(Debug, Clone, Default, QueryableByName)]
pub(super) struct ClientRow {
    #[diesel(sql_type = Nullable<BigInt>)]
    pub(super) cliente_id: Option<i64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) nombre: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) identidad: Option<String>,
    #[diesel(embed)]
    pub(super) status: ProcedureStatus,
}

impl ProcedureRow for ClientRow {
    type Record = Client;

    fn status(&self) -> &ProcedureStatus {
        &self.status
    }

    fn into_record(self) -> Result<Client, ProcedureFailure> {
        Ok(Client {
            id: required(self.cliente_id, "cliente_id")?,
            name: required(self.nombre, "nombre")?,
            identity: required(self.identidad, "identidad")?,
        })
    }
}

#[derive(Debug, Clone, QueryableByName)]
pub(super) struct ProductListRow {
    #[diesel(sql_type = BigInt)]
    producto_id: i64,
    #[diesel(sql_type = Text)]
    nombre: String,
    #[diesel(sql_type = Text)]
    descripcion: String,
    #[diesel(sql_type = Numeric)]
    precio: Decimal,
    #[diesel(sql_type = Integer)]
    existencia: i32,
}

impl From<ProductListRow> for Product {
    fn from(row: ProductListRow) -> Self {
        Self {
            id: row.producto_id,
            name: row.nombre,
            description: row.descripcion,
            price: row.precio,
            stock: row.existencia,
        }
    }
}

#[derive(Debug, Clone, Default, QueryableByName)]
pub(super) struct ProductRow {
    #[diesel(sql_type = Nullable<BigInt>)]
    pub(super) producto_id: Option<i64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) nombre: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) descripcion: Option<String>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub(super) precio: Option<Decimal>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub(super) existencia: Option<i32>,
    #[diesel(embed)]
    pub(super) status: ProcedureStatus,
}

impl ProcedureRow for ProductRow {
    type Record = Product;

    fn status(&self) -> &ProcedureStatus {
        &self.status
    }

    fn into_record(self) -> Result<Product, ProcedureFailure> {
        Ok(Product {
            id: required(self.producto_id, "producto_id")?,
            name: required(self.nombre, "nombre")?,
            description: required(self.descripcion, "descripcion")?,
            price: required(self.precio, "precio")?,
            stock: required(self.existencia, "existencia")?,
        })
    }
}

/// First stream of `sp_ordenes_crear`: the header or a sentinel row.
#[derive(Debug, Clone, Default, QueryableByName)]
pub(super) struct OrderHeaderRow {
    #[diesel(sql_type = Nullable<BigInt>)]
    pub(super) orden_id: Option<i64>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub(super) cliente_id: Option<i64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) cliente_nombre: Option<String>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub(super) subtotal: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub(super) impuesto: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub(super) total: Option<Decimal>,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub(super) fecha_creacion: Option<NaiveDateTime>,
    #[diesel(embed)]
    pub(super) status: ProcedureStatus,
}

impl ProcedureRow for OrderHeaderRow {
    type Record = OrderHeader;

    fn status(&self) -> &ProcedureStatus {
        &self.status
    }

    fn into_record(self) -> Result<OrderHeader, ProcedureFailure> {
        Ok(OrderHeader {
            id: required(self.orden_id, "orden_id")?,
            client_id: required(self.cliente_id, "cliente_id")?,
            client_name: required(self.cliente_nombre, "cliente_nombre")?,
            subtotal: required(self.subtotal, "subtotal")?,
            tax: required(self.impuesto, "impuesto")?,
            total: required(self.total, "total")?,
            created_at: required(self.fecha_creacion, "fecha_creacion")?,
        })
    }
}

/// Second stream of `sp_ordenes_crear`: one row per created line.
#[derive(Debug, Clone, QueryableByName)]
pub(super) struct OrderLineRow {
    #[diesel(sql_type = BigInt)]
    pub(super) detalle_orden_id: i64,
    #[diesel(sql_type = BigInt)]
    pub(super) orden_id: i64,
    #[diesel(sql_type = BigInt)]
    pub(super) producto_id: i64,
    #[diesel(sql_type = Text)]
    pub(super) producto_nombre: String,
    #[diesel(sql_type = Integer)]
    pub(super) cantidad: i32,
    #[diesel(sql_type = Numeric)]
    pub(super) subtotal: Decimal,
    #[diesel(sql_type = Numeric)]
    pub(super) impuesto: Decimal,
    #[diesel(sql_type = Numeric)]
    pub(super) total: Decimal,
}

impl From<OrderLineRow> for OrderLine {
    fn from(row: OrderLineRow) -> Self {
        Self {
            id: row.detalle_orden_id,
            order_id: row.orden_id,
            product_id: row.producto_id,
            product_name: row.producto_nombre,
            quantity: row.cantidad,
            subtotal: row.subtotal,
            tax: row.impuesto,
            total: row.total,
        }
    }
}
