//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define the client, product and order records exchanged with the
//! stored procedures, the [`Outcome`] envelope every use-case answers with,
//! and the services implementing the driving ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport error payload.
//! - Outcome (alias to `outcome::Outcome`): success/error envelope.
//! - Client, Product, Order and their drafts/requests.
//! - ClientService, ProductService, OrderService: driving port impls.

pub mod client;
mod client_service;
pub mod error;
pub mod order;
mod order_service;
pub mod outcome;
pub mod ports;
pub mod product;
mod product_service;
pub mod trace_id;

pub use self::client::{Client, ClientDraft, ClientValidationError};
pub use self::client_service::ClientService;
pub use self::error::{Error, ErrorCode};
pub use self::order::{
    NewOrder, Order, OrderHeader, OrderLine, OrderLineRequest, OrderRequest, OrderValidationError,
};
pub use self::order_service::OrderService;
pub use self::outcome::Outcome;
pub use self::product::{Product, ProductDraft, ProductValidationError};
pub use self::product_service::ProductService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient transport result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use storefront_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
