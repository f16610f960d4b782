//! Storefront backend library: clients, products and orders served over
//! HTTP and persisted through PostgreSQL stored procedures.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
