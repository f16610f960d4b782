//! PostgreSQL persistence adapters calling stored procedures through Diesel.
//!
//! # Architecture
//!
//! - **One procedure per call**: every repository method checks out a pooled
//!   connection and invokes exactly one named procedure with
//!   `diesel::sql_query`. Order creation additionally fetches the two cursors
//!   the procedure opens, inside the same transaction.
//! - **Typed rows**: `QueryableByName` row structs (`rows.rs`) are internal;
//!   the domain only ever sees `Client`, `Product` and `Order` values.
//! - **Sentinel rows decided once**: a non-null `code_status` becomes a
//!   `Rejected` port error at this boundary.
//! - **No schema**: tables are owned by the procedures, so there is no
//!   Diesel `table!` definition here.
//!
//! # Example
//!
//! ```no_run
//! use storefront_backend::outbound::persistence::{
//!     DbPool, DieselClientRepository, PoolConfig,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tienda")).await?;
//! let clients = DieselClientRepository::new(pool);
//! # drop(clients);
//! # Ok(())
//! # }
//! ```

mod diesel_client_repository;
mod diesel_error_mapping;
mod diesel_order_repository;
mod diesel_product_repository;
mod pool;
mod procedures;
mod rows;

pub use diesel_client_repository::DieselClientRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
