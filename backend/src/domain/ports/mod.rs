//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`, `*Command`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

/// Error text fixture repositories answer writes with.
const NO_DATABASE: &str = "no database configured";

mod client_repository;
mod clients_command;
mod clients_query;
mod order_repository;
mod orders_command;
mod product_repository;
mod products_command;
mod products_query;

#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError, FixtureClientRepository};
#[cfg(test)]
pub use clients_command::MockClientsCommand;
pub use clients_command::ClientsCommand;
#[cfg(test)]
pub use clients_query::MockClientsQuery;
pub use clients_query::ClientsQuery;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{FixtureOrderRepository, OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use orders_command::MockOrdersCommand;
pub use orders_command::OrdersCommand;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{
    FixtureProductRepository, ProductRepository, ProductRepositoryError,
};
#[cfg(test)]
pub use products_command::MockProductsCommand;
pub use products_command::ProductsCommand;
#[cfg(test)]
pub use products_query::MockProductsQuery;
pub use products_query::ProductsQuery;
