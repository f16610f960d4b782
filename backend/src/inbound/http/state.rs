//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ClientsCommand, ClientsQuery, OrdersCommand, ProductsCommand, ProductsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clients_query: Arc<dyn ClientsQuery>,
    pub clients: Arc<dyn ClientsCommand>,
    pub products_query: Arc<dyn ProductsQuery>,
    pub products: Arc<dyn ProductsCommand>,
    pub orders: Arc<dyn OrdersCommand>,
}

impl HttpState {
    /// Build state from services implementing both halves of each entity's
    /// ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use storefront_backend::domain::ports::{
    ///     FixtureClientRepository, FixtureOrderRepository, FixtureProductRepository,
    /// };
    /// use storefront_backend::domain::{ClientService, OrderService, ProductService};
    /// use storefront_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(ClientService::new(Arc::new(FixtureClientRepository))),
    ///     Arc::new(ProductService::new(Arc::new(FixtureProductRepository))),
    ///     Arc::new(OrderService::new(Arc::new(FixtureOrderRepository))),
    /// );
    /// let _orders = state.orders.clone();
    /// ```
    pub fn new<C, P, O>(clients: Arc<C>, products: Arc<P>, orders: Arc<O>) -> Self
    where
        C: ClientsQuery + ClientsCommand + 'static,
        P: ProductsQuery + ProductsCommand + 'static,
        O: OrdersCommand + 'static,
    {
        Self {
            clients_query: clients.clone(),
            clients,
            products_query: products.clone(),
            products,
            orders,
        }
    }
}
