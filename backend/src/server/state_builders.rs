//! Builders for HTTP state from repository adapters or fixtures.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use storefront_backend::domain::ports::{
    FixtureClientRepository, FixtureOrderRepository, FixtureProductRepository,
};
use storefront_backend::domain::{ClientService, OrderService, ProductService};
use storefront_backend::inbound::http::state::HttpState;
use storefront_backend::outbound::persistence::{
    DbPool, DieselClientRepository, DieselOrderRepository, DieselProductRepository,
};

use super::ServerConfig;

fn state_from_pool(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(ClientService::new(Arc::new(DieselClientRepository::new(
            pool.clone(),
        )))),
        Arc::new(ProductService::new(Arc::new(DieselProductRepository::new(
            pool.clone(),
        )))),
        Arc::new(OrderService::new(Arc::new(DieselOrderRepository::new(
            pool.clone(),
        )))),
    )
}

fn fixture_state() -> HttpState {
    HttpState::new(
        Arc::new(ClientService::new(Arc::new(FixtureClientRepository))),
        Arc::new(ProductService::new(Arc::new(FixtureProductRepository))),
        Arc::new(OrderService::new(Arc::new(FixtureOrderRepository))),
    )
}

/// Build the shared HTTP state, using the Diesel adapters when a pool is
/// configured and the fixture repositories otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => state_from_pool(pool),
        None => {
            warn!("no database configured; reads are empty and writes are refused");
            fixture_state()
        }
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::net::SocketAddr;
    use storefront_backend::domain::Client;

    #[rstest]
    #[tokio::test]
    async fn missing_pool_selects_fixture_repositories() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let state = build_http_state(&config);

        let outcome = state.clients_query.find_client(1).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Cliente no encontrado");
        let listed = state.products_query.list_products().await;
        assert_eq!(listed.data().map(Vec::len), Some(0));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_pool_never_acknowledges_writes() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let state = build_http_state(&config);
        let juan = Client {
            id: 0,
            name: "Juan Pérez".to_owned(),
            identity: "0801-1990-12345".to_owned(),
        };

        let inserted = state.clients.insert_client(juan).await;

        assert!(!inserted.is_success());
        assert_eq!(inserted.message(), "Error al crear el cliente");
        assert_eq!(inserted.errors(), ["no database configured"]);
        assert!(inserted.data().is_none());
    }
}
