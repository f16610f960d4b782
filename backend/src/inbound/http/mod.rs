//! HTTP inbound adapter exposing the storefront REST endpoints.
//!
//! Routes keep the `/Entidad/Accion` shape existing clients call. Domain
//! failures travel inside the 200 outcome envelope; only transport problems
//! (undecodable bodies, non-numeric identifiers, unknown routes) use
//! non-2xx statuses and the [`crate::domain::Error`] payload.

pub mod clients;
pub mod error;
pub mod health;
pub mod orders;
pub mod products;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

/// Register extractor error handlers and every entity route.
///
/// Health checks and the fallback route are registered by the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(clients::list_clients)
        .service(clients::find_client)
        .service(clients::insert_client)
        .service(clients::update_client)
        .service(products::list_products)
        .service(products::find_product)
        .service(products::insert_product)
        .service(products::update_product)
        .service(orders::create_order);
}
