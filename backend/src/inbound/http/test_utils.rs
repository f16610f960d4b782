//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;

use crate::domain::ports::{
    FixtureClientRepository, FixtureOrderRepository, FixtureProductRepository,
};
use crate::domain::{ClientService, OrderService, ProductService};
use crate::inbound::http::error::route_not_found;
use crate::inbound::http::state::HttpState;

/// State wired to the fixture repositories; tests replace individual ports.
pub fn fixture_state() -> HttpState {
    HttpState::new(
        Arc::new(ClientService::new(Arc::new(FixtureClientRepository))),
        Arc::new(ProductService::new(Arc::new(FixtureProductRepository))),
        Arc::new(OrderService::new(Arc::new(FixtureOrderRepository))),
    )
}

/// Send `req` through every storefront route and decode the JSON body.
pub async fn call_json(state: HttpState, req: TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(super::configure)
            .default_service(web::to(route_not_found)),
    )
    .await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).expect("JSON response body");
    (status, body)
}
