//! Product HTTP handlers.
//!
//! ```text
//! GET  /Producto/Listar
//! GET  /Producto/Buscar/{id}
//! POST /Producto/Insertar
//! PUT  /Producto/Actualizar/{id}
//! ```

use actix_web::{get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Outcome, Product};
use crate::inbound::http::state::HttpState;

/// Product as exchanged on the wire. `precio` travels as a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(rename = "productoId", alias = "productId", alias = "id")]
    pub id: i64,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "descripcion", alias = "description")]
    pub description: String,
    #[serde(rename = "precio", alias = "price")]
    pub price: Decimal,
    #[serde(rename = "existencia", alias = "stock")]
    pub stock: i32,
}

impl From<Product> for ProductPayload {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
        }
    }
}

impl From<ProductPayload> for Product {
    fn from(value: ProductPayload) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
        }
    }
}

#[get("/Producto/Listar")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> web::Json<Outcome<Vec<ProductPayload>>> {
    let outcome = state.products_query.list_products().await;
    web::Json(outcome.map(|products| products.into_iter().map(ProductPayload::from).collect()))
}

#[get("/Producto/Buscar/{id}")]
pub async fn find_product(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> web::Json<Outcome<ProductPayload>> {
    let outcome = state.products_query.find_product(path.into_inner()).await;
    web::Json(outcome.map(ProductPayload::from))
}

#[post("/Producto/Insertar")]
pub async fn insert_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductPayload>,
) -> web::Json<Outcome<ProductPayload>> {
    let outcome = state.products.insert_product(payload.into_inner().into()).await;
    web::Json(outcome.map(ProductPayload::from))
}

/// Update a product. The path identifier replaces any id in the body.
#[put("/Producto/Actualizar/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ProductPayload>,
) -> web::Json<Outcome<ProductPayload>> {
    let mut product = Product::from(payload.into_inner());
    product.id = path.into_inner();
    let outcome = state.products.update_product(product).await;
    web::Json(outcome.map(ProductPayload::from))
}
