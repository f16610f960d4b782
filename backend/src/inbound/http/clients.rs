//! Client HTTP handlers.
//!
//! ```text
//! GET  /Cliente/Listar
//! GET  /Cliente/Buscar/{id}
//! POST /Cliente/Insertar          {"clienteId":0,"nombre":"Juan Pérez","identidad":"0801-1990-12345"}
//! PUT  /Cliente/Actualizar/{id}   {"nombre":"Juan Pérez","identidad":"0801-1990-12345"}
//! ```
//!
//! Every handler answers 200 with the outcome envelope; success or failure
//! is read from the body.

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Client, Outcome};
use crate::inbound::http::state::HttpState;

/// Client as exchanged on the wire.
///
/// Missing fields decode to their defaults so that validation is left to the
/// use-case and the stored procedures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientPayload {
    #[serde(rename = "clienteId", alias = "clientId", alias = "id")]
    pub id: i64,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "identidad", alias = "identity")]
    pub identity: String,
}

impl From<Client> for ClientPayload {
    fn from(value: Client) -> Self {
        Self {
            id: value.id,
            name: value.name,
            identity: value.identity,
        }
    }
}

impl From<ClientPayload> for Client {
    fn from(value: ClientPayload) -> Self {
        Self {
            id: value.id,
            name: value.name,
            identity: value.identity,
        }
    }
}

/// List every client.
#[get("/Cliente/Listar")]
pub async fn list_clients(state: web::Data<HttpState>) -> web::Json<Outcome<Vec<ClientPayload>>> {
    let outcome = state.clients_query.list_clients().await;
    web::Json(outcome.map(|clients| clients.into_iter().map(ClientPayload::from).collect()))
}

/// Look up one client by identifier.
#[get("/Cliente/Buscar/{id}")]
pub async fn find_client(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> web::Json<Outcome<ClientPayload>> {
    let outcome = state.clients_query.find_client(path.into_inner()).await;
    web::Json(outcome.map(ClientPayload::from))
}

/// Insert a client; `clienteId` must be `0`.
#[post("/Cliente/Insertar")]
pub async fn insert_client(
    state: web::Data<HttpState>,
    payload: web::Json<ClientPayload>,
) -> web::Json<Outcome<ClientPayload>> {
    let outcome = state.clients.insert_client(payload.into_inner().into()).await;
    web::Json(outcome.map(ClientPayload::from))
}

/// Update a client. The path identifier replaces any id in the body.
#[put("/Cliente/Actualizar/{id}")]
pub async fn update_client(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ClientPayload>,
) -> web::Json<Outcome<ClientPayload>> {
    let mut client = Client::from(payload.into_inner());
    client.id = path.into_inner();
    let outcome = state.clients.update_client(client).await;
    web::Json(outcome.map(ClientPayload::from))
}
