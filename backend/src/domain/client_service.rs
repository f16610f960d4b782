//! Client use-cases.
//!
//! Wraps every repository call in an [`Outcome`]; nothing here returns an
//! error to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    ClientRepository, ClientRepositoryError, ClientsCommand, ClientsQuery,
};
use crate::domain::{Client, ClientDraft, Outcome};

const NOT_FOUND_MESSAGE: &str = "Cliente no encontrado";
const NOT_FOUND_ERROR: &str = "No existe un cliente con el ID especificado";
const LOOKUP_FAILED_MESSAGE: &str = "Error al procesar la solicitud";
const CREATED_MESSAGE: &str = "Cliente creado exitosamente";
const CREATE_FAILED_MESSAGE: &str = "Error al crear el cliente";
const CREATE_MISSING_ERROR: &str = "No se pudo insertar el cliente.";
const UPDATED_MESSAGE: &str = "Cliente actualizado exitosamente";
const UPDATE_FAILED_MESSAGE: &str = "Error al actualizar el cliente";
const UPDATE_MISSING_ERROR: &str = "No se pudo actualizar el cliente.";

/// Client service implementing [`ClientsQuery`] and [`ClientsCommand`].
#[derive(Clone)]
pub struct ClientService<R> {
    repo: Arc<R>,
}

impl<R> ClientService<R> {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn write_failure(
    message: &str,
    missing_error: &str,
    error: &ClientRepositoryError,
) -> Outcome<Client> {
    match error {
        ClientRepositoryError::Missing => Outcome::failure(message, missing_error),
        other => Outcome::failure(message, other.detail()),
    }
}

#[async_trait]
impl<R> ClientsQuery for ClientService<R>
where
    R: ClientRepository,
{
    async fn list_clients(&self) -> Outcome<Vec<Client>> {
        match self.repo.list().await {
            Ok(clients) => Outcome::ok("", clients),
            Err(error) => {
                warn!(%error, "client listing failed; answering with an empty list");
                Outcome::ok("", Vec::new())
            }
        }
    }

    async fn find_client(&self, id: i64) -> Outcome<Client> {
        match self.repo.find_by_id(id).await {
            Ok(Some(client)) => Outcome::ok("", client),
            Ok(None) => Outcome::failure(NOT_FOUND_MESSAGE, NOT_FOUND_ERROR),
            Err(error) => {
                warn!(%error, id, "lookup failed");
                Outcome::failure(LOOKUP_FAILED_MESSAGE, error.detail())
            }
        }
    }
}

#[async_trait]
impl<R> ClientsCommand for ClientService<R>
where
    R: ClientRepository,
{
    async fn insert_client(&self, client: Client) -> Outcome<Client> {
        let draft = match ClientDraft::try_from(client) {
            Ok(draft) => draft,
            Err(error) => return Outcome::failure(CREATE_FAILED_MESSAGE, error.to_string()),
        };
        match self.repo.insert(&draft).await {
            Ok(created) => Outcome::ok(CREATED_MESSAGE, created),
            Err(error) => write_failure(CREATE_FAILED_MESSAGE, CREATE_MISSING_ERROR, &error),
        }
    }

    async fn update_client(&self, client: Client) -> Outcome<Client> {
        match self.repo.update(&client).await {
            Ok(updated) => Outcome::ok(UPDATED_MESSAGE, updated),
            Err(error) => write_failure(UPDATE_FAILED_MESSAGE, UPDATE_MISSING_ERROR, &error),
        }
    }
}

#[cfg(test)]
#[path = "client_service_tests.rs"]
mod tests;
