//! PostgreSQL-backed `ClientRepository` calling the client procedures.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Text};
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{Client, ClientDraft};

use super::diesel_error_mapping;
use super::pool::{DbPool, PoolError};
use super::procedures::{FIND_CLIENT, INSERT_CLIENT, LIST_CLIENTS, UPDATE_CLIENT};
use super::rows::{ClientListRow, ClientRow, ProcedureFailure, first_outcome};

/// Diesel-backed implementation of the `ClientRepository` port.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClientRepositoryError {
    diesel_error_mapping::map_pool_error(error, ClientRepositoryError::connection)
}

fn diesel_error(
    procedure: &'static str,
) -> impl FnOnce(diesel::result::Error) -> ClientRepositoryError {
    move |error| {
        diesel_error_mapping::map_diesel_error(
            error,
            procedure,
            ClientRepositoryError::query,
            ClientRepositoryError::connection,
        )
    }
}

/// Map the decoded first row of a write procedure to the port result.
fn write_result(
    procedure: &'static str,
    outcome: Option<Result<Client, ProcedureFailure>>,
) -> Result<Client, ClientRepositoryError> {
    match outcome {
        Some(Ok(client)) => Ok(client),
        Some(Err(ProcedureFailure::Rejected { code, message })) => {
            warn!(procedure, code, %message, "client procedure rejected the request");
            Err(ClientRepositoryError::rejected(code, message))
        }
        Some(Err(failure @ ProcedureFailure::NullColumn { .. })) => {
            Err(ClientRepositoryError::query(failure.to_string()))
        }
        None => Err(ClientRepositoryError::missing()),
    }
}

/// Map the decoded first row of the lookup procedure to the port result.
///
/// A sentinel row means "not found"; only malformed rows are errors.
fn find_result(
    outcome: Option<Result<Client, ProcedureFailure>>,
) -> Result<Option<Client>, ClientRepositoryError> {
    match outcome {
        Some(Ok(client)) => Ok(Some(client)),
        Some(Err(ProcedureFailure::Rejected { .. })) | None => Ok(None),
        Some(Err(failure @ ProcedureFailure::NullColumn { .. })) => {
            Err(ClientRepositoryError::query(failure.to_string()))
        }
    }
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ClientListRow> = sql_query(LIST_CLIENTS)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_clientes_listar"))?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ClientRow> = sql_query(FIND_CLIENT)
            .bind::<BigInt, _>(id)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_cliente_buscar"))?;
        find_result(first_outcome(rows))
    }

    async fn insert(&self, draft: &ClientDraft) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ClientRow> = sql_query(INSERT_CLIENT)
            .bind::<Text, _>(&draft.name)
            .bind::<Text, _>(&draft.identity)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_cliente_insertar"))?;
        write_result("sp_cliente_insertar", first_outcome(rows))
    }

    async fn update(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ClientRow> = sql_query(UPDATE_CLIENT)
            .bind::<BigInt, _>(client.id)
            .bind::<Text, _>(&client.name)
            .bind::<Text, _>(&client.identity)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_cliente_actualizar"))?;
        write_result("sp_cliente_actualizar", first_outcome(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn juan() -> Client {
        Client {
            id: 31,
            name: "Juan Pérez".to_owned(),
            identity: "0801-1990-12345".to_owned(),
        }
    }

    #[rstest]
    fn write_result_maps_sentinel_to_rejection() {
        let outcome = Some(Err(ProcedureFailure::Rejected {
            code: 2,
            message: "El nombre debe tener entre 3 y 100 caracteres".to_owned(),
        }));

        assert_eq!(
            write_result("sp_cliente_insertar", outcome),
            Err(ClientRepositoryError::rejected(
                2_i32,
                "El nombre debe tener entre 3 y 100 caracteres"
            ))
        );
    }

    #[rstest]
    fn write_result_maps_empty_result_to_missing() {
        assert_eq!(
            write_result("sp_cliente_actualizar", None),
            Err(ClientRepositoryError::Missing)
        );
    }

    #[rstest]
    fn write_result_passes_record_through() {
        assert_eq!(write_result("sp_cliente_insertar", Some(Ok(juan()))), Ok(juan()));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Err(ProcedureFailure::Rejected { code: 1, message: "no existe".to_owned() })))]
    fn find_result_treats_sentinel_and_empty_as_not_found(
        #[case] outcome: Option<Result<Client, ProcedureFailure>>,
    ) {
        assert_eq!(find_result(outcome), Ok(None));
    }

    #[rstest]
    fn find_result_reports_null_columns_as_query_errors() {
        let outcome = Some(Err(ProcedureFailure::NullColumn { column: "nombre" }));
        assert_eq!(
            find_result(outcome),
            Err(ClientRepositoryError::query(
                "procedure returned null for column nombre"
            ))
        );
    }
}
