//! PostgreSQL-backed `ProductRepository` calling the product procedures.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Numeric, Text};
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft};

use super::diesel_error_mapping;
use super::pool::{DbPool, PoolError};
use super::procedures::{FIND_PRODUCT, INSERT_PRODUCT, LIST_PRODUCTS, UPDATE_PRODUCT};
use super::rows::{ProcedureFailure, ProductListRow, ProductRow, first_outcome};

/// Diesel-backed implementation of the `ProductRepository` port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    diesel_error_mapping::map_pool_error(error, ProductRepositoryError::connection)
}

fn diesel_error(
    procedure: &'static str,
) -> impl FnOnce(diesel::result::Error) -> ProductRepositoryError {
    move |error| {
        diesel_error_mapping::map_diesel_error(
            error,
            procedure,
            ProductRepositoryError::query,
            ProductRepositoryError::connection,
        )
    }
}

fn write_result(
    procedure: &'static str,
    outcome: Option<Result<Product, ProcedureFailure>>,
) -> Result<Product, ProductRepositoryError> {
    match outcome {
        Some(Ok(product)) => Ok(product),
        Some(Err(ProcedureFailure::Rejected { code, message })) => {
            warn!(procedure, code, %message, "product procedure rejected the request");
            Err(ProductRepositoryError::rejected(code, message))
        }
        Some(Err(failure @ ProcedureFailure::NullColumn { .. })) => {
            Err(ProductRepositoryError::query(failure.to_string()))
        }
        None => Err(ProductRepositoryError::missing()),
    }
}

fn find_result(
    outcome: Option<Result<Product, ProcedureFailure>>,
) -> Result<Option<Product>, ProductRepositoryError> {
    match outcome {
        Some(Ok(product)) => Ok(Some(product)),
        Some(Err(ProcedureFailure::Rejected { .. })) | None => Ok(None),
        Some(Err(failure @ ProcedureFailure::NullColumn { .. })) => {
            Err(ProductRepositoryError::query(failure.to_string()))
        }
    }
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductListRow> = sql_query(LIST_PRODUCTS)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_productos_listar"))?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductRow> = sql_query(FIND_PRODUCT)
            .bind::<BigInt, _>(id)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_productos_buscar"))?;
        find_result(first_outcome(rows))
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductRow> = sql_query(INSERT_PRODUCT)
            .bind::<Text, _>(&draft.name)
            .bind::<Text, _>(&draft.description)
            .bind::<Numeric, _>(draft.price)
            .bind::<Integer, _>(draft.stock)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_producto_insertar"))?;
        write_result("sp_producto_insertar", first_outcome(rows))
    }

    async fn update(&self, product: &Product) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductRow> = sql_query(UPDATE_PRODUCT)
            .bind::<BigInt, _>(product.id)
            .bind::<Text, _>(&product.name)
            .bind::<Text, _>(&product.description)
            .bind::<Numeric, _>(product.price)
            .bind::<Integer, _>(product.stock)
            .load(&mut conn)
            .await
            .map_err(diesel_error("sp_producto_actualizar"))?;
        write_result("sp_producto_actualizar", first_outcome(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rejected_update_keeps_code_and_message() {
        let outcome = Some(Err(ProcedureFailure::Rejected {
            code: 4,
            message: "La existencia no puede ser negativa".to_owned(),
        }));

        let error = write_result("sp_producto_actualizar", outcome).expect_err("rejected");
        assert_eq!(
            error,
            ProductRepositoryError::Rejected {
                code: 4,
                message: "La existencia no puede ser negativa".to_owned(),
            }
        );
    }

    #[rstest]
    fn empty_insert_result_is_missing() {
        assert_eq!(
            write_result("sp_producto_insertar", None),
            Err(ProductRepositoryError::Missing)
        );
    }

    #[rstest]
    fn sentinel_lookup_is_not_found() {
        let outcome = Some(Err(ProcedureFailure::Rejected {
            code: 1,
            message: "Producto no existe".to_owned(),
        }));
        assert_eq!(find_result(outcome), Ok(None));
    }
}
