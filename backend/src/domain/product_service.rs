//! Product use-cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    ProductRepository, ProductRepositoryError, ProductsCommand, ProductsQuery,
};
use crate::domain::{Outcome, Product, ProductDraft};

const NOT_FOUND_MESSAGE: &str = "Producto no encontrado";
const NOT_FOUND_ERROR: &str = "No existe un producto con el ID especificado";
const LOOKUP_FAILED_MESSAGE: &str = "Error al procesar la solicitud";
const CREATED_MESSAGE: &str = "Producto creado exitosamente";
const CREATE_FAILED_MESSAGE: &str = "Error al crear el producto";
const CREATE_MISSING_ERROR: &str = "No se pudo insertar el producto.";
const UPDATED_MESSAGE: &str = "Producto actualizado exitosamente";
const UPDATE_FAILED_MESSAGE: &str = "Error al actualizar el producto";
const UPDATE_MISSING_ERROR: &str = "No se pudo actualizar el producto.";

/// Product service implementing [`ProductsQuery`] and [`ProductsCommand`].
#[derive(Clone)]
pub struct ProductService<R> {
    repo: Arc<R>,
}

impl<R> ProductService<R> {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn write_failure(
    message: &str,
    missing_error: &str,
    error: &ProductRepositoryError,
) -> Outcome<Product> {
    match error {
        ProductRepositoryError::Missing => Outcome::failure(message, missing_error),
        other => Outcome::failure(message, other.detail()),
    }
}

#[async_trait]
impl<R> ProductsQuery for ProductService<R>
where
    R: ProductRepository,
{
    async fn list_products(&self) -> Outcome<Vec<Product>> {
        match self.repo.list().await {
            Ok(products) => Outcome::ok("", products),
            Err(error) => {
                warn!(%error, "product listing failed; answering with an empty list");
                Outcome::ok("", Vec::new())
            }
        }
    }

    async fn find_product(&self, id: i64) -> Outcome<Product> {
        match self.repo.find_by_id(id).await {
            Ok(Some(product)) => Outcome::ok("", product),
            Ok(None) => Outcome::failure(NOT_FOUND_MESSAGE, NOT_FOUND_ERROR),
            Err(error) => {
                warn!(%error, id, "lookup failed");
                Outcome::failure(LOOKUP_FAILED_MESSAGE, error.detail())
            }
        }
    }
}

#[async_trait]
impl<R> ProductsCommand for ProductService<R>
where
    R: ProductRepository,
{
    async fn insert_product(&self, product: Product) -> Outcome<Product> {
        let draft = match ProductDraft::try_from(product) {
            Ok(draft) => draft,
            Err(error) => return Outcome::failure(CREATE_FAILED_MESSAGE, error.to_string()),
        };
        match self.repo.insert(&draft).await {
            Ok(created) => Outcome::ok(CREATED_MESSAGE, created),
            Err(error) => write_failure(CREATE_FAILED_MESSAGE, CREATE_MISSING_ERROR, &error),
        }
    }

    async fn update_product(&self, product: Product) -> Outcome<Product> {
        match self.repo.update(&product).await {
            Ok(updated) => Outcome::ok(UPDATED_MESSAGE, updated),
            Err(error) => write_failure(UPDATE_FAILED_MESSAGE, UPDATE_MISSING_ERROR, &error),
        }
    }
}
