//! Port for product persistence.

use async_trait::async_trait;

use crate::domain::{Product, ProductDraft};

use super::{NO_DATABASE, define_port_error};

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
        /// The procedure answered with a sentinel error row.
        Rejected { code: i32, message: String } => "{message}",
        /// The procedure returned no row at all.
        Missing => "product procedure returned no row",
    }
}

impl ProductRepositoryError {
    /// Underlying database text, without the adapter prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Connection { message }
            | Self::Query { message }
            | Self::Rejected { message, .. } => message.clone(),
            Self::Missing => self.to_string(),
        }
    }
}

/// Port for product storage and retrieval.
///
/// Mirrors [`super::ClientRepository`]; price and stock rules are enforced
/// by the procedures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductRepositoryError>;

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError>;

    async fn update(&self, product: &Product) -> Result<Product, ProductRepositoryError>;
}

/// Fixture repository for running without a database.
///
/// Reads are empty; writes fail with a connection error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductRepository;

#[async_trait]
impl ProductRepository for FixtureProductRepository {
    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, _draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        Err(ProductRepositoryError::connection(NO_DATABASE))
    }

    async fn update(&self, _product: &Product) -> Result<Product, ProductRepositoryError> {
        Err(ProductRepositoryError::connection(NO_DATABASE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn fixture_update_is_refused() {
        let product = Product {
            id: 5,
            name: "Monitor".to_owned(),
            description: "Monitor 24 pulgadas".to_owned(),
            price: dec!(150.00),
            stock: 8,
        };

        let err = FixtureProductRepository
            .update(&product)
            .await
            .expect_err("fixture cannot store");

        assert!(matches!(err, ProductRepositoryError::Connection { .. }));
    }

    #[tokio::test]
    async fn fixture_list_is_empty() {
        let products = FixtureProductRepository.list().await.expect("fixture list");
        assert!(products.is_empty());
    }
}
