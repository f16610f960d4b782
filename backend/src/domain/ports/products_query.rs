//! Driving port for product reads.

use async_trait::async_trait;

use crate::domain::{Outcome, Product};

/// Use-case port for reading products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsQuery: Send + Sync {
    /// Every product; an unreachable store yields an empty list.
    async fn list_products(&self) -> Outcome<Vec<Product>>;

    /// One product, or a failed outcome when it does not exist.
    async fn find_product(&self, id: i64) -> Outcome<Product>;
}
