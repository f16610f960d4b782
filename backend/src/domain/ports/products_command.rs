//! Driving port for product writes.

use async_trait::async_trait;

use crate::domain::{Outcome, Product};

/// Use-case port for inserting and updating products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsCommand: Send + Sync {
    async fn insert_product(&self, product: Product) -> Outcome<Product>;

    async fn update_product(&self, product: Product) -> Outcome<Product>;
}
