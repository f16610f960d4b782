//! Product records.

use rust_decimal::Decimal;

/// Product snapshot as returned by the database.
///
/// Price positivity and stock bounds are enforced by the stored procedures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Unit price with two decimal places.
    pub price: Decimal,
    /// Units in stock; decremented externally when orders are created.
    pub stock: i32,
}

/// Insert input: a product without identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

/// Structural validation failures for product inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProductValidationError {
    #[error("El productoId debe ser 0 para un nuevo producto.")]
    IdNotZero,
}

impl TryFrom<Product> for ProductDraft {
    type Error = ProductValidationError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        if product.id != 0 {
            return Err(ProductValidationError::IdNotZero);
        }
        Ok(Self {
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        })
    }
}
