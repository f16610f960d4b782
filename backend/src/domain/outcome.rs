//! Uniform result envelope returned by every use-case.
//!
//! ## Invariants
//! - A failed outcome never carries a payload.
//! - A successful outcome never carries errors.
//!
//! Both hold by construction: fields are private and the only constructors
//! are [`Outcome::ok`] and [`Outcome::failure`].

use serde::Serialize;

/// Success flag, message, error list and optional payload.
///
/// Serialises as `{ "success", "message", "errors", "data" }`, with `data`
/// rendered as `null` when absent.
///
/// # Examples
/// ```
/// use storefront_backend::domain::Outcome;
///
/// let ok = Outcome::ok("Cliente creado exitosamente", 7_i64);
/// assert!(ok.is_success());
/// assert!(ok.errors().is_empty());
///
/// let failed: Outcome<i64> = Outcome::failure("Error al crear el cliente", "boom");
/// assert!(failed.data().is_none());
/// assert_eq!(failed.errors(), ["boom"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    success: bool,
    message: String,
    errors: Vec<String>,
    data: Option<T>,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Failed outcome with a single error string.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: vec![error.into()],
            data: None,
        }
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Human-readable summary.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ordered error strings; empty on success.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Payload, present only on success.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the envelope and return the payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the payload while keeping the envelope shape.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            success: self.success,
            message: self.message,
            errors: self.errors,
            data: self.data.map(f),
        }
    }
}
