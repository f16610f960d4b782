//! Diesel and pool error mapping shared by the stored-procedure adapters.
//!
//! Database errors keep the server's message verbatim: procedures raise
//! business errors as exceptions too, and callers surface that text.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through a repository's connection constructor.
pub(super) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    connection(error.into_message())
}

/// Map a Diesel failure through a repository's query/connection constructors.
///
/// Closed connections become connection errors; everything else becomes a
/// query error carrying the database message.
pub(super) fn map_diesel_error<E>(
    error: DieselError,
    procedure: &str,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(procedure, message = info.message(), "database connection closed");
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(procedure, ?kind, message = info.message(), "procedure call failed");
            query(info.message().to_owned())
        }
        other => {
            let message = other.to_string();
            debug!(procedure, %message, "diesel operation failed");
            query(message)
        }
    }
}
