//! Port for client persistence.
//!
//! Every method maps to exactly one stored procedure. Business rules (name
//! length, identity format and uniqueness) live in the procedures and surface
//! here as [`ClientRepositoryError::Rejected`].

use async_trait::async_trait;

use crate::domain::{Client, ClientDraft};

use super::{NO_DATABASE, define_port_error};

define_port_error! {
    /// Errors raised by client repository adapters.
    pub enum ClientRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "client repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "client repository query failed: {message}",
        /// The procedure answered with a sentinel error row.
        Rejected { code: i32, message: String } => "{message}",
        /// The procedure returned no row at all.
        Missing => "client procedure returned no row",
    }
}

impl ClientRepositoryError {
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

/// Port for client storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Every client, in the order the procedure yields them.
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError>;

    /// Fetch one client.
    ///
    /// Returns `None` when the procedure yields no row or a sentinel row.
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ClientRepositoryError>;

    /// Insert a client and return it with its generated identifier.
    async fn insert(&self, draft: &ClientDraft) -> Result<Client, ClientRepositoryError>;

    /// Replace the mutable fields of `client` (matched by id).
    async fn update(&self, client: &Client) -> Result<Client, ClientRepositoryError>;
}

/// Fixture repository for running without a database.
///
/// Lists are empty and lookups miss. Writes fail with a connection error so
/// nothing is acknowledged that was not stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClientRepository;

#[async_trait]
impl ClientRepository for FixtureClientRepository {
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Client>, ClientRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, _draft: &ClientDraft) -> Result<Client, ClientRepositoryError> {
        Err(ClientRepositoryError::connection(NO_DATABASE))
    }

    async fn update(&self, _client: &Client) -> Result<Client, ClientRepositoryError> {
        Err(ClientRepositoryError::connection(NO_DATABASE))
    }
}
