//! Driving port for client writes.

use async_trait::async_trait;

use crate::domain::{Client, Outcome};

/// Use-case port for inserting and updating clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientsCommand: Send + Sync {
    /// Insert `client`; its identifier must be `0`.
    async fn insert_client(&self, client: Client) -> Outcome<Client>;

    /// Update the client identified by `client.id`.
    async fn update_client(&self, client: Client) -> Outcome<Client>;
}
