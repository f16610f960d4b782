//! Driving port for client reads.
//!
//! HTTP handlers use this port to list and look up clients without touching
//! persistence concerns. Implementations never fail: every failure is folded
//! into the returned [`Outcome`].

use async_trait::async_trait;

use crate::domain::{Client, Outcome};

/// Use-case port for reading clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientsQuery: Send + Sync {
    /// Every client; an unreachable store yields an empty list.
    async fn list_clients(&self) -> Outcome<Vec<Client>>;

    /// One client, or a failed outcome when it does not exist.
    async fn find_client(&self, id: i64) -> Outcome<Client>;
}
