//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL stored-procedure repositories using Diesel.
//!
//! Adapters translate between procedure rows and domain types. They contain
//! no business logic.

pub mod persistence;
