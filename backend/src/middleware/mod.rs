//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently
//! correlation identifiers and request logging.

pub mod trace;

pub use trace::Trace;
