//! Anvil - forge project scaffolding
//!
//! Talks to a hosted repository-management service: validates a credential
//! pair, browses and searches groups, and submits project-creation requests.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod search;
pub mod session;
pub mod ui;

pub use error::{AnvilError, AnvilResult};
