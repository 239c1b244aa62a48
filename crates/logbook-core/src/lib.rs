//! Core types and trait definitions for the Logbook login record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod login;
pub mod store;

pub use error::{Error, Result};
