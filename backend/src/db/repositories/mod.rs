//! Repository implementations module.
//!
//! - `local`: In-memory implementation for tests, local development and
//!   CSV-bootstrapped catalogs
pub mod local;

pub use local::LocalRepository;
