//! # Summit Core
//!
//! The domain layer of the Summit Social posts API.
//! This crate contains the `Post` model and the storage ports, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
