//! # Summit Infrastructure
//!
//! Concrete implementations of the storage port defined in `summit-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM, with migrations run on start

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::InMemoryPostRepository;

// Re-exports - Database
pub use database::{DatabaseConfig, DatabaseConfigError};
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, DatabaseError, Migrator, SqlPostRepository};
