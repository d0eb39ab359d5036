//! Database connection management, schema and the SQL repository.

mod config;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod migration;
#[cfg(feature = "postgres")]
mod sql_base;
#[cfg(feature = "postgres")]
pub mod sql_repo;

pub use config::{DB_PORT, DatabaseConfig, DatabaseConfigError};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConnections, DatabaseError};
#[cfg(feature = "postgres")]
pub use migration::Migrator;
#[cfg(feature = "postgres")]
pub use sql_base::SqlBaseRepository;
#[cfg(feature = "postgres")]
pub use sql_repo::SqlPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
