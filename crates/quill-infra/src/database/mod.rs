//! Database connection management and repository implementations.

mod connections;
pub mod entity;
mod memory;
mod sql_base;
mod sql_repo;

pub use connections::{DatabaseConfig, connect};
pub use memory::{MemoryPostRepository, MemoryUserRepository};
pub use sql_repo::{SqlPostRepository, SqlUserRepository};

#[cfg(test)]
mod tests;
