//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `postgres.rs`: pooled storage accessor

pub mod models;
pub mod postgres;
pub mod schema;

pub use models::User;
pub use postgres::UserStorage;
