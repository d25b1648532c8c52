//! SQL DDL for initializing user storage.

/// PostgreSQL schema:
/// - `id` BIGSERIAL PRIMARY KEY
/// - `name` / `email` TEXT NOT NULL
/// - deliberately no UNIQUE constraint on `email`: duplicate creates
///   yield distinct rows
pub const PG_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL
);
"#;
