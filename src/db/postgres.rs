use crate::db::models::User;
use crate::db::schema::PG_INIT;
use crate::error::RosterError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct UserStorage {
    pool: PgPool,
}

impl UserStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a bounded pool without touching the network; connections are
    /// established on first use.
    pub fn connect_lazy(url: &str) -> Result<Self, RosterError> {
        let pool = PgPoolOptions::new().max_connections(5).connect_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RosterError> {
        // execute statement by statement (sqlx::query takes a single command)
        for stmt in PG_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert one user row. Returns the assigned row id.
    pub async fn insert(&self, name: &str, email: &str) -> Result<i64, RosterError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(id)
    }

    /// Fetch every user row. No pagination; the table is small by design.
    pub async fn list(&self) -> Result<Vec<User>, RosterError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }
}
