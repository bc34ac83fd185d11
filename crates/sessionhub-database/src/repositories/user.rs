//! PostgreSQL-backed identity store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use sessionhub_core::error::{AppError, ErrorKind};
use sessionhub_core::result::AppResult;
use sessionhub_core::traits::IdentityStore;
use sessionhub_entity::user::{CreateUser, User};

use super::UNIQUE_INDEX_FIELDS;

/// Repository for user lookups and inserts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for UserRepository {
    type Principal = User;
    type NewRecord = CreateUser;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn insert(&self, record: &CreateUser) -> AppResult<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (id, name, email, password_hash, role, verified, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) \
             RETURNING id",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.role)
        .bind(record.verified)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("User with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert user", e),
        })
    }

    async fn ensure_unique_index(&self, field: &str) -> AppResult<()> {
        if !UNIQUE_INDEX_FIELDS.contains(&field) {
            return Err(AppError::validation(format!(
                "Unique index not supported on field '{field}'"
            )));
        }

        let ddl = format!("CREATE UNIQUE INDEX IF NOT EXISTS users_{field}_key ON users ({field})");
        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Could not create unique index on '{field}'"),
                    e,
                )
            })?;

        Ok(())
    }
}
