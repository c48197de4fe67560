use argon2::{Argon2, PasswordHash, PasswordVerifier};
use sqlx::SqlitePool;

use crate::models::user::User;

use super::StoreError;

/// Persistence adapter for the `users` table.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_name(&self, username: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user and returns the stored row. The id and creation
    /// timestamp come back from the insert itself so the caller never sees
    /// state that differs from what was persisted.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let now = chrono::Utc::now();
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?) \
             RETURNING id, username, password_hash, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Looks up a user by name and verifies the password against the stored
    /// hash in one call, so a missing user and a wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let user = self.find_by_name(username).await?;

        let parsed_hash = PasswordHash::new(&user.password_hash).map_err(StoreError::BadHash)?;
        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Err(StoreError::NotFound);
        }

        Ok(user)
    }
}
