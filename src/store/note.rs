use sqlx::SqlitePool;

use crate::models::note::{NewNote, Note};

use super::StoreError;

/// Persistence adapter for the `notes` table.
#[derive(Clone)]
pub struct NoteStore {
    pool: SqlitePool,
}

impl NoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a note and returns the stored row, with id and timestamps
    /// filled in by the insert.
    pub async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let now = chrono::Utc::now();
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (user_id, title, description, due_date, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, user_id, title, description, due_date, created_at, updated_at",
        )
        .bind(note.user_id)
        .bind(&note.title)
        .bind(&note.description)
        .bind(note.due_date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    /// All notes owned by the given user. An empty list is a normal result.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, user_id, title, description, due_date, created_at, updated_at \
             FROM notes WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }
}
