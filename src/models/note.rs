use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A note before it has been persisted; id and timestamps are assigned by the
/// store on insert.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

/// Request body for POST /notes/new. `due_date` is an RFC3339 string,
/// parsed by the handler so a bad date is a 400 rather than a decode error.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub description: String,
    pub due_date: String,
}
