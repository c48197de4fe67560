pub mod note;
pub mod user;

pub use note::NoteStore;
pub use user::UserStore;

/// Store-level error taxonomy: lookup misses are distinguishable, everything
/// else is opaque to callers.
#[derive(Debug)]
pub enum StoreError {
    NotFound,
    BadHash(argon2::password_hash::Error),
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(inner: sqlx::Error) -> Self {
        match inner {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}
