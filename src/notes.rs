use crate::error::AppError;
use crate::models::note::{NewNote, Note};
use crate::speller::SpellerClient;
use crate::store::NoteStore;

/// Languages the speller checks note descriptions against.
const SPELL_LANG: &str = "ru,en";

/// Note creation and listing. Creation runs the description through the
/// speller first; nothing is persisted unless the check comes back clean.
#[derive(Clone)]
pub struct NoteService {
    store: NoteStore,
    speller: SpellerClient,
}

impl NoteService {
    pub fn new(store: NoteStore, speller: SpellerClient) -> Self {
        Self { store, speller }
    }

    pub async fn create(&self, note: NewNote) -> Result<Note, AppError> {
        let issues = self
            .speller
            .check_text(&note.description, SPELL_LANG, 0)
            .await?;

        if !issues.is_empty() {
            tracing::info!(
                "Rejecting note for user {}: {} spelling issue(s)",
                note.user_id,
                issues.len()
            );
            return Err(AppError::Spelling(issues));
        }

        let created = self.store.create(note).await?;
        tracing::info!("Note created: id {}", created.id);
        Ok(created)
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<Note>, AppError> {
        let notes = self.store.list_for_user(user_id).await?;
        Ok(notes)
    }
}
