pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notes;
pub mod rest;
pub mod speller;
pub mod store;

use sqlx::SqlitePool;

use auth::AuthService;
use config::Config;
use notes::NoteService;
use speller::SpellerClient;
use store::{NoteStore, UserStore};

/// Shared application state: the two services, composed explicitly from
/// their stores and the speller client.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub notes: NoteService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self, reqwest::Error> {
        let speller = SpellerClient::new(&config.speller_url)?;

        Ok(Self {
            auth: AuthService::new(UserStore::new(pool.clone()), &config.jwt_secret),
            notes: NoteService::new(NoteStore::new(pool), speller),
        })
    }
}
