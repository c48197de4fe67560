use crate::speller::DEFAULT_SPELLER_URL;

/// Runtime configuration, collected from the environment once at startup and
/// passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub speller_url: String,
}

impl Config {
    /// Reads configuration from the environment. The database URL and the
    /// token signing secret are mandatory; startup fails without them.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
            jwt_secret: std::env::var("SECRET_KEY").expect("SECRET_KEY must be set"),
            speller_url: std::env::var("SPELLER_URL")
                .unwrap_or_else(|_| DEFAULT_SPELLER_URL.into()),
        }
    }
}
