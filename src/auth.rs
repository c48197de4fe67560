use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::user::User;
use crate::store::{StoreError, UserStore};

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: i64,
    sub: String, // username
    exp: usize,
}

/// Identity extracted from a validated token, carried through the request as
/// a typed value.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
}

/// Registration, token issuance, and token validation. Holds the signing keys
/// built from the secret injected at construction; nothing here reads the
/// environment.
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    pub fn new(users: UserStore, secret: &str) -> Self {
        // HS256 only: tokens signed with any other algorithm family are
        // rejected outright. `exp` is a required claim and gets no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            users,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Creates a new user. An existing user with the same name is a conflict;
    /// the lookup hit alone decides that, no password comparison happens.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        match self.users.find_by_name(username).await {
            Ok(_) => {
                tracing::info!("Registration refused, username taken: {}", username);
                return Err(AppError::UserExists);
            }
            Err(StoreError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        let user = self.users.create(username, &password_hash).await?;
        tracing::info!("User created: {}", user.username);
        Ok(user)
    }

    /// Verifies the credentials through the store and returns a signed token
    /// asserting `{id, sub, exp = now + 24h}`. A missing user and a wrong
    /// password both collapse into the same login failure.
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .authenticate(username, password)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => AppError::LoginFail,
                other => other.into(),
            })?;

        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
            .expect("valid timestamp")
            .timestamp();

        let claims = Claims {
            id: user.id,
            sub: user.username,
            exp: expiration as usize,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        tracing::debug!("Token issued for user id {}", claims.id);
        Ok(token)
    }

    /// Verifies the signature and expiration of a token and returns the
    /// asserted identity. All rejection reasons look the same to the caller.
    pub fn validate_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::Unauthenticated
        })?;

        Ok(AuthUser {
            id: data.claims.id,
            name: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    const SECRET: &str = "test-secret";

    async fn test_service() -> AuthService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        AuthService::new(UserStore::new(pool), SECRET)
    }

    fn token_with(claims: &Claims, secret: &str, alg: Algorithm) -> String {
        encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> usize {
        (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as usize
    }

    #[tokio::test]
    async fn issued_token_validates_to_same_identity() {
        let auth = test_service().await;
        let user = auth.register("alice", "pw").await.unwrap();

        let token = auth.issue_token("alice", "pw").await.unwrap();
        let identity = auth.validate_token(&token).unwrap();

        assert_eq!(identity.id, user.id);
        assert_eq!(identity.name, "alice");
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let auth = test_service().await;
        auth.register("alice", "pw").await.unwrap();

        let err = auth.register("alice", "other").await.unwrap_err();
        assert!(matches!(err, AppError::UserExists));
    }

    #[tokio::test]
    async fn wrong_password_fails_login() {
        let auth = test_service().await;
        auth.register("alice", "pw").await.unwrap();

        let err = auth.issue_token("alice", "nope").await.unwrap_err();
        assert!(matches!(err, AppError::LoginFail));
    }

    #[tokio::test]
    async fn unknown_user_fails_login() {
        let auth = test_service().await;

        let err = auth.issue_token("nobody", "pw").await.unwrap_err();
        assert!(matches!(err, AppError::LoginFail));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let auth = test_service().await;
        let claims = Claims {
            id: 1,
            sub: "alice".into(),
            exp: (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp() as usize,
        };
        let token = token_with(&claims, SECRET, Algorithm::HS256);

        assert!(matches!(
            auth.validate_token(&token).unwrap_err(),
            AppError::Unauthenticated
        ));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let auth = test_service().await;
        let claims = Claims {
            id: 1,
            sub: "alice".into(),
            exp: future_exp(),
        };
        let token = token_with(&claims, "some-other-secret", Algorithm::HS256);

        assert!(matches!(
            auth.validate_token(&token).unwrap_err(),
            AppError::Unauthenticated
        ));
    }

    #[tokio::test]
    async fn token_with_other_algorithm_is_rejected() {
        let auth = test_service().await;
        let claims = Claims {
            id: 1,
            sub: "alice".into(),
            exp: future_exp(),
        };
        // Same secret, different HMAC variant: rejected by the HS256-only
        // validation.
        let token = token_with(&claims, SECRET, Algorithm::HS384);

        assert!(matches!(
            auth.validate_token(&token).unwrap_err(),
            AppError::Unauthenticated
        ));
    }

    #[tokio::test]
    async fn token_without_expiration_is_rejected() {
        #[derive(Serialize)]
        struct NoExp {
            id: i64,
            sub: String,
        }

        let auth = test_service().await;
        let token = encode(
            &Header::default(),
            &NoExp {
                id: 1,
                sub: "alice".into(),
            },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            auth.validate_token(&token).unwrap_err(),
            AppError::Unauthenticated
        ));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let auth = test_service().await;
        assert!(matches!(
            auth.validate_token("not.a.token").unwrap_err(),
            AppError::Unauthenticated
        ));
    }
}
