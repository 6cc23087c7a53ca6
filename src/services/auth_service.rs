//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::{roles, DEFAULT_AVATAR_BASE_URL},
    db::{repositories::UserRepository, Store},
    error::{AppError, AppResult},
    models::User,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user.
    ///
    /// The password must already be hashed with [`AuthService::hash_password`].
    pub fn register(
        store: &mut Store,
        config: &Config,
        username: &str,
        email: &str,
        password_hash: String,
        profile_picture: Option<&str>,
    ) -> AppResult<User> {
        if UserRepository::email_exists(store, email) {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let role = if config.catalog.is_admin_email(email) {
            roles::ADMIN
        } else {
            roles::MEMBER
        };

        let profile_picture = profile_picture
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}{}", DEFAULT_AVATAR_BASE_URL, username));

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            profile_picture,
            role: role.to_string(),
            badges: Vec::new(),
            selected_badges: Vec::new(),
            created_at: Utc::now(),
        };

        let user = UserRepository::create(store, user).clone();
        info!(user_id = %user.id, username = %user.username, role = %user.role, "User registered");

        Ok(user)
    }

    /// Look up the account a login attempt targets.
    ///
    /// Returns an owned copy so the caller can release the store before
    /// running [`AuthService::login`].
    pub fn find_login_account(store: &Store, email: &str) -> AppResult<User> {
        UserRepository::find_by_email(store, email)
            .cloned()
            .ok_or(AppError::InvalidCredentials)
    }

    /// Check the password and issue a token. Needs no store access.
    pub fn login(user: User, config: &Config, password: &str) -> AppResult<(User, String, i64)> {
        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        info!(user_id = %user.id, "User logged in");

        Ok((user, access_token, expires_in))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    pub fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_config;

    fn register(store: &mut Store, config: &Config, email: &str) -> AppResult<User> {
        let hash = AuthService::hash_password("demo123")?;
        AuthService::register(store, config, "demo_user", email, hash, None)
    }

    #[test]
    fn test_register_and_login() {
        let mut store = Store::new();
        let config = test_config();

        let user = register(&mut store, &config, "demo@snaprank.com").unwrap();
        assert_eq!(user.role, roles::MEMBER);
        assert!(user.profile_picture.ends_with("seed=demo_user"));

        let account = AuthService::find_login_account(&store, "demo@snaprank.com").unwrap();
        let (logged_in, token, expires_in) =
            AuthService::login(account, &config, "demo123").unwrap();
        assert_eq!(logged_in.id, user.id);
        assert_eq!(expires_in, config.jwt.expiry_hours * 3600);

        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "demo_user");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut store = Store::new();
        let config = test_config();
        register(&mut store, &config, "alex@example.com").unwrap();

        let err = register(&mut store, &config, "ALEX@example.com").unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn test_invalid_credentials() {
        let mut store = Store::new();
        let config = test_config();
        register(&mut store, &config, "sarah@example.com").unwrap();

        let account = AuthService::find_login_account(&store, "sarah@example.com").unwrap();
        let wrong_password = AuthService::login(account, &config, "nope");
        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));

        let unknown = AuthService::find_login_account(&store, "ghost@example.com");
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_password_check_runs_after_store_released() {
        let mut store = Store::new();
        let config = test_config();
        register(&mut store, &config, "emma@example.com").unwrap();

        let account = AuthService::find_login_account(&store, "EMMA@example.com").unwrap();
        drop(store);

        let (user, token, _) = AuthService::login(account, &config, "demo123").unwrap();
        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
    }

    #[test]
    fn test_admin_email_gets_admin_role() {
        let mut store = Store::new();
        let mut config = test_config();
        config.catalog.admin_emails = vec!["admin@snaprank.com".to_string()];

        let admin = register(&mut store, &config, "admin@snaprank.com").unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn test_token_with_wrong_secret_rejected() {
        let mut store = Store::new();
        let config = test_config();
        let user = register(&mut store, &config, "mike@example.com").unwrap();
        let (token, _) = AuthService::generate_access_token(&user, &config).unwrap();

        let err = AuthService::verify_token(&token, "another-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
