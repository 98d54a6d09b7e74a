//! Registration and login.

use std::sync::Arc;

use tracing::info;

use plaza_auth::jwt::JwtEncoder;
use plaza_auth::password::{PasswordHasher, PasswordPolicy};
use plaza_core::error::AppError;
use plaza_database::repositories::user::UserRepository;
use plaza_entity::user::model::CreateUser;
use plaza_entity::user::{User, UserRole};

/// Handles account registration and credential login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password length policy.
    password_policy: Arc<PasswordPolicy>,
    /// Access token encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterAccount {
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_policy: Arc<PasswordPolicy>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_policy,
            jwt_encoder,
        }
    }

    /// Registers a new client account.
    ///
    /// Username and email uniqueness violations surface as conflicts
    /// from the repository.
    pub async fn register(&self, data: RegisterAccount) -> Result<User, AppError> {
        self.password_policy.validate(&data.password)?;
        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: data.name,
                surname: data.surname,
                username: data.username,
                email: data.email,
                password_hash,
                role: UserRole::Client,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "Account registered");
        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let token = self
            .jwt_encoder
            .generate_token(user.id, &user.username, user.role)?;

        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok((token, user))
    }
}
