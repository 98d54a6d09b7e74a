//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use plaza_core::config::auth::AuthConfig;
use plaza_core::error::AppError;

use super::claims::Claims;

/// Validates JWT access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::unauthorized(format!("Invalid or expired token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use plaza_entity::user::UserRole;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            password_max_length: 100,
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());

        let user_id = Uuid::new_v4();
        let token = encoder
            .generate_token(user_id, "ana", UserRole::Client)
            .unwrap();

        let claims = decoder.decode_token(&token).unwrap();
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.role, UserRole::Client);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config());
        let mut other = config();
        other.jwt_secret = "different-secret".to_string();
        let decoder = JwtDecoder::new(&other);

        let token = encoder
            .generate_token(Uuid::new_v4(), "ana", UserRole::Client)
            .unwrap();
        assert!(decoder.decode_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert!(decoder.decode_token("not.a.token").is_err());
    }
}
