use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// JWT Claims structure containing user information and token metadata
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// User display name
    pub name: String,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user
    ///
    /// # Arguments
    /// * `user_id` - The user's ID
    /// * `email` - The user's email
    /// * `name` - The user's display name
    /// * `expiration_hours` - Token validity duration in hours
    pub fn new(user_id: Uuid, email: String, name: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email,
            name,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Parses the subject back into a user ID.
    pub fn user_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::Unauthorized {
            message: "Invalid token subject".to_string(),
        })
    }
}

/// Generates a signed JWT token for a user
///
/// # Arguments
/// * `user_id` - The user's ID
/// * `email` - The user's email
/// * `name` - The user's display name
/// * `secret` - The secret key for signing the token
/// * `expiration_hours` - Token validity duration in hours
///
/// # Returns
/// The encoded JWT token string
pub fn generate_token(
    user_id: Uuid,
    email: String,
    name: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, name, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Validates and decodes a JWT token
///
/// # Arguments
/// * `token` - The JWT token string to validate
/// * `secret` - The secret key for verifying the token
///
/// # Returns
/// The decoded claims if the token is valid
pub fn validate_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::Unauthorized {
            message: "Invalid token".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::Unauthorized {
            message: "Invalid token signature".to_string(),
        },
        _ => AppError::Unauthorized {
            message: format!("Token validation failed: {}", e),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing";

    fn test_user_id() -> Uuid {
        Uuid::parse_str("6f2b2f3e-7e5d-4c5a-9f3a-0c5b3b1d8e42").unwrap()
    }

    #[test]
    fn test_generate_token() {
        let token = generate_token(
            test_user_id(),
            "test@example.com".to_string(),
            "Test User".to_string(),
            TEST_SECRET,
            24,
        );

        assert!(token.is_ok());
        let token_str = token.unwrap();
        assert!(!token_str.is_empty());
        assert!(token_str.contains('.'));
    }

    #[test]
    fn test_validate_token_success() {
        let token = generate_token(
            test_user_id(),
            "test@example.com".to_string(),
            "Test User".to_string(),
            TEST_SECRET,
            24,
        )
        .unwrap();

        let claims = validate_token(&token, TEST_SECRET);
        assert!(claims.is_ok());

        let claims = claims.unwrap();
        assert_eq!(claims.sub, test_user_id().to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.name, "Test User");
        assert_eq!(claims.user_id().unwrap(), test_user_id());
    }

    #[test]
    fn test_validate_token_invalid_secret() {
        let token = generate_token(
            test_user_id(),
            "test@example.com".to_string(),
            "Test User".to_string(),
            TEST_SECRET,
            24,
        )
        .unwrap();

        let result = validate_token(&token, "wrong_secret");
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("signature"));
        } else {
            panic!("Expected Unauthorized error");
        }
    }

    #[test]
    fn test_validate_token_invalid_format() {
        let result = validate_token("invalid.token.format", TEST_SECRET);
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("Invalid token") || message.contains("validation"));
        } else {
            panic!("Expected Unauthorized error");
        }
    }

    #[test]
    fn test_expired_token() {
        // Negative hours to create an already expired token
        let token = generate_token(
            test_user_id(),
            "test@example.com".to_string(),
            "Test User".to_string(),
            TEST_SECRET,
            -1,
        )
        .unwrap();

        let result = validate_token(&token, TEST_SECRET);
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("expired"));
        } else {
            panic!("Expected Unauthorized error for expired token");
        }
    }

    #[test]
    fn test_claims_structure() {
        let claims = Claims::new(
            test_user_id(),
            "user@example.com".to_string(),
            "User".to_string(),
            24,
        );

        assert_eq!(claims.sub, test_user_id().to_string());
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.name, "User");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_invalid_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: "user@example.com".to_string(),
            name: "User".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(claims.user_id().is_err());
    }
}
