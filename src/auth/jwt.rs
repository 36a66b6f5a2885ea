// JWT token creation and verification
// Bearer tokens carry the acting user id and expire after 8 hours

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{AppError, Result};

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a signed token for a user.
///
/// # Example
/// ```
/// use soccer_manager_api::auth::jwt::create_token;
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), "your-secret-key").expect("valid token");
/// ```
pub fn create_token(user_id: Uuid, secret: &str) -> Result<String> {
    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: user_id,
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("generate token: {e}")))
}

/// Verifies and decodes a token. Invalid or expired tokens map to
/// `Unauthorized`.
///
/// # Example
/// ```
/// use soccer_manager_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "your-secret-key").unwrap();
/// let claims = verify_token(&token, "your-secret-key").expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}
