// Password hashing utilities
// Uses bcrypt; hashing failures are internal errors, never credential errors

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::domain::errors::{AppError, Result};

/// Hashes a password with bcrypt at the default cost.
///
/// # Example
/// ```
/// use soccer_manager_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password").expect("valid hash");
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    hash(password, DEFAULT_COST).map_err(|e| AppError::Internal(format!("hash password: {e}")))
}

/// Verifies a password against a bcrypt hash. Returns `Ok(false)` on a
/// mismatch; `Err` only when the hash itself is malformed.
///
/// # Example
/// ```
/// use soccer_manager_api::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("my_password").unwrap();
/// assert!(verify_password("my_password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).map_err(|e| AppError::Internal(format!("verify password: {e}")))
}
