//! Room passcode hashing and verification
//!
//! Uses Argon2id; passcodes are never stored in clear text.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a room passcode using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_passcode(passcode: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(passcode.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Passcode hashing failed: {e}")))
}

/// Verify a passcode against a stored hash
///
/// # Errors
/// Returns an error if the hash is malformed
pub fn verify_passcode(passcode: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid passcode hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(passcode.as_bytes(), &parsed_hash)
        .is_ok())
}
