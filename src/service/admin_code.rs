//! One-time admin bootstrap codes.
//!
//! A fresh deployment has no admin account and no out-of-band way to create
//! one. On startup, when no admin exists, a single verification code is
//! generated, logged for the operator, and held in memory with a short TTL.
//! Registering with that code grants the admin flag; the code is consumed on
//! first successful use or invalidated on expiry.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for admin codes in seconds.
const ADMIN_CODE_TTL_SECONDS: u64 = 60;

/// Stored admin code with expiration timestamp.
#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(ADMIN_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing temporary admin codes used for initial admin setup.
///
/// At most one code is active at a time; generating a new code replaces any
/// previous one. Validation consumes the code so it can be used exactly once.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random admin code and stores it with a 60-second TTL.
    ///
    /// Any previously generated code is replaced. The returned code is meant
    /// to be logged for the operator, not exposed over the API.
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let admin_code = AdminCode::new(code_string.clone());
        *self.code.write().await = Some(admin_code);
        code_string
    }

    /// Validates the provided code against the stored admin code.
    ///
    /// A successful match consumes the code; an expired code is dropped and
    /// fails validation.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a 32-character random alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if an admin code currently exists and is valid (not expired).
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generates_a_32_character_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(service.has_valid_code().await);
    }

    #[tokio::test]
    async fn correct_code_validates_once() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        // Consumed on first use
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    #[tokio::test]
    async fn wrong_code_leaves_stored_code_intact() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.has_valid_code().await);
        assert!(service.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn regenerating_replaces_previous_code() {
        let service = AdminCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }
}
