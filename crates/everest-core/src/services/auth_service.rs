// ============================================================================
// Everest Core - Authentication Service
// File: crates/everest-core/src/services/auth_service.rs
// ============================================================================
//! Login stub: credential equality against a fixed account list.
//!
//! Credentials are opaque strings compared for equality; password hashing
//! is explicitly out of scope for this system.

use tracing::{info, warn};

use crate::error::DomainError;

/// User role, determining the level of access in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserAccount {
    pub username: String,
    password: String,
    pub role: Role,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn check_password(&self, input: &str) -> bool {
        self.password == input
    }
}

/// Authenticates users against the account list. Pre-seeded with the two
/// demo accounts.
#[derive(Debug)]
pub struct Authenticator {
    accounts: Vec<UserAccount>,
}

impl Default for Authenticator {
    fn default() -> Self {
        Self {
            accounts: vec![
                UserAccount::new("admin", "admin123", Role::Admin),
                UserAccount::new("customer", "cust123", Role::Customer),
            ],
        }
    }
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Username match is case-insensitive; the password must match exactly.
    pub fn login(&self, username: &str, password: &str) -> Result<&UserAccount, DomainError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username) && a.check_password(password));
        match account {
            Some(account) => {
                info!("Login successful for: {}", account.username);
                Ok(account)
            }
            None => {
                warn!("Login failed for: {}", username);
                Err(DomainError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_admin_logs_in() {
        let auth = Authenticator::new();
        let account = auth.login("Admin", "admin123").unwrap();
        assert_eq!(account.role, Role::Admin);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let auth = Authenticator::new();
        assert!(matches!(
            auth.login("admin", "wrong"),
            Err(DomainError::InvalidCredentials)
        ));
    }
}
