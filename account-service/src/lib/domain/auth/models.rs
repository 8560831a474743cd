use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::EmailError;

/// Login credentials as submitted by the client.
///
/// Transient, constructed per login call, never persisted. The email is kept
/// as a raw string: an address that parses but matches no account and an
/// address that never could are both answered with the same lookup failure.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Evidence of a successful account lookup.
///
/// Owned by the identity provider; the auth flow only reads it. The id is an
/// opaque string as far as this crate is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectIdentity {
    pub id: String,
    pub email: String,
}

/// Command to create a new account, built from an already-validated
/// registration form.
#[derive(Debug)]
pub struct CreateAccountCommand {
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
}

impl CreateAccountCommand {
    pub fn new(username: String, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Outcome of a successful account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_accepts_valid_address() {
        let email = EmailAddress::new("user@example.com".to_string());
        assert_eq!(email.unwrap().as_str(), "user@example.com");
    }

    #[test]
    fn test_email_address_rejects_invalid_address() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }
}
