use auth::TokenError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for authentication and registration operations.
///
/// The lookup and password failures deliberately carry distinct, client-visible
/// messages; the wording is part of the public contract existing clients key
/// on, even though it discloses whether an account exists.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No account matches the submitted email.
    #[error("Wrong credential.")]
    UnknownCredential,

    /// The account exists but the password does not match.
    #[error("Wrong password.")]
    WrongPassword,

    /// Registration uniqueness violation.
    #[error("Email already used by another.")]
    EmailTaken,

    /// The identity provider rejected the account, one message per violated
    /// rule (password policy, username charset, ...).
    #[error("Account creation failed: {}", .0.join(" "))]
    CreationFailed(Vec<String>),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),
}
