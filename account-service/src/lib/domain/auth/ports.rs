use async_trait::async_trait;
use auth::IssuedToken;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::CreateAccountCommand;
use crate::domain::auth::models::CreatedAccount;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::SubjectIdentity;

/// Port for the authentication domain service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a signed session token.
    ///
    /// # Errors
    /// * `UnknownCredential` - No account matches the email
    /// * `WrongPassword` - Password check failed
    /// * `Token` - Token construction failed
    /// * `Database` - Collaborator lookup failed
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthError>;

    /// Create a new account after a uniqueness check.
    ///
    /// No token is issued here; the caller authenticates separately.
    ///
    /// # Errors
    /// * `EmailTaken` - An account with this email already exists
    /// * `CreationFailed` - The identity provider rejected the account
    /// * `Database` - Collaborator call failed
    async fn register(&self, command: CreateAccountCommand) -> Result<CreatedAccount, AuthError>;
}

/// Identity-management collaborator: account lookup, password verification,
/// and account creation. Implementations own password hashing and the
/// account policy; the auth flow never sees a stored hash.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Look up a subject by email.
    ///
    /// # Returns
    /// Optional subject identity (None if no account matches)
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_email(&self, email: &str) -> Result<Option<SubjectIdentity>, AuthError>;

    /// Check a plaintext password against the subject's stored credentials.
    ///
    /// # Returns
    /// True if the password matches
    ///
    /// # Errors
    /// * `Database` - Credential lookup failed or the stored hash is unusable
    async fn check_password(
        &self,
        subject: &SubjectIdentity,
        password: &str,
    ) -> Result<bool, AuthError>;

    /// Create an account from validated registration data.
    ///
    /// # Errors
    /// * `CreationFailed` - One or more account-policy rules were violated
    /// * `EmailTaken` - A concurrent registration won the email
    /// * `Database` - The insert failed
    async fn create_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<CreatedAccount, AuthError>;
}

/// Direct persistence read used for the registration uniqueness pre-check.
///
/// Kept separate from [`IdentityProvider`]: this models a plain storage query,
/// not an identity-management operation.
#[async_trait]
pub trait AccountDirectory: Send + Sync + 'static {
    /// Look up an existing account by email.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_existing_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubjectIdentity>, AuthError>;
}

/// Role assertions granted to an authenticated subject.
///
/// Extension point for real role lookup; the default implementation grants a
/// fixed list to every subject.
pub trait RoleSource: Send + Sync + 'static {
    fn roles_for(&self, subject: &SubjectIdentity) -> Vec<String>;
}
