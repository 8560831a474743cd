use std::sync::Arc;

use async_trait::async_trait;
use auth::ClaimSet;
use auth::IssuedToken;
use auth::TokenIssuer;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::CreateAccountCommand;
use crate::domain::auth::models::CreatedAccount;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::SubjectIdentity;
use crate::domain::auth::ports::AccountDirectory;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::IdentityProvider;
use crate::domain::auth::ports::RoleSource;

/// Grants the same fixed role list to every subject.
///
/// Stand-in until real authorization data exists; swap for a lookup-backed
/// [`RoleSource`] without touching the login flow.
pub struct StaticRoles(Vec<String>);

impl StaticRoles {
    pub fn new(roles: Vec<String>) -> Self {
        Self(roles)
    }
}

impl Default for StaticRoles {
    fn default() -> Self {
        Self(auth::jwt::DEFAULT_ROLES.iter().map(|r| r.to_string()).collect())
    }
}

impl RoleSource for StaticRoles {
    fn roles_for(&self, _subject: &SubjectIdentity) -> Vec<String> {
        self.0.clone()
    }
}

/// Domain service implementation for authentication and registration.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<IP, AD, RS>
where
    IP: IdentityProvider,
    AD: AccountDirectory,
    RS: RoleSource,
{
    identity: Arc<IP>,
    directory: Arc<AD>,
    issuer: Arc<TokenIssuer>,
    roles: Arc<RS>,
}

impl<IP, AD, RS> AuthService<IP, AD, RS>
where
    IP: IdentityProvider,
    AD: AccountDirectory,
    RS: RoleSource,
{
    /// Create a new auth service with injected collaborators.
    ///
    /// # Arguments
    /// * `identity` - Identity-management implementation (lookup, password check, create)
    /// * `directory` - Direct persistence read for the uniqueness pre-check
    /// * `issuer` - Configured token issuer
    /// * `roles` - Role grants for authenticated subjects
    pub fn new(identity: Arc<IP>, directory: Arc<AD>, issuer: Arc<TokenIssuer>, roles: Arc<RS>) -> Self {
        Self {
            identity,
            directory,
            issuer,
            roles,
        }
    }
}

#[async_trait]
impl<IP, AD, RS> AuthServicePort for AuthService<IP, AD, RS>
where
    IP: IdentityProvider,
    AD: AccountDirectory,
    RS: RoleSource,
{
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthError> {
        let subject = self
            .identity
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::UnknownCredential)?;

        if !self
            .identity
            .check_password(&subject, &credentials.password)
            .await?
        {
            return Err(AuthError::WrongPassword);
        }

        // Email claim carries the address as submitted, not re-read from the
        // store; the subject claim carries the stored identifier.
        let claim_set = ClaimSet::new(&subject.id, &credentials.email)
            .with_roles(self.roles.roles_for(&subject));

        Ok(self.issuer.issue(&claim_set)?)
    }

    async fn register(&self, command: CreateAccountCommand) -> Result<CreatedAccount, AuthError> {
        if self
            .directory
            .find_existing_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        // The pre-check and the insert are separate round trips; the unique
        // email constraint in storage decides concurrent registrations.
        self.identity.create_account(command).await
    }
}
