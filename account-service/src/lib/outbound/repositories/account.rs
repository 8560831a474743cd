use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::CreateAccountCommand;
use crate::domain::auth::models::CreatedAccount;
use crate::domain::auth::models::SubjectIdentity;
use crate::domain::auth::ports::AccountDirectory;
use crate::domain::auth::ports::IdentityProvider;

const PASSWORD_MIN_LENGTH: usize = 6;

/// Postgres-backed identity provider.
///
/// Owns password hashing and the account policy; callers only see subject
/// identities and policy verdicts, never stored hashes.
pub struct PostgresAccountRepository {
    pool: PgPool,
    password_hasher: auth::PasswordHasher,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn lookup_by_email(&self, email: &str) -> Result<Option<SubjectIdentity>, AuthError> {
        let row: Option<(Uuid, String)> =
            sqlx::query_as("SELECT id, email FROM accounts WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(row.map(|(id, email)| SubjectIdentity {
            id: id.to_string(),
            email,
        }))
    }
}

/// Check a candidate account against the registration policy.
///
/// Returns every violated rule so the client sees the full list at once.
fn validate_account(command: &CreateAccountCommand) -> Vec<String> {
    let mut errors = Vec::new();
    let password = &command.password;

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.push(format!(
            "Passwords must be at least {PASSWORD_MIN_LENGTH} characters."
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Passwords must have at least one digit ('0'-'9').".to_string());
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        errors.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
    }
    if password.chars().all(|c| c.is_alphanumeric()) {
        errors.push("Passwords must have at least one non alphanumeric character.".to_string());
    }
    if !command
        .username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | '@' | '+'))
    {
        errors.push(format!(
            "User name '{}' is invalid, can only contain letters or digits.",
            command.username
        ));
    }

    errors
}

#[async_trait]
impl IdentityProvider for PostgresAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<SubjectIdentity>, AuthError> {
        self.lookup_by_email(email).await
    }

    async fn check_password(
        &self,
        subject: &SubjectIdentity,
        password: &str,
    ) -> Result<bool, AuthError> {
        let id = Uuid::parse_str(&subject.id)
            .map_err(|e| AuthError::Database(format!("Malformed subject id: {}", e)))?;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM accounts WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AuthError::Database(e.to_string()))?;

        match row {
            Some((hash,)) => self
                .password_hasher
                .verify(password, &hash)
                .map_err(|e| AuthError::Database(format!("Stored hash rejected: {}", e))),
            None => Ok(false),
        }
    }

    async fn create_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<CreatedAccount, AuthError> {
        let errors = validate_account(&command);
        if !errors.is_empty() {
            return Err(AuthError::CreationFailed(errors));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Database(format!("Password hashing failed: {}", e)))?;

        let id = Uuid::new_v4();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&command.username)
        .bind(command.email.as_str())
        .bind(&password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // A concurrent registration can slip past the pre-check; the
            // unique email constraint reports the loser here.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::EmailTaken;
                }
            }
            AuthError::Database(e.to_string())
        })?;

        Ok(CreatedAccount {
            id: id.to_string(),
            username: command.username,
            email: command.email.as_str().to_string(),
            created_at,
        })
    }
}

#[async_trait]
impl AccountDirectory for PostgresAccountRepository {
    async fn find_existing_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubjectIdentity>, AuthError> {
        self.lookup_by_email(email).await
    }
}
