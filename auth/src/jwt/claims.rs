use serde::Deserialize;
use serde::Serialize;

/// Role assertions attached to every authenticated subject until a real
/// role lookup is wired in. Override per service through `ClaimSet::with_roles`.
pub const DEFAULT_ROLES: [&str; 2] = ["Admin", "Noob"];

/// Identity assertions gathered for one login.
///
/// Built fresh per authentication; the issuer stamps the registered claims
/// (iss, aud, iat, exp) on top of these when signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    /// Subject identifier, opaque to this crate
    pub subject: String,

    /// Email as submitted with the credentials
    pub email: String,

    /// Role grants for the subject
    pub roles: Vec<String>,
}

impl ClaimSet {
    /// Create a claim set for an authenticated subject with the default roles.
    pub fn new(subject: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Replace the role grants.
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }
}

/// Signed token payload.
///
/// The full set of claims carried on the wire: the identity assertions from
/// a [`ClaimSet`] plus the registered claims the issuer adds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier
    pub sub: String,

    /// Email claim
    pub email: String,

    /// Role claims
    pub roles: Vec<String>,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Recover the identity assertions, dropping the registered claims.
    pub fn claim_set(&self) -> ClaimSet {
        ClaimSet {
            subject: self.sub.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claim_set_carries_default_roles() {
        let claims = ClaimSet::new("user123", "user@example.com");

        assert_eq!(claims.subject, "user123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.roles, vec!["Admin", "Noob"]);
    }

    #[test]
    fn test_with_roles_replaces_defaults() {
        let claims = ClaimSet::new("user123", "user@example.com")
            .with_roles(vec!["Operator".to_string()]);

        assert_eq!(claims.roles, vec!["Operator"]);
    }

    #[test]
    fn test_claim_set_round_trip_from_payload() {
        let original = ClaimSet::new("user123", "user@example.com");
        let payload = Claims {
            sub: original.subject.clone(),
            email: original.email.clone(),
            roles: original.roles.clone(),
            iss: "issuer".to_string(),
            aud: "audience".to_string(),
            iat: 1_700_000_000,
            exp: 1_702_592_000,
        };

        assert_eq!(payload.claim_set(), original);
    }
}
