use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::ClaimSet;
use super::claims::Claims;
use super::errors::TokenError;

/// Validity window of an issued token, in days.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// A freshly signed token together with its expiry.
///
/// The expiry is carried alongside the compact string so the transport layer
/// can align the session artifact's lifetime with the token's without
/// re-parsing it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact serialized token (header.payload.signature)
    pub token: String,

    /// Instant after which the token no longer validates
    pub expires_at: DateTime<Utc>,
}

/// Builds and verifies signed bearer tokens.
///
/// Uses a symmetric key with HS256. Issuer and audience are fixed at
/// construction and stamped into every token; `decode` enforces both.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
}

impl TokenIssuer {
    /// Create a token issuer from a symmetric secret.
    ///
    /// # Errors
    /// * `MissingSigningKey` - The secret is empty. Rejected here so that no
    ///   key material is ever derived from a zero-length secret.
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSigningKey);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
            audience: audience.into(),
        })
    }

    /// Sign a claim set, expiring [`TOKEN_TTL_DAYS`] from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn issue(&self, claim_set: &ClaimSet) -> Result<IssuedToken, TokenError> {
        self.issue_at(claim_set, Utc::now())
    }

    /// Sign a claim set as of an explicit issuance instant.
    ///
    /// Expiry is `now + TOKEN_TTL_DAYS`, computed in UTC.
    pub fn issue_at(
        &self,
        claim_set: &ClaimSet,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = now + Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: claim_set.subject.clone(),
            email: claim_set.email.clone(),
            roles: claim_set.roles.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token's signature, issuer, audience, and expiry, returning
    /// its payload.
    ///
    /// # Errors
    /// * `TokenExpired` - The exp claim is in the past
    /// * `DecodingFailed` - Bad signature, wrong issuer/audience, or malformed token
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::DecodingFailed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, "https://accounts.test", "https://api.test")
            .expect("Failed to build issuer")
    }

    #[test]
    fn test_empty_signing_key_is_rejected() {
        let result = TokenIssuer::new(b"", "https://accounts.test", "https://api.test");
        assert!(matches!(result, Err(TokenError::MissingSigningKey)));
    }

    #[test]
    fn test_issue_and_decode_round_trip() {
        let issuer = issuer();
        let claim_set = ClaimSet::new("u1", "a@x.com");

        let issued = issuer.issue(&claim_set).expect("Failed to issue token");
        let decoded = issuer.decode(&issued.token).expect("Failed to decode token");

        assert_eq!(decoded.claim_set(), claim_set);
        assert_eq!(decoded.iss, "https://accounts.test");
        assert_eq!(decoded.aud, "https://api.test");
        assert_eq!(decoded.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_expiry_is_exactly_thirty_days_after_issuance() {
        let issuer = issuer();
        let now = Utc::now();

        let issued = issuer
            .issue_at(&ClaimSet::new("u1", "a@x.com"), now)
            .expect("Failed to issue token");

        assert_eq!(issued.expires_at, now + Duration::days(30));

        let decoded = issuer.decode(&issued.token).expect("Failed to decode token");
        assert_eq!(decoded.exp - decoded.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_decode_with_wrong_secret_fails() {
        let issued = issuer()
            .issue(&ClaimSet::new("u1", "a@x.com"))
            .expect("Failed to issue token");

        let other = TokenIssuer::new(
            b"another_secret_key_32_bytes_long!!",
            "https://accounts.test",
            "https://api.test",
        )
        .expect("Failed to build issuer");

        assert!(matches!(
            other.decode(&issued.token),
            Err(TokenError::DecodingFailed(_))
        ));
    }

    #[test]
    fn test_decode_with_wrong_audience_fails() {
        let issued = issuer()
            .issue(&ClaimSet::new("u1", "a@x.com"))
            .expect("Failed to issue token");

        let other = TokenIssuer::new(SECRET, "https://accounts.test", "https://elsewhere.test")
            .expect("Failed to build issuer");

        assert!(other.decode(&issued.token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = issuer();
        let long_ago = Utc::now() - Duration::days(60);

        let issued = issuer
            .issue_at(&ClaimSet::new("u1", "a@x.com"), long_ago)
            .expect("Failed to issue token");

        assert!(matches!(
            issuer.decode(&issued.token),
            Err(TokenError::TokenExpired)
        ));
    }
}
