//! Authentication building blocks
//!
//! Provides the credential-facing infrastructure for the account service:
//! - Claim assembly and signed token issuance (HS256)
//! - Password hashing (Argon2id), used by identity-provider adapters
//!
//! The service crate defines its own collaborator traits and wires these
//! implementations in; nothing here touches storage or transport.
//!
//! # Examples
//!
//! ## Issuing and verifying a token
//! ```
//! use auth::{ClaimSet, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "https://accounts.example.com",
//!     "https://api.example.com",
//! )
//! .unwrap();
//!
//! let claims = ClaimSet::new("user123", "user@example.com");
//! let issued = issuer.issue(&claims).unwrap();
//!
//! let decoded = issuer.decode(&issued.token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! assert_eq!(decoded.email, "user@example.com");
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::ClaimSet;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
