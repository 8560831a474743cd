pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::ClaimSet;
pub use claims::Claims;
pub use claims::DEFAULT_ROLES;
pub use errors::TokenError;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use issuer::TOKEN_TTL_DAYS;
