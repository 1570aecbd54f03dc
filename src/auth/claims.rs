use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Only `Access` tokens open the meal routes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[serde(alias = "Access")]
    Access,
    #[serde(alias = "Refresh")]
    Refresh,
}

/// Session token payload; `sub` is the meal owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,       // owner id, scopes every store call
    pub iat: usize,      // issued at, unix seconds
    pub exp: usize,      // expiry, unix seconds
    pub iss: String,     // must match JWT_ISSUER
    pub aud: String,     // must match JWT_AUDIENCE
    pub kind: TokenKind, // access or refresh
}
