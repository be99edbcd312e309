use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::UpsertUser;

/// Claims issued by the external identity provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl IdentityClaims {
    pub fn to_upsert(&self) -> UpsertUser {
        UpsertUser {
            id: self.sub.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

pub fn encode_token(claims: &IdentityClaims, secret: &str) -> Result<String, String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Identity token encode failed: {e}"))
}

/// Verifies signature and expiry, and the issuer when one is configured.
pub fn decode_token(
    token: &str,
    secret: &str,
    issuer: Option<&str>,
) -> Result<IdentityClaims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }

    let claims = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Identity token decode failed: {e}"))?;

    if claims.sub.trim().is_empty() {
        return Err("Identity token has an empty subject".to_string());
    }
    Ok(claims)
}
