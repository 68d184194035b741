use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::application::ports::token_reader::TokenReader;
use crate::bootstrap::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub identity: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
    #[serde(default)]
    pub iat: i64,
    #[serde(default)]
    pub nbf: i64,
    #[serde(default)]
    pub exp: i64,
    #[serde(default)]
    pub jti: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
    #[error("expected a {expected} token, got {found:?}")]
    WrongKind { expected: &'static str, found: String },
}

/// Issues and checks the HS256 tokens handed out by `login`.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.jwt_secret_key.clone(),
            Duration::minutes(cfg.jwt_access_expires_mins),
            Duration::days(cfg.jwt_refresh_expires_days),
        )
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    pub fn issue(&self, identity: &str, kind: TokenKind) -> Result<String, TokenError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let now = Utc::now().timestamp();
        let mut jti = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut jti);
        let claims = Claims {
            identity: identity.to_string(),
            token_type: kind.as_str().to_string(),
            iat: now,
            nbf: now,
            exp: now + ttl.num_seconds(),
            jti: hex::encode(jti),
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        if data.claims.token_type != kind.as_str() {
            return Err(TokenError::WrongKind {
                expected: kind.as_str(),
                found: data.claims.token_type,
            });
        }
        Ok(data.claims)
    }

    /// Reads the claims without checking signature or expiry.
    pub fn decode_unverified(token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        let data = jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
        Ok(data.claims)
    }
}

impl TokenReader for TokenService {
    fn identity_unverified(&self, token: &str) -> anyhow::Result<String> {
        Ok(Self::decode_unverified(token)?.identity)
    }
}
