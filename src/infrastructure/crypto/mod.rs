use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

use crate::application::ports::session_signer::SessionSigner;

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_KEY_LEN: usize = 24;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionCookieError {
    #[error("session value is not in value.signature form")]
    Malformed,
    #[error("session signature does not match")]
    BadSignature,
    #[error("session key rejected by HMAC")]
    InvalidKey,
}

/// Fresh random key; a new one per process invalidates earlier cookies.
pub fn generate_session_key() -> [u8; SESSION_KEY_LEN] {
    let mut key = [0u8; SESSION_KEY_LEN];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

fn mac_for(key: &[u8], value: &str) -> Result<HmacSha256, SessionCookieError> {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(key).map_err(|_| SessionCookieError::InvalidKey)?;
    mac.update(value.as_bytes());
    Ok(mac)
}

pub fn sign_value(key: &[u8], value: &str) -> Result<String, SessionCookieError> {
    let sig = mac_for(key, value)?.finalize().into_bytes();
    Ok(format!("{}.{}", value, hex::encode(sig)))
}

pub fn verify_value(key: &[u8], signed: &str) -> Result<String, SessionCookieError> {
    let (value, sig_hex) = signed
        .rsplit_once('.')
        .ok_or(SessionCookieError::Malformed)?;
    let sig = hex::decode(sig_hex).map_err(|_| SessionCookieError::Malformed)?;
    mac_for(key, value)?
        .verify_slice(&sig)
        .map_err(|_| SessionCookieError::BadSignature)?;
    Ok(value.to_string())
}

/// HMAC-SHA256 cookie signer keyed per process.
pub struct HmacSessionSigner {
    key: [u8; SESSION_KEY_LEN],
}

impl HmacSessionSigner {
    pub fn new(key: [u8; SESSION_KEY_LEN]) -> Self {
        Self { key }
    }

    pub fn generate() -> Self {
        Self::new(generate_session_key())
    }
}

impl SessionSigner for HmacSessionSigner {
    fn sign(&self, value: &str) -> anyhow::Result<String> {
        Ok(sign_value(&self.key, value)?)
    }

    fn verify(&self, signed: &str) -> Option<String> {
        verify_value(&self.key, signed).ok()
    }
}
