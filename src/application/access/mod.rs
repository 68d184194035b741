use crate::application::ports::session_signer::SessionSigner;
use crate::domain::difficulty::Difficulty;

pub const MODE_HEADER: &str = "x-dvga-mode";
pub const SESSION_COOKIE: &str = "session";

// Presentation layer extracts the raw header and cookie values.

/// The explicit header wins; otherwise a correctly signed session cookie;
/// anything unreadable falls back to beginner.
pub fn resolve_difficulty(
    signer: &dyn SessionSigner,
    mode_header: Option<&str>,
    session_cookie: Option<&str>,
) -> Difficulty {
    if let Some(level) = mode_header.and_then(|h| h.parse::<Difficulty>().ok()) {
        return level;
    }
    session_cookie
        .and_then(|c| signer.verify(c))
        .and_then(|v| v.parse::<Difficulty>().ok())
        .unwrap_or_default()
}

pub fn session_cookie_value(signer: &dyn SessionSigner, level: Difficulty) -> anyhow::Result<String> {
    signer.sign(level.as_str())
}
