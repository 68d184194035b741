#[derive(Debug, Clone)]
pub struct Owner {
    pub id: i64,
    pub username: String,
    // Stored and compared in plain text.
    pub password: String,
}

/// Name of the account that anonymous pastes are attributed to.
pub const ANONYMOUS_OWNER: &str = "DVGAUser";
