use std::env;

/// WebSocket sub-protocol advertised for GraphQL subscriptions.
pub const SUBSCRIPTION_PROTOCOL: &str = "graphql-ws";

/// Fixed selection-set nesting limit of async-graphql's parser.
pub const PARSER_NESTING_CEILING: usize = 64;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_host: String,
    pub web_port: u16,
    pub database_url: String,
    pub track_modifications: bool,
    pub upload_dir: String,
    pub static_dir: String,
    pub secret_key: String,
    pub jwt_secret_key: String,
    pub jwt_access_expires_mins: i64,
    pub jwt_refresh_expires_days: i64,
    pub run_setup: bool,
    /// Nesting accepted in beginner mode. The GraphQL parser refuses documents
    /// nested deeper than [`PARSER_NESTING_CEILING`] regardless of this value.
    pub recursion_limit: usize,
    pub expert_max_depth: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let web_host = lookup("WEB_HOST").unwrap_or_else(|| "127.0.0.1".into());
        let web_port = parse_var(&lookup, "WEB_PORT", 5013u16)?;
        let raw_db = lookup("DATABASE_URL")
            .or_else(|| lookup("SQLALCHEMY_DATABASE_URI"))
            .unwrap_or_else(|| "sqlite:///dvga.db".into());
        let database_url = normalize_database_url(&raw_db);
        if !database_url.starts_with("sqlite:") {
            anyhow::bail!("only sqlite databases are supported, got {raw_db:?}");
        }
        let track_modifications = lookup("SQLALCHEMY_TRACK_MODIFICATIONS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        let upload_dir = lookup("WEB_UPLOADDIR").unwrap_or_else(|| "pastes/".into());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "static/".into());
        let secret_key = lookup("SECRET_KEY").unwrap_or_else(|| "dvga".into());
        let jwt_secret_key = lookup("JWT_SECRET_KEY").unwrap_or_else(|| "dvga".into());
        let jwt_access_expires_mins = parse_var(&lookup, "JWT_ACCESS_TOKEN_EXPIRES", 120i64)?;
        let jwt_refresh_expires_days = parse_var(&lookup, "JWT_REFRESH_TOKEN_EXPIRES", 30i64)?;
        let run_setup = lookup("DVGA_RUN_SETUP")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        let recursion_limit = parse_var(&lookup, "RECURSION_LIMIT", PARSER_NESTING_CEILING)?;
        let expert_max_depth = parse_var(&lookup, "EXPERT_MAX_DEPTH", 3usize)?;

        Ok(Self {
            web_host,
            web_port,
            database_url,
            track_modifications,
            upload_dir,
            static_dir,
            secret_key,
            jwt_secret_key,
            jwt_access_expires_mins,
            jwt_refresh_expires_days,
            run_setup,
            recursion_limit,
            expert_max_depth,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }

    pub fn graphql_url(&self) -> String {
        format!("http://{}:{}/graphql", self.web_host, self.web_port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{key} must be an integer in range, got {raw:?}")),
        None => Ok(default),
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Accepts SQLAlchemy-style sqlite URLs as well as native sqlx ones.
///
/// `sqlite:///:memory:` is in-memory, `sqlite:///rel.db` is relative to the
/// working directory and `sqlite:////abs.db` is absolute.
pub fn normalize_database_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite://" || trimmed == "sqlite:///:memory:" || trimmed == "sqlite://:memory:"
    {
        return "sqlite::memory:".into();
    }
    if let Some(path) = trimmed.strip_prefix("sqlite:///") {
        return format!("sqlite://{path}");
    }
    trimmed.to_string()
}
