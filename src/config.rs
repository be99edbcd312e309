use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub identity_secret: String,
    pub identity_issuer: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub session_ttl_hours: i64,
    pub secure_cookies: bool,
    pub team_window_days: i64,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let identity_secret = env_required("IDENTITY_TOKEN_SECRET")?;

        let identity_issuer = std::env::var("TEAMPULSE_IDENTITY_ISSUER")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let host: IpAddr = env_or("TEAMPULSE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TEAMPULSE_HOST: {e}"))?;

        let port: u16 = env_or("TEAMPULSE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid TEAMPULSE_PORT: {e}"))?;

        let session_ttl_hours: i64 = env_or("TEAMPULSE_SESSION_TTL_HOURS", "168")
            .parse()
            .map_err(|e| format!("Invalid TEAMPULSE_SESSION_TTL_HOURS: {e}"))?;
        if session_ttl_hours <= 0 {
            return Err("TEAMPULSE_SESSION_TTL_HOURS must be positive".to_string());
        }

        let secure_cookies = parse_bool("TEAMPULSE_SECURE_COOKIES", &env_or("TEAMPULSE_SECURE_COOKIES", "true"))?;

        let team_window_days: i64 = env_or("TEAMPULSE_TEAM_WINDOW_DAYS", "30")
            .parse()
            .map_err(|e| format!("Invalid TEAMPULSE_TEAM_WINDOW_DAYS: {e}"))?;
        if team_window_days <= 0 {
            return Err("TEAMPULSE_TEAM_WINDOW_DAYS must be positive".to_string());
        }

        let max_body_size: usize = env_or("TEAMPULSE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid TEAMPULSE_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("TEAMPULSE_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid TEAMPULSE_DB_MAX_CONNECTIONS: {e}"))?;

        let log_level = env_or("TEAMPULSE_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            identity_secret,
            identity_issuer,
            host,
            port,
            session_ttl_hours,
            secure_cookies,
            team_window_days,
            max_body_size,
            db_max_connections,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
    }
}
