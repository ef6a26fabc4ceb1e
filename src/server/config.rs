//! Environment-based application configuration.

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const WOWHEAD_URL: &str = "https://www.wowhead.com";
const WOWHEAD_ICON_URL: &str = "https://wow.zamimg.com/images/wow/icons/large";

/// Field length limits and token lifetimes for the auth surface.
///
/// The registration token and the inactive-user deletion delay share the
/// same five-minute window: the token must not outlive the pending user row
/// it is meant to activate.
#[derive(Clone, Copy)]
pub struct AuthSettings {
    pub username_min_length: usize,
    pub username_max_length: usize,
    pub email_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
    pub registration_token_ttl: Duration,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub change_password_token_ttl: Duration,
    pub del_inactive_user_after: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username_min_length: 2,
            username_max_length: 12,
            email_max_length: 254,
            password_min_length: 5,
            password_max_length: 24,
            registration_token_ttl: Duration::minutes(5),
            access_token_ttl: Duration::minutes(30),
            refresh_token_ttl: Duration::days(30),
            change_password_token_ttl: Duration::minutes(5),
            del_inactive_user_after: Duration::minutes(5),
        }
    }
}

/// Team naming rules and the delete-confirmation token lifetime.
#[derive(Clone)]
pub struct TeamSettings {
    pub name_min_length: usize,
    pub name_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
    pub delete_team_token_ttl: Duration,
    /// Names that would shadow API routes or reserved pages.
    pub restricted_names: Vec<String>,
}

impl Default for TeamSettings {
    fn default() -> Self {
        Self {
            name_min_length: 2,
            name_max_length: 24,
            password_min_length: 5,
            password_max_length: 24,
            delete_team_token_ttl: Duration::minutes(5),
            restricted_names: ["api", "auth", "registration", "account", "admin"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    /// Absent means no Redis; the cache degrades to in-process memory.
    pub redis_url: Option<String>,
    pub jwt_secret: String,

    pub self_email: String,
    pub smtp_server: String,
    pub smtp_user: String,
    pub smtp_password: String,
    pub smtp_port: u16,

    pub wowhead_url: String,
    pub wowhead_icon_url: String,

    /// Cache entry lifetime in seconds for the team aggregate keys.
    pub cache_ttl_secs: u64,

    pub auth: AuthSettings,
    pub team: TeamSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            redis_url: std::env::var("REDIS_URL").ok(),
            jwt_secret: std::env::var("JWT_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_KEY".to_string()))?,
            self_email: std::env::var("SELF_EMAIL")
                .map_err(|_| ConfigError::MissingEnvVar("SELF_EMAIL".to_string()))?,
            smtp_server: std::env::var("EMAIL_SERVER")
                .map_err(|_| ConfigError::MissingEnvVar("EMAIL_SERVER".to_string()))?,
            smtp_user: std::env::var("EMAIL_USER")
                .map_err(|_| ConfigError::MissingEnvVar("EMAIL_USER".to_string()))?,
            smtp_password: std::env::var("EMAIL_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("EMAIL_PASSWORD".to_string()))?,
            smtp_port: Self::parse_var("SMTP_PORT")?,
            wowhead_url: std::env::var("WOWHEAD_URL")
                .unwrap_or_else(|_| WOWHEAD_URL.to_string()),
            wowhead_icon_url: std::env::var("WOWHEAD_ICON_URL")
                .unwrap_or_else(|_| WOWHEAD_ICON_URL.to_string()),
            cache_ttl_secs: match std::env::var("CACHE_TTL_SECS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("CACHE_TTL_SECS".to_string(), raw))?,
                Err(_) => 60,
            },
            auth: AuthSettings::default(),
            team: TeamSettings::default(),
        })
    }

    fn parse_var<T: std::str::FromStr>(name: &str) -> Result<T, AppError> {
        let raw = std::env::var(name)
            .map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;
        raw.parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), raw).into())
    }
}
