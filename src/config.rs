use std::{path::PathBuf, time::Duration};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,

    pub public_dir: PathBuf,
    pub max_upload_bytes: usize,

    pub news_api_url: Option<String>,
    pub news_api_key: Option<String>,
    pub news_timeout: Duration,

    pub sweep_interval: Option<Duration>,
    pub sweep_grace: Duration,

    pub log_level: tracing::Level,
}

impl Config {
    fn get_env(key: &str, default: &str) -> String {
        std::env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn may_get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|val| !val.is_empty())
    }

    fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        Self::may_get(key)
            .and_then(|val| val.parse().ok())
            .unwrap_or(default)
    }

    /// Builds a Postgres URL from its parts when `DATABASE_URL` is not given.
    fn database_url() -> String {
        if let Some(url) = Self::may_get("DATABASE_URL") {
            return url;
        }

        let host = Self::get_env("DB_HOST", "localhost");
        let port = Self::parse_or("DB_PORT", 5432);
        let user = Self::get_env("DB_USER", "postgres");
        let password = Self::get_env("DB_PASSWORD", "");
        let name = Self::get_env("DB_NAME", "profilehub");

        postgres_url(&host, port, &user, &password, &name)
            .unwrap_or_else(|e| panic!("DB_HOST/DB_PORT do not form a valid URL: {}", e))
    }

    pub fn init() -> Self {
        let server_address = Self::get_env("SERVER_ADDRESS", "127.0.0.1");
        let server_port = Self::parse_or("SERVER_PORT", 3000);
        let database_url = Self::database_url();
        let db_max_connections = Self::parse_or("DB_MAX_CONNECTIONS", 10);

        let public_dir = PathBuf::from(Self::get_env("PUBLIC_DIR", "public"));
        let max_upload_bytes = Self::parse_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024);

        let news_api_url = Self::may_get("NEWS_API_URL");
        let news_api_key = Self::may_get("NEWS_API_KEY");
        let news_timeout = Duration::from_secs(Self::parse_or("NEWS_TIMEOUT_SECS", 10));

        let sweep_interval = match Self::parse_or("SWEEP_INTERVAL_SECS", 3600) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let sweep_grace = Duration::from_secs(Self::parse_or("SWEEP_GRACE_SECS", 300));

        let log_level = Self::parse_or("LOG_LEVEL", tracing::Level::DEBUG);

        Self {
            server_address,
            server_port,
            database_url,
            db_max_connections,

            public_dir,
            max_upload_bytes,

            news_api_url,
            news_api_key,
            news_timeout,

            sweep_interval,
            sweep_grace,

            log_level,
        }
    }

    /// Root of the per-profile image directories.
    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join("images")
    }
}

/// Credentials are percent-encoded, so any character is allowed in them.
fn postgres_url(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    name: &str,
) -> Result<String, url::ParseError> {
    let mut url = Url::parse(&format!("postgres://{}:{}", host, port))?;
    url.set_path(name);
    // Both setters only fail on URLs without a host, which parse rules out.
    url.set_username(user)
        .map_err(|_| url::ParseError::EmptyHost)?;
    if !password.is_empty() {
        url.set_password(Some(password))
            .map_err(|_| url::ParseError::EmptyHost)?;
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_url_with_and_without_password() {
        assert_eq!(
            postgres_url("db", 5432, "app", "", "profiles").unwrap(),
            "postgres://app@db:5432/profiles"
        );
        assert_eq!(
            postgres_url("db", 6543, "app", "s3cret", "profiles").unwrap(),
            "postgres://app:s3cret@db:6543/profiles"
        );
    }

    #[test]
    fn credentials_with_url_delimiters_are_encoded() {
        let raw = postgres_url("db", 5432, "ad@min", "p@ss/w:rd", "profiles").unwrap();
        assert_eq!(raw, "postgres://ad%40min:p%40ss%2Fw%3Ard@db:5432/profiles");

        let parsed = Url::parse(&raw).unwrap();
        assert_eq!(parsed.host_str(), Some("db"));
        assert_eq!(parsed.port(), Some(5432));
        assert_eq!(parsed.path(), "/profiles");
    }

    #[test]
    fn bad_host_is_an_error() {
        assert!(postgres_url("db host", 5432, "app", "", "profiles").is_err());
    }

    #[test]
    fn images_live_under_public_dir() {
        let config = Config {
            server_address: "127.0.0.1".into(),
            server_port: 3000,
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            public_dir: PathBuf::from("public"),
            max_upload_bytes: 1024,
            news_api_url: None,
            news_api_key: None,
            news_timeout: Duration::from_secs(1),
            sweep_interval: None,
            sweep_grace: Duration::from_secs(0),
            log_level: tracing::Level::INFO,
        };
        assert_eq!(config.images_dir(), PathBuf::from("public").join("images"));
    }
}
