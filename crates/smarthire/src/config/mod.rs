use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub platform: PlatformConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let resume_processing = millis_var("APP_RESUME_PROCESSING_MS", 2000)?;
        let toast_ttl = millis_var("APP_TOAST_TTL_MS", 3000)?;
        let demo_candidate_id =
            env::var("APP_DEMO_CANDIDATE_ID").unwrap_or_else(|_| "cand-1".to_string());
        let demo_company =
            env::var("APP_DEMO_COMPANY").unwrap_or_else(|_| "TechCorp Inc.".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            platform: PlatformConfig {
                resume_processing,
                toast_ttl,
                demo_candidate_id,
                demo_company,
            },
        })
    }
}

fn millis_var(name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDuration { name }),
        Err(_) => Ok(Duration::from_millis(default)),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the simulated platform behaviour.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Delay before a resume upload reveals its extracted skills.
    pub resume_processing: Duration,
    /// How long a toast stays visible before it is auto-dismissed.
    pub toast_ttl: Duration,
    /// Candidate profile backing the candidate-facing pages.
    pub demo_candidate_id: String,
    /// Company whose postings back the company-facing pages.
    pub demo_company: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            resume_processing: Duration::from_millis(2000),
            toast_ttl: Duration::from_millis(3000),
            demo_candidate_id: "cand-1".to_string(),
            demo_company: "TechCorp Inc.".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDuration { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDuration { name } => {
                write!(f, "{name} must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidDuration { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
