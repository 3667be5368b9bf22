/// Pricing service configuration
///
/// # Environment variables
///
/// Every option can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | log filter when RUST_LOG is unset |
/// | LOG_JSON | false | emit JSON log lines |
/// | LOG_DIR | (none) | directory for daily rolling log files |
/// | PER_TABLE_SERVICE_TYPES | billiards,table_tennis | service types priced per table |
/// | REQUEST_TIMEOUT_MS | 30000 | request timeout (ms) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 PER_TABLE_SERVICE_TYPES=billiards,snooker cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Fallback log filter
    pub log_level: String,
    /// JSON log output
    pub log_json: bool,
    /// Rolling log directory
    pub log_dir: Option<String>,
    /// Service types charged a flat per-table rate
    pub per_table_service_types: Vec<String>,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
}

pub const DEFAULT_PER_TABLE_SERVICE_TYPES: [&str; 2] = ["billiards", "table_tennis"];

/// Split a comma separated list, dropping blanks
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            per_table_service_types: std::env::var("PER_TABLE_SERVICE_TYPES")
                .ok()
                .map(|v| parse_list(&v))
                .unwrap_or_else(|| {
                    DEFAULT_PER_TABLE_SERVICE_TYPES
                        .iter()
                        .map(|s| s.to_string())
                        .collect()
                }),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            per_table_service_types: DEFAULT_PER_TABLE_SERVICE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            request_timeout_ms: 30000,
        }
    }
}
