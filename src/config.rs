// src/config.rs
//! Launch configuration: flags with environment fallbacks, no config file

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cv-intake")]
#[command(about = "Browser front end that forwards CVs to a parsing service")]
pub struct ServerArgs {
    /// Interface to bind
    #[arg(long, env = "CV_INTAKE_ADDRESS", default_value = "127.0.0.1")]
    pub address: IpAddr,

    /// Port to listen on
    #[arg(long, env = "ROCKET_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the parsing service; `/api/parse-cv` is appended
    #[arg(long, env = "CV_SERVICE_URL", default_value = "http://127.0.0.1:8000")]
    pub service_url: String,

    /// Timeout for one parse request, in seconds
    #[arg(long, env = "CV_SERVICE_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Largest accepted upload, in MiB
    #[arg(long, env = "CV_INTAKE_MAX_UPLOAD_MIB", default_value_t = 20)]
    pub max_upload_mib: u64,

    /// Also write JSON logs to this file
    #[arg(long, env = "CV_INTAKE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub address: IpAddr,
    pub port: u16,
    pub service_url: String,
    pub timeout: Duration,
    pub max_upload_mib: u64,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            address: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            service_url: service_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(120),
            max_upload_mib: 20,
            log_file: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<ServerArgs> for AppConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            address: args.address,
            port: args.port,
            service_url: args.service_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(args.timeout_secs),
            max_upload_mib: args.max_upload_mib,
            log_file: args.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ServerArgs::try_parse_from(["cv-intake"]).unwrap();
        let config = AppConfig::from(args);

        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.max_upload_mib, 20);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_flags_override() {
        let args = ServerArgs::try_parse_from([
            "cv-intake",
            "--port",
            "9000",
            "--service-url",
            "http://parser.internal:8000/",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        let config = AppConfig::from(args);

        assert_eq!(config.port, 9000);
        assert_eq!(config.service_url, "http://parser.internal:8000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(ServerArgs::try_parse_from(["cv-intake", "--port", "99999"]).is_err());
    }
}
