use crate::application::encoder::{Endpoints, LIVE_URL, TEST_URL};
use crate::domain::credentials::{GatewayCredentials, Mode};
use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "PAYLEAP";

/// Gateway configuration: defaults, then an optional TOML file, then
/// `PAYLEAP_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct GatewaySettings {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    pub mode: Mode,
    pub test_url: String,
    pub live_url: String,
    pub timeout_secs: u64,
}

impl GatewaySettings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("mode", "test")?
            .set_default("test_url", TEST_URL)?
            .set_default("live_url", LIVE_URL)?
            .set_default("timeout_secs", 30_i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Missing login or password is fatal: no request could ever succeed.
    pub fn credentials(&self) -> Result<GatewayCredentials> {
        GatewayCredentials::new(self.login.as_str(), self.password.as_str())
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::parse(&self.test_url, &self.live_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = toml_file(
            r#"
login = "merchant"
password = "secret"
mode = "live"
timeout_secs = 5
"#,
        );

        let settings = GatewaySettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.login, "merchant");
        assert_eq!(settings.mode, Mode::Live);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(settings.live_url, LIVE_URL);
        assert!(settings.credentials().is_ok());
        assert!(settings.endpoints().is_ok());
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let settings = GatewaySettings {
            login: String::new(),
            password: "secret".to_string(),
            mode: Mode::Test,
            test_url: TEST_URL.to_string(),
            live_url: LIVE_URL.to_string(),
            timeout_secs: 30,
        };
        assert!(matches!(
            settings.credentials(),
            Err(GatewayError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = GatewaySettings::load(Some(Path::new("/nonexistent/payleap.toml")));
        assert!(matches!(result, Err(GatewayError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_mode_is_config_error() {
        let file = toml_file("mode = \"staging\"\n");
        assert!(matches!(
            GatewaySettings::load(Some(file.path())),
            Err(GatewayError::ConfigError(_))
        ));
    }
}
