use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Merchant login for the gateway, sent on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayCredentials {
    login: String,
    password: String,
}

impl GatewayCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Result<Self, GatewayError> {
        let login = login.into();
        let password = password.into();
        if login.trim().is_empty() {
            return Err(GatewayError::ValidationError("Missing required login".to_string()));
        }
        if password.is_empty() {
            return Err(GatewayError::ValidationError(
                "Missing required password".to_string(),
            ));
        }
        Ok(Self { login, password })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("login", &self.login)
            .field("password", &"*** redacted ***")
            .finish()
    }
}

/// Selects the UAT or production host.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Test,
    Live,
}

impl Mode {
    pub fn is_test(&self) -> bool {
        *self == Self::Test
    }
}
