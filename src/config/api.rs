use crate::core::{HarnessError, Result};
use reqwest::{redirect, Client, Url};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the API under test
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// HTTP origin serving `/api/*`, without a trailing slash
    pub base_url: String,
    /// Applied to every request, connect included
    pub timeout_ms: u64,
    /// How admin-gated requests authenticate; `None` sends them bare
    #[serde(default)]
    pub admin: Option<AdminAuth>,
}

/// Admin authentication for the bearer-protected endpoints
#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAuth {
    /// Log in through `POST /api/admin/login` before the first gated request
    Credentials { username: String, password: String },
    /// Use an already issued bearer token as is
    Token(String),
}

impl fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminAuth::Credentials { username, .. } => f
                .debug_struct("Credentials")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            AdminAuth::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_admin_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.admin = Some(AdminAuth::Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin = Some(AdminAuth::Token(token.into()));
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Join an `/api/...` path onto the origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| super::invalid(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(super::invalid(format!(
                "Base URL must be http or https, got {}",
                parsed.scheme()
            )));
        }

        if self.timeout_ms == 0 {
            return Err(super::invalid("Request timeout must be greater than 0"));
        }

        match &self.admin {
            Some(AdminAuth::Credentials { username, .. }) if username.trim().is_empty() => {
                return Err(super::invalid("Admin username must not be blank"));
            }
            Some(AdminAuth::Token(token)) if token.trim().is_empty() => {
                return Err(super::invalid("Admin token must not be blank"));
            }
            _ => {}
        }

        Ok(())
    }

    /// Build the HTTP client shared by every scenario of a runner.
    ///
    /// No redirects are followed and no retry layer is installed: one
    /// scenario is exactly one request.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout())
            .connect_timeout(self.timeout())
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| HarnessError::configuration(format!("Failed to build HTTP client: {}", e)))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            admin: None,
        }
    }
}
