use crate::config::AdminAuth;
use crate::core::{HarnessError, Result};
use crate::modules::assertions::decode_admin_token;
use crate::modules::scenarios::models::RequestSpec;
use crate::modules::scenarios::services::ScenarioRunner;
use reqwest::header;
use serde_json::json;
use std::fmt;

pub const ADMIN_LOGIN_PATH: &str = "/api/admin/login";

/// A bearer token for the admin-protected endpoints
#[derive(Clone, PartialEq)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Exchange admin credentials for a bearer token.
    ///
    /// Refused credentials or a body without `token` are configuration
    /// problems: the gated resources cannot be reached with them.
    pub async fn login(runner: &ScenarioRunner, username: &str, password: &str) -> Result<Self> {
        let request = RequestSpec::post(ADMIN_LOGIN_PATH)
            .json(json!({ "username": username, "password": password }));
        let observed = runner.execute(&request).await?;

        if observed.status != 200 {
            return Err(HarnessError::configuration(format!(
                "Admin login for {} answered {}",
                username, observed.status
            )));
        }

        let response = decode_admin_token("admin_login", observed.body.as_ref())
            .map_err(|failure| HarnessError::configuration(failure.to_string()))?;

        tracing::debug!(username, "admin session acquired");
        Ok(Self::new(response.token))
    }

    /// The session the runner's configuration asks for, if any
    pub async fn from_config(runner: &ScenarioRunner) -> Result<Option<Self>> {
        match &runner.config().admin {
            None => Ok(None),
            Some(AdminAuth::Token(token)) => Ok(Some(Self::new(token.as_str()))),
            Some(AdminAuth::Credentials { username, password }) => {
                Self::login(runner, username, password).await.map(Some)
            }
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Attach `Authorization: Bearer <token>` to `request`
    pub fn authorize(&self, request: RequestSpec) -> RequestSpec {
        request.header(header::AUTHORIZATION.as_str(), format!("Bearer {}", self.token))
    }
}

impl fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSession")
            .field("token", &"<redacted>")
            .finish()
    }
}
