use crate::core::{HarnessError, Result};
use crate::modules::assertions::decode_csrf_token;
use crate::modules::scenarios::models::RequestSpec;
use crate::modules::scenarios::services::{ScenarioRunner, CSRF_TOKEN_PATH};

/// Header carrying the token on mutating admin requests
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// A token issued by `GET /api/admin/csrf-token` plus the cookies issued with it
///
/// Owned by a single scenario. Nothing is stored on the runner, so two
/// scenarios never share a session by accident.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrfSession {
    token: Option<String>,
    cookies: Vec<(String, String)>,
}

impl CsrfSession {
    pub fn new(token: Option<String>, cookies: Vec<(String, String)>) -> Self {
        Self { token, cookies }
    }

    /// Request a fresh token from the API.
    ///
    /// A non-200 answer or a body without `csrfToken` is reported as a
    /// configuration problem: the protected scenarios cannot be set up.
    pub async fn acquire(runner: &ScenarioRunner) -> Result<Self> {
        let observed = runner.execute(&RequestSpec::get(CSRF_TOKEN_PATH)).await?;

        if observed.status != 200 {
            return Err(HarnessError::configuration(format!(
                "CSRF token endpoint answered {}",
                observed.status
            )));
        }

        let response = decode_csrf_token("csrf_session", observed.body.as_ref())
            .map_err(|failure| HarnessError::configuration(failure.to_string()))?;

        tracing::debug!(
            has_token = response.csrf_token.is_some(),
            cookies = observed.set_cookies.len(),
            "CSRF session acquired"
        );

        Ok(Self::new(response.csrf_token, observed.set_cookies))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attach the token header and the session cookies to `request`.
    ///
    /// When the server issued a null token only the cookies are attached.
    pub fn authorize(&self, request: RequestSpec) -> RequestSpec {
        let request = self
            .cookies
            .iter()
            .fold(request, |request, (name, value)| request.cookie(name.as_str(), value.as_str()));

        match &self.token {
            Some(token) => request.header(CSRF_HEADER, token.as_str()),
            None => request,
        }
    }
}
