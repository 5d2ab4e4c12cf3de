use crate::config::ApiConfig;
use crate::core::{HarnessError, Result};
use crate::modules::scenarios::models::{
    decode_body, parse_set_cookie, Observed, RequestSpec, Scenario,
};
use reqwest::{header, Client};

/// Issues scenario requests against the live API
///
/// One call per scenario: no retries, no redirects, one uniform timeout.
/// Transport failures come back as `HarnessError::ApiUnreachable`, never as an
/// observed status, so an unreachable server cannot pass for a failed scenario.
pub struct ScenarioRunner {
    client: Client,
    config: ApiConfig,
}

impl ScenarioRunner {
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = config.http_client()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Execute a declared scenario and return what the API answered.
    ///
    /// The caller applies `Scenario::verify` to the result.
    pub async fn run(&self, scenario: &Scenario) -> Result<Observed> {
        tracing::debug!(
            scenario = %scenario.name,
            expected = %scenario.expected,
            "running scenario"
        );
        self.execute(&scenario.request).await
    }

    /// Perform exactly one HTTP call for `request`
    pub async fn execute(&self, request: &RequestSpec) -> Result<Observed> {
        let url = self.config.url(&request.path);

        let mut builder = self.client.request(request.method.as_reqwest(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(cookie) = request.cookie_header() {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| transport_error(&url, source))?;

        let status = response.status().as_u16();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();

        let bytes = response
            .bytes()
            .await
            .map_err(|source| transport_error(&url, source))?;

        tracing::debug!(method = %request.method, url = %url, status, "response received");

        Ok(Observed {
            status,
            body: decode_body(&bytes),
            set_cookies,
        })
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> HarnessError {
    if source.is_builder() {
        // Malformed header or URL: the scenario itself is broken, the server was never contacted
        return HarnessError::configuration(format!("Cannot build request for {}: {}", url, source));
    }
    tracing::warn!(url, error = %source, "API under test unreachable");
    HarnessError::ApiUnreachable {
        url: url.to_string(),
        source,
    }
}
