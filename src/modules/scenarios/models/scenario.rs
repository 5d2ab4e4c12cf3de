use crate::core::AssertionFailure;
use crate::modules::assertions::{BodyContract, StatusSet};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::Observed;

/// HTTP methods the harness drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// One HTTP request, relative to the configured origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            cookies: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// `Cookie` header value, or `None` when no cookie is attached
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        Some(pairs.join("; "))
    }
}

/// A declared HTTP interaction and the outcome it must produce
///
/// Immutable once built; one scenario is one test case.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub request: RequestSpec,
    pub expected: StatusSet,
    pub body: BodyContract,
}

impl Scenario {
    pub fn new(name: impl Into<String>, request: RequestSpec, expected: StatusSet) -> Self {
        Self {
            name: name.into(),
            request,
            expected,
            body: BodyContract::Any,
        }
    }

    pub fn expecting_body(mut self, body: BodyContract) -> Self {
        self.body = body;
        self
    }

    /// Check status membership first, then the body contract.
    pub fn verify(&self, observed: &Observed) -> Result<(), AssertionFailure> {
        self.expected
            .check(&self.name, observed.status, &observed.body_text())?;
        self.body.check(&self.name, observed.body.as_ref())
    }
}
