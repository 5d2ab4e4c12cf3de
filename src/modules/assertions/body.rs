use crate::core::AssertionFailure;
use jsonschema::Draft;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// What a scenario requires of the decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum BodyContract {
    /// Status only; the body is not inspected
    Any,
    /// `{ "csrfToken": string | null }`
    CsrfToken,
    /// `{ "data": [ { "country_code": <code>, ... } ] }`, every record matching exactly
    PackageList { country_code: String },
}

/// Body of `GET /api/admin/csrf-token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: Option<String>,
}

/// Body of `POST /api/admin/login`; other fields (`success`, `admin`) are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

/// One package as listed by `GET /api/packages`
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub id: Option<Value>,
    pub country_code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /api/packages`
#[derive(Debug, Clone, Deserialize)]
pub struct PackageListResponse {
    pub data: Vec<PackageRecord>,
}

fn csrf_token_schema() -> Value {
    json!({
        "type": "object",
        "required": ["csrfToken"],
        "properties": {
            "csrfToken": { "type": ["string", "null"] }
        }
    })
}

fn admin_login_schema() -> Value {
    json!({
        "type": "object",
        "required": ["token"],
        "properties": {
            "token": { "type": "string", "minLength": 1 }
        }
    })
}

fn package_list_schema() -> Value {
    json!({
        "type": "object",
        "required": ["data"],
        "properties": {
            "data": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["country_code"],
                    "properties": {
                        "country_code": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Validate `instance` against a draft 2020-12 schema, collecting every violation.
pub fn validate_shape(
    scenario: &str,
    schema: &Value,
    instance: &Value,
) -> Result<(), AssertionFailure> {
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|e| AssertionFailure::InvalidContract(format!("invalid schema: {}", e)))?;

    let messages: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(AssertionFailure::BodyShape {
            scenario: scenario.to_string(),
            details: messages.join("; "),
        })
    }
}

fn require_json<'a>(
    scenario: &str,
    body: Option<&'a Value>,
) -> Result<&'a Value, AssertionFailure> {
    body.ok_or_else(|| AssertionFailure::BodyShape {
        scenario: scenario.to_string(),
        details: "response body is not JSON".to_string(),
    })
}

fn decode<T>(scenario: &str, body: &Value) -> Result<T, AssertionFailure>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(body).map_err(|e| AssertionFailure::BodyShape {
        scenario: scenario.to_string(),
        details: e.to_string(),
    })
}

pub fn decode_csrf_token(
    scenario: &str,
    body: Option<&Value>,
) -> Result<CsrfTokenResponse, AssertionFailure> {
    let body = require_json(scenario, body)?;
    validate_shape(scenario, &csrf_token_schema(), body)?;
    decode(scenario, body)
}

pub fn decode_package_list(
    scenario: &str,
    body: Option<&Value>,
) -> Result<PackageListResponse, AssertionFailure> {
    let body = require_json(scenario, body)?;
    validate_shape(scenario, &package_list_schema(), body)?;
    decode(scenario, body)
}

pub fn decode_admin_token(
    scenario: &str,
    body: Option<&Value>,
) -> Result<AdminLoginResponse, AssertionFailure> {
    let body = require_json(scenario, body)?;
    validate_shape(scenario, &admin_login_schema(), body)?;
    decode(scenario, body)
}

/// Every listed record must carry exactly `country_code` (no prefix or case folding).
pub fn check_country_filter(
    scenario: &str,
    country_code: &str,
    list: &PackageListResponse,
) -> Result<(), AssertionFailure> {
    let offending: Vec<String> = list
        .data
        .iter()
        .enumerate()
        .filter(|(_, record)| record.country_code != country_code)
        .map(|(index, record)| match &record.id {
            Some(id) => format!("{}={}", id, record.country_code),
            None => format!("data[{}]={}", index, record.country_code),
        })
        .collect();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(AssertionFailure::CountryMismatch {
            scenario: scenario.to_string(),
            expected: country_code.to_string(),
            offending,
        })
    }
}

impl BodyContract {
    pub fn check(&self, scenario: &str, body: Option<&Value>) -> Result<(), AssertionFailure> {
        match self {
            BodyContract::Any => Ok(()),
            BodyContract::CsrfToken => decode_csrf_token(scenario, body).map(|_| ()),
            BodyContract::PackageList { country_code } => {
                let list = decode_package_list(scenario, body)?;
                check_country_filter(scenario, country_code, &list)
            }
        }
    }
}
