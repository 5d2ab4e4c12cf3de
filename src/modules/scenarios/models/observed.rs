use serde::Serialize;
use serde_json::Value;

/// What the API answered to one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observed {
    pub status: u16,
    /// Decoded JSON body; `None` when the body is empty or not JSON
    pub body: Option<Value>,
    /// `(name, value)` of every `Set-Cookie` header
    pub set_cookies: Vec<(String, String)>,
}

impl Observed {
    /// Body rendered for failure messages
    pub fn body_text(&self) -> String {
        self.body
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_else(|| "<non-JSON or empty>".to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decode a JSON body, treating empty or non-JSON bodies as absent
pub fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}

/// Extract `name=value` from a `Set-Cookie` header, dropping its attributes
pub fn parse_set_cookie(header: &str) -> Option<(String, String)> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
