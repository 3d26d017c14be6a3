//! Login proxy models and constants

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Default HRIS identity endpoint
pub const DEFAULT_HRIS_LOGIN_URL: &str = "http://hrisapi.prangroup.com:8083/v1/Login/HrisLogin";

/// Header carrying the HRIS API key
pub const API_KEY_HEADER: &str = "S_KEYL";

/// Header carrying the fixed basic-auth credential
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Upper bound on one upstream login call
pub const DEFAULT_LOGIN_TIMEOUT_MS: u64 = 10_000;

pub const UPSTREAM_FAILED_MESSAGE: &str = "HRIS API failed";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Login service unavailable";

/// Login policy selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMode {
    /// Forward the JSON body verbatim and relay the upstream reply
    #[default]
    PassThrough,
    /// Validate, form-encode and normalize into a success/failure envelope
    Form,
}

impl std::fmt::Display for LoginMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginMode::PassThrough => write!(f, "pass-through"),
            LoginMode::Form => write!(f, "form"),
        }
    }
}

impl std::str::FromStr for LoginMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass-through" | "passthrough" => Ok(LoginMode::PassThrough),
            "form" => Ok(LoginMode::Form),
            _ => Err(format!("Invalid login mode: {}", s)),
        }
    }
}

/// Upstream HRIS identity endpoint settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HrisConfig {
    pub mode: LoginMode,
    pub url: String,
    /// Sent as the `S_KEYL` header by the pass-through policy
    pub api_key: String,
    /// Sent verbatim as the `Authorization` header by the pass-through policy
    pub authorization: String,
    pub timeout: Duration,
}

impl Default for HrisConfig {
    fn default() -> Self {
        Self {
            mode: LoginMode::default(),
            url: DEFAULT_HRIS_LOGIN_URL.to_string(),
            api_key: String::new(),
            authorization: String::new(),
            timeout: Duration::from_millis(DEFAULT_LOGIN_TIMEOUT_MS),
        }
    }
}

/// HTTP status and JSON body to hand back to the login caller
#[derive(Clone, Debug, PartialEq)]
pub struct LoginReply {
    pub status: u16,
    pub body: Value,
}

impl LoginReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Normalized `{success, message}` envelope
    pub fn envelope(status: u16, success: bool, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({
                "success": success,
                "message": message.into(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
