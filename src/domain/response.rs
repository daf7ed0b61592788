use super::codes;
use super::operation::AuthorizationReference;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const APPROVED: i64 = 0;
/// Result code PayLeap uses when its host could not be reached.
pub const HOST_ERROR: i64 = -100;

/// Flat view of a gateway reply: root child element name to its text.
///
/// An empty map stands for a body that could not be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedResponse(HashMap<String, String>);

impl ParsedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, String)> for ParsedResponse {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvsResult {
    pub code: Option<String>,
    pub message: Option<String>,
    pub street_match: Option<bool>,
    pub postal_match: Option<bool>,
}

impl AvsResult {
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code else {
            return Self::default();
        };
        Self {
            code: Some(code.to_string()),
            message: codes::avs_message(code).map(str::to_string),
            street_match: codes::avs_street_match(code),
            postal_match: codes::avs_postal_match(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CvvResult {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl CvvResult {
    pub fn from_code(code: Option<&str>) -> Self {
        Self {
            code: code.map(str::to_string),
            message: code.and_then(codes::cvv_message).map(str::to_string),
        }
    }
}

/// Uniform outcome of any gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub success: bool,
    pub message: String,
    /// Numeric `Result` code, when the gateway sent a parsable one.
    pub result_code: Option<i64>,
    pub authorization: AuthorizationReference,
    pub avs_result: AvsResult,
    pub cvv_result: CvvResult,
    pub test: bool,
    pub params: ParsedResponse,
}

impl NormalizedResult {
    pub fn is_host_error(&self) -> bool {
        self.result_code == Some(HOST_ERROR)
    }
}
