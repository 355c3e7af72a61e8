//! Lookup response envelope
//!
//! Every lookup answers with `{code, msg, data?}`. The code carries the
//! outcome; the transport status is always success.

use crate::constants::{codes, messages};
use serde::{Deserialize, Serialize};

/// Outcome category of a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// Pair verified
    Ok,

    /// Pair not in the catalog
    NotAdmitted,

    /// Request rejected before the catalog was consulted
    BadRequest,
}

impl ResponseCode {
    /// Numeric wire code
    pub fn as_u32(self) -> u32 {
        match self {
            ResponseCode::Ok => codes::OK,
            ResponseCode::NotAdmitted => codes::NOT_ADMITTED,
            ResponseCode::BadRequest => codes::BAD_REQUEST,
        }
    }

    /// Map a wire code back to its category
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            codes::OK => Some(ResponseCode::Ok),
            codes::NOT_ADMITTED => Some(ResponseCode::NotAdmitted),
            codes::BAD_REQUEST => Some(ResponseCode::BadRequest),
            _ => None,
        }
    }
}

/// Response body returned for every lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Numeric outcome code
    pub code: u32,

    /// Human-readable message
    pub msg: String,

    /// Matched major, present only on success
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<String>,
}

impl LookupResponse {
    /// Successful lookup disclosing the major
    pub fn found(major: impl Into<String>) -> Self {
        Self {
            code: codes::OK,
            msg: messages::FOUND.to_string(),
            data: Some(major.into()),
        }
    }

    /// Pair not present in the catalog
    pub fn not_admitted() -> Self {
        Self {
            code: codes::NOT_ADMITTED,
            msg: messages::NOT_ADMITTED.to_string(),
            data: None,
        }
    }

    /// Rejected request with a description of the problem
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            code: codes::BAD_REQUEST,
            msg: msg.into(),
            data: None,
        }
    }

    /// Request body could not be bound to a query
    pub fn invalid_body(detail: impl std::fmt::Display) -> Self {
        Self::bad_request(format!("{}{}", messages::INVALID_BODY_PREFIX, detail))
    }

    /// Student ID or name missing
    pub fn missing_parameters() -> Self {
        Self::bad_request(messages::MISSING_PARAMETERS)
    }

    /// Student ID not 12 digits
    pub fn invalid_student_id() -> Self {
        Self::bad_request(messages::INVALID_STUDENT_ID)
    }

    /// Outcome category, if the code is a known one
    pub fn response_code(&self) -> Option<ResponseCode> {
        ResponseCode::from_u32(self.code)
    }
}
