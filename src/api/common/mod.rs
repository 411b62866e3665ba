//
//  ashby-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Ashby client
//!
//! This module provides the error taxonomy shared by every layer of the client
//! together with the classifier that turns a raw HTTP exchange into either a
//! successful response envelope or exactly one [`AshbyError`].
//!
//! # Overview
//!
//! - [`AshbyError`] - Unified error type for all client operations
//! - [`ErrorKind`] - Coarse classification used by callers to branch on failures
//! - [`classify`] - Pure mapping from `(status, body)` to an error
//! - [`interpret`] - Success/failure decision for a complete response
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use ashby_sdk::api::common::{AshbyError, ErrorKind};
//!
//! fn handle<T>(result: Result<T, AshbyError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.kind() == ErrorKind::Auth => println!("Check ASHBY_API_KEY"),
//!         Err(AshbyError::NotFound { message, .. }) => println!("Missing: {}", message),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::api::transport::HttpResponse;
use crate::util::truncate;

mod pagination;

pub use pagination::*;

/// Longest slice of a response body quoted in an error message.
const MAX_BODY_IN_MESSAGE: usize = 500;

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, AshbyError>;

/// Unified error type for all Ashby client operations.
///
/// Errors are constructed once at the failure site and never mutated
/// afterwards. Every layer above the transport propagates them unchanged.
///
/// # Variants
///
/// | Variant | Description | Raised before network I/O |
/// |---------|-------------|---------------------------|
/// | `Auth` | API key missing or rejected (401/403) | when missing |
/// | `NotFound` | Requested identifier does not exist | no |
/// | `Api` | Any other server-reported failure | no |
/// | `Validation` | Caller misuse detected locally | yes |
/// | `Transport` | Connection, timeout or IO failure | no |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AshbyError {
    /// The API key is missing, invalid, or lacks permission.
    #[error("Authentication failed: {message}")]
    Auth {
        /// Human readable reason
        message: String,
    },

    /// The requested resource does not exist.
    ///
    /// Raised for HTTP 404 and for success-less envelopes whose errors carry
    /// a not-found style message.
    #[error("Resource not found: {message}")]
    NotFound {
        /// Human readable reason
        message: String,
        /// HTTP status, when the signal came from the HTTP layer
        status_code: Option<u16>,
        /// Server-provided error strings, verbatim
        errors: Vec<String>,
    },

    /// The server reported a failure that is neither auth nor not-found.
    #[error("API error: {message}")]
    Api {
        /// Human readable reason
        message: String,
        /// HTTP status code, when available
        status_code: Option<u16>,
        /// Server-provided error strings, verbatim
        errors: Vec<String>,
    },

    /// The caller supplied arguments the client rejects before any request.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The transport could not complete the exchange.
    #[error("Network error: {0}")]
    Transport(String),
}

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    NotFound,
    Api,
    Validation,
    Transport,
}

impl AshbyError {
    /// Builds an [`AshbyError::Auth`] from any message.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Builds an [`AshbyError::Validation`] from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds an [`AshbyError::NotFound`] that did not originate from HTTP.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            status_code: None,
            errors: Vec::new(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth { .. } => ErrorKind::Auth,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Api { .. } => ErrorKind::Api,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns the human readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Auth { message }
            | Self::NotFound { message, .. }
            | Self::Api { message, .. } => message,
            Self::Validation(message) | Self::Transport(message) => message,
        }
    }

    /// Returns the HTTP status code associated with the failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { status_code, .. } | Self::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Returns the server-provided error strings, if any.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::NotFound { errors, .. } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for AshbyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Classifies a failed exchange into exactly one error.
///
/// Precedence, first match wins:
///
/// 1. 401 / 403 → [`AshbyError::Auth`]
/// 2. 404, or a 2xx envelope whose errors carry a not-found message → [`AshbyError::NotFound`]
/// 3. an envelope with `success: false` → [`AshbyError::Api`] with the errors verbatim
/// 4. anything else → [`AshbyError::Api`] with the status code and body text
///
/// The HTTP status is consulted before the body, so a 404 whose body also
/// carries a generic `errors` array is still `NotFound`.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The parsed response body, when it was valid JSON
/// * `text` - The raw response body
pub fn classify(status: u16, body: Option<&Value>, text: &str) -> AshbyError {
    let errors = body.map(error_strings).unwrap_or_default();

    match status {
        401 => return AshbyError::auth("invalid or missing API key"),
        403 => return AshbyError::auth("API key does not have permission for this endpoint"),
        404 => {
            return AshbyError::NotFound {
                message: envelope_message(body, &errors)
                    .unwrap_or_else(|| format!("HTTP 404: {}", truncate(text.trim(), MAX_BODY_IN_MESSAGE))),
                status_code: Some(404),
                errors,
            }
        }
        _ => {}
    }

    if let Some(envelope) = body.filter(|b| b.is_object()) {
        if (200..300).contains(&status) && is_not_found(envelope, &errors) {
            return AshbyError::NotFound {
                message: envelope_message(body, &errors)
                    .unwrap_or_else(|| "resource not found".to_string()),
                status_code: Some(status),
                errors,
            };
        }

        if envelope.get("success").and_then(Value::as_bool) == Some(false) {
            return AshbyError::Api {
                message: envelope_message(body, &errors)
                    .unwrap_or_else(|| format!("unknown error (response: {})", envelope)),
                status_code: Some(status),
                errors,
            };
        }
    }

    AshbyError::Api {
        message: if text.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, truncate(text.trim(), MAX_BODY_IN_MESSAGE))
        },
        status_code: Some(status),
        errors,
    }
}

/// Decides whether a complete response is a success envelope.
///
/// Returns the parsed envelope when the status is 2xx and the body is a JSON
/// object with `success: true`; otherwise returns the classified error.
pub fn interpret(response: &HttpResponse) -> Result<Value> {
    let text = response.text();
    let body: Option<Value> = serde_json::from_str(&text).ok();

    if (200..300).contains(&response.status) {
        match &body {
            Some(envelope) if envelope.get("success").and_then(Value::as_bool) == Some(true) => {
                return Ok(envelope.clone());
            }
            Some(envelope) if envelope.is_object() => {
                return Err(classify(response.status, body.as_ref(), &text));
            }
            _ => {
                return Err(AshbyError::Api {
                    message: format!(
                        "response is not a JSON envelope: {}",
                        truncate(text.trim(), MAX_BODY_IN_MESSAGE)
                    ),
                    status_code: Some(response.status),
                    errors: Vec::new(),
                })
            }
        }
    }

    Err(classify(response.status, body.as_ref(), &text))
}

/// Extracts the `errors` array as strings; non-string entries are rendered as JSON.
fn error_strings(body: &Value) -> Vec<String> {
    body.get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn envelope_message(body: Option<&Value>, errors: &[String]) -> Option<String> {
    if let Some(message) = body
        .and_then(|b| b.get("errorInfo"))
        .and_then(|info| info.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
    {
        return Some(message.to_string());
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors.join("; "))
    }
}

fn is_not_found(envelope: &Value, errors: &[String]) -> bool {
    let info = envelope.get("errorInfo");
    let info_code = info.and_then(|i| i.get("code")).and_then(Value::as_str);
    let info_message = info.and_then(|i| i.get("message")).and_then(Value::as_str);

    errors
        .iter()
        .map(String::as_str)
        .chain(info_code)
        .chain(info_message)
        .any(mentions_not_found)
}

fn mentions_not_found(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("not_found") || lower.contains("not found") || lower.contains("notfound")
}
