//
//  ashby-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Ashby authenticates every request with HTTP Basic authentication, using the
//! API key as the username and an empty password.
//!
//! ## Example
//!
//! ```rust
//! use ashby_sdk::auth::ApiKey;
//!
//! let key = ApiKey::new("my-secret-key");
//! assert_eq!(key.authorization_header(), "Basic bXktc2VjcmV0LWtleTo=");
//! assert_eq!(format!("{:?}", key), "ApiKey(\"my-s****\")");
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Name of the environment variable holding the API key.
pub const API_KEY_ENV: &str = "ASHBY_API_KEY";

/// An Ashby API key.
///
/// The `Debug` implementation only reveals the first four characters so keys
/// do not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw API key; surrounding whitespace is trimmed.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// Returns the raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Builds the `Authorization` header value: `Basic base64("<key>:")`.
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:", self.0)))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "ApiKey(\"{}****\")", visible)
    }
}

/// Validates the format of an API key.
///
/// This is a format check only: the key must not be empty and must not contain
/// whitespace. Whether the server accepts it is only known after a request.
pub fn validate_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}
