//
//  ashby-sdk
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! Requests and responses are described as plain data so the client core can
//! be exercised without a network. A [`Transport`] executes one exchange and
//! nothing more: it never interprets the Ashby envelope.
//!
//! ## Implementations
//!
//! - [`ReqwestTransport`]: blocking reqwest client with timeout and user agent
//! - [`RetryTransport`]: opt-in wrapper that retries failed idempotent exchanges

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::api::common::{AshbyError, Result};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Whether repeating this request cannot change remote state.
    pub idempotent: bool,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Checks whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP exchange.
///
/// Implementations must return `Ok` for every response the server sent,
/// whatever its status; `Err` is reserved for exchanges that did not complete
/// (connection refused, timeout, TLS failure, ...). Timeouts and cancellation
/// are the implementation's concern.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by a blocking [`reqwest`] client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::Transport`] if the HTTP client could not be built.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()?,
        })
    }

    /// Wraps an already configured reqwest client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Retries failed exchanges of an inner transport.
///
/// A failed exchange is a transport error or a 5xx response. Only requests
/// marked idempotent are retried unless [`retry_mutations`](Self::retry_mutations)
/// is enabled. The delay between attempts is fixed.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use ashby_sdk::api::transport::{ReqwestTransport, RetryTransport};
///
/// let inner = ReqwestTransport::new(Duration::from_secs(30), "my-app/1.0")?;
/// let transport = RetryTransport::new(inner, 3).with_delay(Duration::from_millis(250));
/// # Ok::<(), ashby_sdk::AshbyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RetryTransport<T> {
    inner: T,
    max_attempts: u32,
    delay: Duration,
    retry_mutations: bool,
}

impl<T: Transport> RetryTransport<T> {
    /// Wraps `inner`, making at most `max_attempts` attempts (minimum one).
    pub fn new(inner: T, max_attempts: u32) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            delay: Duration::ZERO,
            retry_mutations: false,
        }
    }

    /// Sets the pause between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Allows retrying requests that are not idempotent.
    pub fn retry_mutations(mut self, enabled: bool) -> Self {
        self.retry_mutations = enabled;
        self
    }

    fn may_retry(&self, request: &HttpRequest) -> bool {
        request.idempotent || self.retry_mutations
    }
}

impl<T: Transport> Transport for RetryTransport<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut attempt = 1;
        loop {
            let outcome = self.inner.execute(request);
            let failed = match &outcome {
                Ok(response) => response.status >= 500,
                Err(AshbyError::Transport(_)) => true,
                Err(_) => false,
            };

            if !failed || attempt >= self.max_attempts || !self.may_retry(request) {
                return outcome;
            }

            tracing::warn!(
                "Retrying {} (attempt {} of {})",
                request.url,
                attempt + 1,
                self.max_attempts
            );
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Flaky {
        outcomes: Mutex<Vec<Result<HttpResponse>>>,
        calls: Mutex<u32>,
    }

    impl Flaky {
        fn new(mut outcomes: Vec<Result<HttpResponse>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl Transport for &Flaky {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse> {
            *self.calls.lock().unwrap() += 1;
            self.outcomes.lock().unwrap().pop().unwrap()
        }
    }

    fn status(code: u16) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: code,
            headers: Vec::new(),
            body: Vec::new(),
        })
    }

    fn request(idempotent: bool) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: "https://api.example.test/job.list".to_string(),
            headers: Vec::new(),
            body: None,
            idempotent,
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("Content-Disposition".to_string(), "inline".to_string())],
            body: Vec::new(),
        };
        assert_eq!(response.header("content-disposition"), Some("inline"));
        assert!(response.header("etag").is_none());
    }

    #[test]
    fn test_retries_idempotent_until_success() {
        let flaky = Flaky::new(vec![
            Err(AshbyError::Transport("reset".to_string())),
            status(503),
            status(200),
        ]);
        let transport = RetryTransport::new(&flaky, 3);
        let response = transport.execute(&request(true)).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(flaky.calls(), 3);
    }

    #[test]
    fn test_does_not_retry_mutations_by_default() {
        let flaky = Flaky::new(vec![status(503), status(200)]);
        let transport = RetryTransport::new(&flaky, 3);
        let response = transport.execute(&request(false)).unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(flaky.calls(), 1);
    }

    #[test]
    fn test_retries_mutations_when_opted_in() {
        let flaky = Flaky::new(vec![status(503), status(200)]);
        let transport = RetryTransport::new(&flaky, 3).retry_mutations(true);
        assert_eq!(transport.execute(&request(false)).unwrap().status, 200);
        assert_eq!(flaky.calls(), 2);
    }

    #[test]
    fn test_client_errors_are_not_retried() {
        let flaky = Flaky::new(vec![status(400), status(200)]);
        let transport = RetryTransport::new(&flaky, 3);
        assert_eq!(transport.execute(&request(true)).unwrap().status, 400);
        assert_eq!(flaky.calls(), 1);
    }
}
