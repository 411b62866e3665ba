//
//  ashby-sdk
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cursor Pagination for Ashby List Endpoints
//!
//! Every `*.list` endpoint in the Ashby API pages with an opaque cursor. A
//! request carries `limit` and (after the first page) `cursor`; the response
//! envelope reports `moreDataAvailable` and `nextCursor`.
//!
//! # Overview
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Page`] | One page, deserialized from a response envelope |
//! | [`collect_all`] | Drives a sender until the server reports no further pages |
//! | [`DEFAULT_PAGE_SIZE`] | Page size used when the caller does not choose one |
//!
//! # Termination
//!
//! The loop stops only when the server says `moreDataAvailable: false`. An
//! empty page is not a stop signal on its own, and a full final page may be
//! followed by one more request that returns the explicit "no more" answer.
//!
//! # Failure
//!
//! Any error from the sender aborts the loop and is returned unchanged.
//! Items already accumulated are dropped; callers never see a partial list.
//!
//! # Example
//!
//! ```rust
//! use ashby_sdk::api::common::collect_all;
//! use serde_json::{json, Map};
//!
//! let mut calls = 0;
//! let items = collect_all("candidate.list", &Map::new(), 2, |_endpoint, body| {
//!     calls += 1;
//!     Ok(match body.get("cursor") {
//!         None => json!({"success": true, "results": [1, 2], "moreDataAvailable": true, "nextCursor": "c2"}),
//!         Some(_) => json!({"success": true, "results": [3], "moreDataAvailable": false}),
//!     })
//! })
//! .unwrap();
//!
//! assert_eq!(items, vec![json!(1), json!(2), json!(3)]);
//! assert_eq!(calls, 2);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{AshbyError, Result};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// One page of a cursor-paginated response.
///
/// `results` may be absent from the envelope, which reads as an empty page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Raw items of this page, in server order.
    #[serde(default)]
    pub results: Vec<Value>,

    /// Whether the server holds further pages.
    #[serde(default, rename = "moreDataAvailable")]
    pub more_data_available: bool,

    /// Opaque continuation token for the next request.
    #[serde(default, rename = "nextCursor")]
    pub next_cursor: Option<String>,
}

impl Page {
    /// Reads a page from a success envelope.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::Api`] when `results` is present but not an array.
    pub fn from_envelope(envelope: &Value) -> Result<Self> {
        let mut page = Page {
            results: Vec::new(),
            more_data_available: envelope
                .get("moreDataAvailable")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            next_cursor: envelope
                .get("nextCursor")
                .and_then(Value::as_str)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };

        match envelope.get("results") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => page.results = items.clone(),
            Some(other) => {
                return Err(AshbyError::Api {
                    message: format!("expected a list of results, found {}", other),
                    status_code: None,
                    errors: Vec::new(),
                })
            }
        }

        Ok(page)
    }

    /// Checks if the server reported more pages.
    pub fn has_next(&self) -> bool {
        self.more_data_available
    }

    /// Returns the cursor to send with the next request.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }
}

/// Fetches every page of `endpoint` and returns all items in server order.
///
/// `send` performs one request: it receives the endpoint name and the full
/// request body (`base_body` merged with `limit` and, after the first page,
/// `cursor`) and returns the success envelope.
///
/// # Errors
///
/// - [`AshbyError::Validation`] when `page_size` is zero; no request is made
/// - the first error returned by `send`, unchanged
/// - [`AshbyError::Api`] when a page claims more data but carries no cursor,
///   or hands back a cursor it already returned
pub fn collect_all<F>(
    endpoint: &str,
    base_body: &Map<String, Value>,
    page_size: u32,
    mut send: F,
) -> Result<Vec<Value>>
where
    F: FnMut(&str, Value) -> Result<Value>,
{
    if page_size == 0 {
        return Err(AshbyError::validation("page size must be a positive integer"));
    }

    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut seen = HashSet::new();
    let mut page_number = 1u32;

    loop {
        let mut body = base_body.clone();
        body.insert("limit".to_string(), Value::from(page_size));
        if let Some(cursor) = &cursor {
            body.insert("cursor".to_string(), Value::String(cursor.clone()));
        }

        let envelope = send(endpoint, Value::Object(body))?;
        let page = Page::from_envelope(&envelope)?;

        tracing::debug!(
            "{} page {}: {} items, more: {}",
            endpoint,
            page_number,
            page.results.len(),
            page.has_next()
        );

        let has_next = page.has_next();
        let next = page.next_cursor.clone();
        items.extend(page.results);

        if !has_next {
            return Ok(items);
        }

        match next {
            Some(next) if !seen.insert(next.clone()) => {
                return Err(AshbyError::Api {
                    message: format!(
                        "{} repeated cursor {} on page {}",
                        endpoint, next, page_number
                    ),
                    status_code: None,
                    errors: Vec::new(),
                })
            }
            Some(next) => cursor = Some(next),
            None => {
                return Err(AshbyError::Api {
                    message: format!(
                        "{} reported more data on page {} without a cursor",
                        endpoint, page_number
                    ),
                    status_code: None,
                    errors: Vec::new(),
                })
            }
        }
        page_number += 1;
    }
}
