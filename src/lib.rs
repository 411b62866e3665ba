//
//  ashby-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Ashby SDK
//!
//! A typed, blocking client library for the Ashby applicant tracking system
//! API.
//!
//! ## Overview
//!
//! Ashby exposes an RPC-style API: every operation is a `POST` to
//! `https://api.ashbyhq.com/<resource>.<action>` with a JSON body, answered by
//! a `{ success, results, moreDataAvailable, nextCursor, errors }` envelope.
//! This crate hides the envelope, follows pagination cursors, classifies
//! failures and maps loosely-shaped JSON into typed records.
//!
//! ## Module Structure
//!
//! - [`api`]: client, transport, errors, pagination and resources
//! - [`auth`]: API key handling
//! - [`config`]: client configuration (file and environment)
//! - [`model`]: typed records and the declarative record mapper
//! - [`forms`]: normalization of application form and survey submissions
//! - [`util`]: small helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ashby_sdk::{AshbyClient, ClientConfig};
//!
//! let client = AshbyClient::new(&ClientConfig::from_env())?;
//!
//! for candidate in client.candidates().search(&ashby_sdk::CandidateSearch::new().email("ada@example.com"))? {
//!     println!("{} <{}>", candidate.name, candidate.email().unwrap_or("-"));
//! }
//! # Ok::<(), ashby_sdk::AshbyError>(())
//! ```

/// HTTP client, transport, errors, pagination and resources.
pub mod api;

/// API key handling.
///
/// Keys are sent as the username of HTTP Basic authentication with an empty
/// password and are never printed by `Debug`.
pub mod auth;

/// Client configuration.
///
/// Read from `config.toml` in the platform configuration directory, with
/// `ASHBY_API_KEY` and `ASHBY_BASE_URL` taking precedence.
pub mod config;

/// Form submission normalization.
pub mod forms;

/// Typed records.
pub mod model;

/// Utility functions and helpers.
pub mod util;

pub use api::resources::{CandidateSearch, Download, NoteType};
pub use api::{AshbyClient, AshbyError, ErrorKind, Filters, GenericResource, Result};
pub use config::ClientConfig;
pub use forms::{normalize, Answer, Answers, NormalizedSubmission};

/// Library version, derived from Cargo.toml at compile time.
///
/// ```rust
/// assert!(!ashby_sdk::VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
