//
//  ashby-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! ## Architecture
//!
//! - [`transport`]: plain-data HTTP exchange behind the [`Transport`] trait
//! - [`common`]: error classification and cursor pagination
//! - [`client`]: [`AshbyClient`], authentication and the request pipeline
//! - [`resource`]: descriptor-driven generic list/get resources
//! - [`resources`]: endpoints with bespoke request bodies or client-side logic
//!
//! ## Error Handling
//!
//! Every failure surfaces as exactly one [`AshbyError`] variant:
//!
//! - `Auth`: 401 / 403, or no API key configured
//! - `NotFound`: 404, or an envelope reporting a missing record
//! - `Api`: any other unsuccessful envelope or status
//! - `Validation`: rejected locally before any request
//! - `Transport`: the exchange did not complete

/// Core client with authentication and envelope handling.
pub mod client;

/// Error classification and pagination shared by every endpoint.
pub mod common;

/// Generic resources described by static descriptors.
pub mod resource;

/// Specialized resources.
pub mod resources;

/// HTTP transport abstraction.
pub mod transport;

pub use client::AshbyClient;
pub use common::{AshbyError, ErrorKind, Result};
pub use resource::{Filters, GenericResource, ResourceDescriptor};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, RetryTransport, Transport};
