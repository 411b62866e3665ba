//
//  ashby-sdk
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Generic Resources
//!
//! Most Ashby resources are nothing more than an endpoint prefix plus a
//! record shape: `department.list` pages through departments,
//! `department.info` fetches one by `departmentId`. Each of them is described
//! by a [`ResourceDescriptor`] held as plain immutable data in [`registry`],
//! and served by one [`GenericResource`] implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ashby_sdk::{AshbyClient, Filters};
//!
//! let client = AshbyClient::from_env()?;
//!
//! let departments = client.departments().list(Filters::new())?;
//! let engineering = client.departments().get("dept_123")?;
//!
//! // Sources have no `.info` endpoint
//! assert!(client.sources().get("src_1").is_err());
//! # Ok::<(), ashby_sdk::AshbyError>(())
//! ```

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::api::client::AshbyClient;
use crate::api::common::{AshbyError, Result, DEFAULT_PAGE_SIZE};
use crate::model::Record;

/// A named remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub paginated: bool,
}

/// Which operations a resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operations {
    pub list: bool,
    pub get: bool,
}

impl Operations {
    pub const LIST: Self = Self {
        list: true,
        get: false,
    };

    pub const LIST_AND_GET: Self = Self {
        list: true,
        get: true,
    };
}

/// Static description of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Endpoint prefix, e.g. `department`
    pub prefix: &'static str,
    /// Body key carrying the identifier of `<prefix>.info`, e.g. `departmentId`
    pub id_param: &'static str,
    pub operations: Operations,
}

impl ResourceDescriptor {
    pub const fn new(prefix: &'static str, id_param: &'static str, operations: Operations) -> Self {
        Self {
            prefix,
            id_param,
            operations,
        }
    }

    /// The paginated `<prefix>.list` endpoint, if supported.
    pub fn list_endpoint(&self) -> Option<Endpoint> {
        self.operations.list.then(|| Endpoint {
            name: format!("{}.list", self.prefix),
            paginated: true,
        })
    }

    /// The `<prefix>.info` endpoint, if supported.
    pub fn info_endpoint(&self) -> Option<Endpoint> {
        self.operations.get.then(|| Endpoint {
            name: format!("{}.info", self.prefix),
            paginated: false,
        })
    }
}

/// Descriptors of every resource served by [`GenericResource`].
pub mod registry {
    use super::{Operations, ResourceDescriptor};

    pub static SOURCES: ResourceDescriptor = ResourceDescriptor::new("source", "sourceId", Operations::LIST);
    pub static ARCHIVE_REASONS: ResourceDescriptor =
        ResourceDescriptor::new("archiveReason", "archiveReasonId", Operations::LIST);
    pub static CLOSE_REASONS: ResourceDescriptor =
        ResourceDescriptor::new("closeReason", "closeReasonId", Operations::LIST);
    pub static CANDIDATE_TAGS: ResourceDescriptor =
        ResourceDescriptor::new("candidateTag", "candidateTagId", Operations::LIST);
    pub static HIRING_TEAM_ROLES: ResourceDescriptor =
        ResourceDescriptor::new("hiringTeamRole", "hiringTeamRoleId", Operations::LIST);

    pub static DEPARTMENTS: ResourceDescriptor =
        ResourceDescriptor::new("department", "departmentId", Operations::LIST_AND_GET);
    pub static LOCATIONS: ResourceDescriptor =
        ResourceDescriptor::new("location", "locationId", Operations::LIST_AND_GET);
    pub static USERS: ResourceDescriptor = ResourceDescriptor::new("user", "userId", Operations::LIST_AND_GET);
    pub static CUSTOM_FIELDS: ResourceDescriptor =
        ResourceDescriptor::new("customField", "customFieldId", Operations::LIST_AND_GET);
    pub static PROJECTS: ResourceDescriptor =
        ResourceDescriptor::new("project", "projectId", Operations::LIST_AND_GET);
    pub static OFFERS: ResourceDescriptor = ResourceDescriptor::new("offer", "offerId", Operations::LIST_AND_GET);
    pub static INTERVIEWS: ResourceDescriptor =
        ResourceDescriptor::new("interview", "interviewId", Operations::LIST_AND_GET);
    pub static INTERVIEW_SCHEDULES: ResourceDescriptor =
        ResourceDescriptor::new("interviewSchedule", "interviewScheduleId", Operations::LIST_AND_GET);

    /// Every registered descriptor.
    pub static ALL: [&ResourceDescriptor; 13] = [
        &SOURCES,
        &ARCHIVE_REASONS,
        &CLOSE_REASONS,
        &CANDIDATE_TAGS,
        &HIRING_TEAM_ROLES,
        &DEPARTMENTS,
        &LOCATIONS,
        &USERS,
        &CUSTOM_FIELDS,
        &PROJECTS,
        &OFFERS,
        &INTERVIEWS,
        &INTERVIEW_SCHEDULES,
    ];
}

/// Optional request-body fields.
///
/// Keys keep insertion order; `None` values are never added, so an absent
/// filter is omitted from the body rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters(Map<String, Value>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Adds a filter only when `value` is `Some`.
    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// List/get operations for a resource described by a [`ResourceDescriptor`].
pub struct GenericResource<'a, R> {
    client: &'a AshbyClient,
    descriptor: &'static ResourceDescriptor,
    record: PhantomData<fn() -> R>,
}

impl<'a, R: Record> GenericResource<'a, R> {
    pub fn new(client: &'a AshbyClient, descriptor: &'static ResourceDescriptor) -> Self {
        Self {
            client,
            descriptor,
            record: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Lists every record matching `filters`.
    ///
    /// # Errors
    ///
    /// Propagates the first transport or API error; never returns a partial
    /// list.
    pub fn list(&self, filters: Filters) -> Result<Vec<R>> {
        self.list_with_page_size(filters, DEFAULT_PAGE_SIZE)
    }

    /// Lists every record matching `filters`, `page_size` items per request.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::Validation`] for a zero page size or a resource
    /// without a list endpoint, before any request.
    pub fn list_with_page_size(&self, filters: Filters, page_size: u32) -> Result<Vec<R>> {
        let endpoint = self.descriptor.list_endpoint().ok_or_else(|| {
            AshbyError::validation(format!("{} does not support list", self.descriptor.prefix))
        })?;

        let items = self
            .client
            .collect_all(&endpoint.name, filters.as_map(), page_size)?;
        map_all(&items)
    }

    /// Fetches one record by identifier.
    ///
    /// # Errors
    ///
    /// - [`AshbyError::Validation`] if the resource has no `.info` endpoint or
    ///   `id` is empty
    /// - [`AshbyError::NotFound`] if the server has no such record
    pub fn get(&self, id: &str) -> Result<R> {
        let endpoint = self.descriptor.info_endpoint().ok_or_else(|| {
            AshbyError::validation(format!(
                "{} does not support get by identifier",
                self.descriptor.prefix
            ))
        })?;
        require_id(self.descriptor.id_param, id)?;

        let body = Filters::new().with(self.descriptor.id_param, id);
        fetch_one(self.client, &endpoint.name, body)
    }
}

/// Rejects an empty identifier before any request.
pub(crate) fn require_id(name: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(AshbyError::validation(format!("{} is required", name)));
    }
    Ok(())
}

/// Maps every raw item into a record.
pub(crate) fn map_all<R: Record>(items: &[Value]) -> Result<Vec<R>> {
    items.iter().map(R::from_raw).collect()
}

/// Sends a single request and maps its `results` object.
pub(crate) fn fetch_one<R: Record>(client: &AshbyClient, endpoint: &str, body: Filters) -> Result<R> {
    let envelope = client.send(endpoint, Value::Object(body.into_map()))?;
    match envelope.get("results") {
        Some(result) if !result.is_null() => R::from_raw(result),
        _ => Err(AshbyError::not_found(format!("{} returned no record", endpoint))),
    }
}

/// Sends a single non-paginated request and maps its `results` list.
pub(crate) fn fetch_list<R: Record>(client: &AshbyClient, endpoint: &str, body: Filters) -> Result<Vec<R>> {
    let envelope = client.send(endpoint, Value::Object(body.into_map()))?;
    match envelope.get("results") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => map_all(items),
        Some(other) => Err(AshbyError::Api {
            message: format!("{} returned {} instead of a list", endpoint, other),
            status_code: None,
            errors: Vec::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoints_follow_prefix() {
        let list = registry::DEPARTMENTS.list_endpoint().unwrap();
        assert_eq!(list.name, "department.list");
        assert!(list.paginated);

        let info = registry::DEPARTMENTS.info_endpoint().unwrap();
        assert_eq!(info.name, "department.info");
        assert!(!info.paginated);
    }

    #[test]
    fn test_list_only_resources_have_no_info() {
        for descriptor in [
            &registry::SOURCES,
            &registry::ARCHIVE_REASONS,
            &registry::CLOSE_REASONS,
            &registry::CANDIDATE_TAGS,
            &registry::HIRING_TEAM_ROLES,
        ] {
            assert!(descriptor.info_endpoint().is_none(), "{}", descriptor.prefix);
            assert!(descriptor.list_endpoint().is_some());
        }
    }

    #[test]
    fn test_id_param_convention() {
        for descriptor in registry::ALL.iter() {
            assert_eq!(descriptor.id_param, format!("{}Id", descriptor.prefix));
        }
    }

    #[test]
    fn test_filters_omit_none() {
        let filters = Filters::new()
            .with("jobId", "job-1")
            .with_opt::<&str>("status", None)
            .with_opt("expand", Some(json!(["applicationFormSubmissions"])));

        assert_eq!(
            Value::Object(filters.into_map()),
            json!({"jobId": "job-1", "expand": ["applicationFormSubmissions"]})
        );
    }

    #[test]
    fn test_require_id() {
        assert!(require_id("id", "abc").is_ok());
        assert!(matches!(require_id("id", "  "), Err(AshbyError::Validation(_))));
    }
}
