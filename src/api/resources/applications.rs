//
//  ashby-sdk
//  api/resources/applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Applications, including the two pipeline mutations: moving an
//! application to another stage and archiving it.

use serde_json::json;

use crate::api::client::AshbyClient;
use crate::api::common::{Result, DEFAULT_PAGE_SIZE};
use crate::api::resource::{fetch_one, map_all, require_id, Filters};
use crate::model::Application;

/// Expansion that inlines application form submissions into `application.info`.
const EXPAND_FORMS: &str = "applicationFormSubmissions";

pub struct ApplicationsResource<'a> {
    client: &'a AshbyClient,
    page_size: u32,
}

impl<'a> ApplicationsResource<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Requests `page_size` items per page when listing. Zero is rejected by
    /// the list calls before any request.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Lists applications, optionally for one job.
    pub fn list(&self, job_id: Option<&str>) -> Result<Vec<Application>> {
        let filters = Filters::new().with_opt("jobId", job_id);
        let items = self
            .client
            .collect_all("application.list", filters.as_map(), self.page_size)?;
        map_all(&items)
    }

    /// Fetches one application.
    pub fn get(&self, application_id: &str) -> Result<Application> {
        require_id("applicationId", application_id)?;
        fetch_one(
            self.client,
            "application.info",
            Filters::new().with("applicationId", application_id),
        )
    }

    /// Fetches one application with `form_submissions` populated.
    pub fn get_with_forms(&self, application_id: &str) -> Result<Application> {
        require_id("applicationId", application_id)?;
        let filters = Filters::new()
            .with("applicationId", application_id)
            .with("expand", json!([EXPAND_FORMS]));
        fetch_one(self.client, "application.info", filters)
    }

    /// Moves an application to another interview stage.
    ///
    /// Sent once; never retried unless the transport was configured to
    /// retry mutations.
    pub fn change_stage(&self, application_id: &str, interview_stage_id: &str) -> Result<Application> {
        require_id("applicationId", application_id)?;
        require_id("interviewStageId", interview_stage_id)?;
        let filters = Filters::new()
            .with("applicationId", application_id)
            .with("interviewStageId", interview_stage_id);
        fetch_one(self.client, "application.changeStage", filters)
    }

    /// Archives an application with the given archive reason.
    pub fn archive(&self, application_id: &str, archive_reason_id: &str) -> Result<Application> {
        require_id("applicationId", application_id)?;
        require_id("archiveReasonId", archive_reason_id)?;
        let filters = Filters::new()
            .with("applicationId", application_id)
            .with("isArchived", true)
            .with("archiveReasonId", archive_reason_id);
        fetch_one(self.client, "application.update", filters)
    }
}
