//
//  ashby-sdk
//  api/resources/jobs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde_json::Value;

use crate::api::client::AshbyClient;
use crate::api::common::{Result, DEFAULT_PAGE_SIZE};
use crate::api::resource::{fetch_one, map_all, require_id, Filters};
use crate::model::Job;

/// Jobs (`job.list`, `job.info`).
pub struct JobsResource<'a> {
    client: &'a AshbyClient,
    page_size: u32,
}

impl<'a> JobsResource<'a> {
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

    /// Lists jobs, optionally restricted to the given statuses
    /// (`Open`, `Closed`, `Draft`, `Archived`).
    ///
    /// An empty `statuses` slice lists every job.
    pub fn list(&self, statuses: &[&str]) -> Result<Vec<Job>> {
        let status = (!statuses.is_empty())
            .then(|| Value::from(statuses.iter().map(|s| s.to_string()).collect::<Vec<_>>()));
        let filters = Filters::new().with_opt("status", status);

        let items = self
            .client
            .collect_all("job.list", filters.as_map(), self.page_size)?;
        map_all(&items)
    }

    /// Fetches one job.
    pub fn get(&self, job_id: &str) -> Result<Job> {
        require_id("id", job_id)?;
        fetch_one(self.client, "job.info", Filters::new().with("id", job_id))
    }
}
