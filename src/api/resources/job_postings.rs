//
//  ashby-sdk
//  api/resources/job_postings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Job postings, the public listings that carry job descriptions.
//!
//! `jobPosting.list` ignores a `jobId` filter, so filtering by job happens
//! on the client after all postings are fetched.

use std::cmp::Reverse;

use crate::api::client::AshbyClient;
use crate::api::common::{Result, DEFAULT_PAGE_SIZE};
use crate::api::resource::{fetch_one, map_all, require_id, Filters};
use crate::model::JobPosting;

pub struct JobPostingsResource<'a> {
    client: &'a AshbyClient,
    page_size: u32,
}

impl<'a> JobPostingsResource<'a> {
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

    /// Lists postings, optionally only those of one job.
    pub fn list(&self, job_id: Option<&str>) -> Result<Vec<JobPosting>> {
        let items = self
            .client
            .collect_all("jobPosting.list", Filters::new().as_map(), self.page_size)?;
        let postings: Vec<JobPosting> = map_all(&items)?;

        Ok(match job_id {
            Some(job_id) => postings.into_iter().filter(|p| p.job_id == job_id).collect(),
            None => postings,
        })
    }

    /// Fetches one posting with its description.
    pub fn get(&self, posting_id: &str) -> Result<JobPosting> {
        require_id("jobPostingId", posting_id)?;
        fetch_one(
            self.client,
            "jobPosting.info",
            Filters::new().with("jobPostingId", posting_id),
        )
    }

    /// Picks the best posting of a job and fetches its full details.
    ///
    /// A job with one posting uses it. Otherwise the posting whose title
    /// equals `title` wins, falling back to the most recently updated one.
    /// Returns `None` when the job has no postings.
    pub fn get_for_job(&self, job_id: &str, title: Option<&str>) -> Result<Option<JobPosting>> {
        let postings = self.list(Some(job_id))?;

        let chosen = match postings.as_slice() {
            [] => return Ok(None),
            [only] => only,
            many => title
                .and_then(|t| many.iter().find(|p| p.title == t))
                .or_else(|| many.iter().min_by_key(|p| Reverse(p.updated_at)))
                .unwrap_or(&many[0]),
        };

        self.get(&chosen.id).map(Some)
    }

    /// Plain-text description of a job's best posting.
    ///
    /// The job's own title is used to pick among several postings; if the
    /// job cannot be read the most recently updated posting is used.
    pub fn description_for_job(&self, job_id: &str) -> Result<Option<String>> {
        let title = match self.client.jobs().get(job_id) {
            Ok(job) => Some(job.title).filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::debug!("Could not read job {} for posting match: {}", job_id, e);
                None
            }
        };

        Ok(self
            .get_for_job(job_id, title.as_deref())?
            .and_then(|posting| posting.description()))
    }
}
