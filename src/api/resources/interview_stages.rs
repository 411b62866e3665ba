//
//  ashby-sdk
//  api/resources/interview_stages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::AshbyClient;
use crate::api::common::{Result, DEFAULT_PAGE_SIZE};
use crate::api::resource::{fetch_one, map_all, require_id, Filters};
use crate::model::InterviewStage;

/// Interview stages, the steps of a job's hiring funnel.
pub struct InterviewStagesResource<'a> {
    client: &'a AshbyClient,
    page_size: u32,
}

impl<'a> InterviewStagesResource<'a> {
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

    /// Lists the stages of an interview plan, in server order.
    pub fn list(&self, interview_plan_id: &str) -> Result<Vec<InterviewStage>> {
        require_id("interviewPlanId", interview_plan_id)?;
        let filters = Filters::new().with("interviewPlanId", interview_plan_id);
        let items = self
            .client
            .collect_all("interviewStage.list", filters.as_map(), self.page_size)?;
        map_all(&items)
    }

    pub fn get(&self, stage_id: &str) -> Result<InterviewStage> {
        require_id("interviewStageId", stage_id)?;
        fetch_one(
            self.client,
            "interviewStage.info",
            Filters::new().with("interviewStageId", stage_id),
        )
    }

    /// Lists the funnel of a job, ordered by stage order.
    ///
    /// Uses the job's default interview plan, else its first plan. A job
    /// without any plan has an empty funnel.
    pub fn list_for_job(&self, job_id: &str) -> Result<Vec<InterviewStage>> {
        let job = self.client.jobs().get(job_id)?;
        let Some(plan_id) = job.interview_plan_id() else {
            tracing::debug!("Job {} has no interview plan", job_id);
            return Ok(Vec::new());
        };

        let mut stages = self.list(plan_id)?;
        stages.sort_by_key(|stage| stage.order.unwrap_or(0));
        Ok(stages)
    }
}
