//
//  ashby-sdk
//  api/resources/surveys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::AshbyClient;
use crate::api::common::{Result, DEFAULT_PAGE_SIZE};
use crate::api::resource::{map_all, require_id, Filters};
use crate::model::SurveySubmission;

/// Survey type listed when the caller does not choose one.
pub const DEFAULT_SURVEY_TYPE: &str = "Questionnaire";

/// Survey (questionnaire) submissions.
pub struct SurveysResource<'a> {
    client: &'a AshbyClient,
    page_size: u32,
}

impl<'a> SurveysResource<'a> {
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

    /// Lists every submission of `survey_type`.
    pub fn list(&self, survey_type: &str) -> Result<Vec<SurveySubmission>> {
        require_id("surveyType", survey_type)?;
        let filters = Filters::new().with("surveyType", survey_type);
        let items = self
            .client
            .collect_all("surveySubmission.list", filters.as_map(), self.page_size)?;
        map_all(&items)
    }

    /// Submissions of `survey_type` made by one candidate.
    ///
    /// The endpoint has no candidate filter, so every submission is fetched
    /// and filtered here.
    pub fn for_candidate(&self, candidate_id: &str, survey_type: &str) -> Result<Vec<SurveySubmission>> {
        require_id("candidateId", candidate_id)?;
        Ok(self
            .list(survey_type)?
            .into_iter()
            .filter(|s| s.candidate_id.as_deref() == Some(candidate_id))
            .collect())
    }
}
