//
//  ashby-sdk
//  api/resources/feedback.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::AshbyClient;
use crate::api::common::Result;
use crate::api::resource::{fetch_list, require_id, Filters};
use crate::model::Feedback;

/// Interview feedback (scorecards).
pub struct FeedbackResource<'a> {
    client: &'a AshbyClient,
}

impl<'a> FeedbackResource<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// All feedback submitted on an application. The endpoint is not paginated.
    pub fn list_for_application(&self, application_id: &str) -> Result<Vec<Feedback>> {
        require_id("applicationId", application_id)?;
        fetch_list(
            self.client,
            "applicationFeedback.list",
            Filters::new().with("applicationId", application_id),
        )
    }
}
