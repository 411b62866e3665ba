//
//  ashby-sdk
//  model/interview.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interview, feedback and survey records.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::mapper::{FieldSpec, Fields, Record};
use super::organization::User;

#[derive(Debug, Clone, PartialEq)]
pub struct Interview {
    pub id: String,
    pub application_id: Option<String>,
    pub status: Option<String>,
    pub interview_stage_id: Option<String>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Record for Interview {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::opt_text("application_id", &["applicationId"]),
        FieldSpec::opt_text("status", &["status"]),
        FieldSpec::opt_text("interview_stage_id", &["interviewStageId"]),
        FieldSpec::opt_text("start", &["scheduledStartTime", "startTime"]),
        FieldSpec::opt_text("end", &["scheduledEndTime", "endTime"]),
        FieldSpec::opt_text("created_at", &["createdAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            application_id: fields.opt_string("application_id"),
            status: fields.opt_string("status"),
            interview_stage_id: fields.opt_string("interview_stage_id"),
            scheduled_start_time: fields.timestamp("start"),
            scheduled_end_time: fields.timestamp("end"),
            created_at: fields.timestamp("created_at"),
            raw_data: fields.into_raw(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSchedule {
    pub id: String,
    pub application_id: Option<String>,
    pub status: Option<String>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Record for InterviewSchedule {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::opt_text("application_id", &["applicationId"]),
        FieldSpec::opt_text("status", &["status"]),
        FieldSpec::opt_text("start", &["scheduledStartTime", "startTime"]),
        FieldSpec::opt_text("end", &["scheduledEndTime", "endTime"]),
        FieldSpec::opt_text("created_at", &["createdAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            application_id: fields.opt_string("application_id"),
            status: fields.opt_string("status"),
            scheduled_start_time: fields.timestamp("start"),
            scheduled_end_time: fields.timestamp("end"),
            created_at: fields.timestamp("created_at"),
            raw_data: fields.into_raw(),
        }
    }
}

/// Titles treated as the overall recommendation of a scorecard.
const RECOMMENDATION_TITLES: &[&str] = &["overall recommendation", "recommendation"];

/// Interviewer feedback (a scorecard) on an application.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub application_id: String,
    pub interview_id: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub submitter: Option<User>,
    pub form_definition: Option<Value>,
    pub submitted_values: Vec<Value>,
    pub raw_data: Map<String, Value>,
}

impl Feedback {
    /// Value of the scorecard field whose title matches `title`, ignoring case.
    pub fn score(&self, title: &str) -> Option<&Value> {
        self.submitted_values
            .iter()
            .find(|entry| {
                entry
                    .pointer("/field/title")
                    .and_then(Value::as_str)
                    .is_some_and(|t| t.eq_ignore_ascii_case(title))
            })
            .and_then(|entry| entry.get("value"))
    }

    /// The value of the first "Overall Recommendation" or "Recommendation" field.
    pub fn overall_recommendation(&self) -> Option<&Value> {
        self.submitted_values
            .iter()
            .find(|entry| {
                entry
                    .pointer("/field/title")
                    .and_then(Value::as_str)
                    .is_some_and(|t| RECOMMENDATION_TITLES.contains(&t.to_lowercase().as_str()))
            })
            .and_then(|entry| entry.get("value"))
    }
}

impl Record for Feedback {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("application_id", &["applicationId"]),
        FieldSpec::opt_text("interview_id", &["interviewId"]),
        FieldSpec::opt_text("submitted_at", &["submittedAt"]),
        FieldSpec::object("submitter", &["submittedByUser", "submitter"]),
        FieldSpec::object("form_definition", &["formDefinition"]),
        FieldSpec::list("submitted_values", &["submittedValues"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            application_id: fields.string("application_id"),
            interview_id: fields.opt_string("interview_id"),
            submitted_at: fields.timestamp("submitted_at"),
            submitter: fields.nested("submitter"),
            form_definition: fields.value("form_definition").cloned(),
            submitted_values: fields.list("submitted_values").to_vec(),
            raw_data: fields.into_raw(),
        }
    }
}

/// A survey (questionnaire) submission.
///
/// The answers stay in `raw_data`; run it through
/// [`forms::normalize`](crate::forms::normalize) to read them.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveySubmission {
    pub id: String,
    pub survey_type: String,
    pub candidate_id: Option<String>,
    pub application_id: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Record for SurveySubmission {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("survey_type", &["surveyType"]),
        FieldSpec::opt_text("candidate_id", &["candidateId"]),
        FieldSpec::opt_text("application_id", &["applicationId"]),
        FieldSpec::opt_text("submitted_at", &["submittedAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            survey_type: fields.string("survey_type"),
            candidate_id: fields.opt_string("candidate_id"),
            application_id: fields.opt_string("application_id"),
            submitted_at: fields.timestamp("submitted_at"),
            raw_data: fields.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feedback() -> Feedback {
        Feedback::from_raw(&json!({
            "id": "fb-1",
            "applicationId": "app-1",
            "submittedAt": "2025-03-01T10:00:00.000Z",
            "submittedValues": [
                {"field": {"title": "Technical Skills"}, "value": 4},
                {"field": {"title": "Overall Recommendation"}, "value": "Strong Yes"},
                {"value": "orphan"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_feedback_score_lookup() {
        let fb = feedback();
        assert_eq!(fb.score("technical skills"), Some(&json!(4)));
        assert!(fb.score("Communication").is_none());
        assert!(fb.submitted_at.is_some());
    }

    #[test]
    fn test_overall_recommendation() {
        assert_eq!(feedback().overall_recommendation(), Some(&json!("Strong Yes")));

        let fb = Feedback::from_raw(&json!({"id": "fb-2"})).unwrap();
        assert!(fb.overall_recommendation().is_none());
    }

    #[test]
    fn test_interview_times() {
        let interview = Interview::from_raw(&json!({
            "id": "int-1",
            "scheduledStartTime": "2025-03-01T10:00:00Z",
            "scheduledEndTime": "not a time"
        }))
        .unwrap();
        assert!(interview.scheduled_start_time.is_some());
        assert!(interview.scheduled_end_time.is_none());
    }

    #[test]
    fn test_survey_submission() {
        let survey = SurveySubmission::from_raw(&json!({
            "id": "s-1",
            "surveyType": "Questionnaire",
            "candidateId": "cand-1"
        }))
        .unwrap();
        assert_eq!(survey.candidate_id.as_deref(), Some("cand-1"));
        assert_eq!(survey.survey_type, "Questionnaire");
    }
}
