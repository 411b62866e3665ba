//
//  ashby-sdk
//  model/job.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Job records: jobs, their public postings, and the interview stages that
//! make up their hiring funnel.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::candidate::CustomField;
use super::mapper::{FieldSpec, Fields, Record};
use super::organization::HiringTeamMember;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<]+?>").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A job (requisition), independent of how it is advertised.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub status: String,
    pub confidential: bool,
    pub employment_type: Option<String>,
    pub department_id: Option<String>,
    pub location_id: Option<String>,
    pub job_posting_ids: Vec<String>,
    pub hiring_team: Vec<HiringTeamMember>,
    pub custom_fields: Vec<CustomField>,
    pub default_interview_plan_id: Option<String>,
    pub interview_plan_ids: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Job {
    /// The plan whose stages form this job's funnel: the default plan, else
    /// the first listed one.
    pub fn interview_plan_id(&self) -> Option<&str> {
        self.default_interview_plan_id
            .as_deref()
            .or_else(|| self.interview_plan_ids.first().map(String::as_str))
    }
}

impl Record for Job {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("title", &["title", "name"]),
        FieldSpec::text("status", &["status"]),
        FieldSpec::flag("confidential", &["confidential", "isConfidential"], false),
        FieldSpec::opt_text("employment_type", &["employmentType"]),
        FieldSpec::opt_text("department_id", &["departmentId", "department.id"]),
        FieldSpec::opt_text("location_id", &["locationId", "location.id"]),
        FieldSpec::list("job_posting_ids", &["jobPostingIds"]),
        FieldSpec::list("hiring_team", &["hiringTeam"]),
        FieldSpec::list("custom_fields", &["customFields"]),
        FieldSpec::opt_text("default_interview_plan_id", &["defaultInterviewPlanId"]),
        FieldSpec::list("interview_plan_ids", &["interviewPlanIds"]),
        FieldSpec::opt_text("created_at", &["createdAt"]),
        FieldSpec::opt_text("updated_at", &["updatedAt"]),
        FieldSpec::opt_text("opened_at", &["openedAt"]),
        FieldSpec::opt_text("closed_at", &["closedAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            title: fields.string("title"),
            status: fields.string("status"),
            confidential: fields.flag("confidential"),
            employment_type: fields.opt_string("employment_type"),
            department_id: fields.opt_string("department_id"),
            location_id: fields.opt_string("location_id"),
            job_posting_ids: fields.strings("job_posting_ids"),
            hiring_team: fields.nested_list("hiring_team"),
            custom_fields: fields.nested_list("custom_fields"),
            default_interview_plan_id: fields.opt_string("default_interview_plan_id"),
            interview_plan_ids: fields.strings("interview_plan_ids"),
            created_at: fields.timestamp("created_at"),
            updated_at: fields.timestamp("updated_at"),
            opened_at: fields.timestamp("opened_at"),
            closed_at: fields.timestamp("closed_at"),
            raw_data: fields.into_raw(),
        }
    }
}

/// A public posting of a job, with its description.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub job_id: String,
    pub location_ids: Vec<String>,
    pub is_listed: bool,
    pub is_live: bool,
    pub employment_type: Option<String>,
    pub description_plain: Option<String>,
    pub description_html: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl JobPosting {
    /// The description as plain text.
    ///
    /// Prefers the plain-text rendition; otherwise strips tags from the HTML.
    pub fn description(&self) -> Option<String> {
        if let Some(plain) = self.description_plain.as_deref().filter(|p| !p.is_empty()) {
            return Some(plain.to_string());
        }
        self.description_html
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(|html| {
                let stripped = HTML_TAG.replace_all(html, " ");
                WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
            })
    }
}

impl Record for JobPosting {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("title", &["title"]),
        FieldSpec::text("job_id", &["jobId"]),
        FieldSpec::list("location_ids", &["locationIds", "secondaryLocationIds"]),
        FieldSpec::flag("is_listed", &["isListed"], true),
        FieldSpec::flag("is_live", &["isLive"], true),
        FieldSpec::opt_text("employment_type", &["employmentType"]),
        FieldSpec::opt_text("description_plain", &["descriptionPlain"]),
        FieldSpec::opt_text("description_html", &["descriptionHtml"]),
        FieldSpec::opt_text("published_at", &["publishedDate", "publishedAt"]),
        FieldSpec::opt_text("updated_at", &["updatedAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            title: fields.string("title"),
            job_id: fields.string("job_id"),
            location_ids: fields.strings("location_ids"),
            is_listed: fields.flag("is_listed"),
            is_live: fields.flag("is_live"),
            employment_type: fields.opt_string("employment_type"),
            description_plain: fields.opt_string("description_plain"),
            description_html: fields.opt_string("description_html"),
            published_at: fields.timestamp("published_at"),
            updated_at: fields.timestamp("updated_at"),
            raw_data: fields.into_raw(),
        }
    }
}

/// A stage in a hiring funnel.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewStage {
    pub id: String,
    pub name: String,
    pub order: Option<i64>,
    pub stage_group_id: Option<String>,
    pub stage_group_name: Option<String>,
    /// e.g. `PreInterviewScreen`, `Active`, `Offer`, `Hired`, `Archived`
    pub stage_type: Option<String>,
    pub interview_plan_id: Option<String>,
    pub raw_data: Map<String, Value>,
}

impl Record for InterviewStage {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["title", "name"]),
        FieldSpec::integer("order", &["orderInStageGroup", "orderInInterviewPlan"]),
        FieldSpec::opt_text("stage_group_id", &["stageGroupId", "interviewStageGroupId", "interviewStageGroup.id"]),
        FieldSpec::opt_text("stage_group_name", &["interviewStageGroup.name", "interviewStageGroup.title"]),
        FieldSpec::opt_text("type", &["type"]),
        FieldSpec::opt_text("interview_plan_id", &["interviewPlanId"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            order: fields.opt_i64("order"),
            stage_group_id: fields.opt_string("stage_group_id"),
            stage_group_name: fields.opt_string("stage_group_name"),
            stage_type: fields.opt_string("type"),
            interview_plan_id: fields.opt_string("interview_plan_id"),
            raw_data: fields.into_raw(),
        }
    }
}

impl std::fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_from_raw() {
        let job = Job::from_raw(&json!({
            "id": "job-123",
            "title": "Engineer",
            "status": "Open",
            "employmentType": "FullTime",
            "hiringTeam": [{
                "userId": "user-1",
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "role": "Hiring Manager"
            }, null],
            "interviewPlanIds": ["plan-2", "plan-3"]
        }))
        .unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.hiring_team.len(), 1);
        assert_eq!(job.hiring_team[0].first_name, "John");
        assert_eq!(job.interview_plan_id(), Some("plan-2"));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let raw = json!({"id": "job-1", "title": "Designer", "customFields": [{"id": "cf", "title": "Level", "value": 3}]});
        assert_eq!(Job::from_raw(&raw).unwrap(), Job::from_raw(&raw).unwrap());
    }

    #[test]
    fn test_posting_description_prefers_plain() {
        let posting = JobPosting::from_raw(&json!({
            "id": "p1",
            "descriptionPlain": "Plain text",
            "descriptionHtml": "<p>Html</p>"
        }))
        .unwrap();
        assert_eq!(posting.description().as_deref(), Some("Plain text"));
    }

    #[test]
    fn test_posting_description_strips_html() {
        let posting = JobPosting::from_raw(&json!({
            "id": "p1",
            "descriptionHtml": "<h1>Role</h1><p>Build <b>things</b></p>"
        }))
        .unwrap();
        assert_eq!(posting.description().as_deref(), Some("Role Build things"));
        assert!(posting.is_live);
    }

    #[test]
    fn test_stage_group_from_nested_object() {
        let stage = InterviewStage::from_raw(&json!({
            "id": "s1",
            "title": "Phone Screen",
            "orderInInterviewPlan": 2,
            "interviewStageGroup": {"id": "g1", "name": "Screening"}
        }))
        .unwrap();
        assert_eq!(stage.name, "Phone Screen");
        assert_eq!(stage.order, Some(2));
        assert_eq!(stage.stage_group_id.as_deref(), Some("g1"));
        assert_eq!(stage.stage_group_name.as_deref(), Some("Screening"));
        assert_eq!(stage.to_string(), "Phone Screen (ID: s1)");
    }
}
