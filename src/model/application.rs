//
//  ashby-sdk
//  model/application.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Application records and the pipeline metadata they reference.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::candidate::Candidate;
use super::job::InterviewStage;
use super::mapper::{FieldSpec, Fields, Record};
use super::organization::User;

/// Where a candidate came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub source_type: Option<String>,
    pub is_archived: bool,
    pub raw_data: Map<String, Value>,
}

impl Record for Source {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["title", "name"]),
        FieldSpec::opt_text("type", &["sourceType.title", "type"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            source_type: fields.opt_string("type"),
            is_archived: fields.flag("is_archived"),
            raw_data: fields.into_raw(),
        }
    }
}

/// One answered field of an inline application form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFieldSubmission {
    pub field_id: String,
    pub field_title: String,
    pub field_type: String,
    pub value: Option<Value>,
}

impl Record for FormFieldSubmission {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("field_id", &["field.id", "fieldId"]),
        FieldSpec::text("field_title", &["field.title", "title", "question"]),
        FieldSpec::text("field_type", &["field.type", "type"]),
        FieldSpec::any("value", &["value", "answer"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            field_id: fields.string("field_id"),
            field_title: fields.string("field_title"),
            field_type: fields.string("field_type"),
            value: fields.value("value").cloned(),
        }
    }
}

/// An inline application form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationFormSubmission {
    pub id: String,
    pub fields: Vec<FormFieldSubmission>,
    pub raw_data: Map<String, Value>,
}

impl ApplicationFormSubmission {
    /// Value of the field whose title matches `title`, ignoring case.
    pub fn field_value(&self, title: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.field_title.eq_ignore_ascii_case(title))
            .and_then(|f| f.value.as_ref())
    }
}

impl Record for ApplicationFormSubmission {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::list("fields", &["formSubmissionValue", "answers"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            fields: fields.nested_list("fields"),
            raw_data: fields.into_raw(),
        }
    }
}

/// An application of a candidate to a job.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: String,
    pub status: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub job_id: String,
    pub is_archived: bool,
    pub archive_reason: Option<String>,
    pub current_stage: Option<InterviewStage>,
    pub source: Option<Source>,
    pub form_submission: Option<ApplicationFormSubmission>,
    /// Expanded `applicationFormSubmissions`, kept raw for the normalizer.
    pub form_submissions: Vec<Value>,
    pub credited_to: Option<User>,
    pub hired_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
    /// Full candidate record; filled in by
    /// [`AshbyClient::application_with_candidate`](crate::AshbyClient::application_with_candidate).
    pub candidate: Option<Candidate>,
}

impl Application {
    pub fn stage_name(&self) -> Option<&str> {
        self.current_stage.as_ref().map(|s| s.name.as_str())
    }

    /// Whether any form submission data came with the application.
    pub fn has_form_data(&self) -> bool {
        !self.form_submissions.is_empty() || self.form_submission.is_some()
    }
}

impl Record for Application {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("status", &["status"]),
        FieldSpec::text("candidate_id", &["candidate.id", "candidateId"]),
        FieldSpec::text("candidate_name", &["candidate.name"]),
        FieldSpec::text("job_id", &["jobId", "job.id"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
        FieldSpec::opt_text("archive_reason", &["archiveReason.text", "archiveReason.name", "archiveReason"]),
        FieldSpec::object("current_stage", &["currentInterviewStage"]),
        FieldSpec::object("source", &["source"]),
        FieldSpec::object("form_submission", &["applicationFormSubmission"]),
        FieldSpec::list("form_submissions", &["applicationFormSubmissions"]),
        FieldSpec::object("credited_to", &["creditedToUser", "creditedTo"]),
        FieldSpec::opt_text("hired_at", &["hiredAt"]),
        FieldSpec::opt_text("created_at", &["createdAt"]),
        FieldSpec::opt_text("updated_at", &["updatedAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            status: fields.string("status"),
            candidate_id: fields.string("candidate_id"),
            candidate_name: fields.string("candidate_name"),
            job_id: fields.string("job_id"),
            is_archived: fields.flag("is_archived"),
            archive_reason: fields.opt_string("archive_reason"),
            current_stage: fields.nested("current_stage"),
            source: fields.nested("source"),
            form_submission: fields.nested("form_submission"),
            form_submissions: fields.list("form_submissions").to_vec(),
            credited_to: fields.nested("credited_to"),
            hired_at: fields.timestamp("hired_at"),
            created_at: fields.timestamp("created_at"),
            updated_at: fields.timestamp("updated_at"),
            raw_data: fields.into_raw(),
            candidate: None,
        }
    }
}

/// Reason an application was archived.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveReason {
    pub id: String,
    pub name: String,
    pub reason_type: Option<String>,
    pub is_archived: bool,
    pub raw_data: Map<String, Value>,
}

impl Record for ArchiveReason {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["text", "name"]),
        FieldSpec::opt_text("reason_type", &["reasonType"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            reason_type: fields.opt_string("reason_type"),
            is_archived: fields.flag("is_archived"),
            raw_data: fields.into_raw(),
        }
    }
}

/// Reason a job was closed.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseReason {
    pub id: String,
    pub name: String,
    pub is_archived: bool,
    pub raw_data: Map<String, Value>,
}

impl Record for CloseReason {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["text", "name"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            is_archived: fields.flag("is_archived"),
            raw_data: fields.into_raw(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: String,
    pub application_id: String,
    pub status: String,
    pub start_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Record for Offer {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("application_id", &["applicationId"]),
        FieldSpec::text("status", &["status", "offerStatus", "acceptanceStatus"]),
        FieldSpec::opt_text("start_date", &["startDate", "latestVersion.startDate"]),
        FieldSpec::opt_text("created_at", &["createdAt"]),
        FieldSpec::opt_text("updated_at", &["updatedAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            application_id: fields.string("application_id"),
            status: fields.string("status"),
            start_date: fields.opt_string("start_date"),
            created_at: fields.timestamp("created_at"),
            updated_at: fields.timestamp("updated_at"),
            raw_data: fields.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "app-123",
            "status": "Active",
            "candidate": {"id": "cand-123", "name": "Jane Smith"},
            "jobId": "job-123",
            "currentInterviewStage": {"id": "stage-1", "title": "Phone Screen"},
            "source": {"id": "src-1", "title": "LinkedIn"},
            "archiveReason": {"id": "ar-1", "text": "Withdrew"},
            "applicationFormSubmission": {
                "id": "form-1",
                "formSubmissionValue": [
                    {"field": {"id": "f1", "title": "Years of Experience", "type": "Number"}, "value": 5},
                    {"field": {"id": "f2", "title": "Why us?", "type": "LongText"}, "value": "Culture"}
                ]
            }
        })
    }

    #[test]
    fn test_application_from_raw() {
        let app = Application::from_raw(&sample()).unwrap();
        assert_eq!(app.candidate_id, "cand-123");
        assert_eq!(app.candidate_name, "Jane Smith");
        assert_eq!(app.stage_name(), Some("Phone Screen"));
        assert_eq!(app.source.as_ref().map(|s| s.name.as_str()), Some("LinkedIn"));
        assert_eq!(app.archive_reason.as_deref(), Some("Withdrew"));
        assert!(app.has_form_data());
        assert!(app.candidate.is_none());
    }

    #[test]
    fn test_archive_reason_as_string() {
        let app = Application::from_raw(&json!({"id": "a", "archiveReason": "Hired elsewhere"})).unwrap();
        assert_eq!(app.archive_reason.as_deref(), Some("Hired elsewhere"));
        assert!(!app.has_form_data());
    }

    #[test]
    fn test_form_field_lookup_ignores_case() {
        let app = Application::from_raw(&sample()).unwrap();
        let form = app.form_submission.unwrap();
        assert_eq!(form.field_value("years of experience"), Some(&json!(5)));
        assert_eq!(form.field_value("WHY US?"), Some(&json!("Culture")));
        assert!(form.field_value("Salary").is_none());
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let raw = sample();
        let first = Application::from_raw(&raw).unwrap();
        let second = Application::from_raw(&raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(Value::Object(first.raw_data), raw);
    }

    #[test]
    fn test_reason_name_prefers_text() {
        let reason = ArchiveReason::from_raw(&json!({"id": "r", "text": "Too junior", "name": "junior"})).unwrap();
        assert_eq!(reason.name, "Too junior");
        let reason = CloseReason::from_raw(&json!({"id": "r", "name": "Filled"})).unwrap();
        assert_eq!(reason.name, "Filled");
    }
}
