//
//  ashby-sdk
//  forms/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Form Submission Normalizer
//!
//! Application forms and surveys reach the API in two payload shapes:
//!
//! | Shape | Layout |
//! |-------|--------|
//! | Inline | a sequence of `{question, value}` pairs under `answers`, `formSubmissionValue` or `submittedValues` |
//! | Field definitions | `formDefinition.sections[].fields[]` declares the questions; `submittedValues` maps field id (or path) to value |
//!
//! [`normalize`] detects the shape ([`SubmissionShape`]) and turns either
//! one into a [`NormalizedSubmission`]: an ordered question → [`Answer`]
//! mapping. A submission with no recognizable shape normalizes to an empty
//! mapping.
//!
//! ## Ordering
//!
//! Inline answers keep pair order. Field-definition answers follow the
//! declaration order of the form, then any undeclared value keys in the
//! order they appear.
//!
//! ## Example
//!
//! ```rust
//! use ashby_sdk::forms::{normalize, Answer};
//! use serde_json::json;
//!
//! let submission = normalize(&json!({
//!     "answers": [{"question": "Why us?", "value": "Good culture"}]
//! }))
//! .unwrap();
//!
//! assert_eq!(submission.answers.get("Why us?"), Some(&Answer::Single("Good culture".into())));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::api::common::{AshbyError, Result};
use crate::model::mapper::{map, FieldSpec};

/// Keys that may hold an inline pair sequence, in priority order.
const INLINE_KEYS: &[&str] = &["answers", "formSubmissionValue", "submittedValues"];

/// Candidate contact fields that are profile data rather than answers.
const SYSTEM_FIELDS: &[&str] = &[
    "_systemfield_resume",
    "_systemfield_pre_parsed_resume",
    "_systemfield_name",
    "_systemfield_email",
    "_systemfield_phone",
];

const SYSTEM_FIELD_PREFIX: &str = "_systemfield_";

/// Field type whose answers are always a list.
const MULTI_SELECT: &str = "MultiValueSelect";

const PAIR: &[FieldSpec] = &[
    FieldSpec::text("question", &["question", "field.title", "title"]),
    FieldSpec::any("value", &["value", "answer"]),
    FieldSpec::opt_text("type", &["field.type", "type"]),
];

const DEFINITION: &[FieldSpec] = &[
    FieldSpec::opt_text("id", &["field.id", "id"]),
    FieldSpec::opt_text("path", &["field.path", "path"]),
    FieldSpec::opt_text("title", &["field.title", "title"]),
    FieldSpec::opt_text("type", &["field.type", "type"]),
];

const ENVELOPE: &[FieldSpec] = &[
    FieldSpec::opt_text("form_title", &["title", "formTitle", "formDefinition.title", "form.title"]),
    FieldSpec::opt_text("id", &["id", "formId"]),
    FieldSpec::opt_text("candidate_id", &["candidateId", "candidate.id"]),
    FieldSpec::opt_text("application_id", &["applicationId", "application.id"]),
    FieldSpec::opt_text("submitted_at", &["submittedAt"]),
    FieldSpec::opt_text("survey_type", &["surveyType"]),
];

/// A normalized answer.
///
/// Checkbox-style answers stay a list even when only one option was chosen;
/// callers branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// The scalar answer, if this is one.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// The answer rendered on one line; list items are joined with `", "`.
    pub fn to_display(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.join(", "),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display())
    }
}

/// Question → answer mapping in insertion order.
///
/// Inserting an existing question replaces its answer in place.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(Vec<(String, Answer)>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<String>, answer: Answer) {
        let question = question.into();
        match self.0.iter_mut().find(|(q, _)| *q == question) {
            Some(entry) => entry.1 = answer,
            None => self.0.push((question, answer)),
        }
    }

    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.0.iter().find(|(q, _)| q == question).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.0.iter().map(|(q, a)| (q.as_str(), a))
    }

    /// Questions in order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(q, _)| q.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds every answer of `other`, replacing answers to the same question.
    pub fn merge(&mut self, other: Answers) {
        for (question, answer) in other.0 {
            self.insert(question, answer);
        }
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (question, answer) in &self.0 {
            map.serialize_entry(question, answer)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a (String, Answer);
    type IntoIter = std::slice::Iter<'a, (String, Answer)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One submission with its answers in a uniform shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSubmission {
    pub form_title: Option<String>,
    pub submission_id: Option<String>,
    pub candidate_id: Option<String>,
    pub application_id: Option<String>,
    pub submitted_at: Option<String>,
    /// Set on survey submissions (`Questionnaire`, ...).
    pub survey_type: Option<String>,
    pub answers: Answers,
}

/// A declared form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub id: Option<String>,
    pub path: Option<String>,
    pub title: String,
    pub field_type: Option<String>,
}

impl FieldDefinition {
    fn keys(&self) -> impl Iterator<Item = &str> {
        self.id.as_deref().into_iter().chain(self.path.as_deref())
    }
}

/// The detected layout of a raw submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionShape<'a> {
    /// A sequence of question/value pairs.
    Inline(&'a [Value]),
    /// Declared fields plus a value map keyed by field id or path.
    FieldDefinitions {
        fields: Vec<FieldDefinition>,
        values: &'a Map<String, Value>,
    },
    Unrecognized,
}

impl<'a> SubmissionShape<'a> {
    /// Detects the shape of `raw`.
    ///
    /// An inline pair sequence wins over a value map.
    pub fn detect(raw: &'a Map<String, Value>) -> Self {
        if let Some(pairs) = INLINE_KEYS
            .iter()
            .find_map(|key| raw.get(*key).and_then(Value::as_array))
        {
            return Self::Inline(pairs);
        }

        let fields = declared_fields(raw);
        match raw.get("submittedValues").and_then(Value::as_object) {
            Some(values) => Self::FieldDefinitions { fields, values },
            None => Self::Unrecognized,
        }
    }
}

/// Normalizes one raw submission.
///
/// # Errors
///
/// Returns [`AshbyError::Validation`] if `raw` is not a JSON object. Any
/// object normalizes, possibly to zero answers.
pub fn normalize(raw: &Value) -> Result<NormalizedSubmission> {
    let object = raw
        .as_object()
        .ok_or_else(|| AshbyError::validation("form submission must be a JSON object"))?;

    let envelope = map(raw, ENVELOPE)?;
    let answers = match SubmissionShape::detect(object) {
        SubmissionShape::Inline(pairs) => inline_answers(pairs),
        SubmissionShape::FieldDefinitions { fields, values } => defined_answers(&fields, values),
        SubmissionShape::Unrecognized => {
            tracing::trace!("Unrecognized submission shape; no answers extracted");
            Answers::new()
        }
    };

    Ok(NormalizedSubmission {
        form_title: envelope.opt_string("form_title"),
        submission_id: envelope.opt_string("id"),
        candidate_id: envelope.opt_string("candidate_id"),
        application_id: envelope.opt_string("application_id"),
        submitted_at: envelope.opt_string("submitted_at"),
        survey_type: envelope.opt_string("survey_type"),
        answers,
    })
}

fn declared_fields(raw: &Map<String, Value>) -> Vec<FieldDefinition> {
    let sections = raw
        .get("formDefinition")
        .and_then(|d| d.get("sections"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    sections
        .iter()
        .filter_map(|section| section.get("fields").and_then(Value::as_array))
        .flatten()
        .filter_map(|entry| map(entry, DEFINITION).ok())
        .filter_map(|fields| {
            let id = fields.opt_string("id");
            let path = fields.opt_string("path");
            let title = fields
                .opt_string("title")
                .or_else(|| path.clone())
                .or_else(|| id.clone())?;
            Some(FieldDefinition {
                id,
                path,
                title,
                field_type: fields.opt_string("type"),
            })
        })
        .collect()
}

fn inline_answers(pairs: &[Value]) -> Answers {
    let mut answers = Answers::new();
    for pair in pairs {
        let Ok(fields) = map(pair, PAIR) else {
            tracing::trace!("Skipping non-object answer entry");
            continue;
        };
        let question = fields.string("question");
        if question.is_empty() {
            continue;
        }
        let field_type = fields.opt_string("type");
        if let Some(answer) = fields
            .value("value")
            .and_then(|v| render(v, field_type.as_deref()))
        {
            answers.insert(question, answer);
        }
    }
    answers
}

fn defined_answers(fields: &[FieldDefinition], values: &Map<String, Value>) -> Answers {
    let mut answers = Answers::new();

    for field in fields {
        if field.keys().any(|key| SYSTEM_FIELDS.contains(&key)) {
            continue;
        }
        let value = field.keys().find_map(|key| values.get(key));
        if let Some(answer) = value.and_then(|v| render(v, field.field_type.as_deref())) {
            answers.insert(field.title.clone(), answer);
        }
    }

    for (key, value) in values {
        let declared = fields.iter().any(|f| f.keys().any(|k| k == key.as_str()));
        if declared {
            continue;
        }
        if key.starts_with(SYSTEM_FIELD_PREFIX) {
            tracing::trace!("Skipping system field {}", key);
            continue;
        }
        if let Some(answer) = render(value, None) {
            answers.insert(key.clone(), answer);
        }
    }

    answers
}

/// Renders a raw answer value; `None` for null.
fn render(value: &Value, field_type: Option<&str>) -> Option<Answer> {
    let answer = match value {
        Value::Null => return None,
        Value::Array(items) => Answer::Multiple(items.iter().filter_map(item_text).collect()),
        Value::Object(_) => Answer::Single(object_text(value)),
        scalar => Answer::Single(item_text(scalar)?),
    };

    match answer {
        Answer::Single(single) if field_type == Some(MULTI_SELECT) => Some(Answer::Multiple(vec![single])),
        answer => Some(answer),
    }
}

fn item_text(item: &Value) -> Option<String> {
    match item {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        Value::Object(_) => Some(
            ["name", "text", "value"]
                .iter()
                .find_map(|key| item.get(*key).and_then(item_text))
                .unwrap_or_else(|| item.to_string()),
        ),
        Value::Array(_) => Some(item.to_string()),
    }
}

fn object_text(value: &Value) -> String {
    ["text", "name", "value"]
        .iter()
        .find_map(|key| value.get(*key).and_then(item_text))
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn single(s: &str) -> Answer {
        Answer::Single(s.to_string())
    }

    fn multiple(items: &[&str]) -> Answer {
        Answer::Multiple(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_inline_shape() {
        let submission = normalize(&json!({
            "answers": [{"question": "Why us?", "value": "Good culture"}]
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&submission.answers).unwrap(),
            json!({"Why us?": "Good culture"})
        );
    }

    #[test]
    fn test_field_definition_order_wins_over_value_order() {
        let submission = normalize(&json!({
            "formDefinition": {"sections": [{"fields": [
                {"field": {"id": "f1", "title": "Experience", "type": "MultiValueSelect"}},
                {"field": {"id": "f2", "title": "Notice period", "type": "String"}}
            ]}]},
            "submittedValues": {"f2": "2 weeks", "f1": ["Python", "Go"]}
        }))
        .unwrap();

        let entries: Vec<(&str, &Answer)> = submission.answers.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Experience", &multiple(&["Python", "Go"])),
                ("Notice period", &single("2 weeks")),
            ]
        );
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        let submission = normalize(&json!({"id": "sub-1", "foo": "bar"})).unwrap();
        assert!(submission.answers.is_empty());
        assert_eq!(submission.submission_id.as_deref(), Some("sub-1"));

        assert!(normalize(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_inline_from_form_submission_value() {
        let submission = normalize(&json!({
            "id": "form-1",
            "formSubmissionValue": [
                {"field": {"id": "f1", "title": "Years", "type": "Number"}, "value": 5},
                {"field": {"id": "f2", "title": "Relocate?", "type": "Boolean"}, "value": true},
                {"field": {"id": "f3", "title": "Skipped"}, "value": null},
                "junk"
            ]
        }))
        .unwrap();

        assert_eq!(submission.answers.len(), 2);
        assert_eq!(submission.answers.get("Years"), Some(&single("5")));
        assert_eq!(submission.answers.get("Relocate?"), Some(&single("Yes")));
        assert!(submission.answers.get("Skipped").is_none());
    }

    #[test]
    fn test_value_formatting() {
        let submission = normalize(&json!({
            "formDefinition": {"sections": [{"fields": [
                {"field": {"id": "a", "title": "Level", "type": "ValueSelect"}},
                {"field": {"id": "b", "title": "Tools", "type": "MultiValueSelect"}},
                {"field": {"id": "c", "title": "Single choice", "type": "MultiValueSelect"}},
                {"field": {"id": "d", "title": "Visa", "type": "Boolean"}}
            ]}]},
            "submittedValues": {
                "a": {"value": "senior", "text": "Senior"},
                "b": [{"name": "Rust"}, {"text": "Go"}, "Python"],
                "c": "Only one",
                "d": false
            }
        }))
        .unwrap();

        assert_eq!(submission.answers.get("Level"), Some(&single("Senior")));
        assert_eq!(submission.answers.get("Tools"), Some(&multiple(&["Rust", "Go", "Python"])));
        assert_eq!(submission.answers.get("Single choice"), Some(&multiple(&["Only one"])));
        assert_eq!(submission.answers.get("Visa"), Some(&single("No")));
    }

    #[test]
    fn test_system_fields_are_skipped() {
        let submission = normalize(&json!({
            "formDefinition": {"sections": [{"fields": [
                {"field": {"id": "x1", "path": "_systemfield_name", "title": "Name"}},
                {"field": {"id": "x2", "path": "_systemfield_location", "title": "Location"}},
                {"id": "x3", "title": "Portfolio"}
            ]}]},
            "submittedValues": {
                "_systemfield_name": "Jane",
                "_systemfield_email": "jane@example.com",
                "_systemfield_location": "Harare",
                "_systemfield_resume": {"handle": "h"},
                "x3": "https://example.com",
                "extra_question": "Extra answer"
            }
        }))
        .unwrap();

        assert_eq!(
            submission.answers.questions().collect::<Vec<_>>(),
            vec!["Location", "Portfolio", "extra_question"]
        );
    }

    #[test]
    fn test_values_without_definitions() {
        let submission = normalize(&json!({
            "submittedValues": {"q1": "a1", "_systemfield_phone": "123"}
        }))
        .unwrap();
        assert_eq!(submission.answers.get("q1"), Some(&single("a1")));
        assert_eq!(submission.answers.len(), 1);
    }

    #[test]
    fn test_envelope_metadata() {
        let submission = normalize(&json!({
            "id": "sub-9",
            "candidateId": "cand-1",
            "applicationId": "app-1",
            "submittedAt": "2025-02-01T00:00:00Z",
            "formDefinition": {"title": "Questionnaire", "sections": []},
            "submittedValues": {}
        }))
        .unwrap();
        assert_eq!(submission.form_title.as_deref(), Some("Questionnaire"));
        assert_eq!(submission.candidate_id.as_deref(), Some("cand-1"));
        assert_eq!(submission.application_id.as_deref(), Some("app-1"));
        assert_eq!(submission.survey_type, None);
        assert!(submission.answers.is_empty());
    }

    #[test]
    fn test_survey_type_is_kept() {
        let submission = normalize(&json!({
            "id": "s1",
            "surveyType": "Questionnaire",
            "answers": [{"question": "Start date", "value": "June"}]
        }))
        .unwrap();
        assert_eq!(submission.survey_type.as_deref(), Some("Questionnaire"));
        assert_eq!(submission.answers.get("Start date"), Some(&single("June")));
    }

    #[test]
    fn test_empty_string_answers_are_omitted() {
        let submission = normalize(&json!({
            "answers": [
                {"question": "Blank", "value": ""},
                {"question": "Fallback", "value": "", "answer": "From answer"},
                {"question": "Partly blank", "value": ["A", "", "B"]}
            ]
        }))
        .unwrap();

        assert!(submission.answers.get("Blank").is_none());
        assert_eq!(submission.answers.get("Fallback"), Some(&single("From answer")));
        assert_eq!(submission.answers.get("Partly blank"), Some(&multiple(&["A", "B"])));

        let submission = normalize(&json!({
            "formDefinition": {"sections": [{"fields": [{"field": {"id": "a", "title": "Notes"}}]}]},
            "submittedValues": {"a": "", "extra": ""}
        }))
        .unwrap();
        assert!(submission.answers.is_empty());
    }

    #[test]
    fn test_merge_replaces_same_question() {
        let mut answers = Answers::new();
        answers.insert("A", single("1"));
        answers.insert("B", single("2"));

        let mut other = Answers::new();
        other.insert("A", single("3"));
        other.insert("C", multiple(&["x"]));
        answers.merge(other);

        assert_eq!(answers.questions().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(answers.get("A").unwrap().to_string(), "3");
        assert_eq!(answers.get("C").unwrap().to_display(), "x");
    }
}
