//
//  ashby-sdk
//  model/candidate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Candidate records and the small value types hanging off them.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::mapper::{FieldSpec, Fields, Record};
use super::organization::User;

#[derive(Debug, Clone, PartialEq)]
pub struct EmailAddress {
    pub value: String,
    pub address_type: String,
    pub is_primary: bool,
}

impl Record for EmailAddress {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("value", &["value"]),
        FieldSpec::text("type", &["type"]),
        FieldSpec::flag("is_primary", &["isPrimary"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            value: fields.string("value"),
            address_type: fields.string("type"),
            is_primary: fields.flag("is_primary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhoneNumber {
    pub value: String,
    pub number_type: String,
    pub is_primary: bool,
}

impl Record for PhoneNumber {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("value", &["value"]),
        FieldSpec::text("type", &["type"]),
        FieldSpec::flag("is_primary", &["isPrimary"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            value: fields.string("value"),
            number_type: fields.string("type"),
            is_primary: fields.flag("is_primary"),
        }
    }
}

/// A candidate link (LinkedIn, portfolio, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub link_type: String,
}

impl Record for Link {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("url", &["url"]),
        FieldSpec::text("type", &["type"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            url: fields.string("url"),
            link_type: fields.string("type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub is_archived: bool,
    pub raw_data: Map<String, Value>,
}

impl Record for Tag {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("title", &["title", "name"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            title: fields.string("title"),
            is_archived: fields.flag("is_archived"),
            raw_data: fields.into_raw(),
        }
    }
}

/// A custom field value attached to a job or candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomField {
    pub id: String,
    pub title: String,
    pub value: Option<Value>,
}

impl Record for CustomField {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("title", &["title"]),
        FieldSpec::any("value", &["value"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            title: fields.string("title"),
            value: fields.value("value").cloned(),
        }
    }
}

/// Reference to a stored file (resume, attachment).
#[derive(Debug, Clone, PartialEq)]
pub struct FileHandle {
    pub id: String,
    pub name: String,
    pub handle: String,
}

impl FileHandle {
    /// Accepts either a handle object or a bare handle string.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(handle) if !handle.is_empty() => Some(Self {
                id: String::new(),
                name: String::new(),
                handle: handle.clone(),
            }),
            Value::Object(_) => Self::from_raw(value).ok(),
            _ => None,
        }
    }
}

impl Record for FileHandle {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["name"]),
        FieldSpec::text("handle", &["handle"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            handle: fields.string("handle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub primary_email: Option<EmailAddress>,
    pub primary_phone: Option<PhoneNumber>,
    pub resume_file: Option<FileHandle>,
    pub links: Vec<Link>,
    pub tags: Vec<Tag>,
    pub custom_fields: Vec<CustomField>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Candidate {
    pub fn email(&self) -> Option<&str> {
        self.primary_email.as_ref().map(|e| e.value.as_str())
    }

    pub fn phone(&self) -> Option<&str> {
        self.primary_phone.as_ref().map(|p| p.value.as_str())
    }

    pub fn resume_handle(&self) -> Option<&str> {
        self.resume_file
            .as_ref()
            .map(|f| f.handle.as_str())
            .filter(|h| !h.is_empty())
    }
}

impl Record for Candidate {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["name"]),
        FieldSpec::object("primary_email", &["primaryEmailAddress"]),
        FieldSpec::object("primary_phone", &["primaryPhoneNumber"]),
        FieldSpec::any("resume_file", &["resumeFileHandle"]),
        FieldSpec::list("links", &["links", "socialLinks"]),
        FieldSpec::list("tags", &["tags"]),
        FieldSpec::list("custom_fields", &["customFields"]),
        FieldSpec::opt_text("created_at", &["createdAt"]),
        FieldSpec::opt_text("updated_at", &["updatedAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            primary_email: fields.nested("primary_email"),
            primary_phone: fields.nested("primary_phone"),
            resume_file: fields.value("resume_file").and_then(FileHandle::from_value),
            links: fields.nested_list("links"),
            tags: fields.nested_list("tags"),
            custom_fields: fields.nested_list("custom_fields"),
            created_at: fields.timestamp("created_at"),
            updated_at: fields.timestamp("updated_at"),
            raw_data: fields.into_raw(),
        }
    }
}

/// A note attached to a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub content_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub author: Option<User>,
    pub raw_data: Map<String, Value>,
}

impl Record for Note {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("content", &["content", "note"]),
        FieldSpec::text_or("content_type", &["type"], "text/plain"),
        FieldSpec::opt_text("created_at", &["createdAt"]),
        FieldSpec::object("author", &["author"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            content: fields.string("content"),
            content_type: fields.string("content_type"),
            created_at: fields.timestamp("created_at"),
            author: fields.nested("author"),
            raw_data: fields.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_from_raw() {
        let raw = json!({
            "id": "cand-123",
            "name": "Jane Smith",
            "primaryEmailAddress": {"value": "jane@example.com", "type": "Work"},
            "primaryPhoneNumber": {"value": "+1234567890", "type": "Mobile"},
            "resumeFileHandle": {"id": "file-1", "name": "resume.pdf", "handle": "abc123"},
            "links": [{"url": "https://linkedin.com/in/jane", "type": "LinkedIn"}],
            "tags": [{"id": "tag-1", "title": "Senior"}]
        });
        let candidate = Candidate::from_raw(&raw).unwrap();
        assert_eq!(candidate.id, "cand-123");
        assert_eq!(candidate.email(), Some("jane@example.com"));
        assert_eq!(candidate.phone(), Some("+1234567890"));
        assert_eq!(candidate.resume_handle(), Some("abc123"));
        assert_eq!(candidate.links.len(), 1);
        assert_eq!(candidate.tags[0].title, "Senior");
        assert_eq!(Value::Object(candidate.raw_data.clone()), raw);
    }

    #[test]
    fn test_resume_handle_as_string() {
        let candidate = Candidate::from_raw(&json!({"id": "c", "resumeFileHandle": "h-1"})).unwrap();
        assert_eq!(candidate.resume_handle(), Some("h-1"));
    }

    #[test]
    fn test_candidate_with_nothing() {
        let candidate = Candidate::from_raw(&json!({})).unwrap();
        assert_eq!(candidate.id, "");
        assert!(candidate.email().is_none());
        assert!(candidate.resume_handle().is_none());
        assert!(candidate.tags.is_empty());
    }

    #[test]
    fn test_note_defaults_to_plain_text() {
        let note = Note::from_raw(&json!({"id": "n1", "content": "Great call"})).unwrap();
        assert_eq!(note.content_type, "text/plain");
        assert!(note.author.is_none());
    }
}
