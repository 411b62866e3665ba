//
//  ashby-sdk
//  model/organization.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization records: users, departments, locations, projects and the
//! metadata lists the hiring process is configured with.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::mapper::{map, FieldSpec, Fields, Record};
use crate::api::common::Result;

/// A user of the Ashby organization (recruiter, interviewer, admin).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub global_role: Option<String>,
    pub is_enabled: Option<bool>,
    pub raw_data: Map<String, Value>,
}

impl User {
    /// First and last name joined by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for User {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id", "userId"]),
        FieldSpec::text("first_name", &["firstName"]),
        FieldSpec::text("last_name", &["lastName"]),
        FieldSpec::text("email", &["email"]),
        FieldSpec::opt_text("global_role", &["globalRole"]),
        FieldSpec::opt_flag("is_enabled", &["isEnabled"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            first_name: fields.string("first_name"),
            last_name: fields.string("last_name"),
            email: fields.string("email"),
            global_role: fields.opt_string("global_role"),
            is_enabled: fields.opt_flag("is_enabled"),
            raw_data: fields.into_raw(),
        }
    }
}

/// A member of a job's hiring team.
#[derive(Debug, Clone, PartialEq)]
pub struct HiringTeamMember {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl Record for HiringTeamMember {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("user_id", &["userId", "id"]),
        FieldSpec::text("first_name", &["firstName"]),
        FieldSpec::text("last_name", &["lastName"]),
        FieldSpec::text("email", &["email"]),
        FieldSpec::text("role", &["role", "roleName"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            user_id: fields.string("user_id"),
            first_name: fields.string("first_name"),
            last_name: fields.string("last_name"),
            email: fields.string("email"),
            role: fields.string("role"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub is_archived: bool,
    pub raw_data: Map<String, Value>,
}

impl Record for Department {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["name"]),
        FieldSpec::opt_text("parent_id", &["parentId"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            parent_id: fields.opt_string("parent_id"),
            is_archived: fields.flag("is_archived"),
            raw_data: fields.into_raw(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub is_remote: bool,
    pub is_archived: bool,
    pub raw_data: Map<String, Value>,
}

impl Record for Location {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["name"]),
        FieldSpec::flag("is_remote", &["isRemote"], false),
        FieldSpec::flag("is_archived", &["isArchived"], false),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            is_remote: fields.flag("is_remote"),
            is_archived: fields.flag("is_archived"),
            raw_data: fields.into_raw(),
        }
    }
}

/// A hiring team role type.
///
/// `hiringTeamRole.list` returns bare role names rather than objects, so
/// [`Record::from_raw`] also accepts a string.
#[derive(Debug, Clone, PartialEq)]
pub struct HiringTeamRole {
    pub id: String,
    pub name: String,
    pub raw_data: Map<String, Value>,
}

impl Record for HiringTeamRole {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["name", "title"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            raw_data: fields.into_raw(),
        }
    }

    fn from_raw(raw: &Value) -> Result<Self> {
        match raw {
            Value::String(name) => Ok(Self {
                id: String::new(),
                name: name.clone(),
                raw_data: Map::new(),
            }),
            other => Ok(Self::from_fields(map(other, Self::SHAPE)?)),
        }
    }
}

/// A talent pool / project grouping candidates outside a job pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub is_archived: bool,
    pub is_confidential: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub raw_data: Map<String, Value>,
}

impl Record for Project {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("name", &["name", "title"]),
        FieldSpec::flag("is_archived", &["isArchived"], false),
        FieldSpec::flag("is_confidential", &["isConfidential"], false),
        FieldSpec::opt_text("created_at", &["createdAt"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            name: fields.string("name"),
            is_archived: fields.flag("is_archived"),
            is_confidential: fields.flag("is_confidential"),
            created_at: fields.timestamp("created_at"),
            raw_data: fields.into_raw(),
        }
    }
}

/// Definition of a custom field (not a value).
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFieldDefinition {
    pub id: String,
    pub title: String,
    pub field_type: String,
    pub object_type: Option<String>,
    pub is_required: bool,
    pub is_archived: bool,
    pub selectable_values: Vec<Value>,
    pub raw_data: Map<String, Value>,
}

impl Record for CustomFieldDefinition {
    const SHAPE: &'static [FieldSpec] = &[
        FieldSpec::text("id", &["id"]),
        FieldSpec::text("title", &["title"]),
        FieldSpec::text("field_type", &["fieldType", "type"]),
        FieldSpec::opt_text("object_type", &["objectType"]),
        FieldSpec::flag("is_required", &["isRequired"], false),
        FieldSpec::flag("is_archived", &["isArchived"], false),
        FieldSpec::list("selectable_values", &["selectableValues"]),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self {
            id: fields.string("id"),
            title: fields.string("title"),
            field_type: fields.string("field_type"),
            object_type: fields.opt_string("object_type"),
            is_required: fields.flag("is_required"),
            is_archived: fields.flag("is_archived"),
            selectable_values: fields.list("selectable_values").to_vec(),
            raw_data: fields.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_full_name() {
        let user = User::from_raw(&json!({"id": "u1", "firstName": "Jane", "lastName": "Recruiter"})).unwrap();
        assert_eq!(user.full_name(), "Jane Recruiter");

        let user = User::from_raw(&json!({"firstName": "Cher"})).unwrap();
        assert_eq!(user.full_name(), "Cher");
    }

    #[test]
    fn test_hiring_team_role_accepts_string() {
        let role = HiringTeamRole::from_raw(&json!("Recruiter")).unwrap();
        assert_eq!(role.name, "Recruiter");
        assert!(role.raw_data.is_empty());

        let role = HiringTeamRole::from_raw(&json!({"id": "r1", "title": "Coordinator"})).unwrap();
        assert_eq!(role.name, "Coordinator");
        assert!(HiringTeamRole::from_raw(&json!(3)).is_err());
    }

    #[test]
    fn test_project_name_fallback() {
        let project = Project::from_raw(&json!({"id": "p1", "title": "Talent Pool"})).unwrap();
        assert_eq!(project.name, "Talent Pool");
        assert!(!project.is_confidential);
    }
}
