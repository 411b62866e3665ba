//
//  ashby-sdk
//  model/mapper.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tolerant record mapping.
//!
//! The Ashby API renames, omits and retypes fields between versions and
//! endpoints. Instead of deserializing straight into structs (which fails on
//! the first surprise), each record declares an ordered list of
//! [`FieldSpec`]s. The mapper resolves every spec against the raw object and
//! hands the result to the record as [`Fields`].
//!
//! # Resolution rules
//!
//! For each spec, the source keys are tried in declared order. A source is
//! used when it is present, non-null, of the expected [`FieldKind`], and, for
//! text, not empty. Dotted sources walk nested objects
//! (`interviewStageGroup.id`). When no source qualifies the spec's
//! [`FieldDefault`] applies. Missing, extra and mistyped fields never fail;
//! only a top-level input that is not an object does.
//!
//! # Example
//!
//! ```rust
//! use ashby_sdk::model::mapper::{map, FieldSpec};
//! use serde_json::json;
//!
//! const SHAPE: &[FieldSpec] = &[
//!     FieldSpec::text("id", &["id"]),
//!     FieldSpec::text("name", &["title", "name"]),
//!     FieldSpec::flag("is_archived", &["isArchived"], false),
//! ];
//!
//! let fields = map(&json!({"id": "s1", "name": "Phone Screen", "isArchived": "no"}), SHAPE).unwrap();
//! assert_eq!(fields.string("name"), "Phone Screen");
//! assert!(!fields.flag("is_archived"));
//! ```

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::api::common::{AshbyError, Result};

/// The JSON type a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Strings; numbers are accepted and rendered as text.
    Text,
    /// Booleans.
    Flag,
    /// Integral numbers.
    Integer,
    /// Arrays.
    List,
    /// Objects.
    Object,
    /// Anything that is not null or an empty string.
    Any,
}

/// Value used when no source key qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Absent,
    Text(&'static str),
    Flag(bool),
    EmptyList,
}

impl FieldDefault {
    fn value(self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(Value::String(text.to_string())),
            Self::Flag(flag) => Some(Value::Bool(flag)),
            Self::EmptyList => Some(Value::Array(Vec::new())),
        }
    }
}

/// One target field: where to look for it and what to use when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub target: &'static str,
    pub sources: &'static [&'static str],
    pub kind: FieldKind,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn new(
        target: &'static str,
        sources: &'static [&'static str],
        kind: FieldKind,
        default: FieldDefault,
    ) -> Self {
        Self {
            target,
            sources,
            kind,
            default,
        }
    }

    /// Text defaulting to the empty string.
    pub const fn text(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::Text, FieldDefault::Text(""))
    }

    /// Text defaulting to `fallback`.
    pub const fn text_or(
        target: &'static str,
        sources: &'static [&'static str],
        fallback: &'static str,
    ) -> Self {
        Self::new(target, sources, FieldKind::Text, FieldDefault::Text(fallback))
    }

    /// Optional text.
    pub const fn opt_text(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::Text, FieldDefault::Absent)
    }

    /// Boolean with a fixed default.
    pub const fn flag(target: &'static str, sources: &'static [&'static str], fallback: bool) -> Self {
        Self::new(target, sources, FieldKind::Flag, FieldDefault::Flag(fallback))
    }

    /// Optional boolean.
    pub const fn opt_flag(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::Flag, FieldDefault::Absent)
    }

    /// Optional integer.
    pub const fn integer(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::Integer, FieldDefault::Absent)
    }

    /// Array defaulting to empty.
    pub const fn list(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::List, FieldDefault::EmptyList)
    }

    /// Optional nested object.
    pub const fn object(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::Object, FieldDefault::Absent)
    }

    /// Any non-null, non-empty value.
    pub const fn any(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self::new(target, sources, FieldKind::Any, FieldDefault::Absent)
    }
}

/// A typed record built from a raw JSON object.
pub trait Record: Sized {
    /// Ordered field specifications for this record.
    const SHAPE: &'static [FieldSpec];

    /// Builds the record from resolved fields.
    fn from_fields(fields: Fields) -> Self;

    /// Maps a raw JSON value into the record.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::Validation`] if `raw` is not a JSON object.
    fn from_raw(raw: &Value) -> Result<Self> {
        Ok(Self::from_fields(map(raw, Self::SHAPE)?))
    }
}

/// Resolved fields of one raw object, plus the object itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    values: Map<String, Value>,
    raw: Map<String, Value>,
}

/// Resolves `shape` against `raw`.
///
/// # Errors
///
/// Returns [`AshbyError::Validation`] if `raw` is not a JSON object.
pub fn map(raw: &Value, shape: &[FieldSpec]) -> Result<Fields> {
    let object = raw.as_object().ok_or_else(|| {
        AshbyError::validation(format!("expected a JSON object, found {}", type_name(raw)))
    })?;

    let mut values = Map::new();
    for spec in shape {
        let resolved = spec
            .sources
            .iter()
            .filter_map(|source| lookup(object, source))
            .find(|value| accepts(spec.kind, value))
            .cloned()
            .or_else(|| spec.default.value());

        if let Some(value) = resolved {
            values.insert(spec.target.to_string(), value);
        }
    }

    Ok(Fields {
        values,
        raw: object.clone(),
    })
}

fn lookup<'a>(object: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = object.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn accepts(kind: FieldKind, value: &Value) -> bool {
    match (kind, value) {
        (_, Value::Null) => false,
        (FieldKind::Text, Value::String(s)) => !s.is_empty(),
        (FieldKind::Text, Value::Number(_)) => true,
        (FieldKind::Flag, Value::Bool(_)) => true,
        (FieldKind::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
        (FieldKind::List, Value::Array(_)) => true,
        (FieldKind::Object, Value::Object(_)) => true,
        (FieldKind::Any, Value::String(s)) => !s.is_empty(),
        (FieldKind::Any, _) => true,
        _ => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl Fields {
    /// Resolved value of a target, if any.
    pub fn value(&self, target: &str) -> Option<&Value> {
        self.values.get(target)
    }

    /// Text value, or the empty string.
    pub fn string(&self, target: &str) -> String {
        self.opt_string(target).unwrap_or_default()
    }

    /// Text value, if present.
    pub fn opt_string(&self, target: &str) -> Option<String> {
        self.value(target).and_then(text_of)
    }

    /// Boolean value, or `false`.
    pub fn flag(&self, target: &str) -> bool {
        self.opt_flag(target).unwrap_or(false)
    }

    /// Boolean value, if present.
    pub fn opt_flag(&self, target: &str) -> Option<bool> {
        self.value(target).and_then(Value::as_bool)
    }

    /// Integer value, if present.
    pub fn opt_i64(&self, target: &str) -> Option<i64> {
        self.value(target).and_then(Value::as_i64)
    }

    /// RFC 3339 timestamp; unparsable text yields `None`.
    pub fn timestamp(&self, target: &str) -> Option<DateTime<Utc>> {
        self.value(target)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Text items of a list; other items are skipped.
    pub fn strings(&self, target: &str) -> Vec<String> {
        self.list(target).iter().filter_map(text_of).collect()
    }

    /// Items of a list value, or an empty slice.
    pub fn list(&self, target: &str) -> &[Value] {
        self.value(target)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nested record, when the value is an object.
    pub fn nested<R: Record>(&self, target: &str) -> Option<R> {
        self.value(target)
            .filter(|v| v.is_object())
            .and_then(|v| R::from_raw(v).ok())
    }

    /// Nested records of a list; items that are not objects are skipped.
    pub fn nested_list<R: Record>(&self, target: &str) -> Vec<R> {
        self.list(target)
            .iter()
            .filter_map(|item| match R::from_raw(item) {
                Ok(record) => Some(record),
                Err(_) => {
                    tracing::trace!("Skipping malformed item in {}", target);
                    None
                }
            })
            .collect()
    }

    /// The complete source object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Consumes the fields, returning the complete source object.
    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }
}
