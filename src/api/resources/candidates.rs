//
//  ashby-sdk
//  api/resources/candidates.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Candidates, candidate search, tags and notes.

use crate::api::client::AshbyClient;
use crate::api::common::{AshbyError, Result, DEFAULT_PAGE_SIZE};
use crate::api::resource::{fetch_list, fetch_one, map_all, require_id, Filters};
use crate::model::{Candidate, Note};

/// Content type of a candidate note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteType {
    #[default]
    PlainText,
    Html,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Html => "text/html",
        }
    }
}

/// Criteria for `candidate.search`. At least one must be set.
///
/// # Example
///
/// ```rust
/// use ashby_sdk::CandidateSearch;
///
/// let search = CandidateSearch::new().email("jane@example.com");
/// assert!(search.is_valid());
/// assert!(!CandidateSearch::new().is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSearch {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl CandidateSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether at least one non-blank criterion is set.
    pub fn is_valid(&self) -> bool {
        [&self.email, &self.name]
            .iter()
            .any(|c| c.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    fn to_filters(&self) -> Result<Filters> {
        if !self.is_valid() {
            return Err(AshbyError::validation(
                "at least one of email or name is required to search candidates",
            ));
        }
        let present = |c: &Option<String>| c.clone().filter(|v| !v.trim().is_empty());
        Ok(Filters::new()
            .with_opt("email", present(&self.email))
            .with_opt("name", present(&self.name)))
    }
}

pub struct CandidatesResource<'a> {
    client: &'a AshbyClient,
    page_size: u32,
}

impl<'a> CandidatesResource<'a> {
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

    /// Lists every candidate.
    pub fn list(&self) -> Result<Vec<Candidate>> {
        let items = self
            .client
            .collect_all("candidate.list", Filters::new().as_map(), self.page_size)?;
        map_all(&items)
    }

    pub fn get(&self, candidate_id: &str) -> Result<Candidate> {
        require_id("id", candidate_id)?;
        fetch_one(self.client, "candidate.info", Filters::new().with("id", candidate_id))
    }

    /// Searches candidates by email and/or name.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::Validation`] without any request when no
    /// criterion is set.
    pub fn search(&self, criteria: &CandidateSearch) -> Result<Vec<Candidate>> {
        let filters = criteria.to_filters()?;
        fetch_list(self.client, "candidate.search", filters)
    }

    /// Adds a tag to a candidate and returns the updated candidate.
    pub fn add_tag(&self, candidate_id: &str, tag_id: &str) -> Result<Candidate> {
        require_id("candidateId", candidate_id)?;
        require_id("tagId", tag_id)?;
        let filters = Filters::new()
            .with("candidateId", candidate_id)
            .with("tagId", tag_id);
        fetch_one(self.client, "candidate.addTag", filters)
    }

    /// Creates a note on a candidate.
    pub fn create_note(&self, candidate_id: &str, note: &str, note_type: NoteType) -> Result<Note> {
        require_id("candidateId", candidate_id)?;
        if note.trim().is_empty() {
            return Err(AshbyError::validation("note text is required"));
        }
        let filters = Filters::new()
            .with("candidateId", candidate_id)
            .with("note", note)
            .with("type", note_type.as_str());
        fetch_one(self.client, "candidate.createNote", filters)
    }

    /// Lists every note on a candidate.
    pub fn list_notes(&self, candidate_id: &str) -> Result<Vec<Note>> {
        require_id("candidateId", candidate_id)?;
        let filters = Filters::new().with("candidateId", candidate_id);
        let items = self
            .client
            .collect_all("candidate.listNotes", filters.as_map(), self.page_size)?;
        map_all(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_search_criteria() {
        assert!(CandidateSearch::new().to_filters().is_err());
        assert!(CandidateSearch::new().email("   ").to_filters().is_err());

        let filters = CandidateSearch::new().name("Jane").email("").to_filters().unwrap();
        assert_eq!(Value::Object(filters.into_map()), json!({"name": "Jane"}));
    }

    #[test]
    fn test_note_type() {
        assert_eq!(NoteType::default().as_str(), "text/plain");
        assert_eq!(NoteType::Html.as_str(), "text/html");
    }
}
