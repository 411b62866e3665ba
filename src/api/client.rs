//
//  ashby-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Ashby API Client
//!
//! [`AshbyClient`] owns the credential, the base URL and a [`Transport`].
//! Every Ashby endpoint is an RPC-style `POST <base>/<endpoint>` with a JSON
//! body; the client attaches Basic authentication, sends the request and
//! hands the response to [`interpret`] so callers only ever see a success
//! envelope or a classified [`AshbyError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ashby_sdk::{AshbyClient, ClientConfig};
//!
//! let config = ClientConfig::from_env().with_api_key("your-api-key");
//! let client = AshbyClient::new(&config)?;
//!
//! for job in client.jobs().list(&["Open"])? {
//!     println!("{} ({})", job.title, job.status);
//! }
//! # Ok::<(), ashby_sdk::AshbyError>(())
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};
use url::Url;

use crate::api::common::{classify, collect_all, interpret, AshbyError, Result};
use crate::api::resource::{registry, GenericResource};
use crate::api::resources::{
    ApplicationsResource, CandidatesResource, Download, FeedbackResource, FilesResource,
    InterviewStagesResource, JobPostingsResource, JobsResource, SurveysResource,
    DEFAULT_SURVEY_TYPE,
};
use crate::api::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::auth::{validate_key, ApiKey};
use crate::config::ClientConfig;
use crate::forms::{self, Answers};
use crate::model::{
    Application, ArchiveReason, Candidate, CloseReason, CustomFieldDefinition, Department,
    HiringTeamRole, Interview, InterviewSchedule, Location, Offer, Project, Source, Tag, User,
};

/// Endpoint methods that only read remote state.
const READ_METHODS: &[&str] = &["list", "info", "search"];

/// Checks whether an endpoint such as `candidate.listNotes` only reads.
fn is_read_endpoint(endpoint: &str) -> bool {
    let method = endpoint.rsplit('.').next().unwrap_or(endpoint);
    READ_METHODS
        .iter()
        .any(|read| method == *read || method.starts_with(read))
}

/// Client for the Ashby API.
///
/// Cheap to share by reference; resource handles borrow it.
pub struct AshbyClient {
    api_key: Option<ApiKey>,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AshbyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AshbyClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl AshbyClient {
    /// Creates a client over the default reqwest transport.
    ///
    /// A missing API key is not an error here; it is reported by the first
    /// request.
    ///
    /// # Errors
    ///
    /// - [`AshbyError::Validation`] if the base URL is not an http(s) URL or
    ///   the API key contains whitespace
    /// - [`AshbyError::Transport`] if the HTTP client could not be built
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout(), &config.user_agent())?;
        Self::with_transport(config, transport)
    }

    /// Creates a client from `ASHBY_API_KEY` / `ASHBY_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Creates a client that sends every exchange through `transport`.
    pub fn with_transport(config: &ClientConfig, transport: impl Transport + 'static) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| AshbyError::validation(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AshbyError::validation(format!(
                "base URL must use http or https: {}",
                config.base_url
            )));
        }

        let api_key = config
            .api_key
            .as_deref()
            .map(ApiKey::new)
            .filter(|key| !key.expose().is_empty());
        if let Some(key) = &api_key {
            if !validate_key(key.expose()) {
                return Err(AshbyError::validation("API key must not contain whitespace"));
            }
        }

        Ok(Self {
            api_key,
            base_url,
            transport: Arc::new(transport),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), endpoint)
    }

    /// Sends one request to `endpoint` and returns the success envelope.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::Auth`] without touching the network when no API
    /// key is configured; otherwise whatever [`interpret`] classifies.
    pub fn send(&self, endpoint: &str, body: Value) -> Result<Value> {
        let key = self.api_key.as_ref().ok_or_else(|| {
            AshbyError::auth(format!(
                "no API key configured (set {} or pass one in ClientConfig)",
                crate::auth::API_KEY_ENV
            ))
        })?;

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.endpoint_url(endpoint),
            headers: vec![
                ("Authorization".to_string(), key.authorization_header()),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body: Some(body.to_string()),
            idempotent: is_read_endpoint(endpoint),
        };

        tracing::debug!("POST {}", request.url);
        let response = self.transport.execute(&request)?;
        tracing::debug!("{} -> HTTP {}", endpoint, response.status);

        interpret(&response)
    }

    /// Collects every item of a paginated endpoint.
    pub fn collect_all(
        &self,
        endpoint: &str,
        base_body: &Map<String, Value>,
        page_size: u32,
    ) -> Result<Vec<Value>> {
        collect_all(endpoint, base_body, page_size, |name, body| self.send(name, body))
    }

    /// Plain GET of an absolute URL, without credentials.
    ///
    /// Used for signed file URLs, which reject extra authorization.
    pub fn get_plain(&self, url: &str) -> Result<HttpResponse> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
            idempotent: true,
        };

        tracing::debug!("GET {}", url);
        let response = self.transport.execute(&request)?;
        if !response.is_success() {
            let text = response.text();
            let body: Option<Value> = serde_json::from_str(&text).ok();
            return Err(classify(response.status, body.as_ref(), &text));
        }
        Ok(response)
    }

    pub fn jobs(&self) -> JobsResource<'_> {
        JobsResource::new(self)
    }

    pub fn applications(&self) -> ApplicationsResource<'_> {
        ApplicationsResource::new(self)
    }

    pub fn candidates(&self) -> CandidatesResource<'_> {
        CandidatesResource::new(self)
    }

    pub fn interview_stages(&self) -> InterviewStagesResource<'_> {
        InterviewStagesResource::new(self)
    }

    pub fn job_postings(&self) -> JobPostingsResource<'_> {
        JobPostingsResource::new(self)
    }

    pub fn surveys(&self) -> SurveysResource<'_> {
        SurveysResource::new(self)
    }

    pub fn feedback(&self) -> FeedbackResource<'_> {
        FeedbackResource::new(self)
    }

    pub fn files(&self) -> FilesResource<'_> {
        FilesResource::new(self)
    }

    pub fn sources(&self) -> GenericResource<'_, Source> {
        GenericResource::new(self, &registry::SOURCES)
    }

    pub fn archive_reasons(&self) -> GenericResource<'_, ArchiveReason> {
        GenericResource::new(self, &registry::ARCHIVE_REASONS)
    }

    pub fn close_reasons(&self) -> GenericResource<'_, CloseReason> {
        GenericResource::new(self, &registry::CLOSE_REASONS)
    }

    pub fn candidate_tags(&self) -> GenericResource<'_, Tag> {
        GenericResource::new(self, &registry::CANDIDATE_TAGS)
    }

    pub fn hiring_team_roles(&self) -> GenericResource<'_, HiringTeamRole> {
        GenericResource::new(self, &registry::HIRING_TEAM_ROLES)
    }

    pub fn departments(&self) -> GenericResource<'_, Department> {
        GenericResource::new(self, &registry::DEPARTMENTS)
    }

    pub fn locations(&self) -> GenericResource<'_, Location> {
        GenericResource::new(self, &registry::LOCATIONS)
    }

    pub fn users(&self) -> GenericResource<'_, User> {
        GenericResource::new(self, &registry::USERS)
    }

    pub fn custom_fields(&self) -> GenericResource<'_, CustomFieldDefinition> {
        GenericResource::new(self, &registry::CUSTOM_FIELDS)
    }

    pub fn projects(&self) -> GenericResource<'_, Project> {
        GenericResource::new(self, &registry::PROJECTS)
    }

    pub fn offers(&self) -> GenericResource<'_, Offer> {
        GenericResource::new(self, &registry::OFFERS)
    }

    pub fn interviews(&self) -> GenericResource<'_, Interview> {
        GenericResource::new(self, &registry::INTERVIEWS)
    }

    pub fn interview_schedules(&self) -> GenericResource<'_, InterviewSchedule> {
        GenericResource::new(self, &registry::INTERVIEW_SCHEDULES)
    }

    /// Fetches an application together with its full candidate record.
    pub fn application_with_candidate(&self, application_id: &str) -> Result<Application> {
        let mut application = self.applications().get(application_id)?;
        if !application.candidate_id.is_empty() {
            application.candidate = Some(self.candidates().get(&application.candidate_id)?);
        }
        Ok(application)
    }

    /// Downloads a candidate's resume, if one is on file.
    pub fn download_resume(&self, candidate: &Candidate) -> Result<Option<Download>> {
        match candidate.resume_handle() {
            Some(handle) => self.files().download(handle).map(Some),
            None => {
                tracing::debug!("Candidate {} has no resume", candidate.id);
                Ok(None)
            }
        }
    }

    /// Every form answer a candidate gave for an application.
    ///
    /// Merges the application's form submissions with the candidate's
    /// questionnaire submissions; later answers replace earlier ones for the
    /// same question.
    pub fn all_form_answers(&self, application_id: &str, candidate_id: &str) -> Result<Answers> {
        let application = self.applications().get_with_forms(application_id)?;
        let mut answers = Answers::new();

        for raw in &application.form_submissions {
            answers.merge(forms::normalize(raw)?.answers);
        }
        if let Some(submission) = &application.form_submission {
            answers.merge(forms::normalize(&Value::Object(submission.raw_data.clone()))?.answers);
        }

        for survey in self.surveys().for_candidate(candidate_id, DEFAULT_SURVEY_TYPE)? {
            answers.merge(forms::normalize(&Value::Object(survey.raw_data))?.answers);
        }

        tracing::debug!(
            "Collected {} answers for application {}",
            answers.len(),
            application_id
        );
        Ok(answers)
    }
}
