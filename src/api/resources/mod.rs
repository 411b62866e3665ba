//
//  ashby-sdk
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Specialized Resources
//!
//! Resources whose endpoints do not follow the plain `<prefix>.list` /
//! `<prefix>.info` pattern, or that carry extra operations (searches,
//! stage changes, notes, downloads). Each one borrows the client and is
//! obtained from an accessor such as [`AshbyClient::jobs`](crate::AshbyClient::jobs).
//!
//! | Resource | Endpoints |
//! |----------|-----------|
//! | [`JobsResource`] | `job.list`, `job.info` |
//! | [`ApplicationsResource`] | `application.list`, `application.info`, `application.changeStage`, `application.update` |
//! | [`CandidatesResource`] | `candidate.list`, `candidate.info`, `candidate.search`, `candidate.addTag`, `candidate.createNote`, `candidate.listNotes` |
//! | [`InterviewStagesResource`] | `interviewStage.list`, `interviewStage.info` |
//! | [`JobPostingsResource`] | `jobPosting.list`, `jobPosting.info` |
//! | [`SurveysResource`] | `surveySubmission.list` |
//! | [`FeedbackResource`] | `applicationFeedback.list` |
//! | [`FilesResource`] | `file.info`, plus a plain GET of the signed URL |

mod applications;
mod candidates;
mod feedback;
mod files;
mod interview_stages;
mod job_postings;
mod jobs;
mod surveys;

pub use applications::ApplicationsResource;
pub use candidates::{CandidateSearch, CandidatesResource, NoteType};
pub use feedback::FeedbackResource;
pub use files::{Download, FilesResource};
pub use interview_stages::InterviewStagesResource;
pub use job_postings::JobPostingsResource;
pub use jobs::JobsResource;
pub use surveys::{SurveysResource, DEFAULT_SURVEY_TYPE};
