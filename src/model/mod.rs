//
//  ashby-sdk
//  model/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Domain Records
//!
//! Typed records for Ashby entities. Every record is built through the
//! tolerant [`mapper`] and every top-level record keeps the complete source
//! object in `raw_data`, so fields the typed view does not cover are still
//! reachable.
//!
//! | Module | Records |
//! |--------|---------|
//! | [`organization`] | [`User`], [`HiringTeamMember`], [`Department`], [`Location`], [`HiringTeamRole`], [`Project`], [`CustomFieldDefinition`] |
//! | [`candidate`] | [`Candidate`], [`EmailAddress`], [`PhoneNumber`], [`Link`], [`Tag`], [`CustomField`], [`FileHandle`], [`Note`] |
//! | [`job`] | [`Job`], [`JobPosting`], [`InterviewStage`] |
//! | [`application`] | [`Application`], [`ApplicationFormSubmission`], [`FormFieldSubmission`], [`Source`], [`ArchiveReason`], [`CloseReason`], [`Offer`] |
//! | [`interview`] | [`Interview`], [`InterviewSchedule`], [`Feedback`], [`SurveySubmission`] |

pub mod application;
pub mod candidate;
pub mod interview;
pub mod job;
pub mod mapper;
pub mod organization;

pub use application::*;
pub use candidate::*;
pub use interview::*;
pub use job::*;
pub use mapper::{FieldDefault, FieldKind, FieldSpec, Fields, Record};
pub use organization::*;
