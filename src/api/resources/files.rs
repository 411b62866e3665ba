//
//  ashby-sdk
//  api/resources/files.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Stored files (resumes, attachments).
//!
//! A file handle is resolved to a short-lived signed URL with `file.info`;
//! the content is then fetched with a plain GET that carries no API key.

use serde_json::Value;

use crate::api::client::AshbyClient;
use crate::api::common::{AshbyError, Result};
use crate::api::resource::{require_id, Filters};
use crate::util::{filename_from_content_disposition, format_size, DEFAULT_DOWNLOAD_NAME};

/// A downloaded file.
#[derive(Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    /// From `Content-Disposition`, else `downloaded_file`.
    pub filename: String,
}

impl std::fmt::Debug for Download {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Download")
            .field("filename", &self.filename)
            .field("size", &format_size(self.bytes.len() as u64))
            .finish()
    }
}

pub struct FilesResource<'a> {
    client: &'a AshbyClient,
}

impl<'a> FilesResource<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Resolves a file handle to its signed download URL.
    ///
    /// # Errors
    ///
    /// Returns [`AshbyError::NotFound`] when the server returns no URL.
    pub fn url(&self, file_handle: &str) -> Result<String> {
        require_id("fileHandle", file_handle)?;
        let body = Filters::new().with("fileHandle", file_handle).into_map();
        let envelope = self.client.send("file.info", Value::Object(body))?;

        envelope
            .pointer("/results/url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AshbyError::not_found(format!("no download URL for file handle {}", file_handle)))
    }

    /// Downloads the content behind a file handle.
    pub fn download(&self, file_handle: &str) -> Result<Download> {
        let url = self.url(file_handle)?;
        let response = self.client.get_plain(&url)?;

        let filename = response
            .header("content-disposition")
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string());

        tracing::debug!(
            "Downloaded {} ({})",
            filename,
            format_size(response.body.len() as u64)
        );

        Ok(Download {
            bytes: response.body,
            filename,
        })
    }
}
