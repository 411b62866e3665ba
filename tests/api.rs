//
//  ashby-sdk
//  tests/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::time::Duration;

use ashby_sdk::api::{ReqwestTransport, RetryTransport};
use ashby_sdk::{AshbyClient, CandidateSearch, ClientConfig, ErrorKind, Filters, NoteType};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

/// `Basic base64("test-key:")`
const AUTH: &str = "Basic dGVzdC1rZXk6";

fn config(server: &ServerGuard) -> ClientConfig {
    ClientConfig::default()
        .with_api_key("test-key")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5))
}

fn client(server: &ServerGuard) -> AshbyClient {
    AshbyClient::new(&config(server)).unwrap()
}

#[test]
fn test_list_follows_cursor_across_pages() {
    let mut server = Server::new();
    let first = server
        .mock("POST", "/job.list")
        .match_header("authorization", AUTH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"limit": 100})))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "results": [{"id": "j1", "title": "Engineer", "status": "Open"}],
                "moreDataAvailable": true,
                "nextCursor": "c2"
            })
            .to_string(),
        )
        .expect(1)
        .create();
    let second = server
        .mock("POST", "/job.list")
        .match_body(Matcher::Json(json!({"limit": 100, "cursor": "c2"})))
        .with_body(
            json!({
                "success": true,
                "results": [{"id": "j2", "title": "Designer", "status": "Open"}],
                "moreDataAvailable": false
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let jobs = client(&server).jobs().list(&[]).unwrap();

    first.assert();
    second.assert();
    let ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, ["j1", "j2"]);
}

#[test]
fn test_generic_list_sends_filters() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/department.list")
        .match_body(Matcher::Json(json!({"includeArchived": true, "limit": 100})))
        .with_body(json!({"success": true, "results": [{"id": "d1", "name": "Engineering"}]}).to_string())
        .create();

    let departments = client(&server)
        .departments()
        .list(Filters::new().with("includeArchived", true))
        .unwrap();

    mock.assert();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Engineering");
}

#[test]
fn test_unauthorized_is_auth_error() {
    let mut server = Server::new();
    server
        .mock("POST", "/candidate.info")
        .with_status(401)
        .with_body("Unauthorized")
        .create();

    let err = client(&server).candidates().get("c1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Auth);
}

#[test]
fn test_forbidden_is_auth_error() {
    let mut server = Server::new();
    server.mock("POST", "/offer.list").with_status(403).create();

    let err = client(&server).offers().list(Filters::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Auth);
    assert!(err.message().contains("permission"));
}

#[test]
fn test_not_found_status_wins_over_error_body() {
    let mut server = Server::new();
    server
        .mock("POST", "/job.info")
        .with_status(404)
        .with_body(json!({"success": false, "errors": ["something else"]}).to_string())
        .create();

    let err = client(&server).jobs().get("missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status_code(), Some(404));
}

#[test]
fn test_unsuccessful_envelope_keeps_errors() {
    let mut server = Server::new();
    server
        .mock("POST", "/application.changeStage")
        .with_body(
            json!({
                "success": false,
                "errors": ["invalid_input"],
                "errorInfo": {"message": "Stage does not belong to this job"}
            })
            .to_string(),
        )
        .create();

    let err = client(&server)
        .applications()
        .change_stage("a1", "s9")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.message(), "Stage does not belong to this job");
    assert_eq!(err.errors(), ["invalid_input"]);
}

#[test]
fn test_envelope_not_found_message() {
    let mut server = Server::new();
    server
        .mock("POST", "/user.info")
        .with_body(json!({"success": false, "errors": ["User not found"]}).to_string())
        .create();

    let err = client(&server).users().get("u1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_search_and_mutations_send_expected_bodies() {
    let mut server = Server::new();
    let search = server
        .mock("POST", "/candidate.search")
        .match_body(Matcher::Json(json!({"email": "ada@example.com"})))
        .with_body(json!({"success": true, "results": [{"id": "c1", "name": "Ada"}]}).to_string())
        .create();
    let tag = server
        .mock("POST", "/candidate.addTag")
        .match_body(Matcher::Json(json!({"candidateId": "c1", "tagId": "t1"})))
        .with_body(json!({"success": true, "results": {"id": "c1", "name": "Ada", "tags": [{"id": "t1", "title": "Referral"}]}}).to_string())
        .create();
    let note = server
        .mock("POST", "/candidate.createNote")
        .match_body(Matcher::Json(json!({"candidateId": "c1", "note": "Great call", "type": "text/plain"})))
        .with_body(json!({"success": true, "results": {"id": "n1", "content": "Great call"}}).to_string())
        .create();

    let client = client(&server);
    let found = client
        .candidates()
        .search(&CandidateSearch::new().email("ada@example.com"))
        .unwrap();
    assert_eq!(found[0].id, "c1");

    let tagged = client.candidates().add_tag("c1", "t1").unwrap();
    assert_eq!(tagged.tags[0].title, "Referral");

    let created = client
        .candidates()
        .create_note("c1", "Great call", NoteType::PlainText)
        .unwrap();
    assert_eq!(created.id, "n1");

    search.assert();
    tag.assert();
    note.assert();
}

#[test]
fn test_archive_sends_reason() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/application.update")
        .match_body(Matcher::Json(json!({
            "applicationId": "a1",
            "isArchived": true,
            "archiveReasonId": "r1"
        })))
        .with_body(json!({"success": true, "results": {"id": "a1", "isArchived": true}}).to_string())
        .create();

    let application = client(&server).applications().archive("a1", "r1").unwrap();
    mock.assert();
    assert!(application.is_archived);
}

#[test]
fn test_download_file_uses_signed_url_without_auth() {
    let mut server = Server::new();
    let signed = format!("{}/files/abc", server.url());
    let info = server
        .mock("POST", "/file.info")
        .match_body(Matcher::Json(json!({"fileHandle": "abc"})))
        .with_body(json!({"success": true, "results": {"url": signed}}).to_string())
        .create();
    let file = server
        .mock("GET", "/files/abc")
        .match_header("authorization", Matcher::Missing)
        .with_header("content-disposition", "attachment; filename=\"resume.pdf\"")
        .with_body("%PDF-1.7")
        .create();

    let download = client(&server).files().download("abc").unwrap();

    info.assert();
    file.assert();
    assert_eq!(download.filename, "resume.pdf");
    assert_eq!(download.bytes, b"%PDF-1.7");
}

#[test]
fn test_download_without_disposition_uses_default_name() {
    let mut server = Server::new();
    let signed = format!("{}/files/xyz", server.url());
    server
        .mock("POST", "/file.info")
        .with_body(json!({"success": true, "results": {"url": signed}}).to_string())
        .create();
    server.mock("GET", "/files/xyz").with_body("data").create();

    let download = client(&server).files().download("xyz").unwrap();
    assert_eq!(download.filename, "downloaded_file");
}

#[test]
fn test_missing_file_url_is_not_found() {
    let mut server = Server::new();
    server
        .mock("POST", "/file.info")
        .with_body(json!({"success": true, "results": {}}).to_string())
        .create();

    let err = client(&server).files().url("gone").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_interview_stages_for_job_sorted_by_order() {
    let mut server = Server::new();
    server
        .mock("POST", "/job.info")
        .with_body(
            json!({"success": true, "results": {
                "id": "j1", "title": "Engineer", "status": "Open",
                "interviewPlanIds": ["p1", "p2"]
            }})
            .to_string(),
        )
        .create();
    let stages = server
        .mock("POST", "/interviewStage.list")
        .match_body(Matcher::Json(json!({"interviewPlanId": "p1", "limit": 100})))
        .with_body(
            json!({"success": true, "results": [
                {"id": "s3", "title": "Offer", "orderInInterviewPlan": 3},
                {"id": "s1", "title": "Screen", "orderInInterviewPlan": 1},
                {"id": "s2", "title": "Onsite", "orderInInterviewPlan": 2}
            ]})
            .to_string(),
        )
        .create();

    let funnel = client(&server).interview_stages().list_for_job("j1").unwrap();

    stages.assert();
    let ids: Vec<_> = funnel.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2", "s3"]);
}

#[test]
fn test_retry_repeats_reads_only() {
    let mut server = Server::new();
    let reads = server
        .mock("POST", "/source.list")
        .with_status(503)
        .expect(3)
        .create();
    let writes = server
        .mock("POST", "/candidate.addTag")
        .with_status(503)
        .expect(1)
        .create();

    let inner = ReqwestTransport::new(Duration::from_secs(5), "ashby-sdk-tests").unwrap();
    let client = AshbyClient::with_transport(&config(&server), RetryTransport::new(inner, 3)).unwrap();

    let err = client.sources().list(Filters::new()).unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    let err = client.candidates().add_tag("c1", "t1").unwrap_err();
    assert_eq!(err.status_code(), Some(503));

    reads.assert();
    writes.assert();
}
