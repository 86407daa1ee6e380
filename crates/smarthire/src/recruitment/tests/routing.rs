use super::common::*;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::notifications::ToastQueue;
use crate::recruitment::router::{self, CandidateQuery};
use crate::recruitment::{InMemoryRepository, RecruitmentService};
use crate::routing::AppRoute;
use crate::session::SessionStore;

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn every_page_route_is_served() {
    for template in AppRoute::TEMPLATES {
        let (service, _, _) = build_service();
        let uri = template.replace(":id", "job-1").replace(":jobId", "job-1");
        let response = router_with_service(service).oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "page {uri}");
    }
}

#[tokio::test]
async fn landing_lists_role_targets() {
    let (service, _, _) = build_service();
    let response = router_with_service(service).oneshot(get("/")).await.unwrap();
    let body = read_json_body(response).await;

    assert_eq!(body["page"]["stats"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["page"]["roles"][1]["dashboard"], "/company/dashboard");
    assert_eq!(body["nav"], json!([]));
}

#[tokio::test]
async fn apply_below_threshold_is_forbidden() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json("/api/jobs/job-5/apply", json!({})))
        .await
        .unwrap();

    assert_status(&response, StatusCode::FORBIDDEN);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("below"));
}

#[tokio::test]
async fn apply_handler_returns_conflict_on_duplicate() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    let query = || Query(CandidateQuery::default());

    let first = router::apply_handler::<InMemoryRepository>(
        State(service.clone()),
        Path("job-8".to_string()),
        query(),
    )
    .await
    .expect("first application");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = router::apply_handler::<InMemoryRepository>(
        State(service),
        Path("job-8".to_string()),
        query(),
    )
    .await
    .expect_err("duplicate application");
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(get("/candidate/job/job-404"))
        .await
        .unwrap();
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn incomplete_job_post_is_unprocessable() {
    let (service, _, toasts) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json("/api/jobs", json!({ "title": "Data Engineer" })))
        .await
        .unwrap();

    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        toasts.latest().map(|toast| toast.message),
        Some("Please fill in all required fields".to_string())
    );
}

#[tokio::test]
async fn complete_job_post_redirects_to_dashboard() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json(
            "/api/jobs",
            json!({
                "title": "Site Reliability Engineer",
                "location": "Remote",
                "description": "Keep the platform up.",
                "job_type": "Contract",
                "skills": ["AWS", "Docker"],
            }),
        ))
        .await
        .unwrap();

    assert_status(&response, StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["redirect"], "/company/dashboard");
    assert_eq!(body["job"]["job_type"], "Contract");
}

#[tokio::test]
async fn status_change_accepts_labels() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json(
            "/api/applications/app-3/status",
            json!({ "status": "Contacted", "note": "Recruiter call booked" }),
        ))
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "Contacted");
    assert_eq!(body["history"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn export_route_serves_csv() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(get("/company/candidates/job-1/export"))
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let body = read_text_body(response).await;
    assert_eq!(body.lines().count(), 5);
}

#[tokio::test]
async fn status_tracker_route_applies_query_filters() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(get("/company/status-tracker?status=Rejected&search=emily"))
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["rows"][0]["timeline"], Value::Null);
}

#[tokio::test]
async fn login_returns_dashboard_redirect() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json(
            "/api/session/login",
            json!({ "email": "john@example.com", "password": "pw", "role": "candidate" }),
        ))
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["user"]["name"], "John Doe");
    assert_eq!(body["redirect"], "/candidate/dashboard");
}

#[tokio::test]
async fn notifications_can_be_listed_and_dismissed() {
    let (service, _, toasts) = build_service();
    let app = router_with_service(service);

    app.clone()
        .oneshot(post_json("/api/applications/app-5/contact", json!({})))
        .await
        .unwrap();

    let listed = read_json_body(
        app.clone()
            .oneshot(get("/api/notifications"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(listed[0]["severity"], "info");
    let id = listed[0]["id"].as_u64().expect("toast id");

    let dismissed = app
        .clone()
        .oneshot(
            Request::delete(format!("/api/notifications/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_status(&dismissed, StatusCode::NO_CONTENT);
    assert!(toasts.snapshot().is_empty());

    let again = app
        .oneshot(
            Request::delete(format!("/api/notifications/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_status(&again, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resume_upload_is_polled_until_processed() {
    let (service, _, _) = build_service();
    let app = router_with_service(service);

    let accepted = app
        .clone()
        .oneshot(post_json(
            "/api/resume",
            json!({ "file_name": "resume.pdf", "content_type": "application/pdf" }),
        ))
        .await
        .unwrap();
    assert_status(&accepted, StatusCode::ACCEPTED);
    let status_url = read_json_body(accepted).await["status_url"]
        .as_str()
        .expect("status url")
        .to_string();

    let mut state = Value::Null;
    for _ in 0..50 {
        let polled = read_json_body(app.clone().oneshot(get(&status_url)).await.unwrap()).await;
        if polled["state"] != "pending" {
            state = polled;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(state["state"], "succeeded");
    assert_eq!(
        state["result"]["extracted_skills"].as_array().map(Vec::len),
        Some(6)
    );
}

#[tokio::test]
async fn non_pdf_upload_is_unprocessable() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json(
            "/api/resume",
            json!({ "file_name": "resume.docx", "content_type": "application/vnd.openxmlformats-officedocument.wordprocessingml.document" }),
        ))
        .await
        .unwrap();
    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn blank_invite_is_unprocessable() {
    let (service, _, _) = build_service();
    let response = router_with_service(service)
        .oneshot(post_json("/api/team/invitations", json!({ "email": "" })))
        .await
        .unwrap();
    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn repository_outage_is_internal_error() {
    let service = RecruitmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(ToastQueue::new(Duration::from_secs(3))),
        SessionStore::new(),
        platform_config(Duration::from_millis(10)),
    );
    let response = crate::recruitment::recruitment_router(Arc::new(service))
        .oneshot(get("/company/manage-hr"))
        .await
        .unwrap();
    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
}
