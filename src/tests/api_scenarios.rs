//! End-to-end flows through the full route table.

use actix_web::{test, web, App};
use serde_json::{json, Value};

use crate::content::application::content_use_cases::ContentUseCases;
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::auth_helper::test_helpers::{
    bearer, TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME,
};
use crate::tests::support::fixtures::{sample_contact_info, sample_profile};

macro_rules! full_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state)
                .app_data(crate::shared::api::custom_json_config())
                .configure(crate::init_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_login_then_manage_skills() {
    let app = full_app!(TestAppStateBuilder::default().build());

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": TEST_ADMIN_USERNAME, "password": TEST_ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let login: Value = test::read_body_json(resp).await;
    let token = login["sessionId"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "React", "category": "Frontend" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/skills/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "React 19" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "React 19");
    assert_eq!(updated["category"], "Frontend");

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/skills/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_mutations_require_a_session() {
    let app = full_app!(TestAppStateBuilder::default().build());

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "title": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get().uri("/api/smtp-config").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_logout_revokes_the_token() {
    let (state, token) = TestAppStateBuilder::default()
        .build_with_admin_session()
        .await;
    let app = full_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/admin/verify")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/admin/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/admin/verify")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_racing_creates_both_persist() {
    let (state, token) = TestAppStateBuilder::default()
        .build_with_admin_session()
        .await;
    let app = full_app!(state);

    let first = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Rust" }))
        .to_request();
    let second = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Go" }))
        .to_request();
    let (a, b) = futures::join!(
        test::call_service(&app, first),
        test::call_service(&app, second)
    );
    assert_eq!(a.status(), 200);
    assert_eq!(b.status(), 200);

    let req = test::TestRequest::get().uri("/api/courses").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_json_backed_store_writes_through_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    for (name, doc) in [
        ("contact.json", serde_json::to_value(sample_contact_info()).unwrap()),
        ("profile.json", serde_json::to_value(sample_profile()).unwrap()),
    ] {
        std::fs::write(dir.path().join(name), doc.to_string()).unwrap();
    }

    let (state, token) = TestAppStateBuilder::default()
        .with_content(ContentUseCases::json_backed(dir.path()))
        .build_with_admin_session()
        .await;
    let app = full_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Hello",
            "excerpt": "First post",
            "image": "/images/blog/a.png",
            "category": "News",
            "date": "2024-03-01",
            "readTime": "3 min read",
            "slug": "hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("blogs.json")).unwrap())
            .unwrap();
    assert_eq!(on_disk[0]["slug"], "hello");
    assert!(on_disk[0]["id"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/blogs/slug/hello")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["title"], "Hello");

    let req = test::TestRequest::put()
        .uri("/api/profile")
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "Staff Engineer" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let profile: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("profile.json")).unwrap())
            .unwrap();
    assert_eq!(profile["title"], "Staff Engineer");
    assert_eq!(profile["name"], sample_profile().name);
}

#[actix_web::test]
async fn test_malformed_json_uses_error_envelope() {
    let (state, token) = TestAppStateBuilder::default()
        .build_with_admin_session()
        .await;
    let app = full_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(bearer(&token))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_readiness_reports_missing_documents() {
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().build())
            .app_data(web::Data::new(crate::health::DataDir("/nonexistent".into())))
            .configure(crate::init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get().uri("/ready").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 503);
}
