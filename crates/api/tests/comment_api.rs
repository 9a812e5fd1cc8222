//! End-to-end tests for comment creation, nested and flat.

mod common;

use axum::http::{Method, StatusCode};
use common::{assert_login_redirect, body_json, build_test_app, form, form_auth, location, set_cookie};
use projex_api::flash::FLASH_COOKIE;
use projex_db::models::project::CreateProject;
use projex_db::repositories::{CommentRepo, ProjectRepo};
use sqlx::PgPool;

async fn seed_project(pool: &PgPool) -> i64 {
    let input = CreateProject {
        title: "Commented".into(),
        description: "Has comments".into(),
        ..Default::default()
    };
    ProjectRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn nested_create_redirects_to_project(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = build_test_app(pool.clone());

    let response = form_auth(
        &app,
        Method::POST,
        &format!("/projects/{id}/comments"),
        "content=Nice+work",
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/projects/{id}"));
    assert!(set_cookie(&response, FLASH_COOKIE)
        .unwrap()
        .contains("comment_created"));

    assert_eq!(CommentRepo::count_by_project(&pool, id).await.unwrap(), 1);
    let comments = CommentRepo::list_by_project(&pool, id).await.unwrap();
    assert_eq!(comments[0].content, "Nice work");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_comment_rerenders_show_page(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = build_test_app(pool.clone());

    let response = form_auth(
        &app,
        Method::POST,
        &format!("/projects/{id}/comments"),
        "content=+++",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["template"], "projects/show");
    assert_eq!(json["errors"], serde_json::json!(["Content can't be blank"]));
    assert_eq!(json["data"]["project"]["id"], id);
    assert_eq!(json["data"]["comment"]["content"], "   ");

    assert_eq!(CommentRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn comment_on_unknown_project_is_404(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = form_auth(
        &app,
        Method::POST,
        "/projects/999999/comments",
        "content=Orphan",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(CommentRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn flat_create_reads_project_from_body(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = build_test_app(pool.clone());

    let response = form_auth(
        &app,
        Method::POST,
        "/comments",
        &format!("project_id={id}&content=Flat+comment"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/projects/{id}"));
    assert_eq!(CommentRepo::count_by_project(&pool, id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn flat_create_without_project_writes_nothing(pool: PgPool) {
    seed_project(&pool).await;
    let app = build_test_app(pool.clone());

    let response = form_auth(&app, Method::POST, "/comments", "content=Lost").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(CommentRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn anonymous_comment_is_not_written(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = build_test_app(pool.clone());

    let response = form(
        &app,
        Method::POST,
        &format!("/projects/{id}/comments"),
        "content=Sneaky",
    )
    .await;
    assert_login_redirect(&response);
    assert_eq!(CommentRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database(pool: PgPool) {
    let app = build_test_app(pool);
    let json = body_json(common::get(&app, "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
