//! Integration tests for the Axum web server.
//!
//! These tests drive the router with `oneshot` over an in-memory database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use modeler_axum::bootstrap::{AxumContext, CorsConfig, DEFAULT_USER_HEADER, ServerConfig};
use modeler_axum::routes::create_router;
use modeler_core::{Model, ModelRepository, ModelType, NewModel, NewModelRelation};
use modeler_db::TestDb;

const USER: &str = "kermit";

struct TestApp {
    db: TestDb,
    config: ServerConfig,
}

impl TestApp {
    async fn new() -> Self {
        Self {
            db: TestDb::new().await.unwrap(),
            config: ServerConfig::with_defaults(),
        }
    }

    fn router(&self) -> Router {
        let ctx = AxumContext::from_repos(self.db.repos(), &self.config);
        create_router(ctx, &CorsConfig::AllowAll)
    }

    async fn add(&self, model: NewModel) -> Model {
        self.db.model_repository().insert(&model).await.unwrap()
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(DEFAULT_USER_HEADER, USER)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn names(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect()
}

async fn seed_forms(app: &TestApp) {
    app.add(NewModel::new("Invoice Form", "gonzo", Some(ModelType::Form)).with_reference_id(42))
        .await;
    app.add(NewModel::new("invoice-approval", USER, Some(ModelType::Form)))
        .await;
    app.add(NewModel::new("Onboarding", "gonzo", Some(ModelType::Bpmn)).with_reference_id(42))
        .await;
    app.add(NewModel::new("Address", USER, Some(ModelType::Form)))
        .await;
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = TestApp::new().await;

    let response = app
        .router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn form_models_merges_and_sorts() {
    let app = TestApp::new().await;
    seed_forms(&app).await;

    let (status, body) = send(app.router(), get("/rest/form-models?referenceId=42")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Address", "Invoice Form", "invoice-approval"]);
    assert_eq!(body["total"], 3);
    assert_eq!(body["size"], 3);
    assert_eq!(body["start"], 0);
}

#[tokio::test]
async fn form_models_uses_camel_case_fields() {
    let app = TestApp::new().await;
    let form = app
        .add(
            NewModel::new("Invoice Form", "gonzo", Some(ModelType::Form))
                .with_reference_id(42)
                .with_key("invoice")
                .with_description("Collects invoice data"),
        )
        .await;

    let (_, body) = send(app.router(), get("/rest/form-models?referenceId=42")).await;
    let item = &body["data"][0];

    assert_eq!(item["id"], form.id);
    assert_eq!(item["key"], "invoice");
    assert_eq!(item["description"], "Collects invoice data");
    assert_eq!(item["version"], 1);
    assert_eq!(item["lastUpdatedBy"], "gonzo");
    assert!(item["lastUpdated"].is_string());
}

#[tokio::test]
async fn form_models_applies_filter() {
    let app = TestApp::new().await;
    seed_forms(&app).await;

    let (status, body) = send(
        app.router(),
        get("/rest/form-models?referenceId=42&filter=INV"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Invoice Form", "invoice-approval"]);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn form_models_ignores_short_filter() {
    let app = TestApp::new().await;
    seed_forms(&app).await;

    let (_, body) = send(
        app.router(),
        get("/rest/form-models?referenceId=42&filter=+x+"),
    )
    .await;

    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn form_models_empty_result() {
    let app = TestApp::new().await;
    seed_forms(&app).await;

    let (status, body) = send(
        app.router(),
        get("/rest/form-models?referenceId=42&filter=nothing-here"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], Value::Array(vec![]));
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn form_models_requires_numeric_reference_id() {
    let app = TestApp::new().await;

    let response = app
        .router()
        .oneshot(get("/rest/form-models?referenceId=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .router()
        .oneshot(get("/rest/form-models"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_user_header_is_unauthorized() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/rest/form-models?referenceId=42")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);
    assert!(body["error"].as_str().unwrap().contains(DEFAULT_USER_HEADER));
}

#[tokio::test]
async fn custom_user_header_is_honoured() {
    let mut app = TestApp::new().await;
    app.config = ServerConfig::with_defaults()
        .with_user_header("X-Remote-User")
        .unwrap();
    app.add(NewModel::new("Mine", USER, Some(ModelType::Form)))
        .await;

    let request = Request::builder()
        .uri("/rest/form-models?referenceId=1")
        .header("X-Remote-User", USER)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Mine"]);
}

#[tokio::test]
async fn model_by_id_and_not_found() {
    let app = TestApp::new().await;
    let model = app
        .add(NewModel::new("Orders", USER, Some(ModelType::DecisionTable)))
        .await;

    let (status, body) = send(app.router(), get(&format!("/rest/models/{}", model.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Orders");
    assert_eq!(body["modelType"], "decision-table");

    let (status, body) = send(app.router(), get("/rest/models/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn models_linked_to_reference() {
    let app = TestApp::new().await;
    seed_forms(&app).await;

    let (status, body) = send(app.router(), get("/rest/models?referenceId=42")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn children_and_parents() {
    let app = TestApp::new().await;
    let parent = app
        .add(NewModel::new("Expense App", USER, Some(ModelType::App)))
        .await;
    let form = app
        .add(NewModel::new("Expense Form", USER, Some(ModelType::Form)))
        .await;
    let process = app
        .add(NewModel::new("Expense Flow", USER, Some(ModelType::Bpmn)))
        .await;
    let repo = app.db.model_repository();
    for child in [&form, &process] {
        repo.insert_relation(&NewModelRelation::new(parent.id, child.id))
            .await
            .unwrap();
    }

    let (_, body) = send(
        app.router(),
        get(&format!("/rest/models/{}/children", parent.id)),
    )
    .await;
    assert_eq!(body["total"], 2);

    let (_, body) = send(
        app.router(),
        get(&format!("/rest/models/{}/children?modelType=form", parent.id)),
    )
    .await;
    assert_eq!(names(&body), vec!["Expense Form"]);

    let (status, _) = send(
        app.router(),
        get(&format!("/rest/models/{}/children?modelType=chart", parent.id)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(
        app.router(),
        get(&format!("/rest/models/{}/parents", form.id)),
    )
    .await;
    assert_eq!(body["data"][0]["id"], parent.id);
    assert_eq!(body["data"][0]["modelType"], "app");
}

#[tokio::test]
async fn count_for_current_user() {
    let app = TestApp::new().await;
    seed_forms(&app).await;

    let (status, body) = send(app.router(), get("/rest/models/count?modelType=form")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, _) = send(app.router(), get("/rest/models/count")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn processes_for_current_user() {
    let app = TestApp::new().await;
    app.add(NewModel::new("Shipping", USER, Some(ModelType::Bpmn)))
        .await;
    app.add(NewModel::new("Straße Intake", USER, None)).await;
    app.add(NewModel::new("Linked", USER, Some(ModelType::Bpmn)).with_reference_id(42))
        .await;
    app.add(NewModel::new("Theirs", "gonzo", Some(ModelType::Bpmn)))
        .await;

    let (status, body) = send(app.router(), get("/rest/models/processes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Shipping", "Straße Intake"]);

    let (_, body) = send(
        app.router(),
        get("/rest/models/processes?filter=STRA%C3%9FE"),
    )
    .await;
    assert_eq!(names(&body), vec!["Straße Intake"]);
}

#[tokio::test]
async fn on_disk_database_serves_persisted_forms() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("data").join("modeler.db");
    let config = ServerConfig::with_defaults();

    {
        let pool = modeler_db::setup_database(&db_path).await.unwrap();
        modeler_db::CoreFactory::model_repository(pool)
            .insert(&NewModel::new("Persisted", USER, Some(ModelType::Form)))
            .await
            .unwrap();
    }

    let pool = modeler_db::setup_database(&db_path).await.unwrap();
    let ctx = AxumContext::from_repos(modeler_db::CoreFactory::build_repos(pool), &config);
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let (status, body) = send(app, get("/rest/form-models?referenceId=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Persisted"]);
}
