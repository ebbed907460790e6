//! Router-level tests: requests go through the full axum stack against a
//! temporary data directory.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use expense_tracker_backend::config::AppConfig;
use expense_tracker_backend::domain::FixedClock;
use expense_tracker_backend::storage::{JsonConnection, JsonFileStore};
use expense_tracker_backend::{create_router, AppState};
use shared::{Category, DashboardSummary, Expense, Forecast};

struct TestServer {
    router: Router,
    temp_dir: TempDir,
}

impl TestServer {
    /// A server whose clock reads noon on 2024-06-10
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_directory: temp_dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let store = JsonFileStore::new(JsonConnection::new(temp_dir.path()).unwrap());
        let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let state = AppState::new(store, Arc::new(clock), config.initial_balance);
        let router = create_router(state, &config).unwrap();
        Self { router, temp_dir }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        match body {
            Some(body) => {
                self.send_raw(method, uri, Some("application/json"), &body.to_string())
                    .await
            }
            None => self.send_raw(method, uri, None, "").await,
        }
    }

    async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn get<T: DeserializeOwned>(&self, uri: &str) -> T {
        let (status, body) = self.send("GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "GET {} returned {}", uri, body);
        serde_json::from_value(body).unwrap()
    }
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::new();
    let (status, body) = server.send("GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_first_read_seeds_files() {
    let server = TestServer::new();

    let categories: Vec<Category> = server.get("/api/categories").await;
    assert_eq!(categories.len(), 6);
    let expenses: Vec<Expense> = server.get("/api/expenses").await;
    assert_eq!(expenses.len(), 3);
    let forecasts: Vec<Forecast> = server.get("/api/forecasts").await;
    assert!(forecasts.is_empty());

    for file in ["categories.json", "expenses.json", "forecasts.json"] {
        assert!(server.temp_dir.path().join(file).exists(), "{} missing", file);
    }
}

#[tokio::test]
async fn test_create_category() {
    let server = TestServer::new();

    let (status, body) = server
        .send("POST", "/api/categories", Some(json!({ "name": "Travel" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 7, "name": "Travel" }));

    let (status, body) = server.send("POST", "/api/categories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));
}

#[tokio::test]
async fn test_update_category() {
    let server = TestServer::new();

    let (status, body) = server
        .send("PUT", "/api/categories/2", Some(json!({ "name": "Bills" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bills");

    let (status, body) = server
        .send("PUT", "/api/categories/99", Some(json!({ "name": "Nope" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Category not found" }));
}

#[tokio::test]
async fn test_delete_category_clears_expense_references() {
    let server = TestServer::new();

    let (status, body) = server.send("DELETE", "/api/categories/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let categories: Vec<Category> = server.get("/api/categories").await;
    assert!(categories.iter().all(|c| c.id != 2));

    let expenses: Vec<Expense> = server.get("/api/expenses").await;
    assert_eq!(expenses[1].id, 2);
    assert_eq!(expenses[1].category, None);
    assert_eq!(expenses[0].category, Some(1));

    let (status, _) = server.send("DELETE", "/api/categories/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expense_lifecycle_with_form_values() {
    let server = TestServer::new();

    let (status, created) = server
        .send(
            "POST",
            "/api/expenses",
            Some(json!({ "title": "Taxi", "amount": "18.50", "date": "2024-06-08", "category": "3" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 4, "title": "Taxi", "amount": 18.5, "date": "2024-06-08", "category": 3 })
    );

    let (status, updated) = server
        .send(
            "PUT",
            "/api/expenses/4",
            Some(json!({ "title": "Taxi home", "amount": 20, "date": "2024-06-08", "category": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["category"], Value::Null);

    let (status, _) = server.send("DELETE", "/api/expenses/4", None).await;
    assert_eq!(status, StatusCode::OK);

    let expenses: Vec<Expense> = server.get("/api/expenses").await;
    assert_eq!(expenses.len(), 3);
}

#[tokio::test]
async fn test_expense_rejects_non_numeric_amount() {
    let server = TestServer::new();
    let (status, body) = server
        .send("POST", "/api/expenses", Some(json!({ "title": "x", "amount": "lots" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_expense_is_not_found() {
    let server = TestServer::new();

    let (status, body) = server.send("DELETE", "/api/expenses/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Expense not found" }));

    let (status, _) = server
        .send("PUT", "/api/expenses/abc", Some(json!({ "title": "x" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expense_filter_query() {
    let server = TestServer::new();

    let expenses: Vec<Expense> = server.get("/api/expenses?category=2").await;
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].title, "Internet Bill");

    let expenses: Vec<Expense> = server.get("/api/expenses?from=2024-06-02&to=2024-06-03").await;
    assert_eq!(expenses.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);

    let expenses: Vec<Expense> = server.get("/api/expenses?category=&from=&to=").await;
    assert_eq!(expenses.len(), 3);
}

#[tokio::test]
async fn test_forecast_past_date_rule() {
    let server = TestServer::new();
    let body = |date: &str| Some(json!({ "title": "Rent", "amount": 900, "date": date, "category": 2 }));

    let (status, _) = server.send("POST", "/api/forecasts", body("2024-06-10")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = server.send("POST", "/api/forecasts", body("2024-06-11")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = server.send("POST", "/api/forecasts", body("2024-06-09")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": "Cannot set forecast for past date." }));

    let forecasts: Vec<Forecast> = server.get("/api/forecasts").await;
    assert_eq!(forecasts.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn test_forecast_delete_never_fails() {
    let server = TestServer::new();

    let (status, body) = server.send("DELETE", "/api/forecasts/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, _) = server.send("DELETE", "/api/forecasts/not-a-number", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = server.send("DELETE", "/api/expenses/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forecast_update_and_reminders() {
    let server = TestServer::new();
    let (_, created) = server
        .send(
            "POST",
            "/api/forecasts",
            Some(json!({ "title": "Gym", "amount": 35, "date": "2024-06-20", "category": 6 })),
        )
        .await;

    let reminders: Vec<Forecast> = server.get("/api/forecasts/reminders").await;
    assert!(reminders.is_empty());

    let uri = format!("/api/forecasts/{}", created["id"]);
    let (status, updated) = server
        .send(
            "PUT",
            &uri,
            Some(json!({ "title": "Gym", "amount": 35, "date": "2024-06-11", "category": 6 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["date"], "2024-06-11");

    let reminders: Vec<Forecast> = server.get("/api/forecasts/reminders").await;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].title, "Gym");

    let (status, _) = server
        .send("PUT", "/api/forecasts/77", Some(json!({ "title": "x", "date": "2024-06-11" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_summary() {
    let server = TestServer::new();
    server
        .send(
            "POST",
            "/api/forecasts",
            Some(json!({ "title": "Groceries", "amount": 60, "date": "2024-07-01", "category": 1 })),
        )
        .await;

    let summary: DashboardSummary = server.get("/api/dashboard").await;
    assert_eq!(summary.total_expenses, 85.0);
    assert_eq!(summary.forecast_total, 60.0);
    assert_eq!(summary.available_balance, 9_915.0);

    let groceries = &summary.by_category[0];
    assert_eq!(groceries.name, "Groceries");
    assert_eq!(groceries.value, 50.0);
    assert_eq!(groceries.forecast, 60.0);

    let months: Vec<&str> = summary.by_month.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2024-06", "2024-07"]);
}

#[tokio::test]
async fn test_malformed_file_is_server_error() {
    let server = TestServer::new();
    std::fs::write(server.temp_dir.path().join("expenses.json"), "{ not json").unwrap();

    let (status, body) = server.send("GET", "/api/expenses", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("expenses"));
}

#[tokio::test]
async fn test_category_create_without_body_is_missing_name() {
    let server = TestServer::new();
    let (status, body) = server.send("POST", "/api/categories", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));
}

#[tokio::test]
async fn test_unparsable_bodies_get_error_json() {
    let server = TestServer::new();

    let (status, body) = server
        .send_raw("POST", "/api/categories", Some("application/json"), "")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = server
        .send_raw("POST", "/api/expenses", Some("application/json"), "{ title: ")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = server
        .send_raw("PUT", "/api/forecasts/1", Some("application/json"), "[1, 2]")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let expenses: Vec<Expense> = server.get("/api/expenses").await;
    assert_eq!(expenses.len(), 3);
}

#[tokio::test]
async fn test_delete_forecast_reminders_segment_is_noop() {
    let server = TestServer::new();
    let (status, body) = server.send("DELETE", "/api/forecasts/reminders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_stored_non_numeric_amount_reads_as_zero() {
    let server = TestServer::new();
    std::fs::write(
        server.temp_dir.path().join("expenses.json"),
        r#"[{"id":1,"title":"Odd","amount":"abc","date":"2024-06-01","category":1},
           {"id":2,"title":"Bus","amount":"4","date":"2024-06-02","category":3}]"#,
    )
    .unwrap();

    let expenses: Vec<Expense> = server.get("/api/expenses").await;
    assert_eq!(expenses[0].amount, 0.0);
    assert_eq!(expenses[1].amount, 4.0);

    let summary: DashboardSummary = server.get("/api/dashboard").await;
    assert_eq!(summary.total_expenses, 4.0);
}

#[tokio::test]
async fn test_category_delete_with_unreadable_forecasts_still_succeeds() {
    let server = TestServer::new();
    let _: Vec<Category> = server.get("/api/categories").await;
    let _: Vec<Expense> = server.get("/api/expenses").await;
    std::fs::write(server.temp_dir.path().join("forecasts.json"), "{ not json").unwrap();

    let (status, body) = server.send("DELETE", "/api/categories/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let expenses: Vec<Expense> = server.get("/api/expenses").await;
    assert_eq!(expenses[1].category, None);
}
