use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod coerce;
pub mod dashboard;

pub use dashboard::{
    CategoryTotal, DashboardSummary, DateTotal, DueSoonNotifier, MonthTotal, DUE_SOON_MESSAGE,
    INITIAL_BALANCE,
};

/// A spending category. Referenced by `Expense::category` and `Forecast::category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// An actual, recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Older data files may hold the amount as a numeric string
    #[serde(default, deserialize_with = "coerce::lenient_amount")]
    pub amount: f64,
    /// ISO calendar date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,
    /// `None` once the referenced category has been deleted
    #[serde(default, deserialize_with = "coerce::lenient_category")]
    pub category: Option<i64>,
}

/// A planned future expense, used for projections and due-soon reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "coerce::lenient_amount")]
    pub amount: f64,
    /// ISO calendar date, today or later when the forecast was created
    #[serde(default)]
    pub date: String,
    /// May point at a deleted category; forecasts are not cleaned on category delete
    #[serde(default, deserialize_with = "coerce::lenient_category")]
    pub category: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /api/expenses` and `PUT /api/expenses/:id`.
///
/// Values usually come straight from HTML form inputs, so `amount` and
/// `category` are kept as raw JSON and coerced by the domain layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpenseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: Value,
}

/// Body of `POST /api/forecasts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ForecastRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: Value,
}

/// Query parameters of `GET /api/expenses`. Empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpenseFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl ExpenseFilter {
    pub fn is_empty(&self) -> bool {
        [&self.category, &self.from, &self.to]
            .iter()
            .all(|field| field.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
