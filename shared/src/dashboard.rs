//! # Dashboard projections
//!
//! Pure functions that turn the three record collections into the shapes the
//! dashboard, expense table and forecast views display. Nothing here is cached:
//! callers recompute every view from scratch whenever a collection changes, and
//! each projection is a single pass over its inputs.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::coerce::{leading_integer, parse_record_date};
use crate::{Category, Expense, ExpenseFilter, Forecast};

/// Starting balance that actual expenses are deducted from.
pub const INITIAL_BALANCE: f64 = 10_000.0;

/// Label shown for expenses whose category is missing or deleted.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub const DUE_SOON_MESSAGE: &str = "You have forecast expenses due within 24 hours!";

/// Actual and forecast spending attributed to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    /// Sum of actual expenses
    pub value: f64,
    pub forecast: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTotal {
    pub date: String,
    pub actual: f64,
    pub forecast: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    /// `YYYY-MM`
    pub month: String,
    pub actual: f64,
    pub forecast: f64,
}

/// Everything the dashboard tab renders, computed in one go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_expenses: f64,
    pub forecast_total: f64,
    pub available_balance: f64,
    pub by_category: Vec<CategoryTotal>,
    pub by_date: Vec<DateTotal>,
    pub by_month: Vec<MonthTotal>,
}

pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn forecast_total(forecasts: &[Forecast]) -> f64 {
    forecasts.iter().map(|f| f.amount).sum()
}

pub fn available_balance(initial_balance: f64, expenses: &[Expense]) -> f64 {
    initial_balance - total_expenses(expenses)
}

/// Per-category sums in category order. Categories with neither actual nor
/// forecast spending are left out.
pub fn by_category(
    categories: &[Category],
    expenses: &[Expense],
    forecasts: &[Forecast],
) -> Vec<CategoryTotal> {
    let mut sums: HashMap<i64, (f64, f64)> = HashMap::new();
    for expense in expenses {
        if let Some(id) = expense.category {
            sums.entry(id).or_default().0 += expense.amount;
        }
    }
    for forecast in forecasts {
        if let Some(id) = forecast.category {
            sums.entry(id).or_default().1 += forecast.amount;
        }
    }

    categories
        .iter()
        .filter_map(|cat| {
            let (value, forecast) = sums.get(&cat.id).copied().unwrap_or_default();
            if value == 0.0 && forecast == 0.0 {
                return None;
            }
            Some(CategoryTotal {
                name: cat.name.clone(),
                value,
                forecast,
            })
        })
        .collect()
}

/// Actual vs forecast per distinct date, dates sorted ascending.
pub fn by_date(expenses: &[Expense], forecasts: &[Forecast]) -> Vec<DateTotal> {
    let mut days: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for expense in expenses {
        days.entry(expense.date.as_str()).or_default().0 += expense.amount;
    }
    for forecast in forecasts {
        days.entry(forecast.date.as_str()).or_default().1 += forecast.amount;
    }

    days.into_iter()
        .map(|(date, (actual, forecast))| DateTotal {
            date: date.to_string(),
            actual,
            forecast,
        })
        .collect()
}

/// Actual vs forecast per calendar month, months sorted ascending.
/// Records whose date does not parse are not attributed to any month.
pub fn by_month(expenses: &[Expense], forecasts: &[Forecast]) -> Vec<MonthTotal> {
    let month_of = |date: &str| parse_record_date(date).map(|d| d.format("%Y-%m").to_string());

    let mut months: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for expense in expenses {
        if let Some(month) = month_of(&expense.date) {
            months.entry(month).or_default().0 += expense.amount;
        }
    }
    for forecast in forecasts {
        if let Some(month) = month_of(&forecast.date) {
            months.entry(month).or_default().1 += forecast.amount;
        }
    }

    months
        .into_iter()
        .map(|(month, (actual, forecast))| MonthTotal {
            month,
            actual,
            forecast,
        })
        .collect()
}

/// Forecasts due more than zero and at most 24 hours after `now`.
///
/// A forecast falls due at local midnight at the start of its date.
pub fn due_soon(forecasts: &[Forecast], now: NaiveDateTime) -> Vec<Forecast> {
    let horizon = Duration::hours(24);
    forecasts
        .iter()
        .filter(|f| {
            let Some(due) = parse_record_date(&f.date).and_then(|d| d.and_hms_opt(0, 0, 0)) else {
                return false;
            };
            let ahead = due - now;
            ahead > Duration::zero() && ahead <= horizon
        })
        .cloned()
        .collect()
}

pub fn category_name(categories: &[Category], id: Option<i64>) -> &str {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Applies the expense table filter. Date bounds are inclusive; a bound that
/// does not parse is ignored, and an expense whose own date does not parse is
/// excluded whenever a bound is active.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    let present = |field: &Option<String>| {
        field
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    let category = present(&filter.category).map(|c| leading_integer(&c));
    let from = present(&filter.from).and_then(|d| parse_record_date(&d));
    let to = present(&filter.to).and_then(|d| parse_record_date(&d));

    expenses
        .iter()
        .filter(|e| match category {
            Some(wanted) => wanted.is_some() && e.category == wanted,
            None => true,
        })
        .filter(|e| {
            if from.is_none() && to.is_none() {
                return true;
            }
            let Some(day) = parse_record_date(&e.date) else {
                return false;
            };
            from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
        })
        .cloned()
        .collect()
}

pub fn dashboard_summary(
    categories: &[Category],
    expenses: &[Expense],
    forecasts: &[Forecast],
    initial_balance: f64,
) -> DashboardSummary {
    DashboardSummary {
        total_expenses: total_expenses(expenses),
        forecast_total: forecast_total(forecasts),
        available_balance: available_balance(initial_balance, expenses),
        by_category: by_category(categories, expenses, forecasts),
        by_date: by_date(expenses, forecasts),
        by_month: by_month(expenses, forecasts),
    }
}

/// Tracks the due-soon set between recomputations so the reminder is shown
/// once each time the set goes from empty to non-empty.
#[derive(Debug, Clone, Default)]
pub struct DueSoonNotifier {
    was_due: bool,
}

impl DueSoonNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, due: &[Forecast]) -> Option<&'static str> {
        let is_due = !due.is_empty();
        let fire = is_due && !self.was_due;
        self.was_due = is_due;
        fire.then_some(DUE_SOON_MESSAGE)
    }
}
