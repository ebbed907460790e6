//! Typed access to the persisted collections, including their seed contents.

use anyhow::Result;
use shared::{Category, Expense, Forecast};

use crate::storage::{Collection, RecordStore};

/// Categories written the first time the category collection is read.
pub fn default_categories() -> Vec<Category> {
    ["Groceries", "Utilities", "Transport", "Coffee", "Shopping", "Other"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Category {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Sample rows written the first time the expense collection is read.
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            title: "Groceries".to_string(),
            amount: 50.0,
            date: "2024-06-01".to_string(),
            category: Some(1),
        },
        Expense {
            id: 2,
            title: "Internet Bill".to_string(),
            amount: 30.0,
            date: "2024-06-03".to_string(),
            category: Some(2),
        },
        Expense {
            id: 3,
            title: "Coffee".to_string(),
            amount: 5.0,
            date: "2024-06-04".to_string(),
            category: Some(4),
        },
    ]
}

pub fn load_categories<S: RecordStore>(store: &S) -> Result<Vec<Category>> {
    store.load(Collection::Categories, &default_categories())
}

pub fn load_expenses<S: RecordStore>(store: &S) -> Result<Vec<Expense>> {
    store.load(Collection::Expenses, &sample_expenses())
}

pub fn load_forecasts<S: RecordStore>(store: &S) -> Result<Vec<Forecast>> {
    store.load::<Forecast>(Collection::Forecasts, &[])
}

/// Next id for a collection: one past the largest id in use, or 1 when empty.
pub fn next_id(ids: impl IntoIterator<Item = i64>) -> i64 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}
