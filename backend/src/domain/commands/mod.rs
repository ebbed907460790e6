//! Inputs to the domain services, already coerced from their wire form.

pub mod category;
pub mod expense;
pub mod forecast;

use serde_json::Value;
use shared::coerce::{amount_from_value, category_from_value};

use crate::domain::error::{DomainError, DomainResult};

/// The four user-editable fields shared by expenses and forecasts.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub title: String,
    pub amount: f64,
    pub date: String,
    pub category: Option<i64>,
}

impl EntryFields {
    /// Coerce raw form values. An unparsable category becomes `None` and is
    /// stored that way; only an amount that is not a number is rejected.
    pub fn from_raw(title: String, amount: &Value, date: String, category: &Value) -> DomainResult<Self> {
        let amount = amount_from_value(amount).map_err(DomainError::Validation)?;
        Ok(Self {
            title,
            amount,
            date,
            category: category_from_value(category),
        })
    }
}
