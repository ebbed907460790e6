//! Read-only projections over all three collections.

use shared::dashboard::{dashboard_summary, DashboardSummary};

use crate::domain::collections::{load_categories, load_expenses, load_forecasts};
use crate::domain::error::DomainResult;
use crate::storage::RecordStore;

#[derive(Clone, Debug)]
pub struct DashboardService<S: RecordStore> {
    store: S,
    initial_balance: f64,
}

impl<S: RecordStore> DashboardService<S> {
    pub fn new(store: S, initial_balance: f64) -> Self {
        Self {
            store,
            initial_balance,
        }
    }

    pub fn summary(&self) -> DomainResult<DashboardSummary> {
        let categories = load_categories(&self.store)?;
        let expenses = load_expenses(&self.store)?;
        let forecasts = load_forecasts(&self.store)?;
        Ok(dashboard_summary(
            &categories,
            &expenses,
            &forecasts,
            self.initial_balance,
        ))
    }
}
