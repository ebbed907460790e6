//! Forecast service domain logic.
//!
//! ## Business Rules
//!
//! - A new forecast may not be dated before today (server local date, compared
//!   by calendar day, so today itself is allowed)
//! - Deleting a forecast that does not exist succeeds without changes
//! - A forecast is "due soon" when its date starts more than zero and at most
//!   24 hours from now

use std::sync::Arc;
use tracing::{info, warn};

use shared::coerce::parse_record_date;
use shared::dashboard::due_soon;
use shared::Forecast;

use crate::domain::clock::Clock;
use crate::domain::collections::{load_forecasts, next_id};
use crate::domain::commands::forecast::{
    CreateForecastCommand, DeleteForecastCommand, UpdateForecastCommand,
};
use crate::domain::commands::EntryFields;
use crate::domain::error::{DomainError, DomainResult};
use crate::storage::{Collection, RecordStore};

pub const PAST_DATE_MESSAGE: &str = "Cannot set forecast for past date.";
pub const FORECAST_NOT_FOUND: &str = "Forecast not found";

#[derive(Clone, Debug)]
pub struct ForecastService<S: RecordStore> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: RecordStore> ForecastService<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn list_forecasts(&self) -> DomainResult<Vec<Forecast>> {
        Ok(load_forecasts(&self.store)?)
    }

    pub fn create_forecast(&self, command: CreateForecastCommand) -> DomainResult<Forecast> {
        self.ensure_not_past(&command.fields)?;

        let mut forecasts = load_forecasts(&self.store)?;
        let fields = command.fields;
        let forecast = Forecast {
            id: next_id(forecasts.iter().map(|f| f.id)),
            title: fields.title,
            amount: fields.amount,
            date: fields.date,
            category: fields.category,
        };
        forecasts.push(forecast.clone());
        self.store.save(Collection::Forecasts, &forecasts)?;

        info!("Created forecast {} '{}' for {}", forecast.id, forecast.title, forecast.date);
        Ok(forecast)
    }

    /// Overwrite all fields of an existing forecast. The past-date rule only
    /// guards creation, so an update may move a forecast into the past.
    pub fn update_forecast(&self, command: UpdateForecastCommand) -> DomainResult<Forecast> {
        let mut forecasts = load_forecasts(&self.store)?;
        let forecast = forecasts
            .iter_mut()
            .find(|f| f.id == command.id)
            .ok_or_else(|| DomainError::not_found(FORECAST_NOT_FOUND))?;

        let fields = command.fields;
        forecast.title = fields.title;
        forecast.amount = fields.amount;
        forecast.date = fields.date;
        forecast.category = fields.category;
        let updated = forecast.clone();
        self.store.save(Collection::Forecasts, &forecasts)?;

        info!("Updated forecast {}", updated.id);
        Ok(updated)
    }

    /// Remove the forecast with the given id, if any. Always succeeds.
    pub fn delete_forecast(&self, command: DeleteForecastCommand) -> DomainResult<()> {
        let mut forecasts = load_forecasts(&self.store)?;
        let before = forecasts.len();
        forecasts.retain(|f| Some(f.id) != command.id);
        self.store.save(Collection::Forecasts, &forecasts)?;

        if forecasts.len() == before {
            info!("Delete of forecast {:?} matched nothing", command.id);
        } else {
            info!("Deleted forecast {:?}", command.id);
        }
        Ok(())
    }

    /// Forecasts falling due within the next 24 hours
    pub fn due_soon(&self) -> DomainResult<Vec<Forecast>> {
        let forecasts = load_forecasts(&self.store)?;
        Ok(due_soon(&forecasts, self.clock.now()))
    }

    fn ensure_not_past(&self, fields: &EntryFields) -> DomainResult<()> {
        let today = self.clock.today();
        match parse_record_date(&fields.date) {
            Some(day) if day < today => {
                warn!("Rejected forecast dated {} (today is {})", day, today);
                Err(DomainError::validation(PAST_DATE_MESSAGE))
            }
            Some(_) => Ok(()),
            None => Err(DomainError::validation(format!(
                "Invalid forecast date '{}'",
                fields.date
            ))),
        }
    }
}
