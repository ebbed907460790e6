use shared::ForecastRequest;

use super::EntryFields;
use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateForecastCommand {
    pub fields: EntryFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateForecastCommand {
    pub id: i64,
    pub fields: EntryFields,
}

/// Deleting an id that does not exist is a no-op, not an error
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteForecastCommand {
    pub id: Option<i64>,
}

fn fields_of(request: ForecastRequest) -> DomainResult<EntryFields> {
    EntryFields::from_raw(request.title, &request.amount, request.date, &request.category)
}

impl TryFrom<ForecastRequest> for CreateForecastCommand {
    type Error = DomainError;

    fn try_from(request: ForecastRequest) -> DomainResult<Self> {
        Ok(Self {
            fields: fields_of(request)?,
        })
    }
}

impl UpdateForecastCommand {
    pub fn new(id: i64, request: ForecastRequest) -> DomainResult<Self> {
        Ok(Self {
            id,
            fields: fields_of(request)?,
        })
    }
}
