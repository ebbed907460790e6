use shared::{ExpenseFilter, ExpenseRequest};

use super::EntryFields;
use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseListQuery {
    pub filter: ExpenseFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateExpenseCommand {
    pub fields: EntryFields,
}

/// Replaces all four fields of an existing expense
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpenseCommand {
    pub id: i64,
    pub fields: EntryFields,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteExpenseCommand {
    pub id: i64,
}

fn fields_of(request: ExpenseRequest) -> DomainResult<EntryFields> {
    EntryFields::from_raw(request.title, &request.amount, request.date, &request.category)
}

impl TryFrom<ExpenseRequest> for CreateExpenseCommand {
    type Error = DomainError;

    fn try_from(request: ExpenseRequest) -> DomainResult<Self> {
        Ok(Self {
            fields: fields_of(request)?,
        })
    }
}

impl UpdateExpenseCommand {
    pub fn new(id: i64, request: ExpenseRequest) -> DomainResult<Self> {
        Ok(Self {
            id,
            fields: fields_of(request)?,
        })
    }
}
