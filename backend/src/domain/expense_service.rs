//! Expense service domain logic.
//!
//! Expenses carry no validation beyond amount coercion: empty titles, zero or
//! negative amounts and unknown categories are all stored as given.

use tracing::info;

use shared::dashboard::filter_expenses;
use shared::Expense;

use crate::domain::collections::{load_expenses, next_id};
use crate::domain::commands::expense::{
    CreateExpenseCommand, DeleteExpenseCommand, ExpenseListQuery, UpdateExpenseCommand,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::storage::{Collection, RecordStore};

pub const EXPENSE_NOT_FOUND: &str = "Expense not found";

#[derive(Clone, Debug)]
pub struct ExpenseService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ExpenseService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All expenses in insertion order, narrowed by the optional filter
    pub fn list_expenses(&self, query: ExpenseListQuery) -> DomainResult<Vec<Expense>> {
        let expenses = load_expenses(&self.store)?;
        if query.filter.is_empty() {
            return Ok(expenses);
        }
        Ok(filter_expenses(&expenses, &query.filter))
    }

    pub fn create_expense(&self, command: CreateExpenseCommand) -> DomainResult<Expense> {
        let mut expenses = load_expenses(&self.store)?;
        let fields = command.fields;
        let expense = Expense {
            id: next_id(expenses.iter().map(|e| e.id)),
            title: fields.title,
            amount: fields.amount,
            date: fields.date,
            category: fields.category,
        };
        expenses.push(expense.clone());
        self.store.save(Collection::Expenses, &expenses)?;

        info!("Created expense {} '{}' ({:.2})", expense.id, expense.title, expense.amount);
        Ok(expense)
    }

    pub fn update_expense(&self, command: UpdateExpenseCommand) -> DomainResult<Expense> {
        let mut expenses = load_expenses(&self.store)?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == command.id)
            .ok_or_else(|| DomainError::not_found(EXPENSE_NOT_FOUND))?;

        let fields = command.fields;
        expense.title = fields.title;
        expense.amount = fields.amount;
        expense.date = fields.date;
        expense.category = fields.category;
        let updated = expense.clone();
        self.store.save(Collection::Expenses, &expenses)?;

        info!("Updated expense {}", updated.id);
        Ok(updated)
    }

    pub fn delete_expense(&self, command: DeleteExpenseCommand) -> DomainResult<()> {
        let mut expenses = load_expenses(&self.store)?;
        let index = expenses
            .iter()
            .position(|e| e.id == command.id)
            .ok_or_else(|| DomainError::not_found(EXPENSE_NOT_FOUND))?;
        expenses.remove(index);
        self.store.save(Collection::Expenses, &expenses)?;

        info!("Deleted expense {}", command.id);
        Ok(())
    }
}
