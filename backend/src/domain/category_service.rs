//! Category service domain logic.
//!
//! ## Business Rules
//!
//! - A category needs a non-empty name; names need not be unique
//! - Deleting a category clears it from every expense that referenced it.
//!   Forecasts keep the stale id (they are not rewritten)

use tracing::{info, warn};

use shared::Category;

use crate::domain::collections::{load_categories, load_expenses, load_forecasts, next_id};
use crate::domain::commands::category::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::storage::{Collection, RecordStore};

pub const CATEGORY_NOT_FOUND: &str = "Category not found";

#[derive(Clone, Debug)]
pub struct CategoryService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> CategoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_categories(&self) -> DomainResult<Vec<Category>> {
        Ok(load_categories(&self.store)?)
    }

    pub fn create_category(&self, command: CreateCategoryCommand) -> DomainResult<Category> {
        let name = match command.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DomainError::validation("Name is required")),
        };

        let mut categories = load_categories(&self.store)?;
        let category = Category {
            id: next_id(categories.iter().map(|c| c.id)),
            name,
        };
        categories.push(category.clone());
        self.store.save(Collection::Categories, &categories)?;

        info!("Created category {} '{}'", category.id, category.name);
        Ok(category)
    }

    pub fn update_category(&self, command: UpdateCategoryCommand) -> DomainResult<Category> {
        let mut categories = load_categories(&self.store)?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == command.id)
            .ok_or_else(|| DomainError::not_found(CATEGORY_NOT_FOUND))?;
        category.name = command.name;
        let updated = category.clone();
        self.store.save(Collection::Categories, &categories)?;

        info!("Renamed category {} to '{}'", updated.id, updated.name);
        Ok(updated)
    }

    /// Remove a category and null out the references to it on expenses.
    pub fn delete_category(&self, command: DeleteCategoryCommand) -> DomainResult<()> {
        let mut categories = load_categories(&self.store)?;
        let mut expenses = load_expenses(&self.store)?;

        let index = categories
            .iter()
            .position(|c| c.id == command.id)
            .ok_or_else(|| DomainError::not_found(CATEGORY_NOT_FOUND))?;

        let mut cleared = 0;
        for expense in expenses.iter_mut().filter(|e| e.category == Some(command.id)) {
            expense.category = None;
            cleared += 1;
        }
        let removed = categories.remove(index);

        self.store.save(Collection::Categories, &categories)?;
        self.store.save(Collection::Expenses, &expenses)?;

        // Both saves are done; the forecast check only feeds the log.
        match load_forecasts(&self.store) {
            Ok(forecasts) => {
                let stale = forecasts
                    .iter()
                    .filter(|f| f.category == Some(command.id))
                    .count();
                if stale > 0 {
                    warn!("{} forecasts still reference deleted category {}", stale, command.id);
                }
            }
            Err(e) => warn!("Could not check forecasts for category {}: {:#}", command.id, e),
        }

        info!(
            "Deleted category {} '{}', cleared it from {} expenses",
            removed.id, removed.name, cleared
        );
        Ok(())
    }
}
