use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

use super::BudgetStore;
use crate::models::{BudgetSettings, Category, CategoryDraft, Transaction, TransactionDraft};

/// In-memory store. State lives entirely in the owning value, so test
/// fixtures are plain constructor arguments; operations cannot fail
/// except by validation.
#[derive(Debug)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    settings: BudgetSettings,
    next_transaction_id: i64,
    next_category_id: i64,
}

impl MemoryStore {
    /// Empty store with the default 50/30/20 settings.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            settings: BudgetSettings::default(),
            next_transaction_id: 1,
            next_category_id: 1,
        }
    }

    /// Store seeded with initial state. Records without ids are assigned
    /// fresh ones; id assignment continues past the largest seeded id.
    pub fn with_fixtures(
        mut transactions: Vec<Transaction>,
        mut categories: Vec<Category>,
        settings: BudgetSettings,
    ) -> Self {
        let mut next_transaction_id =
            1 + transactions.iter().filter_map(|t| t.id).max().unwrap_or(0);
        for txn in &mut transactions {
            if txn.id.is_none() {
                txn.id = Some(next_transaction_id);
                next_transaction_id += 1;
            }
        }

        let mut next_category_id = 1 + categories.iter().filter_map(|c| c.id).max().unwrap_or(0);
        for category in &mut categories {
            if category.id.is_none() {
                category.id = Some(next_category_id);
                next_category_id += 1;
            }
        }

        Self {
            transactions,
            categories,
            settings,
            next_transaction_id,
            next_category_id,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetStore for MemoryStore {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        let mut transactions = self.transactions.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(transactions)
    }

    fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        draft.validate()?;
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        let txn = draft.into_transaction(id, Utc::now());
        self.transactions.insert(0, txn.clone());
        Ok(txn)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    fn add_category(&mut self, draft: CategoryDraft) -> Result<Category> {
        draft.validate()?;
        let id = self.next_category_id;
        self.next_category_id += 1;
        let category = draft.into_category(id);
        self.categories.push(category.clone());
        Ok(category)
    }

    fn settings(&self) -> Result<BudgetSettings> {
        Ok(self.settings.clone())
    }

    fn update_income(&mut self, income: Decimal) -> Result<BudgetSettings> {
        let updated = BudgetSettings {
            income,
            ..self.settings.clone()
        };
        updated.validate()?;
        self.settings = updated.clone();
        Ok(updated)
    }

    fn update_allocation(
        &mut self,
        needs_percentage: Decimal,
        wants_percentage: Decimal,
        savings_percentage: Decimal,
    ) -> Result<BudgetSettings> {
        let updated = BudgetSettings {
            needs_percentage,
            wants_percentage,
            savings_percentage,
            ..self.settings.clone()
        };
        updated.validate()?;
        self.settings = updated.clone();
        Ok(updated)
    }
}
