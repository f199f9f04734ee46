mod memory;

pub use memory::MemoryStore;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::budget::{spending_by_category, summarize};
use crate::models::{
    BudgetSettings, BudgetSummary, Category, CategoryDraft, CategorySpending, Transaction,
    TransactionDraft,
};

/// How many transactions a dashboard "recent" panel shows.
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// Owner of the transaction and category collections plus the allocation
/// settings. Callers hold an injected implementation instead of reaching
/// for shared module state; reads return detached copies.
pub trait BudgetStore {
    /// All transactions, ordered by date descending (newest first), then
    /// id descending.
    fn transactions(&self) -> Result<Vec<Transaction>>;

    /// Validate a draft, assign an identifier and the current timestamp,
    /// store it, and return the created record. Stored state is unchanged
    /// on failure.
    fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction>;

    /// All categories, ordered by name.
    fn categories(&self) -> Result<Vec<Category>>;

    fn add_category(&mut self, draft: CategoryDraft) -> Result<Category>;

    /// Current allocation settings. Stores that persist them create the
    /// 50/30/20 defaults when none exist yet.
    fn settings(&self) -> Result<BudgetSettings>;

    fn update_income(&mut self, income: Decimal) -> Result<BudgetSettings>;

    fn update_allocation(
        &mut self,
        needs_percentage: Decimal,
        wants_percentage: Decimal,
        savings_percentage: Decimal,
    ) -> Result<BudgetSettings>;

    /// The first `count` of [`transactions`](Self::transactions); always
    /// a prefix of it.
    fn recent_transactions(&self, count: usize) -> Result<Vec<Transaction>> {
        let mut transactions = self.transactions()?;
        transactions.truncate(count);
        Ok(transactions)
    }

    /// Recompute the budget summary from the current store contents.
    fn summary(&self) -> Result<BudgetSummary> {
        Ok(summarize(
            &self.transactions()?,
            &self.categories()?,
            &self.settings()?,
        ))
    }

    /// Recompute per-category spending from the current store contents.
    fn category_spending(&self) -> Result<Vec<CategorySpending>> {
        Ok(spending_by_category(
            &self.transactions()?,
            &self.categories()?,
        ))
    }
}
