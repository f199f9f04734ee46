//! SplitBudget core: transaction and category stores, the 50/30/20 budget
//! aggregator, and spend-vs-limit progress computation.

pub mod budget;
pub mod db;
pub mod format;
pub mod models;
pub mod store;

pub use budget::{progress_of, spending_by_category, summarize, Progress, Tier};
pub use db::Database;
pub use models::{
    BudgetGroup, BudgetSettings, BudgetSummary, Category, CategoryDraft, CategorySpending,
    GroupBudget, Transaction, TransactionDraft, TransactionType, ValidationError,
};
pub use store::{BudgetStore, MemoryStore, RECENT_TRANSACTION_COUNT};
