mod category;
mod settings;
mod summary;
mod transaction;

pub use category::{BudgetGroup, Category, CategoryDraft};
pub use settings::BudgetSettings;
pub use summary::{BudgetSummary, CategorySpending, GroupBudget};
pub use transaction::{Transaction, TransactionDraft, TransactionType};

use rust_decimal::Decimal;

/// A construction-time invariant violation, reported before any store
/// state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("transaction title must not be empty")]
    EmptyTitle,

    #[error("category name must not be empty")]
    EmptyName,

    #[error("amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("budget limit must not be negative: {0}")]
    NegativeLimit(Decimal),

    #[error("income must not be negative: {0}")]
    NegativeIncome(Decimal),

    #[error("percentage must not be negative: {0}")]
    NegativePercentage(Decimal),

    #[error("allocation percentages must sum to 100, got {0}")]
    UnbalancedAllocation(Decimal),
}
