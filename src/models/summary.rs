use rust_decimal::Decimal;

use super::{BudgetGroup, Category};

/// Spent-vs-limit pair for one budget group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupBudget {
    pub spent: Decimal,
    pub limit: Decimal,
}

/// Projection over the full transaction and category collections.
/// Recomputed on every read; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub needs: GroupBudget,
    pub wants: GroupBudget,
    pub savings: GroupBudget,
}

impl BudgetSummary {
    pub fn group(&self, group: BudgetGroup) -> GroupBudget {
        match group {
            BudgetGroup::Needs => self.needs,
            BudgetGroup::Wants => self.wants,
            BudgetGroup::Savings => self.savings,
        }
    }
}

/// A category together with its transaction-derived spend.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub spent: Decimal,
}
