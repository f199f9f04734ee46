use rust_decimal::Decimal;

use super::{BudgetGroup, ValidationError};

/// Per-user allocation settings: the stated monthly income and the three
/// group percentages, which must sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSettings {
    pub income: Decimal,
    pub needs_percentage: Decimal,
    pub wants_percentage: Decimal,
    pub savings_percentage: Decimal,
}

impl BudgetSettings {
    pub fn new(
        income: Decimal,
        needs_percentage: Decimal,
        wants_percentage: Decimal,
        savings_percentage: Decimal,
    ) -> Result<Self, ValidationError> {
        let settings = Self {
            income,
            needs_percentage,
            wants_percentage,
            savings_percentage,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.income < Decimal::ZERO {
            return Err(ValidationError::NegativeIncome(self.income));
        }
        for pct in [
            self.needs_percentage,
            self.wants_percentage,
            self.savings_percentage,
        ] {
            if pct < Decimal::ZERO {
                return Err(ValidationError::NegativePercentage(pct));
            }
        }
        let sum = self.needs_percentage + self.wants_percentage + self.savings_percentage;
        if sum != Decimal::ONE_HUNDRED {
            return Err(ValidationError::UnbalancedAllocation(sum));
        }
        Ok(())
    }

    pub fn percentage_for(&self, group: BudgetGroup) -> Decimal {
        match group {
            BudgetGroup::Needs => self.needs_percentage,
            BudgetGroup::Wants => self.wants_percentage,
            BudgetGroup::Savings => self.savings_percentage,
        }
    }

    /// Spending ceiling for a group at the given income.
    pub fn limit_for(&self, group: BudgetGroup, income: Decimal) -> Decimal {
        income * self.percentage_for(group) / Decimal::ONE_HUNDRED
    }
}

impl Default for BudgetSettings {
    /// The 50/30/20 rule with no income recorded yet.
    fn default() -> Self {
        Self {
            income: Decimal::ZERO,
            needs_percentage: Decimal::from(50),
            wants_percentage: Decimal::from(30),
            savings_percentage: Decimal::from(20),
        }
    }
}
