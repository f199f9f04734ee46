use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse a stored tag. Anything that is not income is an expense.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }

    pub fn all() -> &'static [TransactionType] {
        &[Self::Income, Self::Expense]
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense. Amounts are non-negative; the
/// kind carries the sign. Records are never mutated after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<i64>,
    pub title: String,
    pub amount: Decimal,
    pub kind: TransactionType,
    /// Category display name; "Uncategorized" when nothing matches.
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount signed by kind: income positive, expense negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// A user-submitted transaction lacking the store-assigned fields.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: Decimal,
    pub kind: TransactionType,
    pub category: String,
}

impl TransactionDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }

    /// Promote into a full record once the store has assigned its fields.
    pub(crate) fn into_transaction(self, id: i64, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: Some(id),
            title: self.title,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date,
        }
    }
}
