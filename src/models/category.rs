use rust_decimal::Decimal;

use super::ValidationError;

/// One of the three buckets of the 50/30/20 allocation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetGroup {
    Needs,
    Wants,
    Savings,
}

impl BudgetGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
            Self::Savings => "savings",
        }
    }

    /// Parse a stored tag. Unknown tags map to `Needs`; the persisted
    /// path constrains the column to the three known tags.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "wants" => Self::Wants,
            "savings" => Self::Savings,
            _ => Self::Needs,
        }
    }

    pub fn all() -> &'static [BudgetGroup] {
        &[Self::Needs, Self::Wants, Self::Savings]
    }
}

impl std::fmt::Display for BudgetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A spending category with a budget ceiling. Categories carry no running
/// total; spend is always derived from transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub limit: Decimal,
    pub group: BudgetGroup,
}

impl Category {
    pub fn new(name: String, limit: Decimal, group: BudgetGroup) -> Self {
        Self {
            id: None,
            name,
            limit,
            group,
        }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }

    /// Find a category by ID in a slice.
    pub fn find_by_id(categories: &[Category], id: i64) -> Option<&Category> {
        categories.iter().find(|c| c.id == Some(id))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A user-submitted category lacking the store-assigned identifier.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub limit: Decimal,
    pub group: BudgetGroup,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.limit < Decimal::ZERO {
            return Err(ValidationError::NegativeLimit(self.limit));
        }
        Ok(())
    }

    pub(crate) fn into_category(self, id: i64) -> Category {
        Category {
            id: Some(id),
            name: self.name,
            limit: self.limit,
            group: self.group,
        }
    }
}
