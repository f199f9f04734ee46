use rust_decimal::Decimal;

use crate::models::{
    BudgetGroup, BudgetSettings, BudgetSummary, Category, CategorySpending, GroupBudget,
    Transaction,
};

/// Derive a [`BudgetSummary`] from the full transaction and category
/// collections. Every call is a full recomputation; nothing is maintained
/// incrementally.
///
/// Income and expenses are summed from transactions. Each group's limit
/// is its allocation share of income; its spend is the total of expense
/// transactions whose category (matched by name, case-insensitive) is
/// tagged with that group. Expenses with no matching category count
/// toward `expenses` but toward no group.
pub fn summarize(
    transactions: &[Transaction],
    categories: &[Category],
    settings: &BudgetSettings,
) -> BudgetSummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut spent = [Decimal::ZERO; 3];

    for txn in transactions {
        if txn.is_income() {
            income += txn.amount;
            continue;
        }
        expenses += txn.amount;
        if let Some(category) = Category::find_by_name(categories, &txn.category) {
            spent[group_index(category.group)] += txn.amount;
        }
    }

    let group = |g: BudgetGroup| GroupBudget {
        spent: spent[group_index(g)],
        limit: settings.limit_for(g, income),
    };

    BudgetSummary {
        income,
        expenses,
        balance: income - expenses,
        needs: group(BudgetGroup::Needs),
        wants: group(BudgetGroup::Wants),
        savings: group(BudgetGroup::Savings),
    }
}

fn group_index(group: BudgetGroup) -> usize {
    match group {
        BudgetGroup::Needs => 0,
        BudgetGroup::Wants => 1,
        BudgetGroup::Savings => 2,
    }
}

/// Per-category spend derived from expense transactions, in category
/// order. Stored categories carry no running total; this view is the
/// single source of truth for "spent".
pub fn spending_by_category(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategorySpending> {
    categories
        .iter()
        .map(|category| {
            let name = category.name.to_lowercase();
            let spent = transactions
                .iter()
                .filter(|t| t.is_expense() && t.category.to_lowercase() == name)
                .map(|t| t.amount)
                .sum();
            CategorySpending {
                category: category.clone(),
                spent,
            }
        })
        .collect()
}
