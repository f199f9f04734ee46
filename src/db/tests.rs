#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn expense_draft(title: &str, amount: Decimal, category: &str) -> TransactionDraft {
    TransactionDraft {
        title: title.into(),
        amount,
        kind: TransactionType::Expense,
        category: category.into(),
    }
}

fn income_draft(title: &str, amount: Decimal) -> TransactionDraft {
    TransactionDraft {
        title: title.into(),
        amount,
        kind: TransactionType::Income,
        category: "Income".into(),
    }
}

fn category_draft(name: &str, limit: Decimal, group: BudgetGroup) -> CategoryDraft {
    CategoryDraft {
        name: name.into(),
        limit,
        group,
    }
}

// ── Settings ──────────────────────────────────────────────────

#[test]
fn test_settings_created_on_first_read() {
    let db = Database::open_in_memory().unwrap();
    let settings = db.settings().unwrap();
    assert_eq!(settings, BudgetSettings::default());

    // The created row is reused, not recreated
    let row_count: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM budget_settings", [], |row| row.get(0))
        .unwrap();
    assert_eq!(row_count, 1);
    assert_eq!(db.settings().unwrap(), settings);
}

#[test]
fn test_update_income_persists() {
    let mut db = Database::open_in_memory().unwrap();
    let updated = db.update_income(dec!(5000)).unwrap();
    assert_eq!(updated.income, dec!(5000));
    assert_eq!(db.settings().unwrap().income, dec!(5000));
}

#[test]
fn test_update_income_rejects_negative() {
    let mut db = Database::open_in_memory().unwrap();
    assert!(db.update_income(dec!(-1)).is_err());
    assert_eq!(db.settings().unwrap().income, Decimal::ZERO);
}

#[test]
fn test_update_allocation_persists() {
    let mut db = Database::open_in_memory().unwrap();
    db.update_allocation(dec!(40), dec!(30), dec!(30)).unwrap();

    let settings = db.settings().unwrap();
    assert_eq!(settings.needs_percentage, dec!(40));
    assert_eq!(settings.wants_percentage, dec!(30));
    assert_eq!(settings.savings_percentage, dec!(30));
}

#[test]
fn test_update_allocation_rejects_bad_sum() {
    let mut db = Database::open_in_memory().unwrap();
    assert!(db.update_allocation(dec!(50), dec!(30), dec!(30)).is_err());
    assert_eq!(db.settings().unwrap(), BudgetSettings::default());
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_category_insert_and_list() {
    let mut db = Database::open_in_memory().unwrap();
    let category = db
        .add_category(category_draft("Rent", dec!(1500), BudgetGroup::Needs))
        .unwrap();
    assert!(category.id.unwrap() > 0);

    let all = db.categories().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Rent");
    assert_eq!(all[0].limit, dec!(1500));
    assert_eq!(all[0].group, BudgetGroup::Needs);
}

#[test]
fn test_categories_sorted_by_name() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_category(category_draft("Utilities", dec!(200), BudgetGroup::Needs))
        .unwrap();
    db.add_category(category_draft("Dining Out", dec!(200), BudgetGroup::Wants))
        .unwrap();
    db.add_category(category_draft("Emergency Fund", dec!(500), BudgetGroup::Savings))
        .unwrap();

    let names: Vec<String> = db
        .categories()
        .unwrap()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(names, vec!["Dining Out", "Emergency Fund", "Utilities"]);
}

#[test]
fn test_duplicate_category_name_rejected() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_category(category_draft("Rent", dec!(1500), BudgetGroup::Needs))
        .unwrap();

    let result = db.add_category(category_draft("Rent", dec!(900), BudgetGroup::Needs));
    assert!(result.is_err());
    assert_eq!(db.categories().unwrap().len(), 1);
}

#[test]
fn test_invalid_category_rejected_before_insert() {
    let mut db = Database::open_in_memory().unwrap();
    assert!(db
        .add_category(category_draft("  ", dec!(100), BudgetGroup::Wants))
        .is_err());
    assert!(db
        .add_category(category_draft("Rent", dec!(-1), BudgetGroup::Needs))
        .is_err());
    assert!(db.categories().unwrap().is_empty());
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_transaction_insert_and_query() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_category(category_draft("Rent", dec!(1500), BudgetGroup::Needs))
        .unwrap();

    let txn = db
        .add_transaction(expense_draft("May Rent", dec!(1500), "Rent"))
        .unwrap();
    assert!(txn.id.unwrap() > 0);

    let all = db.transactions().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "May Rent");
    assert_eq!(all[0].amount, dec!(1500));
    assert_eq!(all[0].kind, TransactionType::Expense);
    assert_eq!(all[0].category, "Rent");
}

#[test]
fn test_category_resolution_is_case_insensitive() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_category(category_draft("Rent", dec!(1500), BudgetGroup::Needs))
        .unwrap();
    db.add_transaction(expense_draft("May Rent", dec!(1500), "rent"))
        .unwrap();

    // Reads surface the category's canonical name
    let all = db.transactions().unwrap();
    assert_eq!(all[0].category, "Rent");
}

#[test]
fn test_unknown_category_reads_uncategorized() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_transaction(expense_draft("Mystery", dec!(5), "No Such"))
        .unwrap();

    let all = db.transactions().unwrap();
    assert_eq!(all[0].category, "Uncategorized");
}

#[test]
fn test_transactions_newest_first() {
    let mut db = Database::open_in_memory().unwrap();
    for i in 0..4 {
        db.add_transaction(expense_draft(&format!("Txn {i}"), dec!(1), "Groceries"))
            .unwrap();
    }

    let all = db.transactions().unwrap();
    assert_eq!(all[0].title, "Txn 3");
    for window in all.windows(2) {
        assert!(window[0].date >= window[1].date);
        assert!(window[0].id > window[1].id);
    }
}

#[test]
fn test_recent_is_prefix_of_list() {
    let mut db = Database::open_in_memory().unwrap();
    for i in 0..7 {
        db.add_transaction(expense_draft(&format!("Txn {i}"), dec!(1), "Groceries"))
            .unwrap();
    }

    let all = db.transactions().unwrap();
    let recent = db.recent_transactions(5).unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent, all[..5]);

    assert_eq!(db.recent_transactions(100).unwrap().len(), 7);
}

#[test]
fn test_invalid_draft_rejected_before_insert() {
    let mut db = Database::open_in_memory().unwrap();
    assert!(db
        .add_transaction(expense_draft("", dec!(1), "Groceries"))
        .is_err());
    assert!(db
        .add_transaction(expense_draft("Refund?", dec!(-5), "Groceries"))
        .is_err());
    assert_eq!(db.transaction_count().unwrap(), 0);
}

// ── Decimal precision ─────────────────────────────────────────

#[test]
fn test_decimal_precision_preserved() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_transaction(expense_draft("Precise", dec!(1234.5678), "Groceries"))
        .unwrap();

    let all = db.transactions().unwrap();
    assert_eq!(all[0].amount, dec!(1234.5678));
}

#[test]
fn test_large_amounts() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_transaction(expense_draft("House", dec!(350000.00), "Housing"))
        .unwrap();

    let all = db.transactions().unwrap();
    assert_eq!(all[0].amount, dec!(350000.00));
}

// ── Derived views ─────────────────────────────────────────────

#[test]
fn test_summary_end_to_end() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_category(category_draft("Rent", dec!(1500), BudgetGroup::Needs))
        .unwrap();
    db.add_transaction(income_draft("Salary", dec!(5000))).unwrap();
    db.add_transaction(expense_draft("May Rent", dec!(1500), "Rent"))
        .unwrap();

    let summary = db.summary().unwrap();
    assert_eq!(summary.income, dec!(5000));
    assert_eq!(summary.expenses, dec!(1500));
    assert_eq!(summary.balance, dec!(3500));
    assert_eq!(summary.needs.limit, dec!(2500));
    assert_eq!(summary.needs.spent, dec!(1500));
}

#[test]
fn test_category_spending_end_to_end() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_category(category_draft("Groceries", dec!(400), BudgetGroup::Needs))
        .unwrap();
    db.add_transaction(expense_draft("Weekly shop", dec!(87.30), "Groceries"))
        .unwrap();
    db.add_transaction(expense_draft("Top-up shop", dec!(12.70), "Groceries"))
        .unwrap();

    let spending = db.category_spending().unwrap();
    assert_eq!(spending.len(), 1);
    assert_eq!(spending[0].spent, dec!(100.00));
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_reopen_preserves_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("splitbudget.db");

    {
        let mut db = Database::open(&path).unwrap();
        db.add_category(category_draft("Rent", dec!(1500), BudgetGroup::Needs))
            .unwrap();
        db.add_transaction(expense_draft("May Rent", dec!(1500), "Rent"))
            .unwrap();
        db.update_income(dec!(5000)).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.categories().unwrap().len(), 1);
    assert_eq!(db.transaction_count().unwrap(), 1);
    assert_eq!(db.settings().unwrap().income, dec!(5000));
}

// ── Schema migration ──────────────────────────────────────────

#[test]
fn test_schema_version_set() {
    let db = Database::open_in_memory().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

#[test]
fn test_double_migrate_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    db.migrate().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}
