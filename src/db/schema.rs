pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS categories (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL UNIQUE,
    budget_group TEXT NOT NULL CHECK (budget_group IN ('needs', 'wants', 'savings')),
    budget_limit TEXT NOT NULL,
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    amount      TEXT NOT NULL,
    kind        TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
    category_id INTEGER REFERENCES categories(id),
    date        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category_id);

CREATE TABLE IF NOT EXISTS budget_settings (
    id                 INTEGER PRIMARY KEY CHECK (id = 1),
    income             TEXT NOT NULL,
    needs_percentage   TEXT NOT NULL,
    wants_percentage   TEXT NOT NULL,
    savings_percentage TEXT NOT NULL,
    updated_at         TEXT NOT NULL
);

"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here:
    // (1, "ALTER TABLE transactions ADD COLUMN notes TEXT NOT NULL DEFAULT '';"),
];
