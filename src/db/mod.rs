mod schema;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::models::{
    BudgetGroup, BudgetSettings, Category, CategoryDraft, Transaction, TransactionDraft,
    TransactionType,
};
use crate::store::BudgetStore;

/// SQLite-backed store. Amounts and percentages are TEXT-encoded
/// decimals; dates are RFC 3339 UTC strings, so lexicographic column
/// order matches chronological order.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    /// Ephemeral database, gone when the value drops.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Default on-disk location under the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "splitbudget", "SplitBudget")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(data_dir.join("splitbudget.db"))
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    pub fn transaction_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }

    fn insert_default_settings(&self) -> Result<BudgetSettings> {
        let defaults = BudgetSettings::default();
        self.conn.execute(
            "INSERT INTO budget_settings (id, income, needs_percentage, wants_percentage, savings_percentage, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)",
            params![
                defaults.income.to_string(),
                defaults.needs_percentage.to_string(),
                defaults.wants_percentage.to_string(),
                defaults.savings_percentage.to_string(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(defaults)
    }
}

/// Stored dates are RFC 3339; unreadable values map to the Unix epoch.
fn parse_date(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_default()
}

impl BudgetStore for Database {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.title, t.amount, t.kind, COALESCE(c.name, 'Uncategorized'), t.date
             FROM transactions t LEFT JOIN categories c ON t.category_id = c.id
             ORDER BY t.date DESC, t.id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let amount_str: String = row.get(2)?;
            let date_str: String = row.get(5)?;
            Ok(Transaction {
                id: Some(row.get(0)?),
                title: row.get(1)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
                kind: TransactionType::parse(&row.get::<_, String>(3)?),
                category: row.get(4)?,
                date: parse_date(&date_str),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        draft.validate()?;
        let date = Utc::now();

        // Category-name resolution and the insert commit or fail together.
        let tx = self.conn.transaction()?;
        let category_id: Option<i64> = match tx.query_row(
            "SELECT id FROM categories WHERE name = ?1 COLLATE NOCASE",
            params![draft.category],
            |row| row.get(0),
        ) {
            Ok(id) => Some(id),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };
        tx.execute(
            "INSERT INTO transactions (title, amount, kind, category_id, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.title,
                draft.amount.to_string(),
                draft.kind.as_str(),
                category_id,
                date.to_rfc3339(),
                date.to_rfc3339(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(draft.into_transaction(id, date))
    }

    fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, budget_group, budget_limit FROM categories ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| {
            let limit_str: String = row.get(3)?;
            Ok(Category {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                group: BudgetGroup::parse(&row.get::<_, String>(2)?),
                limit: Decimal::from_str(&limit_str).unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn add_category(&mut self, draft: CategoryDraft) -> Result<Category> {
        draft.validate()?;
        self.conn
            .execute(
                "INSERT INTO categories (name, budget_group, budget_limit, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    draft.name,
                    draft.group.as_str(),
                    draft.limit.to_string(),
                    Utc::now().to_rfc3339(),
                ],
            )
            .with_context(|| format!("Failed to add category: {}", draft.name))?;
        Ok(draft.into_category(self.conn.last_insert_rowid()))
    }

    fn settings(&self) -> Result<BudgetSettings> {
        let result = self.conn.query_row(
            "SELECT income, needs_percentage, wants_percentage, savings_percentage
             FROM budget_settings WHERE id = 1",
            [],
            |row| {
                let income: String = row.get(0)?;
                let needs: String = row.get(1)?;
                let wants: String = row.get(2)?;
                let savings: String = row.get(3)?;
                Ok(BudgetSettings {
                    income: Decimal::from_str(&income).unwrap_or_default(),
                    needs_percentage: Decimal::from_str(&needs).unwrap_or_default(),
                    wants_percentage: Decimal::from_str(&wants).unwrap_or_default(),
                    savings_percentage: Decimal::from_str(&savings).unwrap_or_default(),
                })
            },
        );
        match result {
            Ok(settings) => Ok(settings),
            // No row yet is not an error: create and return the defaults.
            Err(rusqlite::Error::QueryReturnedNoRows) => self.insert_default_settings(),
            Err(e) => Err(e.into()),
        }
    }

    fn update_income(&mut self, income: Decimal) -> Result<BudgetSettings> {
        let mut settings = self.settings()?;
        settings.income = income;
        settings.validate()?;
        self.conn.execute(
            "UPDATE budget_settings SET income = ?1, updated_at = ?2 WHERE id = 1",
            params![income.to_string(), Utc::now().to_rfc3339()],
        )?;
        Ok(settings)
    }

    fn update_allocation(
        &mut self,
        needs_percentage: Decimal,
        wants_percentage: Decimal,
        savings_percentage: Decimal,
    ) -> Result<BudgetSettings> {
        let mut settings = self.settings()?;
        settings.needs_percentage = needs_percentage;
        settings.wants_percentage = wants_percentage;
        settings.savings_percentage = savings_percentage;
        settings.validate()?;
        self.conn.execute(
            "UPDATE budget_settings
             SET needs_percentage = ?1, wants_percentage = ?2, savings_percentage = ?3, updated_at = ?4
             WHERE id = 1",
            params![
                needs_percentage.to_string(),
                wants_percentage.to_string(),
                savings_percentage.to_string(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests;
