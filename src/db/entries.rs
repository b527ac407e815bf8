//! PostgreSQL store for financial entries.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::models::FinancialEntry;
use crate::repositories::{EntryRepository, StoreError, StoreResult};

const COLUMNS: &str =
    "id, user_id, description, month, year, amount, entry_type, status, created_on";

#[derive(Debug, FromRow)]
pub struct EntryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub month: i16,
    pub year: i16,
    pub amount: Decimal,
    pub entry_type: String,
    pub status: String,
    pub created_on: NaiveDate,
}

impl TryFrom<EntryRow> for FinancialEntry {
    type Error = StoreError;

    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        Ok(FinancialEntry {
            id: Some(row.id),
            user_id: row.user_id,
            description: row.description,
            month: row.month,
            year: row.year,
            amount: row.amount,
            entry_type: row.entry_type.parse().map_err(StoreError::Corrupt)?,
            status: row.status.parse().map_err(StoreError::Corrupt)?,
            created_on: Some(row.created_on),
        })
    }
}

#[derive(Clone)]
pub struct PgEntryRepository {
    pool: DbPool,
}

impl PgEntryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    async fn save(&self, entry: FinancialEntry) -> StoreResult<FinancialEntry> {
        let row = match entry.id {
            None => {
                let sql = format!(
                    r#"
                    INSERT INTO financial_entries
                        (user_id, description, month, year, amount, entry_type, status)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING {COLUMNS}
                    "#
                );
                sqlx::query_as::<_, EntryRow>(&sql)
                    .bind(entry.user_id)
                    .bind(&entry.description)
                    .bind(entry.month)
                    .bind(entry.year)
                    .bind(entry.amount)
                    .bind(entry.entry_type.as_str())
                    .bind(entry.status.as_str())
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    r#"
                    UPDATE financial_entries
                    SET user_id = $2, description = $3, month = $4, year = $5,
                        amount = $6, entry_type = $7, status = $8
                    WHERE id = $1
                    RETURNING {COLUMNS}
                    "#
                );
                sqlx::query_as::<_, EntryRow>(&sql)
                    .bind(id)
                    .bind(entry.user_id)
                    .bind(&entry.description)
                    .bind(entry.month)
                    .bind(entry.year)
                    .bind(entry.amount)
                    .bind(entry.entry_type.as_str())
                    .bind(entry.status.as_str())
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or(StoreError::NotFound)?
            }
        };
        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<FinancialEntry>> {
        let sql = format!("SELECT {COLUMNS} FROM financial_entries WHERE id = $1");
        let row = sqlx::query_as::<_, EntryRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(FinancialEntry::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let r = sqlx::query("DELETE FROM financial_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(r.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryStatus, EntryType};

    fn row(entry_type: &str, status: &str) -> EntryRow {
        EntryRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: "mercado".to_string(),
            month: 5,
            year: 2024,
            amount: Decimal::new(32050, 2),
            entry_type: entry_type.to_string(),
            status: status.to_string(),
            created_on: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        }
    }

    #[test]
    fn row_maps_to_entry() {
        let entry = FinancialEntry::try_from(row("EXPENSE", "SETTLED")).unwrap();
        assert_eq!(entry.entry_type, EntryType::Expense);
        assert_eq!(entry.status, EntryStatus::Settled);
        assert!(entry.id.is_some());
    }

    #[test]
    fn unknown_text_is_corrupt() {
        let err = FinancialEntry::try_from(row("TRANSFER", "PENDING")).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
