//! SQLite-backed Record Store.
//!
//! One statement per operation against the `inventory` table. Connections
//! come from a `SqlitePool`; each call checks one out for the duration of its
//! statement and SQLite's own locking settles concurrent writers (last write
//! wins).

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::instrument;

use pharmacy_core::MedicineId;
use pharmacy_inventory::{InventoryItem, ItemFields, EXPIRATION_DATE_FORMAT};

use super::r#trait::{RecordStore, StoreError, StoreResult};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS inventory (
        id              TEXT PRIMARY KEY,
        name            TEXT NOT NULL,
        quantity        INTEGER NOT NULL,
        price           REAL NOT NULL,
        expiration_date TEXT NOT NULL
    )
"#;

/// SQLite-backed Record Store.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Wrap an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("open", e))?;

        Ok(Self::new(pool))
    }

    /// A private in-memory database.
    ///
    /// Every pooled connection to `sqlite::memory:` gets its own database, so
    /// the pool is pinned to a single connection that never expires.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| map_sqlx_error("open_in_memory", e))?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: String,
    name: String,
    quantity: i64,
    price: f64,
    expiration_date: String,
}

impl ItemRow {
    fn into_item(self) -> StoreResult<InventoryItem> {
        let id: MedicineId = self
            .id
            .parse()
            .map_err(|e| StoreError::Decode(format!("id {:?}: {e}", self.id)))?;
        let expiration_date = NaiveDate::parse_from_str(&self.expiration_date, EXPIRATION_DATE_FORMAT)
            .map_err(|e| {
                StoreError::Decode(format!("expiration_date {:?} of {id}: {e}", self.expiration_date))
            })?;

        Ok(InventoryItem::with_id(
            id,
            ItemFields {
                name: self.name,
                quantity: self.quantity,
                price: self.price,
                expiration_date,
            },
        ))
    }
}

fn into_items(rows: Vec<ItemRow>) -> StoreResult<Vec<InventoryItem>> {
    rows.into_iter().map(ItemRow::into_item).collect()
}

fn format_date(date: NaiveDate) -> String {
    date.format(EXPIRATION_DATE_FORMAT).to_string()
}

/// Build a `LIKE` pattern matching `fragment` anywhere, with `\` as escape.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self), err)]
    async fn create_table(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("create_table", e))?;
        Ok(())
    }

    #[instrument(skip(self, item), fields(id = %item.id()), err)]
    async fn insert(&self, item: &InventoryItem) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO inventory (id, name, quantity, price, expiration_date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(item.id().to_string())
        .bind(item.name())
        .bind(item.quantity())
        .bind(item.price())
        .bind(format_date(item.expiration_date()))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn list_all(&self) -> StoreResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, quantity, price, expiration_date FROM inventory",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_all", e))?;

        into_items(rows)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&self, id: MedicineId) -> StoreResult<Option<InventoryItem>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, quantity, price, expiration_date FROM inventory WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_by_id", e))?;

        row.map(ItemRow::into_item).transpose()
    }

    #[instrument(skip(self, changes), err)]
    async fn update(&self, id: MedicineId, changes: &ItemFields) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET name = ?1, quantity = ?2, price = ?3, expiration_date = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&changes.name)
        .bind(changes.quantity)
        .bind(changes.price)
        .bind(format_date(changes.expiration_date))
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete_by_id(&self, id: MedicineId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn search_by_name_substring(&self, fragment: &str) -> StoreResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity, price, expiration_date
            FROM inventory
            WHERE name LIKE ?1 ESCAPE '\'
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("search_by_name_substring", e))?;

        into_items(rows)
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("{} in {}", db_err.message(), operation);
            if db_err.is_unique_violation() {
                StoreError::Conflict(msg)
            } else {
                StoreError::Database(msg)
            }
        }
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("connection pool unavailable in {}", operation))
        }
        sqlx::Error::Io(e) => StoreError::Unavailable(format!("io error in {}: {}", operation, e)),
        sqlx::Error::ColumnDecode { index, source } => {
            StoreError::Decode(format!("column {} in {}: {}", index, operation, source))
        }
        sqlx::Error::ColumnNotFound(column) => {
            StoreError::Decode(format!("missing column {} in {}", column, operation))
        }
        other => StoreError::Database(format!("{} in {}", other, operation)),
    }
}
