//! SQLite-backed catalog store.
//!
//! The database file holds a single `products` table keyed by `sku`. A missing
//! file is created and seeded with [`SEED_PRODUCTS`] in one transaction before
//! the store is handed out; an existing file is opened as-is.
//!
//! Filter values are always bound as statement parameters, never spliced into
//! the SQL text.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use catalog_core::Sku;
use catalog_products::{Filter, PriceBound, Product, SEED_PRODUCTS, SeedProduct};

use super::{CatalogStore, StoreError};

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE products (
        sku      TEXT    NOT NULL PRIMARY KEY,
        name     TEXT    NOT NULL,
        category TEXT    NOT NULL,
        price    INTEGER NOT NULL
    )
"#;

const INSERT_PRODUCT: &str =
    "INSERT INTO products (sku, name, category, price) VALUES (?1, ?2, ?3, ?4)";

const SELECT_PRODUCTS: &str = "SELECT sku, name, category, price FROM products";

/// Catalog store on top of a shared SQLite connection pool.
///
/// `SqlitePool` is `Send + Sync` and cheap to clone; SQLite itself serializes
/// access to the file, and request-time access is read-only.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl SqliteCatalogStore {
    /// Open the store at `path`, creating and seeding it if the file does not exist.
    pub async fn initialize(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::initialize_with(path, false).await
    }

    /// Like [`initialize`](Self::initialize), optionally discarding any existing
    /// database file first so the store is rebuilt from the seed catalog.
    pub async fn initialize_with(path: impl AsRef<Path>, recreate: bool) -> Result<Self, StoreError> {
        Self::open_or_seed(path.as_ref(), recreate, SEED_PRODUCTS).await
    }

    async fn open_or_seed(
        path: &Path,
        recreate: bool,
        seed: &[SeedProduct],
    ) -> Result<Self, StoreError> {
        let path = path.to_path_buf();

        if recreate {
            remove_database_file(&path).await?;
        }

        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            StoreError::bootstrap(format!("failed to inspect {}: {e}", path.display()))
        })?;

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(!exists);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| StoreError::bootstrap(format!("failed to open {}: {e}", path.display())))?;

        let store = Self { pool, path };

        if exists {
            tracing::info!(path = %store.path.display(), "opened existing catalog store");
            return Ok(store);
        }

        if let Err(err) = store.create_and_seed(seed).await {
            // An empty file left here would be "opened" on the next start.
            store.pool.close().await;
            if let Err(cleanup) = tokio::fs::remove_file(&store.path).await {
                tracing::warn!(
                    path = %store.path.display(),
                    error = %cleanup,
                    "failed to remove catalog store after failed bootstrap"
                );
                return Err(StoreError::bootstrap(format!(
                    "{err}; additionally failed to remove {}: {cleanup}",
                    store.path.display()
                )));
            }
            return Err(err);
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn create_and_seed(&self, seed: &[SeedProduct]) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::bootstrap(format!("failed to begin seed transaction: {e}")))?;

        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::bootstrap(format!("failed to create products table: {e}")))?;

        for row in seed {
            tracing::debug!(sku = row.sku, name = row.name, category = row.category, price = row.price, "inserting product");
            sqlx::query(INSERT_PRODUCT)
                .bind(row.sku)
                .bind(row.name)
                .bind(row.category)
                .bind(row.price)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::bootstrap(format!("failed to insert product {}: {e}", row.sku)))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::bootstrap(format!("failed to commit seed transaction: {e}")))?;

        tracing::info!(
            path = %self.path.display(),
            products = seed.len(),
            "created and seeded catalog store"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn query(&self, filter: &Filter) -> Result<Vec<Product>, StoreError> {
        let mut qb = build_query(filter);

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;

        tracing::debug!(
            category = ?filter.category,
            max_price = ?filter.max_price,
            rows = rows.len(),
            "catalog query"
        );

        rows.iter().map(product_from_row).collect()
    }
}

fn build_query(filter: &Filter) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_PRODUCTS);
    let mut joiner = " WHERE ";

    if let Some(category) = &filter.category {
        qb.push(joiner).push("category = ").push_bind(category.clone());
        joiner = " AND ";
    }

    if let Some(bound) = filter.price_bound() {
        let (op, limit) = match bound {
            PriceBound::AtMost(limit) => ("price <= ", limit),
            PriceBound::Below(limit) => ("price < ", limit),
        };
        qb.push(joiner).push(op).push_bind(limit);
    }

    qb.push(" ORDER BY rowid");
    qb
}

fn product_from_row(row: &SqliteRow) -> Result<Product, StoreError> {
    let decode = |e: sqlx::Error| StoreError::decode(e.to_string());

    let sku: String = row.try_get("sku").map_err(decode)?;
    let name: String = row.try_get("name").map_err(decode)?;
    let category: String = row.try_get("category").map_err(decode)?;
    let price: i64 = row.try_get("price").map_err(decode)?;

    let sku = Sku::parse(sku).map_err(|e| StoreError::decode(e.to_string()))?;
    Product::new(sku, name, category, price).map_err(|e| StoreError::decode(e.to_string()))
}

async fn remove_database_file(path: &Path) -> Result<(), StoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "removed catalog store for recreation");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::bootstrap(format!(
            "failed to remove {}: {e}",
            path.display()
        ))),
    }
}
