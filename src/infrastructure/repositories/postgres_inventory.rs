// src/infrastructure/repositories/postgres_inventory.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::inventory::{
    KardexCursor, KardexEntry, KardexFilter, KardexMovement, KardexRepository, NewMovement,
    NewProduct, NewWarehouse, Product, ProductId, ProductRepository, Sku, Warehouse,
    WarehouseId, WarehouseRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    sku: String,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            sku: Sku::new(row.sku)?,
            name: row.name,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, new_product: NewProduct) -> DomainResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (sku, name, is_active, created_at)
             VALUES ($1, $2, TRUE, $3)
             RETURNING id, sku, name, is_active, created_at",
        )
        .bind(new_product.sku.as_str())
        .bind(&new_product.name)
        .bind(new_product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, sku, name, is_active, created_at FROM products WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_sku(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, sku, name, is_active, created_at FROM products WHERE sku = $1",
        )
        .bind(sku.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, sku, name, is_active, created_at FROM products ORDER BY sku",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}

#[derive(Clone)]
pub struct PostgresWarehouseRepository {
    pool: PgPool,
}

impl PostgresWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WarehouseRow {
    id: i64,
    code: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<WarehouseRow> for Warehouse {
    type Error = DomainError;

    fn try_from(row: WarehouseRow) -> Result<Self, Self::Error> {
        Ok(Warehouse {
            id: WarehouseId::new(row.id)?,
            code: row.code,
            name: row.name,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl WarehouseRepository for PostgresWarehouseRepository {
    async fn insert(&self, new_warehouse: NewWarehouse) -> DomainResult<Warehouse> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            "INSERT INTO warehouses (code, name, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, code, name, created_at",
        )
        .bind(&new_warehouse.code)
        .bind(&new_warehouse.name)
        .bind(new_warehouse.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Warehouse::try_from(row)
    }

    async fn find_by_id(&self, id: WarehouseId) -> DomainResult<Option<Warehouse>> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, code, name, created_at FROM warehouses WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Warehouse::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Warehouse>> {
        let rows = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, code, name, created_at FROM warehouses ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Warehouse::try_from).collect()
    }
}

#[derive(Clone)]
pub struct PostgresKardexRepository {
    pool: PgPool,
}

impl PostgresKardexRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const KARDEX_COLUMNS: &str = "m.id, m.product_id, m.warehouse_id, m.kind, m.quantity, \
     m.balance, m.reference, m.created_by, m.created_at, \
     p.sku AS product_sku, p.name AS product_name, w.code AS warehouse_code";

const KARDEX_JOIN: &str = "FROM kardex_movements m \
     JOIN products p ON p.id = m.product_id \
     JOIN warehouses w ON w.id = m.warehouse_id";

#[derive(Debug, FromRow)]
struct KardexRow {
    id: i64,
    product_id: i64,
    warehouse_id: i64,
    kind: String,
    quantity: i64,
    balance: i64,
    reference: Option<String>,
    created_by: Option<i64>,
    created_at: DateTime<Utc>,
    product_sku: String,
    product_name: String,
    warehouse_code: String,
}

impl TryFrom<KardexRow> for KardexEntry {
    type Error = DomainError;

    fn try_from(row: KardexRow) -> Result<Self, Self::Error> {
        Ok(KardexEntry {
            movement: KardexMovement {
                id: row.id,
                product_id: ProductId::new(row.product_id)?,
                warehouse_id: WarehouseId::new(row.warehouse_id)?,
                kind: row.kind.parse()?,
                quantity: row.quantity,
                balance: row.balance,
                reference: row.reference,
                created_by: row.created_by.map(UserId::new).transpose()?,
                created_at: row.created_at,
            },
            product_sku: Sku::new(row.product_sku)?,
            product_name: row.product_name,
            warehouse_code: row.warehouse_code,
        })
    }
}

#[async_trait]
impl KardexRepository for PostgresKardexRepository {
    async fn record(&self, movement: NewMovement) -> DomainResult<KardexEntry> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Movements for a pair serialize on the product row. The
        // latest movement is no lock target: a fresh pair has none,
        // and a transaction blocked on it would still read its own
        // pre-commit snapshot of the balance.
        sqlx::query("SELECT id FROM products WHERE id = $1 FOR UPDATE")
            .bind(i64::from(movement.product_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let current: Option<i64> = sqlx::query_scalar(
            "SELECT balance FROM kardex_movements
             WHERE product_id = $1 AND warehouse_id = $2
             ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .bind(i64::from(movement.product_id))
        .bind(i64::from(movement.warehouse_id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let balance = movement.apply_to(current.unwrap_or(0))?;

        let movement_id: i64 = sqlx::query_scalar(
            "INSERT INTO kardex_movements \
             (product_id, warehouse_id, kind, quantity, balance, reference, created_by, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(i64::from(movement.product_id))
        .bind(i64::from(movement.warehouse_id))
        .bind(movement.kind.as_str())
        .bind(movement.quantity)
        .bind(balance)
        .bind(&movement.reference)
        .bind(movement.created_by.map(i64::from))
        .bind(movement.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, KardexRow>(&format!(
            "SELECT {KARDEX_COLUMNS} {KARDEX_JOIN} WHERE m.id = $1"
        ))
        .bind(movement_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        KardexEntry::try_from(row)
    }

    async fn balance(
        &self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
    ) -> DomainResult<i64> {
        let balance: Option<i64> = sqlx::query_scalar(
            "SELECT balance FROM kardex_movements
             WHERE product_id = $1 AND warehouse_id = $2
             ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .bind(i64::from(product_id))
        .bind(i64::from(warehouse_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(balance.unwrap_or(0))
    }

    async fn list_page(
        &self,
        filter: &KardexFilter,
        limit: u32,
        cursor: Option<KardexCursor>,
    ) -> DomainResult<(Vec<KardexEntry>, Option<KardexCursor>)> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {KARDEX_COLUMNS} {KARDEX_JOIN} WHERE TRUE"
        ));

        if let Some(product_id) = filter.product_id {
            builder.push(" AND m.product_id = ");
            builder.push_bind(i64::from(product_id));
        }
        if let Some(warehouse_id) = filter.warehouse_id {
            builder.push(" AND m.warehouse_id = ");
            builder.push_bind(i64::from(warehouse_id));
        }
        if let Some(kind) = filter.kind {
            builder.push(" AND m.kind = ");
            builder.push_bind(kind.as_str());
        }
        if let Some(from) = filter.from {
            builder.push(" AND m.created_at >= ");
            builder.push_bind(from);
        }
        if let Some(to) = filter.to {
            builder.push(" AND m.created_at <= ");
            builder.push_bind(to);
        }

        if let Some(cursor) = cursor.as_ref() {
            builder.push(" AND (m.created_at, m.id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }

        builder.push(" ORDER BY m.created_at DESC, m.id DESC LIMIT ");
        builder.push_bind(i64::from(limit) + 1);

        let rows = builder
            .build_query_as::<KardexRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut entries = rows
            .into_iter()
            .map(KardexEntry::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let next = if entries.len() > limit as usize {
            entries.truncate(limit as usize);
            entries.last().map(|entry| {
                KardexCursor::new(entry.movement.created_at, entry.movement.id)
            })
        } else {
            None
        };

        Ok((entries, next))
    }
}
