use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::TeapotRepository;
use crate::domain::teapot::{Capacity, Teapot};

/// Row shape of the `teapots` table
#[derive(sqlx::FromRow)]
struct TeapotRow {
    id: String,
    name: String,
    brand: String,
    capacity: f64,
}

impl TryFrom<TeapotRow> for Teapot {
    type Error = String;

    fn try_from(row: TeapotRow) -> Result<Self, Self::Error> {
        let capacity = Capacity::try_from(row.capacity)
            .map_err(|e| format!("Corrupt teapot row {}: {}", row.id, e))?;
        Ok(Teapot::new(row.id, row.name, row.brand, capacity))
    }
}

/// PostgreSQL implementation of TeapotRepository
///
/// Queries are checked at runtime so the crate builds without a live
/// database; [`PostgresTeapotRepository::migrate`] creates the table.
pub struct PostgresTeapotRepository {
    pool: PgPool,
}

impl PostgresTeapotRepository {
    /// Creates a new PostgresTeapotRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `teapots` table if it does not exist yet
    pub async fn migrate(&self) -> Result<(), String> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS teapots (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                brand TEXT NOT NULL,
                capacity DOUBLE PRECISION NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create teapots table: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl TeapotRepository for PostgresTeapotRepository {
    async fn get(&self, id: &str) -> Result<Option<Teapot>, String> {
        let row = sqlx::query_as::<_, TeapotRow>(
            r#"
            SELECT id, name, brand, capacity
            FROM teapots
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find teapot by id: {}", e))?;

        row.map(Teapot::try_from).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Teapot>, String> {
        let rows = sqlx::query_as::<_, TeapotRow>(
            r#"
            SELECT id, name, brand, capacity
            FROM teapots
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list teapots: {}", e))?;

        rows.into_iter().map(Teapot::try_from).collect()
    }

    async fn put(&self, teapot: &Teapot) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teapots (id, name, brand, capacity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                brand = EXCLUDED.brand,
                capacity = EXCLUDED.capacity
            "#,
        )
        .bind(teapot.id.as_str())
        .bind(teapot.name.as_str())
        .bind(teapot.brand.as_str())
        .bind(teapot.capacity.liters())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save teapot: {}", e))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM teapots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete teapot: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<(), String> {
        sqlx::query("DELETE FROM teapots")
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to clear teapots: {}", e))?;

        Ok(())
    }

    async fn exists(&self, id: &str) -> Result<bool, String> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teapots WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| format!("Failed to check teapot existence: {}", e))?;

        Ok(exists)
    }

    async fn count(&self) -> Result<u64, String> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teapots")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| format!("Failed to count teapots: {}", e))?;

        Ok(count as u64)
    }
}
