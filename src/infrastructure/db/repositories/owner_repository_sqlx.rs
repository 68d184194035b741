use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::owner_repository::OwnerRepository;
use crate::domain::owner::Owner;
use crate::infrastructure::db::DbPool;

pub struct SqlxOwnerRepository {
    pub pool: DbPool,
}

impl SqlxOwnerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_owner(r: &SqliteRow) -> Owner {
    Owner {
        id: r.get("id"),
        username: r.get("username"),
        password: r.get("password"),
    }
}

#[async_trait]
impl OwnerRepository for SqlxOwnerRepository {
    async fn create_owner(&self, username: &str, password: &str) -> anyhow::Result<Owner> {
        let row = sqlx::query(
            r#"INSERT INTO owners (username, password) VALUES (?, ?)
               RETURNING id, username, password"#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_owner(&row))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Owner>> {
        let row = sqlx::query(r#"SELECT id, username, password FROM owners WHERE username = ?"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_owner))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Owner>> {
        let row = sqlx::query(r#"SELECT id, username, password FROM owners WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_owner))
    }

    async fn list(&self, id: Option<i64>) -> anyhow::Result<Vec<Owner>> {
        let rows = sqlx::query(
            r#"SELECT id, username, password FROM owners
               WHERE (?1 IS NULL OR id = ?1) ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_owner).collect())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM owners")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
