use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::paste_repository::PasteRepository;
use crate::domain::paste::{NewPaste, Paste};
use crate::infrastructure::db::DbPool;

const PASTE_COLUMNS: &str = "id, title, content, public, user_agent, ip_addr, owner_id, burn";

pub struct SqlxPasteRepository {
    pub pool: DbPool,
}

impl SqlxPasteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_paste(r: &SqliteRow) -> Paste {
    Paste {
        id: r.get("id"),
        title: r.get("title"),
        content: r.get("content"),
        public: r.get("public"),
        user_agent: r.get::<Option<String>, _>("user_agent"),
        ip_addr: r.get::<Option<String>, _>("ip_addr"),
        owner_id: r.get("owner_id"),
        burn: r.get("burn"),
    }
}

#[async_trait]
impl PasteRepository for SqlxPasteRepository {
    async fn list(
        &self,
        public: Option<bool>,
        limit: Option<i64>,
        filter: Option<&str>,
    ) -> anyhow::Result<Vec<Paste>> {
        let mut sql = format!("SELECT {PASTE_COLUMNS} FROM pastes WHERE 1 = 1");
        if let Some(public) = public {
            sql.push_str(if public { " AND public = 1" } else { " AND public = 0" });
        }
        // The filter is spliced in verbatim; this is the SQL injection exercise.
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            sql.push_str(&format!(
                " AND (title = '{filter}' OR content = '{filter}')"
            ));
        }
        sql.push_str(" ORDER BY id DESC LIMIT ?");
        let rows = sqlx::query(&sql)
            .bind(limit.unwrap_or(-1))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(map_paste).collect())
    }

    async fn find(&self, id: Option<i64>, title: Option<&str>) -> anyhow::Result<Option<Paste>> {
        let row = sqlx::query(&format!(
            "SELECT {PASTE_COLUMNS} FROM pastes
             WHERE (?1 IS NULL OR id = ?1) AND (?2 IS NULL OR title = ?2)
             ORDER BY id LIMIT 1"
        ))
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_paste))
    }

    async fn search(&self, keyword: &str) -> anyhow::Result<Vec<Paste>> {
        let pattern = format!("%{keyword}%");
        let rows = sqlx::query(&format!(
            "SELECT {PASTE_COLUMNS} FROM pastes
             WHERE title LIKE ?1 OR content LIKE ?1 ORDER BY id DESC"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_paste).collect())
    }

    async fn list_by_owner(&self, owner_id: i64) -> anyhow::Result<Vec<Paste>> {
        let rows = sqlx::query(&format!(
            "SELECT {PASTE_COLUMNS} FROM pastes WHERE owner_id = ? ORDER BY id DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_paste).collect())
    }

    async fn create(&self, paste: &NewPaste) -> anyhow::Result<Paste> {
        let row = sqlx::query(&format!(
            "INSERT INTO pastes (title, content, public, user_agent, ip_addr, owner_id, burn)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {PASTE_COLUMNS}"
        ))
        .bind(&paste.title)
        .bind(&paste.content)
        .bind(paste.public)
        .bind(&paste.user_agent)
        .bind(&paste.ip_addr)
        .bind(paste.owner_id)
        .bind(paste.burn)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_paste(&row))
    }

    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> anyhow::Result<Option<Paste>> {
        let row = sqlx::query(&format!(
            "UPDATE pastes SET title = COALESCE(?, title), content = COALESCE(?, content)
             WHERE id = ?
             RETURNING {PASTE_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_paste))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM pastes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
