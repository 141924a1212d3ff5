use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::project::ProjectModel};

// AUTOINCREMENT keeps deleted ids from being handed out again. `created_at`
// is stamped by SQLite while the write lock is held, so it follows write order.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" integer PRIMARY KEY AUTOINCREMENT, \"title\" text NOT NULL, \"description\" text NOT NULL, \"image_file_name\" text NOT NULL, \"created_at\" datetime NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')))";
const INSERT: &str = "INSERT INTO \"projects\" (\"title\", \"description\", \"image_file_name\") VALUES (?, ?, ?) RETURNING \"id\", \"title\", \"description\", \"image_file_name\", \"created_at\"";
const SELECT_ALL: &str = "SELECT \"id\", \"title\", \"description\", \"image_file_name\", \"created_at\" FROM \"projects\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    pf_log::info(Some("🔧"), "[SQLite] Setting up projects table");

    pool.execute(CREATE_TABLE).await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT_ALL).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    /// Inserts `value` and returns the stored row. The id and `created_at` of
    /// `value` are ignored; both are assigned by the database.
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<ProjectModel> {
        Ok(self
            .fetch_one(
                sqlx::query_as(INSERT)
                    .bind(value.title())
                    .bind(value.description())
                    .bind(value.image_file_name()),
            )
            .await?)
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_ALL)).await?)
    }

    /// Returns the number of deleted rows, 0 or 1.
    pub async fn delete_project(&self, id: &i64) -> Result<u64> {
        let result = self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(result.rows_affected())
    }
}
