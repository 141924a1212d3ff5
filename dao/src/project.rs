use anyhow::Result;
use chrono::{DateTime, Utc};
use pf_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;

use crate::Db;

/// A portfolio entry. Text fields are stored trimmed; emptiness is the
/// caller's concern.
pub struct ProjectDao {
    id: i64,
    title: String,
    description: String,
    image_file_name: String,
    created_at: DateTime<Utc>,
}

impl ProjectDao {
    /// Builds an unsaved project. Its id stays 0 and its `created_at` is
    /// provisional until [`Self::db_insert`] stores it.
    pub fn new(title: &str, description: &str, image_file_name: &str) -> Self {
        Self {
            id: 0,
            title: title.trim().to_owned(),
            description: description.trim().to_owned(),
            image_file_name: image_file_name.trim().to_owned(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file_name(&self) -> &str {
        &self.image_file_name
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    /// Stores the project and takes over the id and creation time the
    /// database assigned.
    pub async fn db_insert(&mut self, db: &Db) -> Result<i64> {
        let stored = match db {
            Db::SqliteDb(db) => {
                Self::from_sqlitedb_model(&db.insert_project(&self.to_sqlitedb_model()).await?)
            }
        };
        self.id = stored.id;
        self.created_at = stored.created_at;
        Ok(stored.id)
    }

    /// Most recent first; equal timestamps fall back to the higher id first.
    pub async fn db_select_all(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project));
                }
                Ok(projects_data)
            }
        }
    }

    /// Returns how many projects were removed: 1 if `id` existed, otherwise 0.
    pub async fn db_delete(db: &Db, id: &i64) -> Result<u64> {
        match db {
            Db::SqliteDb(db) => db.delete_project(id).await,
        }
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Self {
        Self {
            id: *model.id(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            image_file_name: model.image_file_name().to_owned(),
            created_at: *model.created_at(),
        }
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id,
            &self.title,
            &self.description,
            &self.image_file_name,
            &self.created_at,
        )
    }
}
