use pf_dao::project::ProjectDao;
use serde::Deserialize;
use validator::Validate;

use super::validation_messages;

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct InsertOneProjectReqForm {
    #[validate(length(min = 1, message = "Title is required"))]
    title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    description: String,
    #[validate(length(
        min = 1,
        message = "Image file name is required (place image in static/images)"
    ))]
    image_file_name: String,
}

impl InsertOneProjectReqForm {
    const FIELDS: [&'static str; 3] = ["title", "description", "image_file_name"];

    pub fn new(title: &str, description: &str, image_file_name: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            image_file_name: image_file_name.to_owned(),
        }
    }

    pub fn trimmed(self) -> Self {
        Self::new(
            self.title.trim(),
            self.description.trim(),
            self.image_file_name.trim(),
        )
    }

    /// Messages for every failed rule, in form order. Empty when valid.
    pub fn errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(err) => validation_messages(&err, &Self::FIELDS),
        }
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
}

/// Ids are non-negative; anything else fails extraction and yields a 404.
#[derive(Deserialize)]
pub struct DeleteOneProjectReqPath {
    project_id: u64,
}

impl DeleteOneProjectReqPath {
    /// `None` when the id is past what the store can hold.
    pub fn project_id(&self) -> Option<i64> {
        i64::try_from(self.project_id).ok()
    }
}

pub struct ProjectView {
    id: i64,
    title: String,
    description: String,
    image_file_name: String,
    created_at: String,
}

impl ProjectView {
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

    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl From<&ProjectDao> for ProjectView {
    fn from(project: &ProjectDao) -> Self {
        Self {
            id: *project.id(),
            title: project.title().to_owned(),
            description: project.description().to_owned(),
            image_file_name: project.image_file_name().to_owned(),
            created_at: project.created_at().format("%B %-d, %Y").to_string(),
        }
    }
}
