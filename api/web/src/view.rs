use actix_web::http::StatusCode;
use askama::Template;

use crate::{
    model::{contact::ContactInput, project::ProjectView},
    session::{ContactSubmission, Flash},
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumePage {
    pub flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsPage {
    pub flashes: Vec<Flash>,
    pub projects: Vec<ProjectView>,
}

#[derive(Template)]
#[template(path = "project_form.html")]
pub struct ProjectFormPage {
    pub flashes: Vec<Flash>,
    pub errors: Vec<String>,
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

impl ProjectFormPage {
    pub fn empty(flashes: Vec<Flash>) -> Self {
        Self {
            flashes,
            errors: Vec::new(),
            title: String::new(),
            description: String::new(),
            image_file_name: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub flashes: Vec<Flash>,
    pub errors: Vec<String>,
    // password fields are never echoed back
    pub form: ContactInput,
}

impl ContactPage {
    pub fn empty(flashes: Vec<Flash>) -> Self {
        Self {
            flashes,
            errors: Vec::new(),
            form: ContactInput::default(),
        }
    }
}

#[derive(Template)]
#[template(path = "thank_you.html")]
pub struct ThankYouPage {
    pub flashes: Vec<Flash>,
    pub submission: ContactSubmission,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage {
    pub flashes: Vec<Flash>,
}

impl NotFoundPage {
    pub fn new() -> Self {
        Self {
            flashes: Vec::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "500.html")]
pub struct InternalErrorPage {
    pub flashes: Vec<Flash>,
}

impl InternalErrorPage {
    pub fn new() -> Self {
        Self {
            flashes: Vec::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub flashes: Vec<Flash>,
    pub code: u16,
    pub reason: String,
}

impl ErrorPage {
    pub fn new(status_code: &StatusCode) -> Self {
        Self {
            flashes: Vec::new(),
            code: status_code.as_u16(),
            reason: status_code
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_owned(),
        }
    }
}
