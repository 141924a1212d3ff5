use actix_web::web;

use crate::service::{
    contact::contact_api,
    project::project_api,
    resume::resume_api,
    root::{not_found, root_api},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .configure(project_api)
        .configure(contact_api)
        .configure(resume_api)
        .default_service(web::to(not_found));
}
