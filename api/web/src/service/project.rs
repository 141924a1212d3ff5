use actix_web::{web, HttpRequest, HttpResponse};
use pf_dao::project::ProjectDao;
use pf_error::Error;

use crate::{
    context::ApiWebCtx,
    model::{
        project::{DeleteOneProjectReqPath, InsertOneProjectReqForm, ProjectView},
        Page,
    },
    session::Flash,
    view::{ProjectFormPage, ProjectsPage},
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects", web::get().to(find_many))
        .route("/projects/add", web::get().to(insert_form))
        .route("/projects/add", web::post().to(insert_one))
        .route(
            "/projects/delete/{project_id}",
            web::post().to(delete_one),
        );
}

async fn find_many(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    let projects_data = match ProjectDao::db_select_all(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Page::error(&Error::internal(err)),
    };

    Page::ok(&ProjectsPage {
        flashes: ctx.session().take_flashes(&req),
        projects: projects_data.iter().map(ProjectView::from).collect(),
    })
}

async fn insert_form(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    Page::ok(&ProjectFormPage::empty(ctx.session().take_flashes(&req)))
}

async fn insert_one(
    ctx: web::Data<ApiWebCtx>,
    req: HttpRequest,
    data: web::Form<InsertOneProjectReqForm>,
) -> HttpResponse {
    let data = data.into_inner().trimmed();

    let errors = data.errors();
    if !errors.is_empty() {
        return Page::ok(&ProjectFormPage {
            flashes: ctx.session().take_flashes(&req),
            errors,
            title: data.title().to_owned(),
            description: data.description().to_owned(),
            image_file_name: data.image_file_name().to_owned(),
        });
    }

    let mut project_data =
        ProjectDao::new(data.title(), data.description(), data.image_file_name());
    let project_id = match project_data.db_insert(ctx.dao().db()).await {
        Ok(id) => id,
        Err(err) => return Page::error(&Error::internal(err)),
    };

    pf_log::info(
        Some("📁"),
        format!("[ApiWebServer] Added project {project_id}"),
    );

    let session_id = ctx.session().resolve(&req);
    ctx.session().update(&session_id, |session| {
        session.push_flash(Flash::success("Project added successfully"))
    });

    Page::redirect("/projects", Some(ctx.session().cookie(&session_id)))
}

async fn delete_one(
    ctx: web::Data<ApiWebCtx>,
    req: HttpRequest,
    path: web::Path<DeleteOneProjectReqPath>,
) -> HttpResponse {
    let project_id = match path.project_id() {
        Some(id) => id,
        None => return Page::error(&Error::NotFound("No such project".to_owned())),
    };

    let deleted_count = match ProjectDao::db_delete(ctx.dao().db(), &project_id).await {
        Ok(count) => count,
        Err(err) => return Page::error(&Error::internal(err)),
    };

    let flash = if deleted_count > 0 {
        pf_log::info(
            Some("🗑️"),
            format!("[ApiWebServer] Deleted project {project_id}"),
        );
        Flash::success("Project deleted")
    } else {
        Flash::error("Project not found")
    };

    let session_id = ctx.session().resolve(&req);
    ctx.session()
        .update(&session_id, |session| session.push_flash(flash));

    Page::redirect("/projects", Some(ctx.session().cookie(&session_id)))
}
