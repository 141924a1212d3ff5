use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    context::ApiWebCtx,
    model::Page,
    view::{AboutPage, IndexPage, ResumePage},
};

pub fn root_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/about", web::get().to(about))
        .route("/resume", web::get().to(resume));
}

async fn index(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    Page::ok(&IndexPage {
        flashes: ctx.session().take_flashes(&req),
    })
}

async fn about(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    Page::ok(&AboutPage {
        flashes: ctx.session().take_flashes(&req),
    })
}

async fn resume(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    Page::ok(&ResumePage {
        flashes: ctx.session().take_flashes(&req),
    })
}

pub async fn not_found() -> HttpResponse {
    Page::error(&pf_error::Error::NotFound("No route matched".to_owned()))
}
