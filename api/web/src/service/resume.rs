use actix_files::NamedFile;
use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpRequest, HttpResponse,
};
use pf_error::Error;

use crate::{context::ApiWebCtx, model::Page};

pub fn resume_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/download-resume", web::get().to(download));
}

async fn download(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    let file = match NamedFile::open_async(ctx.site().resume_path()).await {
        Ok(file) => file,
        Err(err) => {
            pf_log::warn(
                None,
                format!(
                    "[ApiWebServer] Resume file '{}' is unavailable: {err}",
                    ctx.site().resume_path()
                ),
            );
            return Page::error(&Error::NotFound("Resume is not available".to_owned()));
        }
    };

    file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(
            ctx.site().resume_file_name().to_owned(),
        )],
    })
    .into_response(&req)
}
