use actix_web::{
    body::MessageBody, dev::ServiceResponse, http::header, middleware::ErrorHandlerResponse,
    Result,
};

use crate::model::Page;

/// Gives framework-generated errors (unmatched method, malformed form or path)
/// the same HTML error pages as the handlers. Responses that already carry
/// HTML pass through untouched.
pub fn default_error_handler<B: MessageBody>(
    svc_res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    if let Some(content_type) = svc_res.response().headers().get(header::CONTENT_TYPE) {
        if let Ok(content_type) = content_type.to_str() {
            if content_type.to_lowercase().starts_with("text/html") {
                return Ok(ErrorHandlerResponse::Response(svc_res.map_into_left_body()));
            }
        }
    }

    let (req, res) = svc_res.into_parts();
    let status_code = res.status();

    if let Some(err) = res.error() {
        pf_log::debug(
            None,
            format!("[ApiWebServer] {} {}: {err}", req.method(), req.path()),
        );
    }

    let res = Page::status(&status_code);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
