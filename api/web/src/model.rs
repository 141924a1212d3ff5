use actix_web::{
    cookie::Cookie,
    http::{header, header::ContentType, StatusCode},
    HttpResponse, HttpResponseBuilder,
};
use askama::Template;
use pf_error::Error;
use validator::ValidationErrors;

use crate::view::{ErrorPage, InternalErrorPage, NotFoundPage};

pub mod contact;
pub mod project;

pub struct Page;

impl Page {
    pub fn render<T: Template>(status_code: &StatusCode, template: &T) -> HttpResponse {
        match template.render() {
            Ok(body) => HttpResponseBuilder::new(*status_code)
                .content_type(ContentType::html())
                .body(body),
            Err(err) => Self::render_failed(&err),
        }
    }

    pub fn ok<T: Template>(template: &T) -> HttpResponse {
        Self::render(&StatusCode::OK, template)
    }

    /// 303 to `location`, re-sending the session cookie when given.
    pub fn redirect(location: &str, cookie: Option<Cookie<'static>>) -> HttpResponse {
        let mut res = HttpResponse::SeeOther();
        res.insert_header((header::LOCATION, location));
        if let Some(cookie) = cookie {
            res.cookie(cookie);
        }
        res.finish()
    }

    pub fn error(err: &Error) -> HttpResponse {
        let status_code = match err {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            pf_log::error(None, format!("[ApiWebServer] {err}"));
        } else {
            pf_log::debug(None, format!("[ApiWebServer] {err}"));
        }

        Self::status(&status_code)
    }

    /// Error page matching `status_code`, without logging.
    pub fn status(status_code: &StatusCode) -> HttpResponse {
        let rendered = if *status_code == StatusCode::NOT_FOUND {
            NotFoundPage::new().render()
        } else if status_code.is_server_error() {
            InternalErrorPage::new().render()
        } else {
            ErrorPage::new(status_code).render()
        };

        match rendered {
            Ok(body) => HttpResponseBuilder::new(*status_code)
                .content_type(ContentType::html())
                .body(body),
            Err(err) => {
                pf_log::error(None, format!("[ApiWebServer] Rendering error page failed: {err}"));
                HttpResponseBuilder::new(*status_code)
                    .content_type(ContentType::plaintext())
                    .body(status_code.to_string())
            }
        }
    }

    fn render_failed(err: &askama::Error) -> HttpResponse {
        Self::error(&Error::internal(format!("Rendering template failed: {err}")))
    }
}

/// Flattens `errors` into their messages, walking `fields` in order so the
/// output is stable.
pub fn validation_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();
    for field in fields {
        if let Some(errs) = field_errors.get(*field) {
            for err in errs.iter() {
                messages.push(match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                });
            }
        }
    }
    messages
}
