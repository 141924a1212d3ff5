#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::ServiceResponse,
    http::header,
    test, web,
};
use pf_api_web::{
    context::{ApiWebCtx, ApiWebDaoCtx, ApiWebSiteCtx},
    session::SessionStore,
};
use pf_dao::Db;
use pf_db_sqlite::db::SqliteDb;
use tempfile::TempDir;

pub const COOKIE_NAME: &str = "pf_session";
pub const RESUME_FILE_NAME: &str = "Jane_Doe_Resume.pdf";

/// Context backed by a fresh SQLite file. Keep the `TempDir` alive for the
/// whole test.
pub struct TestSite {
    pub dir: TempDir,
    pub ctx: web::Data<ApiWebCtx>,
}

impl TestSite {
    pub fn resume_path(&self) -> String {
        self.dir.path().join(RESUME_FILE_NAME).display().to_string()
    }

    pub fn db(&self) -> &Db {
        self.ctx.dao().db()
    }
}

pub async fn site() -> TestSite {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("projects.db");
    let db = SqliteDb::new(db_path.to_str().expect("utf-8 path"), &1)
        .await
        .expect("sqlite should open");

    let static_dir = dir.path().display().to_string();
    let resume_path = dir.path().join(RESUME_FILE_NAME).display().to_string();

    let ctx = ApiWebCtx::new(
        ApiWebDaoCtx::new(Arc::new(Db::SqliteDb(db))),
        SessionStore::new(COOKIE_NAME, &1800, &1024),
        ApiWebSiteCtx::new(&static_dir, &resume_path, RESUME_FILE_NAME),
    );

    TestSite {
        dir,
        ctx: web::Data::new(ctx),
    }
}

/// Builds the service the same way the server does, minus logging and static
/// files.
macro_rules! app {
    ($site:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_web::middleware::ErrorHandlers::new()
                        .default_handler(pf_api_web::default_error_handler),
                )
                .app_data($site.ctx.clone())
                .configure(pf_api_web::configure),
        )
        .await
    };
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("response has a Location header")
        .to_str()
        .expect("Location is ascii")
        .to_owned()
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == COOKIE_NAME)
        .map(|cookie| cookie.into_owned())
        .expect("response sets the session cookie")
}

pub fn content_type<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}
