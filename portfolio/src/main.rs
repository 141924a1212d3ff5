use std::sync::Arc;

use pf_api_web::{
    context::{ApiWebCtx, ApiWebDaoCtx, ApiWebSiteCtx},
    session::SessionStore,
    ApiWebServer,
};
use pf_config::app::AppConfigMode;
use pf_dao::Db;
use pf_db_sqlite::db::SqliteDb;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match pf_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => pf_log::panic(None, format!("[Portfolio] {err:#}")),
    };

    pf_log::init(config.log().display_level(), config.log().level_filter());

    pf_log::info(Some("🚀"), "[Portfolio] Starting");

    if *config.app().mode() == AppConfigMode::Development {
        pf_log::warn(None, "[Portfolio] Running in development mode");
    }

    let sqlite = config.db().sqlite();
    let db = match SqliteDb::new(sqlite.path(), sqlite.max_connections()).await {
        Ok(db) => Arc::new(Db::SqliteDb(db)),
        Err(err) => pf_log::panic(
            None,
            format!("[Portfolio] Initializing database failed: {err}"),
        ),
    };

    let api_web_server = ApiWebServer::new(
        config.api().web().host(),
        config.api().web().port(),
        ApiWebCtx::new(
            ApiWebDaoCtx::new(db),
            SessionStore::new(
                config.session().cookie_name(),
                config.session().ttl(),
                config.session().max_sessions(),
            ),
            ApiWebSiteCtx::new(
                config.site().static_dir(),
                config.site().resume_path(),
                config.site().resume_file_name(),
            ),
        ),
    );

    match api_web_server.run().await {
        Ok(_) => pf_log::info(Some("👋"), "[Portfolio] Turned off"),
        Err(err) => pf_log::error(
            Some("👋"),
            format!("[Portfolio] Turned off with error: {err}"),
        ),
    }
}
