use actix_files::Files;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use context::ApiWebCtx;
use logger::logger_format;

pub use configure::configure;
pub use error_handler::default_error_handler;

mod configure;
pub mod context;
mod error_handler;
mod logger;
pub mod model;
mod service;
pub mod session;
pub mod view;

pub struct ApiWebServer {
    address: String,
    context: web::Data<ApiWebCtx>,
}

impl ApiWebServer {
    pub fn new(host: &str, port: &u16, ctx: ApiWebCtx) -> Self {
        pf_log::info(Some("⚡"), "[ApiWebServer] Initializing component");

        let address = format!("{host}:{port}");
        let context = web::Data::new(ctx);

        Self { address, context }
    }

    pub async fn run(self) -> Result<()> {
        pf_log::info(
            Some("💫"),
            format!("[ApiWebServer] Running component on {}", self.address),
        );

        let static_dir = self.context.site().static_dir().to_owned();

        Ok(HttpServer::new(move || {
            App::new()
                .wrap(Logger::new(logger_format()))
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data(self.context.clone())
                .service(Files::new("/static", static_dir.clone()))
                .configure(configure)
        })
        .bind(self.address)?
        .run()
        .await?)
    }
}
