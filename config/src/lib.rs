use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;

use self::{
    api::ApiConfig, app::AppConfig, db::DbConfig, log::LogConfig, session::SessionConfig,
    site::SiteConfig,
};

pub mod api;
pub mod app;
pub mod db;
pub mod log;
pub mod session;
pub mod site;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    db: DbConfig,
    api: ApiConfig,
    session: SessionConfig,
    site: SiteConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{path}'"))?;
    from_str(&yaml).with_context(|| format!("Failed to parse config file '{path}'"))
}

fn from_str(yaml: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(yaml)?)
}
