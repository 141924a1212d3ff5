use serde::Deserialize;

#[derive(Deserialize)]
pub struct ApiConfig {
    web: ApiWebConfig,
}

impl ApiConfig {
    pub fn web(&self) -> &ApiWebConfig {
        &self.web
    }
}

#[derive(Deserialize)]
pub struct ApiWebConfig {
    host: String,
    port: u16,
}

impl ApiWebConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &u16 {
        &self.port
    }
}
