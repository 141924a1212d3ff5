use serde::Deserialize;

#[derive(Deserialize)]
pub struct SessionConfig {
    cookie_name: String,
    // seconds of inactivity
    ttl: u32,
    max_sessions: usize,
}

impl SessionConfig {
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn ttl(&self) -> &u32 {
        &self.ttl
    }

    pub fn max_sessions(&self) -> &usize {
        &self.max_sessions
    }
}
