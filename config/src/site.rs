use serde::Deserialize;

#[derive(Deserialize)]
pub struct SiteConfig {
    static_dir: String,
    resume_path: String,
    resume_file_name: String,
}

impl SiteConfig {
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    pub fn resume_path(&self) -> &str {
        &self.resume_path
    }

    pub fn resume_file_name(&self) -> &str {
        &self.resume_file_name
    }
}
