use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("PF_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        pf_log::panic(
            None,
            format!("Config file '{config_path}' must exist (set PF_CONFIG_PATH or run from the directory holding config.yml)"),
        );
    }

    config_path
}
