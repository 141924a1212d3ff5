use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

/// Installs the global subscriber. `level_filter` is one of `off`, `error`,
/// `warn`, `info`, `debug` or `trace`; anything else is a startup bug.
pub fn init(display_level: &bool, level_filter: &str) {
    let level_filter = match LevelFilter::from_str(level_filter) {
        Ok(level) => level,
        Err(err) => panic!("Invalid log level filter '{level_filter}': {err}"),
    };

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_target(false)
        .with_max_level(level_filter)
        .init();
}

fn line<T: Display>(prefix: Option<&str>, fallback: &str, msg: T) -> String {
    format!("{} {msg}", prefix.unwrap_or(fallback))
}

fn backtrace_enabled() -> bool {
    std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1" || var == "full")
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{}", line(prefix, "🐾", msg));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{}", line(prefix, "🐞", msg));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{}", line(prefix, "📢", msg));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{}", line(prefix, "⚠️", msg));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let line = line(prefix, "🚨", msg);
    if backtrace_enabled() {
        error!("{line}\n{:?}", Backtrace::new());
    } else {
        error!("{line}");
    }
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    panic!("{}", line(prefix, "☠️", msg))
}
