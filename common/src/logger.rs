use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        println!("{}", self.format_line(&timestamp, file, line, message));
    }
}

/// Installs the process-wide logger. Later calls keep the first prefix.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Messages logged before [`init_logger`] are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_prefix() {
        let logger = Logger::new(Some("Snake".to_string()));
        let line = logger.format_line("2024-01-01 00:00:00.000", "src/games/snake/session.rs", 42, "hello");
        assert_eq!(line, "[2024-01-01 00:00:00.000][Snake][session.rs:42] hello");
    }

    #[test]
    fn test_line_without_prefix_strips_windows_paths() {
        let logger = Logger::new(None);
        let line = logger.format_line("ts", "src\\games\\snake\\session.rs", 7, "tick");
        assert_eq!(line, "[ts][session.rs:7] tick");
    }

    #[test]
    fn test_macro_formats_arguments() {
        init_logger(None);
        assert!(is_initialized());
        crate::log!("score {} level {}", 3, 1);
    }
}
