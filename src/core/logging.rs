//! Opt-in logging bootstrap for embedding hosts.
//!
//! The library itself only emits through the `log` facade. Hosts that do not
//! bring their own backend can call `init_logging` once at startup to get the
//! toolkit's flexi_logger setup; everyone else skips this module entirely.

// Global static logger handle for flexi_logger
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

/// Initialise flexi_logger with the requested level, format and optional file output.
///
/// `log_format` selects between "text" (default), "json", and their colored
/// variant when `color_enabled` is set. JSON output is never colored.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::{FileSpec, Logger};

    let level_str = log_level.unwrap_or("info");
    let format_type = log_format.map_or("text", |f| f);

    let mut logger = Logger::try_with_str(level_str)?;

    match format_type {
        "json" => {
            logger = logger.format(json_format);
        }
        _ => {
            if color_enabled {
                logger = logger.format(simple_color_format);
            } else {
                logger = logger.format(simple_format);
            }
        }
    }

    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

/// Reconfigure the log level at runtime.
///
/// Only the level can change after initialisation; format, color, and file
/// output are fixed by flexi_logger once the logger has started.
pub fn reconfigure_logging(log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(handle_mutex) = LOGGER_HANDLE.get() {
        if let Ok(mut handle) = handle_mutex.lock() {
            if let Some(level) = log_level {
                let _ = handle.parse_and_push_temp_spec(level);
            }
            Ok(())
        } else {
            Err("Could not acquire logger handle lock".into())
        }
    } else {
        Err("Logger handle not initialised. Call init_logging first.".into())
    }
}

// Plain text format: "YYYY-MM-DD HH:mm:ss.fff INF message (probe/version.rs:42)"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level_abbr = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };

    let target_formatted = format_target_as_path(record.target(), record.line());

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr,
        record.args(),
        target_formatted
    )
}

// Colored variant of the text format
fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    let level_colored = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    let target_formatted = format_target_as_path(record.target(), record.line());

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored,
        record.args(),
        target_formatted.dimmed()
    )
}

// Compact JSON lines: timestamp, level, message, target
fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let level_abbr = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };

    let target_formatted = format_target_as_path(record.target(), record.line());

    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr,
        "message": record.args().to_string(),
        "target": target_formatted
    });

    match to_string(&json_obj) {
        Ok(json_string) => {
            w.write_all(json_string.as_bytes())?;
            Ok(())
        }
        Err(_) => {
            w.write_all(b"{\"error\":\"Failed to serialize log message\"}")?;
            Ok(())
        }
    }
}

// Convert servercaps::probe::version -> probe/version.rs, with line number when known
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("servercaps::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_format_structure() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Info)
            .target("servercaps::probe::version")
            .args(format_args!("Encoded server version"))
            .build();

        let result = simple_format(&mut buffer, &mut now, &record);
        assert!(result.is_ok(), "Format function should succeed");

        let output = String::from_utf8(buffer).expect("Output should be valid UTF-8");
        assert!(output.contains("INF Encoded server version"));
        assert!(
            output.contains("(probe/version.rs"),
            "Target should be formatted as a path, got: {}",
            output
        );
    }

    #[test]
    fn test_json_format_is_valid_json() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Warn)
            .target("servercaps::probe::capabilities")
            .args(format_args!("Falling back to version 0"))
            .build();

        json_format(&mut buffer, &mut now, &record).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).expect("JSON format should emit valid JSON");
        assert_eq!(parsed["level"], "WRN");
        assert_eq!(parsed["message"], "Falling back to version 0");
        assert_eq!(parsed["target"], "probe/capabilities.rs");
    }

    #[test]
    fn test_format_target_for_external_crate() {
        // Targets outside this crate keep their module path, no .rs suffix
        assert_eq!(
            format_target_as_path("flexi_logger::writers", None),
            "flexi_logger/writers"
        );
        assert_eq!(
            format_target_as_path("servercaps::core::logging", Some(7)),
            "core/logging.rs:7"
        );
    }
}
