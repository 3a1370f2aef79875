use super::logger::{Level, Logger};
use super::report::{log_config, log_section, log_section_width};
use chrono::Local;
use serde_yaml::Mapping;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// In-memory sink shared between the logger and the assertions
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Logger with a deterministic, timestamp-free format
fn capture_logger(level: Level, format: &str) -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = Logger::new(level, format, "%Y", vec![Box::new(buf.clone())]);
    (logger, buf)
}

// ============================================================
// Level
// ============================================================

#[test]
fn test_level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Critical);
}

#[test]
fn test_level_parse_case_insensitive() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("CRITICAL".parse::<Level>().unwrap(), Level::Critical);
}

#[test]
fn test_level_parse_unknown() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert!(err.contains("Unknown log level"));
    assert!(err.contains("verbose"));
}

#[test]
fn test_level_display_upper_case() {
    assert_eq!(Level::Info.to_string(), "INFO");
    assert_eq!(Level::Critical.to_string(), "CRITICAL");
}

// ============================================================
// Logger
// ============================================================

#[test]
fn test_threshold_filters_records() {
    let (logger, buf) = capture_logger(Level::Warning, "{level} - {message}");

    logger.debug("dropped");
    logger.info("dropped");
    logger.warning("kept");
    logger.error("kept");
    logger.critical("kept");

    let lines = buf.lines();
    assert_eq!(
        lines,
        ["WARNING - kept", "ERROR - kept", "CRITICAL - kept"]
    );
}

#[test]
fn test_debug_threshold_passes_everything() {
    let (logger, buf) = capture_logger(Level::Debug, "{level}");

    logger.debug("");
    logger.info("");
    logger.warning("");
    logger.error("");
    logger.critical("");

    assert_eq!(buf.lines().len(), 5);
}

#[test]
fn test_format_template_substitution() {
    let (logger, buf) = capture_logger(Level::Info, "[{level}] {message} [{level}]");

    logger.info("hello");

    assert_eq!(buf.lines(), ["[INFO] hello [INFO]"]);
}

#[test]
fn test_timestamp_uses_datefmt() {
    let buf = SharedBuf::default();
    let logger = Logger::new(Level::Info, "{timestamp}", "%Y", vec![Box::new(buf.clone())]);

    logger.info("ignored");

    let year = Local::now().format("%Y").to_string();
    assert_eq!(buf.lines(), [year]);
}

#[test]
fn test_invalid_datefmt_falls_back() {
    let buf = SharedBuf::default();
    // %Q is not a strftime specifier chrono recognizes
    let logger = Logger::new(Level::Info, "{timestamp}", "%Q", vec![Box::new(buf.clone())]);

    logger.info("ignored");

    let line = buf.contents();
    let year = Local::now().format("%Y").to_string();
    assert!(line.starts_with(&year), "unexpected timestamp: {line}");
}

#[test]
fn test_all_sinks_receive_each_record() {
    let first = SharedBuf::default();
    let second = SharedBuf::default();
    let logger = Logger::new(
        Level::Info,
        "{level} - {message}",
        "%Y",
        vec![Box::new(first.clone()), Box::new(second.clone())],
    );

    logger.info("duplicated");

    assert_eq!(first.contents(), second.contents());
    assert_eq!(first.lines(), ["INFO - duplicated"]);
}

#[test]
fn test_blank_message_keeps_prefix() {
    let (logger, buf) = capture_logger(Level::Info, "{level} - {message}");

    logger.info("");

    assert_eq!(buf.lines(), ["INFO - "]);
}

// ============================================================
// Section banner
// ============================================================

#[test]
fn test_banner_shape() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");

    log_section(&logger, "Config");

    let lines = buf.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "=".repeat(79));
    assert_eq!(lines[3], "=".repeat(79));
    assert!(lines[2].contains(" CONFIG "));
    assert_eq!(lines[2].chars().count(), 79);
}

#[test]
fn test_banner_even_fit_skips_filler() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");

    // 5-char name: 36 + 1 + 5 + 1 + 36 = 79, no trailing filler needed
    log_section(&logger, "Setup");

    let lines = buf.lines();
    assert_eq!(lines[2].chars().count(), 79);
    assert!(lines[2].starts_with("===="));
    assert!(lines[2].ends_with("===="));
}

#[test]
fn test_banner_custom_width() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");

    log_section_width(&logger, "abc", 20);

    let lines = buf.lines();
    assert_eq!(lines[1], "=".repeat(20));
    assert_eq!(lines[2], "======= ABC ========");
    assert_eq!(lines[2].chars().count(), 20);
}

#[test]
fn test_banner_name_wider_than_width() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");

    log_section_width(&logger, "a very long section name", 10);

    let lines = buf.lines();
    assert_eq!(lines[1], "=".repeat(10));
    assert!(lines[2].contains("A VERY LONG SECTION NAME"));
}

// ============================================================
// Config report
// ============================================================

fn parse(yaml: &str) -> Mapping {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_report_groups_sorted_regardless_of_input_order() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");
    let config = parse("b:\n  x: 1\na:\n  y: 2\n");

    log_config(&config, &logger);

    let lines = buf.lines();
    // 4 banner records, then the grouped entries
    assert_eq!(
        &lines[4..],
        ["A:", "  a.y = 2", "", "B:", "  b.x = 1", ""]
    );
}

#[test]
fn test_report_entries_sorted_within_group() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");
    let config = parse("model:\n  width: 2\n  depth: 1\n");

    log_config(&config, &logger);

    let lines = buf.lines();
    assert_eq!(
        &lines[4..],
        ["MODEL:", "  model.depth = 1", "  model.width = 2", ""]
    );
}

#[test]
fn test_report_top_level_scalar_forms_own_group() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");
    let config = parse("seed: 42\n");

    log_config(&config, &logger);

    let lines = buf.lines();
    assert_eq!(&lines[4..], ["SEED:", "  seed = 42", ""]);
}

#[test]
fn test_report_empty_config_is_banner_only() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");

    log_config(&Mapping::new(), &logger);

    assert_eq!(buf.lines().len(), 4);
}

#[test]
fn test_report_banner_title() {
    let (logger, buf) = capture_logger(Level::Info, "{message}");

    log_config(&Mapping::new(), &logger);

    assert!(buf.lines()[2].contains(" CONFIG "));
}
