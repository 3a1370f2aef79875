//! Section banners and the grouped configuration report

use super::logger::Logger;
use crate::config::{flatten_config, render_value};
use serde_yaml::Mapping;

/// Default banner width
pub const BANNER_WIDTH: usize = 79;

/// Log a section banner at the default width
pub fn log_section(logger: &Logger, section_name: &str) {
    log_section_width(logger, section_name, BANNER_WIDTH);
}

/// Log a section banner: a blank record, a rule of `=`, the centered
/// upper-cased title, and a closing rule
pub fn log_section_width(logger: &Logger, section_name: &str, width: usize) {
    let separator = "=".repeat(width);
    let name = section_name.to_uppercase();
    let padding = "=".repeat(width.saturating_sub(name.chars().count() + 2) / 2);
    let mut section_line = format!("{padding} {name} {padding}");
    if section_line.chars().count() < width {
        section_line.push('=');
    }

    logger.info("");
    logger.info(&separator);
    logger.info(&section_line);
    logger.info(&separator);
}

/// Log the configuration, flattened and grouped by top-level key
///
/// Entries are sorted lexicographically by full dotted key and grouped by
/// the segment before the first separator. Each group prints its name
/// upper-cased, one `  key = value` record per entry, and a trailing blank
/// record.
pub fn log_config(config: &Mapping, logger: &Logger) {
    log_section(logger, "Config");
    let flattened = flatten_config(config);

    // Entries arrive sorted; a new group starts whenever the leading path
    // segment changes.
    let mut current_group: Option<&str> = None;
    for (key, value) in &flattened {
        let group = match key.split_once('.') {
            Some((head, _)) => head,
            None => key.as_str(),
        };
        if current_group != Some(group) {
            if current_group.is_some() {
                logger.info("");
            }
            logger.info(&format!("{}:", group.to_uppercase()));
            current_group = Some(group);
        }
        logger.info(&format!("  {key} = {}", render_value(value)));
    }
    if current_group.is_some() {
        logger.info("");
    }
}
