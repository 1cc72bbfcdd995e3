use std::path::Path;

use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

pub fn parse_date_time(buf: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(buf.trim())
        .map_err(|e| format!("Unable to parse date time {}: {}", buf, e))
}

/// Returns the date and the full date time, both in the offset of the source timestamp
pub fn format_date_time(date_time: &DateTime<FixedOffset>) -> (String, String) {
    let date = date_time.format("%Y-%m-%d").to_string();
    let full = date_time.format("%Y-%m-%dT%H:%M:%S%:z").to_string();
    (date, full)
}

pub fn slug_from_title(title: &str) -> String {
    lazy_static! {
        static ref SEPARATOR_REGEX: Regex = Regex::new(r"[^a-zA-Z0-9]+").unwrap();
    }

    let ascii = unidecode::unidecode(title);
    let slug = SEPARATOR_REGEX.replace_all(&ascii, "-");
    // A trailing run of separators does not produce a trailing hyphen
    slug.trim_end_matches('-').to_ascii_lowercase()
}

pub fn slug_from_permalink(permalink: &str) -> Option<String> {
    let path = match Url::parse(permalink) {
        Ok(url) => url.path().to_string(),
        // Relative links are taken as a bare path
        Err(_) => permalink.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    Path::new(&path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
