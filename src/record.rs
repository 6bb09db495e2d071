//! Log record codec: one text line to a typed record and back.

use regex::Regex;
use std::sync::LazyLock;

/// `<datetime> <severity> <misc>: <exception>`. The `misc` group is lazy,
/// so the record splits at the first `": "` separator on the line.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<datetime>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3})\s+(?P<severity>[A-Z]+)\s+(?P<misc>.*?):\s(?P<exception>.*)$",
    )
    .unwrap()
});

/// One parsed log line. All four fields are always present; a line that
/// doesn't match the pattern produces no record at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub datetime: String,
    pub severity: String,
    pub misc: String,
    pub exception: String,
}

impl LogRecord {
    /// Parse a single line. Returns `None` for lines that don't match the
    /// pattern; callers drop those silently.
    pub fn parse(line: &str) -> Option<LogRecord> {
        let caps = LINE_PATTERN.captures(line)?;
        Some(LogRecord {
            datetime: caps["datetime"].to_string(),
            severity: caps["severity"].to_string(),
            misc: caps["misc"].to_string(),
            exception: caps["exception"].to_string(),
        })
    }

    /// Render back to the output line shape: tab-separated datetime and
    /// severity, then `misc: exception`.
    pub fn format(&self) -> String {
        format!(
            "{}\t{}\t{}: {}",
            self.datetime, self.severity, self.misc, self.exception
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let line = "2024-03-01 12:30:45.123 ERROR worker-3 com.app.Db: ConnectionTimeout";
        let rec = LogRecord::parse(line).unwrap();
        assert_eq!(rec.datetime, "2024-03-01 12:30:45.123");
        assert_eq!(rec.severity, "ERROR");
        assert_eq!(rec.misc, "worker-3 com.app.Db");
        assert_eq!(rec.exception, "ConnectionTimeout");
    }

    #[test]
    fn test_parse_splits_at_first_separator() {
        let line = "2024-03-01 12:30:45.123 WARN a: b: c";
        let rec = LogRecord::parse(line).unwrap();
        assert_eq!(rec.misc, "a");
        assert_eq!(rec.exception, "b: c");
    }

    #[test]
    fn test_parse_rejects_non_matching_lines() {
        assert_eq!(LogRecord::parse(""), None);
        assert_eq!(LogRecord::parse("not a log line"), None);
        // Lowercase severity.
        assert_eq!(
            LogRecord::parse("2024-03-01 12:30:45.123 error x: y"),
            None
        );
        // Missing millisecond part.
        assert_eq!(LogRecord::parse("2024-03-01 12:30:45 ERROR x: y"), None);
        // No separator between misc and exception.
        assert_eq!(
            LogRecord::parse("2024-03-01 12:30:45.123 ERROR no separator here"),
            None
        );
    }

    #[test]
    fn test_format_shape() {
        let rec = LogRecord {
            datetime: "2024-03-01 12:30:45.123".into(),
            severity: "INFO".into(),
            misc: "main".into(),
            exception: "started".into(),
        };
        assert_eq!(rec.format(), "2024-03-01 12:30:45.123\tINFO\tmain: started");
    }

    #[test]
    fn test_parse_format_round_trip() {
        // The pattern accepts any whitespace between fields but format emits
        // tabs, so only already-tab-separated lines round-trip literally.
        let lines = [
            "2024-03-01 12:30:45.123\tERROR\tworker-3 com.app.Db: ConnectionTimeout",
            "2019-12-31 23:59:59.999\tINFO\tmain: started",
            "2024-03-01 00:00:00.000\tDEBUG\ta: b: c",
        ];
        for line in lines {
            let rec = LogRecord::parse(line).unwrap();
            assert_eq!(rec.format(), line);
        }
    }

    #[test]
    fn test_format_normalizes_space_separators_to_tabs() {
        let line = "2024-03-01 12:30:45.123 ERROR main: boom";
        let rec = LogRecord::parse(line).unwrap();
        assert_eq!(rec.format(), "2024-03-01 12:30:45.123\tERROR\tmain: boom");
    }
}
