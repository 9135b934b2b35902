use chrono::{DateTime, NaiveDateTime};

// `%#z` also takes `Z`, `+01` and `+01:00`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Renders an ISO-8601 timestamp as `HH:MM:SS` in its own offset. Input that
/// does not parse is returned unchanged.
pub fn format_datetime(value: &str) -> String {
    if let Ok(d) = DateTime::parse_from_rfc3339(value) {
        return d.format("%H:%M:%S").to_string();
    }

    let normalized = value.replace('Z', "+00:00");

    for format in OFFSET_FORMATS {
        if let Ok(d) = DateTime::parse_from_str(&normalized, format) {
            return d.format("%H:%M:%S").to_string();
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(d) = NaiveDateTime::parse_from_str(value, format) {
            return d.format("%H:%M:%S").to_string();
        }
    }

    value.to_string()
}
