use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO8601_RE: Regex = Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap();
}

/// Output language for the human-readable duration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ko,
    En,
}

/// Decode an ISO-8601 duration of the `PT#H#M#S` shape into seconds.
///
/// Missing components count as zero, and anything that does not carry the
/// pattern at all decodes to zero rather than failing. Aggregated totals
/// depend on that fallback. Oversized components saturate instead of
/// overflowing; the duration string comes from a remote server.
pub fn parse_iso8601(iso: &str) -> u64 {
    let caps = match ISO8601_RE.captures(iso) {
        Some(caps) => caps,
        None => return 0,
    };
    let component = |idx: usize| -> u64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };
    component(1)
        .saturating_mul(3600)
        .saturating_add(component(2).saturating_mul(60))
        .saturating_add(component(3))
}

/// Format seconds as a spoken-style duration, e.g. "1시간 2분 3초" or
/// "1h 2m 3s". Zero-valued components are skipped; a zero total renders as
/// "0초" / "0s".
pub fn format_long(total_seconds: u64, locale: Locale) -> String {
    let (hours_unit, minutes_unit, seconds_unit) = match locale {
        Locale::Ko => ("시간", "분", "초"),
        Locale::En => ("h", "m", "s"),
    };

    if total_seconds == 0 {
        return format!("0{}", seconds_unit);
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}{}", hours, hours_unit));
    }
    if minutes > 0 {
        parts.push(format!("{}{}", minutes, minutes_unit));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}{}", seconds, seconds_unit));
    }
    parts.join(" ")
}

/// Format seconds as a clock reading: `H:MM:SS` once there is at least an
/// hour, `MM:SS` below that. Hours are not zero-padded.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
