use youtube_watchtime_rs::{format_clock, format_long, parse_iso8601, Locale};

// Test parsing a full hours/minutes/seconds duration
#[test]
fn test_parse_full_duration() {
    assert_eq!(parse_iso8601("PT1H2M3S"), 3723);
    assert_eq!(parse_iso8601("PT10H0M0S"), 36000);
}

// Test parsing durations with missing components
#[test]
fn test_parse_partial_durations() {
    assert_eq!(parse_iso8601("PT45S"), 45);
    assert_eq!(parse_iso8601("PT3M20S"), 200);
    assert_eq!(parse_iso8601("PT3M"), 180);
    assert_eq!(parse_iso8601("PT2H"), 7200);
    assert_eq!(parse_iso8601("PT2H5S"), 7205);
}

// Test that unparseable input degrades to zero instead of failing
#[test]
fn test_parse_fallback_to_zero() {
    assert_eq!(parse_iso8601(""), 0);
    assert_eq!(parse_iso8601("PT"), 0);
    assert_eq!(parse_iso8601("garbage"), 0);
    assert_eq!(parse_iso8601("P1D"), 0);
    assert_eq!(parse_iso8601("1:02:03"), 0);
}

// Test oversized components saturate instead of overflowing
#[test]
fn test_parse_saturates_on_huge_components() {
    assert_eq!(parse_iso8601("PT9999999999999999H"), u64::MAX);
    assert_eq!(parse_iso8601("PT18446744073709551615S"), u64::MAX);
    // A component too wide for the integer fails its parse and counts as zero
    assert_eq!(parse_iso8601("PT99999999999999999999H"), 0);
}

// Test that the pattern is found anywhere in the string
#[test]
fn test_parse_unanchored() {
    assert_eq!(parse_iso8601("duration=PT1M30S"), 90);
}

// Test the Korean long form
#[test]
fn test_format_long_korean() {
    assert_eq!(format_long(0, Locale::Ko), "0초");
    assert_eq!(format_long(45, Locale::Ko), "45초");
    assert_eq!(format_long(180, Locale::Ko), "3분");
    assert_eq!(format_long(3723, Locale::Ko), "1시간 2분 3초");
    assert_eq!(format_long(3600, Locale::Ko), "1시간");
    assert_eq!(format_long(3605, Locale::Ko), "1시간 5초");
}

// Test the English long form
#[test]
fn test_format_long_english() {
    assert_eq!(format_long(0, Locale::En), "0s");
    assert_eq!(format_long(45, Locale::En), "45s");
    assert_eq!(format_long(180, Locale::En), "3m");
    assert_eq!(format_long(3723, Locale::En), "1h 2m 3s");
    assert_eq!(format_long(3600, Locale::En), "1h");
    assert_eq!(format_long(7322, Locale::En), "2h 2m 2s");
}

// Test clock formatting with and without an hours component
#[test]
fn test_format_clock() {
    assert_eq!(format_clock(3723), "1:02:03");
    assert_eq!(format_clock(65), "01:05");
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(59), "00:59");
    assert_eq!(format_clock(3600), "1:00:00");
    assert_eq!(format_clock(7199), "1:59:59");
}

// Test clock formatting past the one-day mark; hours keep growing unpadded
#[test]
fn test_format_clock_long_totals() {
    assert_eq!(format_clock(90000), "25:00:00");
    assert_eq!(format_clock(360000), "100:00:00");
}

// Test that parsing and clock formatting agree on the reference value
#[test]
fn test_parse_then_format_round_trip() {
    let seconds = parse_iso8601("PT1H2M3S");
    assert_eq!(format_clock(seconds), "1:02:03");
}
