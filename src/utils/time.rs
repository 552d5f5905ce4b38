// ============================================================================
// TIME - Journey date/time helpers
// ============================================================================
// Times travel as zero-padded 24-hour "HH:MM" strings, so ordering them is
// plain lexicographic comparison. Dates are "YYYY-MM-DD".
// ============================================================================

use chrono::NaiveDate;

/// Backend LocalTime usually arrives as "HH:MM:SS"; show "HH:MM".
pub fn pretty_time(time: &str) -> String {
    if time.is_empty() {
        return "-".to_string();
    }
    time.chars().take(5).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

/// 12-hour rendition of a 24-hour time, for the AM/PM selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock12 {
    pub hour: u32,
    pub minute: u32,
    pub period: Period,
}

/// "HH:MM" -> 12-hour parts. Malformed input falls back to 9:00 AM, the
/// form default.
pub fn time_24_to_12(time: &str) -> Clock12 {
    let fallback = Clock12 {
        hour: 9,
        minute: 0,
        period: Period::Am,
    };
    let Some((h, m)) = time.split_once(':') else {
        return fallback;
    };
    let (Ok(h), Ok(m)) = (h.parse::<u32>(), m.parse::<u32>()) else {
        return fallback;
    };
    let hour = match h {
        0 => 12,
        1..=12 => h,
        _ => h - 12,
    };
    Clock12 {
        hour,
        minute: m.min(59),
        period: if h < 12 { Period::Am } else { Period::Pm },
    }
}

/// 12-hour parts -> zero-padded "HH:MM".
pub fn time_12_to_24(hour: u32, minute: u32, period: Period) -> String {
    let hour = hour.clamp(1, 12);
    let h = match period {
        Period::Am => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        Period::Pm => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
    };
    format!("{:02}:{:02}", h, minute.min(59))
}

/// Zero-padded 24-hour strings order correctly as text.
pub fn departure_before_arrival(departure: &str, arrival: &str) -> bool {
    !departure.is_empty() && !arrival.is_empty() && departure < arrival
}

pub fn is_valid_ymd(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Today per the browser clock, as "YYYY-MM-DD". The comparison against the
/// journey date is lexicographic, same as the date input's min attribute.
pub fn today_ymd() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_time_truncates_seconds() {
        assert_eq!(pretty_time("08:30:00"), "08:30");
        assert_eq!(pretty_time("08:30"), "08:30");
        assert_eq!(pretty_time(""), "-");
    }

    #[test]
    fn arrival_must_follow_departure() {
        assert!(!departure_before_arrival("09:00", "08:00"));
        assert!(departure_before_arrival("08:00", "09:00"));
        assert!(!departure_before_arrival("08:00", "08:00"));
        assert!(!departure_before_arrival("", "09:00"));
    }

    #[test]
    fn twenty_four_to_twelve() {
        assert_eq!(
            time_24_to_12("00:15"),
            Clock12 { hour: 12, minute: 15, period: Period::Am }
        );
        assert_eq!(
            time_24_to_12("09:00"),
            Clock12 { hour: 9, minute: 0, period: Period::Am }
        );
        assert_eq!(
            time_24_to_12("12:05"),
            Clock12 { hour: 12, minute: 5, period: Period::Pm }
        );
        assert_eq!(
            time_24_to_12("23:59"),
            Clock12 { hour: 11, minute: 59, period: Period::Pm }
        );
        // Malformed input keeps the form default.
        assert_eq!(
            time_24_to_12("bogus"),
            Clock12 { hour: 9, minute: 0, period: Period::Am }
        );
    }

    #[test]
    fn twelve_to_twenty_four() {
        assert_eq!(time_12_to_24(12, 0, Period::Am), "00:00");
        assert_eq!(time_12_to_24(9, 5, Period::Am), "09:05");
        assert_eq!(time_12_to_24(12, 30, Period::Pm), "12:30");
        assert_eq!(time_12_to_24(11, 59, Period::Pm), "23:59");
    }

    #[test]
    fn selector_round_trips_every_hour() {
        for h in 0..24 {
            let t = format!("{h:02}:30");
            let parts = time_24_to_12(&t);
            assert_eq!(time_12_to_24(parts.hour, parts.minute, parts.period), t);
        }
    }

    #[test]
    fn date_shape_check() {
        assert!(is_valid_ymd("2025-02-28"));
        assert!(!is_valid_ymd("2025-02-30"));
        assert!(!is_valid_ymd("28-02-2025"));
        assert!(!is_valid_ymd(""));
    }
}
