use chrono::{Days, NaiveDate};
use regex::Regex;

/// Collapse all runs of whitespace to single spaces and trim the ends.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve a relative posting phrase ("Today", "Just posted", "5 days ago")
/// against `today`. Anything unrecognized falls back to `today` rather than
/// failing; the source text is free-form site copy, not a parseable format.
pub fn relative_date(text: &str, today: NaiveDate) -> NaiveDate {
    let lowered = text.to_lowercase();
    if lowered.contains("today") || lowered.contains("just posted") {
        return today;
    }

    let days_ago = Regex::new(r"(\d+)\s*day").unwrap();
    if let Some(caps) = days_ago.captures(&lowered) {
        if let Ok(days) = caps[1].parse::<u64>() {
            if let Some(date) = today.checked_sub_days(Days::new(days)) {
                return date;
            }
        }
    }

    today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn clean_text_collapses_and_trims() {
        assert_eq!(clean_text("  Senior\t Rust\n\nEngineer  "), "Senior Rust Engineer");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn clean_text_is_idempotent() {
        let once = clean_text("  a   b \t c ");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn today_and_just_posted_resolve_to_today() {
        let today = day(2024, 6, 10);
        assert_eq!(relative_date("Today", today), today);
        assert_eq!(relative_date("Just posted", today), today);
        assert_eq!(relative_date("Employer Active Today", today), today);
    }

    #[test]
    fn days_ago_subtracts() {
        let today = day(2024, 6, 10);
        assert_eq!(relative_date("5 days ago", today), day(2024, 6, 5));
        assert_eq!(relative_date("Posted 1 day ago", today), day(2024, 6, 9));
        assert_eq!(relative_date("Posted 11 days ago", today), day(2024, 5, 30));
    }

    #[test]
    fn unrecognized_falls_back_to_today() {
        let today = day(2024, 6, 10);
        assert_eq!(relative_date("", today), today);
        assert_eq!(relative_date("last week", today), today);
        // the "30+" variant has no digit run adjacent to "day", so it is
        // treated as unparseable rather than as an offset
        assert_eq!(relative_date("30+ days ago", today), today);
    }
}
