//! Parsing for the display dates used across contributor and assessment
//! records: `"MMM D, YYYY"` (e.g. "Nov 12, 2022") or `"MMM YYYY"`
//! (e.g. "Nov 2022"). Anything else is parsed best-effort; the function
//! never fails.

use chrono::NaiveDate;

const FALLBACK_YEAR: i32 = 2020;

fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(FALLBACK_YEAR, 1, 1).expect("fallback date is valid")
}

/// Month abbreviation to 0-based index. Unrecognized tokens map to January,
/// matching how unknown months have always been displayed.
fn month_index(token: &str) -> u32 {
    match token {
        "Jan" => 0,
        "Feb" => 1,
        "Mar" => 2,
        "Apr" => 3,
        "May" => 4,
        "Jun" => 5,
        "Jul" => 6,
        "Aug" => 7,
        "Sep" => 8,
        "Oct" => 9,
        "Nov" => 10,
        "Dec" => 11,
        _ => 0,
    }
}

/// Parse a display date into a comparable `NaiveDate`.
///
/// Three whitespace-separated tokens are read as month, day (trailing comma
/// stripped), year; two tokens as month and year with the day defaulted to 1.
/// Unparseable days default to 1, unparseable years to 2020. Any other shape
/// goes through a short list of concrete formats before degrading to the
/// fixed fallback date.
pub fn parse_display_date(input: &str) -> NaiveDate {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let (month, day, year) = match parts.as_slice() {
        [month, year] => (
            month_index(month),
            1,
            year.parse::<i32>().unwrap_or(FALLBACK_YEAR),
        ),
        [month, day, year] => (
            month_index(month),
            day.trim_end_matches(',').parse::<u32>().unwrap_or(1),
            year.parse::<i32>().unwrap_or(FALLBACK_YEAR),
        ),
        _ => return parse_freeform(input),
    };

    NaiveDate::from_ymd_opt(year, month + 1, day)
        // Out-of-range day for the month, e.g. "Feb 30, 2024".
        .or_else(|| NaiveDate::from_ymd_opt(year, month + 1, 1))
        .unwrap_or_else(fallback_date)
}

fn parse_freeform(input: &str) -> NaiveDate {
    const FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .unwrap_or_else(fallback_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_display_date() {
        let date = parse_display_date("Nov 12, 2022");
        assert_eq!((date.format("%Y-%m-%d")).to_string(), "2022-11-12");
    }

    #[test]
    fn parses_month_year_date() {
        let date = parse_display_date("Nov 2022");
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 11, 1).unwrap());
    }

    #[test]
    fn both_forms_land_in_the_same_month() {
        let a = parse_display_date("Nov 12, 2022");
        let b = parse_display_date("Nov 2022");
        assert_eq!(a.format("%Y-%m").to_string(), "2022-11");
        assert_eq!(b.format("%Y-%m").to_string(), "2022-11");
    }

    #[test]
    fn unknown_month_defaults_to_january() {
        let date = parse_display_date("Movember 2024");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn unparseable_day_and_year_degrade() {
        let date = parse_display_date("Mar x, notayear");
        assert_eq!(date, NaiveDate::from_ymd_opt(FALLBACK_YEAR, 3, 1).unwrap());
    }

    #[test]
    fn out_of_range_day_degrades_to_first() {
        let date = parse_display_date("Feb 30, 2024");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn garbage_never_panics() {
        assert_eq!(parse_display_date("garbage"), fallback_date());
        assert_eq!(parse_display_date(""), fallback_date());
        assert_eq!(parse_display_date("a b c d e"), fallback_date());
    }

    #[test]
    fn freeform_iso_dates_still_parse() {
        assert_eq!(
            parse_display_date("2023-05-09"),
            NaiveDate::from_ymd_opt(2023, 5, 9).unwrap()
        );
    }

    #[test]
    fn ordering_is_usable_for_sorting() {
        assert!(parse_display_date("Dec 2025") > parse_display_date("Jan 2024"));
        assert!(parse_display_date("Nov 12, 2025") > parse_display_date("Nov 4, 2025"));
    }
}
