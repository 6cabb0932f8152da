//! Presentation helpers shared by the dashboard views.
//!
//! Dates come from the backend as `YYYY-MM-DD`, RFC 3339 timestamps or
//! `YYYY-MM-DD HH:MM:SS`. They are rendered with Spanish abbreviations.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const WEEKDAYS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];
const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Parse the date part of a backend date or timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|stamp| stamp.date())
}

fn month(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// `"vie, 15 mar"`. Missing dates give `"N/A"`; unparseable ones are shown as-is.
pub fn short_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return "N/A".to_string();
    };
    match parse_date(raw) {
        Some(date) => format!(
            "{}, {:02} {}",
            WEEKDAYS[date.weekday().num_days_from_monday() as usize],
            date.day(),
            month(date)
        ),
        None => raw.to_string(),
    }
}

/// `"15 mar 2024"`, or `"Sin fecha"`.
pub fn long_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| format!("{:02} {} {}", date.day(), month(date), date.year()))
        .unwrap_or_else(|| "Sin fecha".to_string())
}

/// First letters of the first two words, upper-cased. `"??"` for an empty name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "??".to_string()
    } else {
        letters
    }
}

/// `https://wa.me/<prefix><digits>`, or `None` when the phone has no digits.
pub fn whatsapp_link(prefix: &str, phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then(|| format!("https://wa.me/{prefix}{digits}"))
}

/// Cycle through a fixed palette by card index.
pub fn cycle<'a>(palette: &[&'a str], index: usize) -> &'a str {
    palette.get(index % palette.len().max(1)).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15"), expected);
        assert_eq!(parse_date("2024-03-15T13:45:00.000Z"), expected);
        assert_eq!(parse_date("2024-03-15T13:45:00-05:00"), expected);
        assert_eq!(parse_date("2024-03-15 08:00:00"), expected);
        assert_eq!(parse_date("2024-03-15T08:00:00"), expected);
        assert_eq!(parse_date("15/03/2024"), None);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(Some("2024-03-15")), "vie, 15 mar");
        assert_eq!(short_date(Some("2024-09-01")), "dom, 01 sept");
        assert_eq!(short_date(None), "N/A");
        assert_eq!(short_date(Some("  ")), "N/A");
        assert_eq!(short_date(Some("ayer")), "ayer");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(Some("2024-03-15")), "15 mar 2024");
        assert_eq!(long_date(Some("2023-12-05T10:00:00Z")), "05 dic 2023");
        assert_eq!(long_date(None), "Sin fecha");
        assert_eq!(long_date(Some("pronto")), "Sin fecha");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Rosa Mendoza Quispe"), "RM");
        assert_eq!(initials("álvaro"), "Á");
        assert_eq!(initials("   "), "??");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(
            whatsapp_link("51", "987 654 321").as_deref(),
            Some("https://wa.me/51987654321")
        );
        assert_eq!(whatsapp_link("51", "--"), None);
    }

    #[test]
    fn test_cycle() {
        let palette = ["a", "b", "c"];
        assert_eq!(cycle(&palette, 0), "a");
        assert_eq!(cycle(&palette, 4), "b");
        assert_eq!(cycle(&[], 3), "");
    }
}
