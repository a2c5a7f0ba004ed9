use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a phone number as `(AAA) BBB-CCCC`.
/// Numbers which don't have exactly 10 digits are returned untouched.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else {
        phone.to_owned()
    }
}

/// Phone number as used in a `tel:` link: only digits and `+` are kept.
pub fn phone_href(phone: &str) -> String {
    let number: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{number}")
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|d| d.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|d| d.date())
        })
}

/// Format a date as `January 5, 2020`.
pub fn format_long_date(date: &str) -> String {
    parse_date(date)
        .map(|date| long_date(&date))
        .unwrap_or_else(|| INVALID_DATE.to_owned())
}

pub fn long_date(date: &NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Number followed by its English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th...
pub fn ordinal(number: u32) -> String {
    let suffix = if (11..=13).contains(&(number % 100)) {
        "th"
    } else {
        match number % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{number}{suffix}")
}

/// Website with a scheme, so that it can be used as a link target.
pub fn website_href(website: &str) -> String {
    if website.starts_with("http") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}

/// Uppercase the first letter of a sentence.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
