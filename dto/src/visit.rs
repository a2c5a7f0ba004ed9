pub const LAST_VISIT_STORAGE_KEY: &str = "lastVisit";

const ONE_DAY_IN_MILLISECONDS: i64 = 24 * 60 * 60 * 1000;

/// Message greeting a visitor, based on the time of their previous visit.
/// Timestamps are milliseconds since the Unix epoch.
pub fn visitor_message(last_visit: Option<i64>, now: i64) -> String {
    match last_visit {
        None => "Welcome! Let us know if you have any questions.".to_owned(),
        Some(last_visit) => {
            let days = (now - last_visit).div_euclid(ONE_DAY_IN_MILLISECONDS);
            if days < 1 {
                "Back so soon! Awesome!".to_owned()
            } else if days == 1 {
                "You last visited 1 day ago.".to_owned()
            } else {
                format!("You last visited {days} days ago.")
            }
        }
    }
}

/// Parse a stored timestamp. Unreadable values are treated as a first visit.
pub fn parse_last_visit(value: Option<&str>) -> Option<i64> {
    value.and_then(|value| value.trim().parse::<f64>().ok()).map(|value| value as i64)
}
