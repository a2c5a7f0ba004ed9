use chrono::Weekday;

pub const BANNER_CLOSED_STORAGE_KEY: &str = "bannerClosed";

/// The chamber meet and greet banner is only advertised from Monday to Wednesday,
/// and never again once the visitor closed it.
pub fn should_show_banner(weekday: Weekday, closed: bool) -> bool {
    !closed && matches!(weekday, Weekday::Mon | Weekday::Tue | Weekday::Wed)
}

pub fn is_banner_closed(stored: Option<&str>) -> bool {
    stored == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        weekday = {Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun},
        expected_result = {true, true, true, false, false, false, false}
    )]
    fn should_show_banner_early_in_week(weekday: Weekday, expected_result: bool) {
        assert_eq!(expected_result, should_show_banner(weekday, false));
    }

    #[test]
    fn should_never_show_closed_banner() {
        assert!(!should_show_banner(Weekday::Mon, true));
    }

    #[parameterized(
        stored = {None, Some("true"), Some("false"), Some("")},
        expected_result = {false, true, false, false}
    )]
    fn should_read_banner_status(stored: Option<&str>, expected_result: bool) {
        assert_eq!(expected_result, is_banner_closed(stored));
    }
}
