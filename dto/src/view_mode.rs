use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Key under which the chosen layout is stored in the browser.
pub const VIEW_MODE_STORAGE_KEY: &str = "directoryView";

/// Layout of the member directory.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    /// Classes of the directory container for this layout.
    pub fn container_class(&self) -> String {
        format!("member-directory {}-view", self.as_str())
    }

    /// Whether the member logo is shown in this layout.
    pub fn shows_logo(&self) -> bool {
        matches!(self, ViewMode::Grid)
    }

    /// Restore a stored preference. Missing or unknown values fall back to the grid.
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn announcement(&self) -> String {
        format!("View changed to {self} view")
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("Unknown view mode: {s}")),
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        stored = {None, Some("grid"), Some("list"), Some("LIST"), Some("")},
        expected_result = {ViewMode::Grid, ViewMode::Grid, ViewMode::List, ViewMode::Grid, ViewMode::Grid}
    )]
    fn should_restore_stored_view(stored: Option<&str>, expected_result: ViewMode) {
        assert_eq!(expected_result, ViewMode::from_stored(stored));
    }

    #[test]
    fn should_come_back_to_original_view_after_two_toggles() {
        let view = ViewMode::Grid;
        let toggled_twice = view.toggled().toggled();

        assert_eq!(ViewMode::List, view.toggled());
        assert_eq!(view, toggled_twice);
        assert_eq!(view.container_class(), toggled_twice.container_class());
    }

    #[test]
    fn should_build_container_class() {
        assert_eq!("member-directory grid-view", ViewMode::Grid.container_class());
        assert_eq!("member-directory list-view", ViewMode::List.container_class());
    }

    #[test]
    fn should_announce_view() {
        assert_eq!("View changed to list view", ViewMode::List.announcement());
    }
}
