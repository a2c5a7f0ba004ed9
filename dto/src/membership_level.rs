use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Membership tiers, as offered on the join page.
///
/// The numeric value is the one stored in the members data file.
/// Any value outside of the table resolves to [`MembershipLevel::Member`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MembershipLevel {
    NonProfit,
    Bronze,
    Silver,
    Gold,
    Member,
}

impl MembershipLevel {
    pub const ALL: [MembershipLevel; 4] = [
        MembershipLevel::NonProfit,
        MembershipLevel::Bronze,
        MembershipLevel::Silver,
        MembershipLevel::Gold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MembershipLevel::NonProfit => "NP",
            MembershipLevel::Bronze => "Bronze",
            MembershipLevel::Silver => "Silver",
            MembershipLevel::Gold => "Gold",
            MembershipLevel::Member => "Member",
        }
    }

    /// CSS class used to style badges.
    pub fn class(&self) -> &'static str {
        match self {
            MembershipLevel::NonProfit => "np-member",
            MembershipLevel::Bronze => "bronze",
            MembershipLevel::Silver => "silver",
            MembershipLevel::Gold => "gold",
            MembershipLevel::Member => "member",
        }
    }

    /// Value used by the join form (`input[name="membership"]`).
    pub fn form_value(&self) -> &'static str {
        match self {
            MembershipLevel::NonProfit => "np",
            MembershipLevel::Bronze => "bronze",
            MembershipLevel::Silver => "silver",
            MembershipLevel::Gold => "gold",
            MembershipLevel::Member => "member",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.form_value() == value)
    }

    pub fn tier(&self) -> Option<i64> {
        match self {
            MembershipLevel::NonProfit => Some(1),
            MembershipLevel::Bronze => Some(2),
            MembershipLevel::Silver => Some(3),
            MembershipLevel::Gold => Some(4),
            MembershipLevel::Member => None,
        }
    }
}

impl From<i64> for MembershipLevel {
    fn from(tier: i64) -> Self {
        match tier {
            1 => MembershipLevel::NonProfit,
            2 => MembershipLevel::Bronze,
            3 => MembershipLevel::Silver,
            4 => MembershipLevel::Gold,
            _ => MembershipLevel::Member,
        }
    }
}

impl Display for MembershipLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        tier = {1, 2, 3, 4},
        expected_label = {"NP", "Bronze", "Silver", "Gold"},
        expected_class = {"np-member", "bronze", "silver", "gold"}
    )]
    fn should_map_known_tiers(tier: i64, expected_label: &str, expected_class: &str) {
        let level = MembershipLevel::from(tier);
        assert_eq!(expected_label, level.label());
        assert_eq!(expected_class, level.class());
        assert_eq!(Some(tier), level.tier());
    }

    #[parameterized(tier = {-1, 0, 5, 42, i64::MAX})]
    fn should_fall_back_to_member_for_unknown_tiers(tier: i64) {
        let level = MembershipLevel::from(tier);
        assert_eq!(MembershipLevel::Member, level);
        assert_eq!("Member", level.label());
        assert_eq!("member", level.class());
    }

    #[test]
    fn should_find_level_from_form_value() {
        assert_eq!(
            Some(MembershipLevel::Silver),
            MembershipLevel::from_form_value("silver")
        );
        assert_eq!(None, MembershipLevel::from_form_value("member"));
        assert_eq!(None, MembershipLevel::from_form_value("platinum"));
    }
}
