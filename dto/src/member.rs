use crate::format::website_href;
use crate::membership_level::MembershipLevel;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A business listed in the chamber directory.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    name: String,
    address: String,
    phone: String,
    website: String,
    image: String,
    category: String,
    join_date: String,
    description: String,
    membership_level: i64,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        address: String,
        phone: String,
        website: String,
        image: String,
        category: String,
        join_date: String,
        description: String,
        membership_level: i64,
    ) -> Self {
        Self {
            name,
            address,
            phone,
            website,
            image,
            category,
            join_date,
            description,
            membership_level,
        }
    }

    pub fn level(&self) -> MembershipLevel {
        MembershipLevel::from(self.membership_level)
    }

    /// Website with a scheme, so that it can be used as a link target.
    pub fn website_url(&self) -> String {
        website_href(&self.website)
    }

    /// First letter of the name, used when no logo can be displayed.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| "B".to_owned())
    }
}

/// Body of the members data file.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Default)]
pub struct MembersFile {
    #[serde(default)]
    members: Vec<Member>,
}

impl MembersFile {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }
}

/// Key used to compare names: case and accents are ignored.
fn sort_key(name: &str) -> String {
    diacritics::remove_diacritics(name).to_lowercase()
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Stable ascending sort on member names.
pub fn sort_members_by_name(members: &mut [Member]) {
    members.sort_by(|a, b| compare_names(&a.name, &b.name));
}
