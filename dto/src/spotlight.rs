use crate::member::Member;
use derive_getters::Getters;
use rand::Rng;

pub const DEFAULT_SPOTLIGHT_COUNT: usize = 3;
/// Silver and Gold members are eligible.
pub const DEFAULT_SPOTLIGHT_MIN_TIER: i64 = 3;

#[derive(Debug, Getters, Clone, Copy, PartialEq)]
pub struct SpotlightConfig {
    count: usize,
    min_tier: i64,
}

impl SpotlightConfig {
    pub fn new(count: usize, min_tier: i64) -> Self {
        Self { count, min_tier }
    }

    pub fn is_eligible(&self, member: &Member) -> bool {
        *member.membership_level() >= self.min_tier
    }

    /// Pick featured members at random among the eligible ones.
    ///
    /// This is a partial Fisher-Yates shuffle on the eligible members: at step `i`,
    /// a random member is taken from the not-yet-drawn tail `[i, len)` and swapped into
    /// position `i`. Members are therefore distinct, and the result is in draw order.
    /// When fewer members than `count` are eligible, all of them are returned.
    pub fn select<'a, R: Rng + ?Sized>(&self, members: &'a [Member], rng: &mut R) -> Vec<&'a Member> {
        let mut eligible: Vec<&Member> = members
            .iter()
            .filter(|member| self.is_eligible(member))
            .collect();
        let count = self.count.min(eligible.len());
        for i in 0..count {
            let picked = rng.random_range(i..eligible.len());
            eligible.swap(i, picked);
        }
        eligible.truncate(count);
        eligible
    }
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPOTLIGHT_COUNT, DEFAULT_SPOTLIGHT_MIN_TIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    ide!();

    fn build_members(tiers: &[i64]) -> Vec<Member> {
        tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| Member::new_test(&format!("Member {index}"), *tier))
            .collect()
    }

    #[parameterized(seed = {0, 1, 2, 3, 42, 1337, 65535})]
    fn should_select_distinct_eligible_members(seed: u64) {
        let members = build_members(&[1, 2, 3, 4, 3, 4, 1, 3, 4, 2]);
        let mut rng = SmallRng::seed_from_u64(seed);

        let selected = SpotlightConfig::default().select(&members, &mut rng);

        assert_eq!(DEFAULT_SPOTLIGHT_COUNT, selected.len());
        let names: HashSet<&String> = selected.iter().map(|member| member.name()).collect();
        assert_eq!(selected.len(), names.len());
        assert!(selected.iter().all(|member| *member.membership_level() >= 3));
    }

    #[test]
    fn should_return_every_eligible_member_when_not_enough() {
        let members = build_members(&[1, 4, 2, 3]);
        let mut rng = SmallRng::seed_from_u64(7);

        let selected = SpotlightConfig::default().select(&members, &mut rng);

        let mut names: Vec<&str> = selected.iter().map(|m| m.name().as_str()).collect();
        names.sort();
        assert_eq!(vec!["Member 1", "Member 3"], names);
    }

    #[test]
    fn should_return_nothing_when_no_member_is_eligible() {
        let members = build_members(&[1, 2, 2, 1]);
        let mut rng = SmallRng::seed_from_u64(7);

        assert!(SpotlightConfig::default().select(&members, &mut rng).is_empty());
        assert!(SpotlightConfig::default().select(&[], &mut rng).is_empty());
    }

    #[test]
    fn should_honor_custom_configuration() {
        let members = build_members(&[1, 2, 2, 1, 3]);
        let mut rng = SmallRng::seed_from_u64(3);

        let selected = SpotlightConfig::new(2, 2).select(&members, &mut rng);

        assert_eq!(2, selected.len());
        assert!(selected.iter().all(|member| *member.membership_level() >= 2));
    }

    #[test]
    fn should_be_reproducible_with_same_seed() {
        let members = build_members(&[3, 4, 3, 4, 3, 4, 3, 4]);
        let config = SpotlightConfig::default();

        let first = config.select(&members, &mut SmallRng::seed_from_u64(99));
        let second = config.select(&members, &mut SmallRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn should_reach_every_eligible_member() {
        let members = build_members(&[3, 4, 3, 4, 3]);
        let config = SpotlightConfig::new(1, 3);
        let mut rng = SmallRng::seed_from_u64(11);

        let drawn: HashSet<String> = (0..500)
            .flat_map(|_| config.select(&members, &mut rng))
            .map(|member| member.name().clone())
            .collect();

        assert_eq!(members.len(), drawn.len());
    }
}
