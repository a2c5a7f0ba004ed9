use crate::format::ordinal;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

pub const PROPHETS_URL: &str =
    "https://byui-cse.github.io/cse-ww-program/data/latter-day-prophets.json";

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Prophet {
    name: String,
    lastname: String,
    birthdate: String,
    birthplace: String,
    death: Option<String>,
    length: Option<u32>,
    order: u32,
    imageurl: String,
}

impl Prophet {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }

    pub fn portrait_alt(&self) -> String {
        format!(
            "Portrait of {} - {} Latter-day President",
            self.full_name(),
            ordinal(self.order)
        )
    }

    pub fn death_label(&self) -> String {
        self.death.clone().unwrap_or_else(|| "N/A".to_owned())
    }

    pub fn length_label(&self) -> String {
        self.length
            .map(|length| length.to_string())
            .unwrap_or_else(|| "N/A".to_owned())
    }

    pub fn order_label(&self) -> String {
        format!("{} President", ordinal(self.order))
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Default)]
pub struct ProphetsFile {
    #[serde(default)]
    prophets: Vec<Prophet>,
}

impl ProphetsFile {
    pub fn into_prophets(self) -> Vec<Prophet> {
        self.prophets
    }
}
