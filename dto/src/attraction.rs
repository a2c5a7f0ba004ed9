use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A place to visit, shown on the discover page.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Attraction {
    name: String,
    address: String,
    description: String,
    image: String,
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Default)]
pub struct AttractionsFile {
    #[serde(default)]
    attractions: Vec<Attraction>,
}

impl AttractionsFile {
    pub fn into_attractions(self) -> Vec<Attraction> {
        self.attractions
    }
}
