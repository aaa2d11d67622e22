//! Country entity - One record from the REST Countries API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The `name` object of a country record.
///
/// Only `common` matters for gameplay; `official` is carried for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryName {
    pub common: Option<String>,
    pub official: Option<String>,
}

/// Flag image URLs. Presentation-only, never used for scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

/// A country as delivered by the external data source.
///
/// Every field is optional: the API makes no completeness guarantees and the
/// game tolerates gaps by omission. `languages` is a `BTreeMap` so hint text
/// lists language names in a stable order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub name: Option<CountryName>,
    pub region: Option<String>,
    pub capital: Vec<String>,
    pub population: Option<u64>,
    pub languages: BTreeMap<String, String>,
    pub flags: Option<Flags>,
}

impl Country {
    /// The common name, the key used for selection tracking and guessing.
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.common.as_deref())
    }

    /// The flag PNG URL, if the record carries one.
    pub fn flag_png(&self) -> Option<&str> {
        self.flags.as_ref().and_then(|f| f.png.as_deref())
    }

    /// Builds the hint list for this country.
    ///
    /// One hint per available field, in fixed order: region, capital (first
    /// entry), population, languages. Missing fields are skipped, so the
    /// result has 0 to 4 entries.
    pub fn hints(&self) -> Vec<String> {
        let mut hints = Vec::new();
        if let Some(region) = &self.region {
            hints.push(format!("This country is in {region}"));
        }
        if let Some(capital) = self.capital.first() {
            hints.push(format!("Its capital is {capital}"));
        }
        if let Some(population) = self.population {
            hints.push(format!(
                "It has a population of about {population} people"
            ));
        }
        if !self.languages.is_empty() {
            let names: Vec<&str> = self.languages.values().map(String::as_str).collect();
            hints.push(format!("Languages spoken: {}", names.join(", ")));
        }
        hints
    }

    /// Checks a guess against the common name, case-insensitively.
    ///
    /// Exact match only: no trimming, no accent folding, no partial credit.
    /// A record without a common name is never guessable.
    pub fn matches_guess(&self, guess: &str) -> bool {
        match self.common_name() {
            Some(name) => guess.to_lowercase() == name.to_lowercase(),
            None => false,
        }
    }
}
