//! Country and region names to ISO 3166-1 alpha-2 codes.
//!
//! Remote address fields come in name/code pairs (`MailingCountry` and
//! `MailingCountryCode`). When a record carries a country name, the mapper
//! looks it up here and writes the code field instead.

use celes::Country;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// Resolves a country or region name to its 2-letter code.
pub trait RegionLookup: std::fmt::Debug + Send + Sync + 'static {
    fn alpha2(&self, name: &str) -> Option<String>;
}

/// ISO 3166-1 lookup backed by the `celes` registry.
///
/// Matching ignores case, punctuation and extra whitespace. Besides the
/// registry's own names and aliases, a few common spellings are accepted.
/// Alpha-3 and numeric codes resolve as well.
#[derive(Debug, Default, Clone, Copy)]
pub struct Countries;

impl RegionLookup for Countries {
    fn alpha2(&self, name: &str) -> Option<String> {
        Countries::code(name).map(str::to_string)
    }
}

impl Countries {
    /// Returns the alpha-2 code for `name`, if it names a country.
    pub fn code(name: &str) -> Option<&'static str> {
        static INDEX: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

        let words = split_words(name);
        if words.is_empty() {
            return None;
        }

        let index = INDEX.get_or_init(|| {
            ALIASES
                .iter()
                .map(|(code, name)| (split_words(name).join(" "), *code))
                .collect()
        });

        if let Some(code) = index.get(&words.join(" ")) {
            return Some(*code);
        }

        // The registry keys long names and aliases in a few spellings
        // ("Germany", "UnitedKingdom"), so try each.
        let title: Vec<String> = words.iter().map(|word| capitalize(word)).collect();
        [
            name.trim().to_string(),
            words.join(" "),
            words.concat(),
            title.join(" "),
            title.concat(),
        ]
        .iter()
        .find_map(|candidate| Country::from_str(candidate).ok())
        .map(|country| country.alpha2)
    }
}

/// Lower-cased alphanumeric words of `name`.
fn split_words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everyday and recently adopted names the registry may not carry.
const ALIASES: &[(&str, &str)] = &[
    ("AE", "UAE"),
    ("BN", "Brunei"),
    ("BO", "Bolivia"),
    ("CD", "Democratic Republic of the Congo"),
    ("CG", "Republic of the Congo"),
    ("CI", "Ivory Coast"),
    ("CI", "Cote d'Ivoire"),
    ("CI", "Côte d'Ivoire"),
    ("CV", "Cabo Verde"),
    ("CZ", "Czechia"),
    ("CZ", "Czech Republic"),
    ("FM", "Micronesia"),
    ("GB", "UK"),
    ("GB", "United Kingdom"),
    ("GB", "Great Britain"),
    ("GB", "England"),
    ("GB", "Scotland"),
    ("GB", "Wales"),
    ("GB", "Northern Ireland"),
    ("IR", "Iran"),
    ("KP", "North Korea"),
    ("KR", "South Korea"),
    ("KR", "Korea"),
    ("LA", "Laos"),
    ("MD", "Moldova"),
    ("MK", "North Macedonia"),
    ("NL", "Holland"),
    ("NL", "The Netherlands"),
    ("PS", "Palestine"),
    ("RU", "Russia"),
    ("SY", "Syria"),
    ("SZ", "Eswatini"),
    ("SZ", "Swaziland"),
    ("TR", "Turkey"),
    ("TR", "Turkiye"),
    ("TR", "Türkiye"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("US", "USA"),
    ("US", "United States"),
    ("US", "United States of America"),
    ("US", "America"),
    ("VA", "Vatican City"),
    ("VE", "Venezuela"),
    ("VN", "Vietnam"),
    ("VN", "Viet Nam"),
];
