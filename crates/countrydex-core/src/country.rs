//! Country records returned by the countries API.
//!
//! The table only consumes `name.common` and `flag`; the remaining fields
//! are decoded pass-through data. Every field defaults so the partial
//! payloads some endpoints return still decode.

use serde::{Deserialize, Serialize};

/// One country as returned by the API's by-name search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Name variants; the table renders and sorts by `name.common`.
    #[serde(default)]
    pub name: CountryName,

    /// Flag emoji glyph.
    #[serde(default)]
    pub flag: String,

    /// ISO 3166-1 alpha-2 code.
    #[serde(default)]
    pub cca2: String,

    /// ISO 3166-1 alpha-3 code.
    #[serde(default)]
    pub cca3: String,

    /// Continent-level region.
    #[serde(default)]
    pub region: String,

    /// Sub-region within the region.
    #[serde(default)]
    pub subregion: String,

    /// Capital cities.
    #[serde(default)]
    pub capital: Vec<String>,

    /// Population count.
    #[serde(default)]
    pub population: u64,
}

/// Name variants of a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common short name, the display and sort key.
    #[serde(default)]
    pub common: String,

    /// Official long-form name.
    #[serde(default)]
    pub official: String,
}

impl Country {
    /// Convenience constructor covering the fields the table consumes.
    #[must_use]
    pub fn named(common: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            name: CountryName {
                common: common.into(),
                official: String::new(),
            },
            flag: flag.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "name": {
                "common": "France",
                "official": "French Republic",
                "nativeName": { "fra": { "official": "République française", "common": "France" } }
            },
            "cca2": "FR",
            "cca3": "FRA",
            "region": "Europe",
            "subregion": "Western Europe",
            "capital": ["Paris"],
            "population": 67391582,
            "flag": "🇫🇷",
            "borders": ["AND", "BEL", "DEU"],
            "timezones": ["UTC+01:00"]
        }"#;

        let country: Country = serde_json::from_str(json).expect("decode country");

        assert_eq!(country.name.common, "France");
        assert_eq!(country.name.official, "French Republic");
        assert_eq!(country.flag, "🇫🇷");
        assert_eq!(country.cca2, "FR");
        assert_eq!(country.capital, vec!["Paris"]);
        assert_eq!(country.population, 67_391_582);
    }

    #[test]
    fn test_decode_partial_record_defaults() {
        let json = r#"{ "name": { "common": "Narnia" } }"#;

        let country: Country = serde_json::from_str(json).expect("decode country");

        assert_eq!(country.name.common, "Narnia");
        assert!(country.name.official.is_empty());
        assert!(country.flag.is_empty());
        assert!(country.capital.is_empty());
        assert_eq!(country.population, 0);
    }

    #[test]
    fn test_named_constructor() {
        let country = Country::named("France", "🇫🇷");

        assert_eq!(country.name.common, "France");
        assert_eq!(country.flag, "🇫🇷");
        assert!(country.cca2.is_empty());
    }

    #[test]
    fn test_country_serialization_round_trip() {
        let country = Country::named("Malta", "🇲🇹");

        let json = serde_json::to_string(&country).expect("serialize country");
        assert!(json.contains("\"common\":\"Malta\""));

        let decoded: Country = serde_json::from_str(&json).expect("decode country");
        assert_eq!(decoded, country);
    }
}
