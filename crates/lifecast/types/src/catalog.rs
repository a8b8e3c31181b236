//! Static event taxonomy.
//!
//! Maps event category/type pairs (e.g. CAREER/promotion) to a default
//! impact classification and default confidence. Pure lookup table, no
//! state; the registry does not consult it when filling attachment
//! defaults.

use serde::{Deserialize, Serialize};

use crate::event::Confidence;

/// Coarse classification of an event type's typical financial impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactClass {
    /// Typically improves the financial position
    Positive,
    /// Typically worsens the financial position
    Negative,
    /// Cuts both ways (e.g. a home purchase adds an asset and a liability)
    Mixed,
}

/// One event type within a catalog category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Event type key, e.g. "promotion"
    pub event_type: &'static str,
    /// Default impact classification
    pub default_impact: ImpactClass,
    /// Default confidence for events of this type
    pub default_confidence: Confidence,
}

const fn entry(
    event_type: &'static str,
    default_impact: ImpactClass,
    default_confidence: Confidence,
) -> CatalogEntry {
    CatalogEntry {
        event_type,
        default_impact,
        default_confidence,
    }
}

const CAREER: &[CatalogEntry] = &[
    entry("promotion", ImpactClass::Positive, Confidence::High),
    entry("raise", ImpactClass::Positive, Confidence::High),
    entry("job_loss", ImpactClass::Negative, Confidence::Medium),
    entry("career_change", ImpactClass::Mixed, Confidence::Medium),
    entry("retirement", ImpactClass::Mixed, Confidence::High),
    entry("sabbatical", ImpactClass::Negative, Confidence::Medium),
];

const FAMILY: &[CatalogEntry] = &[
    entry("marriage", ImpactClass::Mixed, Confidence::High),
    entry("child", ImpactClass::Mixed, Confidence::Medium),
    entry("divorce", ImpactClass::Negative, Confidence::Low),
    entry("elder_care", ImpactClass::Negative, Confidence::Medium),
];

const HEALTH: &[CatalogEntry] = &[
    entry("medical_emergency", ImpactClass::Negative, Confidence::Low),
    entry("chronic_condition", ImpactClass::Negative, Confidence::Low),
    entry("disability", ImpactClass::Negative, Confidence::Low),
];

const HOUSING: &[CatalogEntry] = &[
    entry("home_purchase", ImpactClass::Mixed, Confidence::Medium),
    entry("home_sale", ImpactClass::Mixed, Confidence::Medium),
    entry("relocation", ImpactClass::Mixed, Confidence::Medium),
    entry("renovation", ImpactClass::Negative, Confidence::Medium),
];

const MARKET: &[CatalogEntry] = &[
    entry("market_downturn", ImpactClass::Negative, Confidence::Low),
    entry("market_rally", ImpactClass::Positive, Confidence::Low),
    entry("inflation_spike", ImpactClass::Negative, Confidence::Low),
    entry("rate_change", ImpactClass::Mixed, Confidence::Low),
];

const EDUCATION: &[CatalogEntry] = &[
    entry("tuition", ImpactClass::Negative, Confidence::High),
    entry("degree_completion", ImpactClass::Positive, Confidence::Medium),
    entry("student_loan", ImpactClass::Negative, Confidence::High),
];

const WINDFALL: &[CatalogEntry] = &[
    entry("inheritance", ImpactClass::Positive, Confidence::Low),
    entry("bonus", ImpactClass::Positive, Confidence::Medium),
    entry("asset_sale", ImpactClass::Positive, Confidence::Medium),
];

const CATALOG: &[(&str, &[CatalogEntry])] = &[
    ("CAREER", CAREER),
    ("FAMILY", FAMILY),
    ("HEALTH", HEALTH),
    ("HOUSING", HOUSING),
    ("MARKET", MARKET),
    ("EDUCATION", EDUCATION),
    ("WINDFALL", WINDFALL),
];

/// The static event taxonomy.
pub struct EventCatalog;

impl EventCatalog {
    /// All top-level category keys.
    pub fn categories() -> Vec<&'static str> {
        CATALOG.iter().map(|(category, _)| *category).collect()
    }

    /// Whether a category key is one of the catalog's top-level groups.
    pub fn is_known_category(category: &str) -> bool {
        CATALOG.iter().any(|(key, _)| *key == category)
    }

    /// All entries in a category, empty for unknown categories.
    pub fn entries(category: &str) -> &'static [CatalogEntry] {
        CATALOG
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, entries)| *entries)
            .unwrap_or(&[])
    }

    /// Look up a category/type pair.
    pub fn lookup(category: &str, event_type: &str) -> Option<&'static CatalogEntry> {
        Self::entries(category)
            .iter()
            .find(|entry| entry.event_type == event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_listed() {
        let categories = EventCatalog::categories();
        assert!(categories.contains(&"CAREER"));
        assert!(categories.contains(&"MARKET"));
        assert_eq!(categories.len(), CATALOG.len());
    }

    #[test]
    fn lookup_known_pair() {
        let entry = EventCatalog::lookup("CAREER", "promotion").unwrap();
        assert_eq!(entry.default_impact, ImpactClass::Positive);
        assert_eq!(entry.default_confidence, Confidence::High);
    }

    #[test]
    fn lookup_unknown_type_returns_none() {
        assert!(EventCatalog::lookup("CAREER", "moon_landing").is_none());
        assert!(EventCatalog::lookup("SPACE", "promotion").is_none());
    }

    #[test]
    fn unknown_category_has_no_entries() {
        assert!(EventCatalog::entries("SPACE").is_empty());
        assert!(!EventCatalog::is_known_category("SPACE"));
        assert!(EventCatalog::is_known_category("HEALTH"));
    }

    #[test]
    fn event_types_are_unique_within_category() {
        for (category, entries) in CATALOG {
            for entry in *entries {
                let count = entries
                    .iter()
                    .filter(|e| e.event_type == entry.event_type)
                    .count();
                assert_eq!(count, 1, "duplicate {} in {}", entry.event_type, category);
            }
        }
    }
}
