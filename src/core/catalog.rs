//! Static activity catalog used to seed itineraries.

use crate::types::CostTier;

/// A catalog entry the generator can suggest.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub tier: CostTier,
    /// Typical spend for one traveler
    pub cost_per_person: f64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, tier: CostTier, cost_per_person: f64) -> Self {
        Self {
            name: name.into(),
            tier,
            cost_per_person,
        }
    }
}

const BUILTIN: &[(&str, CostTier, f64)] = &[
    ("Self-guided city walk", CostTier::Low, 0.0),
    ("Local street food tour", CostTier::Low, 8.0),
    ("Public park & viewpoint", CostTier::Low, 0.0),
    ("Free museum/gallery day", CostTier::Low, 0.0),
    ("Beach sunset & night market", CostTier::Low, 5.0),
    ("Guided city tour", CostTier::Medium, 25.0),
    ("Cultural show or cooking class", CostTier::Medium, 35.0),
    ("Day-pass for metro/transport", CostTier::Medium, 15.0),
    ("Boat ride / short cruise", CostTier::Medium, 30.0),
    ("Museum + specialty cafe", CostTier::Medium, 20.0),
    ("Theme park or adventure activity", CostTier::High, 90.0),
    ("Full-day guided excursion", CostTier::High, 75.0),
    ("Scenic railway or hot air balloon (location permitting)", CostTier::High, 120.0),
    ("Private food tasting tour", CostTier::High, 60.0),
    ("Fine dining experience", CostTier::High, 85.0),
];

/// Activity suggestions grouped by cost tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ActivityCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Five generic ideas per tier that fit most destinations.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(name, tier, cost)| CatalogEntry::new(*name, *tier, *cost))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn tier(&self, tier: CostTier) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |entry| entry.tier == tier)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_tier() {
        let catalog = ActivityCatalog::builtin();
        for tier in [CostTier::Low, CostTier::Medium, CostTier::High] {
            assert_eq!(catalog.tier(tier).count(), 5, "{tier}");
        }
    }

    #[test]
    fn test_tier_costs_are_ordered() {
        let catalog = ActivityCatalog::builtin();
        let max_low = catalog
            .tier(CostTier::Low)
            .map(|entry| entry.cost_per_person)
            .fold(0.0, f64::max);
        let min_medium = catalog
            .tier(CostTier::Medium)
            .map(|entry| entry.cost_per_person)
            .fold(f64::MAX, f64::min);
        let min_high = catalog
            .tier(CostTier::High)
            .map(|entry| entry.cost_per_person)
            .fold(f64::MAX, f64::min);
        assert!(max_low < min_medium);
        assert!(min_medium < min_high);
    }
}
