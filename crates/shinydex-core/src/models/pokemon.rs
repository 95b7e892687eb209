use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::csv::Row;
use crate::names::normalize_species;

/// Fixed tier-to-points table. A species only exists in [`PokemonData`] if
/// its sheet tier is one of these labels.
const TIER_POINTS: &[(&str, u32)] = &[
    ("Tier 6", 2),
    ("Tier 5", 3),
    ("Tier 4", 6),
    ("Tier 3", 10),
    ("Tier 2", 15),
    ("Tier 1", 25),
    ("Tier 0", 30),
    ("Tier LM", 100),
];

/// Alpha specimens always score this, regardless of species tier.
pub const ALPHA_POINTS: u32 = 50;

/// Points for a tier label, or `None` when the label is unrecognized.
pub fn tier_points(tier: &str) -> Option<u32> {
    TIER_POINTS
        .iter()
        .find(|(label, _)| *label == tier)
        .map(|(_, points)| *points)
}

/// Per-species metadata, keyed everywhere by normalized species name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonData {
    /// Derived solely from `tier` via the fixed table.
    pub points: HashMap<String, u32>,
    pub tier: HashMap<String, String>,
    pub region: HashMap<String, String>,
    pub rarity: HashMap<String, String>,
    /// Display eligibility; false hides the species from the hitlist.
    pub show: HashMap<String, bool>,
    /// All normalized names in the same breeding family, self-inclusive.
    pub families: HashMap<String, Vec<String>>,
    /// Per tier, the deduplicated family-base names (first member of each
    /// family group).
    #[serde(rename = "tierFamilies")]
    pub tier_families: HashMap<String, Vec<String>>,
}

impl PokemonData {
    /// Points for a species by normalized name, 0 when unknown.
    pub fn points_for(&self, key: &str) -> u32 {
        self.points.get(key).copied().unwrap_or(0)
    }
}

/// Build the species metadata from sheet rows.
///
/// A row contributes only when its tier is recognized and its `family` cell
/// (comma-separated raw species list) is non-empty. Every family member gets
/// identical points/tier/region/rarity/show; `show` is true unless the cell
/// is exactly `FALSE`.
pub fn pokemon_from_rows(rows: &[Row]) -> PokemonData {
    let mut data = PokemonData::default();

    for row in rows {
        let tier = row.get("tier");
        let Some(points) = tier_points(tier) else {
            continue;
        };

        let family: Vec<String> = row
            .get("family")
            .split(',')
            .map(normalize_species)
            .filter(|name| !name.is_empty())
            .collect();

        let Some(family_base) = family.first().cloned() else {
            continue;
        };

        let bases = data.tier_families.entry(tier.to_string()).or_default();
        if !bases.contains(&family_base) {
            bases.push(family_base);
        }

        let region = row.get("region").to_string();
        let rarity = row.get("rarity").to_string();
        let show = row.get("show") != "FALSE";

        for name in &family {
            data.families.insert(name.clone(), family.clone());
            data.points.insert(name.clone(), points);
            data.tier.insert(name.clone(), tier.to_string());
            data.region.insert(name.clone(), region.clone());
            data.rarity.insert(name.clone(), rarity.clone());
            data.show.insert(name.clone(), show);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species_row(family: &str, tier: &str) -> Row {
        Row::from_pairs(&[("family", family), ("tier", tier), ("region", "Kanto")])
    }

    #[test]
    fn test_tier_points_table() {
        assert_eq!(tier_points("Tier 6"), Some(2));
        assert_eq!(tier_points("Tier LM"), Some(100));
        assert_eq!(tier_points("Tier 99"), None);
        assert_eq!(tier_points(""), None);
    }

    #[test]
    fn test_family_members_share_metadata() {
        let rows = vec![species_row("Pichu, Pikachu, Raichu", "Tier 6")];
        let data = pokemon_from_rows(&rows);

        for name in ["pichu", "pikachu", "raichu"] {
            assert_eq!(data.points_for(name), 2);
            assert_eq!(data.tier[name], "Tier 6");
            assert_eq!(data.region[name], "Kanto");
            assert_eq!(
                data.families[name],
                vec!["pichu", "pikachu", "raichu"]
            );
            assert!(data.show[name]);
        }
        assert_eq!(data.tier_families["Tier 6"], vec!["pichu"]);
    }

    #[test]
    fn test_unrecognized_tier_excludes_row() {
        let rows = vec![species_row("Mew", "Tier X")];
        let data = pokemon_from_rows(&rows);
        assert!(data.points.is_empty());
    }

    #[test]
    fn test_empty_family_excludes_row() {
        let rows = vec![
            species_row("", "Tier 6"),
            species_row(" , ", "Tier 6"),
        ];
        let data = pokemon_from_rows(&rows);
        assert!(data.points.is_empty());
        assert!(data.tier_families.is_empty());
    }

    #[test]
    fn test_show_false_only_on_exact_cell() {
        let mut row = species_row("Mew", "Tier 0");
        let data = pokemon_from_rows(std::slice::from_ref(&row));
        assert!(data.show["mew"]);

        row = Row::from_pairs(&[("family", "Mew"), ("tier", "Tier 0"), ("show", "FALSE")]);
        let data = pokemon_from_rows(&[row]);
        assert!(!data.show["mew"]);

        row = Row::from_pairs(&[("family", "Mew"), ("tier", "Tier 0"), ("show", "false")]);
        let data = pokemon_from_rows(&[row]);
        assert!(data.show["mew"]);
    }

    #[test]
    fn test_tier_family_bases_deduplicated() {
        let rows = vec![
            species_row("Pichu, Pikachu", "Tier 6"),
            species_row("Pichu, Raichu", "Tier 6"),
            species_row("Caterpie", "Tier 6"),
        ];
        let data = pokemon_from_rows(&rows);
        assert_eq!(data.tier_families["Tier 6"], vec!["pichu", "caterpie"]);
    }

    #[test]
    fn test_points_for_unknown_species() {
        assert_eq!(PokemonData::default().points_for("missingno"), 0);
    }
}
