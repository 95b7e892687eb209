use serde::{Deserialize, Serialize};

use crate::csv::Row;
use crate::names::normalize_member;

/// One captured shiny specimen owned by one member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShinyEntry {
    /// Raw species label as entered in the sheet.
    pub name: String,
    pub lost: bool,
    pub sold: bool,
    pub secret: bool,
    pub safari: bool,
    pub egg: bool,
    pub event: bool,
    pub alpha: bool,
    /// Optional capture clip URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<String>,
}

impl ShinyEntry {
    /// A specimen counts toward totals iff it is neither lost nor sold.
    pub fn is_active(&self) -> bool {
        !self.lost && !self.sold
    }

    fn from_row(row: &Row) -> Self {
        Self {
            name: row.get("pokemon").to_string(),
            lost: row.flag("lost"),
            sold: row.flag("sold"),
            secret: row.flag("secret"),
            safari: row.flag("safari"),
            egg: row.flag("egg"),
            event: row.flag("event"),
            alpha: row.flag("alpha"),
            clip: row.get_opt("clip"),
        }
    }
}

/// One member's shiny collection, in sheet order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberShowcase {
    /// Display name, taken from the first row seen for this member.
    pub name: String,
    pub shinies: Vec<ShinyEntry>,
}

/// Group showcase rows by normalized owner key.
///
/// The owner column is `member`, falling back to `ot`. Rows missing either
/// the owner or the species are skipped. Groups keep first-appearance order.
pub fn showcase_from_rows(rows: &[Row]) -> Vec<MemberShowcase> {
    let mut groups: Vec<(String, MemberShowcase)> = Vec::new();

    for row in rows {
        let owner = {
            let member = row.get("member");
            if member.is_empty() {
                row.get("ot")
            } else {
                member
            }
        };
        if owner.is_empty() || row.get("pokemon").is_empty() {
            continue;
        }

        let key = normalize_member(owner);
        let entry = ShinyEntry::from_row(row);

        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, showcase)) => showcase.shinies.push(entry),
            None => groups.push((
                key,
                MemberShowcase {
                    name: owner.to_string(),
                    shinies: vec![entry],
                },
            )),
        }
    }

    groups.into_iter().map(|(_, showcase)| showcase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_by_normalized_owner() {
        let rows = vec![
            Row::from_pairs(&[("member", "Ash Ketchum"), ("pokemon", "Pikachu")]),
            Row::from_pairs(&[("member", "ashketchum"), ("pokemon", "Mewtwo")]),
            Row::from_pairs(&[("member", "Misty"), ("pokemon", "Staryu")]),
        ];
        let showcase = showcase_from_rows(&rows);
        assert_eq!(showcase.len(), 2);
        // Display name comes from the first row of the group.
        assert_eq!(showcase[0].name, "Ash Ketchum");
        assert_eq!(showcase[0].shinies.len(), 2);
        assert_eq!(showcase[1].name, "Misty");
    }

    #[test]
    fn test_ot_fallback() {
        let rows = vec![Row::from_pairs(&[("ot", "Brock"), ("pokemon", "Onix")])];
        let showcase = showcase_from_rows(&rows);
        assert_eq!(showcase[0].name, "Brock");
    }

    #[test]
    fn test_rows_missing_owner_or_pokemon_are_skipped() {
        let rows = vec![
            Row::from_pairs(&[("pokemon", "Pikachu")]),
            Row::from_pairs(&[("member", "Ash")]),
        ];
        assert!(showcase_from_rows(&rows).is_empty());
    }

    #[test]
    fn test_entry_flags_and_active() {
        let row = Row::from_pairs(&[
            ("member", "Ash"),
            ("pokemon", "Pikachu"),
            ("lost", "TRUE"),
            ("alpha", "true"),
            ("clip", "https://example.com/clip"),
        ]);
        let showcase = showcase_from_rows(&[row]);
        let mon = &showcase[0].shinies[0];
        assert!(mon.lost);
        assert!(mon.alpha);
        assert!(!mon.is_active());
        assert_eq!(mon.clip.as_deref(), Some("https://example.com/clip"));

        let sold = ShinyEntry {
            sold: true,
            ..Default::default()
        };
        assert!(!sold.is_active());
        assert!(ShinyEntry::default().is_active());
    }
}
