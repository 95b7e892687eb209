use serde::{Deserialize, Serialize};

use crate::csv::Row;

/// Week key used when the sheet row has no `week` cell.
const UNKNOWN_WEEK: &str = "Unknown";

/// One line of the weekly shiny log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShinyWeeklyEntry {
    pub week: String,
    /// Raw owner string (the sheet's `ot` column).
    pub member: String,
    pub pokemon: String,
    pub date: String,
    pub lost: bool,
    pub secret: bool,
    pub safari: bool,
    pub egg: bool,
    pub event: bool,
    pub alpha: bool,
}

/// All log entries sharing one week key.
///
/// Weeks keep the order they first appear in the sheet, which is assumed
/// chronological; presentation reverses it to show the most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShinyWeek {
    pub week: String,
    pub label: String,
    pub shinies: Vec<ShinyWeeklyEntry>,
}

/// Group log rows into weeks. Rows need both `ot` and `pokemon`; the week
/// key defaults to `"Unknown"` when absent.
pub fn weeks_from_rows(rows: &[Row]) -> Vec<ShinyWeek> {
    let mut weeks: Vec<ShinyWeek> = Vec::new();

    for row in rows {
        let ot = row.get("ot");
        let pokemon = row.get("pokemon");
        if ot.is_empty() || pokemon.is_empty() {
            continue;
        }

        let week_key = {
            let w = row.get("week");
            if w.is_empty() {
                UNKNOWN_WEEK
            } else {
                w
            }
        };

        let entry = ShinyWeeklyEntry {
            week: week_key.to_string(),
            member: ot.to_string(),
            pokemon: pokemon.to_string(),
            date: row.get("date").to_string(),
            lost: row.flag("lost"),
            secret: row.flag("secret"),
            safari: row.flag("safari"),
            egg: row.flag("egg"),
            event: row.flag("event"),
            alpha: row.flag("alpha"),
        };

        match weeks.iter_mut().find(|w| w.week == week_key) {
            Some(week) => week.shinies.push(entry),
            None => weeks.push(ShinyWeek {
                week: week_key.to_string(),
                label: week_key.to_string(),
                shinies: vec![entry],
            }),
        }
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_merge_by_week_key() {
        let rows = vec![
            Row::from_pairs(&[("ot", "Ash"), ("pokemon", "Pikachu"), ("week", "Week 1")]),
            Row::from_pairs(&[("ot", "Misty"), ("pokemon", "Staryu"), ("week", "Week 2")]),
            Row::from_pairs(&[("ot", "Brock"), ("pokemon", "Onix"), ("week", "Week 1")]),
        ];
        let weeks = weeks_from_rows(&rows);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week, "Week 1");
        assert_eq!(weeks[0].shinies.len(), 2);
        assert_eq!(weeks[1].shinies.len(), 1);
    }

    #[test]
    fn test_missing_week_defaults_to_unknown() {
        let rows = vec![Row::from_pairs(&[("ot", "Ash"), ("pokemon", "Pikachu")])];
        let weeks = weeks_from_rows(&rows);
        assert_eq!(weeks[0].week, "Unknown");
        assert_eq!(weeks[0].label, "Unknown");
    }

    #[test]
    fn test_rows_missing_ot_or_pokemon_are_skipped() {
        let rows = vec![
            Row::from_pairs(&[("pokemon", "Pikachu"), ("week", "Week 1")]),
            Row::from_pairs(&[("ot", "Ash"), ("week", "Week 1")]),
        ];
        assert!(weeks_from_rows(&rows).is_empty());
    }

    #[test]
    fn test_flags_parsed() {
        let rows = vec![Row::from_pairs(&[
            ("ot", "Ash"),
            ("pokemon", "Pikachu"),
            ("egg", "TRUE"),
            ("alpha", "true"),
        ])];
        let entry = &weeks_from_rows(&rows)[0].shinies[0];
        assert!(entry.egg);
        assert!(entry.alpha);
        assert!(!entry.lost);
    }
}
