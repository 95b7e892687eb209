use serde::{Deserialize, Serialize};

use crate::csv::Row;

/// One donation log line. Donations carry no identity key; the leaderboard
/// aggregates them by exact display-name string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donator {
    /// ISO-ish date string straight from the sheet, possibly empty.
    pub date: String,
    pub name: String,
    /// Free-text donation label, e.g. a currency type.
    pub donation: String,
    /// Locale-formatted numeric string (`"1,000,000"` or `"1.000.000"`).
    pub value: String,
}

impl Donator {
    /// Build a donation from a log row. Rows without a name are skipped.
    pub fn from_row(row: &Row) -> Option<Self> {
        let name = row.get("name").trim();
        if name.is_empty() {
            return None;
        }

        let value = row.get("value");
        Some(Self {
            date: row.get("date").to_string(),
            name: name.to_string(),
            donation: row.get("donation").trim().to_string(),
            value: if value.is_empty() {
                "0".to_string()
            } else {
                value.to_string()
            },
        })
    }

    /// Numeric donation value: thousands separators (`.` and `,`) stripped,
    /// then parsed; malformed cells degrade to 0.
    pub fn parse_value(&self) -> i64 {
        parse_donation_value(&self.value)
    }
}

/// Transform donation rows, skipping rows without a name.
pub fn donators_from_rows(rows: &[Row]) -> Vec<Donator> {
    rows.iter().filter_map(Donator::from_row).collect()
}

pub(crate) fn parse_donation_value(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(|c| *c != '.' && *c != ',').collect();
    digits.trim().parse().unwrap_or(0)
}
