use serde::{Deserialize, Serialize};

use crate::csv::Row;
use crate::names::normalize_member;

/// One clan roster entry. Identity is `key`; `name` is the display form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Normalized lookup key, unique per member.
    pub key: String,
    pub active: bool,
    /// Sprite asset format tag (e.g. `png`), if the member has one.
    pub sprite: Option<String>,
    pub role: String,
}

impl Member {
    /// Build a member from a roster row. Rows without a name are skipped.
    pub fn from_row(row: &Row) -> Option<Self> {
        let name = row.get("name").trim();
        if name.is_empty() {
            return None;
        }

        let sprite = {
            let s = row.get("sprite").trim().to_lowercase();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        };

        Some(Self {
            name: name.to_string(),
            key: normalize_member(name),
            active: row.flag("active"),
            sprite,
            role: row.get("role").trim().to_string(),
        })
    }
}

/// Transform roster rows into members, skipping rows without a name.
pub fn members_from_rows(rows: &[Row]) -> Vec<Member> {
    rows.iter().filter_map(Member::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row() {
        let row = Row::from_pairs(&[
            ("name", "Ash Ketchum"),
            ("active", "true"),
            ("sprite", "PNG"),
            ("role", "Leader"),
        ]);
        let m = Member::from_row(&row).unwrap();
        assert_eq!(m.name, "Ash Ketchum");
        assert_eq!(m.key, "ashketchum");
        assert!(m.active);
        assert_eq!(m.sprite.as_deref(), Some("png"));
        assert_eq!(m.role, "Leader");
    }

    #[test]
    fn test_from_row_inactive_and_no_sprite() {
        let row = Row::from_pairs(&[("name", "Misty"), ("active", "no")]);
        let m = Member::from_row(&row).unwrap();
        assert!(!m.active);
        assert_eq!(m.sprite, None);
        assert_eq!(m.role, "");
    }

    #[test]
    fn test_rows_without_name_are_skipped() {
        let rows = vec![
            Row::from_pairs(&[("name", "Ash")]),
            Row::from_pairs(&[("name", "  ")]),
            Row::from_pairs(&[("active", "TRUE")]),
        ];
        let members = members_from_rows(&rows);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].key, "ash");
    }
}
