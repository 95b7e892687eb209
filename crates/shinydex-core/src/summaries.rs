//! Derived views over the loaded collections.
//!
//! Everything here is computed per invocation from fresh snapshots; nothing
//! is cached or persisted. Covers member scoring, the three gallery grouping
//! strategies, the donator leaderboard, the claimed/unclaimed hitlist, and
//! living-dex counts.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{
    Donator, Member, MemberShowcase, PokemonData, ShinyEntry, ShinyWeek, ALPHA_POINTS,
};
use crate::names::{normalize_member, normalize_species};

// ============================================================================
// Donator tier thresholds
// ============================================================================

const DIAMOND_THRESHOLD: i64 = 50_000_000;
const PLATINUM_THRESHOLD: i64 = 25_000_000;
const GOLD_THRESHOLD: i64 = 10_000_000;
const SILVER_THRESHOLD: i64 = 5_000_000;
const BRONZE_THRESHOLD: i64 = 1_000_000;

// ============================================================================
// Member scoring
// ============================================================================

/// Point total for one member's collection: active specimens only, alpha
/// override first, otherwise species points (0 for unknown species).
pub fn member_points(shinies: &[ShinyEntry], dex: &PokemonData) -> u32 {
    shinies
        .iter()
        .filter(|mon| mon.is_active())
        .map(|mon| {
            if mon.alpha {
                ALPHA_POINTS
            } else {
                dex.points_for(&normalize_species(&mon.name))
            }
        })
        .sum()
}

/// Count of a member's active (not lost, not sold) specimens.
pub fn active_shiny_count(shinies: &[ShinyEntry]) -> usize {
    shinies.iter().filter(|mon| mon.is_active()).count()
}

fn showcase_for<'a>(
    member: &Member,
    showcase: &'a [MemberShowcase],
) -> Option<&'a MemberShowcase> {
    showcase
        .iter()
        .find(|entry| normalize_member(&entry.name) == member.key)
}

// ============================================================================
// Gallery grouping
// ============================================================================

/// Grouping strategy for the full-member gallery. One is active at a time,
/// selected by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Alphabetical,
    ShinyCount,
    Points,
}

/// One gallery group: a header (letter, count, or point total) and its
/// members.
#[derive(Debug, Clone, Serialize)]
pub struct MemberGroup {
    pub header: String,
    pub members: Vec<Member>,
}

/// Group items by an extracted key, returning groups sorted ascending by
/// key. Items keep their relative order within a group; callers reverse the
/// result for descending headers.
fn group_by_key<T: Clone, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => groups.push((k, vec![item.clone()])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| a.cmp(b));
    groups
}

/// Group members under the selected strategy.
pub fn group_members(
    mode: SortMode,
    members: &[Member],
    showcase: &[MemberShowcase],
    dex: &PokemonData,
) -> Vec<MemberGroup> {
    match mode {
        SortMode::Alphabetical => group_alphabetical(members),
        SortMode::ShinyCount => group_by_count(members, showcase),
        SortMode::Points => group_by_points(members, showcase, dex),
    }
}

/// Groups by uppercase first letter, ascending; members name-sorted within
/// each group.
pub fn group_alphabetical(members: &[Member]) -> Vec<MemberGroup> {
    let groups = group_by_key(members, |m| {
        m.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    });

    groups
        .into_iter()
        .map(|(header, mut members)| {
            members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            MemberGroup { header, members }
        })
        .collect()
}

/// Groups by active shiny count, descending.
pub fn group_by_count(members: &[Member], showcase: &[MemberShowcase]) -> Vec<MemberGroup> {
    let mut groups = group_by_key(members, |m| {
        showcase_for(m, showcase)
            .map(|entry| active_shiny_count(&entry.shinies))
            .unwrap_or(0)
    });
    groups.reverse();

    groups
        .into_iter()
        .map(|(count, members)| MemberGroup {
            header: count.to_string(),
            members,
        })
        .collect()
}

/// Groups by point total, descending.
pub fn group_by_points(
    members: &[Member],
    showcase: &[MemberShowcase],
    dex: &PokemonData,
) -> Vec<MemberGroup> {
    let mut groups = group_by_key(members, |m| {
        showcase_for(m, showcase)
            .map(|entry| member_points(&entry.shinies, dex))
            .unwrap_or(0)
    });
    groups.reverse();

    groups
        .into_iter()
        .map(|(points, members)| MemberGroup {
            header: points.to_string(),
            members,
        })
        .collect()
}

// ============================================================================
// Donator leaderboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DonatorTier {
    /// The single highest total, regardless of threshold.
    Top,
    Diamond,
    Platinum,
    Gold,
    Silver,
    Bronze,
    None,
}

/// One leaderboard line: a donator's summed total and resolved tier.
#[derive(Debug, Clone, Serialize)]
pub struct DonatorRank {
    pub name: String,
    pub total: i64,
    pub tier: DonatorTier,
}

fn resolve_tier(total: i64, is_top: bool) -> DonatorTier {
    if is_top {
        DonatorTier::Top
    } else if total >= DIAMOND_THRESHOLD {
        DonatorTier::Diamond
    } else if total >= PLATINUM_THRESHOLD {
        DonatorTier::Platinum
    } else if total >= GOLD_THRESHOLD {
        DonatorTier::Gold
    } else if total >= SILVER_THRESHOLD {
        DonatorTier::Silver
    } else if total >= BRONZE_THRESHOLD {
        DonatorTier::Bronze
    } else {
        DonatorTier::None
    }
}

/// Sum donations by exact display name and rank them descending by total.
///
/// The highest total (when positive) is flagged [`DonatorTier::Top`] even if
/// it sits below the diamond threshold; the original site displays it that
/// way on purpose.
pub fn donator_leaderboard(donators: &[Donator]) -> Vec<DonatorRank> {
    let mut totals: Vec<(String, i64)> = Vec::new();

    for d in donators {
        match totals.iter_mut().find(|(name, _)| *name == d.name) {
            Some((_, total)) => *total += d.parse_value(),
            None => totals.push((d.name.clone(), d.parse_value())),
        }
    }

    let top_name = totals
        .iter()
        .filter(|(_, total)| *total > 0)
        .max_by_key(|(_, total)| *total)
        .map(|(name, _)| name.clone());

    let mut ranked: Vec<DonatorRank> = totals
        .into_iter()
        .map(|(name, total)| {
            let is_top = top_name.as_deref() == Some(name.as_str());
            DonatorRank {
                tier: resolve_tier(total, is_top),
                name,
                total,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    ranked
}

// ============================================================================
// Hitlist (claimed/unclaimed dex partition)
// ============================================================================

/// One species line of the hitlist.
#[derive(Debug, Clone, Serialize)]
pub struct DexEntry {
    /// Normalized species name.
    pub name: String,
    pub points: u32,
    pub claimed: bool,
}

/// Build the hitlist: every species with positive points and `show = true`,
/// grouped by region (alphabetical), each marked claimed iff some member
/// owns an active specimen. Entries are name-sorted within a region.
pub fn shiny_dex_by_region(
    dex: &PokemonData,
    showcase: &[MemberShowcase],
) -> Vec<(String, Vec<DexEntry>)> {
    let claimed = claimed_species(showcase);

    let mut regions: HashMap<String, Vec<DexEntry>> = HashMap::new();
    for (name, &points) in &dex.points {
        if points == 0 || !dex.show.get(name).copied().unwrap_or(false) {
            continue;
        }

        let region = match dex.region.get(name) {
            Some(r) if !r.is_empty() => r.clone(),
            _ => "Unknown".to_string(),
        };

        regions.entry(region).or_default().push(DexEntry {
            name: name.clone(),
            points,
            claimed: claimed.contains(name),
        });
    }

    let mut result: Vec<(String, Vec<DexEntry>)> = regions.into_iter().collect();
    for (_, entries) in &mut result {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    result.sort_by(|(a, _), (b, _)| a.cmp(b));
    result
}

/// Normalized names of every species some member actively owns.
fn claimed_species(showcase: &[MemberShowcase]) -> HashSet<String> {
    showcase
        .iter()
        .flat_map(|member| member.shinies.iter())
        .filter(|mon| mon.is_active())
        .map(|mon| normalize_species(&mon.name))
        .collect()
}

/// Active specimen counts per normalized species name, restricted to species
/// with a nonzero point value.
pub fn living_dex_counts(
    showcase: &[MemberShowcase],
    dex: &PokemonData,
) -> HashMap<String, u32> {
    let mut counts = HashMap::new();

    for member in showcase {
        for mon in member.shinies.iter().filter(|mon| mon.is_active()) {
            let key = normalize_species(&mon.name);
            if dex.points_for(&key) > 0 {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    counts
}

// ============================================================================
// Weekly ordering
// ============================================================================

/// Weeks in display order: last-inserted first. Sheet order is assumed
/// chronological, so this puts the most recent week on top.
pub fn weeks_most_recent_first(weeks: &[ShinyWeek]) -> Vec<ShinyWeek> {
    weeks.iter().rev().cloned().collect()
}
