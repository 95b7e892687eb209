//! Domain models for the showcase data sources.
//!
//! One submodule per spreadsheet source:
//!
//! - `member`: clan roster entries
//! - `donator`: donation log lines
//! - `showcase`: per-member shiny collections
//! - `weekly`: the weekly shiny log
//! - `pokemon`: per-species metadata (tiers, points, families)
//!
//! Each submodule owns the pure row-to-record transform for its source, so
//! the loaders in `sheets` are fetch-then-delegate and the transforms stay
//! unit-testable without a network.

pub mod donator;
pub mod member;
pub mod pokemon;
pub mod showcase;
pub mod weekly;

pub use donator::Donator;
pub use member::Member;
pub use pokemon::{tier_points, PokemonData, ALPHA_POINTS};
pub use showcase::{MemberShowcase, ShinyEntry};
pub use weekly::{ShinyWeek, ShinyWeeklyEntry};
