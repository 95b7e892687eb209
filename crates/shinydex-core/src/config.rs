//! Source URL configuration.
//!
//! The five data sources are tabs of one published spreadsheet, exported as
//! CSV via a fixed base URL plus a per-tab `gid`. The base can be overridden
//! with the `SHINYDEX_SHEET_BASE` environment variable.

/// Published spreadsheet export base URL.
const SHEET_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTB6vHVjwL9_F3DVIVgXxP8rtWEDQyZaDTnG2yAw96j4_1DXU7317lBFaY0N5JnDhdvUnkvgAvb6p8o/pub";

/// Environment variable overriding the base URL (useful for tests and
/// self-hosted mirrors).
const SHEET_BASE_ENV: &str = "SHINYDEX_SHEET_BASE";

// Spreadsheet tab ids, one per data source.
const GID_SHINY_WEEKLY: &str = "0";
const GID_DONATORS: &str = "2068008843";
const GID_MEMBERS: &str = "1649506714";
const GID_SHOWCASE: &str = "1708435858";
const GID_POKEMON: &str = "890281184";

/// CSV export URLs for the five data sources.
#[derive(Debug, Clone)]
pub struct SourceUrls {
    pub members: String,
    pub donators: String,
    pub showcase: String,
    pub weekly: String,
    pub pokemon: String,
}

impl SourceUrls {
    /// Build the URL set from a spreadsheet export base.
    pub fn from_base(base: &str) -> Self {
        let url = |gid: &str| format!("{}?gid={}&single=true&output=csv", base, gid);
        Self {
            members: url(GID_MEMBERS),
            donators: url(GID_DONATORS),
            showcase: url(GID_SHOWCASE),
            weekly: url(GID_SHINY_WEEKLY),
            pokemon: url(GID_POKEMON),
        }
    }

    /// Build the URL set, honoring the environment override.
    pub fn from_env() -> Self {
        match std::env::var(SHEET_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::from_base(base.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self::from_base(SHEET_BASE_URL)
    }
}
