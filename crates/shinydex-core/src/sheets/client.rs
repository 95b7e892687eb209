//! HTTP client for the published spreadsheet CSV exports.
//!
//! One loader per data source, each a fetch followed by the pure row
//! transform owned by the matching `models` submodule. Nothing is cached;
//! every call re-fetches and re-parses its source.

use anyhow::{Context, Result};
use reqwest::{header, Client};
use tracing::debug;

use crate::config::SourceUrls;
use crate::csv::{self, Row};
use crate::models::{
    donator::donators_from_rows, member::members_from_rows, pokemon::pokemon_from_rows,
    showcase::showcase_from_rows, weekly::weeks_from_rows, Donator, Member, MemberShowcase,
    PokemonData, ShinyWeek,
};

use super::SheetError;

/// HTTP request timeout in seconds.
/// Published sheet exports are small; 30s covers slow redirects comfortably.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the spreadsheet sources.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetClient {
    client: Client,
    urls: SourceUrls,
}

/// One full load of all five sources, fetched concurrently.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub donators: Vec<Donator>,
    pub showcase: Vec<MemberShowcase>,
    pub weeks: Vec<ShinyWeek>,
    pub pokemon: PokemonData,
}

impl SheetClient {
    /// Create a new client for the given source URL set.
    pub fn new(urls: SourceUrls) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, urls })
    }

    /// Fetch one CSV export and parse it into rows.
    async fn fetch_rows(&self, url: &str) -> Result<Vec<Row>> {
        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(SheetError::from)
            .with_context(|| format!("Failed to fetch CSV from {}", url))?;

        if !response.status().is_success() {
            return Err(SheetError::from_status(response.status()))
                .with_context(|| format!("Failed to fetch CSV from {}", url));
        }

        let text = response
            .text()
            .await
            .map_err(SheetError::from)
            .context("Failed to read CSV body")?;

        let rows = csv::parse(&text);
        debug!(url = url, rows = rows.len(), "Fetched CSV source");
        Ok(rows)
    }

    /// Load the clan roster.
    pub async fn load_members(&self) -> Result<Vec<Member>> {
        let rows = self.fetch_rows(&self.urls.members).await?;
        Ok(members_from_rows(&rows))
    }

    /// Load the donation log.
    pub async fn load_donators(&self) -> Result<Vec<Donator>> {
        let rows = self.fetch_rows(&self.urls.donators).await?;
        Ok(donators_from_rows(&rows))
    }

    /// Load per-member shiny collections.
    pub async fn load_showcase(&self) -> Result<Vec<MemberShowcase>> {
        let rows = self.fetch_rows(&self.urls.showcase).await?;
        Ok(showcase_from_rows(&rows))
    }

    /// Load the weekly shiny log, grouped into weeks in sheet order.
    pub async fn load_weekly(&self) -> Result<Vec<ShinyWeek>> {
        let rows = self.fetch_rows(&self.urls.weekly).await?;
        Ok(weeks_from_rows(&rows))
    }

    /// Load the per-species metadata.
    pub async fn load_pokemon(&self) -> Result<PokemonData> {
        let rows = self.fetch_rows(&self.urls.pokemon).await?;
        Ok(pokemon_from_rows(&rows))
    }

    /// Load all five sources concurrently into one snapshot.
    ///
    /// The sources are independent, so the fetches run in parallel; the
    /// first failure fails the whole snapshot.
    pub async fn load_all(&self) -> Result<Snapshot> {
        let (members, donators, showcase, weeks, pokemon) = tokio::join!(
            self.load_members(),
            self.load_donators(),
            self.load_showcase(),
            self.load_weekly(),
            self.load_pokemon(),
        );

        Ok(Snapshot {
            members: members?,
            donators: donators?,
            showcase: showcase?,
            weeks: weeks?,
            pokemon: pokemon?,
        })
    }
}
