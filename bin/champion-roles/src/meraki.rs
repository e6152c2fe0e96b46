use anyhow::Context;
use async_trait::async_trait;
use champion_roles_mapping::{BoxError, ChampionId, ChampionRoleStats, Role, RoleStatsSource};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

pub const DEFAULT_ROLE_STATS_URL: &str =
    "https://cdn.merakianalytics.com/riot/lol/resources/latest/en-US/championrates.json";

#[derive(Debug, Deserialize)]
struct ChampionRates {
    /// Champion ID to position name to rates
    data: HashMap<String, HashMap<String, PositionRates>>,
    #[serde(default)]
    patch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PositionRates {
    #[serde(rename = "playRate")]
    play_rate: f64,
}

impl ChampionRates {
    fn into_role_stats(self) -> anyhow::Result<ChampionRoleStats> {
        let mut stats = ChampionRoleStats::new();
        for (champion_id, positions) in self.data {
            let champion_id: ChampionId = champion_id
                .parse()
                .with_context(|| format!("Invalid champion ID: {champion_id}"))?;
            for (position, rates) in positions {
                match position.parse::<Role>() {
                    Ok(role) => stats.insert(champion_id, role, rates.play_rate),
                    Err(e) => debug!("Skipping rates of champion {champion_id}: {e}"),
                }
            }
        }
        stats.fill_missing_roles();
        Ok(stats)
    }
}

/// Role statistics from the Meraki Analytics champion rates feed.
#[derive(Debug)]
pub struct MerakiRoleStats {
    client: reqwest::Client,
    url: String,
}

impl MerakiRoleStats {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl RoleStatsSource for MerakiRoleStats {
    async fn fetch_role_stats(&self) -> Result<ChampionRoleStats, BoxError> {
        debug!("Fetching {}", self.url);
        let rates: ChampionRates = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if let Some(patch) = &rates.patch {
            info!("Champion role statistics are from patch {patch}");
        }
        Ok(rates.into_role_stats()?)
    }
}
