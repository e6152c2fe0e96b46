use anyhow::Context;
use async_trait::async_trait;
use champion_roles_mapping::{
    BoxError, ChampionDirectorySource, ChampionId, ChampionRecord, PlatformRoute,
};
use serde::Deserialize;
use std::{collections::HashMap, fmt::Display};
use tracing::{debug, info};

pub const DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug, Deserialize)]
struct ChampionMap {
    pub data: HashMap<String, Champion>,
}

#[derive(Debug, Deserialize)]
struct Champion {
    key: String,
    name: String,
}

/// Current Data Dragon versions and locale for a region.
#[derive(Debug, Deserialize)]
struct Realm {
    n: RealmVersions,
    l: String,
    cdn: String,
}

#[derive(Debug, Deserialize)]
struct RealmVersions {
    champion: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GameVersion(pub String);

impl GameVersion {
    /// Find the Data Dragon version released for this game version's patch.
    /// `versions` is expected newest first, as served by Data Dragon.
    fn to_data_dragon_version(&self, versions: &[String]) -> anyhow::Result<DataDragonVersion> {
        let patch = self.0.split('.').take(2).collect::<Vec<&str>>().join(".");
        let prefix = format!("{patch}.");
        versions
            .iter()
            .find(|version| version.starts_with(&prefix))
            .map(|version| DataDragonVersion(version.clone()))
            .with_context(|| format!("Failed to find Data Dragon version for patch {patch}"))
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct DataDragonVersion(String);

impl Display for DataDragonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the Data Dragon realm serving a platform.
fn realm_name(region: PlatformRoute) -> anyhow::Result<&'static str> {
    let realm = match region {
        PlatformRoute::BR1 => "br",
        PlatformRoute::EUN1 => "eune",
        PlatformRoute::EUW1 => "euw",
        PlatformRoute::JP1 => "jp",
        PlatformRoute::KR => "kr",
        PlatformRoute::LA1 => "lan",
        PlatformRoute::LA2 => "las",
        PlatformRoute::NA1 => "na",
        PlatformRoute::OC1 => "oce",
        PlatformRoute::RU => "ru",
        PlatformRoute::TR1 => "tr",
        PlatformRoute::PBE1 => "pbe",
        _ => anyhow::bail!("No Data Dragon realm is known for {region:?}"),
    };
    Ok(realm)
}

/// Champion directory backed by Riot's Data Dragon static data.
#[derive(Debug)]
pub struct DataDragon {
    client: reqwest::Client,
    base_url: String,
    /// Overrides the realm's default locale
    locale: Option<String>,
    /// Pins the champion data to a game patch instead of the realm's current one
    patch: Option<GameVersion>,
}

impl DataDragon {
    pub fn new(client: reqwest::Client, locale: Option<String>, patch: Option<GameVersion>) -> Self {
        Self {
            client,
            base_url: DDRAGON_URL.to_owned(),
            locale,
            patch,
        }
    }

    /// Serve realms and versions from `base_url` instead of Riot's Data Dragon.
    /// Champion data is still fetched from the CDN named by the realm.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    async fn fetch_realm(&self, region: PlatformRoute) -> anyhow::Result<Realm> {
        let url = format!("{}/realms/{}.json", self.base_url, realm_name(region)?);
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn fetch_versions(&self) -> anyhow::Result<Vec<String>> {
        let url = format!("{}/api/versions.json", self.base_url);
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn fetch_champion_map(
        &self,
        cdn: &str,
        version: &DataDragonVersion,
        locale: &str,
    ) -> anyhow::Result<ChampionMap> {
        let url = format!("{cdn}/{version}/data/{locale}/champion.json");
        debug!("Fetching {url}");
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ChampionMap>()
            .await?)
    }
}

#[async_trait]
impl ChampionDirectorySource for DataDragon {
    async fn fetch_champions(
        &self,
        region: PlatformRoute,
    ) -> Result<Vec<ChampionRecord>, BoxError> {
        let realm = self.fetch_realm(region).await?;
        let version = match &self.patch {
            Some(patch) => patch.to_data_dragon_version(&self.fetch_versions().await?)?,
            None => DataDragonVersion(realm.n.champion),
        };
        let locale = self.locale.as_deref().unwrap_or(&realm.l);
        info!("Using Data Dragon version {version} ({locale})");

        let champions = self.fetch_champion_map(&realm.cdn, &version, locale).await?;
        Ok(champion_records(champions)?)
    }
}

fn champion_records(champions: ChampionMap) -> anyhow::Result<Vec<ChampionRecord>> {
    champions
        .data
        .into_values()
        .map(|champion| {
            let id: ChampionId = champion
                .key
                .parse()
                .with_context(|| format!("Invalid key for {}: {}", champion.name, champion.key))?;
            Ok(ChampionRecord::new(id, champion.name))
        })
        .collect()
}
