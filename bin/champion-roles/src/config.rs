use crate::ddragon::DDRAGON_URL;
use crate::meraki::DEFAULT_ROLE_STATS_URL;
use anyhow::Context;
use champion_roles_mapping::{PlatformRoute, DEFAULT_OUTPUT_PATH, DEFAULT_THRESHOLD};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub threshold: f64,
    pub output_path: PathBuf,
    /// Platform the champion directory is fetched for, e.g. `NA1`
    pub region: String,
    pub role_stats_url: String,
    pub ddragon_url: String,
    pub locale: Option<String>,
    // TODO: Also pin the role statistics once Meraki serves per-patch files
    pub patch: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            region: "NA1".to_owned(),
            role_stats_url: DEFAULT_ROLE_STATS_URL.to_owned(),
            ddragon_url: DDRAGON_URL.to_owned(),
            locale: None,
            patch: None,
        }
    }
}

impl Config {
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(threshold) = var("ROLE_THRESHOLD") {
            self.threshold = threshold
                .parse::<f64>()
                .with_context(|| format!("ROLE_THRESHOLD should be numeric, got {threshold}"))?;
        }
        self.output_path = var("OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or(std::mem::take(&mut self.output_path));
        self.region = var("CHAMPION_REGION").unwrap_or(std::mem::take(&mut self.region));
        self.role_stats_url =
            var("ROLE_STATS_URL").unwrap_or(std::mem::take(&mut self.role_stats_url));
        self.ddragon_url =
            var("DDRAGON_URL").unwrap_or(std::mem::take(&mut self.ddragon_url));
        self.locale = var("DDRAGON_LOCALE").or(self.locale.take());
        self.patch = var("GAME_PATCH").or(self.patch.take());
        Ok(())
    }

    /// Parse [`Self::region`], accepting either a platform (`EUW1`) or the
    /// region shorthand players use (`EUW`).
    pub fn region(&self) -> anyhow::Result<PlatformRoute> {
        let region = self.region.trim().to_uppercase();
        let platform = match region.as_str() {
            "BR" => "BR1",
            "EUNE" => "EUN1",
            "EUW" => "EUW1",
            "JP" => "JP1",
            "LAN" => "LA1",
            "LAS" => "LA2",
            "NA" => "NA1",
            "OCE" => "OC1",
            "TR" => "TR1",
            "PBE" => "PBE1",
            other => other,
        };
        platform
            .parse()
            .ok()
            .with_context(|| format!("Unknown region: {}", self.region))
    }
}
