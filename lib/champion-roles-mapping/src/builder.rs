use crate::error::{BoxError, Error};
use crate::mapping::{build_role_mapping, write_role_mapping, RoleMapping};
use crate::model::{ChampionDirectory, ChampionRecord, ChampionRoleStats};
use async_trait::async_trait;
use riven::consts::PlatformRoute;
use std::io::Write;
use tracing::info;

/// Source of per-role play rates for every champion.
#[async_trait]
pub trait RoleStatsSource {
    async fn fetch_role_stats(&self) -> Result<ChampionRoleStats, BoxError>;
}

/// Source of champion IDs and display names for a region.
#[async_trait]
pub trait ChampionDirectorySource {
    async fn fetch_champions(
        &self,
        region: PlatformRoute,
    ) -> Result<Vec<ChampionRecord>, BoxError>;
}

/// Fetches role statistics and the champion directory, then joins them into
/// a [`RoleMapping`].
#[derive(Debug)]
pub struct RoleMappingBuilder<S, D> {
    stats_source: S,
    directory_source: D,
    region: PlatformRoute,
}

impl<S, D> RoleMappingBuilder<S, D>
where
    S: RoleStatsSource,
    D: ChampionDirectorySource,
{
    pub fn new(stats_source: S, directory_source: D, region: PlatformRoute) -> Self {
        Self {
            stats_source,
            directory_source,
            region,
        }
    }

    /// Build the mapping of champion names to roles with a play rate of at
    /// least `threshold`.
    ///
    /// Any failure of either source is returned as is, there is no retry.
    pub async fn build(&self, threshold: f64) -> Result<RoleMapping, Error> {
        info!("Fetching champion role statistics");
        let stats = self
            .stats_source
            .fetch_role_stats()
            .await
            .map_err(Error::RoleStatsRetrieval)?;

        info!("Fetching champion directory for {:?}", self.region);
        let directory: ChampionDirectory = self
            .directory_source
            .fetch_champions(self.region)
            .await
            .map_err(Error::DirectoryRetrieval)?
            .into_iter()
            .collect();

        info!(
            "Joining {} champion role statistics with {} directory entries",
            stats.len(),
            directory.len()
        );
        let mapping = build_role_mapping(&stats, &directory, threshold);
        info!("Built roles for {} champions", mapping.len());
        Ok(mapping)
    }

    /// [`Self::build`], then write the mapping as JSON to `writer`. Nothing is
    /// written if building fails.
    ///
    /// `writer` must already be open, so a file sink is created or truncated
    /// even when fetching fails. To leave an existing file untouched on
    /// failure, call [`Self::build`] and open the file before
    /// [`write_role_mapping`].
    pub async fn build_into<W: Write>(
        &self,
        threshold: f64,
        writer: W,
    ) -> Result<RoleMapping, Error> {
        let mapping = self.build(threshold).await?;
        write_role_mapping(&mapping, writer)?;
        Ok(mapping)
    }
}
