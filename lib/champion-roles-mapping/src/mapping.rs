use crate::error::Error;
use crate::model::{ChampionDirectory, ChampionRoleStats};
use crate::role::Role;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, warn};

/// Minimum play rate for a role to be considered significant.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

const JSON_INDENT: &[u8] = b"    ";

/// Champion name to significant roles, most played first. Serializes as a
/// JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMapping {
    // Insertion ordered without another map type. Lookups are linear, which is
    // fine for the couple hundred champions in the game.
    entries: Vec<(String, Vec<Role>)>,
}

impl RoleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the roles for a champion. An existing entry for the same name
    /// is replaced in place and its roles returned.
    pub fn insert(&mut self, name: String, roles: Vec<Role>) -> Option<Vec<Role>> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_roles)) => Some(std::mem::replace(existing_roles, roles)),
            None => {
                self.entries.push((name, roles));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Role]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, roles)| roles.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Role])> {
        self.entries
            .iter()
            .map(|(name, roles)| (name.as_str(), roles.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RoleMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, roles) in &self.entries {
            map.serialize_entry(name, roles)?;
        }
        map.end()
    }
}

/// Roles whose play rate reaches `threshold`, highest play rate first. Equal
/// rates keep their canonical role order.
pub fn significant_roles(rates: &BTreeMap<Role, f64>, threshold: f64) -> Vec<Role> {
    let mut significant: Vec<(Role, f64)> = rates
        .iter()
        .filter(|(_, rate)| **rate >= threshold)
        .map(|(role, rate)| (*role, *rate))
        .collect();
    significant.sort_by(|a, b| b.1.total_cmp(&a.1));
    significant.into_iter().map(|(role, _)| role).collect()
}

/// Join role statistics with the champion directory, keeping only champions
/// that are named in the directory and have at least one significant role.
pub fn build_role_mapping(
    stats: &ChampionRoleStats,
    directory: &ChampionDirectory,
    threshold: f64,
) -> RoleMapping {
    let mut mapping = RoleMapping::new();
    for (champion_id, rates) in stats.iter() {
        let Some(name) = directory.name(champion_id) else {
            debug!("Champion {champion_id} is not in the directory, skipping");
            continue;
        };

        let roles = significant_roles(rates, threshold);
        if roles.is_empty() {
            debug!("No role of {name} reaches the threshold of {threshold}");
            continue;
        }

        if let Some(replaced) = mapping.insert(name.to_owned(), roles) {
            warn!("Champion name {name} is used by more than one ID, replacing {replaced:?}");
        }
    }
    mapping
}

/// Write `mapping` as pretty printed JSON to `writer`.
pub fn write_role_mapping<W: Write>(mapping: &RoleMapping, mut writer: W) -> Result<(), Error> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    mapping.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
