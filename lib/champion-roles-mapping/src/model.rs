use crate::role::Role;
use std::collections::{BTreeMap, HashMap};

/// Numeric champion key, as used by the Riot API and Data Dragon.
pub type ChampionId = u16;

/// Play rate of every reported role, per champion. Iterates by ascending
/// champion ID, and per champion in canonical [`Role`] order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChampionRoleStats(BTreeMap<ChampionId, BTreeMap<Role, f64>>);

impl ChampionRoleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, champion_id: ChampionId, role: Role, play_rate: f64) {
        self.0.entry(champion_id).or_default().insert(role, play_rate);
    }

    /// Give every champion a `0.0` play rate for the roles it has no data for.
    pub fn fill_missing_roles(&mut self) {
        for rates in self.0.values_mut() {
            for role in Role::ALL {
                rates.entry(role).or_insert(0.0);
            }
        }
    }

    pub fn get(&self, champion_id: ChampionId) -> Option<&BTreeMap<Role, f64>> {
        self.0.get(&champion_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChampionId, &BTreeMap<Role, f64>)> {
        self.0.iter().map(|(id, rates)| (*id, rates))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ChampionId, Role, f64)> for ChampionRoleStats {
    fn from_iter<T: IntoIterator<Item = (ChampionId, Role, f64)>>(iter: T) -> Self {
        let mut stats = Self::new();
        for (champion_id, role, play_rate) in iter {
            stats.insert(champion_id, role, play_rate);
        }
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRecord {
    pub id: ChampionId,
    pub name: String,
}

impl ChampionRecord {
    pub fn new(id: ChampionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Map of champion ID to champion display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionDirectory(HashMap<ChampionId, String>);

impl ChampionDirectory {
    pub fn name(&self, champion_id: ChampionId) -> Option<&str> {
        self.0.get(&champion_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ChampionRecord> for ChampionDirectory {
    fn from_iter<T: IntoIterator<Item = ChampionRecord>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|record| (record.id, record.name))
                .collect(),
        )
    }
}
