use champion_roles_mapping::{
    build_role_mapping, write_role_mapping, ChampionDirectory, ChampionRecord, ChampionRoleStats,
    Role,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

type RawStats = BTreeMap<u16, BTreeMap<Role, f64>>;

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

/// Mostly uniform rates, with ties, the default threshold and NaN mixed in.
fn play_rate() -> impl Strategy<Value = f64> {
    prop_oneof![
        6 => 0.0..1.0f64,
        1 => Just(0.05),
        1 => Just(0.5),
        1 => Just(f64::NAN),
    ]
}

fn raw_stats() -> impl Strategy<Value = RawStats> {
    prop::collection::btree_map(
        0u16..60,
        prop::collection::btree_map(role(), play_rate(), 1..=5),
        0..30,
    )
}

fn directory_ids() -> impl Strategy<Value = BTreeSet<u16>> {
    prop::collection::btree_set(0u16..60, 0..60)
}

fn threshold() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0..1.5f64, Just(0.0), Just(0.05), Just(1.0)]
}

fn champion_name(id: u16) -> String {
    format!("Champion {id}")
}

fn to_stats(raw: &RawStats) -> ChampionRoleStats {
    raw.iter()
        .flat_map(|(id, rates)| rates.iter().map(move |(role, rate)| (*id, *role, *rate)))
        .collect()
}

fn to_directory(ids: &BTreeSet<u16>) -> ChampionDirectory {
    ids.iter()
        .map(|id| ChampionRecord::new(*id, champion_name(*id)))
        .collect()
}

proptest! {
    #[test]
    fn champion_present_iff_some_role_reaches_threshold(
        raw in raw_stats(),
        ids in directory_ids(),
        threshold in threshold(),
    ) {
        let mapping = build_role_mapping(&to_stats(&raw), &to_directory(&ids), threshold);

        for (id, rates) in &raw {
            let expected = ids.contains(id) && rates.values().any(|rate| *rate >= threshold);
            let roles = mapping.get(&champion_name(*id));
            prop_assert_eq!(roles.is_some(), expected);
            if let Some(roles) = roles {
                prop_assert!(!roles.is_empty());
            }
        }
    }

    #[test]
    fn only_directory_champions_with_stats_are_named(
        raw in raw_stats(),
        ids in directory_ids(),
        threshold in threshold(),
    ) {
        let mapping = build_role_mapping(&to_stats(&raw), &to_directory(&ids), threshold);

        let names: BTreeSet<String> = ids
            .intersection(&raw.keys().copied().collect())
            .map(|id| champion_name(*id))
            .collect();
        for (name, _) in mapping.iter() {
            prop_assert!(names.contains(name), "{name} should not be in the mapping");
        }
    }

    #[test]
    fn roles_are_significant_and_never_inverted(
        raw in raw_stats(),
        ids in directory_ids(),
        threshold in threshold(),
    ) {
        let mapping = build_role_mapping(&to_stats(&raw), &to_directory(&ids), threshold);

        for (id, rates) in &raw {
            let Some(roles) = mapping.get(&champion_name(*id)) else {
                continue;
            };
            let ordered: Vec<f64> = roles.iter().map(|role| rates[role]).collect();
            prop_assert!(ordered.iter().all(|rate| *rate >= threshold));
            prop_assert!(
                ordered.windows(2).all(|pair| pair[0] >= pair[1]),
                "roles {roles:?} are out of order for rates {ordered:?}"
            );

            let expected = rates.values().filter(|rate| **rate >= threshold).count();
            prop_assert_eq!(roles.len(), expected);
        }
    }

    #[test]
    fn repeated_runs_write_identical_bytes(
        raw in raw_stats(),
        ids in directory_ids(),
        threshold in threshold(),
    ) {
        let stats = to_stats(&raw);
        let directory = to_directory(&ids);

        let mut first = Vec::new();
        let mut second = Vec::new();
        write_role_mapping(&build_role_mapping(&stats, &directory, threshold), &mut first).unwrap();
        write_role_mapping(&build_role_mapping(&stats, &directory, threshold), &mut second).unwrap();
        prop_assert_eq!(first, second);
    }
}
