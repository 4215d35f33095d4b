use gachapull_core::{
    Catalog, GachaConfig, GachaEngine, ItemDef, PlayerState, PullResult, RarityWeight, ResultKind,
    TypeDef,
};

fn item(name: &str, types: &[&str], rarity: &str) -> ItemDef {
    ItemDef {
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        rarity: rarity.to_string(),
    }
}

fn types(names: &[&str]) -> Vec<TypeDef> {
    names
        .iter()
        .map(|name| TypeDef {
            name: name.to_string(),
            base_weight: 1.0,
        })
        .collect()
}

fn rarities(entries: &[(&str, f64)]) -> Vec<RarityWeight> {
    entries
        .iter()
        .map(|(rarity, weight)| RarityWeight {
            rarity: rarity.to_string(),
            weight: *weight,
        })
        .collect()
}

/// Every type has a monotype item at every rarity, so no draw can miss.
fn complete_catalog() -> Catalog {
    Catalog {
        types: types(&["Fuego", "Agua", "Planta"]),
        rarity_weights: rarities(&[("comun", 80.0), ("raro", 17.0), ("legendario", 3.0)]),
        items: vec![
            item("Charmander", &["Fuego"], "comun"),
            item("Vulpix", &["Fuego"], "comun"),
            item("Arcanine", &["Fuego"], "raro"),
            item("Entei", &["Fuego"], "legendario"),
            item("Squirtle", &["Agua"], "comun"),
            item("Lapras", &["Agua"], "raro"),
            item("Suicune", &["Agua"], "legendario"),
            item("Bulbasaur", &["Planta"], "comun"),
            item("Tangela", &["Planta"], "raro"),
            item("Celebi", &["Planta"], "legendario"),
        ],
    }
}

fn engine(seed: u64) -> GachaEngine {
    GachaEngine::new(GachaConfig::default(), complete_catalog(), seed)
}

#[test]
fn pity_89_forces_legendary_and_resets() {
    let mut engine = engine(1);
    let mut state = engine.new_player();
    state.legendary_pity = 89;
    state.rare_pity = 6;
    let batch = engine.pull(state, 1);
    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0].kind, ResultKind::Item);
    assert_eq!(batch.results[0].rarity, "legendario");
    assert_eq!(batch.state.legendary_pity, 0);
    assert_eq!(batch.state.rare_pity, 0);
}

#[test]
fn legendary_counter_never_reaches_threshold_after_a_draw() {
    let mut engine = engine(2);
    let mut state = engine.new_player();
    let mut since_legendary = 0u32;
    for _ in 0..5_000 {
        let before = state.legendary_pity;
        let batch = engine.pull(state, 1);
        state = batch.state;
        let result = &batch.results[0];
        if result.rarity == "legendario" {
            assert_eq!(state.legendary_pity, 0);
            since_legendary = 0;
        } else {
            assert_eq!(state.legendary_pity, before + 1);
            since_legendary += 1;
        }
        assert!(state.legendary_pity < 90);
        assert!(since_legendary < 90);
    }
}

#[test]
fn rare_counter_resets_only_on_rare_or_better() {
    let mut engine = engine(3);
    let mut state = engine.new_player();
    let mut soft_pity_seen = false;
    for _ in 0..5_000 {
        let before = state.rare_pity;
        let batch = engine.pull(state, 1);
        state = batch.state;
        match batch.results[0].rarity.as_str() {
            "comun" => assert_eq!(state.rare_pity, before + 1),
            "raro" | "legendario" => {
                assert_eq!(state.rare_pity, 0);
                if before + 1 >= 10 {
                    soft_pity_seen = true;
                }
            }
            other => panic!("unexpected rarity {other}"),
        }
        assert!(state.rare_pity < 10);
    }
    assert!(soft_pity_seen);
}

#[test]
fn search_failure_resets_rare_pity_only() {
    let catalog = Catalog {
        types: types(&["Fuego"]),
        rarity_weights: rarities(&[("comun", 1.0)]),
        items: vec![item("Charizard", &["Fuego", "Volador"], "comun")],
    };
    let mut engine = GachaEngine::new(GachaConfig::default(), catalog, 4);
    let mut state = engine.new_player();
    state.legendary_pity = 20;
    state.rare_pity = 3;
    let batch = engine.pull(state, 3);
    assert!(batch
        .results
        .iter()
        .all(|result| result.kind == ResultKind::SearchFailure));
    assert_eq!(batch.state.legendary_pity, 23);
    assert_eq!(batch.state.rare_pity, 0);
    assert!(batch.state.collected.is_empty());
}

#[test]
fn batch_carries_pity_between_draws() {
    let catalog = Catalog {
        types: types(&["Fuego"]),
        rarity_weights: rarities(&[("comun", 1.0)]),
        items: vec![
            item("Charmander", &["Fuego"], "comun"),
            item("Entei", &["Fuego"], "legendario"),
        ],
    };
    let mut engine = GachaEngine::new(GachaConfig::default(), catalog, 5);
    let mut state = engine.new_player();
    state.legendary_pity = 85;
    let batch = engine.pull(state, 10);
    let rarities: Vec<&str> = batch.results.iter().map(|r| r.rarity.as_str()).collect();
    assert_eq!(rarities[4], "legendario");
    assert!(rarities[..4].iter().all(|rarity| *rarity == "comun"));
    assert!(rarities[5..].iter().all(|rarity| *rarity == "comun"));
    assert_eq!(batch.state.legendary_pity, 5);
}

#[test]
fn no_active_types_yields_one_placeholder_per_draw() {
    let mut engine = engine(6);
    let mut state = engine.new_player();
    state.toggle_all_types(&engine.catalog);
    let before = state.clone();
    let batch = engine.pull(state, 1);
    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0].kind, ResultKind::NoActiveTypes);
    assert_eq!(batch.state.collected, before.collected);
    assert_eq!(batch.state.active_types(), before.active_types());
    assert_eq!(batch.state.history, batch.results);
    assert_eq!(batch.state.legendary_pity, before.legendary_pity + 1);
}

#[test]
fn history_is_capped_and_newest_first() {
    let mut engine = engine(7);
    let mut state = engine.new_player();
    let mut last_batch: Vec<PullResult> = Vec::new();
    for count in [10u32, 30, 25, 7] {
        let batch = engine.pull(state, count);
        state = batch.state;
        assert!(state.history.len() <= 50);
        last_batch = batch.results;
    }
    assert_eq!(state.history.len(), 50);
    assert_eq!(&state.history[..7], &last_batch[..]);
}

#[test]
fn large_batch_returns_every_result_and_caps_history() {
    let mut engine = engine(13);
    let state = engine.new_player();
    let batch = engine.pull(state, 200_000);
    assert_eq!(batch.results.len(), 200_000);
    assert_eq!(batch.state.history.len(), 50);
    assert_eq!(&batch.state.history[..], &batch.results[..50]);
}

#[test]
fn zero_count_changes_nothing() {
    let mut engine = engine(8);
    let state = engine.new_player();
    let batch = engine.pull(state.clone(), 0);
    assert!(batch.results.is_empty());
    assert_eq!(batch.state, state);
}

#[test]
fn duplicate_flag_tracks_prior_collection() {
    let mut engine = engine(9);
    let mut state = engine.new_player();
    for _ in 0..300 {
        let before: PlayerState = state.clone();
        let batch = engine.pull(state, 1);
        state = batch.state;
        let result = &batch.results[0];
        assert_eq!(result.duplicate, before.collected.contains(&result.name));
        assert!(state.collected.contains(&result.name));
    }
}

#[test]
fn mastered_rare_draws_lean_dual_type() {
    let catalog = Catalog {
        types: types(&["Fuego", "Volador"]),
        rarity_weights: rarities(&[("raro", 1.0)]),
        items: vec![
            item("Arcanine", &["Fuego"], "raro"),
            item("Charizard", &["Fuego", "Volador"], "raro"),
        ],
    };
    let config = GachaConfig {
        legendary_hard_pity: u32::MAX,
        ..GachaConfig::default()
    };
    let mut engine = GachaEngine::new(config, catalog.clone(), 10);
    let mut state = engine.new_player();
    state.toggle_type(&catalog, "Volador").expect("toggle");
    state.toggle_mastery(&catalog, "Fuego").expect("mastery");

    let draws = 10_000;
    let batch = engine.pull(state, draws);
    let found: Vec<&PullResult> = batch.results.iter().filter(|r| r.is_item()).collect();
    assert_eq!(found.len(), draws as usize);
    let dual = found.iter().filter(|r| r.is_dual_type()).count();
    // 80% dual-only pool, 20% mixed pool split evenly.
    let ratio = dual as f64 / found.len() as f64;
    assert!((ratio - 0.9).abs() < 0.02, "ratio {ratio}");
}

#[test]
fn unmastered_type_never_draws_dual() {
    let catalog = Catalog {
        types: types(&["Fuego"]),
        rarity_weights: rarities(&[("comun", 1.0)]),
        items: vec![
            item("Charmander", &["Fuego"], "comun"),
            item("Charizard", &["Fuego", "Volador"], "comun"),
        ],
    };
    let config = GachaConfig {
        legendary_hard_pity: u32::MAX,
        rare_soft_pity: u32::MAX,
        ..GachaConfig::default()
    };
    let mut engine = GachaEngine::new(config, catalog, 11);
    let state = engine.new_player();
    let batch = engine.pull(state, 200);
    assert!(batch.results.iter().all(|r| r.name == "Charmander"));
}

#[test]
fn guaranteed_pull_leaves_state_alone() {
    let catalog = Catalog {
        types: types(&["Planta"]),
        rarity_weights: rarities(&[("comun", 1.0)]),
        items: vec![
            item("Bulbasaur", &["Planta"], "comun"),
            item("Celebi", &["Planta", "Psiquico"], "legendario"),
        ],
    };
    let mut engine = GachaEngine::new(GachaConfig::default(), catalog, 12);
    let mut state = engine.new_player();
    state.legendary_pity = 40;
    state.rare_pity = 4;
    state.collected.insert("Bulbasaur".to_string());
    state.history.push(PullResult::search_failure("Planta", "raro"));
    let before = state.clone();
    let result = engine.guaranteed_pull(&state, "legendario");
    assert_eq!(result.kind, ResultKind::NoMatch);
    assert_eq!(result.rarity, "N/A");
    assert_eq!(state, before);
}
