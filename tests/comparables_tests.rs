// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::make_asset;
use fleetdesk::portfolio::{find_comparables, similarity};

#[test]
fn near_identical_assets_score_near_one_hundred() {
    let target = make_asset(1, "Truck", 20_000.0);
    let mut other = make_asset(2, "Truck", 21_000.0);
    other.manufacturer = target.manufacturer.clone();
    other.year = target.year;

    // Only the 5% FMV distance costs points: 0.05 * 20 = 1.
    let score = similarity(&target, &other);
    assert!((score - 99.0).abs() < 1e-9);
}

#[test]
fn similarity_penalties_stack() {
    let target = make_asset(1, "Truck", 20_000.0);
    let mut other = make_asset(2, "Tractor", 20_000.0);
    other.manufacturer = "Ford".to_string();
    other.year = Some(2010); // 8 years out, capped at 20

    let score = similarity(&target, &other);
    assert_eq!(score, 100.0 - 30.0 - 15.0 - 20.0);
}

#[test]
fn similarity_never_goes_negative() {
    let target = make_asset(1, "Truck", 1_000.0);
    let mut other = make_asset(2, "Tractor", 5_000.0);
    other.manufacturer = "Ford".to_string();
    other.year = Some(1999);
    assert_eq!(similarity(&target, &other), 0.0);
}

#[test]
fn different_category_never_appears_in_candidates() {
    let target = make_asset(1, "Truck", 20_000.0);
    let same = make_asset(2, "Truck", 21_000.0);
    let other_cat = make_asset(3, "Tractor", 20_000.0);

    let comps = find_comparables(&target, &[target.clone(), same, other_cat], 5);
    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].id, "asset-2");
}

#[test]
fn fmv_window_is_half_of_target() {
    let target = make_asset(1, "Truck", 20_000.0);
    let inside = make_asset(2, "Truck", 29_000.0);
    let outside = make_asset(3, "Truck", 30_500.0);

    let comps = find_comparables(&target, &[target.clone(), inside, outside], 5);
    let ids: Vec<&str> = comps.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["asset-2"]);
}

#[test]
fn truncation_happens_before_ranking() {
    // Six candidates in collection order; the best match sits last. With a
    // limit of five, the first five survive the cut and the best match is
    // never even scored.
    let mut target = make_asset(1, "Truck", 20_000.0);
    target.manufacturer = "Ford".to_string();

    let mut assets = vec![target.clone()];
    for seq in 2..=6 {
        let mut filler = make_asset(seq, "Truck", 26_000.0);
        filler.manufacturer = "Various".to_string();
        filler.year = None;
        assets.push(filler);
    }
    let mut best = make_asset(7, "Truck", 20_000.0);
    best.manufacturer = "Ford".to_string();
    best.year = target.year;
    assets.push(best);

    let comps = find_comparables(&target, &assets, 5);
    assert_eq!(comps.len(), 5);
    assert!(comps.iter().all(|c| c.id != "asset-7"));
    // And the survivors are still ranked best-first.
    for pair in comps.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn comparables_are_deterministic() {
    let target = make_asset(1, "Truck", 20_000.0);
    let assets = vec![
        target.clone(),
        make_asset(2, "Truck", 22_000.0),
        make_asset(3, "Truck", 18_000.0),
    ];
    let first = find_comparables(&target, &assets, 5);
    let second = find_comparables(&target, &assets, 5);
    let ids = |comps: &[fleetdesk::models::ComparableSale]| {
        comps
            .iter()
            .map(|c| (c.id.clone(), c.similarity))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
}
