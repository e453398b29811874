// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::make_asset;
use fleetdesk::portfolio::{portfolio_metrics, top_performers};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn empty_fleet_yields_zeroed_metrics() {
    let mut rng = StdRng::seed_from_u64(1);
    let metrics = portfolio_metrics(&[], &mut rng);
    assert_eq!(metrics.asset_count, 0);
    assert_eq!(metrics.total_fmv, 0.0);
    assert_eq!(metrics.ltv, 0.0);
    assert_eq!(metrics.portfolio_roi, 0.0);
    assert!(metrics.category_breakdown.is_empty());
    assert!(metrics.risk_profile.is_none());
}

#[test]
fn totals_and_leverage() {
    let assets = vec![
        make_asset(1, "Truck", 20_000.0),
        make_asset(2, "Tractor", 30_000.0),
    ];
    let mut rng = StdRng::seed_from_u64(1);
    let metrics = portfolio_metrics(&assets, &mut rng);

    let total_purchase: f64 = assets.iter().map(|a| a.purchase_price).sum();
    let total_fmv = 50_000.0;
    let total_debt = (total_purchase * 0.6).round();

    assert_eq!(metrics.asset_count, 2);
    assert_eq!(metrics.total_fmv, total_fmv);
    assert_eq!(metrics.total_debt, total_debt);
    assert_eq!(metrics.equity, total_fmv - total_debt);
    assert_eq!(
        metrics.ltv,
        (total_debt / total_fmv * 1000.0).round() / 10.0
    );
    assert_eq!(metrics.average_fmv, 25_000.0);

    // MoM drift is random but bounded to 2-5% of FMV.
    assert!(metrics.mom_change >= total_fmv * 0.02);
    assert!(metrics.mom_change <= total_fmv * 0.05);
}

#[test]
fn breakdowns_sort_by_fmv_descending() {
    let assets = vec![
        make_asset(1, "Truck", 10_000.0),
        make_asset(2, "Tractor", 40_000.0),
        make_asset(3, "Truck", 15_000.0),
    ];
    let mut rng = StdRng::seed_from_u64(1);
    let metrics = portfolio_metrics(&assets, &mut rng);

    let breakdown = &metrics.category_breakdown;
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category, "Tractor");
    assert_eq!(breakdown[0].fmv, 40_000.0);
    assert_eq!(breakdown[0].count, 1);
    assert_eq!(breakdown[0].percentage, 33.3);
    assert_eq!(breakdown[1].category, "Truck");
    assert_eq!(breakdown[1].count, 2);
    assert_eq!(breakdown[1].percentage, 66.7);
}

#[test]
fn risk_scoring_follows_the_band_table() {
    // Two categories at 50/50 keeps concentration in the 40-60 band (+10).
    // make_asset yields positive G/L, zero underwater share, age 7 from
    // model year 2018 (+8), and LTV ~54 (+10).
    let assets = vec![
        make_asset(1, "Truck", 20_000.0),
        make_asset(2, "Tractor", 30_000.0),
    ];
    let mut rng = StdRng::seed_from_u64(1);
    let metrics = portfolio_metrics(&assets, &mut rng);
    let risk = metrics.risk_profile.as_ref().unwrap();

    assert!(risk.score >= 0.0 && risk.score <= 100.0);
    assert_eq!(risk.factors.ltv, metrics.ltv);
    assert_eq!(risk.factors.negative_gl, 0.0);
    assert_eq!(risk.factors.concentration, 50.0);
    assert_eq!(
        risk.level,
        if risk.score > 60.0 {
            "high"
        } else if risk.score > 30.0 {
            "medium"
        } else {
            "low"
        }
    );
}

#[test]
fn underwater_fleet_raises_the_risk_score() {
    let healthy: Vec<_> = (1..=4).map(|i| make_asset(i, "Truck", 20_000.0)).collect();
    let mut underwater = healthy.clone();
    for asset in &mut underwater {
        asset.unrealized_gl = -1_000.0;
        asset.unrealized_gl_percent = -5.0;
    }

    let mut rng = StdRng::seed_from_u64(1);
    let healthy_score = portfolio_metrics(&healthy, &mut rng)
        .risk_profile
        .unwrap()
        .score;
    let underwater_score = portfolio_metrics(&underwater, &mut rng)
        .risk_profile
        .unwrap()
        .score;
    assert_eq!(underwater_score, healthy_score + 15.0);
}

#[test]
fn worst_case_fleet_scores_every_band() {
    // Highly leveraged, old, single-category, fully underwater: every band
    // fires for 30 + 25 + 20 + 15 = 90, still under the 100 cap.
    let assets: Vec<_> = (1..=2)
        .map(|i| {
            let mut asset = make_asset(i, "Truck", 20_000.0);
            asset.purchase_price = 30_000.0;
            asset.year = Some(2010);
            asset.unrealized_gl = -1_000.0;
            asset.unrealized_gl_percent = -5.0;
            asset
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(1);
    let metrics = portfolio_metrics(&assets, &mut rng);
    let risk = metrics.risk_profile.unwrap();

    assert_eq!(risk.score, 90.0);
    assert!(risk.score <= 100.0);
    assert_eq!(risk.level, "high");
    assert_eq!(risk.factors.concentration, 100.0);
    assert_eq!(risk.factors.negative_gl, 100.0);
}

#[test]
fn top_performers_ranks_by_gl_percent() {
    let mut a = make_asset(1, "Truck", 20_000.0);
    a.unrealized_gl_percent = 12.0;
    let mut b = make_asset(2, "Truck", 20_000.0);
    b.unrealized_gl_percent = -8.0;
    let mut c = make_asset(3, "Truck", 20_000.0);
    c.unrealized_gl_percent = 30.0;

    let performers = top_performers(&[a, b, c], 2);
    let gainer_ids: Vec<&str> = performers.gainers.iter().map(|p| p.id.as_str()).collect();
    let loser_ids: Vec<&str> = performers.losers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(gainer_ids, vec!["asset-3", "asset-1"]);
    // Losers come back worst-first.
    assert_eq!(loser_ids, vec!["asset-2", "asset-1"]);
}
