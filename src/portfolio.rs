// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use rand::Rng;

use crate::models::{
    CategorySlice, ComparableSale, EnrichedAsset, ManufacturerSlice, PerformerEntry,
    PortfolioMetrics, RiskFactors, RiskProfile, TopPerformers,
};
use crate::utils::{round0, round1, round2};

/// Synthetic leverage assumption: 60% of original purchase cost is financed.
const DEBT_RATIO: f64 = 0.6;

/// Fleet-level rollup across the loaded collection. An empty fleet yields
/// zeroed metrics rather than dividing by zero.
pub fn portfolio_metrics(assets: &[EnrichedAsset], rng: &mut impl Rng) -> PortfolioMetrics {
    if assets.is_empty() {
        return PortfolioMetrics::default();
    }

    let total_fmv: f64 = assets.iter().map(|a| a.current_fmv).sum();
    let total_book_value: f64 = assets.iter().map(|a| a.book_value).sum();
    let total_unrealized_gl: f64 = assets.iter().map(|a| a.unrealized_gl).sum();
    let total_purchase: f64 = assets.iter().map(|a| a.purchase_price).sum();

    let total_debt = round0(total_purchase * DEBT_RATIO);
    let equity = total_fmv - total_debt;
    let ltv = if total_fmv > 0.0 {
        round1(total_debt / total_fmv * 100.0)
    } else {
        0.0
    };

    // Simulated month-over-month drift of 2-5% of FMV.
    let mom_change = total_fmv * (0.02 + rng.gen_range(0.0..1.0) * 0.03);
    let mom_change_percent = if total_fmv > mom_change {
        round2(mom_change / (total_fmv - mom_change) * 100.0)
    } else {
        0.0
    };

    let portfolio_roi = if total_book_value > 0.0 {
        round1(total_unrealized_gl / total_book_value * 100.0)
    } else {
        0.0
    };

    // Simulated DSCR: 15% of FMV as annual cash flow against 8% debt service.
    let annual_debt_service = total_debt * 0.08;
    let dscr = if annual_debt_service > 0.0 {
        round2(total_fmv * 0.15 / annual_debt_service)
    } else {
        0.0
    };

    let category_breakdown = category_breakdown(assets);
    let risk_profile = risk_profile(assets, ltv, &category_breakdown);

    PortfolioMetrics {
        total_fmv,
        total_book_value,
        total_unrealized_gl,
        total_debt,
        equity,
        ltv,
        mom_change,
        mom_change_percent,
        portfolio_roi,
        dscr,
        asset_count: assets.len(),
        average_fmv: round0(total_fmv / assets.len() as f64),
        average_age: average_age(assets),
        category_breakdown,
        manufacturer_breakdown: manufacturer_breakdown(assets),
        risk_profile: Some(risk_profile),
    }
}

/// Mean age in years over the assets with a known model year, rounded.
pub fn average_age(assets: &[EnrichedAsset]) -> f64 {
    let current_year = Utc::now().year();
    let ages: Vec<i32> = assets
        .iter()
        .filter_map(|a| a.year)
        .map(|y| current_year - y)
        .collect();
    if ages.is_empty() {
        return 0.0;
    }
    round0(ages.iter().sum::<i32>() as f64 / ages.len() as f64)
}

fn category_breakdown(assets: &[EnrichedAsset]) -> Vec<CategorySlice> {
    let mut by_category: HashMap<&str, (usize, f64)> = HashMap::new();
    for asset in assets {
        let entry = by_category.entry(asset.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += asset.current_fmv;
    }
    let mut slices: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(category, (count, fmv))| CategorySlice {
            category: category.to_string(),
            count,
            fmv,
            percentage: round1(count as f64 / assets.len() as f64 * 100.0),
        })
        .collect();
    slices.sort_by(|a, b| b.fmv.total_cmp(&a.fmv));
    slices
}

fn manufacturer_breakdown(assets: &[EnrichedAsset]) -> Vec<ManufacturerSlice> {
    let mut by_manufacturer: HashMap<&str, (usize, f64)> = HashMap::new();
    for asset in assets {
        let entry = by_manufacturer
            .entry(asset.manufacturer.as_str())
            .or_default();
        entry.0 += 1;
        entry.1 += asset.current_fmv;
    }
    let mut slices: Vec<ManufacturerSlice> = by_manufacturer
        .into_iter()
        .map(|(manufacturer, (count, fmv))| ManufacturerSlice {
            manufacturer: manufacturer.to_string(),
            count,
            fmv,
            percentage: round1(count as f64 / assets.len() as f64 * 100.0),
        })
        .collect();
    slices.sort_by(|a, b| b.fmv.total_cmp(&a.fmv));
    slices
}

/// Additive band scoring over leverage, fleet age, category concentration,
/// and the share of underwater assets, clamped to 0-100.
fn risk_profile(
    assets: &[EnrichedAsset],
    ltv: f64,
    categories: &[CategorySlice],
) -> RiskProfile {
    let mut score: f64 = 0.0;

    if ltv > 80.0 {
        score += 30.0;
    } else if ltv > 65.0 {
        score += 20.0;
    } else if ltv > 50.0 {
        score += 10.0;
    }

    let avg_age = average_age(assets);
    if avg_age > 10.0 {
        score += 25.0;
    } else if avg_age > 7.0 {
        score += 15.0;
    } else if avg_age > 5.0 {
        score += 8.0;
    }

    let concentration = categories
        .iter()
        .map(|c| c.percentage)
        .fold(0.0f64, f64::max);
    if concentration > 60.0 {
        score += 20.0;
    } else if concentration > 40.0 {
        score += 10.0;
    }

    let underwater = assets.iter().filter(|a| a.unrealized_gl < 0.0).count();
    let negative_gl = underwater as f64 / assets.len() as f64 * 100.0;
    if negative_gl > 40.0 {
        score += 15.0;
    } else if negative_gl > 25.0 {
        score += 8.0;
    }

    let score = score.min(100.0);
    let level = if score > 60.0 {
        "high"
    } else if score > 30.0 {
        "medium"
    } else {
        "low"
    };

    RiskProfile {
        score,
        level: level.to_string(),
        factors: RiskFactors {
            ltv,
            avg_age,
            concentration,
            negative_gl: round1(negative_gl),
        },
    }
}

/// Top and bottom performers by unrealized gain/loss percentage. Losers come
/// back worst-first.
pub fn top_performers(assets: &[EnrichedAsset], limit: usize) -> TopPerformers {
    let mut sorted: Vec<&EnrichedAsset> = assets.iter().collect();
    sorted.sort_by(|a, b| b.unrealized_gl_percent.total_cmp(&a.unrealized_gl_percent));

    let entry = |a: &EnrichedAsset| PerformerEntry {
        id: a.id.clone(),
        title: a.title.clone(),
        category: a.category.clone(),
        unrealized_gl: a.unrealized_gl,
        unrealized_gl_percent: a.unrealized_gl_percent,
        current_fmv: a.current_fmv,
    };

    let gainers = sorted.iter().take(limit).map(|a| entry(a)).collect();
    let losers = sorted
        .iter()
        .rev()
        .take(limit)
        .map(|a| entry(a))
        .collect();
    TopPerformers { gainers, losers }
}

pub const DEFAULT_COMPARABLE_LIMIT: usize = 5;

/// Candidates are same-category assets (excluding the target) whose FMV is
/// within 50% of the target's. The candidate list is truncated to `limit`
/// in collection order BEFORE ranking; later candidates never compete even
/// if they would score higher.
pub fn find_comparables(
    target: &EnrichedAsset,
    assets: &[EnrichedAsset],
    limit: usize,
) -> Vec<ComparableSale> {
    let mut comparables: Vec<ComparableSale> = assets
        .iter()
        .filter(|a| {
            a.id != target.id
                && a.category == target.category
                && (a.current_fmv - target.current_fmv).abs() < target.current_fmv * 0.5
        })
        .take(limit)
        .map(|a| ComparableSale {
            id: a.id.clone(),
            title: a.title.clone(),
            auction_price: a.auction_price,
            auction_date: a.auction_date,
            current_fmv: a.current_fmv,
            similarity: similarity(target, a),
        })
        .collect();
    comparables.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    comparables
}

/// 0-100 similarity: penalize category and manufacturer mismatches, model
/// year distance (5 points per year, capped at 20), and relative FMV
/// distance (up to 20). The category penalty is unreachable through
/// `find_comparables` but kept for direct scoring of arbitrary pairs.
pub fn similarity(target: &EnrichedAsset, other: &EnrichedAsset) -> f64 {
    let mut score = 100.0;

    if target.category != other.category {
        score -= 30.0;
    }
    if target.manufacturer != other.manufacturer {
        score -= 15.0;
    }
    if let (Some(y1), Some(y2)) = (target.year, other.year) {
        score -= (f64::from((y1 - y2).abs()) * 5.0).min(20.0);
    }
    if target.current_fmv > 0.0 {
        let price_distance = (target.current_fmv - other.current_fmv).abs() / target.current_fmv;
        score -= price_distance * 20.0;
    }

    score.max(0.0)
}
