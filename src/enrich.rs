// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use rand::Rng;

use crate::classify;
use crate::models::{EnrichedAsset, PricePoint, RawRecord, UsageKind};
use crate::utils::{parse_auction_date, parse_currency, round0, round1};

/// Annual depreciation rate by category; everything unlisted uses the default.
const DEPRECIATION_RATES: &[(&str, f64)] = &[
    ("Truck", 0.15),
    ("Dump Truck", 0.12),
    ("Tractor", 0.10),
    ("Skid Steer", 0.12),
    ("Telehandler", 0.11),
];
const DEFAULT_DEPRECIATION_RATE: f64 = 0.14;

/// Categories the resale market clears quickly.
const HIGH_DEMAND_CATEGORIES: &[&str] = &["Truck", "Tractor", "Skid Steer"];

const PRICE_HISTORY_DAYS: u64 = 30;
const PRICE_HISTORY_VOLATILITY: f64 = 0.05;

/// The four synthetic purchase regimes. Bucketing a single uniform draw
/// through fixed thresholds guarantees the loaded fleet shows winners and
/// losers in roughly these proportions (35/20/20/25).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRegime {
    StrongWinner,
    MildWinner,
    MildLoser,
    StrongLoser,
}

pub fn regime_for(draw: f64) -> PurchaseRegime {
    if draw < 0.35 {
        PurchaseRegime::StrongWinner
    } else if draw < 0.55 {
        PurchaseRegime::MildWinner
    } else if draw < 0.75 {
        PurchaseRegime::MildLoser
    } else {
        PurchaseRegime::StrongLoser
    }
}

pub fn depreciation_rate(category: &str) -> f64 {
    DEPRECIATION_RATES
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_DEPRECIATION_RATE)
}

/// Enrich the whole batch, assigning sequential ids in input order.
/// Rows whose Price does not parse are dropped and counted; the caller
/// logs the skip count.
pub fn enrich_all(
    records: Vec<RawRecord>,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> (Vec<EnrichedAsset>, usize) {
    let mut assets = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match enrich(record, assets.len() + 1, today, rng) {
            Some(asset) => assets.push(asset),
            None => skipped += 1,
        }
    }
    (assets, skipped)
}

/// Derive the full financial profile for one auction row.
pub fn enrich(
    record: RawRecord,
    seq: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Option<EnrichedAsset> {
    let title = record.title?;
    let auction_price = parse_currency(record.price.as_deref()?)?;
    let description = record.description.unwrap_or_default();

    let category = classify::categorize(&title).to_string();
    let manufacturer = classify::extract_manufacturer(&title).to_string();
    let year = classify::extract_year(&title);
    let usage = classify::extract_usage(&description);

    // Unparseable auction dates count as auctioned today: zero elapsed
    // months, zero market drift.
    let auction_date = record
        .date
        .as_deref()
        .and_then(parse_auction_date)
        .unwrap_or(today);
    let months_since_auction =
        (today.signed_duration_since(auction_date).num_days().max(0) as f64) / 30.0;

    // FMV drifts off the hammer price; older sales can drift further.
    let market_adjustment =
        1.0 + (rng.gen_range(0.0..1.0) * 0.2 - 0.05) * (months_since_auction / 12.0);
    let current_fmv = round0(auction_price * market_adjustment);

    let (purchase_date, purchase_price) = purchase_profile(current_fmv, today, rng);

    let rate = depreciation_rate(&category);
    let age_years =
        (today.signed_duration_since(purchase_date).num_days().max(0) as f64) / 365.0;
    let raw_depreciation = purchase_price * (1.0 - (1.0 - rate).powf(age_years));
    // Book value never decays below 10% of what was paid.
    let book_value = round0((purchase_price - raw_depreciation).max(purchase_price * 0.1));
    let accumulated_depreciation = round0(raw_depreciation);

    let unrealized_gl = current_fmv - book_value;
    let unrealized_gl_percent = if book_value > 0.0 {
        round1(unrealized_gl / book_value * 100.0)
    } else {
        0.0
    };

    let age_score = match year {
        Some(y) => (100.0 - f64::from(today.year() - y) * 5.0).max(40.0),
        None => 70.0,
    };
    let usage_score = match usage {
        Some(u) => {
            let threshold = match u.kind {
                UsageKind::Miles => 2000.0,
                UsageKind::Hours => 100.0,
            };
            (100.0 - u.value as f64 / threshold).max(50.0)
        }
        None => 75.0,
    };
    let condition_score = round0((age_score + usage_score) / 2.0);

    let demand_score = if HIGH_DEMAND_CATEGORIES.contains(&category.as_str()) {
        85.0
    } else {
        65.0
    };
    let liquidation_readiness = round0(condition_score * 0.4 + demand_score * 0.6);

    let price_history_30_day = price_history(current_fmv, today, rng);

    let section_1245_recapture = round0(accumulated_depreciation * 0.7);
    let section_1231_gain = if unrealized_gl > 0.0 {
        round0(unrealized_gl * 0.3)
    } else {
        0.0
    };

    let confidence_score = round0(65.0 + rng.gen_range(0.0..1.0) * 25.0);

    Some(EnrichedAsset {
        id: format!("asset-{seq}"),
        auction_id: record.auction_id.unwrap_or_default(),
        lot_number: record.lot_number.unwrap_or_default(),
        title,
        description,
        serial_number: record
            .serial_number
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "N/A".to_string()),
        category,
        manufacturer,
        year,
        usage,
        auction_price,
        auction_date,
        purchase_price,
        purchase_date,
        current_fmv,
        book_value,
        accumulated_depreciation,
        depreciation_rate: rate,
        unrealized_gl,
        unrealized_gl_percent,
        condition_score,
        liquidation_readiness,
        price_history_30_day,
        tax_basis: purchase_price,
        section_1245_recapture,
        section_1231_gain,
        comparable_sales: Vec::new(),
        confidence_score,
        created_at: purchase_date
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default()
            .and_utc(),
        updated_at: Utc::now(),
    })
}

/// Pick a purchase regime and synthesize when the asset was bought and for
/// how much, as a fraction of today's FMV.
fn purchase_profile(
    current_fmv: f64,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> (NaiveDate, f64) {
    let (months_ago, factor) = match regime_for(rng.gen_range(0.0..1.0)) {
        // Bought 2-5 years ago at 60-80% of today's FMV.
        PurchaseRegime::StrongWinner => (
            12 * (2 + rng.gen_range(0..3u32)),
            0.60 + rng.gen_range(0.0..1.0) * 0.20,
        ),
        // Bought 1-3 years ago at 80-95%.
        PurchaseRegime::MildWinner => (
            12 * (1 + rng.gen_range(0..2u32)),
            0.80 + rng.gen_range(0.0..1.0) * 0.15,
        ),
        // Bought 6-18 months ago at 105-120%.
        PurchaseRegime::MildLoser => (
            6 + rng.gen_range(0..12u32),
            1.05 + rng.gen_range(0.0..1.0) * 0.15,
        ),
        // Bought 3-12 months ago at 120-145%.
        PurchaseRegime::StrongLoser => (
            3 + rng.gen_range(0..9u32),
            1.20 + rng.gen_range(0.0..1.0) * 0.25,
        ),
    };
    let purchase_date = today
        .checked_sub_months(Months::new(months_ago))
        .unwrap_or(today);
    (purchase_date, round0(current_fmv * factor))
}

/// Thirty days of synthetic daily marks around current FMV. Each day is an
/// independent draw within +/- half the volatility, not a smoothed walk.
fn price_history(current_fmv: f64, today: NaiveDate, rng: &mut impl Rng) -> Vec<PricePoint> {
    (0..PRICE_HISTORY_DAYS)
        .rev()
        .map(|days_back| {
            let factor = 1.0 + (rng.gen_range(0.0..1.0) - 0.5) * PRICE_HISTORY_VOLATILITY;
            PricePoint {
                date: today.checked_sub_days(Days::new(days_back)).unwrap_or(today),
                price: round0(current_fmv * factor),
            }
        })
        .collect()
}
