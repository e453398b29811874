// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use fleetdesk::models::EnrichedAsset;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A hand-built enriched asset with internally consistent financial fields.
/// Tests tweak individual fields after construction.
pub fn make_asset(seq: usize, category: &str, fmv: f64) -> EnrichedAsset {
    let purchase_price = (fmv * 0.9).round();
    let book_value = (purchase_price * 0.8).round();
    let unrealized_gl = fmv - book_value;
    EnrichedAsset {
        id: format!("asset-{seq}"),
        auction_id: format!("AUC-{seq}"),
        lot_number: format!("{seq}"),
        title: format!("Test Lot {seq}"),
        description: String::new(),
        serial_number: "N/A".to_string(),
        category: category.to_string(),
        manufacturer: "Various".to_string(),
        year: Some(2018),
        usage: None,
        auction_price: fmv,
        auction_date: date(2024, 6, 1),
        purchase_price,
        purchase_date: date(2022, 6, 1),
        current_fmv: fmv,
        book_value,
        accumulated_depreciation: purchase_price - book_value,
        depreciation_rate: 0.14,
        unrealized_gl,
        unrealized_gl_percent: if book_value > 0.0 {
            (unrealized_gl / book_value * 1000.0).round() / 10.0
        } else {
            0.0
        },
        condition_score: 80.0,
        liquidation_readiness: 74.0,
        price_history_30_day: Vec::new(),
        tax_basis: purchase_price,
        section_1245_recapture: ((purchase_price - book_value) * 0.7).round(),
        section_1231_gain: if unrealized_gl > 0.0 {
            (unrealized_gl * 0.3).round()
        } else {
            0.0
        },
        comparable_sales: Vec::new(),
        confidence_score: 75.0,
        created_at: Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
