// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

/// Parse a currency-formatted amount like "$12,500.00".
/// Strict: anything left over after stripping `$` and `,` must be a finite,
/// non-negative number. Rows failing this are rejected at ingestion.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value = cleaned.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%B %d, %Y"];

/// Auction exports are inconsistent about date formatting; try the shapes
/// seen in the wild and give up otherwise.
pub fn parse_auction_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Round to whole dollars, matching how every synthesized money figure is
/// stored.
pub fn round0(value: f64) -> f64 {
    value.round()
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
