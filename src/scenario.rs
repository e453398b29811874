// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    AssetSaleDetail, BreakEven, EnrichedAsset, LiquidationInput, PortfolioImpact,
    PortfolioMetrics, ScenarioImpact, ScenarioSummary,
};
use crate::utils::round1;

/// Sale commission by disposition method. Unrecognized methods price like an
/// auction sale.
const FEE_RATES: &[(&str, f64)] = &[
    ("DPA Auction", 0.08),
    ("Private", 0.02),
    ("Dealer Trade", 0.05),
];
const DEFAULT_FEE_RATE: f64 = 0.08;

/// Flat simplified federal rates; deliberately not IRC-accurate.
const SECTION_1245_RATE: f64 = 0.24;
const SECTION_1231_RATE: f64 = 0.15;

/// Annual holding cost assumed for break-even: 2% of FMV.
const HOLDING_COST_RATE: f64 = 0.02;

pub fn fee_rate(method: Option<&str>) -> f64 {
    method
        .and_then(|m| {
            FEE_RATES
                .iter()
                .find(|(name, _)| *name == m)
                .map(|(_, rate)| *rate)
        })
        .unwrap_or(DEFAULT_FEE_RATE)
}

/// Net-proceeds and tax impact of hypothetically selling `selected` assets.
/// Inputs pair positionally with the selected assets; a missing input means
/// sell at FMV with default method and transport.
pub fn scenario_impact(
    selected: &[EnrichedAsset],
    inputs: &[LiquidationInput],
    metrics: &PortfolioMetrics,
) -> ScenarioImpact {
    let default_input = LiquidationInput::default();

    let mut total_gross = 0.0;
    let mut total_fees = 0.0;
    let mut total_transport = 0.0;
    let mut total_tax = 0.0;

    let asset_details: Vec<AssetSaleDetail> = selected
        .iter()
        .enumerate()
        .map(|(i, asset)| {
            let input = inputs.get(i).unwrap_or(&default_input);
            let sale_price = input.sale_price.unwrap_or(asset.current_fmv);

            let fees = sale_price * fee_rate(input.method.as_deref());
            let transport = input
                .transport_cost
                .unwrap_or(if sale_price > 10_000.0 { 500.0 } else { 200.0 });

            // Simplified recapture split: depreciation recaptured first at
            // the ordinary-ish rate, remainder as capital-ish gain. A loss
            // flows through section 1245 unchanged.
            let gain = sale_price - asset.tax_basis;
            let section_1245 = gain.min(asset.accumulated_depreciation);
            let section_1231 = (gain - section_1245).max(0.0);
            let tax_liability = section_1245 * SECTION_1245_RATE + section_1231 * SECTION_1231_RATE;

            total_gross += sale_price;
            total_fees += fees;
            total_transport += transport;
            total_tax += tax_liability;

            AssetSaleDetail {
                asset_id: asset.id.clone(),
                title: asset.title.clone(),
                sale_price,
                fees,
                transport,
                gross_proceeds: sale_price,
                net_proceeds: sale_price - fees - transport,
                tax_liability,
                after_tax_net: sale_price - fees - transport - tax_liability,
            }
        })
        .collect();

    let net_cash = total_gross - total_fees - total_transport - total_tax;
    let effective_tax_rate = if total_gross > 0.0 {
        round1(total_tax / total_gross * 100.0)
    } else {
        0.0
    };

    let sold_fmv: f64 = selected.iter().map(|a| a.current_fmv).sum();
    let sold_book: f64 = selected.iter().map(|a| a.book_value).sum();

    // Debt is held constant across the sale; only collateral shrinks.
    let after_fmv = metrics.total_fmv - sold_fmv;
    let after_ltv = if after_fmv > 0.0 {
        round1(metrics.total_debt / after_fmv * 100.0)
    } else {
        0.0
    };

    let roi = if sold_book > 0.0 {
        round1(net_cash / sold_book * 100.0)
    } else {
        0.0
    };

    ScenarioImpact {
        asset_details,
        summary: ScenarioSummary {
            total_gross_proceeds: total_gross,
            total_fees,
            total_transport,
            total_tax_liability: total_tax,
            net_cash,
            effective_tax_rate,
        },
        portfolio_impact: PortfolioImpact {
            before_fmv: metrics.total_fmv,
            after_fmv,
            before_ltv: metrics.ltv,
            after_ltv,
            cash_generated: net_cash,
            debt_reduction_potential: net_cash.min(metrics.total_debt * 0.3),
        },
        break_even: BreakEven {
            months: break_even_months(net_cash, sold_fmv),
            roi,
        },
    }
}

/// Months of avoided holding cost that the net cash represents. Zero
/// holding cost is defined as break-even in zero months.
fn break_even_months(net_cash: f64, sold_fmv: f64) -> f64 {
    let monthly_holding_cost = sold_fmv * HOLDING_COST_RATE / 12.0;
    if monthly_holding_cost == 0.0 {
        return 0.0;
    }
    (net_cash / monthly_holding_cost).round()
}
