// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One row of the auction export, as it appears in the CSV.
/// Rows missing Title or Price never make it past ingestion.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "AuctionID", default)]
    pub auction_id: Option<String>,
    #[serde(rename = "LotNumber", default)]
    pub lot_number: Option<String>,
    #[serde(rename = "SN", default)]
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageKind {
    Miles,
    Hours,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(rename = "type")]
    pub kind: UsageKind,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// The central entity: one auction lot with its synthesized financial profile.
/// Built once at startup and held in memory for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAsset {
    pub id: String,
    pub auction_id: String,
    pub lot_number: String,
    pub title: String,
    pub description: String,
    pub serial_number: String,
    pub category: String,
    pub manufacturer: String,
    pub year: Option<i32>,
    pub usage: Option<Usage>,

    pub auction_price: f64,
    pub auction_date: NaiveDate,
    pub purchase_price: f64,
    pub purchase_date: NaiveDate,
    #[serde(rename = "currentFMV")]
    pub current_fmv: f64,
    pub book_value: f64,
    pub accumulated_depreciation: f64,
    pub depreciation_rate: f64,
    #[serde(rename = "unrealizedGL")]
    pub unrealized_gl: f64,
    #[serde(rename = "unrealizedGLPercent")]
    pub unrealized_gl_percent: f64,

    pub condition_score: f64,
    pub liquidation_readiness: f64,
    #[serde(rename = "priceHistory30Day")]
    pub price_history_30_day: Vec<PricePoint>,

    pub tax_basis: f64,
    #[serde(rename = "section1245Recapture")]
    pub section_1245_recapture: f64,
    #[serde(rename = "section1231Gain")]
    pub section_1231_gain: f64,

    pub comparable_sales: Vec<ComparableSale>,
    pub confidence_score: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparableSale {
    pub id: String,
    pub title: String,
    pub auction_price: f64,
    pub auction_date: NaiveDate,
    #[serde(rename = "currentFMV")]
    pub current_fmv: f64,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category: String,
    pub count: usize,
    pub fmv: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerSlice {
    pub manufacturer: String,
    pub count: usize,
    pub fmv: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub ltv: f64,
    pub avg_age: f64,
    pub concentration: f64,
    #[serde(rename = "negativeGL")]
    pub negative_gl: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub score: f64,
    pub level: String,
    pub factors: RiskFactors,
}

/// Fleet-level rollup. Stateless: recomputed from the asset collection on
/// every request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    #[serde(rename = "totalFMV")]
    pub total_fmv: f64,
    pub total_book_value: f64,
    #[serde(rename = "totalUnrealizedGL")]
    pub total_unrealized_gl: f64,
    pub total_debt: f64,
    pub equity: f64,
    pub ltv: f64,
    pub mom_change: f64,
    pub mom_change_percent: f64,
    #[serde(rename = "portfolioROI")]
    pub portfolio_roi: f64,
    pub dscr: f64,
    pub asset_count: usize,
    #[serde(rename = "averageFMV")]
    pub average_fmv: f64,
    pub average_age: f64,
    pub category_breakdown: Vec<CategorySlice>,
    pub manufacturer_breakdown: Vec<ManufacturerSlice>,
    pub risk_profile: Option<RiskProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "unrealizedGL")]
    pub unrealized_gl: f64,
    #[serde(rename = "unrealizedGLPercent")]
    pub unrealized_gl_percent: f64,
    #[serde(rename = "currentFMV")]
    pub current_fmv: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformers {
    pub gainers: Vec<PerformerEntry>,
    pub losers: Vec<PerformerEntry>,
}

/// Per-asset sale parameters from the liquidation wizard. The i-th input
/// pairs with the i-th selected asset; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationInput {
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub transport_cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSaleDetail {
    pub asset_id: String,
    pub title: String,
    pub sale_price: f64,
    pub fees: f64,
    pub transport: f64,
    pub gross_proceeds: f64,
    pub net_proceeds: f64,
    pub tax_liability: f64,
    pub after_tax_net: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub total_gross_proceeds: f64,
    pub total_fees: f64,
    pub total_transport: f64,
    pub total_tax_liability: f64,
    pub net_cash: f64,
    pub effective_tax_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioImpact {
    #[serde(rename = "beforeFMV")]
    pub before_fmv: f64,
    #[serde(rename = "afterFMV")]
    pub after_fmv: f64,
    #[serde(rename = "beforeLTV")]
    pub before_ltv: f64,
    #[serde(rename = "afterLTV")]
    pub after_ltv: f64,
    pub cash_generated: f64,
    pub debt_reduction_potential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEven {
    pub months: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    pub asset_details: Vec<AssetSaleDetail>,
    pub summary: ScenarioSummary,
    pub portfolio_impact: PortfolioImpact,
    pub break_even: BreakEven,
}

/// A stored liquidation scenario. Appended to the in-memory history on each
/// POST and lost on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub selected_asset_ids: Vec<String>,
    pub liquidation_inputs: Vec<LiquidationInput>,
    pub impact: ScenarioImpact,
}
