// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Mock market intelligence: synthetic commodity, fuel, and weather signals
//! plus a derived sentiment score. Entirely independent of the asset
//! pipeline; regenerated on every request.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::PricePoint;
use crate::utils::round2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityQuote {
    pub name: String,
    pub current_price: f64,
    pub unit: String,
    pub change: f64,
    pub change_percent: f64,
    pub trend: String,
    #[serde(rename = "history30Day")]
    pub history_30_day: Vec<PricePoint>,
    pub volume: String,
    pub seasonal_percentile: u32,
    pub forecast: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommodityBoard {
    pub corn: CommodityQuote,
    pub soybeans: CommodityQuote,
    pub wheat: CommodityQuote,
    pub cattle: CommodityQuote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DieselIndex {
    pub current_price: f64,
    pub unit: String,
    pub change: f64,
    pub change_percent: f64,
    pub trend: String,
    #[serde(rename = "history30Day")]
    pub history_30_day: Vec<PricePoint>,
    pub yoy_change: f64,
    pub yoy_change_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub kind: String,
    pub regions: Vec<String>,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precipitation {
    pub national: String,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherOutlook {
    pub volatility_score: u32,
    pub condition: String,
    pub alerts: Vec<WeatherAlert>,
    pub precipitation: Precipitation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastReport {
    pub date: NaiveDate,
    pub impact: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaReports {
    pub next_report: NaiveDate,
    pub days_until: u32,
    pub report_type: String,
    pub last_report: LastReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    pub value: f64,
    pub sentiment: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSignals {
    pub commodities: CommodityBoard,
    pub diesel: DieselIndex,
    pub weather: WeatherOutlook,
    pub usda: UsdaReports,
    pub ai_score: SentimentScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FmvCorrelations {
    pub corn: f64,
    pub soybeans: f64,
    pub wheat: f64,
    pub cattle: f64,
    pub diesel: f64,
    pub overall: f64,
}

/// Bounded random walk: daily steps within +/- half the volatility, floored
/// at 80% of the base price.
fn price_history(
    base_price: f64,
    days: u64,
    volatility: f64,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<PricePoint> {
    let mut price = base_price;
    (0..days)
        .rev()
        .map(|days_back| {
            let change = (rng.gen_range(0.0..1.0) - 0.5) * volatility * base_price;
            price = (price + change).max(base_price * 0.8);
            PricePoint {
                date: today.checked_sub_days(Days::new(days_back)).unwrap_or(today),
                price: round2(price),
            }
        })
        .collect()
}

pub fn commodity_board(today: NaiveDate, rng: &mut impl Rng) -> CommodityBoard {
    CommodityBoard {
        corn: CommodityQuote {
            name: "Corn".to_string(),
            current_price: 4.85,
            unit: "bu".to_string(),
            change: 0.12,
            change_percent: 2.54,
            trend: "up".to_string(),
            history_30_day: price_history(4.73, 30, 0.03, today, rng),
            volume: "245.3M".to_string(),
            seasonal_percentile: 68,
            forecast: "bullish".to_string(),
        },
        soybeans: CommodityQuote {
            name: "Soybeans".to_string(),
            current_price: 13.42,
            unit: "bu".to_string(),
            change: -0.08,
            change_percent: -0.59,
            trend: "down".to_string(),
            history_30_day: price_history(13.50, 30, 0.04, today, rng),
            volume: "189.7M".to_string(),
            seasonal_percentile: 55,
            forecast: "neutral".to_string(),
        },
        wheat: CommodityQuote {
            name: "Wheat".to_string(),
            current_price: 6.18,
            unit: "bu".to_string(),
            change: 0.05,
            change_percent: 0.82,
            trend: "up".to_string(),
            history_30_day: price_history(6.13, 30, 0.05, today, rng),
            volume: "112.4M".to_string(),
            seasonal_percentile: 72,
            forecast: "bullish".to_string(),
        },
        cattle: CommodityQuote {
            name: "Cattle".to_string(),
            current_price: 178.25,
            unit: "cwt".to_string(),
            change: 1.75,
            change_percent: 0.99,
            trend: "up".to_string(),
            history_30_day: price_history(176.50, 30, 0.02, today, rng),
            volume: "45.2K".to_string(),
            seasonal_percentile: 81,
            forecast: "bullish".to_string(),
        },
    }
}

pub fn diesel_index(today: NaiveDate, rng: &mut impl Rng) -> DieselIndex {
    DieselIndex {
        current_price: 4.12,
        unit: "gallon".to_string(),
        change: -0.08,
        change_percent: -1.9,
        trend: "down".to_string(),
        history_30_day: price_history(4.20, 30, 0.04, today, rng),
        yoy_change: 0.45,
        yoy_change_percent: 12.3,
    }
}

pub fn weather_outlook(rng: &mut impl Rng) -> WeatherOutlook {
    let volatility_score = rng.gen_range(0..100u32);
    let condition = if volatility_score > 70 {
        "volatile"
    } else if volatility_score > 40 {
        "moderate"
    } else {
        "stable"
    };
    WeatherOutlook {
        volatility_score,
        condition: condition.to_string(),
        alerts: vec![
            WeatherAlert {
                kind: "drought".to_string(),
                regions: vec!["Southwest".to_string()],
                severity: "moderate".to_string(),
            },
            WeatherAlert {
                kind: "frost".to_string(),
                regions: vec!["Northern Plains".to_string()],
                severity: "low".to_string(),
            },
        ],
        precipitation: Precipitation {
            national: "above-average".to_string(),
            trend: "increasing".to_string(),
        },
    }
}

pub fn usda_reports(today: NaiveDate) -> UsdaReports {
    UsdaReports {
        next_report: today.checked_add_days(Days::new(8)).unwrap_or(today),
        days_until: 8,
        report_type: "Crop Production".to_string(),
        last_report: LastReport {
            date: today.checked_sub_days(Days::new(30)).unwrap_or(today),
            impact: "bullish".to_string(),
            summary: "Lower than expected yields reported across Midwest".to_string(),
        },
    }
}

/// Composite headwind/tailwind score (-100..+100) blended from commodity
/// momentum, fuel cost, and weather volatility.
pub fn market_signals(today: NaiveDate, rng: &mut impl Rng) -> MarketSignals {
    let commodities = commodity_board(today, rng);
    let diesel = diesel_index(today, rng);
    let weather = weather_outlook(rng);
    let usda = usda_reports(today);

    let commodity_score = (commodities.corn.change_percent
        + commodities.soybeans.change_percent
        + commodities.wheat.change_percent)
        / 3.0
        * 10.0;
    let diesel_score = -diesel.change_percent * 5.0;
    let weather_score = if weather.volatility_score > 70 {
        -15.0
    } else if weather.volatility_score < 40 {
        10.0
    } else {
        0.0
    };

    let value = (commodity_score + diesel_score + weather_score).round();
    let sentiment = if value > 20.0 {
        "strong-tailwind"
    } else if value > 0.0 {
        "tailwind"
    } else if value > -20.0 {
        "headwind"
    } else {
        "strong-headwind"
    };

    MarketSignals {
        commodities,
        diesel,
        weather,
        usda,
        ai_score: SentimentScore {
            value,
            sentiment: sentiment.to_string(),
            summary: market_summary(value).to_string(),
        },
    }
}

fn market_summary(score: f64) -> &'static str {
    if score > 20.0 {
        "Strong market conditions favor equipment investment. Rising commodity prices and stable fuel costs support portfolio expansion."
    } else if score > 0.0 {
        "Favorable market dynamics present. Moderate commodity gains offset by minor headwinds. Good timing for selective asset repositioning."
    } else if score > -20.0 {
        "Mixed market signals warrant cautious approach. Consider defensive positioning and focus on high-performing assets."
    } else {
        "Market headwinds present challenges. Falling commodity prices and increased volatility suggest prioritizing liquidity and cost management."
    }
}

pub fn fmv_correlations() -> FmvCorrelations {
    FmvCorrelations {
        corn: 0.42,
        soybeans: 0.38,
        wheat: 0.35,
        cattle: 0.28,
        diesel: -0.31,
        overall: 0.36,
    }
}
