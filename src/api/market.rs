// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;

use crate::error::ApiResult;
use crate::market::{
    commodity_board, fmv_correlations, market_signals, CommodityBoard, FmvCorrelations,
    MarketSignals,
};
use crate::store::AssetStore;

async fn commodities() -> ApiResult<Json<CommodityBoard>> {
    let today = Utc::now().date_naive();
    Ok(Json(commodity_board(today, &mut rand::thread_rng())))
}

async fn signals() -> ApiResult<Json<MarketSignals>> {
    let today = Utc::now().date_naive();
    Ok(Json(market_signals(today, &mut rand::thread_rng())))
}

async fn correlations() -> ApiResult<Json<FmvCorrelations>> {
    Ok(Json(fmv_correlations()))
}

pub fn router() -> Router<Arc<AssetStore>> {
    Router::new()
        .route("/commodities", get(commodities))
        .route("/signals", get(signals))
        .route("/correlations", get(correlations))
}
