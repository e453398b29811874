// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{PortfolioMetrics, TopPerformers};
use crate::portfolio::{portfolio_metrics, top_performers};
use crate::store::AssetStore;

const TOP_PERFORMER_LIMIT: usize = 5;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsResponse {
    #[serde(flatten)]
    metrics: PortfolioMetrics,
    top_performers: TopPerformers,
}

async fn metrics(State(store): State<Arc<AssetStore>>) -> ApiResult<Json<MetricsResponse>> {
    let assets = store.all();
    let metrics = portfolio_metrics(&assets, &mut rand::thread_rng());
    let top_performers = top_performers(&assets, TOP_PERFORMER_LIMIT);
    Ok(Json(MetricsResponse {
        metrics,
        top_performers,
    }))
}

pub fn router() -> Router<Arc<AssetStore>> {
    Router::new().route("/metrics", get(metrics))
}
