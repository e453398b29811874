// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{LiquidationInput, Scenario, ScenarioImpact};
use crate::portfolio::portfolio_metrics;
use crate::scenario::scenario_impact;
use crate::store::AssetStore;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateResponse {
    scenario_id: String,
    #[serde(flatten)]
    impact: ScenarioImpact,
}

/// The body is validated by hand so a missing or non-array
/// `selectedAssetIds` maps to a 400, not a generic deserialization
/// rejection.
async fn create_scenario(
    State(store): State<Arc<AssetStore>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<CreateResponse>> {
    let selected_ids: Vec<String> = body
        .get("selectedAssetIds")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::BadRequest("selectedAssetIds must be an array".to_string()))?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    let liquidation_inputs: Vec<LiquidationInput> = body
        .get("liquidationInputs")
        .cloned()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .unwrap_or_default();

    let assets = store.all();
    // Selection keeps collection order; inputs pair positionally.
    let selected: Vec<_> = assets
        .iter()
        .filter(|a| selected_ids.contains(&a.id))
        .cloned()
        .collect();
    if selected.is_empty() {
        return Err(ApiError::BadRequest("No valid assets selected".to_string()));
    }

    let metrics = portfolio_metrics(&assets, &mut rand::thread_rng());
    let impact = scenario_impact(&selected, &liquidation_inputs, &metrics);

    let scenario = Scenario {
        id: format!("scenario-{}", Utc::now().timestamp_millis()),
        created_at: Utc::now(),
        selected_asset_ids: selected_ids,
        liquidation_inputs,
        impact: impact.clone(),
    };
    let scenario_id = scenario.id.clone();
    store.append_scenario(scenario);

    Ok(Json(CreateResponse {
        scenario_id,
        impact,
    }))
}

async fn get_scenario(
    State(store): State<Arc<AssetStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Scenario>> {
    store
        .scenario(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Scenario not found".to_string()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonQuery {
    compare_with: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioValue {
    scenario_id: String,
    value: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LtvChange {
    scenario_id: String,
    before: f64,
    after: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    net_cash: Vec<ScenarioValue>,
    tax_liability: Vec<ScenarioValue>,
    ltv_change: Vec<LtvChange>,
    roi: Vec<ScenarioValue>,
}

#[derive(Serialize)]
struct ComparisonResponse {
    scenarios: Vec<Scenario>,
    comparison: Comparison,
}

/// Side-by-side view of the named scenario against any stored scenarios
/// listed in `compareWith` (comma-separated ids; unknown ids are dropped).
async fn compare_scenarios(
    State(store): State<Arc<AssetStore>>,
    Path(id): Path<String>,
    Query(query): Query<ComparisonQuery>,
) -> ApiResult<Json<ComparisonResponse>> {
    let main = store
        .scenario(&id)
        .ok_or_else(|| ApiError::NotFound("Main scenario not found".to_string()))?;

    let mut scenarios = vec![main];
    if let Some(compare_with) = &query.compare_with {
        for other_id in compare_with.split(',') {
            if let Some(scenario) = store.scenario(other_id.trim()) {
                scenarios.push(scenario);
            }
        }
    }

    let comparison = Comparison {
        net_cash: scenarios
            .iter()
            .map(|s| ScenarioValue {
                scenario_id: s.id.clone(),
                value: s.impact.summary.net_cash,
            })
            .collect(),
        tax_liability: scenarios
            .iter()
            .map(|s| ScenarioValue {
                scenario_id: s.id.clone(),
                value: s.impact.summary.total_tax_liability,
            })
            .collect(),
        ltv_change: scenarios
            .iter()
            .map(|s| LtvChange {
                scenario_id: s.id.clone(),
                before: s.impact.portfolio_impact.before_ltv,
                after: s.impact.portfolio_impact.after_ltv,
            })
            .collect(),
        roi: scenarios
            .iter()
            .map(|s| ScenarioValue {
                scenario_id: s.id.clone(),
                value: s.impact.break_even.roi,
            })
            .collect(),
    };

    Ok(Json(ComparisonResponse {
        scenarios,
        comparison,
    }))
}

pub fn router() -> Router<Arc<AssetStore>> {
    Router::new()
        .route("/", post(create_scenario))
        .route("/{id}", get(get_scenario))
        .route("/{id}/comparison", get(compare_scenarios))
}
