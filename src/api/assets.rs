// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::models::EnrichedAsset;
use crate::portfolio::{find_comparables, DEFAULT_COMPARABLE_LIMIT};
use crate::store::AssetStore;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuery {
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Serialize)]
struct AssetList {
    assets: Vec<EnrichedAsset>,
    total: usize,
}

/// Filters are ANDed; search matches title, description, or category
/// case-insensitively.
pub fn filter_and_sort(mut assets: Vec<EnrichedAsset>, query: &AssetQuery) -> Vec<EnrichedAsset> {
    if let Some(category) = &query.category {
        assets.retain(|a| &a.category == category);
    }
    if let Some(manufacturer) = &query.manufacturer {
        assets.retain(|a| &a.manufacturer == manufacturer);
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        assets.retain(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.description.to_lowercase().contains(&needle)
                || a.category.to_lowercase().contains(&needle)
        });
    }
    if let Some(sort_by) = &query.sort_by {
        let descending = query.sort_order.as_deref() == Some("desc");
        assets.sort_by(|a, b| {
            let ord = compare_field(a, b, sort_by);
            if descending { ord.reverse() } else { ord }
        });
    }
    assets
}

/// Generic field comparator over the closed set of sortable wire fields.
/// Unknown fields leave the collection order untouched.
fn compare_field(a: &EnrichedAsset, b: &EnrichedAsset, field: &str) -> Ordering {
    match field {
        "title" => a.title.cmp(&b.title),
        "category" => a.category.cmp(&b.category),
        "manufacturer" => a.manufacturer.cmp(&b.manufacturer),
        "year" => a.year.cmp(&b.year),
        "auctionDate" => a.auction_date.cmp(&b.auction_date),
        "purchaseDate" => a.purchase_date.cmp(&b.purchase_date),
        "auctionPrice" => a.auction_price.total_cmp(&b.auction_price),
        "purchasePrice" => a.purchase_price.total_cmp(&b.purchase_price),
        "currentFMV" => a.current_fmv.total_cmp(&b.current_fmv),
        "bookValue" => a.book_value.total_cmp(&b.book_value),
        "unrealizedGL" => a.unrealized_gl.total_cmp(&b.unrealized_gl),
        "unrealizedGLPercent" => a.unrealized_gl_percent.total_cmp(&b.unrealized_gl_percent),
        "conditionScore" => a.condition_score.total_cmp(&b.condition_score),
        "liquidationReadiness" => a.liquidation_readiness.total_cmp(&b.liquidation_readiness),
        "confidenceScore" => a.confidence_score.total_cmp(&b.confidence_score),
        _ => Ordering::Equal,
    }
}

async fn list_assets(
    State(store): State<Arc<AssetStore>>,
    Query(query): Query<AssetQuery>,
) -> ApiResult<Json<AssetList>> {
    let assets = filter_and_sort(store.all(), &query);
    let total = assets.len();
    Ok(Json(AssetList { assets, total }))
}

async fn get_asset(
    State(store): State<Arc<AssetStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<EnrichedAsset>> {
    let mut asset = store
        .get(&id)
        .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;
    asset.comparable_sales = find_comparables(&asset, &store.all(), DEFAULT_COMPARABLE_LIMIT);
    Ok(Json(asset))
}

pub fn router() -> Router<Arc<AssetStore>> {
    Router::new()
        .route("/", get(list_assets))
        .route("/{id}", get(get_asset))
}
