// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod assets;
pub mod market;
pub mod portfolio;
pub mod scenarios;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::AssetStore;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: chrono::DateTime<Utc>,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// Full application router. The SPA client runs on a different origin, so
/// CORS stays permissive.
pub fn app_router(store: Arc<AssetStore>) -> Router {
    Router::new()
        .nest("/api/assets", assets::router())
        .nest("/api/portfolio", portfolio::router())
        .nest("/api/market", market::router())
        .nest("/api/scenarios", scenarios::router())
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
