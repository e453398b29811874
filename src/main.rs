// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fleetdesk::{api, cli, ingest, store::AssetStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = cli::build_cli().get_matches();
    let port: u16 = matches
        .get_one::<String>("port")
        .map(String::as_str)
        .unwrap_or("3001")
        .parse()
        .context("Invalid port")?;
    let data_path = matches.get_one::<String>("data").map(Path::new);
    let seed = matches
        .get_one::<String>("seed")
        .map(|s| s.parse::<u64>().context("Invalid seed"))
        .transpose()?;

    let assets = ingest::load_portfolio(data_path, seed);

    let store = Arc::new(AssetStore::new());
    store.load(assets);
    tracing::info!(count = store.asset_count(), "enriched auction assets loaded");

    let router = api::app_router(store);
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("Bind port {port}"))?;
    tracing::info!("listening on http://0.0.0.0:{port}");
    axum::serve(listener, router).await?;
    Ok(())
}
