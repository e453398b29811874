// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::enrich;
use crate::models::{EnrichedAsset, RawRecord};

/// Locations tried when no explicit data path is given, relative to the
/// working directory.
const DEFAULT_DATA_PATHS: &[&str] = &["fleet-auctions.csv", "data/fleet-auctions.csv"];

pub fn discover_data_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    DEFAULT_DATA_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Read raw auction rows. Rows missing Title or Price are skipped here;
/// rows that fail CSV decoding entirely are skipped with a warning.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open auction CSV {}", path.display()))?;

    let mut records = Vec::new();
    for result in rdr.deserialize::<RawRecord>() {
        let record = match result {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(%err, "skipping undecodable CSV row");
                continue;
            }
        };
        let has_title = record.title.as_deref().is_some_and(|s| !s.trim().is_empty());
        let has_price = record.price.as_deref().is_some_and(|s| !s.trim().is_empty());
        if has_title && has_price {
            records.push(record);
        }
    }
    Ok(records)
}

/// One-time startup load: discover the CSV, read it, and run the enrichment
/// batch. A missing or unreadable file is not fatal; the service starts with
/// an empty fleet.
pub fn load_portfolio(explicit: Option<&Path>, seed: Option<u64>) -> Vec<EnrichedAsset> {
    let Some(path) = discover_data_file(explicit) else {
        tracing::warn!(
            searched = ?DEFAULT_DATA_PATHS,
            "no auction CSV found; starting with an empty fleet"
        );
        return Vec::new();
    };

    let records = match read_records(&path) {
        Ok(records) => {
            tracing::info!(path = %path.display(), rows = records.len(), "read auction CSV");
            records
        }
        Err(err) => {
            tracing::error!(%err, "failed to read auction CSV; starting with an empty fleet");
            return Vec::new();
        }
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = Utc::now().date_naive();
    let (assets, skipped) = enrich::enrich_all(records, today, &mut rng);
    if skipped > 0 {
        tracing::warn!(skipped, "rejected rows with unparseable Price");
    }
    assets
}
