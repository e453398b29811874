// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::RwLock;

use crate::models::{EnrichedAsset, Scenario};

/// Process-wide state: the enriched asset collection (written once at
/// startup) and the append-only scenario history. The locks keep the
/// original single-writer assumption intact under a multithreaded runtime;
/// every handler reads a snapshot.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: RwLock<Vec<EnrichedAsset>>,
    scenarios: RwLock<Vec<Scenario>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, assets: Vec<EnrichedAsset>) {
        *self.assets.write().expect("asset lock poisoned") = assets;
    }

    pub fn all(&self) -> Vec<EnrichedAsset> {
        self.assets.read().expect("asset lock poisoned").clone()
    }

    pub fn get(&self, id: &str) -> Option<EnrichedAsset> {
        self.assets
            .read()
            .expect("asset lock poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.read().expect("asset lock poisoned").len()
    }

    pub fn append_scenario(&self, scenario: Scenario) {
        self.scenarios
            .write()
            .expect("scenario lock poisoned")
            .push(scenario);
    }

    pub fn scenario(&self, id: &str) -> Option<Scenario> {
        self.scenarios
            .read()
            .expect("scenario lock poisoned")
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.read().expect("scenario lock poisoned").len()
    }
}
