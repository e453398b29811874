// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod classify;
pub mod cli;
pub mod enrich;
pub mod error;
pub mod ingest;
pub mod market;
pub mod models;
pub mod portfolio;
pub mod scenario;
pub mod store;
pub mod utils;
