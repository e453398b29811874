// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, Command};

pub fn build_cli() -> Command {
    Command::new("fleetdesk")
        .version(crate_version!())
        .about("Auction-fleet asset intelligence API")
        .arg(
            Arg::new("port")
                .long("port")
                .env("PORT")
                .default_value("3001")
                .help("TCP port to listen on"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .env("FLEETDESK_DATA")
                .help("Path to the auction CSV (defaults to fleet-auctions.csv)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed the enrichment RNG for a reproducible fleet"),
        )
}
