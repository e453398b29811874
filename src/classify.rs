// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Usage, UsageKind};

pub const DEFAULT_CATEGORY: &str = "Other Equipment";
pub const DEFAULT_MANUFACTURER: &str = "Various";

/// Ordered keyword cascade: first rule whose keyword appears in the
/// lower-cased title wins, so earlier rows shadow later ones ("dump truck"
/// classifies as Truck; the Dump Truck row only catches dump bodies and
/// trailers that never say "truck").
static CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["tractor"], "Tractor"),
    (&["skid steer", "bobcat"], "Skid Steer"),
    (&["telehandler", "forklift", "lull"], "Telehandler"),
    (&["truck", "pickup", "f150", "f250", "f350"], "Truck"),
    (&["dump"], "Dump Truck"),
    (&["seeder", "hydro"], "Seeding Equipment"),
    (&["roller"], "Compaction Equipment"),
    (&["scaffolding"], "Scaffolding"),
    (&["pallet"], "Material Handling"),
    (&["saw"], "Cutting Equipment"),
    (&["heater"], "Heating Equipment"),
    (&["air handler"], "HVAC"),
    (&["bucket", "sweeper"], "Attachments"),
    (&["lift table"], "Lifting Equipment"),
];

static MANUFACTURER_RULES: &[(&[&str], &str)] = &[
    (&["ford"], "Ford"),
    (&["bobcat"], "Bobcat"),
    (&["lull"], "Lull"),
    (&["massey ferguson"], "Massey Ferguson"),
    (&["freightliner"], "Freightliner"),
    (&["wacker"], "Wacker"),
    (&["safway"], "Safway"),
    (&["daikan"], "Daikan"),
    (&["mk "], "MK"),
    (&["turbo turf"], "Turbo Turf"),
    (&["power jack"], "Power Jack"),
];

fn first_match(
    rules: &[(&[&str], &'static str)],
    title: &str,
    fallback: &'static str,
) -> &'static str {
    let lower = title.to_lowercase();
    for (keywords, label) in rules {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return label;
        }
    }
    fallback
}

pub fn categorize(title: &str) -> &'static str {
    first_match(CATEGORY_RULES, title, DEFAULT_CATEGORY)
}

pub fn extract_manufacturer(title: &str) -> &'static str {
    first_match(MANUFACTURER_RULES, title, DEFAULT_MANUFACTURER)
}

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("year regex"));

/// First plausible model year in the title, e.g. "2019 Ford F250" -> 2019.
pub fn extract_year(title: &str) -> Option<i32> {
    YEAR_RE
        .find(title)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

static MILES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,3}(?:,\d{3})*)\s*miles").expect("miles regex"));
static HOURS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,3}(?:,\d{3})*)\s*(?:hours|hrs)").expect("hours regex"));

/// Pull odometer miles or engine hours out of free-text descriptions like
/// "One owner, 12,500 hours, runs strong". Miles take precedence when a
/// description mentions both.
pub fn extract_usage(description: &str) -> Option<Usage> {
    if let Some(caps) = MILES_RE.captures(description) {
        return parse_grouped(&caps[1]).map(|value| Usage {
            kind: UsageKind::Miles,
            value,
        });
    }
    if let Some(caps) = HOURS_RE.captures(description) {
        return parse_grouped(&caps[1]).map(|value| Usage {
            kind: UsageKind::Hours,
            value,
        });
    }
    None
}

fn parse_grouped(digits: &str) -> Option<u64> {
    digits.replace(',', "").parse::<u64>().ok()
}
