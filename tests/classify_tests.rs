// Copyright (c) 2025 Fleetdesk.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::classify::{
    categorize, extract_manufacturer, extract_usage, extract_year, DEFAULT_CATEGORY,
    DEFAULT_MANUFACTURER,
};
use fleetdesk::models::UsageKind;

#[test]
fn categorize_matches_first_keyword_rule() {
    assert_eq!(categorize("2015 John Deere Tractor"), "Tractor");
    assert_eq!(categorize("Bobcat S650"), "Skid Steer");
    assert_eq!(categorize("LULL 644E-42 Telehandler"), "Telehandler");
    assert_eq!(categorize("2019 Ford F250 Pickup"), "Truck");
    assert_eq!(categorize("Wacker RD12 Roller"), "Compaction Equipment");
    assert_eq!(categorize("Safway Scaffolding Sections"), "Scaffolding");
    assert_eq!(categorize("MK 101 Tile Saw"), "Cutting Equipment");
}

#[test]
fn earlier_rules_shadow_later_ones() {
    // "dump truck" hits the truck rule before the dump rule.
    assert_eq!(categorize("2012 Freightliner Dump Truck"), "Truck");
    // A dump body without "truck" falls through to Dump Truck.
    assert_eq!(categorize("10ft Dump Trailer"), "Dump Truck");
}

#[test]
fn unmatched_titles_get_the_default_category() {
    assert_eq!(categorize("Miscellaneous Shop Items"), DEFAULT_CATEGORY);
    assert_eq!(categorize(""), DEFAULT_CATEGORY);
}

#[test]
fn manufacturer_extraction() {
    assert_eq!(extract_manufacturer("2019 Ford F150"), "Ford");
    assert_eq!(extract_manufacturer("Massey Ferguson 1735M"), "Massey Ferguson");
    assert_eq!(extract_manufacturer("MK 101 Tile Saw"), "MK");
    assert_eq!(extract_manufacturer("Generic Pallet Racking"), DEFAULT_MANUFACTURER);
}

#[test]
fn year_extraction_takes_the_first_plausible_token() {
    assert_eq!(extract_year("2019 Ford F150"), Some(2019));
    assert_eq!(extract_year("1998 Freightliner FL70"), Some(1998));
    assert_eq!(extract_year("ABC Loader"), None);
    // Serial-looking digits outside 19xx/20xx never match.
    assert_eq!(extract_year("Model 3550 Loader"), None);
}

#[test]
fn usage_extraction_prefers_miles_over_hours() {
    let usage = extract_usage("12,500 hours on meter").unwrap();
    assert_eq!(usage.kind, UsageKind::Hours);
    assert_eq!(usage.value, 12_500);

    let usage = extract_usage("Odometer reads 88,210 miles, 4,100 hours").unwrap();
    assert_eq!(usage.kind, UsageKind::Miles);
    assert_eq!(usage.value, 88_210);

    let usage = extract_usage("approx 320 hrs").unwrap();
    assert_eq!(usage.kind, UsageKind::Hours);
    assert_eq!(usage.value, 320);

    assert!(extract_usage("Good condition, one owner").is_none());
}
