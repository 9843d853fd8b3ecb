// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;

/// Strategy for weights, including negatives as a tabledrag UI allows.
pub fn weight_strategy() -> impl Strategy<Value = i32> {
    -20i32..20
}

/// Strategy for follow links; roughly a third are empty.
pub fn link_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        2 => ("[a-z]{3,10}", "[a-z]{2,4}")
            .prop_map(|(domain, tld)| format!("https://{}.{}/acme", domain, tld)),
    ]
}

/// Strategy for one (link, weight) per follow platform.
pub fn follow_values_strategy() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((link_strategy(), weight_strategy()), 6)
}

/// Strategy for one (enabled, weight) per share platform.
pub fn share_values_strategy() -> impl Strategy<Value = Vec<(bool, i32)>> {
    prop::collection::vec((any::<bool>(), weight_strategy()), 6)
}
