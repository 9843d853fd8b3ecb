// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures and proptest strategies.

#![allow(dead_code)]

pub mod strategies;

use socialmedia_core::*;

/// Follow configuration with the given (id, link, weight) entries applied.
pub fn follow_config(entries: &[(&str, &str, i32)]) -> FollowConfigurator {
    let mut config = FollowConfigurator::defaults(PlatformRegistry::follow());
    let mut edits = EditSubmission::new();
    for (id, link, weight) in entries {
        edits.insert(*id, PlatformEdit::new(link.to_string(), *weight));
    }
    config.apply_edits(&edits);
    config
}

/// Share configuration with the given (id, enabled, weight) entries applied.
pub fn share_config(entries: &[(&str, bool, i32)]) -> ShareConfigurator {
    let mut config = ShareConfigurator::defaults(PlatformRegistry::share());
    let mut edits = EditSubmission::new();
    for (id, enabled, weight) in entries {
        edits.insert(*id, PlatformEdit::new(*enabled, *weight));
    }
    config.apply_edits(&edits);
    config
}

/// Ids of rendered entries, taken from their style classes.
pub fn entry_ids(output: &BlockOutput) -> Vec<String> {
    output
        .entries
        .iter()
        .map(|e| {
            e.style_classes
                .last()
                .map(|c| c.trim_start_matches("icon-social-").to_string())
                .unwrap_or_default()
        })
        .collect()
}
