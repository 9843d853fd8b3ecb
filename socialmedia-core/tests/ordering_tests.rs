// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for ordering consistency between the edit form and rendered output

mod common;

use common::strategies::*;
use common::{entry_ids, follow_config, share_config};
use proptest::prelude::*;
use socialmedia_core::render::{render_follow, render_share};
use socialmedia_core::*;

#[test]
fn test_sort_is_stable() {
    struct Item(&'static str, i32);
    impl Weighted for Item {
        fn weight(&self) -> i32 {
            self.1
        }
    }

    let mut items = vec![Item("a", 5), Item("b", 5), Item("c", 1)];
    sort_by_weight(&mut items);

    let ids: Vec<&str> = items.iter().map(|i| i.0).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_equal_weights_keep_registry_order() {
    let config = follow_config(&[
        ("reddit", "r", 0),
        ("facebook", "f", 0),
        ("instagram", "i", 0),
    ]);

    let form = EditForm::build(&config, &Catalog::default());
    let output = render_follow(&config, &Catalog::default());

    assert_eq!(
        form.platform_ids(),
        vec!["facebook", "linkedin", "twitter", "googleplus", "instagram", "reddit"]
    );
    assert_eq!(entry_ids(&output), vec!["facebook", "instagram", "reddit"]);
}

#[test]
fn test_form_and_render_order_match() {
    let config = share_config(&[
        ("facebook", true, 4),
        ("linkedin", true, -1),
        ("twitter", true, 4),
        ("googleplus", true, 0),
        ("reddit", true, 2),
        ("mail", true, -1),
    ]);

    let form = EditForm::build(&config, &Catalog::default());
    let output = render_share(&config, &Catalog::default(), &PageUrl::new("https://example.com"));

    assert_eq!(form.platform_ids(), entry_ids(&output));
    assert_eq!(
        form.platform_ids(),
        vec!["linkedin", "mail", "googleplus", "reddit", "facebook", "twitter"]
    );
}

proptest! {
    #[test]
    fn prop_render_order_is_form_order_restricted_to_active(values in follow_values_strategy()) {
        let registry = PlatformRegistry::follow();
        let entries: Vec<(&str, &str, i32)> = registry
            .ids()
            .zip(values.iter())
            .map(|(id, (link, weight))| (id, link.as_str(), *weight))
            .collect();
        let config = follow_config(&entries);

        let form = EditForm::build(&config, &Catalog::default());
        let output = render_follow(&config, &Catalog::default());

        let expected: Vec<&str> = form
            .platform_ids()
            .into_iter()
            .filter(|id| config.setting(id).map(|s| !s.link.is_empty()).unwrap_or(false))
            .collect();
        prop_assert_eq!(entry_ids(&output), expected);
    }

    #[test]
    fn prop_share_render_weights_non_decreasing(values in share_values_strategy()) {
        let registry = PlatformRegistry::share();
        let entries: Vec<(&str, bool, i32)> = registry
            .ids()
            .zip(values.iter())
            .map(|(id, (enabled, weight))| (id, *enabled, *weight))
            .collect();
        let config = share_config(&entries);

        let output = render_share(&config, &Catalog::default(), &PageUrl::new("https://example.com"));

        let enabled = values.iter().filter(|(e, _)| *e).count();
        prop_assert_eq!(output.entries.len(), enabled);
        for pair in output.entries.windows(2) {
            prop_assert!(pair[0].weight <= pair[1].weight);
        }
    }
}
