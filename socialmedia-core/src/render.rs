// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Block Rendering
//!
//! Turns a configuration into the ordered link list handed to the
//! templating layer. Only active platforms produce an entry.

use serde::Serialize;

use crate::configurator::{FollowConfigurator, ShareConfigurator};
use crate::i18n::Translator;
use crate::order::{sort_by_weight, Weighted};
use crate::share::share_url;

/// Template for the follow block.
pub const FOLLOW_TEMPLATE: &str = "social_links";
/// Template for the sharing block.
pub const SHARE_TEMPLATE: &str = "social_sharing";
/// Client-side library the sharing block needs.
pub const SHARE_LIBRARY: &str = "socialmedia/socialmedia";
/// Cache context that makes output vary per route.
pub const ROUTE_CONTEXT: &str = "route";

/// Supplies the absolute, alias-resolved URL of the page being rendered.
pub trait CurrentPage {
    fn absolute_url(&self) -> String;
}

/// A fixed page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl(pub String);

impl PageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl CurrentPage for PageUrl {
    fn absolute_url(&self) -> String {
        self.0.clone()
    }
}

/// One rendered link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEntry {
    pub title: String,
    pub url: String,
    pub weight: i32,
    pub style_classes: Vec<String>,
}

impl RenderEntry {
    /// Returns the classes joined for a `class` attribute.
    pub fn class_attribute(&self) -> String {
        self.style_classes.join(" ")
    }
}

impl Weighted for RenderEntry {
    fn weight(&self) -> i32 {
        self.weight
    }
}

/// Everything the templating layer needs to render a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOutput {
    pub template: String,
    pub entries: Vec<RenderEntry>,
    pub libraries: Vec<String>,
    pub cache_contexts: Vec<String>,
}

impl BlockOutput {
    /// Returns true if cached output must be keyed by route.
    pub fn varies_by_route(&self) -> bool {
        self.cache_contexts.iter().any(|c| c == ROUTE_CONTEXT)
    }

    /// Returns true if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the follow block: one entry per platform with a non-empty link.
///
/// Links are passed through untouched.
pub fn render_follow(
    configurator: &FollowConfigurator,
    translator: &dyn Translator,
) -> BlockOutput {
    let mut entries: Vec<RenderEntry> = configurator
        .iter()
        .filter(|(_, setting)| !setting.link.is_empty())
        .map(|(platform, setting)| RenderEntry {
            title: translator.translate(platform.display_name(), &[]),
            url: setting.link.clone(),
            weight: setting.weight,
            style_classes: vec![
                format!("social-link--{}", platform.id()),
                format!("icon-social-{}", platform.id()),
            ],
        })
        .collect();

    sort_by_weight(&mut entries);

    BlockOutput {
        template: FOLLOW_TEMPLATE.to_string(),
        entries,
        libraries: Vec::new(),
        cache_contexts: Vec::new(),
    }
}

/// Renders the sharing block: one share link per enabled platform.
pub fn render_share(
    configurator: &ShareConfigurator,
    translator: &dyn Translator,
    page: &dyn CurrentPage,
) -> BlockOutput {
    let page_url = page.absolute_url();

    let mut entries: Vec<RenderEntry> = configurator
        .iter()
        .filter(|(_, setting)| setting.enabled)
        .map(|(platform, setting)| RenderEntry {
            title: translator.translate(platform.display_name(), &[]),
            url: share_url(platform.id(), &page_url),
            weight: setting.weight,
            style_classes: vec![
                format!("social-share-link--{}", platform.id()),
                format!("icon-social-{}", platform.id()),
            ],
        })
        .collect();

    sort_by_weight(&mut entries);

    BlockOutput {
        template: SHARE_TEMPLATE.to_string(),
        entries,
        libraries: vec![SHARE_LIBRARY.to_string()],
        cache_contexts: vec![ROUTE_CONTEXT.to_string()],
    }
}
