// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link List Configurator
//!
//! Owns the per-platform settings of one block instance. Every platform in
//! the registry has exactly one setting; ids outside the registry never
//! get one, whether they arrive through a persisted record or an edit.

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::order::Weighted;
use crate::platform::{Platform, PlatformRegistry};
use crate::settings::{FollowSetting, PlatformSetting, ShareSetting};

/// An edited value and weight for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEdit<V> {
    pub value: V,
    pub weight: i32,
}

impl<V> PlatformEdit<V> {
    pub fn new(value: V, weight: i32) -> Self {
        Self { value, weight }
    }
}

impl<V> Weighted for PlatformEdit<V> {
    fn weight(&self) -> i32 {
        self.weight
    }
}

/// Values submitted from the edit form, keyed by platform id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSubmission<V> {
    edits: HashMap<String, PlatformEdit<V>>,
}

impl<V> Default for EditSubmission<V> {
    fn default() -> Self {
        Self {
            edits: HashMap::new(),
        }
    }
}

impl<V> EditSubmission<V> {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the edit for a platform.
    pub fn insert(&mut self, platform_id: impl Into<String>, edit: PlatformEdit<V>) {
        self.edits.insert(platform_id.into(), edit);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, platform_id: impl Into<String>, value: V, weight: i32) -> Self {
        self.insert(platform_id, PlatformEdit::new(value, weight));
        self
    }

    /// Gets the edit for a platform.
    pub fn get(&self, platform_id: &str) -> Option<&PlatformEdit<V>> {
        self.edits.get(platform_id)
    }

    /// Returns the submitted platform ids in no particular order.
    pub fn platform_ids(&self) -> impl Iterator<Item = &str> {
        self.edits.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

impl<V, K: Into<String>> FromIterator<(K, PlatformEdit<V>)> for EditSubmission<V> {
    fn from_iter<I: IntoIterator<Item = (K, PlatformEdit<V>)>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().map(|(k, e)| (k.into(), e)).collect(),
        }
    }
}

/// Per-platform configuration of one block instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkListConfigurator<S: PlatformSetting> {
    registry: PlatformRegistry,
    settings: HashMap<String, S>,
}

/// Configurator for the follow block.
pub type FollowConfigurator = LinkListConfigurator<FollowSetting>;

/// Configurator for the sharing block.
pub type ShareConfigurator = LinkListConfigurator<ShareSetting>;

impl<S: PlatformSetting> LinkListConfigurator<S> {
    /// Creates a configurator with every platform disabled at weight 0.
    pub fn defaults(registry: PlatformRegistry) -> Self {
        let settings = registry
            .ids()
            .map(|id| (id.to_string(), S::default()))
            .collect();
        Self { registry, settings }
    }

    /// Loads a persisted record.
    ///
    /// Missing platforms get defaults. Unknown ids are dropped. An entry
    /// that cannot be read, or a record that is not an object, falls back
    /// to defaults.
    pub fn from_record(registry: PlatformRegistry, record: &Value) -> Self {
        let mut configurator = Self::defaults(registry);

        let Some(map) = record.as_object() else {
            if !record.is_null() {
                warn!(
                    kind = %configurator.registry.kind(),
                    "configuration record is not an object, using defaults"
                );
            }
            return configurator;
        };

        for (id, entry) in map {
            let Some(slot) = configurator.settings.get_mut(id) else {
                debug!(platform = %id, "dropping setting for unknown platform");
                continue;
            };
            match S::deserialize(entry) {
                Ok(setting) => *slot = setting,
                Err(e) => warn!(platform = %id, error = %e, "unreadable setting, using default"),
            }
        }

        configurator
    }

    /// Parses a persisted record from JSON.
    pub fn from_json(registry: PlatformRegistry, json: &str) -> Result<Self, serde_json::Error> {
        let record: Value = serde_json::from_str(json)?;
        Ok(Self::from_record(registry, &record))
    }

    /// Produces the persisted record: one entry per platform, keyed by id.
    pub fn to_record(&self) -> Value {
        let mut map = Map::new();
        for (platform, setting) in self.iter() {
            // Settings are plain structs of strings, bools and ints.
            let entry = serde_json::to_value(setting).unwrap_or(Value::Null);
            map.insert(platform.id().to_string(), entry);
        }
        Value::Object(map)
    }

    /// Serializes the persisted record to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_record())
    }

    /// Returns the registry this configuration covers.
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Gets the setting for a platform.
    pub fn setting(&self, platform_id: &str) -> Option<&S> {
        self.settings.get(platform_id)
    }

    /// Iterates platforms and their settings in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&Platform, &S)> {
        self.registry
            .platforms()
            .iter()
            .filter_map(|p| self.settings.get(p.id()).map(|s| (p, s)))
    }

    /// Returns the stored value and weight for a platform.
    ///
    /// Returns None only for ids outside the registry.
    pub fn read_for_edit(&self, platform_id: &str) -> Option<PlatformEdit<S::Value>> {
        self.setting(platform_id)
            .map(|s| PlatformEdit::new(s.value().clone(), s.weight()))
    }

    /// Overwrites settings from submitted edits.
    ///
    /// Platforms absent from the submission keep their previous setting.
    /// Submitted ids outside the registry are ignored.
    pub fn apply_edits(&mut self, edits: &EditSubmission<S::Value>) {
        for id in edits.platform_ids() {
            if !self.registry.contains(id) {
                debug!(platform = %id, "ignoring edit for unknown platform");
            }
        }

        for platform in self.registry.platforms() {
            let id = platform.id();
            match edits.get(id) {
                Some(edit) => {
                    self.settings
                        .insert(id.to_string(), S::from_edit(edit.value.clone(), edit.weight));
                }
                None => warn!(platform = %id, "no edit submitted, keeping previous setting"),
            }
        }
    }

    /// Returns true if at least one platform will render.
    pub fn has_active(&self) -> bool {
        self.settings.values().any(|s| s.is_active())
    }
}
