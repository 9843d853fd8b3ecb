// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Edit Form Model
//!
//! Describes the block's configuration table: one draggable row per
//! platform holding a label, a weight field and a value field. Rows are
//! ordered with the same rule as rendered links, so the order an
//! administrator sees while editing is the order visitors see.
//!
//! Widget markup is left to the host; this module only carries the data
//! and the typed read-back of submitted values.

use serde::Serialize;
use serde_json::Value;

use crate::configurator::{EditSubmission, LinkListConfigurator, PlatformEdit};
use crate::i18n::Translator;
use crate::order::{sort_by_weight, Weighted};
use crate::platform::PlatformRegistry;
use crate::settings::lenient::parse_flag;
use crate::settings::{FollowSetting, PlatformSetting, ShareSetting};

/// Tabledrag group shared by every weight field.
pub const WEIGHT_GROUP: &str = "table-order-weight";

/// Class set on every row so it can be dragged.
pub const ROW_CLASS: &str = "draggable";

/// Key under which hosts submit the table's values.
pub const TABLE_KEY: &str = "table";

/// The value widget of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormElement {
    /// Link entry for the follow block.
    TextField { title: String, value: String },
    /// Enabled switch for the sharing block.
    Checkbox { value: bool },
}

/// One row of the configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRow {
    pub platform_id: String,
    pub label: String,
    pub weight: i32,
    /// Accessible title of the weight field; rendered visually hidden.
    pub weight_title: String,
    pub element: FormElement,
}

impl Weighted for EditRow {
    fn weight(&self) -> i32 {
        self.weight
    }
}

/// The full configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditForm {
    pub header: Vec<String>,
    pub rows: Vec<EditRow>,
}

impl EditForm {
    /// Builds the table from the current configuration, sorted by weight.
    pub fn build<S: FormField>(
        configurator: &LinkListConfigurator<S>,
        translator: &dyn Translator,
    ) -> Self {
        let header = ["Platform", "Weight", S::VALUE_HEADER]
            .iter()
            .map(|h| translator.translate(h, &[]))
            .collect();

        let mut rows: Vec<EditRow> = configurator
            .iter()
            .map(|(platform, setting)| {
                let name = translator.translate(platform.display_name(), &[]);
                EditRow {
                    platform_id: platform.id().to_string(),
                    weight: setting.weight(),
                    weight_title: translator.translate("Weight for @name", &[("name", &name)]),
                    element: setting.element(&name, translator),
                    label: name,
                }
            })
            .collect();

        sort_by_weight(&mut rows);

        Self { header, rows }
    }

    /// Gets the row for a platform.
    pub fn row(&self, platform_id: &str) -> Option<&EditRow> {
        self.rows.iter().find(|r| r.platform_id == platform_id)
    }

    /// Gets the row for a platform for editing.
    pub fn row_mut(&mut self, platform_id: &str) -> Option<&mut EditRow> {
        self.rows.iter_mut().find(|r| r.platform_id == platform_id)
    }

    /// Returns platform ids in display order.
    pub fn platform_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.platform_id.as_str()).collect()
    }

    /// Reads the current row values back as a submission.
    ///
    /// Rows whose element does not match the setting type are skipped.
    pub fn submission<S: FormField>(&self) -> EditSubmission<S::Value> {
        self.rows
            .iter()
            .filter_map(|row| {
                S::read_element(&row.element)
                    .map(|value| (row.platform_id.clone(), PlatformEdit::new(value, row.weight)))
            })
            .collect()
    }
}

/// Reads a submission from host form state shaped as
/// `{"table": {"<id>": {"element": <value>, "weight": <weight>}}}`.
///
/// Only registry platforms are read. A platform whose value or weight is
/// missing or unreadable is left out, so it keeps its previous setting.
pub fn submission_from_state<S: FormField>(
    registry: &PlatformRegistry,
    state: &Value,
) -> EditSubmission<S::Value> {
    let table = state.get(TABLE_KEY);
    registry
        .ids()
        .filter_map(|id| {
            let row = table?.get(id)?;
            let value = S::read_state(row.get("element")?)?;
            let weight = read_weight(row.get("weight")?)?;
            Some((id, PlatformEdit::new(value, weight)))
        })
        .collect()
}

fn read_weight(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) if s.trim().is_empty() => Some(0),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Form behavior of a setting type.
pub trait FormField: PlatformSetting {
    /// Header of the value column.
    const VALUE_HEADER: &'static str;

    /// Builds the value widget for a platform with translated `name`.
    fn element(&self, name: &str, translator: &dyn Translator) -> FormElement;

    /// Reads a value back from a widget of the matching type.
    fn read_element(element: &FormElement) -> Option<Self::Value>;

    /// Reads a value from loosely typed host form state.
    fn read_state(value: &Value) -> Option<Self::Value>;
}

impl FormField for FollowSetting {
    const VALUE_HEADER: &'static str = "Url";

    fn element(&self, name: &str, translator: &dyn Translator) -> FormElement {
        FormElement::TextField {
            title: translator.translate("@name link", &[("name", name)]),
            value: self.link.clone(),
        }
    }

    fn read_element(element: &FormElement) -> Option<String> {
        match element {
            FormElement::TextField { value, .. } => Some(value.clone()),
            FormElement::Checkbox { .. } => None,
        }
    }

    fn read_state(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Null => Some(String::new()),
            _ => None,
        }
    }
}

impl FormField for ShareSetting {
    const VALUE_HEADER: &'static str = "Enabled";

    fn element(&self, _name: &str, _translator: &dyn Translator) -> FormElement {
        FormElement::Checkbox {
            value: self.enabled,
        }
    }

    fn read_element(element: &FormElement) -> Option<bool> {
        match element {
            FormElement::Checkbox { value } => Some(*value),
            FormElement::TextField { .. } => None,
        }
    }

    fn read_state(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            Value::String(s) => parse_flag(s),
            Value::Null => Some(false),
            _ => None,
        }
    }
}
