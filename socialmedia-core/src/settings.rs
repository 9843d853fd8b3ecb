// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-Platform Settings
//!
//! One setting per platform per block instance. The follow block stores an
//! outbound link, the sharing block an on/off switch; both store a weight.
//!
//! Persisted records are read leniently because hosts hand back form
//! state with loose types (`"1"` for a ticked checkbox, `"-3"` for a
//! weight). They are always written with strict types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::order::Weighted;

/// Behavior shared by the follow and sharing settings.
pub trait PlatformSetting:
    fmt::Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Weighted
{
    /// The value edited in the form: a link string or an enabled flag.
    type Value: fmt::Debug + Clone + Default + PartialEq;

    /// Creates a setting from an edited value and weight.
    fn from_edit(value: Self::Value, weight: i32) -> Self;

    /// Returns the stored value.
    fn value(&self) -> &Self::Value;

    /// Returns true if the platform should be rendered.
    fn is_active(&self) -> bool;
}

/// Follow block setting: `{ link, weight }`.
///
/// An empty link disables the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowSetting {
    #[serde(deserialize_with = "lenient::link")]
    pub link: String,
    #[serde(deserialize_with = "lenient::weight")]
    pub weight: i32,
}

impl FollowSetting {
    pub fn new(link: impl Into<String>, weight: i32) -> Self {
        Self {
            link: link.into(),
            weight,
        }
    }
}

impl Weighted for FollowSetting {
    fn weight(&self) -> i32 {
        self.weight
    }
}

impl PlatformSetting for FollowSetting {
    type Value = String;

    fn from_edit(value: String, weight: i32) -> Self {
        Self::new(value, weight)
    }

    fn value(&self) -> &String {
        &self.link
    }

    fn is_active(&self) -> bool {
        !self.link.is_empty()
    }
}

/// Sharing block setting: `{ enabled, weight }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSetting {
    #[serde(deserialize_with = "lenient::flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient::weight")]
    pub weight: i32,
}

impl ShareSetting {
    pub fn new(enabled: bool, weight: i32) -> Self {
        Self { enabled, weight }
    }
}

impl Weighted for ShareSetting {
    fn weight(&self) -> i32 {
        self.weight
    }
}

impl PlatformSetting for ShareSetting {
    type Value = bool;

    fn from_edit(value: bool, weight: i32) -> Self {
        Self::new(value, weight)
    }

    fn value(&self) -> &bool {
        &self.enabled
    }

    fn is_active(&self) -> bool {
        self.enabled
    }
}

/// Loose deserializers for host-supplied values.
pub(crate) mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Bool(bool),
        Int(i64),
        Float(f64),
        Str(String),
    }

    /// Accepts booleans, numbers and the usual checkbox strings.
    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose>::deserialize(deserializer)? {
            None => Ok(false),
            Some(Loose::Bool(b)) => Ok(b),
            Some(Loose::Int(n)) => Ok(n != 0),
            Some(Loose::Float(f)) => Ok(f != 0.0),
            Some(Loose::Str(s)) => parse_flag(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid enabled value: {:?}", s))),
        }
    }

    pub(crate) fn parse_flag(s: &str) -> Option<bool> {
        match s.trim().to_lowercase().as_str() {
            "" | "0" | "false" | "off" | "no" => Some(false),
            "1" | "true" | "on" | "yes" => Some(true),
            _ => None,
        }
    }

    /// Accepts integers, integral floats and numeric strings. Missing or
    /// blank values read as 0.
    pub fn weight<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Loose::Int(n)) => {
                i32::try_from(n).map_err(|_| D::Error::custom(format!("weight out of range: {}", n)))
            }
            Some(Loose::Float(f))
                if f.fract() == 0.0 && (i32::MIN as f64..=i32::MAX as f64).contains(&f) =>
            {
                Ok(f as i32)
            }
            Some(Loose::Float(f)) => Err(D::Error::custom(format!("invalid weight: {}", f))),
            Some(Loose::Str(s)) if s.trim().is_empty() => Ok(0),
            Some(Loose::Str(s)) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| D::Error::custom(format!("invalid weight: {:?}", s))),
            Some(Loose::Bool(b)) => Err(D::Error::custom(format!("invalid weight: {}", b))),
        }
    }

    /// Accepts strings; `null` reads as an empty link.
    pub fn link<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_setting_reads_checkbox_strings() {
        let on: ShareSetting = serde_json::from_str(r#"{"enabled":"1","weight":"4"}"#).unwrap();
        let off: ShareSetting = serde_json::from_str(r#"{"enabled":"","weight":0}"#).unwrap();

        assert_eq!(on, ShareSetting::new(true, 4));
        assert_eq!(off, ShareSetting::new(false, 0));
    }

    #[test]
    fn test_share_setting_reads_integer_flags() {
        let on: ShareSetting = serde_json::from_str(r#"{"enabled":1,"weight":-2}"#).unwrap();
        assert_eq!(on, ShareSetting::new(true, -2));
    }

    #[test]
    fn test_follow_setting_null_link_is_empty() {
        let setting: FollowSetting = serde_json::from_str(r#"{"link":null,"weight":3}"#).unwrap();
        assert_eq!(setting, FollowSetting::new("", 3));
        assert!(!setting.is_active());
    }

    #[test]
    fn test_missing_fields_default() {
        let setting: FollowSetting = serde_json::from_str("{}").unwrap();
        assert_eq!(setting, FollowSetting::default());
    }

    #[test]
    fn test_integral_float_weight_covers_full_range() {
        let min: FollowSetting =
            serde_json::from_str(r#"{"link":"http://x","weight":-2147483648.0}"#).unwrap();
        let max: FollowSetting =
            serde_json::from_str(r#"{"link":"http://x","weight":2147483647.0}"#).unwrap();

        assert_eq!(min, FollowSetting::new("http://x", i32::MIN));
        assert_eq!(max, FollowSetting::new("http://x", i32::MAX));
    }

    #[test]
    fn test_out_of_range_float_weight_rejected() {
        let result: Result<FollowSetting, _> =
            serde_json::from_str(r#"{"link":"x","weight":-2147483649.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_garbage_weight() {
        let result: Result<FollowSetting, _> =
            serde_json::from_str(r#"{"link":"x","weight":"heavy"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_writes_strict_types() {
        let json = serde_json::to_value(ShareSetting::new(true, 7)).unwrap();
        assert_eq!(json, serde_json::json!({"enabled": true, "weight": 7}));
    }
}
