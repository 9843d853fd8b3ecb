//! Internationalization (i18n)
//!
//! Provides localized platform names and edit-form labels.
//! Strings are keyed by their English source text, and placeholders use
//! the `@name` form. English is the source locale; German, French and
//! Spanish are bundled.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

impl Locale {
    /// Get the ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::German => "de",
            Locale::French => "fr",
            Locale::Spanish => "es",
        }
    }

    /// Parse a locale from a language tag such as `de`, `de-CH` or `fr_CA`.
    ///
    /// Only the primary language subtag is considered.
    pub fn from_code(tag: &str) -> Option<Self> {
        let language = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Self::all().into_iter().find(|l| l.code() == language)
    }

    /// Get all available locales
    pub fn all() -> [Locale; 4] {
        [
            Locale::English,
            Locale::German,
            Locale::French,
            Locale::Spanish,
        ]
    }
}

/// Maps source text to display text.
///
/// Blocks receive a translator explicitly instead of reaching for
/// ambient host state.
pub trait Translator {
    /// Translates `source` and substitutes `@placeholder` arguments.
    ///
    /// Unknown source strings are returned untranslated.
    fn translate(&self, source: &str, args: &[(&str, &str)]) -> String;
}

/// Built-in string catalog for one locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: Locale,
    strings: HashMap<&'static str, &'static str>,
}

impl Catalog {
    /// Creates a catalog for the given locale.
    pub fn new(locale: Locale) -> Self {
        let strings = match locale {
            Locale::English => HashMap::new(),
            Locale::German => german_strings(),
            Locale::French => french_strings(),
            Locale::Spanish => spanish_strings(),
        };
        Self { locale, strings }
    }

    /// Returns the catalog's locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Translator for Catalog {
    fn translate(&self, source: &str, args: &[(&str, &str)]) -> String {
        let mut result = self
            .strings
            .get(source)
            .map(|s| s.to_string())
            .unwrap_or_else(|| source.to_string());

        for (name, value) in args {
            result = result.replace(&format!("@{}", name), value);
        }

        result
    }
}

// ============================================================
// German Strings
// ============================================================

fn german_strings() -> HashMap<&'static str, &'static str> {
    let mut m = HashMap::new();

    // Platforms
    m.insert("Mail", "E-Mail");

    // Edit form
    m.insert("Platform", "Plattform");
    m.insert("Weight", "Gewichtung");
    m.insert("Url", "URL");
    m.insert("Enabled", "Aktiviert");
    m.insert("Weight for @name", "Gewichtung für @name");
    m.insert("@name link", "@name-Link");

    // Block labels
    m.insert("Social media block", "Social-Media-Block");
    m.insert("Social media sharing block", "Social-Media-Teilen-Block");

    m
}

// ============================================================
// French Strings
// ============================================================

fn french_strings() -> HashMap<&'static str, &'static str> {
    let mut m = HashMap::new();

    m.insert("Mail", "E-mail");

    m.insert("Platform", "Plateforme");
    m.insert("Weight", "Poids");
    m.insert("Url", "URL");
    m.insert("Enabled", "Activé");
    m.insert("Weight for @name", "Poids pour @name");
    m.insert("@name link", "Lien @name");

    m.insert("Social media block", "Bloc réseaux sociaux");
    m.insert("Social media sharing block", "Bloc de partage social");

    m
}

// ============================================================
// Spanish Strings
// ============================================================

fn spanish_strings() -> HashMap<&'static str, &'static str> {
    let mut m = HashMap::new();

    m.insert("Mail", "Correo");

    m.insert("Platform", "Plataforma");
    m.insert("Weight", "Peso");
    m.insert("Url", "URL");
    m.insert("Enabled", "Activado");
    m.insert("Weight for @name", "Peso para @name");
    m.insert("@name link", "Enlace de @name");

    m.insert("Social media block", "Bloque de redes sociales");
    m.insert("Social media sharing block", "Bloque para compartir");

    m
}
