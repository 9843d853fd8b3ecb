// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for i18n

use socialmedia_core::*;

#[test]
fn test_english_is_source_text() {
    let catalog = Catalog::default();

    assert_eq!(catalog.locale(), Locale::English);
    assert_eq!(catalog.translate("Google+", &[]), "Google+");
    assert_eq!(
        catalog.translate("Weight for @name", &[("name", "Reddit")]),
        "Weight for Reddit"
    );
}

#[test]
fn test_unknown_string_falls_back_to_source() {
    let catalog = Catalog::new(Locale::Spanish);
    assert_eq!(catalog.translate("Instagram", &[]), "Instagram");
}

#[test]
fn test_translated_with_args() {
    let catalog = Catalog::new(Locale::Spanish);

    assert_eq!(catalog.translate("Mail", &[]), "Correo");
    assert_eq!(
        catalog.translate("@name link", &[("name", "Twitter")]),
        "Enlace de Twitter"
    );
}

#[test]
fn test_every_locale_translates_form_labels() {
    for locale in Locale::all() {
        let catalog = Catalog::new(locale);
        let title = catalog.translate("Weight for @name", &[("name", "X")]);
        assert!(title.contains('X'), "{:?}: {}", locale, title);
        assert!(!title.contains("@name"), "{:?}: {}", locale, title);
    }
}

#[test]
fn test_locale_codes() {
    for locale in Locale::all() {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
    assert_eq!(Locale::from_code("de-CH"), Some(Locale::German));
    assert_eq!(Locale::from_code("fr_CA"), Some(Locale::French));
    assert_eq!(Locale::from_code(" ES-419 "), Some(Locale::Spanish));
    assert_eq!(Locale::from_code(""), None);
    assert_eq!(Locale::from_code("xx"), None);
}
