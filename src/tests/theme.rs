use crate::platform::{ FixedColorScheme, MemoryPreferences, NoopScope, Preferences };
use crate::services::{ ThemePreferenceResolver, DEFAULT_THEME_STORAGE_KEY };
use crate::utils::ThemeMode;
use super::common::{ self, mocks::{ FailingPreferences, RecordingScope } };

fn resolver(prefs: &MemoryPreferences, scheme: FixedColorScheme) -> ThemePreferenceResolver {
    ThemePreferenceResolver::new(prefs.clone(), scheme, NoopScope)
}

#[test]
fn test_persisted_value_round_trips() {
    common::setup();
    for (raw, expected) in [("dark", ThemeMode::Dark), ("light", ThemeMode::Light)] {
        let prefs = MemoryPreferences::with_entry(DEFAULT_THEME_STORAGE_KEY, raw);
        // The stored choice wins over the environment in both directions.
        let opposite = if expected.is_dark() { FixedColorScheme::light() } else { FixedColorScheme::dark() };
        assert_eq!(resolver(&prefs, opposite).resolve_initial(), expected);
    }
}

#[test]
fn test_toggle_persists_for_next_load() {
    common::setup();
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let prefs = MemoryPreferences::new();
        let next = resolver(&prefs, FixedColorScheme::light()).toggle(mode);
        assert_eq!(next, mode.toggled());
        assert_eq!(prefs.get(DEFAULT_THEME_STORAGE_KEY).unwrap(), Some(next.as_str().to_string()));

        let reloaded = resolver(&prefs, FixedColorScheme::default());
        assert_eq!(reloaded.resolve_initial(), next);
    }
}

#[test]
fn test_falls_back_to_color_scheme() {
    common::setup();
    let prefs = MemoryPreferences::new();
    assert_eq!(resolver(&prefs, FixedColorScheme::dark()).resolve_initial(), ThemeMode::Dark);
    assert_eq!(resolver(&prefs, FixedColorScheme::light()).resolve_initial(), ThemeMode::Light);
    assert_eq!(resolver(&prefs, FixedColorScheme::default()).resolve_initial(), ThemeMode::Light);
}

#[test]
fn test_malformed_value_is_treated_as_absent() {
    common::setup();
    for raw in ["Dark", "blue", "", "\"dark\""] {
        let prefs = MemoryPreferences::with_entry(DEFAULT_THEME_STORAGE_KEY, raw);
        assert_eq!(resolver(&prefs, FixedColorScheme::dark()).resolve_initial(), ThemeMode::Dark);
        assert_eq!(resolver(&prefs, FixedColorScheme::light()).resolve_initial(), ThemeMode::Light);
    }
}

#[test]
fn test_unreadable_storage_defaults_to_light() {
    common::setup();
    let resolver = ThemePreferenceResolver::new(
        FailingPreferences::disabled(),
        FixedColorScheme::dark(),
        NoopScope
    );
    assert_eq!(resolver.resolve_initial(), ThemeMode::Light);
}

#[test]
fn test_toggle_survives_write_failure() {
    common::setup();
    let scope = RecordingScope::default();
    let resolver = ThemePreferenceResolver::new(
        FailingPreferences { fail_reads: false, fail_writes: true },
        FixedColorScheme::light(),
        scope.clone()
    );
    assert_eq!(resolver.toggle(ThemeMode::Light), ThemeMode::Dark);
    assert_eq!(scope.history(), vec![ThemeMode::Dark]);
}

#[test]
fn test_resolve_has_no_side_effects() {
    common::setup();
    let prefs = MemoryPreferences::new();
    let scope = RecordingScope::default();
    let resolver = ThemePreferenceResolver::new(prefs.clone(), FixedColorScheme::dark(), scope.clone());

    assert_eq!(resolver.resolve_initial(), ThemeMode::Dark);
    assert_eq!(prefs.get(DEFAULT_THEME_STORAGE_KEY).unwrap(), None);
    assert!(scope.history().is_empty());
}

#[test]
fn test_toggle_applies_each_mode_to_document() {
    common::setup();
    let scope = RecordingScope::default();
    let resolver = ThemePreferenceResolver::new(MemoryPreferences::new(), FixedColorScheme::light(), scope.clone());

    let dark = resolver.toggle(ThemeMode::Light);
    let light = resolver.toggle(dark);
    assert_eq!(light, ThemeMode::Light);
    assert_eq!(scope.history(), vec![ThemeMode::Dark, ThemeMode::Light]);
}

#[test]
fn test_custom_storage_key() {
    common::setup();
    let prefs = MemoryPreferences::new();
    let resolver = resolver(&prefs, FixedColorScheme::light()).with_storage_key("site-theme");
    assert_eq!(resolver.storage_key(), "site-theme");

    resolver.toggle(ThemeMode::Light);
    assert_eq!(prefs.get("site-theme").unwrap(), Some("dark".to_string()));
    assert_eq!(prefs.get(DEFAULT_THEME_STORAGE_KEY).unwrap(), None);
}
