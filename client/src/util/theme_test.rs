use std::cell::RefCell;
use std::collections::BTreeSet;

use super::*;
use crate::state::ui::UiState;

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<String>>,
    writes: RefCell<usize>,
    fail: bool,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())), ..Self::default() }
    }

    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        if self.fail {
            return Err(ThemeError::Storage("quota exceeded".into()));
        }
        *self.writes.borrow_mut() += 1;
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }
}

struct FixedScheme(Option<bool>);

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Default)]
struct FakeRoot {
    classes: BTreeSet<String>,
    fail: bool,
}

impl ThemeTarget for FakeRoot {
    fn set_dark_marker(&mut self, enabled: bool) -> Result<(), ThemeError> {
        if self.fail {
            return Err(ThemeError::Marker("detached".into()));
        }
        if enabled {
            self.classes.insert(DARK_CLASS.to_owned());
        } else {
            self.classes.remove(DARK_CLASS);
        }
        Ok(())
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_without_stored_value_follows_dark_system_preference() {
    let store = MemoryStore::default();
    let theme = resolve(Some(&store), Some(&FixedScheme(Some(true))));
    assert_eq!(theme, Theme::Dark);
}

#[test]
fn resolve_without_stored_value_follows_light_system_preference() {
    let store = MemoryStore::default();
    assert_eq!(resolve(Some(&store), Some(&FixedScheme(Some(false)))), Theme::Light);
}

#[test]
fn resolve_with_unknown_system_preference_is_light() {
    let store = MemoryStore::default();
    assert_eq!(resolve(Some(&store), Some(&FixedScheme(None))), Theme::Light);
}

#[test]
fn resolve_without_any_environment_is_light() {
    assert_eq!(resolve(None, None), Theme::Light);
}

#[test]
fn stored_value_beats_system_preference() {
    let light = MemoryStore::with("light");
    assert_eq!(resolve(Some(&light), Some(&FixedScheme(Some(true)))), Theme::Light);

    let dark = MemoryStore::with("dark");
    assert_eq!(resolve(Some(&dark), Some(&FixedScheme(Some(false)))), Theme::Dark);
    assert_eq!(resolve(Some(&dark), None), Theme::Dark);
}

#[test]
fn unrecognized_stored_value_means_light() {
    let store = MemoryStore::with("solarized");
    assert_eq!(resolve(Some(&store), Some(&FixedScheme(Some(true)))), Theme::Light);
}

#[test]
fn empty_stored_value_defers_to_system_preference() {
    let store = MemoryStore::with("");
    assert_eq!(resolve(Some(&store), Some(&FixedScheme(Some(true)))), Theme::Dark);
}

#[test]
fn resolve_does_not_write() {
    let store = MemoryStore::default();
    resolve(Some(&store), Some(&FixedScheme(Some(true))));
    assert_eq!(*store.writes.borrow(), 0);
    assert_eq!(store.stored(), None);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_dark_sets_marker_and_persists() {
    let store = MemoryStore::default();
    let mut root = FakeRoot::default();
    apply(Theme::Dark, &mut root, &store).unwrap();
    assert!(root.classes.contains(DARK_CLASS));
    assert_eq!(store.stored().as_deref(), Some("dark"));
}

#[test]
fn apply_light_clears_marker_and_persists() {
    let store = MemoryStore::with("dark");
    let mut root = FakeRoot::default();
    root.classes.insert(DARK_CLASS.to_owned());
    apply(Theme::Light, &mut root, &store).unwrap();
    assert!(root.classes.is_empty());
    assert_eq!(store.stored().as_deref(), Some("light"));
}

#[test]
fn apply_is_idempotent() {
    let store = MemoryStore::default();
    let mut root = FakeRoot::default();
    apply(Theme::Dark, &mut root, &store).unwrap();
    let classes_once = root.classes.clone();
    let stored_once = store.stored();

    apply(Theme::Dark, &mut root, &store).unwrap();
    assert_eq!(root.classes, classes_once);
    assert_eq!(store.stored(), stored_once);
}

#[test]
fn apply_persists_even_when_marker_fails() {
    let store = MemoryStore::default();
    let mut root = FakeRoot { fail: true, ..FakeRoot::default() };
    let err = apply(Theme::Dark, &mut root, &store).unwrap_err();
    assert!(matches!(err, ThemeError::Marker(_)));
    assert_eq!(store.stored().as_deref(), Some("dark"));
}

#[test]
fn apply_marks_even_when_storage_fails() {
    let store = MemoryStore::failing();
    let mut root = FakeRoot::default();
    let err = apply(Theme::Dark, &mut root, &store).unwrap_err();
    assert!(matches!(err, ThemeError::Storage(_)));
    assert!(root.classes.contains(DARK_CLASS));
}

#[test]
fn applied_value_round_trips_through_resolve() {
    let store = MemoryStore::default();
    let mut root = FakeRoot::default();
    apply(Theme::Dark, &mut root, &store).unwrap();
    assert_eq!(resolve(Some(&store), Some(&FixedScheme(Some(false)))), Theme::Dark);
}

// =============================================================
// ThemeSync
// =============================================================

fn memory_sync() -> ThemeSync<FakeRoot, MemoryStore> {
    ThemeSync::new(FakeRoot::default(), Some(MemoryStore::default()))
}

fn writes(sync: &ThemeSync<FakeRoot, MemoryStore>) -> usize {
    sync.store.as_ref().map_or(0, |s| *s.writes.borrow())
}

#[test]
fn menu_toggles_do_not_rewrite_storage() {
    let mut sync = memory_sync();
    let mut ui = UiState::with_theme(Theme::Dark);
    assert!(sync.push(ui.theme).unwrap());

    for _ in 0..3 {
        ui.toggle_menu();
        assert!(!sync.push(ui.theme).unwrap());
    }
    ui.close_menu();
    assert!(!sync.push(ui.theme).unwrap());

    assert_eq!(writes(&sync), 1);
    assert!(sync.target.classes.contains(DARK_CLASS));
}

#[test]
fn theme_change_is_persisted_once() {
    let mut sync = memory_sync();
    let mut ui = UiState::with_theme(Theme::Dark);
    sync.push(ui.theme).unwrap();

    ui.theme = Theme::Light;
    assert!(sync.push(ui.theme).unwrap());
    assert!(!sync.push(ui.theme).unwrap());

    assert_eq!(writes(&sync), 2);
    assert!(sync.target.classes.is_empty());
    assert_eq!(sync.store.as_ref().and_then(MemoryStore::stored).as_deref(), Some("light"));
}

#[test]
fn sync_without_store_still_marks() {
    let mut sync: ThemeSync<FakeRoot, MemoryStore> = ThemeSync::new(FakeRoot::default(), None);
    assert!(sync.push(Theme::Dark).unwrap());
    assert!(sync.target.classes.contains(DARK_CLASS));
}

#[test]
fn failed_push_is_retried() {
    let mut sync = ThemeSync::new(FakeRoot::default(), Some(MemoryStore::failing()));
    assert!(sync.push(Theme::Dark).is_err());
    assert!(sync.push(Theme::Dark).is_err());
    assert!(sync.target.classes.contains(DARK_CLASS));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn theme_storage_strings() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::from_dark(true), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
}

#[test]
fn theme_serializes_as_storage_string() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_light_outside_browser() {
    assert_eq!(read_preference(), Theme::Light);
    sync(Theme::Dark);
}
