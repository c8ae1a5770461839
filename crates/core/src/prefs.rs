//! Persisted display preferences
//!
//! The view layer depends on an abstract get/set store rather than a
//! concrete browser API; the dashboard injects a localStorage-backed
//! implementation and tests use [`MemoryStore`]. Reads happen once at
//! client-side mount. Missing or malformed values fall back to their
//! defaults, and write failures are swallowed: the in-memory state stays
//! authoritative for the session either way.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::selection::Selection;

/// Key-value capability backing preference persistence
pub trait PreferenceStore {
    /// Returns `None` on absence or on any read failure
    fn get(&self, key: &str) -> Option<String>;
    /// Write failures are dropped
    fn set(&self, key: &str, value: &str);
}

/// Selected model ids, as a JSON array of strings
pub const KEY_SELECTED_MODELS: &str = "model-bench:selected-models";
/// Bar chart orientation: `horizontal` / `vertical`
pub const KEY_ORIENTATION: &str = "model-bench:orientation";
/// Selector UI flavor: `list` / `command`
pub const KEY_SELECTOR_MODE: &str = "model-bench:selector-mode";
/// `true` / `false`
pub const KEY_SHOW_PERCENTAGES: &str = "model-bench:show-percentages";
/// `true` / `false`
pub const KEY_SIDEBAR_COLLAPSED: &str = "model-bench:sidebar-collapsed";
/// `dark` / `light`
pub const KEY_THEME: &str = "model-bench:theme";

/// Bar chart orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Model selector UI flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorMode {
    #[default]
    List,
    Command,
}

impl SelectorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectorMode::List => "list",
            SelectorMode::Command => "command",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(SelectorMode::List),
            "command" => Some(SelectorMode::Command),
            _ => None,
        }
    }
}

/// The restored preference set
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// `None` when nothing valid was persisted; callers fall back to the
    /// top-10 default selection
    pub selected: Option<Selection>,
    pub orientation: Orientation,
    pub selector_mode: SelectorMode,
    pub show_percentages: bool,
    pub sidebar_collapsed: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            selected: None,
            orientation: Orientation::default(),
            selector_mode: SelectorMode::default(),
            show_percentages: true,
            sidebar_collapsed: false,
            dark_mode: true,
        }
    }
}

impl Preferences {
    /// One-shot read of every key. Malformed entries keep their defaults.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            selected: store
                .get(KEY_SELECTED_MODELS)
                .and_then(|raw| parse_selection(&raw)),
            orientation: store
                .get(KEY_ORIENTATION)
                .and_then(|s| Orientation::parse(&s))
                .unwrap_or(defaults.orientation),
            selector_mode: store
                .get(KEY_SELECTOR_MODE)
                .and_then(|s| SelectorMode::parse(&s))
                .unwrap_or(defaults.selector_mode),
            show_percentages: store
                .get(KEY_SHOW_PERCENTAGES)
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.show_percentages),
            sidebar_collapsed: store
                .get(KEY_SIDEBAR_COLLAPSED)
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.sidebar_collapsed),
            dark_mode: store
                .get(KEY_THEME)
                .and_then(|s| parse_theme(&s))
                .unwrap_or(defaults.dark_mode),
        }
    }

    /// Write the selection through as an ordered id list
    pub fn store_selection(store: &dyn PreferenceStore, selection: &Selection) {
        let ids: Vec<&str> = selection.iter().collect();
        if let Ok(encoded) = serde_json::to_string(&ids) {
            store.set(KEY_SELECTED_MODELS, &encoded);
        }
    }

    pub fn store_orientation(store: &dyn PreferenceStore, orientation: Orientation) {
        store.set(KEY_ORIENTATION, orientation.as_str());
    }

    pub fn store_selector_mode(store: &dyn PreferenceStore, mode: SelectorMode) {
        store.set(KEY_SELECTOR_MODE, mode.as_str());
    }

    pub fn store_show_percentages(store: &dyn PreferenceStore, value: bool) {
        store.set(KEY_SHOW_PERCENTAGES, bool_str(value));
    }

    pub fn store_sidebar_collapsed(store: &dyn PreferenceStore, value: bool) {
        store.set(KEY_SIDEBAR_COLLAPSED, bool_str(value));
    }

    pub fn store_theme(store: &dyn PreferenceStore, dark: bool) {
        store.set(KEY_THEME, if dark { "dark" } else { "light" });
    }
}

fn parse_selection(raw: &str) -> Option<Selection> {
    let ids: Vec<String> = serde_json::from_str(raw).ok()?;
    Some(Selection::from_models(ids))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_theme(s: &str) -> Option<bool> {
    match s {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// In-memory store for tests and native runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.selected.is_none());
        assert!(prefs.show_percentages);
        assert!(!prefs.sidebar_collapsed);
        assert!(prefs.dark_mode);
        assert_eq!(prefs.orientation, Orientation::Horizontal);
        assert_eq!(prefs.selector_mode, SelectorMode::List);
    }

    #[test]
    fn selection_round_trips() {
        let store = MemoryStore::new();
        let selection = Selection::from_models(["gpt-5-high", "o3-pro"]);
        Preferences::store_selection(&store, &selection);

        let restored = Preferences::load(&store).selected.unwrap();
        assert_eq!(restored, selection);
        assert!(restored.contains("gpt-5-high"));
        assert!(restored.contains("o3-pro"));
    }

    #[test]
    fn empty_selection_round_trips_as_empty() {
        let store = MemoryStore::new();
        Preferences::store_selection(&store, &Selection::none());
        let restored = Preferences::load(&store).selected.unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn corrupted_selection_falls_back_to_none() {
        let store = MemoryStore::new();
        store.set(KEY_SELECTED_MODELS, "not json at all");
        assert!(Preferences::load(&store).selected.is_none());

        store.set(KEY_SELECTED_MODELS, r#"{"unexpected": "shape"}"#);
        assert!(Preferences::load(&store).selected.is_none());
    }

    #[test]
    fn booleans_are_plain_strings() {
        let store = MemoryStore::new();
        Preferences::store_show_percentages(&store, false);
        Preferences::store_sidebar_collapsed(&store, true);

        assert_eq!(store.get(KEY_SHOW_PERCENTAGES).as_deref(), Some("false"));
        assert_eq!(store.get(KEY_SIDEBAR_COLLAPSED).as_deref(), Some("true"));

        let prefs = Preferences::load(&store);
        assert!(!prefs.show_percentages);
        assert!(prefs.sidebar_collapsed);
    }

    #[test]
    fn malformed_booleans_use_defaults() {
        let store = MemoryStore::new();
        store.set(KEY_SHOW_PERCENTAGES, "yes");
        store.set(KEY_SIDEBAR_COLLAPSED, "1");

        let prefs = Preferences::load(&store);
        assert!(prefs.show_percentages);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn orientation_and_selector_mode_round_trip() {
        let store = MemoryStore::new();
        Preferences::store_orientation(&store, Orientation::Vertical);
        Preferences::store_selector_mode(&store, SelectorMode::Command);

        let prefs = Preferences::load(&store);
        assert_eq!(prefs.orientation, Orientation::Vertical);
        assert_eq!(prefs.selector_mode, SelectorMode::Command);

        store.set(KEY_ORIENTATION, "diagonal");
        store.set(KEY_SELECTOR_MODE, "wheel");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.orientation, Orientation::Horizontal);
        assert_eq!(prefs.selector_mode, SelectorMode::List);
    }

    #[test]
    fn theme_round_trips() {
        let store = MemoryStore::new();
        Preferences::store_theme(&store, false);
        assert_eq!(store.get(KEY_THEME).as_deref(), Some("light"));
        assert!(!Preferences::load(&store).dark_mode);

        store.set(KEY_THEME, "solarized");
        assert!(Preferences::load(&store).dark_mode);
    }

    #[test]
    fn stale_ids_survive_the_round_trip() {
        let store = MemoryStore::new();
        let selection = Selection::from_models(["current-model", "retired-model"]);
        Preferences::store_selection(&store, &selection);

        // stale ids are not purged from storage; filtering ignores them later
        let restored = Preferences::load(&store).selected.unwrap();
        assert_eq!(restored.len(), 2);
        assert!(restored.contains("retired-model"));
    }

    #[test]
    fn keys_are_namespaced() {
        for key in [
            KEY_SELECTED_MODELS,
            KEY_ORIENTATION,
            KEY_SELECTOR_MODE,
            KEY_SHOW_PERCENTAGES,
            KEY_SIDEBAR_COLLAPSED,
            KEY_THEME,
        ] {
            assert!(key.starts_with("model-bench:"));
        }
    }
}
