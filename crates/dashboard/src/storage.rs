//! Browser-backed preference store
//!
//! localStorage is only reachable once the app runs inside a window, which
//! is why preferences are restored in a mount effect rather than during the
//! first render. Absent storage or a failed read yields `None`; failed
//! writes are dropped and the in-memory signals stay authoritative.

use model_bench_core::PreferenceStore;

/// `PreferenceStore` over `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.set_item(key, value);
        }
    }
}
