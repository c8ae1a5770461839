//! model-bench-core - View-state engine for the model-bench dashboard
//!
//! This crate contains WASM-compatible code shared between native tooling
//! and the web dashboard. All state-transition logic lives here; rendering
//! does not.
//!
//! # Features
//!
//! - Benchmark dataset types and loading
//! - Selection state with copy-on-write set operations
//! - Derived chart views: filtering, stable colors, per-mode sorting, layout sizing
//! - Drag-to-zoom state machine for the combined scatter view
//! - Preference persistence over an injected key-value store

pub mod data;
pub mod error;
pub mod prefs;
pub mod selection;
pub mod view;
pub mod zoom;

pub use data::{BenchmarkDataset, BenchmarkRecord};
pub use error::{Error, Result};
pub use prefs::{MemoryStore, Orientation, PreferenceStore, Preferences, SelectorMode};
pub use selection::Selection;
pub use view::{
    chart_height, default_x_domain, default_y_domain, derive_view, label_axis_width, model_color,
    ChartMode, ViewEntry, MODEL_COLORS,
};
pub use zoom::{DragZoom, SelectionRect, ZoomState, MIN_X_SPAN, MIN_Y_SPAN};
