//! Minimalistic styles - no external CSS files
//!
//! Clean, practical design with light/dark theme support.

// ============================================================================
// Theme-aware style generators
// ============================================================================

/// Generate app style based on theme
pub fn app_style(dark: bool) -> String {
    let (bg, fg) = if dark {
        ("#0d1117", "#c9d1d9")
    } else {
        ("#ffffff", "#1a1a1a")
    };
    format!(
        "min-height: 100vh; \
         display: flex; \
         flex-direction: column; \
         font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif; \
         font-size: 14px; \
         background: {bg}; \
         color: {fg}; \
         line-height: 1.5; \
         margin: 0; \
         padding: 0;"
    )
}

/// Generate header style
pub fn header_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "display: flex; \
         justify-content: space-between; \
         align-items: center; \
         padding: 0.75rem 1rem; \
         background: {bg}; \
         border-bottom: 1px solid {border};"
    )
}

/// Generate title style
pub fn title_style(_dark: bool) -> &'static str {
    "font-size: 1.1rem; \
     font-weight: 600; \
     margin: 0;"
}

/// Subtitle under the main title
pub fn subtitle_style(dark: bool) -> String {
    let fg = if dark { "#8b949e" } else { "#57606a" };
    format!("font-size: 0.8rem; color: {fg}; margin: 0;")
}

/// Generate theme toggle button style
pub fn toggle_btn_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#21262d", "#c9d1d9", "#30363d")
    } else {
        ("#f6f8fa", "#1a1a1a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.35rem 0.75rem; \
         font-family: inherit; \
         font-size: 0.8rem; \
         border-radius: 6px; \
         cursor: pointer;"
    )
}

/// Main content area: sidebar + charts
pub fn layout_style(_dark: bool) -> &'static str {
    "display: flex; \
     align-items: flex-start; \
     gap: 1rem; \
     padding: 1rem; \
     max-width: 1800px; \
     width: 100%; \
     margin: 0 auto; \
     box-sizing: border-box; \
     flex: 1;"
}

/// Sidebar style
pub fn sidebar_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "width: 280px; \
         min-width: 280px; \
         background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         display: flex; \
         flex-direction: column; \
         overflow: hidden;"
    )
}

/// Collapsed sidebar rail
pub fn sidebar_collapsed_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "width: 36px; \
         min-width: 36px; \
         background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         padding: 0.25rem; \
         box-sizing: border-box;"
    )
}

/// Sidebar section header
pub fn sidebar_header_style(dark: bool) -> String {
    let border = if dark { "#30363d" } else { "#d0d7de" };
    format!(
        "padding: 0.5rem 0.75rem; \
         border-bottom: 1px solid {border}; \
         display: flex; \
         flex-direction: column; \
         gap: 0.35rem;"
    )
}

/// Search input style
pub fn search_input_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#0d1117", "#c9d1d9", "#30363d")
    } else {
        ("#ffffff", "#1a1a1a", "#d0d7de")
    };
    format!(
        "width: 100%; \
         box-sizing: border-box; \
         padding: 0.5rem 0.75rem; \
         background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         font-family: inherit; \
         font-size: 0.85rem; \
         outline: none;"
    )
}

/// Small clickable badge; `active` fills it in
pub fn badge_btn_style(dark: bool, active: bool) -> String {
    let (bg, fg, border) = if active {
        ("#3b82f6", "#ffffff", "#3b82f6")
    } else if dark {
        ("transparent", "#c9d1d9", "#30363d")
    } else {
        ("transparent", "#1a1a1a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.15rem 0.5rem; \
         font-family: inherit; \
         font-size: 0.75rem; \
         border-radius: 9999px; \
         cursor: pointer;"
    )
}

/// One row in the model list
pub fn model_row_style(_dark: bool) -> &'static str {
    "display: flex; \
     align-items: center; \
     gap: 0.5rem; \
     padding: 0.3rem 0.75rem; \
     cursor: pointer; \
     border-radius: 4px;"
}

/// Scrollable model list container
pub fn model_list_style(_dark: bool) -> &'static str {
    "max-height: 560px; \
     overflow-y: auto; \
     padding: 0.25rem 0;"
}

/// Round color dot for a model without a provider mark
pub fn color_dot_style(color: &str) -> String {
    format!(
        "width: 10px; \
         height: 10px; \
         border-radius: 50%; \
         background: {color}; \
         flex-shrink: 0;"
    )
}

/// Muted secondary text
pub fn muted_style(dark: bool) -> String {
    let fg = if dark { "#8b949e" } else { "#57606a" };
    format!("color: {fg};")
}

/// Tab bar under the header
pub fn tab_bar_style(dark: bool) -> String {
    let border = if dark { "#30363d" } else { "#d0d7de" };
    format!(
        "display: flex; \
         gap: 0.25rem; \
         border-bottom: 1px solid {border}; \
         margin-bottom: 1rem;"
    )
}

/// One tab button; `active` underlines it
pub fn tab_btn_style(dark: bool, active: bool) -> String {
    let fg = if active {
        "#3b82f6"
    } else if dark {
        "#8b949e"
    } else {
        "#57606a"
    };
    let underline = if active { "#3b82f6" } else { "transparent" };
    format!(
        "background: none; \
         color: {fg}; \
         border: none; \
         border-bottom: 2px solid {underline}; \
         padding: 0.5rem 0.9rem; \
         font-family: inherit; \
         font-size: 0.85rem; \
         cursor: pointer;"
    )
}

/// Chart panel frame
pub fn panel_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#ffffff", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         overflow: hidden;"
    )
}

/// Panel header row
pub fn panel_header_style(dark: bool) -> String {
    let border = if dark { "#30363d" } else { "#d0d7de" };
    format!(
        "display: flex; \
         justify-content: space-between; \
         align-items: center; \
         gap: 0.5rem; \
         padding: 0.75rem 1rem; \
         border-bottom: 1px solid {border};"
    )
}

/// Panel title
pub fn panel_title_style(_dark: bool) -> &'static str {
    "font-size: 0.95rem; \
     font-weight: 600; \
     margin: 0;"
}

/// Panel description line
pub fn panel_desc_style(dark: bool) -> String {
    let fg = if dark { "#8b949e" } else { "#57606a" };
    format!("font-size: 0.75rem; color: {fg}; margin: 0;")
}

/// Floating tooltip over a chart
pub fn tooltip_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#1c2128", "#c9d1d9", "#30363d")
    } else {
        ("#ffffff", "#1a1a1a", "#d0d7de")
    };
    format!(
        "position: absolute; \
         background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         padding: 0.5rem 0.75rem; \
         font-size: 0.75rem; \
         box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3); \
         z-index: 10; \
         white-space: nowrap;"
    )
}

/// Small outline button (Reset Zoom, collapse toggle)
pub fn small_btn_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#21262d", "#c9d1d9", "#30363d")
    } else {
        ("#f6f8fa", "#1a1a1a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.25rem 0.6rem; \
         font-family: inherit; \
         font-size: 0.75rem; \
         border-radius: 6px; \
         cursor: pointer;"
    )
}

/// Loading / error / empty containers
pub fn status_style(dark: bool) -> String {
    let fg = if dark { "#8b949e" } else { "#57606a" };
    format!(
        "padding: 3rem; \
         text-align: center; \
         color: {fg};"
    )
}

/// Error banner
pub fn error_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#2d1214", "#ff7b72", "#6e2a2f")
    } else {
        ("#ffebe9", "#cf222e", "#ff818266")
    };
    format!(
        "margin: 2rem auto; \
         max-width: 600px; \
         padding: 1rem; \
         background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         border-radius: 6px;"
    )
}

/// Inline code style
pub fn code_style(dark: bool) -> String {
    let bg = if dark { "#21262d" } else { "#eaeef2" };
    format!(
        "background: {bg}; \
         padding: 0.15rem 0.4rem; \
         border-radius: 4px; \
         font-family: 'SF Mono', 'Fira Code', monospace; \
         font-size: 0.85em;"
    )
}

// ============================================================================
// Chart colors
// ============================================================================

/// Gridline color
pub fn grid_color(dark: bool) -> &'static str {
    if dark {
        "#21262d"
    } else {
        "#d8dee4"
    }
}

/// Axis label color
pub fn axis_color(dark: bool) -> &'static str {
    if dark {
        "#8b949e"
    } else {
        "#57606a"
    }
}
