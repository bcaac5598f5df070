//! Dark theme constants.
//!
//! All colors, sizing, and spacing values used across the Prism UI are
//! defined here so widgets share a consistent look.

use bevy::color::Color;

// ── Background colors ───────────────────────────────────────────────────────

/// Main application background.
pub const BG_DARK: Color = Color::srgb(0.118, 0.118, 0.118);

/// Panel / sidebar background.
pub const BG_PANEL: Color = Color::srgb(0.176, 0.176, 0.176);

/// Control background (buttons, drag labels).
pub const BG_CONTROL: Color = Color::srgb(0.22, 0.22, 0.22);

/// Control background while hovered.
pub const BG_CONTROL_HOVER: Color = Color::srgb(0.28, 0.28, 0.28);

/// Background of a selected toggle / radio option.
pub const BG_TOGGLE_ACTIVE: Color = Color::srgb(0.36, 0.25, 0.10);

/// Image viewport background.
pub const BG_VIEWER: Color = Color::srgb(0.06, 0.06, 0.06);

// ── Text colors ─────────────────────────────────────────────────────────────

/// Primary text (labels, values).
pub const TEXT_PRIMARY: Color = Color::srgb(0.85, 0.85, 0.85);

/// Dimmed / secondary text.
pub const TEXT_DIM: Color = Color::srgb(0.55, 0.55, 0.55);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Accent color for selected items and active controls.
pub const ACCENT: Color = Color::srgb(0.95, 0.55, 0.094);

// ── Border ──────────────────────────────────────────────────────────────────

/// Subtle panel border color.
pub const BORDER_SUBTLE: Color = Color::srgb(0.26, 0.26, 0.26);

// ── Sizing ──────────────────────────────────────────────────────────────────

/// Inner padding (px) applied to panels.
pub const PANEL_PADDING: f32 = 8.0;

/// Width (px) of the right-hand parameter panel.
pub const SIDE_PANEL_WIDTH: f32 = 360.0;

/// Height (px) of the gallery strip.
pub const GALLERY_STRIP_HEIGHT: f32 = 96.0;

/// Longest side (px) of a gallery thumbnail.
pub const THUMBNAIL_SIZE: u32 = 72;

/// Height (px) of buttons, drag labels, and dropdown rows.
pub const CONTROL_HEIGHT: f32 = 24.0;

/// Width (px) of a drag label in the color-matrix grid.
pub const MATRIX_CELL_WIDTH: f32 = 56.0;

/// Width (px) of a drag label in the lighting / blend rows.
pub const CHANNEL_LABEL_WIDTH: f32 = 64.0;

/// Edge length (px) of a color swatch.
pub const SWATCH_SIZE: f32 = 28.0;

/// Max height (px) of the blend-mode menu before it scrolls.
pub const DROPDOWN_MAX_HEIGHT: f32 = 300.0;

// ── Typography ──────────────────────────────────────────────────────────────

/// Font size for control labels.
pub const FONT_SIZE_LABEL: f32 = 11.0;

/// Font size for numeric readouts.
pub const FONT_SIZE_VALUE: f32 = 12.0;

/// Font size for panel headings.
pub const FONT_SIZE_HEADING: f32 = 14.0;
