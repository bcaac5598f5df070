//! Bevy resources for the filter preview pipeline.

use bevy::prelude::*;
use prism_core::{FilterKind, FilterSession, Gallery};
use std::time::{Duration, Instant};

/// Bevy resource holding the filter session.
///
/// This is the single source of truth for filter parameters within the ECS.
/// UI systems read it to draw labels; only `handle_filter_commands` and the
/// preview renderer write it.
#[derive(Resource)]
pub struct FilterState {
    /// Active filter kind plus the three parameter stores.
    pub session: FilterSession,
    /// Whether the preview is stale.
    pub dirty: bool,
}

impl FilterState {
    pub fn new(active: FilterKind) -> Self {
        Self {
            session: FilterSession::new(active),
            dirty: true,
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(FilterKind::default())
    }
}

/// The image gallery and its current selection.
#[derive(Resource, Default)]
pub struct GalleryState {
    pub gallery: Gallery,
}

/// Filtered preview pixels ready for upload as an RGBA8 sRGB texture.
#[derive(Resource, Default)]
pub struct ViewerData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 bytes, row-major.
    pub pixel_bytes: Vec<u8>,
}

/// Timing of preview re-renders.
#[derive(Resource)]
pub struct PreviewPerfStats {
    /// Number of renders since startup.
    pub renders: u64,
    /// Duration of the most recent render.
    pub last_render: Duration,
    /// Renders slower than this are always logged.
    pub slow_render_threshold: Duration,
    pub last_log_at: Instant,
}

impl Default for PreviewPerfStats {
    fn default() -> Self {
        Self {
            renders: 0,
            last_render: Duration::ZERO,
            slow_render_threshold: Duration::from_millis(12),
            last_log_at: Instant::now(),
        }
    }
}
