//! Application configuration for the demo.

use bevy::prelude::*;
use prism_core::FilterKind;
use std::path::PathBuf;

/// Default longest side (px) of images added to the gallery.
const DEFAULT_PREVIEW_MAX: u32 = 1280;
/// Smallest accepted preview limit.
const MIN_PREVIEW_MAX: u32 = 16;
/// Default window title.
const DEFAULT_TITLE: &str = "Prism";

/// Runtime configuration for the Prism demo application.
#[derive(Resource, Clone, Debug)]
pub struct AppConfig {
    /// Directory whose images are appended to the built-in gallery.
    pub gallery_dir: Option<PathBuf>,
    /// Loaded images are downscaled so neither side exceeds this.
    pub preview_max: u32,
    /// Filter selected at startup.
    pub initial_filter: FilterKind,
    /// Window title.
    pub title: String,
}

impl AppConfig {
    /// Build from a variable lookup. `Default` uses the process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let preview_max = var("PRISM_PREVIEW_MAX")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|v| v.max(MIN_PREVIEW_MAX))
            .unwrap_or(DEFAULT_PREVIEW_MAX);

        let initial_filter = match var("PRISM_INITIAL_FILTER") {
            Some(s) => s.parse().unwrap_or_else(|e| {
                tracing::warn!("PRISM_INITIAL_FILTER: {e}, using default");
                FilterKind::default()
            }),
            None => FilterKind::default(),
        };

        Self {
            gallery_dir: var("PRISM_GALLERY_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            preview_max,
            initial_filter,
            title: var("PRISM_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }
}
