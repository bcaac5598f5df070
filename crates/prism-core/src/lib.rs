//! Prism Core: domain layer for the color-filter playground.
//!
//! This crate contains the filter parameter stores, the color-matrix presets,
//! the drag-step rule used by the editing labels, and a CPU evaluator for the
//! three filter kinds. No GPU or framework dependencies.

pub mod error;
pub mod filters;
pub mod gallery;
pub mod image;
pub mod param;
pub mod stepper;
pub mod transform;

// Re-exports for convenience.
pub use error::PrismError;
pub use filters::blend::BlendParams;
pub use filters::blend_mode::BlendMode;
pub use filters::color_matrix::{ColorMatrixParams, MatrixPreset};
pub use filters::lighting::LightingParams;
pub use filters::session::FilterSession;
pub use filters::FilterKind;
pub use gallery::{Gallery, GalleryEntry};
pub use image::FilterImage;
pub use param::{Channel, ParamField, ParamRange, ValueFormat};
pub use stepper::DragStepper;
pub use transform::filter::ColorFilter;
