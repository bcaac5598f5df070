//! Per-pixel filter evaluation behind the preview.

pub mod composite;
pub mod filter;
