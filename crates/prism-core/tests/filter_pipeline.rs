//! End-to-end checks: session edits flow through `ColorFilter` onto images.
//!
//! Run with: `cargo test -p prism-core`

use prism_core::{
    BlendMode, Channel, FilterImage, FilterKind, FilterSession, Gallery, MatrixPreset, ParamField,
};

const EPSILON: f32 = 1e-4;

fn assert_images_close(a: &FilterImage, b: &FilterImage, label: &str) {
    assert_eq!((a.width, a.height), (b.width, b.height), "{label}: size");
    for (i, (pa, pb)) in a.pixels.iter().zip(&b.pixels).enumerate() {
        for c in 0..4 {
            assert!(
                (pa[c] - pb[c]).abs() < EPSILON,
                "{label}: pixel {i} channel {c}: {pa:?} vs {pb:?}"
            );
        }
    }
}

#[test]
fn test_default_filters_leave_gallery_unchanged() {
    let gallery = Gallery::builtin();
    let session = FilterSession::default();
    for entry in gallery.entries() {
        let image = entry.image.fit_within(64);
        for kind in FilterKind::ALL {
            let out = session.filter_for(kind).apply(&image);
            assert_images_close(&out, &image, &format!("{} / {kind}", entry.name));
        }
    }
}

#[test]
fn test_grayscale_preset_through_session() {
    let mut session = FilterSession::new(FilterKind::ColorMatrix);
    session.apply_preset(MatrixPreset::Grayscale);
    let image = Gallery::builtin().entries()[1].image.fit_within(32);
    let out = session.active_filter().apply(&image);
    for p in &out.pixels {
        assert!((p[0] - p[1]).abs() < EPSILON && (p[1] - p[2]).abs() < EPSILON, "{p:?}");
        assert!((p[3] - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_invert_twice_restores_image() {
    let mut session = FilterSession::new(FilterKind::ColorMatrix);
    session.apply_preset(MatrixPreset::Invert);
    let image = Gallery::builtin().entries()[3].image.fit_within(32);
    let filter = session.active_filter();
    let twice = filter.apply(&filter.apply(&image));
    assert_images_close(&twice, &image, "invert twice");
}

#[test]
fn test_drag_edits_drive_lighting_output() {
    let mut session = FilterSession::new(FilterKind::Lighting);
    let red = ParamField::Multiply(Channel::Red);
    for _ in 0..100 {
        session.nudge(red, -3.0);
    }
    assert_eq!(session.get(red), 0.0);

    let image = FilterImage::solid(4, 4, [0.6, 0.6, 0.6, 1.0]);
    let out = session.active_filter().apply(&image);
    assert_eq!(out.pixels[0][0], 0.0);
    assert!((out.pixels[0][1] - 0.6).abs() < EPSILON);
}

#[test]
fn test_opaque_tint_src_replaces_pixels() {
    let mut session = FilterSession::new(FilterKind::Blend);
    session.set(ParamField::Tint(Channel::Red), 0.0);
    session.set(ParamField::Tint(Channel::Alpha), 1.0);
    session.set_blend_mode(BlendMode::Src);
    let image = FilterImage::solid(2, 2, [0.3, 0.3, 0.3, 1.0]);
    let out = session.active_filter().apply(&image);
    for p in &out.pixels {
        assert_eq!(*p, [0.0, 1.0, 1.0, 1.0]);
    }
}

#[test]
fn test_switching_filter_keeps_other_stores() {
    let mut session = FilterSession::new(FilterKind::ColorMatrix);
    session.apply_preset(MatrixPreset::Sepia);
    session.active = FilterKind::Lighting;
    session.reset_active();
    session.active = FilterKind::ColorMatrix;
    assert!(!session.color_matrix.is_identity());
}
