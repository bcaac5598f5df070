//! Blend-mode compositing of a tint (source) over a pixel (destination).
//!
//! Colors are straight-alpha RGBA in `[0, 1]`. Porter-Duff operators run on
//! premultiplied values. Blend functions use the W3C general formula:
//!
//! ```text
//!   αo = αs + αb·(1 − αs)
//!   co = cs·(1 − αb) + cb·(1 − αs) + αs·αb·B(Cs, Cb)
//! ```
//!
//! where lower-case `c` is premultiplied and upper-case `C` is straight color.

use crate::filters::blend_mode::BlendMode;

/// Luminosity weights of the non-separable modes.
const LUM_WEIGHTS: [f32; 3] = [0.3, 0.59, 0.11];

/// Composite `src` over `dst` with `mode`. Both are straight-alpha RGBA.
pub fn composite(src: [f32; 4], dst: [f32; 4], mode: BlendMode) -> [f32; 4] {
    let sa = src[3].clamp(0.0, 1.0);
    let da = dst[3].clamp(0.0, 1.0);
    let s = premultiply(src, sa);
    let d = premultiply(dst, da);

    let out = if mode.is_porter_duff() {
        porter_duff(s, sa, d, da, mode)
    } else {
        let blended = if mode.is_non_separable() {
            blend_non_separable(rgb(src), rgb(dst), mode)
        } else {
            let cs = rgb(src);
            let cb = rgb(dst);
            [0, 1, 2].map(|c| blend_separable(cs[c], cb[c], mode))
        };
        let mut out = [0.0_f32; 4];
        for c in 0..3 {
            out[c] = s[c] * (1.0 - da) + d[c] * (1.0 - sa) + sa * da * blended[c];
        }
        out[3] = sa + da * (1.0 - sa);
        out
    };

    unpremultiply(out)
}

fn porter_duff(s: [f32; 4], sa: f32, d: [f32; 4], da: f32, mode: BlendMode) -> [f32; 4] {
    let mut out = [0.0_f32; 4];
    for c in 0..4 {
        out[c] = match mode {
            BlendMode::Clear => 0.0,
            BlendMode::Src => s[c],
            BlendMode::Dst => d[c],
            BlendMode::SrcIn => s[c] * da,
            BlendMode::DstIn => d[c] * sa,
            BlendMode::SrcOut => s[c] * (1.0 - da),
            BlendMode::DstOut => d[c] * (1.0 - sa),
            BlendMode::SrcAtop => s[c] * da + d[c] * (1.0 - sa),
            BlendMode::DstAtop => d[c] * sa + s[c] * (1.0 - da),
            BlendMode::Xor => s[c] * (1.0 - da) + d[c] * (1.0 - sa),
            BlendMode::Plus => (s[c] + d[c]).min(1.0),
            BlendMode::Modulate => s[c] * d[c],
            // SrcOver. Blend functions never reach this match.
            _ => s[c] + d[c] * (1.0 - sa),
        };
    }
    out
}

/// Separable blend function `B(Cs, Cb)` for one channel.
pub fn blend_separable(cs: f32, cb: f32, mode: BlendMode) -> f32 {
    match mode {
        BlendMode::Multiply => cs * cb,
        BlendMode::Screen => cs + cb - cs * cb,
        BlendMode::Overlay => hard_light(cb, cs),
        BlendMode::Darken => cs.min(cb),
        BlendMode::Lighten => cs.max(cb),
        BlendMode::ColorDodge => {
            if cb <= 0.0 {
                0.0
            } else if cs >= 1.0 {
                1.0
            } else {
                (cb / (1.0 - cs)).min(1.0)
            }
        }
        BlendMode::ColorBurn => {
            if cb >= 1.0 {
                1.0
            } else if cs <= 0.0 {
                0.0
            } else {
                1.0 - ((1.0 - cb) / cs).min(1.0)
            }
        }
        BlendMode::HardLight => hard_light(cs, cb),
        BlendMode::SoftLight => soft_light(cs, cb),
        BlendMode::Difference => (cs - cb).abs(),
        BlendMode::Exclusion => cs + cb - 2.0 * cs * cb,
        _ => cs,
    }
}

fn hard_light(cs: f32, cb: f32) -> f32 {
    if cs <= 0.5 {
        cb * 2.0 * cs
    } else {
        let s = 2.0 * cs - 1.0;
        cb + s - cb * s
    }
}

fn soft_light(cs: f32, cb: f32) -> f32 {
    if cs <= 0.5 {
        cb - (1.0 - 2.0 * cs) * cb * (1.0 - cb)
    } else {
        let d = if cb <= 0.25 {
            ((16.0 * cb - 12.0) * cb + 4.0) * cb
        } else {
            cb.sqrt()
        };
        cb + (2.0 * cs - 1.0) * (d - cb)
    }
}

/// Non-separable blend function over whole RGB triples.
pub fn blend_non_separable(cs: [f32; 3], cb: [f32; 3], mode: BlendMode) -> [f32; 3] {
    match mode {
        BlendMode::Hue => set_lum(set_sat(cs, sat(cb)), lum(cb)),
        BlendMode::Saturation => set_lum(set_sat(cb, sat(cs)), lum(cb)),
        BlendMode::Color => set_lum(cs, lum(cb)),
        BlendMode::Luminosity => set_lum(cb, lum(cs)),
        _ => cs,
    }
}

fn lum(c: [f32; 3]) -> f32 {
    c[0] * LUM_WEIGHTS[0] + c[1] * LUM_WEIGHTS[1] + c[2] * LUM_WEIGHTS[2]
}

fn clip_color(c: [f32; 3]) -> [f32; 3] {
    let l = lum(c);
    let n = c[0].min(c[1]).min(c[2]);
    let x = c[0].max(c[1]).max(c[2]);
    let mut out = c;
    if n < 0.0 && (l - n).abs() > f32::EPSILON {
        out = out.map(|v| l + (v - l) * l / (l - n));
    }
    if x > 1.0 && (x - l).abs() > f32::EPSILON {
        out = out.map(|v| l + (v - l) * (1.0 - l) / (x - l));
    }
    out
}

fn set_lum(c: [f32; 3], l: f32) -> [f32; 3] {
    let d = l - lum(c);
    clip_color(c.map(|v| v + d))
}

fn sat(c: [f32; 3]) -> f32 {
    c[0].max(c[1]).max(c[2]) - c[0].min(c[1]).min(c[2])
}

/// Rescale `c` so that its saturation becomes `s`, keeping channel order.
fn set_sat(c: [f32; 3], s: f32) -> [f32; 3] {
    let max = c[0].max(c[1]).max(c[2]);
    let min = c[0].min(c[1]).min(c[2]);
    let range = max - min;
    if range <= f32::EPSILON {
        return [0.0; 3];
    }
    c.map(|v| (v - min) * s / range)
}

fn rgb(c: [f32; 4]) -> [f32; 3] {
    [c[0], c[1], c[2]]
}

fn premultiply(c: [f32; 4], a: f32) -> [f32; 4] {
    [c[0] * a, c[1] * a, c[2] * a, a]
}

fn unpremultiply(c: [f32; 4]) -> [f32; 4] {
    let a = c[3].clamp(0.0, 1.0);
    if a <= 0.0 {
        return [0.0; 4];
    }
    [
        (c[0] / a).clamp(0.0, 1.0),
        (c[1] / a).clamp(0.0, 1.0),
        (c[2] / a).clamp(0.0, 1.0),
        a,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_close(a: [f32; 4], b: [f32; 4]) {
        for c in 0..4 {
            assert!(
                (a[c] - b[c]).abs() < EPSILON,
                "channel {c}: {:.6} vs {:.6} ({a:?} vs {b:?})",
                a[c],
                b[c]
            );
        }
    }

    const PIXEL: [f32; 4] = [0.8, 0.4, 0.2, 1.0];

    #[test]
    fn test_transparent_src_over_is_identity() {
        let out = composite([1.0, 1.0, 1.0, 0.0], PIXEL, BlendMode::SrcOver);
        assert_close(out, PIXEL);
    }

    #[test]
    fn test_clear_src_dst() {
        let tint = [0.1, 0.9, 0.3, 1.0];
        assert_close(composite(tint, PIXEL, BlendMode::Clear), [0.0; 4]);
        assert_close(composite(tint, PIXEL, BlendMode::Src), tint);
        assert_close(composite(tint, PIXEL, BlendMode::Dst), PIXEL);
    }

    #[test]
    fn test_half_alpha_src_over() {
        let out = composite([0.0, 0.0, 1.0, 0.5], PIXEL, BlendMode::SrcOver);
        assert_close(out, [0.4, 0.2, 0.6, 1.0]);
    }

    #[test]
    fn test_src_in_uses_destination_alpha() {
        let tint = [0.2, 0.2, 0.2, 1.0];
        let dst = [0.5, 0.5, 0.5, 0.25];
        assert_close(composite(tint, dst, BlendMode::SrcIn), [0.2, 0.2, 0.2, 0.25]);
        assert_close(composite(tint, dst, BlendMode::SrcOut), [0.2, 0.2, 0.2, 0.75]);
        assert_close(composite(tint, dst, BlendMode::DstOut), [0.0; 4]);
    }

    #[test]
    fn test_multiply_white_is_identity() {
        let out = composite([1.0, 1.0, 1.0, 1.0], PIXEL, BlendMode::Multiply);
        assert_close(out, PIXEL);
    }

    #[test]
    fn test_screen_black_is_identity() {
        let out = composite([0.0, 0.0, 0.0, 1.0], PIXEL, BlendMode::Screen);
        assert_close(out, PIXEL);
    }

    #[test]
    fn test_modulate_and_plus() {
        let tint = [0.5, 0.5, 0.5, 1.0];
        assert_close(composite(tint, PIXEL, BlendMode::Modulate), [0.4, 0.2, 0.1, 1.0]);
        assert_close(composite(tint, PIXEL, BlendMode::Plus), [1.0, 0.9, 0.7, 1.0]);
    }

    #[test]
    fn test_difference_with_self_is_black() {
        let out = composite(PIXEL, PIXEL, BlendMode::Difference);
        assert_close(out, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_overlay_is_hard_light_swapped() {
        let (a, b) = (0.3, 0.7);
        assert!((blend_separable(a, b, BlendMode::Overlay) - blend_separable(b, a, BlendMode::HardLight)).abs() < EPSILON);
    }

    #[test]
    fn test_soft_light_half_is_identity() {
        for cb in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert!((blend_separable(0.5, cb, BlendMode::SoftLight) - cb).abs() < EPSILON);
        }
    }

    #[test]
    fn test_saturation_of_gray_tint_produces_gray() {
        let out = composite([0.5, 0.5, 0.5, 1.0], PIXEL, BlendMode::Saturation);
        assert!((out[0] - out[1]).abs() < EPSILON);
        assert!((out[1] - out[2]).abs() < EPSILON);
    }

    #[test]
    fn test_color_mode_keeps_destination_luminosity() {
        let tint = [0.0, 0.0, 1.0, 1.0];
        let out = composite(tint, PIXEL, BlendMode::Color);
        let l_out = lum([out[0], out[1], out[2]]);
        let l_dst = lum([PIXEL[0], PIXEL[1], PIXEL[2]]);
        assert!((l_out - l_dst).abs() < 1e-3, "{l_out} vs {l_dst}");
    }

    #[test]
    fn test_every_mode_stays_in_range() {
        let tint = [0.9, 0.1, 0.6, 0.7];
        let dst = [0.2, 0.95, 0.5, 0.6];
        for mode in BlendMode::ALL {
            let out = composite(tint, dst, mode);
            for v in out {
                assert!((0.0..=1.0).contains(&v), "{mode}: {out:?}");
            }
        }
    }
}
