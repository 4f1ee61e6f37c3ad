use gallery_common::{Color, DVec2};
use std::ops::Range;

/// Device pixel ranges covering the user-space box `[min, max]`, clipped to
/// a `width x height` backing store. `None` when nothing is left.
pub(crate) fn device_span(
    min: DVec2,
    max: DVec2,
    scale: DVec2,
    width: u32,
    height: u32,
) -> Option<(Range<u32>, Range<u32>)> {
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    let clip = |v: f64, limit: u32| v.clamp(0.0, limit as f64) as u32;
    let x0 = clip((min.x * scale.x).floor(), width);
    let x1 = clip((max.x * scale.x).ceil(), width);
    let y0 = clip((min.y * scale.y).floor(), height);
    let y1 = clip((max.y * scale.y).ceil(), height);
    (x0 < x1 && y0 < y1).then_some((x0..x1, y0..y1))
}

/// User-space position of the center of device pixel `(px, py)`.
pub(crate) fn sample_point(px: u32, py: u32, scale: DVec2) -> DVec2 {
    DVec2::new(
        (px as f64 + 0.5) / scale.x,
        (py as f64 + 0.5) / scale.y,
    )
}

/// Source-over blend of `src` onto a straight-alpha RGBA8 pixel.
pub(crate) fn blend(dst: &mut [u8; 4], src: Color) {
    let sa = src.a.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    if sa >= 1.0 {
        *dst = [src.r, src.g, src.b, 255];
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mix = |s: u8, d: u8| {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    *dst = [
        mix(src.r, dst[0]),
        mix(src.g, dst[1]),
        mix(src.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ];
}

fn cross(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Nonzero-rule winding number of `p` against a closed edge list.
pub(crate) fn winding_number(p: DVec2, edges: &[(DVec2, DVec2)]) -> i32 {
    let mut wn = 0;
    for &(a, b) in edges {
        if a.y <= p.y {
            if b.y > p.y && cross(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && cross(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Euclidean distance from `p` to the segment `a-b`.
pub(crate) fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
