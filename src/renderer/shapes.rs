//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen pixels.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Drawn vectors shorter than this get no arrowhead
const MIN_ARROW_LENGTH: f32 = 5.0;

fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    // a-b-c-d in winding order
    push_triangle(out, a, b, c, color);
    push_triangle(out, a, c, d, color);
}

/// Segment count that keeps circles smooth at any size
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 0.5) as u32).clamp(16, 128)
}

/// Filled circle
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    let segments = segments_for(radius);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        push_triangle(
            out,
            center,
            center + radius * Vec2::from_angle(theta1),
            center + radius * Vec2::from_angle(theta2),
            color,
        );
    }
}

/// Hollow circle of the given stroke width
pub fn ring(out: &mut Vec<Vertex>, center: Vec2, radius: f32, width: f32, color: [f32; 4]) {
    let inner_radius = (radius - width / 2.0).max(0.0);
    let outer_radius = radius + width / 2.0;
    let segments = segments_for(radius);

    for i in 0..segments {
        let d1 = Vec2::from_angle((i as f32 / segments as f32) * TAU);
        let d2 = Vec2::from_angle(((i + 1) as f32 / segments as f32) * TAU);

        push_quad(
            out,
            center + d1 * inner_radius,
            center + d1 * outer_radius,
            center + d2 * outer_radius,
            center + d2 * inner_radius,
            color,
        );
    }
}

/// Thick line segment. Zero-length segments draw nothing.
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let Some(dir) = (to - from).try_normalize() else {
        return;
    };
    // Perpendicular for width
    let half = dir.perp() * (width / 2.0);
    push_quad(out, from + half, to + half, to - half, from - half, color);
}

/// Open polyline through `points`
pub fn polyline<'a>(
    out: &mut Vec<Vertex>,
    points: impl IntoIterator<Item = &'a Vec2>,
    width: f32,
    color: [f32; 4],
) {
    let mut points = points.into_iter();
    let Some(mut prev) = points.next().copied() else {
        return;
    };
    for &p in points {
        line(out, prev, p, width, color);
        prev = p;
    }
}

/// Filled axis-aligned rectangle
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    push_quad(
        out,
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    );
}

/// Rectangle outline drawn inside the bounds
pub fn rect_outline(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, width: f32, color: [f32; 4]) {
    let w = width.min(size.x / 2.0).min(size.y / 2.0);
    rect(out, min, Vec2::new(size.x, w), color);
    rect(out, Vec2::new(min.x, min.y + size.y - w), Vec2::new(size.x, w), color);
    rect(out, Vec2::new(min.x, min.y + w), Vec2::new(w, size.y - 2.0 * w), color);
    rect(
        out,
        Vec2::new(min.x + size.x - w, min.y + w),
        Vec2::new(w, size.y - 2.0 * w),
        color,
    );
}

/// Arrow style for [`arrow`]
#[derive(Debug, Clone, Copy)]
pub struct ArrowStyle {
    /// Multiplier from vector units to pixels
    pub scale: f32,
    pub width: f32,
    /// Arrowhead length in pixels
    pub head: f32,
    pub color: [f32; 4],
}

/// Vector arrow from `start` along `direction * scale`.
///
/// Returns `false` (and draws nothing) when the end point is not finite or
/// the vector has no length.
pub fn arrow(out: &mut Vec<Vertex>, start: Vec2, direction: Vec2, style: ArrowStyle) -> bool {
    let end = start + direction * style.scale;
    if !start.is_finite() || !end.is_finite() || direction.length_squared() == 0.0 {
        return false;
    }

    line(out, start, end, style.width, style.color);

    let length = direction.length() * style.scale;
    if length > MIN_ARROW_LENGTH {
        let angle = direction.y.atan2(direction.x);
        let p1 = end - style.head * Vec2::from_angle(angle - PI / 6.0);
        let p2 = end - style.head * Vec2::from_angle(angle + PI / 6.0);
        push_triangle(out, end, p1, p2, style.color);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn style(scale: f32) -> ArrowStyle {
        ArrowStyle {
            scale,
            width: 2.0,
            head: 12.0,
            color: WHITE,
        }
    }

    #[test]
    fn test_arrow_skips_degenerate() {
        let mut out = Vec::new();
        assert!(!arrow(&mut out, Vec2::ZERO, Vec2::ZERO, style(1.0)));
        assert!(!arrow(&mut out, Vec2::ZERO, Vec2::new(f32::NAN, 1.0), style(1.0)));
        assert!(!arrow(&mut out, Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0), style(1.0)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_arrowhead_only_when_long_enough() {
        let mut short = Vec::new();
        assert!(arrow(&mut short, Vec2::ZERO, Vec2::new(1.0, 0.0), style(4.0)));
        assert_eq!(short.len(), 6);

        let mut long = Vec::new();
        assert!(arrow(&mut long, Vec2::ZERO, Vec2::new(1.0, 0.0), style(50.0)));
        assert_eq!(long.len(), 9);
        // Tip of the head sits at the end point
        assert_eq!(long[6].position, [50.0, 0.0]);
    }

    #[test]
    fn test_polyline_segments() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let mut out = Vec::new();
        polyline(&mut out, points.iter(), 2.0, WHITE);
        assert_eq!(out.len(), 12);

        let mut single = Vec::new();
        polyline(&mut single, points[..1].iter(), 2.0, WHITE);
        assert!(single.is_empty());
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::new(5.0, 5.0), 10.0, WHITE);
        assert_eq!(out.len() % 3, 0);
        for tri in out.chunks(3) {
            let edge = Vec2::from(tri[1].position) - Vec2::new(5.0, 5.0);
            assert!((edge.length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_line_width() {
        let mut out = Vec::new();
        line(&mut out, Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, WHITE);
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 2.0).abs() < 1e-6));
    }
}
