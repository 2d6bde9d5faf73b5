//! Renderable primitive types handed to the viewport

use crate::math::Vec3;
use crate::room::RoomColor;

/// RGBA color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert an HSV room color to RGB with the given alpha.
    ///
    /// Standard six-sector conversion; hue 0 and 360 both map to red.
    pub fn from_hsv(color: &RoomColor, alpha: f32) -> Self {
        let (h, s, v) = color.normalized();
        if s <= 0.0 {
            return Self::new(v, v, v, alpha);
        }
        let h6 = (h * 6.0) % 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r, g, b, alpha)
    }
}

/// A single line segment in room space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// An indexed triangle mesh with one flat color for all faces
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
    pub color: Rgba,
}

impl TriMesh {
    /// Two-triangle quad from four corners in winding order
    pub fn quad(corners: [Vec3; 4], color: Rgba) -> Self {
        Self {
            vertices: corners.to_vec(),
            faces: vec![[0, 1, 2], [0, 2, 3]],
            color,
        }
    }
}

/// Ground grid description: overall size, line spacing, and the offset of
/// the grid center from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub size: (f32, f32),
    pub spacing: f32,
    pub offset: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Rgba::from_hsv(&RoomColor::new(0.0, 100.0, 100.0), 1.0);
        assert!(approx(red.r, 1.0) && approx(red.g, 0.0) && approx(red.b, 0.0));

        let green = Rgba::from_hsv(&RoomColor::new(120.0, 100.0, 100.0), 1.0);
        assert!(approx(green.g, 1.0) && approx(green.r, 0.0));

        let blue = Rgba::from_hsv(&RoomColor::new(240.0, 100.0, 100.0), 1.0);
        assert!(approx(blue.b, 1.0) && approx(blue.g, 0.0));
    }

    #[test]
    fn test_hsv_default_room_color() {
        // hue 216, sat 50, val 100 -> (0.5, 0.7, 1.0)
        let c = Rgba::from_hsv(&RoomColor::default(), 0.3);
        assert!(approx(c.r, 0.5));
        assert!(approx(c.g, 0.7));
        assert!(approx(c.b, 1.0));
        assert!(approx(c.a, 0.3));
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        let c = Rgba::from_hsv(&RoomColor::new(123.0, 0.0, 50.0), 1.0);
        assert!(approx(c.r, 0.5) && approx(c.g, 0.5) && approx(c.b, 0.5));
    }

    #[test]
    fn test_quad_splits_into_two_triangles() {
        let q = TriMesh::quad(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            Rgba::new(1.0, 1.0, 1.0, 1.0),
        );
        assert_eq!(q.faces, vec![[0, 1, 2], [0, 2, 3]]);
    }
}
