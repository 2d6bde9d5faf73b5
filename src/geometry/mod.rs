//! Procedural room geometry
//!
//! Derives everything the viewport draws from the room model: the 12-edge
//! box outline, a translucent floor quad, a unit grid under the room, and
//! the optional wall-highlight and door overlays. Generation is pure; a
//! fresh primitive set fully replaces the previous one on every edit.

mod primitives;

pub use primitives::{GridSpec, LineSegment, Rgba, TriMesh};

use crate::room::{door_vertices, wall_vertices, RoomModel, WallIndex};
use crate::math::Vec3;

/// Alpha for the translucent floor quad
pub const FLOOR_ALPHA: f32 = 0.3;
/// Alpha for the wall-highlight placement aid
pub const HIGHLIGHT_ALPHA: f32 = 0.3;
/// Alpha for the door overlay
pub const DOOR_ALPHA: f32 = 0.5;
/// Line width for the box outline
pub const EDGE_WIDTH: f32 = 3.0;

/// The complete primitive set for one room
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGeometry {
    /// Box outline, always exactly 12 segments
    pub edges: Vec<LineSegment>,
    pub edge_color: Rgba,
    pub edge_width: f32,
    /// Two-triangle quad covering the floor
    pub floor: TriMesh,
    /// Ground grid, unit spacing, centered under the room
    pub grid: GridSpec,
    /// Translucent overlay on the wall targeted for door placement
    pub wall_highlight: Option<TriMesh>,
    /// Door opening overlay
    pub door: Option<TriMesh>,
}

/// Generate the full primitive set for a room.
///
/// `highlight` marks the wall currently targeted for door placement; it is
/// transient UI state and never part of the model itself.
pub fn generate(model: &RoomModel, highlight: Option<WallIndex>) -> RoomGeometry {
    let dims = &model.dimensions;
    let (w, l, h) = (dims.width, dims.length, dims.height);
    let color = Rgba::from_hsv(&model.color, 1.0);

    // Bottom rectangle, top rectangle, then the four verticals
    let p = Vec3::new;
    let edges = vec![
        LineSegment::new(p(0.0, 0.0, 0.0), p(w, 0.0, 0.0)),
        LineSegment::new(p(w, 0.0, 0.0), p(w, l, 0.0)),
        LineSegment::new(p(w, l, 0.0), p(0.0, l, 0.0)),
        LineSegment::new(p(0.0, l, 0.0), p(0.0, 0.0, 0.0)),
        LineSegment::new(p(0.0, 0.0, h), p(w, 0.0, h)),
        LineSegment::new(p(w, 0.0, h), p(w, l, h)),
        LineSegment::new(p(w, l, h), p(0.0, l, h)),
        LineSegment::new(p(0.0, l, h), p(0.0, 0.0, h)),
        LineSegment::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, h)),
        LineSegment::new(p(w, 0.0, 0.0), p(w, 0.0, h)),
        LineSegment::new(p(w, l, 0.0), p(w, l, h)),
        LineSegment::new(p(0.0, l, 0.0), p(0.0, l, h)),
    ];

    let floor = TriMesh::quad(
        [
            p(0.0, 0.0, 0.0),
            p(w, 0.0, 0.0),
            p(w, l, 0.0),
            p(0.0, l, 0.0),
        ],
        Rgba::from_hsv(&model.color, FLOOR_ALPHA),
    );

    let grid = GridSpec {
        size: (w, l),
        spacing: 1.0,
        offset: Vec3::new(w / 2.0, l / 2.0, 0.0),
    };

    let wall_highlight = highlight.map(|wall| {
        TriMesh::quad(wall_vertices(wall, dims), Rgba::from_hsv(&model.color, HIGHLIGHT_ALPHA))
    });

    let door = model.door.map(|door| {
        TriMesh::quad(
            door_vertices(door.wall, door.width, door.height, door.offset, dims),
            Rgba::from_hsv(&model.color, DOOR_ALPHA),
        )
    });

    RoomGeometry {
        edges,
        edge_color: color,
        edge_width: EDGE_WIDTH,
        floor,
        grid,
        wall_highlight,
        door,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Door, RoomColor, RoomDimensions};

    fn model(w: f32, l: f32, h: f32) -> RoomModel {
        RoomModel::new(RoomDimensions::new(w, l, h).unwrap(), RoomColor::default())
    }

    #[test]
    fn test_box_outline_has_twelve_edges() {
        for (w, l, h) in [(1.0, 1.0, 1.0), (4.0, 5.0, 2.5), (0.1, 9.0, 0.3)] {
            let geo = generate(&model(w, l, h), None);
            assert_eq!(geo.edges.len(), 12);
        }
    }

    #[test]
    fn test_floor_spans_width_by_length_at_z_zero() {
        let geo = generate(&model(4.0, 5.0, 2.5), None);
        assert_eq!(geo.floor.faces.len(), 2);
        assert_eq!(geo.floor.vertices.len(), 4);
        for v in &geo.floor.vertices {
            assert_eq!(v.z, 0.0);
            assert!(v.x == 0.0 || v.x == 4.0);
            assert!(v.y == 0.0 || v.y == 5.0);
        }
        assert!((geo.floor.color.a - FLOOR_ALPHA).abs() < 1e-6);
    }

    #[test]
    fn test_grid_centered_under_room_with_unit_spacing() {
        let geo = generate(&model(4.0, 6.0, 2.0), None);
        assert_eq!(geo.grid.size, (4.0, 6.0));
        assert_eq!(geo.grid.spacing, 1.0);
        assert_eq!(geo.grid.offset, crate::math::Vec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let mut m = model(3.0, 3.0, 2.0);
        m.door = Some(Door { wall: WallIndex::Front, width: 1.0, height: 1.9, offset: 0.5 });
        let a = generate(&m, Some(WallIndex::Back));
        let b = generate(&m, Some(WallIndex::Back));
        assert_eq!(a, b);
    }

    #[test]
    fn test_overlays_present_only_when_requested() {
        let mut m = model(3.0, 3.0, 2.0);
        let plain = generate(&m, None);
        assert!(plain.wall_highlight.is_none());
        assert!(plain.door.is_none());

        m.door = Some(Door { wall: WallIndex::Right, width: 1.0, height: 1.5, offset: 0.0 });
        let with_door = generate(&m, Some(WallIndex::Right));
        let highlight = with_door.wall_highlight.expect("highlight requested");
        let door = with_door.door.expect("door present");
        assert!((highlight.color.a - HIGHLIGHT_ALPHA).abs() < 1e-6);
        assert!((door.color.a - DOOR_ALPHA).abs() < 1e-6);
        // highlight spans the full wall, door only part of it
        assert_eq!(highlight.vertices.len(), 4);
        assert!(door.vertices.iter().all(|v| v.x == 3.0));
    }
}
