//! Wall and door placement rules
//!
//! Walls are numbered clockwise starting at the front wall (y=0). Door
//! placement is expressed in wall-local coordinates (offset along the run,
//! height up from the floor) and mapped here into room space. Walls 2 and 3
//! measure the offset from the far corner inward so the offset always
//! follows the clockwise walk direction.

use super::{DoorRejection, RoomDimensions, WallIndex};
use crate::math::Vec3;

/// Direction for stepping through the walls while picking a door placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    /// Clockwise
    Next,
    /// Counter-clockwise
    Previous,
}

/// Horizontal extent of a wall: width for front/back, length for the sides.
pub fn run_length(wall: WallIndex, dims: &RoomDimensions) -> f32 {
    match wall {
        WallIndex::Front | WallIndex::Back => dims.width,
        WallIndex::Right | WallIndex::Left => dims.length,
    }
}

/// Step to the adjacent wall, wrapping modulo 4.
pub fn cycle_wall(current: WallIndex, direction: CycleDirection) -> WallIndex {
    let step = match direction {
        CycleDirection::Next => 1,
        CycleDirection::Previous => 3,
    };
    WallIndex::from_index((current.index() + step) % 4).unwrap_or(current)
}

/// The four corners of a wall in room space, counter-clockwise when viewed
/// from outside the room. Order: bottom-start, bottom-end, top-end, top-start.
pub fn wall_vertices(wall: WallIndex, dims: &RoomDimensions) -> [Vec3; 4] {
    let (w, l, h) = (dims.width, dims.length, dims.height);
    match wall {
        WallIndex::Front => [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(w, 0.0, 0.0),
            Vec3::new(w, 0.0, h),
            Vec3::new(0.0, 0.0, h),
        ],
        WallIndex::Right => [
            Vec3::new(w, 0.0, 0.0),
            Vec3::new(w, l, 0.0),
            Vec3::new(w, l, h),
            Vec3::new(w, 0.0, h),
        ],
        WallIndex::Back => [
            Vec3::new(w, l, 0.0),
            Vec3::new(0.0, l, 0.0),
            Vec3::new(0.0, l, h),
            Vec3::new(w, l, h),
        ],
        WallIndex::Left => [
            Vec3::new(0.0, l, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, h),
            Vec3::new(0.0, l, h),
        ],
    }
}

/// The four corners of a door opening in room space, same winding as
/// [`wall_vertices`].
pub fn door_vertices(
    wall: WallIndex,
    door_width: f32,
    door_height: f32,
    offset: f32,
    dims: &RoomDimensions,
) -> [Vec3; 4] {
    let (w, l) = (dims.width, dims.length);
    match wall {
        WallIndex::Front => {
            let (x0, x1) = (offset, offset + door_width);
            [
                Vec3::new(x0, 0.0, 0.0),
                Vec3::new(x1, 0.0, 0.0),
                Vec3::new(x1, 0.0, door_height),
                Vec3::new(x0, 0.0, door_height),
            ]
        }
        WallIndex::Right => {
            let (y0, y1) = (offset, offset + door_width);
            [
                Vec3::new(w, y0, 0.0),
                Vec3::new(w, y1, 0.0),
                Vec3::new(w, y1, door_height),
                Vec3::new(w, y0, door_height),
            ]
        }
        WallIndex::Back => {
            // Offset runs from the (w, l) corner inward
            let (x0, x1) = (w - offset, w - offset - door_width);
            [
                Vec3::new(x0, l, 0.0),
                Vec3::new(x1, l, 0.0),
                Vec3::new(x1, l, door_height),
                Vec3::new(x0, l, door_height),
            ]
        }
        WallIndex::Left => {
            // Offset runs from the (0, l) corner inward
            let (y0, y1) = (l - offset, l - offset - door_width);
            [
                Vec3::new(0.0, y0, 0.0),
                Vec3::new(0.0, y1, 0.0),
                Vec3::new(0.0, y1, door_height),
                Vec3::new(0.0, y0, door_height),
            ]
        }
    }
}

/// Why a candidate door cannot be placed, or `None` if it fits.
///
/// The fit check is the sole gate for door edits: height may not exceed the
/// room, the opening may not run past the end of the wall, and the
/// parameters must be non-negative with a positive width. Fitting exactly
/// flush with the wall end (`offset + width == run length`) is allowed.
pub fn door_rejection(
    wall: WallIndex,
    door_width: f32,
    door_height: f32,
    offset: f32,
    dims: &RoomDimensions,
) -> Option<DoorRejection> {
    if !(door_width > 0.0) || door_height < 0.0 || offset < 0.0 {
        return Some(DoorRejection::DegenerateDoor);
    }
    let run = run_length(wall, dims);
    if offset + door_width > run {
        return Some(DoorRejection::ExceedsWallLength {
            available: run,
            required: offset + door_width,
        });
    }
    if door_height > dims.height {
        return Some(DoorRejection::ExceedsRoomHeight {
            height: door_height,
            limit: dims.height,
        });
    }
    None
}

/// True iff the candidate door fits on the wall.
pub fn door_fits(
    wall: WallIndex,
    door_width: f32,
    door_height: f32,
    offset: f32,
    dims: &RoomDimensions,
) -> bool {
    door_rejection(wall, door_width, door_height, offset, dims).is_none()
}
