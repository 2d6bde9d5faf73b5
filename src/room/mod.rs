//! Room model and wall placement rules

mod model;
mod walls;

pub use model::{Door, DoorRejection, EditError, RoomColor, RoomDimensions, RoomModel, WallIndex};
pub use walls::{
    cycle_wall, door_fits, door_rejection, door_vertices, run_length, wall_vertices, CycleDirection,
};
