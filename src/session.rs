//! Authoring session
//!
//! Thin coordinator between the room model, the camera, and the viewport.
//! Every edit goes through one of its operations; each successful mutation
//! regenerates the primitive set, replaces the viewport items, and fires
//! the geometry-changed callback. Nothing else regenerates geometry.

use crate::camera::CameraController;
use crate::geometry::{self, RoomGeometry};
use crate::room::{
    cycle_wall, door_rejection, CycleDirection, Door, EditError, RoomColor, RoomDimensions,
    RoomModel, WallIndex,
};
use crate::viewport::{ItemHandle, Viewport};

/// Callback invoked after every regeneration
pub type GeometryCallback = Box<dyn FnMut(&RoomGeometry)>;

/// One authoring session: a single room being edited against one viewport.
pub struct AuthoringSession<V: Viewport> {
    model: RoomModel,
    camera: CameraController,
    viewport: V,
    /// Wall currently targeted for door placement (transient, never saved)
    highlight: Option<WallIndex>,
    /// Handles for the primitives currently in the viewport
    handles: Vec<ItemHandle>,
    on_geometry_changed: Option<GeometryCallback>,
}

impl<V: Viewport> AuthoringSession<V> {
    /// Start a session with the default room, regenerating immediately so
    /// the viewport is never empty.
    pub fn new(viewport: V) -> Self {
        let mut session = Self {
            model: RoomModel::default(),
            camera: CameraController::new(),
            viewport,
            highlight: None,
            handles: Vec::new(),
            on_geometry_changed: None,
        };
        session.regenerate();
        session
    }

    pub fn room(&self) -> &RoomModel {
        &self.model
    }

    pub fn highlighted_wall(&self) -> Option<WallIndex> {
        self.highlight
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Register the redraw hook fired after every regeneration.
    pub fn on_geometry_changed(&mut self, callback: GeometryCallback) {
        self.on_geometry_changed = Some(callback);
    }

    /// Resize the room. A door that no longer fits the new walls is
    /// dropped; the camera keeps its pose (resizing must not fight the
    /// user's viewpoint).
    pub fn set_dimensions(&mut self, dims: RoomDimensions) -> Result<(), EditError> {
        // Route through the validating constructor so a hand-built value
        // with non-positive extents is still rejected.
        let dims = RoomDimensions::new(dims.width, dims.length, dims.height)?;
        self.model.dimensions = dims;
        if let Some(door) = self.model.door {
            if door_rejection(door.wall, door.width, door.height, door.offset, &dims).is_some() {
                self.model.door = None;
            }
        }
        self.regenerate();
        Ok(())
    }

    /// Change the room color. Infallible (the constructor normalizes).
    pub fn set_color(&mut self, color: RoomColor) {
        self.model.color = RoomColor::new(color.hue, color.saturation, color.value);
        self.regenerate();
    }

    /// Place (or replace) the door. The fit predicate is the sole gate: on
    /// failure the previous door is kept untouched.
    pub fn request_door(
        &mut self,
        wall: WallIndex,
        width: f32,
        height: f32,
        offset: f32,
    ) -> Result<(), EditError> {
        if let Some(reason) = door_rejection(wall, width, height, offset, &self.model.dimensions) {
            return Err(EditError::DoorDoesNotFit(reason));
        }
        self.model.door = Some(Door { wall, width, height, offset });
        self.regenerate();
        Ok(())
    }

    /// Remove the door, if any.
    pub fn clear_door(&mut self) {
        if self.model.door.take().is_some() {
            self.regenerate();
        }
    }

    /// Select (or clear) the wall-highlight placement aid.
    pub fn select_highlight_wall(&mut self, wall: Option<WallIndex>) {
        if self.highlight != wall {
            self.highlight = wall;
            self.regenerate();
        }
    }

    /// Step the highlight to the adjacent wall. No-op when no wall is
    /// highlighted.
    pub fn cycle_highlight_wall(&mut self, direction: CycleDirection) {
        if let Some(current) = self.highlight {
            self.highlight = Some(cycle_wall(current, direction));
            self.regenerate();
        }
    }

    /// Replace the model wholesale (load path). Clears the highlight.
    pub fn load_room_model(&mut self, model: RoomModel) {
        self.model = model;
        self.highlight = None;
        self.regenerate();
    }

    /// Re-derive all primitives and swap them into the viewport. The
    /// single redraw trigger point.
    fn regenerate(&mut self) {
        let geometry = geometry::generate(&self.model, self.highlight);

        for handle in self.handles.drain(..) {
            self.viewport.remove_item(handle);
        }
        self.handles.push(self.viewport.add_lines(
            &geometry.edges,
            geometry.edge_color,
            geometry.edge_width,
        ));
        self.handles.push(self.viewport.add_mesh(&geometry.floor));
        self.handles.push(self.viewport.add_grid(&geometry.grid));
        if let Some(highlight) = &geometry.wall_highlight {
            self.handles.push(self.viewport.add_mesh(highlight));
        }
        if let Some(door) = &geometry.door {
            self.handles.push(self.viewport.add_mesh(door));
        }

        if let Some(callback) = self.on_geometry_changed.as_mut() {
            callback(&geometry);
        }
    }
}
