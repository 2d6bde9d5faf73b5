//! Viewport abstraction
//!
//! The authoring engine never talks to a renderer directly; it hands
//! primitives to a [`Viewport`] and forgets about them until the next
//! regeneration replaces the whole set. The macroquad-backed host lives in
//! [`host`]; tests use a recording implementation.

pub mod host;

use crate::camera::CameraPose;
use crate::geometry::{GridSpec, LineSegment, Rgba, TriMesh};

/// Opaque handle for a primitive added to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle(pub u64);

/// A render host that retains primitives between frames.
pub trait Viewport {
    fn add_lines(&mut self, segments: &[LineSegment], color: Rgba, width: f32) -> ItemHandle;
    fn add_mesh(&mut self, mesh: &TriMesh) -> ItemHandle;
    fn add_grid(&mut self, grid: &GridSpec) -> ItemHandle;
    /// Remove a previously added primitive. Unknown handles are ignored.
    fn remove_item(&mut self, handle: ItemHandle);
    fn set_camera_pose(&mut self, pose: &CameraPose);
    fn camera_pose(&self) -> CameraPose;
}

/// Test double that records what was added and removed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingViewport {
    next_id: u64,
    pub lines: Vec<(ItemHandle, Vec<LineSegment>)>,
    pub meshes: Vec<(ItemHandle, TriMesh)>,
    pub grids: Vec<(ItemHandle, GridSpec)>,
    pub removed: Vec<ItemHandle>,
    pub pose: Option<CameraPose>,
}

#[cfg(test)]
impl RecordingViewport {
    fn next_handle(&mut self) -> ItemHandle {
        self.next_id += 1;
        ItemHandle(self.next_id)
    }

    /// Handles currently live (added and not yet removed)
    pub fn live_handles(&self) -> Vec<ItemHandle> {
        self.lines
            .iter()
            .map(|(h, _)| *h)
            .chain(self.meshes.iter().map(|(h, _)| *h))
            .chain(self.grids.iter().map(|(h, _)| *h))
            .filter(|h| !self.removed.contains(h))
            .collect()
    }
}

#[cfg(test)]
impl Viewport for RecordingViewport {
    fn add_lines(&mut self, segments: &[LineSegment], _color: Rgba, _width: f32) -> ItemHandle {
        let handle = self.next_handle();
        self.lines.push((handle, segments.to_vec()));
        handle
    }

    fn add_mesh(&mut self, mesh: &TriMesh) -> ItemHandle {
        let handle = self.next_handle();
        self.meshes.push((handle, mesh.clone()));
        handle
    }

    fn add_grid(&mut self, grid: &GridSpec) -> ItemHandle {
        let handle = self.next_handle();
        self.grids.push((handle, *grid));
        handle
    }

    fn remove_item(&mut self, handle: ItemHandle) {
        self.removed.push(handle);
    }

    fn set_camera_pose(&mut self, pose: &CameraPose) {
        self.pose = Some(*pose);
    }

    fn camera_pose(&self) -> CameraPose {
        self.pose.unwrap_or_else(CameraPose::orbit_default)
    }
}
