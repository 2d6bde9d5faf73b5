//! macroquad-backed viewport host
//!
//! Retains the primitives the session adds and draws them each frame with
//! macroquad's immediate-mode 3D calls. Room space is z-up while macroquad
//! renders y-up, so every point is swizzled (x, y, z) -> (x, z, y) on the
//! way out.

use std::collections::HashMap;

use macroquad::prelude as mq;

use super::{ItemHandle, Viewport};
use crate::camera::CameraPose;
use crate::geometry::{GridSpec, LineSegment, Rgba, TriMesh};
use crate::math::Vec3;

/// Grid line color (matches the neutral grid of the GL view)
const GRID_COLOR: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 0.25 };

/// Origin axes gizmo dimensions
const AXIS_LEN: f32 = 0.5;
const ARROW_LEN: f32 = 0.1;

#[derive(Debug, Clone)]
enum Item {
    Lines { segments: Vec<LineSegment>, color: Rgba },
    Mesh(TriMesh),
    Grid(GridSpec),
}

/// Retained-mode adapter over macroquad's immediate 3D API
pub struct MacroquadViewport {
    items: HashMap<u64, Item>,
    order: Vec<u64>,
    next_id: u64,
    pose: CameraPose,
}

fn to_render(v: Vec3) -> mq::Vec3 {
    mq::vec3(v.x, v.z, v.y)
}

fn to_mq_color(c: Rgba) -> mq::Color {
    mq::Color::new(c.r, c.g, c.b, c.a)
}

impl MacroquadViewport {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
            pose: CameraPose::orbit_default(),
        }
    }

    fn insert(&mut self, item: Item) -> ItemHandle {
        self.next_id += 1;
        self.items.insert(self.next_id, item);
        self.order.push(self.next_id);
        ItemHandle(self.next_id)
    }

    /// Draw all retained items from the current camera pose.
    pub fn draw(&self) {
        let camera = mq::Camera3D {
            position: to_render(self.pose.eye_position()),
            target: to_render(self.pose.center),
            up: mq::vec3(0.0, 1.0, 0.0),
            ..Default::default()
        };
        mq::set_camera(&camera);

        for id in &self.order {
            match &self.items[id] {
                Item::Lines { segments, color } => {
                    let c = to_mq_color(*color);
                    for seg in segments {
                        mq::draw_line_3d(to_render(seg.start), to_render(seg.end), c);
                    }
                }
                Item::Mesh(mesh) => draw_tri_mesh(mesh),
                Item::Grid(grid) => draw_room_grid(grid),
            }
        }
        draw_axes();

        mq::set_default_camera();
    }
}

impl Default for MacroquadViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for MacroquadViewport {
    fn add_lines(&mut self, segments: &[LineSegment], color: Rgba, _width: f32) -> ItemHandle {
        // macroquad's 3D lines are fixed-width; the width hint is accepted
        // for interface compatibility and ignored here.
        self.insert(Item::Lines { segments: segments.to_vec(), color })
    }

    fn add_mesh(&mut self, mesh: &TriMesh) -> ItemHandle {
        self.insert(Item::Mesh(mesh.clone()))
    }

    fn add_grid(&mut self, grid: &GridSpec) -> ItemHandle {
        self.insert(Item::Grid(*grid))
    }

    fn remove_item(&mut self, handle: ItemHandle) {
        self.items.remove(&handle.0);
        self.order.retain(|id| *id != handle.0);
    }

    fn set_camera_pose(&mut self, pose: &CameraPose) {
        self.pose = *pose;
    }

    fn camera_pose(&self) -> CameraPose {
        self.pose
    }
}

/// Draw an indexed triangle mesh as a flat-colored, untextured mesh.
fn draw_tri_mesh(mesh: &TriMesh) {
    let color = to_mq_color(mesh.color);
    let vertices: Vec<mq::Vertex> = mesh
        .vertices
        .iter()
        .map(|v| {
            let p = to_render(*v);
            mq::Vertex::new(p.x, p.y, p.z, 0.0, 0.0, color)
        })
        .collect();
    let indices: Vec<u16> = mesh
        .faces
        .iter()
        .flat_map(|face| face.iter().map(|i| *i as u16))
        .collect();
    mq::draw_mesh(&mq::Mesh { vertices, indices, texture: None });
}

/// Draw the x/y/z origin axes with small arrowheads.
fn draw_axes() {
    let tips = [
        (
            Vec3::new(AXIS_LEN, 0.0, 0.0),
            Vec3::new(AXIS_LEN - ARROW_LEN, 0.05, 0.0),
            Vec3::new(AXIS_LEN - ARROW_LEN, -0.05, 0.0),
            mq::Color::new(0.8, 0.0, 0.0, 1.0),
        ),
        (
            Vec3::new(0.0, AXIS_LEN, 0.0),
            Vec3::new(0.05, AXIS_LEN - ARROW_LEN, 0.0),
            Vec3::new(-0.05, AXIS_LEN - ARROW_LEN, 0.0),
            mq::Color::new(0.0, 0.8, 0.0, 1.0),
        ),
        (
            Vec3::new(0.0, 0.0, AXIS_LEN),
            Vec3::new(0.0, 0.05, AXIS_LEN - ARROW_LEN),
            Vec3::new(0.0, -0.05, AXIS_LEN - ARROW_LEN),
            mq::Color::new(0.0, 0.0, 0.8, 1.0),
        ),
    ];
    for (tip, head_a, head_b, color) in tips {
        mq::draw_line_3d(to_render(Vec3::ZERO), to_render(tip), color);
        mq::draw_line_3d(to_render(tip), to_render(head_a), color);
        mq::draw_line_3d(to_render(tip), to_render(head_b), color);
    }
}

/// Draw a unit-spaced grid of the given size centered on the grid offset.
fn draw_room_grid(grid: &GridSpec) {
    let (sx, sy) = grid.size;
    let origin = grid.offset - Vec3::new(sx / 2.0, sy / 2.0, 0.0);
    let color = to_mq_color(GRID_COLOR);

    let mut x = 0.0;
    while x <= sx + 1e-4 {
        let a = origin + Vec3::new(x, 0.0, 0.0);
        let b = origin + Vec3::new(x, sy, 0.0);
        mq::draw_line_3d(to_render(a), to_render(b), color);
        x += grid.spacing;
    }
    let mut y = 0.0;
    while y <= sy + 1e-4 {
        let a = origin + Vec3::new(0.0, y, 0.0);
        let b = origin + Vec3::new(sx, y, 0.0);
        mq::draw_line_3d(to_render(a), to_render(b), color);
        y += grid.spacing;
    }
}
