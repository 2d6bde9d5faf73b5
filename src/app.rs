//! Application shell
//!
//! Per-frame glue between macroquad input, the authoring session, and the
//! viewport host. The shell holds no authoritative room state; it owns only
//! UI-transient things (the door draft being edited, drag bookkeeping,
//! status messages). All room edits flow through the session.

use macroquad::prelude::*;

use crate::camera::{CameraMode, ZoomDirection};
use crate::config::AppConfig;
use crate::input::{command_for_press, command_for_release, Command};
use crate::room::{RoomColor, WallIndex};
use crate::session::AuthoringSession;
use crate::store::{SpaceFile, SpaceStore};
use crate::viewport::host::MacroquadViewport;
use crate::viewport::Viewport;

/// Seconds between clicks that still count as a double-click
const DOUBLE_CLICK_SECS: f64 = 0.3;
/// Seconds a status message stays on screen
const STATUS_SECS: f64 = 3.0;

/// Mouse-drag sensitivities
const ORBIT_DEGREES_PER_PIXEL: f32 = 0.4;
const PAN_UNITS_PER_PIXEL: f32 = 0.01;

/// Spinner-style increments for the parameter keys
const DIMENSION_STEP: f32 = 0.1;
const COLOR_STEP: f32 = 5.0;
const DOOR_STEP: f32 = 0.1;

/// A door being configured but not yet confirmed
#[derive(Debug, Clone, Copy)]
struct DoorDraft {
    width: f32,
    height: f32,
    offset: f32,
}

impl Default for DoorDraft {
    fn default() -> Self {
        Self { width: 0.9, height: 2.0, offset: 0.0 }
    }
}

/// Top-level application state
pub struct App {
    session: AuthoringSession<MacroquadViewport>,
    store: SpaceStore,
    /// Draft door parameters while the door menu is open
    door_draft: Option<DoorDraft>,
    /// Cursor into the saved-space list for cycling loads
    load_cursor: usize,
    space_name: String,
    space_description: String,
    last_mouse: Option<(f32, f32)>,
    last_click_time: f64,
    status: Option<(String, f64)>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: AuthoringSession::new(MacroquadViewport::new()),
            store: SpaceStore::new(&config.spaces_dir),
            door_draft: None,
            load_cursor: 0,
            space_name: "untitled".to_string(),
            space_description: String::new(),
            last_mouse: None,
            last_click_time: 0.0,
            status: None,
        }
    }

    /// One frame: input, camera ticks, draw.
    pub fn frame(&mut self) {
        self.handle_input();
        self.session.camera_mut().update(get_frame_time());

        let pose = *self.session.camera().pose();
        self.session.viewport_mut().set_camera_pose(&pose);

        clear_background(Color::new(0.05, 0.07, 0.10, 1.0));
        self.session.viewport().draw();
        self.draw_overlay();
    }

    fn handle_input(&mut self) {
        for key in get_keys_pressed() {
            if let Some(command) = command_for_press(key) {
                self.dispatch(command);
            }
        }
        for key in get_keys_released() {
            if let Some(command) = command_for_release(key) {
                self.dispatch(command);
            }
        }

        if self.door_draft.is_some() {
            self.handle_door_keys();
        } else {
            self.handle_room_keys();
        }

        // Wheel steps the discrete zoom
        let (_, wheel_y) = mouse_wheel();
        if wheel_y > 0.0 {
            self.session.camera_mut().step_zoom(ZoomDirection::In);
        } else if wheel_y < 0.0 {
            self.session.camera_mut().step_zoom(ZoomDirection::Out);
        }

        self.handle_mouse();
    }

    /// Dimension and color editing (spinner keys; shift reverses)
    fn handle_room_keys(&mut self) {
        let sign = if is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift) {
            -1.0
        } else {
            1.0
        };

        let dims = self.session.room().dimensions;
        let mut new_dims = dims;
        if is_key_pressed(KeyCode::W) {
            new_dims.width += sign * DIMENSION_STEP;
        }
        if is_key_pressed(KeyCode::L) {
            new_dims.length += sign * DIMENSION_STEP;
        }
        if is_key_pressed(KeyCode::H) {
            new_dims.height += sign * DIMENSION_STEP;
        }
        if new_dims != dims {
            if let Err(e) = self.session.set_dimensions(new_dims) {
                self.set_status(e.to_string());
            }
        }

        let color = self.session.room().color;
        let mut new_color = color;
        if is_key_pressed(KeyCode::Right) {
            new_color.hue += COLOR_STEP;
        }
        if is_key_pressed(KeyCode::Left) {
            new_color.hue -= COLOR_STEP;
        }
        if is_key_pressed(KeyCode::Up) {
            new_color.saturation += COLOR_STEP;
        }
        if is_key_pressed(KeyCode::Down) {
            new_color.saturation -= COLOR_STEP;
        }
        if is_key_pressed(KeyCode::PageUp) {
            new_color.value += COLOR_STEP;
        }
        if is_key_pressed(KeyCode::PageDown) {
            new_color.value -= COLOR_STEP;
        }
        if new_color != color {
            self.session.set_color(RoomColor::new(
                new_color.hue,
                new_color.saturation,
                new_color.value,
            ));
        }
    }

    /// Arrow keys edit the draft while the door menu is open
    fn handle_door_keys(&mut self) {
        let Some(draft) = self.door_draft.as_mut() else {
            return;
        };
        if is_key_pressed(KeyCode::Right) {
            draft.offset += DOOR_STEP;
        }
        if is_key_pressed(KeyCode::Left) {
            draft.offset = (draft.offset - DOOR_STEP).max(0.0);
        }
        if is_key_pressed(KeyCode::Up) {
            draft.width += DOOR_STEP;
        }
        if is_key_pressed(KeyCode::Down) {
            draft.width = (draft.width - DOOR_STEP).max(DOOR_STEP);
        }
        if is_key_pressed(KeyCode::PageUp) {
            draft.height += DOOR_STEP;
        }
        if is_key_pressed(KeyCode::PageDown) {
            draft.height = (draft.height - DOOR_STEP).max(DOOR_STEP);
        }
    }

    fn handle_mouse(&mut self) {
        let position = mouse_position();

        if is_mouse_button_pressed(MouseButton::Left) {
            let now = get_time();
            if now - self.last_click_time < DOUBLE_CLICK_SECS {
                let dims = self.session.room().dimensions;
                self.session.camera_mut().recenter_for_mode(&dims);
            }
            self.last_click_time = now;
            self.last_mouse = Some(position);
        }

        if is_mouse_button_down(MouseButton::Left) {
            if let Some((last_x, last_y)) = self.last_mouse {
                let dx = position.0 - last_x;
                let dy = position.1 - last_y;
                match self.session.camera().mode() {
                    CameraMode::Orbit => {
                        self.session
                            .camera_mut()
                            .orbit_by(-dx * ORBIT_DEGREES_PER_PIXEL, dy * ORBIT_DEGREES_PER_PIXEL);
                    }
                    CameraMode::Move => {
                        let (right, up) = self.session.camera().pose().basis_vectors();
                        let delta = right.scale(-dx * PAN_UNITS_PER_PIXEL)
                            + up.scale(dy * PAN_UNITS_PER_PIXEL);
                        self.session.camera_mut().pan_by(delta);
                    }
                }
            }
            self.last_mouse = Some(position);
        } else {
            self.last_mouse = None;
        }
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::SwitchToOrbit => self.switch_mode(CameraMode::Orbit),
            Command::SwitchToMove => self.switch_mode(CameraMode::Move),
            Command::StartSmoothZoom(direction) => {
                self.session.camera_mut().start_smooth_zoom(direction);
            }
            Command::StopSmoothZoom => self.session.camera_mut().stop_smooth_zoom(),
            Command::CenterView => {
                let dims = self.session.room().dimensions;
                self.session.camera_mut().recenter_on_room(&dims);
            }
            Command::ToggleDoorMenu => self.toggle_door_menu(),
            Command::CycleWall(direction) => {
                if self.door_draft.is_some() {
                    self.session.cycle_highlight_wall(direction);
                }
            }
            Command::ConfirmDoor => self.confirm_door(),
            Command::RemoveDoor => {
                self.session.clear_door();
                self.set_status("door removed".to_string());
            }
            Command::SaveSpace => self.save_space(),
            Command::LoadNextSpace => self.load_next_space(),
            Command::DeleteSpace => self.delete_space(),
        }
    }

    /// Save the live pose before switching so the mode is restored where
    /// the user left it.
    fn switch_mode(&mut self, target: CameraMode) {
        let camera = self.session.camera_mut();
        if camera.mode() == target || camera.is_animating() {
            return;
        }
        camera.save_current_pose();
        camera.switch_mode(target);
    }

    fn toggle_door_menu(&mut self) {
        if self.door_draft.is_some() {
            self.door_draft = None;
            self.session.select_highlight_wall(None);
        } else {
            self.door_draft = Some(DoorDraft::default());
            let wall = self
                .session
                .room()
                .door
                .map(|door| door.wall)
                .unwrap_or(WallIndex::Front);
            self.session.select_highlight_wall(Some(wall));
        }
    }

    fn confirm_door(&mut self) {
        let (Some(draft), Some(wall)) = (self.door_draft, self.session.highlighted_wall()) else {
            return;
        };
        match self
            .session
            .request_door(wall, draft.width, draft.height, draft.offset)
        {
            Ok(()) => {
                self.door_draft = None;
                self.session.select_highlight_wall(None);
                self.set_status(format!("door placed on {} wall", wall));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn save_space(&mut self) {
        let space = SpaceFile::from_model(
            &self.space_name,
            &self.space_description,
            self.session.room(),
        );
        match self.store.save(&space) {
            Ok(()) => self.set_status(format!("saved '{}'", self.space_name)),
            Err(e) => self.set_status(format!("save failed: {}", e)),
        }
    }

    /// Cycle through the saved spaces, loading the next readable one.
    fn load_next_space(&mut self) {
        let spaces = self.store.list();
        if spaces.is_empty() {
            self.set_status("no saved spaces".to_string());
            return;
        }
        let space = &spaces[self.load_cursor % spaces.len()];
        self.load_cursor = (self.load_cursor + 1) % spaces.len();
        match space.to_model() {
            Ok(model) => {
                self.session.load_room_model(model);
                self.space_name = space.name.clone();
                self.space_description = space.description.clone();
                self.door_draft = None;
                self.set_status(format!("loaded '{}'", space.name));
            }
            Err(e) => self.set_status(format!("load failed: {}", e)),
        }
    }

    /// Delete the current space from disk. The in-memory room is kept.
    fn delete_space(&mut self) {
        match self.store.delete(&self.space_name) {
            Ok(()) => {
                self.load_cursor = 0;
                self.set_status(format!("deleted '{}'", self.space_name));
            }
            Err(e) => self.set_status(format!("delete failed: {}", e)),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status = Some((message, get_time() + STATUS_SECS));
    }

    /// Text overlay: current parameters, door menu, status line.
    fn draw_overlay(&mut self) {
        let room = self.session.room();
        let dims = room.dimensions;
        let color = room.color;
        let white = Color::new(0.9, 0.9, 0.9, 1.0);
        let dim = Color::new(0.6, 0.6, 0.6, 1.0);

        draw_text(&format!("space: {}", self.space_name), 10.0, 20.0, 18.0, white);
        draw_text(
            &format!(
                "room {:.1} x {:.1} x {:.1} m   hsv {:.0}/{:.0}/{:.0}",
                dims.width, dims.length, dims.height, color.hue, color.saturation, color.value
            ),
            10.0,
            40.0,
            18.0,
            white,
        );
        draw_text(
            &format!("camera: {}", self.session.camera().mode().label()),
            10.0,
            60.0,
            18.0,
            white,
        );

        match room.door {
            Some(door) => draw_text(
                &format!(
                    "door: {} wall, {:.1} x {:.1} m at {:.1} m",
                    door.wall, door.width, door.height, door.offset
                ),
                10.0,
                80.0,
                18.0,
                white,
            ),
            None => draw_text("door: none", 10.0, 80.0, 18.0, dim),
        };

        if let (Some(draft), Some(wall)) = (self.door_draft, self.session.highlighted_wall()) {
            draw_text(
                &format!(
                    "placing door on {} wall: {:.1} x {:.1} m at {:.1} m  (tab: wall, arrows: size/offset, enter: confirm)",
                    wall, draft.width, draft.height, draft.offset
                ),
                10.0,
                100.0,
                18.0,
                Color::new(1.0, 0.85, 0.4, 1.0),
            );
        } else {
            draw_text(
                "o/p: camera mode   +/-: zoom   c: center   w/l/h: resize   arrows: color   d: door   f2: save   f3: load   f8: delete",
                10.0,
                100.0,
                16.0,
                dim,
            );
        }

        let expired = matches!(&self.status, Some((_, expiry)) if get_time() >= *expiry);
        if expired {
            self.status = None;
        }
        if let Some((message, _)) = &self.status {
            draw_text(message, 10.0, screen_height() - 14.0, 18.0, white);
        }
    }
}
