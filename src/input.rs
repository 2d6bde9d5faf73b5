//! Input command dispatch
//!
//! Keyboard shortcuts map to abstract commands through a static binding
//! table; the camera and session never see raw key codes. Press-and-hold
//! keys (smooth zoom) produce a start command on press and a stop command
//! on release.

use macroquad::prelude::KeyCode;

use crate::camera::ZoomDirection;
use crate::room::CycleDirection;

/// Abstract commands the app shell dispatches to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SwitchToOrbit,
    SwitchToMove,
    StartSmoothZoom(ZoomDirection),
    StopSmoothZoom,
    CenterView,
    ToggleDoorMenu,
    CycleWall(CycleDirection),
    ConfirmDoor,
    RemoveDoor,
    SaveSpace,
    LoadNextSpace,
    DeleteSpace,
}

/// Key bindings for commands fired on key press
pub const PRESS_BINDINGS: &[(KeyCode, Command)] = &[
    (KeyCode::O, Command::SwitchToOrbit),
    (KeyCode::P, Command::SwitchToMove),
    (KeyCode::KpAdd, Command::StartSmoothZoom(ZoomDirection::In)),
    (KeyCode::Equal, Command::StartSmoothZoom(ZoomDirection::In)),
    (KeyCode::KpSubtract, Command::StartSmoothZoom(ZoomDirection::Out)),
    (KeyCode::Minus, Command::StartSmoothZoom(ZoomDirection::Out)),
    (KeyCode::C, Command::CenterView),
    (KeyCode::D, Command::ToggleDoorMenu),
    (KeyCode::Tab, Command::CycleWall(CycleDirection::Next)),
    (KeyCode::Backslash, Command::CycleWall(CycleDirection::Previous)),
    (KeyCode::Enter, Command::ConfirmDoor),
    (KeyCode::X, Command::RemoveDoor),
    (KeyCode::F2, Command::SaveSpace),
    (KeyCode::F3, Command::LoadNextSpace),
    (KeyCode::F8, Command::DeleteSpace),
];

/// Key bindings for commands fired on key release (zoom keys stop the ramp)
pub const RELEASE_BINDINGS: &[(KeyCode, Command)] = &[
    (KeyCode::KpAdd, Command::StopSmoothZoom),
    (KeyCode::Equal, Command::StopSmoothZoom),
    (KeyCode::KpSubtract, Command::StopSmoothZoom),
    (KeyCode::Minus, Command::StopSmoothZoom),
];

/// Look up the command for a pressed key
pub fn command_for_press(key: KeyCode) -> Option<Command> {
    PRESS_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| *command)
}

/// Look up the command for a released key
pub fn command_for_release(key: KeyCode) -> Option<Command> {
    RELEASE_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| *command)
}
