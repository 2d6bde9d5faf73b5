//! Core room data types
//!
//! A room is a rectangular volume with an HSV color and at most one door.
//! These types are pure data; fit checks for doors live in `walls`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room dimensions in meters. All three extents must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl RoomDimensions {
    /// Create dimensions, rejecting any extent that is zero or negative.
    pub fn new(width: f32, length: f32, height: f32) -> Result<Self, EditError> {
        for (field, value) in [("width", width), ("length", length), ("height", height)] {
            if !(value > 0.0) {
                return Err(EditError::InvalidDimension { field, value });
            }
        }
        Ok(Self { width, length, height })
    }

    /// Largest of the three extents (used for camera framing)
    pub fn max_extent(&self) -> f32 {
        self.width.max(self.length).max(self.height)
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        // Matches the tool's initial spinbox values
        Self { width: 3.0, length: 3.0, height: 2.0 }
    }
}

/// Room color in HSV, human-facing units: hue in degrees [0, 360),
/// saturation and value as percentages [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl RoomColor {
    /// Create a color, wrapping hue into [0, 360) and clamping
    /// saturation/value into [0, 100].
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            value: value.clamp(0.0, 100.0),
        }
    }

    /// Normalize to [0, 1] components for rendering
    pub fn normalized(&self) -> (f32, f32, f32) {
        (self.hue / 360.0, self.saturation / 100.0, self.value / 100.0)
    }
}

impl Default for RoomColor {
    fn default() -> Self {
        Self { hue: 216.0, saturation: 50.0, value: 100.0 }
    }
}

/// One of the room's four vertical walls, in fixed clockwise order starting
/// at the wall spanning the width at y=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallIndex {
    /// y = 0, runs along the width
    Front,
    /// x = width, runs along the length
    Right,
    /// y = length, runs along the width
    Back,
    /// x = 0, runs along the length
    Left,
}

impl WallIndex {
    pub const ALL: [WallIndex; 4] = [WallIndex::Front, WallIndex::Right, WallIndex::Back, WallIndex::Left];

    /// Stable integer index used in persisted files (0..3)
    pub fn index(&self) -> u8 {
        match self {
            WallIndex::Front => 0,
            WallIndex::Right => 1,
            WallIndex::Back => 2,
            WallIndex::Left => 3,
        }
    }

    /// Inverse of [`WallIndex::index`]; `None` for out-of-range values
    pub fn from_index(i: u8) -> Option<WallIndex> {
        WallIndex::ALL.get(i as usize).copied()
    }
}

impl fmt::Display for WallIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WallIndex::Front => "front",
            WallIndex::Right => "right",
            WallIndex::Back => "back",
            WallIndex::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// A door opening on one wall. Immutable once placed; edits replace the
/// whole value (the confirm-new-door flow in the UI).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    pub wall: WallIndex,
    pub width: f32,
    pub height: f32,
    /// Distance from the wall's start corner along its run
    pub offset: f32,
}

/// The authored room: dimensions, color, optional door.
///
/// Owned by the authoring session and mutated only through its operations,
/// so every change funnels into one regeneration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomModel {
    pub dimensions: RoomDimensions,
    pub color: RoomColor,
    pub door: Option<Door>,
}

impl RoomModel {
    pub fn new(dimensions: RoomDimensions, color: RoomColor) -> Self {
        Self { dimensions, color, door: None }
    }
}

/// Why a door request was refused
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorRejection {
    /// offset + door width runs past the end of the wall
    ExceedsWallLength { available: f32, required: f32 },
    /// door taller than the room
    ExceedsRoomHeight { height: f32, limit: f32 },
    /// non-positive width, negative height or negative offset
    DegenerateDoor,
}

impl fmt::Display for DoorRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorRejection::ExceedsWallLength { available, required } => {
                write!(f, "door exceeds wall length ({:.2} m needed, {:.2} m available)", required, available)
            }
            DoorRejection::ExceedsRoomHeight { height, limit } => {
                write!(f, "door exceeds room height ({:.2} m > {:.2} m)", height, limit)
            }
            DoorRejection::DegenerateDoor => write!(f, "door width must be positive and offset non-negative"),
        }
    }
}

/// Error type for room edits. Failed edits leave the model untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditError {
    InvalidDimension { field: &'static str, value: f32 },
    DoorDoesNotFit(DoorRejection),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidDimension { field, value } => {
                write!(f, "invalid {}: {} (must be positive)", field, value)
            }
            EditError::DoorDoesNotFit(reason) => write!(f, "door does not fit: {}", reason),
        }
    }
}

impl std::error::Error for EditError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reject_non_positive() {
        assert!(RoomDimensions::new(3.0, 3.0, 2.0).is_ok());
        assert!(matches!(
            RoomDimensions::new(0.0, 3.0, 2.0),
            Err(EditError::InvalidDimension { field: "width", .. })
        ));
        assert!(matches!(
            RoomDimensions::new(3.0, -1.0, 2.0),
            Err(EditError::InvalidDimension { field: "length", .. })
        ));
        assert!(RoomDimensions::new(3.0, 3.0, f32::NAN).is_err());
    }

    #[test]
    fn test_color_wraps_and_clamps() {
        let c = RoomColor::new(400.0, 150.0, -5.0);
        assert_eq!(c.hue, 40.0);
        assert_eq!(c.saturation, 100.0);
        assert_eq!(c.value, 0.0);

        let (h, s, v) = RoomColor::default().normalized();
        assert!((h - 0.6).abs() < 1e-6);
        assert!((s - 0.5).abs() < 1e-6);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_wall_index_round_trip() {
        for wall in WallIndex::ALL {
            assert_eq!(WallIndex::from_index(wall.index()), Some(wall));
        }
        assert_eq!(WallIndex::from_index(4), None);
    }
}
