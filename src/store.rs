//! Space persistence
//!
//! Spaces are saved as JSON under `spaces/<name>/<name>.json` with an
//! `images/` subfolder next to the file. The JSON shape is fixed for
//! compatibility with existing space files:
//!
//! ```json
//! { "name": "...", "description": "...",
//!   "coordinates": {"width": 4.0, "length": 5.0, "height": 2.5},
//!   "color": {"hue": 216.0, "saturation": 50.0, "value": 100.0},
//!   "door": {"width": 1.2, "height": 2.0, "offset": 1.5, "wall_index": 1} }
//! ```
//!
//! The `door` key is omitted entirely when the room has none.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::room::{door_fits, Door, RoomColor, RoomDimensions, RoomModel, WallIndex};

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    /// No space with that name on disk (recoverable)
    NotFound(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    /// File parsed but describes an impossible room
    Validation(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(name) => write!(f, "no saved space named '{}'", name),
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Json(e) => write!(f, "JSON error: {}", e),
            StoreError::Validation(e) => write!(f, "invalid space file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Door record as persisted (wall as a raw 0..3 index)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorRecord {
    pub width: f32,
    pub height: f32,
    pub offset: f32,
    pub wall_index: u8,
}

/// A space definition as it exists on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceFile {
    pub name: String,
    pub description: String,
    pub coordinates: RoomDimensions,
    pub color: RoomColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door: Option<DoorRecord>,
}

impl SpaceFile {
    /// Capture the in-memory model for saving.
    pub fn from_model(name: &str, description: &str, model: &RoomModel) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            coordinates: model.dimensions,
            color: model.color,
            door: model.door.map(|door| DoorRecord {
                width: door.width,
                height: door.height,
                offset: door.offset,
                wall_index: door.wall.index(),
            }),
        }
    }

    /// Validate and convert into a room model. Rejects non-positive
    /// dimensions, out-of-range wall indices, and doors that do not fit.
    pub fn to_model(&self) -> Result<RoomModel, StoreError> {
        let dims = RoomDimensions::new(
            self.coordinates.width,
            self.coordinates.length,
            self.coordinates.height,
        )
        .map_err(|e| StoreError::Validation(e.to_string()))?;
        let color = RoomColor::new(self.color.hue, self.color.saturation, self.color.value);
        let mut model = RoomModel::new(dims, color);

        if let Some(record) = self.door {
            let wall = WallIndex::from_index(record.wall_index).ok_or_else(|| {
                StoreError::Validation(format!("wall_index {} out of range", record.wall_index))
            })?;
            if !door_fits(wall, record.width, record.height, record.offset, &dims) {
                return Err(StoreError::Validation(format!(
                    "door does not fit on wall {}",
                    record.wall_index
                )));
            }
            model.door = Some(Door {
                wall,
                width: record.width,
                height: record.height,
                offset: record.offset,
            });
        }
        Ok(model)
    }
}

/// On-disk store of saved spaces
#[derive(Debug, Clone)]
pub struct SpaceStore {
    root: PathBuf,
}

impl SpaceStore {
    /// A store rooted at the given spaces directory (created lazily on
    /// first save).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn space_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn space_path(&self, name: &str) -> PathBuf {
        self.space_dir(name).join(format!("{}.json", name))
    }

    /// Write a space definition, creating its folder and an empty images
    /// folder alongside. Overwrites any existing file of the same name.
    pub fn save(&self, space: &SpaceFile) -> Result<(), StoreError> {
        let dir = self.space_dir(&space.name);
        fs::create_dir_all(dir.join("images"))?;
        let json = serde_json::to_string_pretty(space)?;
        fs::write(self.space_path(&space.name), json)?;
        Ok(())
    }

    /// Load one space by name.
    pub fn load(&self, name: &str) -> Result<SpaceFile, StoreError> {
        let path = self.space_path(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// List all readable spaces, sorted by name. Entries that fail to read
    /// or parse are skipped with a warning rather than failing the whole
    /// listing.
    pub fn list(&self) -> Vec<SpaceFile> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        let mut spaces: Vec<SpaceFile> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                match self.load(&name) {
                    Ok(space) => Some(space),
                    Err(e) => {
                        eprintln!("Skipping space '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect();
        spaces.sort_by(|a, b| a.name.cmp(&b.name));
        spaces
    }

    /// Delete a space and everything in its folder.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let dir = self.space_dir(name);
        if !dir.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_dir_all(dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_space(name: &str) -> SpaceFile {
        SpaceFile {
            name: name.to_string(),
            description: "a sample space".to_string(),
            coordinates: RoomDimensions { width: 4.0, length: 5.0, height: 2.5 },
            color: RoomColor { hue: 216.0, saturation: 50.0, value: 100.0 },
            door: Some(DoorRecord { width: 1.2, height: 2.0, offset: 1.5, wall_index: 1 }),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = SpaceStore::new(dir.path());

        let space = sample_space("studio");
        store.save(&space).unwrap();
        let loaded = store.load("studio").unwrap();
        assert_eq!(loaded, space);
        assert!(dir.path().join("studio/images").is_dir());
    }

    #[test]
    fn test_missing_space_is_not_found() {
        let dir = tempdir().unwrap();
        let store = SpaceStore::new(dir.path());
        assert!(matches!(store.load("nope"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete("nope"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_door_key_omitted_when_absent() {
        let dir = tempdir().unwrap();
        let store = SpaceStore::new(dir.path());

        let mut space = sample_space("bare");
        space.door = None;
        store.save(&space).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("bare/bare.json")).unwrap();
        assert!(!raw.contains("door"));
        assert!(raw.contains("coordinates"));

        let loaded = store.load("bare").unwrap();
        assert_eq!(loaded.door, None);
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let space = sample_space("studio");
        let json = serde_json::to_string(&space).unwrap();
        for key in ["\"name\"", "\"description\"", "\"coordinates\"", "\"width\"", "\"length\"", "\"height\"", "\"hue\"", "\"saturation\"", "\"value\"", "\"wall_index\""] {
            assert!(json.contains(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_list_sorted_and_skips_invalid() {
        let dir = tempdir().unwrap();
        let store = SpaceStore::new(dir.path());
        store.save(&sample_space("zeta")).unwrap();
        store.save(&sample_space("alpha")).unwrap();

        // A corrupt entry should not break the listing
        std::fs::create_dir_all(dir.path().join("broken")).unwrap();
        std::fs::write(dir.path().join("broken/broken.json"), "not json").unwrap();

        let names: Vec<String> = store.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_delete_removes_folder() {
        let dir = tempdir().unwrap();
        let store = SpaceStore::new(dir.path());
        store.save(&sample_space("gone")).unwrap();
        store.delete("gone").unwrap();
        assert!(!dir.path().join("gone").exists());
    }

    #[test]
    fn test_model_round_trip_through_file() {
        let space = sample_space("studio");
        let model = space.to_model().unwrap();
        assert_eq!(model.dimensions.width, 4.0);
        let door = model.door.unwrap();
        assert_eq!(door.wall, WallIndex::Right);

        let back = SpaceFile::from_model("studio", "a sample space", &model);
        assert_eq!(back, space);
    }

    #[test]
    fn test_to_model_rejects_bad_files() {
        let mut bad_dims = sample_space("x");
        bad_dims.coordinates.width = 0.0;
        assert!(matches!(bad_dims.to_model(), Err(StoreError::Validation(_))));

        let mut bad_wall = sample_space("x");
        bad_wall.door = Some(DoorRecord { width: 1.0, height: 1.0, offset: 0.0, wall_index: 7 });
        assert!(matches!(bad_wall.to_model(), Err(StoreError::Validation(_))));

        let mut bad_fit = sample_space("x");
        // 4.5 + 1.0 > length 5 on the right wall
        bad_fit.door = Some(DoorRecord { width: 1.0, height: 1.0, offset: 4.5, wall_index: 1 });
        assert!(matches!(bad_fit.to_model(), Err(StoreError::Validation(_))));
    }
}
