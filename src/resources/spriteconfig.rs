//! Sprite configuration document.
//!
//! Serde types for the JSON document that declares spritesheets, their
//! named sprites, and an optional free-form metadata side-table:
//!
//! ```json
//! {
//!   "spritesheets": {
//!     "enemies": {
//!       "path": "enemies.png",
//!       "frameWidth": 16, "frameHeight": 16,
//!       "sprites": {
//!         "crab_walk": { "frames": [0, 1, 2, 3], "row": 0, "fps": 8, "loop": true }
//!       }
//!     }
//!   },
//!   "metadata": { "enemies": { "crab": { "speed": 40, "points": 20 } } }
//! }
//! ```
//!
//! The schema is strict: unknown fields are rejected at parse time, and
//! [`SpriteConfig::validate`] checks everything that can be checked before
//! any image is decoded. Geometry against the actual grids is validated by
//! the catalog once the sheets have loaded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

/// Root of the configuration document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteConfig {
    /// Declared sheets by name.
    pub spritesheets: BTreeMap<String, SheetDecl>,
    /// Game-specific side-data by caller-defined category (e.g. enemy
    /// type -> speed/points). Opaque to this crate.
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// One spritesheet: an image path, its uniform cell size, and the named
/// sprites cut from it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SheetDecl {
    /// Image location, resolved relative to the configuration file.
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub sprites: BTreeMap<String, SpriteDecl>,
}

/// One named sprite: frame columns along a row, playback rate, loop flag.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteDecl {
    /// Column indices into the sheet grid, in playback order.
    pub frames: Vec<u32>,
    /// Row index shared by all frames of this sprite.
    pub row: u32,
    /// Playback rate in frames per second. Must be finite and positive.
    pub fps: f32,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl SpriteConfig {
    /// Parse a configuration document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Validate everything that does not require decoded images: cell
    /// sizes, playback rates, frame lists, and catalog-wide sprite name
    /// uniqueness. Fails with the first offending name (iteration order is
    /// deterministic; declarations are kept sorted by name).
    pub fn validate(&self) -> Result<(), SpriteError> {
        let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
        for (sheet_name, sheet) in &self.spritesheets {
            if sheet.frame_width == 0 || sheet.frame_height == 0 {
                return Err(SpriteError::InvalidCellSize {
                    sheet: sheet_name.clone(),
                    width: sheet.frame_width,
                    height: sheet.frame_height,
                });
            }
            for (sprite_name, sprite) in &sheet.sprites {
                if let Some(first) = owners.insert(sprite_name.as_str(), sheet_name.as_str()) {
                    return Err(SpriteError::DuplicateSprite {
                        sprite: sprite_name.clone(),
                        first: first.to_string(),
                        second: sheet_name.clone(),
                    });
                }
                if !sprite.fps.is_finite() || sprite.fps <= 0.0 {
                    return Err(SpriteError::InvalidFps {
                        sprite: sprite_name.clone(),
                        fps: sprite.fps,
                    });
                }
                if sprite.frames.is_empty() {
                    return Err(SpriteError::EmptyFrames {
                        sprite: sprite_name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
