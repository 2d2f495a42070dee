//! Error types for catalog and spritesheet loading.
//!
//! Lookup misses are deliberately *not* errors anywhere in this crate: an
//! unknown sprite name yields `None` (or a logged no-op on draw paths) so a
//! running render loop never has to unwind over a typo. Everything here is
//! about loading and validating assets, where failing fast with the
//! offending name is the useful behavior.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading or validating sprite assets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpriteError {
    /// The configuration document could not be read.
    #[error("failed to read sprite config '{}': {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON or does not match the
    /// expected schema.
    #[error("failed to parse sprite config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A spritesheet image could not be read from disk.
    #[error("failed to read spritesheet image '{}': {source}", path.display())]
    SheetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A spritesheet image could not be decoded.
    #[error("failed to decode spritesheet image '{}': {source}", path.display())]
    SheetDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A sheet whose previous load attempt failed was asked to load again.
    /// Failed sheets stay failed; there is no automatic retry.
    #[error("spritesheet '{}' is in a failed state from an earlier load", path.display())]
    SheetFailed { path: PathBuf },

    /// Sheet declared with a zero frame width or height.
    #[error("spritesheet '{sheet}' declares an invalid cell size {width}x{height}")]
    InvalidCellSize {
        sheet: String,
        width: u32,
        height: u32,
    },

    /// The same sprite name is declared under two different sheets. Names
    /// are catalog-wide, so this would silently shadow one of them.
    #[error("sprite '{sprite}' is declared by both sheet '{first}' and sheet '{second}'")]
    DuplicateSprite {
        sprite: String,
        first: String,
        second: String,
    },

    /// Sprite declared with a non-positive or non-finite fps.
    #[error("sprite '{sprite}' declares invalid fps {fps} (must be finite and > 0)")]
    InvalidFps { sprite: String, fps: f32 },

    /// Sprite declared with an empty frame list.
    #[error("sprite '{sprite}' declares no frames")]
    EmptyFrames { sprite: String },

    /// Sprite declares a frame column or row outside the sheet's decoded
    /// grid.
    #[error(
        "sprite '{sprite}' addresses cell ({column}, {row}) outside the \
         {columns}x{rows} grid of sheet '{sheet}'"
    )]
    FrameOutOfBounds {
        sprite: String,
        sheet: String,
        column: u32,
        row: u32,
        columns: u32,
        rows: u32,
    },
}
