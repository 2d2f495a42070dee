//! Spritesheet raster and grid geometry.
//!
//! An [`ImageSheet`] owns one decoded raster image subdivided into a uniform
//! grid of fixed-size cells. It converts (column, row) cell coordinates into
//! pixel-space [`Region`]s and, once the image dimensions are known,
//! normalized [`UvRegion`]s for texture-sampling renderers.
//!
//! Sheets start empty and are filled by [`ImageSheet::load`] (async file
//! read) or [`ImageSheet::load_from_memory`] (embedded assets). The grid is
//! derived from the decoded image size, so UV lookups are only available
//! after a successful load.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::SpriteError;

/// Rectangular sub-area of a sheet in source-pixel space.
///
/// Plain value type: producing one never touches the raster, so callers may
/// build regions for cells outside the grid. Such regions simply carry
/// pixel coordinates outside the image; bounds are validated at catalog
/// load time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Rectangular sub-area of a sheet in normalized texture space (0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRegion {
    pub u: f32,
    pub v: f32,
    pub u_width: f32,
    pub v_height: f32,
}

/// One raster image with a fixed frame grid.
///
/// `columns` and `rows` are undefined until the load completes; callers
/// must check [`is_loaded`](ImageSheet::is_loaded) (or match on
/// [`grid`](ImageSheet::grid)) before relying on them. A failed load is
/// permanent: the sheet reports the recorded failure on every later load
/// call instead of re-fetching.
#[derive(Debug)]
pub struct ImageSheet {
    path: PathBuf,
    frame_width: u32,
    frame_height: u32,
    raster: Option<RgbaImage>,
    columns: u32,
    rows: u32,
    failed: bool,
}

impl ImageSheet {
    /// Create an unloaded sheet for the image at `path` with the given
    /// cell size.
    pub fn new(path: impl Into<PathBuf>, frame_width: u32, frame_height: u32) -> Self {
        Self {
            path: path.into(),
            frame_width,
            frame_height,
            raster: None,
            columns: 0,
            rows: 0,
            failed: false,
        }
    }

    /// Read and decode the sheet image from disk.
    ///
    /// Idempotent: an already-loaded sheet returns `Ok` without touching
    /// the filesystem, and a sheet whose earlier load failed returns
    /// [`SpriteError::SheetFailed`] without retrying.
    pub async fn load(&mut self) -> Result<(), SpriteError> {
        if self.raster.is_some() {
            return Ok(());
        }
        if self.failed {
            return Err(SpriteError::SheetFailed {
                path: self.path.clone(),
            });
        }
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) => {
                self.failed = true;
                return Err(SpriteError::SheetIo {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        self.install_raster(&bytes)
    }

    /// Decode the sheet from bytes already in memory.
    ///
    /// Same idempotence and permanent-failure rules as [`load`](Self::load).
    pub fn load_from_memory(&mut self, bytes: &[u8]) -> Result<(), SpriteError> {
        if self.raster.is_some() {
            return Ok(());
        }
        if self.failed {
            return Err(SpriteError::SheetFailed {
                path: self.path.clone(),
            });
        }
        self.install_raster(bytes)
    }

    fn install_raster(&mut self, bytes: &[u8]) -> Result<(), SpriteError> {
        let decoded = match image::load_from_memory(bytes) {
            Ok(decoded) => decoded,
            Err(source) => {
                self.failed = true;
                return Err(SpriteError::SheetDecode {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let raster = decoded.to_rgba8();
        self.columns = raster.width() / self.frame_width;
        self.rows = raster.height() / self.frame_height;
        self.raster = Some(raster);
        Ok(())
    }

    /// Pixel region of the cell at (`column`, `row`).
    ///
    /// Pure grid arithmetic; does not require (or check against) a loaded
    /// raster.
    pub fn region_at(&self, column: u32, row: u32) -> Region {
        Region {
            x: column * self.frame_width,
            y: row * self.frame_height,
            width: self.frame_width,
            height: self.frame_height,
        }
    }

    /// Pixel regions for several columns of one row, in order.
    pub fn regions_for(&self, columns: &[u32], row: u32) -> Vec<Region> {
        columns.iter().map(|&c| self.region_at(c, row)).collect()
    }

    /// Normalized region of the cell at (`column`, `row`), or `None` while
    /// the sheet is not loaded (UVs need the decoded image dimensions).
    pub fn uv_for(&self, column: u32, row: u32) -> Option<UvRegion> {
        self.uv(self.region_at(column, row))
    }

    /// Convert a pixel region into normalized texture coordinates.
    ///
    /// `None` while the sheet is not loaded.
    pub fn uv(&self, region: Region) -> Option<UvRegion> {
        let raster = self.raster.as_ref()?;
        let w = raster.width() as f32;
        let h = raster.height() as f32;
        Some(UvRegion {
            u: region.x as f32 / w,
            v: region.y as f32 / h,
            u_width: region.width as f32 / w,
            v_height: region.height as f32 / h,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.raster.is_some()
    }

    /// `(columns, rows)` of the frame grid, or `None` until loaded.
    pub fn grid(&self) -> Option<(u32, u32)> {
        self.raster.as_ref().map(|_| (self.columns, self.rows))
    }

    /// Declared cell size `(width, height)` in pixels.
    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded RGBA raster, available once loaded. Rendering backends use
    /// this to source pixels for blits.
    pub fn raster(&self) -> Option<&RgbaImage> {
        self.raster.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode a wxh RGBA image to PNG bytes.
    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn region_at_is_pure_grid_math() {
        let sheet = ImageSheet::new("enemies.png", 16, 24);
        let r = sheet.region_at(3, 2);
        assert_eq!(
            r,
            Region {
                x: 48,
                y: 48,
                width: 16,
                height: 24
            }
        );
    }

    #[test]
    fn region_at_does_not_clamp_out_of_grid_cells() {
        let sheet = ImageSheet::new("enemies.png", 16, 16);
        // Caller error by contract: the region lands outside any image.
        let r = sheet.region_at(1000, 0);
        assert_eq!(r.x, 16000);
    }

    #[test]
    fn regions_for_maps_each_column() {
        let sheet = ImageSheet::new("enemies.png", 8, 8);
        let regions = sheet.regions_for(&[0, 2, 1], 3);
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0], sheet.region_at(0, 3));
        assert_eq!(regions[1], sheet.region_at(2, 3));
        assert_eq!(regions[2], sheet.region_at(1, 3));
    }

    #[test]
    fn uv_unavailable_before_load() {
        let sheet = ImageSheet::new("enemies.png", 16, 16);
        assert!(!sheet.is_loaded());
        assert!(sheet.grid().is_none());
        assert!(sheet.uv_for(0, 0).is_none());
    }

    #[test]
    fn grid_is_floor_of_image_over_cell() {
        let mut sheet = ImageSheet::new("enemies.png", 16, 16);
        // 70x40 image with 16x16 cells: trailing pixels are ignored.
        sheet.load_from_memory(&png_bytes(70, 40)).unwrap();
        assert_eq!(sheet.grid(), Some((4, 2)));
    }

    #[test]
    fn in_grid_regions_stay_inside_the_image() {
        let mut sheet = ImageSheet::new("enemies.png", 16, 16);
        sheet.load_from_memory(&png_bytes(70, 40)).unwrap();
        let (columns, rows) = sheet.grid().unwrap();
        let raster = sheet.raster().unwrap();
        for row in 0..rows {
            for column in 0..columns {
                let r = sheet.region_at(column, row);
                assert!(r.x + r.width <= raster.width());
                assert!(r.y + r.height <= raster.height());
            }
        }
    }

    #[test]
    fn uv_divides_by_image_dimensions() {
        let mut sheet = ImageSheet::new("enemies.png", 16, 16);
        sheet.load_from_memory(&png_bytes(64, 32)).unwrap();
        let uv = sheet.uv_for(1, 1).unwrap();
        assert_eq!(uv.u, 0.25);
        assert_eq!(uv.v, 0.5);
        assert_eq!(uv.u_width, 0.25);
        assert_eq!(uv.v_height, 0.5);
    }

    #[test]
    fn load_from_memory_is_idempotent() {
        let mut sheet = ImageSheet::new("enemies.png", 16, 16);
        sheet.load_from_memory(&png_bytes(32, 32)).unwrap();
        // Second call is a no-op even with different (here: garbage) bytes.
        sheet.load_from_memory(b"not a png").unwrap();
        assert_eq!(sheet.grid(), Some((2, 2)));
    }

    #[test]
    fn failed_decode_is_permanent() {
        let mut sheet = ImageSheet::new("enemies.png", 16, 16);
        let first = sheet.load_from_memory(b"not a png");
        assert!(matches!(first, Err(SpriteError::SheetDecode { .. })));
        // Valid bytes afterwards do not resurrect the sheet.
        let second = sheet.load_from_memory(&png_bytes(32, 32));
        assert!(matches!(second, Err(SpriteError::SheetFailed { .. })));
        assert!(!sheet.is_loaded());
    }

    #[tokio::test]
    async fn load_reports_missing_file_with_path() {
        let mut sheet = ImageSheet::new("/definitely/not/here.png", 16, 16);
        let err = sheet.load().await.unwrap_err();
        match err {
            SpriteError::SheetIo { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.png"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
