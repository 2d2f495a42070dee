//! Rendering backend seams.
//!
//! The catalog does not render anything itself; it hands regions to one of
//! two consumer-implemented traits:
//!
//! - [`BlitSurface`] for immediate-mode 2D backends that copy a source
//!   pixel rectangle to a destination rectangle (the shape of a canvas
//!   `drawImage` or raylib's `draw_texture_pro`),
//! - [`TextureSurface`] for texture-sampling backends that consume
//!   normalized UV rectangles.
//!
//! [`PixelSurface`] is a small software implementation of [`BlitSurface`]
//! used by the `spritecat export` command and by tests; a real game plugs
//! its GPU renderer in here instead.

use image::{Rgba, RgbaImage};

use crate::resources::spritesheet::{ImageSheet, Region, UvRegion};

/// Destination rectangle on a surface, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DestRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Immediate-mode 2D drawing backend: blit a source-pixel rectangle of a
/// sheet to a destination rectangle.
pub trait BlitSurface {
    fn blit(&mut self, sheet: &ImageSheet, source: Region, dest: DestRect);
}

/// Texture-sampling backend: blit a normalized UV rectangle of a sheet to
/// a destination rectangle.
pub trait TextureSurface {
    fn blit_uv(&mut self, sheet: &ImageSheet, source: UvRegion, dest: DestRect);
}

/// Software RGBA canvas implementing [`BlitSurface`].
///
/// Nearest-neighbor scaling, source-over alpha compositing, destination
/// clipped to the canvas. Not meant to be fast; meant to be correct and
/// dependency-free for tools and tests.
#[derive(Debug)]
pub struct PixelSurface {
    canvas: RgbaImage,
}

impl PixelSurface {
    /// Transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
        }
    }

    /// Canvas pre-filled with a solid color.
    pub fn with_background(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(width, height, Rgba(rgba)),
        }
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }
}

fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let a = src.0[3] as u32;
    match a {
        0 => {}
        255 => *dst = src,
        _ => {
            let na = 255 - a;
            for i in 0..3 {
                dst.0[i] = ((src.0[i] as u32 * a + dst.0[i] as u32 * na) / 255) as u8;
            }
            dst.0[3] = (a + dst.0[3] as u32 * na / 255) as u8;
        }
    }
}

impl BlitSurface for PixelSurface {
    fn blit(&mut self, sheet: &ImageSheet, source: Region, dest: DestRect) {
        // Nothing to sample from an unloaded sheet.
        let Some(raster) = sheet.raster() else {
            return;
        };
        let dest_w = dest.width.round() as i64;
        let dest_h = dest.height.round() as i64;
        if dest_w <= 0 || dest_h <= 0 || source.width == 0 || source.height == 0 {
            return;
        }
        let origin_x = dest.x.round() as i64;
        let origin_y = dest.y.round() as i64;
        for dy in 0..dest_h {
            let out_y = origin_y + dy;
            if out_y < 0 || out_y >= self.canvas.height() as i64 {
                continue;
            }
            let src_y = source.y as i64 + dy * source.height as i64 / dest_h;
            if src_y >= raster.height() as i64 {
                continue;
            }
            for dx in 0..dest_w {
                let out_x = origin_x + dx;
                if out_x < 0 || out_x >= self.canvas.width() as i64 {
                    continue;
                }
                let src_x = source.x as i64 + dx * source.width as i64 / dest_w;
                if src_x >= raster.width() as i64 {
                    continue;
                }
                let src_px = *raster.get_pixel(src_x as u32, src_y as u32);
                let dst_px = self.canvas.get_pixel_mut(out_x as u32, out_y as u32);
                blend_over(dst_px, src_px);
            }
        }
    }
}
