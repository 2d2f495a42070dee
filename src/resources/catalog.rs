//! Sprite catalog: the registry game code talks to.
//!
//! A [`SpriteCatalog`] loads a sprite configuration document, owns one
//! [`ImageSheet`] per declared sheet and one [`FrameSequence`] *template*
//! per declared sprite, and exposes lookup, instancing, and draw
//! operations. It is an explicitly constructed value: build it at startup
//! and pass it (or insert it into the ECS world as a resource) wherever
//! sprites are drawn. Independent catalogs can coexist, which tests rely
//! on.
//!
//! Loading is all-or-nothing: every sheet load is issued up front and the
//! catalog only becomes ready once all of them have settled successfully.
//! Draw-time problems (unknown names, not-yet-loaded sheets, bad frame
//! indices) are logged and skipped, never raised; a render loop must keep
//! running no matter what the assets are doing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::error::SpriteError;
use crate::resources::sequence::FrameSequence;
use crate::resources::spriteconfig::SpriteConfig;
use crate::resources::spritesheet::{ImageSheet, Region};
use crate::surface::{BlitSurface, DestRect, TextureSurface};

/// Snapshot of how many sheets have finished loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
    /// 0.0..=100.0
    pub percent: f32,
    pub complete: bool,
}

/// Registry mapping declared names to sheets and sequence templates.
#[derive(Resource, Debug)]
pub struct SpriteCatalog {
    config: SpriteConfig,
    base_dir: PathBuf,
    sheets: FxHashMap<Arc<str>, ImageSheet>,
    templates: FxHashMap<String, FrameSequence>,
    loaded: bool,
}

impl SpriteCatalog {
    /// Read, parse, validate, and fully load a configuration document.
    ///
    /// Sheet image paths are resolved relative to the document's
    /// directory. Fails fast on the first configuration or load problem;
    /// a partially loaded catalog is never returned.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SpriteError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
        let config = SpriteConfig::from_json(&text).map_err(|source| SpriteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        let mut catalog = Self::from_config(config, base_dir)?;
        catalog.load_sheets().await?;
        Ok(catalog)
    }

    /// Build a catalog from an already-parsed configuration without doing
    /// any I/O. Static validation runs here; sheets stay unloaded until
    /// [`load_sheets`](Self::load_sheets).
    pub fn from_config(
        config: SpriteConfig,
        base_dir: impl Into<PathBuf>,
    ) -> Result<Self, SpriteError> {
        config.validate()?;
        let base_dir = base_dir.into();
        let mut sheets: FxHashMap<Arc<str>, ImageSheet> = FxHashMap::default();
        for (name, decl) in &config.spritesheets {
            sheets.insert(
                Arc::from(name.as_str()),
                ImageSheet::new(base_dir.join(&decl.path), decl.frame_width, decl.frame_height),
            );
        }
        Ok(Self {
            config,
            base_dir,
            sheets,
            templates: FxHashMap::default(),
            loaded: false,
        })
    }

    /// Load every declared sheet, then validate geometry and build all
    /// sequence templates.
    ///
    /// All sheet loads are issued before any is awaited so the I/O
    /// overlaps; the call returns only once every load has settled, and
    /// the first failure wins. Idempotent once the catalog is loaded.
    pub async fn load_sheets(&mut self) -> Result<(), SpriteError> {
        if self.loaded {
            return Ok(());
        }
        let results =
            futures::future::join_all(self.sheets.values_mut().map(|sheet| sheet.load())).await;
        for result in results {
            result?;
        }
        self.validate_geometry()?;
        self.build_templates();
        self.loaded = true;
        log::info!(
            "sprite catalog ready: {} sheets, {} sprites",
            self.sheets.len(),
            self.templates.len()
        );
        Ok(())
    }

    /// Check every declared frame cell against the decoded grid of its
    /// sheet, failing with the offending sprite name.
    fn validate_geometry(&self) -> Result<(), SpriteError> {
        for (sheet_name, decl) in &self.config.spritesheets {
            let Some((columns, rows)) = self
                .sheets
                .get(sheet_name.as_str())
                .and_then(ImageSheet::grid)
            else {
                continue;
            };
            for (sprite_name, sprite) in &decl.sprites {
                let first_column = sprite.frames.first().copied().unwrap_or(0);
                if sprite.row >= rows {
                    return Err(SpriteError::FrameOutOfBounds {
                        sprite: sprite_name.clone(),
                        sheet: sheet_name.clone(),
                        column: first_column,
                        row: sprite.row,
                        columns,
                        rows,
                    });
                }
                for &column in &sprite.frames {
                    if column >= columns {
                        return Err(SpriteError::FrameOutOfBounds {
                            sprite: sprite_name.clone(),
                            sheet: sheet_name.clone(),
                            column,
                            row: sprite.row,
                            columns,
                            rows,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn build_templates(&mut self) {
        let mut templates = FxHashMap::default();
        for (sheet_name, decl) in &self.config.spritesheets {
            let Some((key, sheet)) = self.sheets.get_key_value(sheet_name.as_str()) else {
                continue;
            };
            for (sprite_name, sprite) in &decl.sprites {
                let frames = sheet.regions_for(&sprite.frames, sprite.row);
                templates.insert(
                    sprite_name.clone(),
                    FrameSequence::new(Arc::clone(key), frames, sprite.fps, sprite.looped),
                );
            }
        }
        self.templates = templates;
    }

    /// Sheet by name.
    pub fn spritesheet(&self, name: &str) -> Option<&ImageSheet> {
        self.sheets.get(name)
    }

    /// Shared template by sprite name. Read-only: mutate an
    /// [`instance`](FrameSequence::instance) instead, never the template.
    pub fn template(&self, name: &str) -> Option<&FrameSequence> {
        self.templates.get(name)
    }

    /// Fresh playable copy of the named sprite's template, or `None` for
    /// an unknown name. A miss is a routine condition, not an error.
    pub fn instantiate(&self, name: &str) -> Option<FrameSequence> {
        self.templates.get(name).map(FrameSequence::instance)
    }

    /// All declared sprite names, sorted.
    pub fn sprite_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sprite names grouped by their declaring sheet.
    pub fn sprites_by_category(&self) -> BTreeMap<String, Vec<String>> {
        self.config
            .spritesheets
            .iter()
            .map(|(sheet, decl)| (sheet.clone(), decl.sprites.keys().cloned().collect()))
            .collect()
    }

    /// Game-specific side-data for a caller-defined category (e.g. per
    /// enemy type), opaque to this crate.
    pub fn metadata(&self, category: &str) -> Option<&serde_json::Value> {
        self.config.metadata.get(category)
    }

    /// Directory sheet paths were resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// True once the configuration is parsed and every sheet is loaded.
    pub fn is_ready(&self) -> bool {
        self.loaded && self.sheets.values().all(ImageSheet::is_loaded)
    }

    pub fn load_progress(&self) -> LoadProgress {
        let total = self.sheets.len();
        let loaded = self.sheets.values().filter(|s| s.is_loaded()).count();
        let percent = if total == 0 {
            100.0
        } else {
            loaded as f32 * 100.0 / total as f32
        };
        LoadProgress {
            loaded,
            total,
            percent,
            complete: loaded == total,
        }
    }

    /// Blit frame `frame_index` of the named sprite at (`x`, `y`).
    ///
    /// `width`/`height` default to the region's native pixel size. Unknown
    /// names, out-of-range frames, and unloaded sheets log a diagnostic
    /// and skip the draw; this path never fails mid-frame.
    pub fn draw<S: BlitSurface>(
        &self,
        surface: &mut S,
        name: &str,
        frame_index: usize,
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) {
        let Some(template) = self.templates.get(name) else {
            log::warn!("draw: unknown sprite '{name}'");
            return;
        };
        let Some(region) = template.frame(frame_index) else {
            log::warn!(
                "draw: sprite '{name}' has no frame {frame_index} ({} frames)",
                template.frame_count()
            );
            return;
        };
        let Some(sheet) = self.ready_sheet(template.sheet()) else {
            return;
        };
        surface.blit(sheet, region, Self::dest_rect(region, x, y, width, height));
    }

    /// Blit the current frame of a live sequence at (`x`, `y`).
    ///
    /// The owning sheet comes from the sequence's sheet handle.
    pub fn draw_sequence<S: BlitSurface>(
        &self,
        surface: &mut S,
        sequence: &FrameSequence,
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) {
        let Some(sheet) = self.ready_sheet(sequence.sheet()) else {
            return;
        };
        let region = sequence.current_region();
        surface.blit(sheet, region, Self::dest_rect(region, x, y, width, height));
    }

    /// UV-space variant of [`draw`](Self::draw) for texture-sampling
    /// backends.
    pub fn draw_uv<S: TextureSurface>(
        &self,
        surface: &mut S,
        name: &str,
        frame_index: usize,
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) {
        let Some(template) = self.templates.get(name) else {
            log::warn!("draw_uv: unknown sprite '{name}'");
            return;
        };
        let Some(region) = template.frame(frame_index) else {
            log::warn!(
                "draw_uv: sprite '{name}' has no frame {frame_index} ({} frames)",
                template.frame_count()
            );
            return;
        };
        self.blit_uv(surface, template.sheet(), region, x, y, width, height);
    }

    /// UV-space variant of [`draw_sequence`](Self::draw_sequence).
    pub fn draw_sequence_uv<S: TextureSurface>(
        &self,
        surface: &mut S,
        sequence: &FrameSequence,
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) {
        self.blit_uv(
            surface,
            sequence.sheet(),
            sequence.current_region(),
            x,
            y,
            width,
            height,
        );
    }

    fn blit_uv<S: TextureSurface>(
        &self,
        surface: &mut S,
        sheet_name: &str,
        region: Region,
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) {
        let Some(sheet) = self.ready_sheet(sheet_name) else {
            return;
        };
        let Some(uv) = sheet.uv(region) else {
            return;
        };
        surface.blit_uv(sheet, uv, Self::dest_rect(region, x, y, width, height));
    }

    /// Sheet by name if it exists and has finished loading; logs and
    /// yields `None` otherwise.
    fn ready_sheet(&self, name: &str) -> Option<&ImageSheet> {
        match self.sheets.get(name) {
            Some(sheet) if sheet.is_loaded() => Some(sheet),
            Some(_) => {
                log::warn!("draw: sheet '{name}' is not loaded yet");
                None
            }
            None => {
                log::warn!("draw: unknown sheet '{name}'");
                None
            }
        }
    }

    fn dest_rect(region: Region, x: f32, y: f32, width: Option<f32>, height: Option<f32>) -> DestRect {
        DestRect::new(
            x,
            y,
            width.unwrap_or(region.width as f32),
            height.unwrap_or(region.height as f32),
        )
    }
}
