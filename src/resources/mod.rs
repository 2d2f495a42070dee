//! ECS resources and asset stores.
//!
//! This module groups the long-lived data owned by the application: the
//! sprite catalog and its constituent parts, plus the shared clock.
//!
//! Overview
//! - `catalog` – registry of spritesheets and sequence templates, draw paths
//! - `sequence` – frame-indexed animation playback
//! - `spriteconfig` – typed JSON configuration document
//! - `spritesheet` – raster + frame grid, pixel and UV regions
//! - `worldtime` – simulation time and delta in milliseconds

pub mod catalog;
pub mod sequence;
pub mod spriteconfig;
pub mod spritesheet;
pub mod worldtime;
