//! ECS systems.
//!
//! Submodules overview
//! - [`animation`] – advance per-entity sprite animations each frame
//! - [`render`] – draw animated sprites through a blit surface, z-ordered
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod render;
pub mod time;
