//! ECS components for entities.
//!
//! This module groups the component types game code attaches to entities
//! that show an animated sprite.
//!
//! Submodules overview:
//! - [`animation`] – per-entity frame sequence playback
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – destination sizing for the drawn frame
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod mapposition;
pub mod sprite;
pub mod zindex;
