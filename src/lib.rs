//! Sprite and animation subsystem for a Space-Invaders-style game.
//!
//! Three layers, composed bottom-up:
//!
//! - [`resources::spritesheet::ImageSheet`] – one raster image with a
//!   fixed frame grid, producing pixel and normalized-UV regions,
//! - [`resources::sequence::FrameSequence`] – ordered frames plus playback
//!   state, advanced deterministically by elapsed milliseconds,
//! - [`resources::catalog::SpriteCatalog`] – the registry game code talks
//!   to: loads a JSON configuration, owns the sheets and sequence
//!   templates, and draws through a [`surface::BlitSurface`] or
//!   [`surface::TextureSurface`] rendering backend.
//!
//! The [`components`] and [`systems`] modules integrate the subsystem with
//! a `bevy_ecs` world so entities carry their own playing sequences and a
//! single per-frame system advances them all.

pub mod components;
pub mod error;
pub mod resources;
pub mod surface;
pub mod systems;
