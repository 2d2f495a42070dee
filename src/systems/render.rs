//! Sprite render pass.
//!
//! Collects every entity with an [`Animation`] and a [`MapPosition`],
//! sorts by [`ZIndex`] (painter's algorithm, missing index draws at 0),
//! and blits each current frame through the world's
//! [`SpriteCatalog`](crate::resources::catalog::SpriteCatalog) onto the
//! caller-provided surface. Asset problems never abort the pass: unknown
//! sheets or not-yet-loaded rasters are logged and skipped inside the
//! catalog's draw path.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::catalog::SpriteCatalog;
use crate::surface::BlitSurface;

/// Draw all animated sprites onto `surface`, back to front.
pub fn render_pass<S: BlitSurface>(world: &mut World, surface: &mut S) {
    let mut query =
        world.query::<(&Animation, &MapPosition, Option<&Sprite>, Option<&ZIndex>)>();

    let mut to_draw: Vec<(&Animation, &MapPosition, Option<&Sprite>, i32)> = query
        .iter(world)
        .map(|(animation, position, sprite, z)| {
            (animation, position, sprite, z.map_or(0, |z| z.0))
        })
        .collect();
    to_draw.sort_by_key(|(_, _, _, z)| *z);

    let catalog = world.resource::<SpriteCatalog>();
    for (animation, position, sprite, _z) in to_draw {
        let sprite = sprite.copied().unwrap_or_default();
        catalog.draw_sequence(
            surface,
            &animation.sequence,
            position.x,
            position.y,
            sprite.width,
            sprite.height,
        );
    }
}
