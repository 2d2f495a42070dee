use bevy_ecs::prelude::Component;

/// Destination sizing for a drawn sprite.
///
/// When `width`/`height` are `None` the frame is drawn at its native pixel
/// size; set them to stretch the sprite to a different on-surface size.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Sprite {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Sprite {
    pub fn native() -> Self {
        Self::default()
    }

    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}
