use bevy_ecs::prelude::Component;

use crate::resources::sequence::FrameSequence;

/// Per-entity animation playback.
///
/// Holds this entity's own [`FrameSequence`] instance (never the catalog's
/// shared template) plus the sprite name it was instantiated from, kept
/// around for diagnostics and for swapping animations at runtime.
#[derive(Component, Debug)]
pub struct Animation {
    pub sprite_key: String,
    pub sequence: FrameSequence,
}

impl Animation {
    pub fn new(sprite_key: impl Into<String>, sequence: FrameSequence) -> Self {
        Self {
            sprite_key: sprite_key.into(),
            sequence,
        }
    }

    /// Same, but already playing. Most entities want their animation
    /// running from the frame they spawn on.
    pub fn playing(sprite_key: impl Into<String>, mut sequence: FrameSequence) -> Self {
        sequence.play();
        Self::new(sprite_key, sequence)
    }
}
