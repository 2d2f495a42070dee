//! Simulation time resource.
//!
//! Animation playback is specified in milliseconds, so the shared clock
//! counts milliseconds as well. The game loop feeds it the raw frame delta
//! once per frame via [`update_world_time`](crate::systems::time::update_world_time);
//! `time_scale` lets the game slow down or freeze every animation at once
//! (pause menus, hit-stop).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Total scaled milliseconds since startup.
    pub elapsed_ms: f32,
    /// Scaled milliseconds covered by the current frame.
    pub delta_ms: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed_ms: 0.0,
            delta_ms: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
