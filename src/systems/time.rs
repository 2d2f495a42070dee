//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta milliseconds on the `WorldTime` resource.
///
/// `dt_ms` is expected to be the unscaled frame delta in milliseconds. The
/// system applies the current `time_scale` and writes both `elapsed_ms`
/// and `delta_ms`.
pub fn update_world_time(world: &mut World, dt_ms: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt_ms * wt.time_scale;
    wt.elapsed_ms += scaled_dt;
    wt.delta_ms = scaled_dt;
}
