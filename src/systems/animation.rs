//! Animation advance system.
//!
//! Steps every entity's [`Animation`](crate::components::animation::Animation)
//! by the frame delta from [`WorldTime`](crate::resources::worldtime::WorldTime).
//! Runs once per rendered frame from the game's single update loop; the
//! playback math itself lives in
//! [`FrameSequence::advance`](crate::resources::sequence::FrameSequence::advance).

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::resources::worldtime::WorldTime;

/// Advance all animation components by this frame's delta.
pub fn advance_animations(mut query: Query<&mut Animation>, time: Res<WorldTime>) {
    for mut animation in query.iter_mut() {
        animation.sequence.advance(time.delta_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::sequence::FrameSequence;
    use crate::resources::spritesheet::Region;

    fn world_with_time(delta_ms: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed_ms: 0.0,
            delta_ms,
            time_scale: 1.0,
        });
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(advance_animations);
        schedule.run(world);
    }

    fn two_frame_sequence() -> FrameSequence {
        let frames: Vec<Region> = (0..2)
            .map(|c| Region {
                x: c * 8,
                y: 0,
                width: 8,
                height: 8,
            })
            .collect();
        FrameSequence::new("enemies", frames, 10.0, true)
    }

    #[test]
    fn playing_animations_advance_by_the_frame_delta() {
        let mut world = world_with_time(100.0);
        let entity = world
            .spawn((Animation::playing("crab_walk", two_frame_sequence()),))
            .id();

        tick(&mut world);

        let animation = world.get::<Animation>(entity).unwrap();
        assert_eq!(animation.sequence.current_frame(), 1);
    }

    #[test]
    fn idle_animations_stay_put() {
        let mut world = world_with_time(100.0);
        let entity = world
            .spawn((Animation::new("crab_walk", two_frame_sequence()),))
            .id();

        tick(&mut world);

        let animation = world.get::<Animation>(entity).unwrap();
        assert_eq!(animation.sequence.current_frame(), 0);
    }
}
