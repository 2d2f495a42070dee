//! Frame sequence playback.
//!
//! A [`FrameSequence`] is an ordered list of sheet [`Region`]s plus the
//! mutable playback state needed to step through them at a fixed frame
//! rate: current index, accumulated sub-frame time, playing/finished
//! flags. The catalog owns one *template* per declared sprite; entities
//! get their own copies through [`FrameSequence::instance`] so concurrent
//! playback never shares mutable state.
//!
//! Time is in milliseconds throughout. One frame lasts `1000.0 / fps` ms.

use std::sync::Arc;

use crate::resources::spritesheet::Region;

/// Ordered animation frames with per-instance playback state.
///
/// The frame list itself is immutable and shared between the template and
/// all of its instances; only the playback fields differ per copy.
#[derive(Debug)]
pub struct FrameSequence {
    frames: Arc<[Region]>,
    sheet: Arc<str>,
    fps: f32,
    looped: bool,
    frame_index: usize,
    elapsed_ms: f32,
    playing: bool,
    finished: bool,
}

impl FrameSequence {
    /// Build a sequence over `frames` drawn from the named sheet.
    ///
    /// `frames` must be non-empty and `fps` finite and positive; the
    /// catalog validates both before constructing templates.
    pub fn new(
        sheet: impl Into<Arc<str>>,
        frames: impl Into<Arc<[Region]>>,
        fps: f32,
        looped: bool,
    ) -> Self {
        Self {
            frames: frames.into(),
            sheet: sheet.into(),
            fps,
            looped,
            frame_index: 0,
            elapsed_ms: 0.0,
            playing: false,
            finished: false,
        }
    }

    /// Independent copy sharing the frame list but starting from idle:
    /// frame 0, zero accumulated time, not playing, not finished.
    ///
    /// The source's playback state is deliberately *not* copied, so an
    /// entity spawned mid-game never inherits another entity's (or the
    /// template's) animation phase.
    pub fn instance(&self) -> FrameSequence {
        FrameSequence {
            frames: Arc::clone(&self.frames),
            sheet: Arc::clone(&self.sheet),
            fps: self.fps,
            looped: self.looped,
            frame_index: 0,
            elapsed_ms: 0.0,
            playing: false,
            finished: false,
        }
    }

    /// Start (or resume) playback. Clears `finished`.
    pub fn play(&mut self) {
        self.playing = true;
        self.finished = false;
    }

    /// Stop advancing while keeping the current frame and accumulated time.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Return to idle: frame 0, no accumulated time, not finished.
    pub fn reset(&mut self) {
        self.playing = false;
        self.frame_index = 0;
        self.elapsed_ms = 0.0;
        self.finished = false;
    }

    /// [`pause`](Self::pause) followed by [`reset`](Self::reset).
    pub fn stop(&mut self) {
        self.pause();
        self.reset();
    }

    /// Advance playback by `delta_ms` milliseconds.
    ///
    /// No-op unless playing. Consumes whole frame durations in a loop, so
    /// a large delta (a backgrounded tab, a debugger pause) steps through
    /// as many frames as the elapsed time actually covers instead of one.
    /// Looping sequences wrap to frame 0 as often as needed; non-looping
    /// ones clamp on the last frame, set `finished`, stop playing, and
    /// leave any remaining accumulated time unconsumed.
    pub fn advance(&mut self, delta_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += delta_ms;
        let frame_ms = self.frame_duration_ms();
        while self.elapsed_ms >= frame_ms {
            if self.frame_index + 1 < self.frames.len() {
                self.elapsed_ms -= frame_ms;
                self.frame_index += 1;
            } else if self.looped {
                self.elapsed_ms -= frame_ms;
                self.frame_index = 0;
            } else {
                self.frame_index = self.frames.len() - 1;
                self.finished = true;
                self.playing = false;
                break;
            }
        }
    }

    /// Region of the current frame. Defined in every state.
    pub fn current_region(&self) -> Region {
        self.frames[self.frame_index]
    }

    /// Region of an arbitrary frame, or `None` when out of range.
    pub fn frame(&self, index: usize) -> Option<Region> {
        self.frames.get(index).copied()
    }

    /// Name of the sheet the frames were cut from.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn current_frame(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Duration of one frame in milliseconds (`1000.0 / fps`).
    pub fn frame_duration_ms(&self) -> f32 {
        1000.0 / self.fps
    }

    /// Accumulated sub-frame time in milliseconds.
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Change the playback rate. Takes effect on the next
    /// [`advance`](Self::advance); already-accumulated time is kept.
    pub fn set_fps(&mut self, fps: f32) {
        self.fps = fps;
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four 8x8 frames along row 0, fps 10 -> 100 ms per frame.
    fn four_frames(looped: bool) -> FrameSequence {
        let frames: Vec<Region> = (0..4)
            .map(|c| Region {
                x: c * 8,
                y: 0,
                width: 8,
                height: 8,
            })
            .collect();
        FrameSequence::new("enemies", frames, 10.0, looped)
    }

    #[test]
    fn starts_idle_on_frame_zero() {
        let seq = four_frames(true);
        assert!(!seq.is_playing());
        assert!(!seq.is_finished());
        assert_eq!(seq.current_frame(), 0);
        assert_eq!(seq.current_region().x, 0);
    }

    #[test]
    fn advance_is_a_noop_while_idle() {
        let mut seq = four_frames(true);
        seq.advance(1000.0);
        assert_eq!(seq.current_frame(), 0);
        assert_eq!(seq.elapsed_ms(), 0.0);
    }

    #[test]
    fn advance_steps_one_frame_per_duration() {
        let mut seq = four_frames(true);
        seq.play();
        seq.advance(100.0);
        assert_eq!(seq.current_frame(), 1);
        seq.advance(100.0);
        assert_eq!(seq.current_frame(), 2);
    }

    #[test]
    fn sub_frame_time_accumulates() {
        let mut seq = four_frames(true);
        seq.play();
        seq.advance(60.0);
        assert_eq!(seq.current_frame(), 0);
        seq.advance(60.0);
        assert_eq!(seq.current_frame(), 1);
        assert!((seq.elapsed_ms() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn large_delta_advances_floor_of_dt_over_duration() {
        let mut seq = four_frames(true);
        seq.play();
        // 3.5 frame durations: exactly 3 steps, half a frame left over.
        seq.advance(350.0);
        assert_eq!(seq.current_frame(), 3);
        assert!((seq.elapsed_ms() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn looped_advance_is_periodic_from_any_start() {
        for start in 0..4usize {
            let mut seq = four_frames(true);
            seq.play();
            seq.advance(start as f32 * 100.0);
            assert_eq!(seq.current_frame(), start);
            // One full cycle returns to the starting frame.
            seq.advance(4.0 * 100.0);
            assert_eq!(seq.current_frame(), start);
        }
    }

    #[test]
    fn looped_delta_may_wrap_multiple_times() {
        let mut seq = four_frames(true);
        seq.play();
        // 9 frame durations on a 4-frame loop: 9 % 4 = 1.
        seq.advance(900.0);
        assert_eq!(seq.current_frame(), 1);
        assert!(!seq.is_finished());
    }

    #[test]
    fn non_looped_clamps_and_finishes() {
        let mut seq = four_frames(false);
        seq.play();
        seq.advance(1000.0);
        assert_eq!(seq.current_frame(), 3);
        assert!(seq.is_finished());
        assert!(!seq.is_playing());
    }

    #[test]
    fn finished_state_is_terminal_under_repeated_advance() {
        let mut seq = four_frames(false);
        seq.play();
        seq.advance(1000.0);
        for _ in 0..10 {
            seq.advance(250.0);
            assert_eq!(seq.current_frame(), 3);
            assert!(seq.is_finished());
        }
    }

    #[test]
    fn pause_preserves_index_and_elapsed() {
        let mut seq = four_frames(true);
        seq.play();
        seq.advance(130.0);
        seq.pause();
        assert!(!seq.is_playing());
        assert_eq!(seq.current_frame(), 1);
        let elapsed = seq.elapsed_ms();
        seq.advance(500.0);
        assert_eq!(seq.current_frame(), 1);
        assert_eq!(seq.elapsed_ms(), elapsed);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut seq = four_frames(false);
        seq.play();
        seq.advance(1000.0);
        seq.reset();
        assert!(!seq.is_playing());
        assert!(!seq.is_finished());
        assert_eq!(seq.current_frame(), 0);
        assert_eq!(seq.elapsed_ms(), 0.0);
    }

    #[test]
    fn play_after_finish_clears_finished() {
        let mut seq = four_frames(false);
        seq.play();
        seq.advance(1000.0);
        assert!(seq.is_finished());
        seq.play();
        assert!(seq.is_playing());
        assert!(!seq.is_finished());
        // Resumes from the clamped last frame; reset() restarts instead.
        assert_eq!(seq.current_frame(), 3);
    }

    #[test]
    fn stop_is_pause_then_reset() {
        let mut seq = four_frames(true);
        seq.play();
        seq.advance(250.0);
        seq.stop();
        assert!(!seq.is_playing());
        assert_eq!(seq.current_frame(), 0);
        assert_eq!(seq.elapsed_ms(), 0.0);
    }

    #[test]
    fn instance_shares_frames_but_not_playback() {
        let mut template = four_frames(true);
        template.play();
        template.advance(150.0);
        let inst = template.instance();
        assert_eq!(inst.current_frame(), 0);
        assert!(!inst.is_playing());
        assert_eq!(inst.elapsed_ms(), 0.0);
        assert_eq!(inst.frame_count(), template.frame_count());
        assert_eq!(inst.sheet(), template.sheet());
    }

    #[test]
    fn advancing_an_instance_never_touches_the_source() {
        let template = four_frames(true);
        let mut inst = template.instance();
        inst.play();
        inst.advance(300.0);
        assert_eq!(inst.current_frame(), 3);
        assert_eq!(template.current_frame(), 0);
        assert!(!template.is_playing());
    }

    #[test]
    fn frame_duration_is_1000_over_fps() {
        let seq = FrameSequence::new(
            "enemies",
            vec![Region {
                x: 0,
                y: 0,
                width: 8,
                height: 8,
            }],
            8.0,
            true,
        );
        assert_eq!(seq.frame_duration_ms(), 125.0);
    }

    #[test]
    fn fps_change_applies_on_next_advance() {
        let mut seq = four_frames(true);
        seq.play();
        seq.advance(60.0);
        assert_eq!(seq.current_frame(), 0);
        // 10 fps -> 20 fps: frames now last 50 ms, and the 60 ms already
        // accumulated covers one of them.
        seq.set_fps(20.0);
        seq.advance(0.0);
        assert_eq!(seq.current_frame(), 1);
        assert!((seq.elapsed_ms() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn frame_lookup_is_bounds_checked() {
        let seq = four_frames(true);
        assert!(seq.frame(3).is_some());
        assert!(seq.frame(4).is_none());
    }
}
