use crate::constants::*;
use crate::stage::{ClockStep, Stage, StageClock};

/// Cooperative animation driver: advances the clock by a fixed step on every
/// display tick while playing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    playing: bool,
    speed: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            playing: false,
            speed: PLAYBACK_SPEED_DEFAULT,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(PLAYBACK_SPEED_MIN, PLAYBACK_SPEED_MAX);
        }
    }

    pub fn adjust_speed(&mut self, delta: f64) {
        self.set_speed(self.speed + delta);
    }

    /// Speed relative to the default, for display ("1.0x").
    pub fn speed_multiplier(&self) -> f64 {
        self.speed / PLAYBACK_SPEED_DEFAULT
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Play/pause. At the end of the trip this restarts from Setup instead.
    pub fn toggle(&mut self, clock: &mut StageClock) {
        if clock.is_finished() {
            clock.reset();
            self.playing = true;
        } else {
            self.playing = !self.playing;
        }
        log::info!("[playback] playing={}", self.playing);
    }

    /// One display tick. Returns the clock step taken, or `None` when paused.
    pub fn tick(&mut self, clock: &mut StageClock) -> Option<ClockStep> {
        if !self.playing {
            return None;
        }
        let step = clock.advance_by(self.speed);
        if step == ClockStep::Finished {
            self.playing = false;
        }
        Some(step)
    }

    /// Manual navigation pauses playback, as a user grabbing the timeline
    /// would expect.
    pub fn navigate(&mut self, clock: &mut StageClock, target: Navigation) {
        self.playing = false;
        match target {
            Navigation::Next => clock.advance(),
            Navigation::Prev => clock.retreat(),
            Navigation::Jump(stage) => clock.jump_to(stage),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    Jump(Stage),
}
