//! Interactive state shared by the web and native front-ends.
//!
//! A [`Session`] owns everything a user can change: the mission parameters,
//! the stage clock, playback and the display toggles. Front-ends translate
//! their own input events into [`Command`]s and redraw from [`Session::scene`].

use crate::constants::*;
use crate::params::SimulationParameters;
use crate::playback::{Navigation, Playback};
use crate::scene::{DisplayOptions, Scene};
use crate::stage::{ClockStep, StageClock};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    TogglePlay,
    Navigate(Navigation),
    ToggleGrid,
    ToggleStationarySignals,
    ToggleTravelerSignals,
    SetGrid(bool),
    SetStationarySignals(bool),
    SetTravelerSignals(bool),
    /// Step playback speed by whole slider steps.
    NudgeSpeed(i32),
    SetSpeed(f64),
    NudgeDistance(i32),
    NudgeVelocity(i32),
    SetDistance(f64),
    SetVelocity(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Session {
    params: SimulationParameters,
    clock: StageClock,
    playback: Playback,
    options: DisplayOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: SimulationParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[inline]
    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    #[inline]
    pub fn clock(&self) -> StageClock {
        self.clock
    }

    #[inline]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    #[inline]
    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Apply one user command. Returns whether anything visible changed.
    ///
    /// Parameter edits are ignored outside the Setup stage.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = *self;
        match command {
            Command::TogglePlay => self.playback.toggle(&mut self.clock),
            Command::Navigate(target) => self.playback.navigate(&mut self.clock, target),
            Command::ToggleGrid => self.options.show_grid = !self.options.show_grid,
            Command::ToggleStationarySignals => {
                self.options.show_stationary_signals = !self.options.show_stationary_signals
            }
            Command::ToggleTravelerSignals => {
                self.options.show_traveler_signals = !self.options.show_traveler_signals
            }
            Command::SetGrid(on) => self.options.show_grid = on,
            Command::SetStationarySignals(on) => self.options.show_stationary_signals = on,
            Command::SetTravelerSignals(on) => self.options.show_traveler_signals = on,
            Command::NudgeSpeed(steps) => self
                .playback
                .adjust_speed(steps as f64 * PLAYBACK_SPEED_STEP),
            Command::SetSpeed(speed) => self.playback.set_speed(speed),
            Command::NudgeDistance(steps) => {
                let d = self.params.distance() + steps as f64 * DISTANCE_STEP_LY;
                self.edit_params(|p| p.with_distance(d));
            }
            Command::NudgeVelocity(steps) => {
                let v = self.params.velocity() + steps as f64 * VELOCITY_STEP_C;
                self.edit_params(|p| p.with_velocity(v));
            }
            // slider text can fail to parse into NaN; keep the old value then
            Command::SetDistance(d) if d.is_finite() => self.edit_params(|p| p.with_distance(d)),
            Command::SetVelocity(v) if v.is_finite() => self.edit_params(|p| p.with_velocity(v)),
            Command::SetDistance(_) | Command::SetVelocity(_) => {}
        }
        *self != before
    }

    fn edit_params(&mut self, edit: impl FnOnce(SimulationParameters) -> SimulationParameters) {
        if !self.clock.parameters_editable() {
            log::debug!("[session] parameters locked during {}", self.clock.stage());
            return;
        }
        self.params = edit(self.params);
    }

    /// One display tick of playback.
    pub fn tick(&mut self) -> Option<ClockStep> {
        self.playback.tick(&mut self.clock)
    }

    pub fn scene(&self) -> Scene {
        Scene::build(self.params, self.clock, self.options)
    }
}
