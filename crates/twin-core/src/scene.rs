//! The geometry engine: one pure evaluation turns parameters, the clock and
//! display toggles into every primitive the renderers draw.

use crate::constants::LIGHT_CONE_LENGTH;
use crate::grid::{frames_for_stage, GridFrame};
use crate::narrative;
use crate::params::SimulationParameters;
use crate::signals::{exchange_at, SignalExchange};
use crate::spacetime::{Event, Segment, Viewport, WorldLine};
use crate::stage::{Stage, StageClock};
use crate::trip::Trip;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_grid: bool,
    pub show_stationary_signals: bool,
    pub show_traveler_signals: bool,
}

/// The traveler's current line of simultaneity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimultaneityLine {
    /// `dt/dx` in the lab frame.
    pub slope: f64,
    /// From the traveler's event to the left edge of the viewport.
    pub segment: Segment,
    /// Stay-at-home twin's age the traveler considers simultaneous with now.
    pub stationary_age: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub stage: Stage,
    pub progress: f64,
    pub viewport: Viewport,

    /// Lab time of the current instant.
    pub now: f64,
    pub stationary_elapsed: f64,
    pub traveler_elapsed: f64,

    pub stationary_world_line: Segment,
    pub destination_line: Segment,
    /// Future light cone of the departure event.
    pub light_cone: [Segment; 2],

    pub traveler_ghost: WorldLine,
    pub traveler_active: WorldLine,
    pub traveler_now: Event,
    pub stationary_now: Event,

    pub simultaneity: Option<SimultaneityLine>,
    pub grids: Vec<GridFrame>,
    pub signals: SignalExchange,

    pub explanation: String,
}

impl Scene {
    /// Evaluate the diagram. Pure: identical inputs give identical scenes.
    pub fn build(params: SimulationParameters, clock: StageClock, options: DisplayOptions) -> Self {
        let trip = Trip::new(params);
        let viewport = Viewport::for_params(&params);
        let total = trip.total_time();
        let now = trip.lab_time(&clock);
        let traveler_now = trip.traveler_at(now);

        let simultaneity = trip.simultaneity_slope(&clock).map(|slope| {
            let t_at = |x: f64| traveler_now.t + slope * (x - traveler_now.x);
            SimultaneityLine {
                slope,
                segment: Segment::new(traveler_now, Event::new(viewport.x_min, t_at(viewport.x_min))),
                stationary_age: t_at(0.0),
            }
        });

        let grids = if options.show_grid {
            frames_for_stage(&trip, clock.stage(), &viewport)
        } else {
            Vec::new()
        };

        let signals = exchange_at(
            &trip,
            now,
            options.show_stationary_signals,
            options.show_traveler_signals,
        );

        let d = params.distance();
        Self {
            stage: clock.stage(),
            progress: clock.progress(),
            viewport,
            now,
            stationary_elapsed: now,
            traveler_elapsed: trip.traveler_proper_time(now),
            stationary_world_line: Segment::new(Event::ORIGIN, Event::new(0.0, total)),
            destination_line: Segment::new(Event::new(d, 0.0), Event::new(d, total)),
            light_cone: [
                Segment::new(Event::ORIGIN, Event::new(LIGHT_CONE_LENGTH, LIGHT_CONE_LENGTH)),
                Segment::new(Event::ORIGIN, Event::new(-LIGHT_CONE_LENGTH, LIGHT_CONE_LENGTH)),
            ],
            traveler_ghost: trip.full_path(),
            traveler_active: trip.path_until(now),
            traveler_now,
            stationary_now: Event::new(0.0, now),
            simultaneity,
            grids,
            signals,
            explanation: narrative::explanation(clock.stage(), &params),
        }
    }
}
