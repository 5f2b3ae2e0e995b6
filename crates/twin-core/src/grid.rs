//! The traveler's own coordinate grid, drawn in lab coordinates.
//!
//! Each leg is an inertial frame. Lines of constant traveler time `t'` and
//! constant traveler position `x'` are found by inverse-boosting the viewport
//! corners to get the integer range that can be visible, then boosting every
//! integer line back into the lab frame and clipping it to the window.

use crate::constants::*;
use crate::spacetime::{Boost, Event, Segment, Viewport};
use crate::stage::Stage;
use crate::trip::{Leg, Trip};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridFamily {
    /// Line of constant `t'`: one of the traveler's "planes of now".
    Time,
    /// Line of constant `x'`: a point at rest in the traveler's frame.
    Position,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub family: GridFamily,
    pub value: i64,
    pub segment: Segment,
    /// Where the label sits (`x' = 0` for time lines, `t' = 0` for position
    /// lines); `None` when that point is off-screen.
    pub label_at: Option<Event>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridFrame {
    pub leg: Leg,
    pub velocity: f64,
    pub origin: Event,
    pub emphasis: f32,
    pub lines: Vec<GridLine>,
}

impl GridFrame {
    pub fn lines_of(&self, family: GridFamily) -> impl Iterator<Item = &GridLine> {
        self.lines.iter().filter(move |l| l.family == family)
    }
}

/// Boost describing the traveler's frame on one leg.
pub fn leg_boost(trip: &Trip, leg: Leg) -> Boost {
    let v = trip.params.velocity();
    match leg {
        Leg::Outbound => Boost::new(v, Event::ORIGIN),
        Leg::Inbound => Boost::new(-v, trip.turnaround()),
    }
}

/// Grid frames shown for a stage. During the turnaround both legs are drawn
/// faintly on top of each other to expose the jump in simultaneity.
pub fn frames_for_stage(trip: &Trip, stage: Stage, viewport: &Viewport) -> Vec<GridFrame> {
    match stage {
        Stage::Setup | Stage::Outbound => {
            vec![frame(trip, Leg::Outbound, GRID_EMPHASIS, viewport)]
        }
        Stage::Inbound | Stage::Conclusion => {
            vec![frame(trip, Leg::Inbound, GRID_EMPHASIS, viewport)]
        }
        Stage::Turnaround => vec![
            frame(trip, Leg::Outbound, GRID_EMPHASIS_SUPERIMPOSED, viewport),
            frame(trip, Leg::Inbound, GRID_EMPHASIS_SUPERIMPOSED, viewport),
        ],
    }
}

pub fn frame(trip: &Trip, leg: Leg, emphasis: f32, viewport: &Viewport) -> GridFrame {
    let boost = leg_boost(trip, leg);
    GridFrame {
        leg,
        velocity: boost.velocity,
        origin: boost.origin,
        emphasis,
        lines: grid_lines(&boost, viewport),
    }
}

/// All integer grid lines of `boost`'s frame that cross the viewport.
pub fn grid_lines(boost: &Boost, viewport: &Viewport) -> Vec<GridLine> {
    let primed = viewport.corners().map(|c| boost.to_frame(c));
    let (xp_lo, xp_hi) = integer_span(primed.iter().map(|p| p.x));
    let (tp_lo, tp_hi) = integer_span(primed.iter().map(|p| p.t));

    let u = boost.velocity;
    let step = 1.0 / boost.gamma;
    let o = boost.origin;
    let mut lines = Vec::new();

    for n in tp_lo..=tp_hi {
        // t' = n  <=>  t = t0 + u (x - x0) + n / gamma
        let t_at = |x: f64| o.t + u * (x - o.x) + n as f64 * step;
        let raw = Segment::new(
            Event::new(viewport.x_min, t_at(viewport.x_min)),
            Event::new(viewport.x_max, t_at(viewport.x_max)),
        );
        if let Some(segment) = viewport.clip(raw) {
            let anchor = boost.to_lab(Event::new(0.0, n as f64));
            lines.push(GridLine {
                family: GridFamily::Time,
                value: n,
                segment,
                label_at: viewport.contains(anchor).then_some(anchor),
            });
        }
    }

    for n in xp_lo..=xp_hi {
        // x' = n  <=>  x = x0 + u (t - t0) + n / gamma
        let x_at = |t: f64| o.x + u * (t - o.t) + n as f64 * step;
        let raw = Segment::new(
            Event::new(x_at(viewport.t_min), viewport.t_min),
            Event::new(x_at(viewport.t_max), viewport.t_max),
        );
        if let Some(segment) = viewport.clip(raw) {
            let anchor = boost.to_lab(Event::new(n as f64, 0.0));
            lines.push(GridLine {
                family: GridFamily::Position,
                value: n,
                segment,
                label_at: viewport.contains(anchor).then_some(anchor),
            });
        }
    }

    lines
}

fn integer_span(values: impl Iterator<Item = f64>) -> (i64, i64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    (lo.ceil() as i64, hi.floor() as i64)
}
