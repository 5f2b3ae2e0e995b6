use crate::params::SimulationParameters;
use crate::spacetime::{Event, WorldLine};
use crate::stage::{Stage, StageClock};
use smallvec::smallvec;

/// Leg of the journey; also names the inertial frame the traveler uses on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    Outbound,
    Inbound,
}

/// Closed-form trajectory of both twins for one set of parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trip {
    pub params: SimulationParameters,
}

impl Trip {
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    #[inline]
    pub fn one_way_time(&self) -> f64 {
        self.params.one_way_time()
    }

    #[inline]
    pub fn total_time(&self) -> f64 {
        self.params.stationary_total_time()
    }

    /// Lab time represented by a point on the narrative timeline.
    pub fn lab_time(&self, clock: &StageClock) -> f64 {
        let half = self.one_way_time();
        match clock.stage() {
            Stage::Setup => 0.0,
            Stage::Outbound => half * clock.progress(),
            Stage::Turnaround => half,
            Stage::Inbound => half + half * clock.progress(),
            Stage::Conclusion => self.total_time(),
        }
    }

    #[inline]
    pub fn leg_at(&self, t: f64) -> Leg {
        if t <= self.one_way_time() {
            Leg::Outbound
        } else {
            Leg::Inbound
        }
    }

    /// Traveler's lab event at lab time `t`, clamped to the trip.
    pub fn traveler_at(&self, t: f64) -> Event {
        let t = t.clamp(0.0, self.total_time());
        let v = self.params.velocity();
        let x = match self.leg_at(t) {
            Leg::Outbound => v * t,
            Leg::Inbound => (self.params.distance() - v * (t - self.one_way_time())).max(0.0),
        };
        Event::new(x, t)
    }

    /// Traveler's clock reading at lab time `t`. Speed is the same on both
    /// legs, so it is simply `t / gamma`.
    #[inline]
    pub fn traveler_proper_time(&self, t: f64) -> f64 {
        t.clamp(0.0, self.total_time()) / self.params.gamma()
    }

    #[inline]
    pub fn turnaround(&self) -> Event {
        Event::new(self.params.distance(), self.one_way_time())
    }

    #[inline]
    pub fn reunion(&self) -> Event {
        Event::new(0.0, self.total_time())
    }

    pub fn full_path(&self) -> WorldLine {
        smallvec![Event::ORIGIN, self.turnaround(), self.reunion()]
    }

    pub fn path_until(&self, t: f64) -> WorldLine {
        let mut path: WorldLine = smallvec![Event::ORIGIN];
        if t <= 0.0 {
            return path;
        }
        if self.leg_at(t) == Leg::Inbound {
            path.push(self.turnaround());
        }
        path.push(self.traveler_at(t));
        path
    }

    /// Slope `dt/dx` of the traveler's line of simultaneity, or `None` in
    /// Setup and Conclusion where it is not shown.
    pub fn simultaneity_slope(&self, clock: &StageClock) -> Option<f64> {
        let v = self.params.velocity();
        match clock.stage() {
            Stage::Setup | Stage::Conclusion => None,
            Stage::Outbound => Some(v),
            // linear sweep from +v to -v
            Stage::Turnaround => Some(v + (-v - v) * clock.progress()),
            Stage::Inbound => Some(-v),
        }
    }
}
