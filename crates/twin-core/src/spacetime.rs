use crate::constants::*;
use crate::params::{lorentz_factor, SimulationParameters};
use glam::{DMat2, DVec2};
use smallvec::SmallVec;

/// A point `(x, t)` in the stay-at-home observer's inertial frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Event {
    pub x: f64,
    pub t: f64,
}

impl Event {
    pub const ORIGIN: Event = Event { x: 0.0, t: 0.0 };

    #[inline]
    pub const fn new(x: f64, t: f64) -> Self {
        Self { x, t }
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.t)
    }

    #[inline]
    pub fn lerp(self, other: Event, s: f64) -> Event {
        self.to_dvec2().lerp(other.to_dvec2(), s).into()
    }
}

impl From<DVec2> for Event {
    fn from(v: DVec2) -> Self {
        Event::new(v.x, v.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Event,
    pub end: Event,
}

impl Segment {
    #[inline]
    pub const fn new(start: Event, end: Event) -> Self {
        Self { start, end }
    }
}

/// Ordered events along one observer's trajectory. The traveler never needs
/// more than three (departure, turnaround, current or return).
pub type WorldLine = SmallVec<[Event; 3]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub t_min: f64,
    pub t_max: f64,
}

impl Viewport {
    /// The trip plus a margin: one unit before the origin, two after the
    /// destination and the reunion.
    pub fn for_params(params: &SimulationParameters) -> Self {
        Self {
            x_min: -VIEW_MARGIN_BEFORE,
            x_max: params.distance() + VIEW_MARGIN_AFTER,
            t_min: -VIEW_MARGIN_BEFORE,
            t_max: params.stationary_total_time() + VIEW_MARGIN_AFTER,
        }
    }

    #[inline]
    pub fn contains(&self, e: Event) -> bool {
        e.x >= self.x_min && e.x <= self.x_max && e.t >= self.t_min && e.t <= self.t_max
    }

    pub fn corners(&self) -> [Event; 4] {
        [
            Event::new(self.x_min, self.t_min),
            Event::new(self.x_max, self.t_min),
            Event::new(self.x_max, self.t_max),
            Event::new(self.x_min, self.t_max),
        ]
    }

    /// Liang-Barsky clip of a segment against the window. `None` when the
    /// segment lies entirely outside.
    pub fn clip(&self, seg: Segment) -> Option<Segment> {
        let d = seg.end.to_dvec2() - seg.start.to_dvec2();
        let checks = [
            (-d.x, seg.start.x - self.x_min),
            (d.x, self.x_max - seg.start.x),
            (-d.y, seg.start.t - self.t_min),
            (d.y, self.t_max - seg.start.t),
        ];
        let mut s0 = 0.0_f64;
        let mut s1 = 1.0_f64;
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                s0 = s0.max(r);
            } else {
                s1 = s1.min(r);
            }
            if s0 > s1 {
                return None;
            }
        }
        Some(Segment::new(
            seg.start.lerp(seg.end, s0),
            seg.start.lerp(seg.end, s1),
        ))
    }
}

/// Lorentz boost between the lab frame and a frame moving at `velocity`
/// whose origin sits at the lab event `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boost {
    pub velocity: f64,
    pub origin: Event,
    pub gamma: f64,
    to_lab: DMat2,
    to_frame: DMat2,
}

impl Boost {
    pub fn new(velocity: f64, origin: Event) -> Self {
        let gamma = lorentz_factor(velocity);
        let matrix = |u: f64| {
            DMat2::from_cols(
                DVec2::new(gamma, gamma * u),
                DVec2::new(gamma * u, gamma),
            )
        };
        Self {
            velocity,
            origin,
            gamma,
            to_lab: matrix(velocity),
            to_frame: matrix(-velocity),
        }
    }

    /// Lab event -> moving-frame coordinates, returned as `(x', t')`.
    #[inline]
    pub fn to_frame(&self, lab: Event) -> Event {
        (self.to_frame * (lab.to_dvec2() - self.origin.to_dvec2())).into()
    }

    /// Moving-frame coordinates `(x', t')` -> lab event.
    #[inline]
    pub fn to_lab(&self, primed: Event) -> Event {
        (self.origin.to_dvec2() + self.to_lab * primed.to_dvec2()).into()
    }
}
