//! Periodic light signals exchanged between the twins.
//!
//! The whole set is rebuilt from scratch for every instant asked for. Counts
//! are bounded by the trip length in years, so there is nothing to cache and
//! no ordering bookkeeping to get wrong.

use crate::constants::TIME_EPSILON;
use crate::spacetime::Event;
use crate::trip::Trip;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emitter {
    /// The stay-at-home twin, ticking once per lab year.
    Stationary,
    /// The traveler, ticking once per year of proper time.
    Traveler,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signal {
    pub emitter: Emitter,
    /// Emitter's own clock reading at emission (whole years).
    pub tick: u32,
    pub emission: Event,
    /// Exact reception event on the other twin's world line.
    pub arrival: Event,
    /// End of the drawn path: `arrival` once received, else the wavefront.
    pub front: Event,
    pub received: bool,
}

impl Signal {
    /// Reception event, present only once the signal has arrived.
    #[inline]
    pub fn reception(&self) -> Option<Event> {
        self.received.then_some(self.arrival)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalExchange {
    pub from_stationary: Vec<Signal>,
    pub from_traveler: Vec<Signal>,
}

impl SignalExchange {
    pub fn received_by_traveler(&self) -> usize {
        self.from_stationary.iter().filter(|s| s.received).count()
    }

    pub fn received_by_stationary(&self) -> usize {
        self.from_traveler.iter().filter(|s| s.received).count()
    }

    pub fn is_empty(&self) -> bool {
        self.from_stationary.is_empty() && self.from_traveler.is_empty()
    }
}

pub fn exchange_at(trip: &Trip, now: f64, stationary: bool, traveler: bool) -> SignalExchange {
    SignalExchange {
        from_stationary: if stationary {
            stationary_signals(trip, now)
        } else {
            Vec::new()
        },
        from_traveler: if traveler {
            traveler_signals(trip, now)
        } else {
            Vec::new()
        },
    }
}

/// Signals sent by the stay-at-home twin at every whole lab year up to `now`.
pub fn stationary_signals(trip: &Trip, now: f64) -> Vec<Signal> {
    let last = trip.total_time().floor() as u32;
    (1..=last)
        .map(|tick| (tick, tick as f64))
        .take_while(|&(_, t_emit)| t_emit <= now + TIME_EPSILON)
        .map(|(tick, t_emit)| {
            let emission = Event::new(0.0, t_emit);
            let arrival = stationary_arrival(trip, t_emit);
            let received = now + TIME_EPSILON >= arrival.t;
            let front = if received {
                arrival
            } else {
                Event::new(now - t_emit, now)
            };
            Signal {
                emitter: Emitter::Stationary,
                tick,
                emission,
                arrival,
                front,
                received,
            }
        })
        .collect()
}

/// Where a light pulse leaving `x = 0` at `t_emit` catches the traveler.
pub fn stationary_arrival(trip: &Trip, t_emit: f64) -> Event {
    let v = trip.params.velocity();
    let t_turn = trip.one_way_time();
    // Outbound leg: x = v t meets x = t - t_emit
    let mut t_hit = t_emit / (1.0 - v);
    if t_hit > t_turn {
        // Inbound leg: x = d - v (t - t_turn) meets x = t - t_emit
        t_hit = (trip.params.distance() + t_emit + v * t_turn) / (1.0 + v);
    }
    Event::new(t_hit - t_emit, t_hit)
}

/// Signals sent by the traveler at every whole year of proper time whose
/// emission event lies at or before `now`.
pub fn traveler_signals(trip: &Trip, now: f64) -> Vec<Signal> {
    let last = trip.params.traveler_total_proper_time().floor() as u32;
    (1..=last)
        .map(|tick| (tick, traveler_emission(trip, tick as f64)))
        .take_while(|(_, emission)| emission.t <= now + TIME_EPSILON)
        .map(|(tick, emission)| {
            // Light heading home along slope -1 reaches x = 0 after x_emit years
            let arrival = Event::new(0.0, emission.t + emission.x);
            let received = now + TIME_EPSILON >= arrival.t;
            let front = if received {
                arrival
            } else {
                Event::new(emission.x - (now - emission.t), now)
            };
            Signal {
                emitter: Emitter::Traveler,
                tick,
                emission,
                arrival,
                front,
                received,
            }
        })
        .collect()
}

/// Lab event at which the traveler's clock reads `tau`.
pub fn traveler_emission(trip: &Trip, tau: f64) -> Event {
    let gamma = trip.params.gamma();
    let v = trip.params.velocity();
    let tau_turn = trip.params.traveler_total_proper_time() / 2.0;
    let t_turn = trip.one_way_time();
    if tau <= tau_turn {
        let t = tau * gamma;
        Event::new(v * t, t)
    } else {
        let t = t_turn + (tau - tau_turn) * gamma;
        Event::new(trip.params.distance() - v * (t - t_turn), t)
    }
}
