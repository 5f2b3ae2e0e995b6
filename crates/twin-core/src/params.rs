use crate::constants::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("distance must be a positive finite number of light-years, got {0}")]
    Distance(f64),
    #[error("velocity must lie strictly between 0 and 1 (fraction of c), got {0}")]
    Velocity(f64),
}

/// The two free inputs of the thought experiment.
///
/// Construction guarantees `distance > 0` and `0 < velocity < 1`, so every
/// derived quantity is finite and positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    distance: f64,
    velocity: f64,
}

impl SimulationParameters {
    pub fn new(distance: f64, velocity: f64) -> Result<Self, ParameterError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ParameterError::Distance(distance));
        }
        if !velocity.is_finite() || velocity <= 0.0 || velocity >= 1.0 {
            return Err(ParameterError::Velocity(velocity));
        }
        Ok(Self { distance, velocity })
    }

    /// Input-boundary constructor: clamps into the slider ranges and never
    /// fails. Non-finite input falls back to the defaults.
    pub fn clamped(distance: f64, velocity: f64) -> Self {
        let distance = if distance.is_finite() {
            distance.clamp(DISTANCE_MIN_LY, DISTANCE_MAX_LY)
        } else {
            DEFAULT_DISTANCE_LY
        };
        let velocity = if velocity.is_finite() {
            velocity.clamp(VELOCITY_MIN_C, VELOCITY_MAX_C)
        } else {
            DEFAULT_VELOCITY_C
        };
        Self { distance, velocity }
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn with_distance(self, distance: f64) -> Self {
        Self::clamped(distance, self.velocity)
    }

    pub fn with_velocity(self, velocity: f64) -> Self {
        Self::clamped(self.distance, velocity)
    }

    #[inline]
    pub fn gamma(&self) -> f64 {
        lorentz_factor(self.velocity)
    }

    #[inline]
    pub fn one_way_time(&self) -> f64 {
        self.distance / self.velocity
    }

    #[inline]
    pub fn stationary_total_time(&self) -> f64 {
        2.0 * self.one_way_time()
    }

    #[inline]
    pub fn traveler_total_proper_time(&self) -> f64 {
        self.stationary_total_time() / self.gamma()
    }

    /// How many more years the stay-at-home twin has aged at the reunion.
    #[inline]
    pub fn time_gap(&self) -> f64 {
        self.stationary_total_time() - self.traveler_total_proper_time()
    }

    /// Relativistic Doppler factor `sqrt((1+v)/(1-v))`: received interval per
    /// emitted interval while the twins recede. Its inverse applies while
    /// they approach.
    #[inline]
    pub fn doppler_factor(&self) -> f64 {
        ((1.0 + self.velocity) / (1.0 - self.velocity)).sqrt()
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_LY,
            velocity: DEFAULT_VELOCITY_C,
        }
    }
}

/// `1 / sqrt(1 - v²)` for a signed velocity with `|v| < 1`.
#[inline]
pub fn lorentz_factor(velocity: f64) -> f64 {
    1.0 / (1.0 - velocity * velocity).sqrt()
}
