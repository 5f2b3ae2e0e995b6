pub mod constants;
pub mod grid;
pub mod narrative;
pub mod params;
pub mod playback;
pub mod scene;
pub mod session;
pub mod signals;
pub mod spacetime;
pub mod stage;
pub mod trip;
pub mod tutor;

pub use constants::*;
pub use grid::{GridFamily, GridFrame, GridLine};
pub use params::{lorentz_factor, ParameterError, SimulationParameters};
pub use playback::{Navigation, Playback};
pub use scene::{DisplayOptions, Scene, SimultaneityLine};
pub use session::{Command, Session};
pub use signals::{Emitter, Signal, SignalExchange};
pub use spacetime::{Boost, Event, Segment, Viewport, WorldLine};
pub use stage::{ClockStep, Stage, StageClock};
pub use trip::{Leg, Trip};
