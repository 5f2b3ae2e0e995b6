use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    #[default]
    Setup,
    Outbound,
    Turnaround,
    Inbound,
    Conclusion,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Setup,
        Stage::Outbound,
        Stage::Turnaround,
        Stage::Inbound,
        Stage::Conclusion,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Stage> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn next(self) -> Option<Stage> {
        Self::from_index(self.index() + 1)
    }

    #[inline]
    pub fn prev(self) -> Option<Stage> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    #[inline]
    pub fn is_first(self) -> bool {
        self == Stage::Setup
    }

    #[inline]
    pub fn is_last(self) -> bool {
        self == Stage::Conclusion
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Setup => "SETUP",
            Stage::Outbound => "OUTBOUND",
            Stage::Turnaround => "TURNAROUND",
            Stage::Inbound => "INBOUND",
            Stage::Conclusion => "CONCLUSION",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one animation step on the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockStep {
    Running,
    StageChanged(Stage),
    Finished,
}

/// Current stage plus fractional progress within it.
///
/// Progress is always in \[0, 1\] and is reset to 0 on every stage change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageClock {
    stage: Stage,
    progress: f64,
}

impl StageClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(stage: Stage, progress: f64) -> Self {
        let mut clock = Self { stage, progress: 0.0 };
        clock.set_progress(progress);
        clock
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            self.enter(next);
        }
    }

    pub fn retreat(&mut self) {
        if let Some(prev) = self.stage.prev() {
            self.enter(prev);
        }
    }

    pub fn jump_to(&mut self, stage: Stage) {
        self.enter(stage);
    }

    pub fn reset(&mut self) {
        self.enter(Stage::Setup);
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    /// Animation step. Crossing the end of a stage enters the next one at
    /// progress 0; the last stage freezes at progress 1.
    pub fn advance_by(&mut self, delta: f64) -> ClockStep {
        let next = self.progress + delta.max(0.0);
        if next < 1.0 {
            self.progress = next;
            return ClockStep::Running;
        }
        match self.stage.next() {
            Some(stage) => {
                self.enter(stage);
                ClockStep::StageChanged(stage)
            }
            None => {
                self.progress = 1.0;
                ClockStep::Finished
            }
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.stage.is_last() && self.progress >= 1.0
    }

    /// Mission parameters may only change before the trip starts.
    #[inline]
    pub fn parameters_editable(&self) -> bool {
        self.stage == Stage::Setup
    }

    fn enter(&mut self, stage: Stage) {
        if stage != self.stage {
            log::debug!("[clock] {} -> {}", self.stage, stage);
        }
        self.stage = stage;
        self.progress = 0.0;
    }
}
