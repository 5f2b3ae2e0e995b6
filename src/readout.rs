//! Text and control state shown around the diagram.
//!
//! Built fresh every frame and compared with the previous one so the DOM is
//! only touched when something actually changed.

use twin_core::{Scene, Session};

#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    pub stage_label: &'static str,
    pub explanation: String,
    pub metrics: String,
    pub signal_counts: String,
    pub play_label: &'static str,
    pub speed_label: String,

    pub distance: f64,
    pub velocity: f64,
    pub speed: f64,
    pub parameters_editable: bool,
    pub can_prev: bool,
    pub can_next: bool,

    pub show_grid: bool,
    pub show_stationary_signals: bool,
    pub show_traveler_signals: bool,
}

impl Readout {
    pub fn new(session: &Session, scene: &Scene) -> Self {
        let params = session.params();
        let options = session.options();
        let playback = session.playback();
        let gamma = params.gamma();

        let metrics = format!(
            "Gamma factor (\u{3b3}): {gamma:.3}\n\
             Time dilation: 1 : {gamma:.1}\n\
             Bob (stationary): {:.2} / {:.2} years\n\
             Alice (traveler): {:.2} / {:.2} years",
            scene.stationary_elapsed,
            params.stationary_total_time(),
            scene.traveler_elapsed,
            params.traveler_total_proper_time(),
        );

        let metrics = match scene.simultaneity {
            Some(line) => format!(
                "{metrics}\nBob's age as Alice sees it: {:.2} years",
                line.stationary_age
            ),
            None => metrics,
        };

        let mut counts = Vec::new();
        if options.show_stationary_signals {
            counts.push(format!(
                "Alice received: {} msgs",
                scene.signals.received_by_traveler()
            ));
        }
        if options.show_traveler_signals {
            counts.push(format!(
                "Bob received: {} msgs",
                scene.signals.received_by_stationary()
            ));
        }

        Self {
            stage_label: scene.stage.label(),
            explanation: scene.explanation.clone(),
            metrics,
            signal_counts: counts.join("\n"),
            play_label: if playback.is_playing() {
                "Pause Simulation"
            } else {
                "Play / Resume"
            },
            speed_label: format!("{:.1}x", playback.speed_multiplier()),
            distance: params.distance(),
            velocity: params.velocity(),
            speed: playback.speed(),
            parameters_editable: session.clock().parameters_editable(),
            can_prev: !scene.stage.is_first(),
            can_next: !scene.stage.is_last(),
            show_grid: options.show_grid,
            show_stationary_signals: options.show_stationary_signals,
            show_traveler_signals: options.show_traveler_signals,
        }
    }
}
