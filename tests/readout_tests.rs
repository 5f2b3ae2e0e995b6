// Host-side tests for the panel readout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/readout.rs"]
mod readout;

use readout::Readout;
use twin_core::{Command, Navigation, Session, Stage};

fn readout(session: &Session) -> Readout {
    Readout::new(session, &session.scene())
}

#[test]
fn setup_readout() {
    let s = Session::new();
    let r = readout(&s);
    assert_eq!(r.stage_label, "SETUP");
    assert!(r.explanation.starts_with("Alice and Bob start"));
    assert!(r.metrics.contains("2.000"), "{}", r.metrics);
    assert!(r.metrics.contains("12.01"));
    assert_eq!(r.signal_counts, "");
    assert_eq!(r.play_label, "Play / Resume");
    assert_eq!(r.speed_label, "1.0x");
    assert!(r.parameters_editable);
    assert!(!r.can_prev && r.can_next);
}

#[test]
fn counts_appear_with_their_toggles() {
    let mut s = Session::new();
    s.apply(Command::Navigate(Navigation::Jump(Stage::Conclusion)));
    s.apply(Command::SetStationarySignals(true));
    let r = readout(&s);
    assert_eq!(r.signal_counts, "Alice received: 12 msgs");
    s.apply(Command::SetTravelerSignals(true));
    let r = readout(&s);
    assert_eq!(r.signal_counts, "Alice received: 12 msgs\nBob received: 6 msgs");
    assert!(!r.can_next && r.can_prev);
    assert!(!r.parameters_editable);
}

#[test]
fn playing_changes_button_label() {
    let mut s = Session::new();
    s.apply(Command::TogglePlay);
    assert_eq!(readout(&s).play_label, "Pause Simulation");
}

#[test]
fn identical_state_gives_identical_readout() {
    let s = Session::new();
    assert_eq!(readout(&s), readout(&s));
    let mut t = s;
    t.apply(Command::NudgeSpeed(5));
    assert_ne!(readout(&s), readout(&t));
    assert_eq!(readout(&t).speed_label, "2.0x");
}

#[test]
fn simultaneous_age_shows_while_the_line_is_drawn() {
    let mut s = Session::new();
    assert!(!readout(&s).metrics.contains("as Alice sees it"));

    // start of the turnaround: slope is still +v
    s.apply(Command::Navigate(Navigation::Jump(Stage::Turnaround)));
    let r = readout(&s);
    assert!(
        r.metrics.contains("Bob's age as Alice sees it: 1.50 years"),
        "{}",
        r.metrics
    );

    s.apply(Command::Navigate(Navigation::Jump(Stage::Conclusion)));
    assert!(!readout(&s).metrics.contains("as Alice sees it"));
}
