// Tests for the stage clock and the playback driver.

use twin_core::*;

#[test]
fn stage_order_and_neighbours() {
    assert_eq!(Stage::ALL.len(), 5);
    for (i, s) in Stage::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
        assert_eq!(Stage::from_index(i), Some(*s));
    }
    assert!(Stage::Setup < Stage::Outbound);
    assert!(Stage::Inbound < Stage::Conclusion);
    assert_eq!(Stage::Setup.prev(), None);
    assert_eq!(Stage::Conclusion.next(), None);
    assert_eq!(Stage::Outbound.next(), Some(Stage::Turnaround));
    assert_eq!(Stage::Turnaround.prev(), Some(Stage::Outbound));
    assert_eq!(Stage::Turnaround.to_string(), "TURNAROUND");
}

#[test]
fn advance_and_retreat_reset_progress() {
    let mut clock = StageClock::new();
    clock.set_progress(0.4);
    clock.advance();
    assert_eq!(clock.stage(), Stage::Outbound);
    assert_eq!(clock.progress(), 0.0);

    clock.set_progress(0.7);
    clock.retreat();
    assert_eq!(clock.stage(), Stage::Setup);
    assert_eq!(clock.progress(), 0.0);
}

#[test]
fn navigation_is_a_no_op_at_the_ends() {
    let mut clock = StageClock::new();
    clock.set_progress(0.3);
    clock.retreat();
    assert_eq!(clock.stage(), Stage::Setup);
    assert_eq!(clock.progress(), 0.3);

    let mut clock = StageClock::at(Stage::Conclusion, 0.6);
    clock.advance();
    assert_eq!(clock.stage(), Stage::Conclusion);
    assert_eq!(clock.progress(), 0.6);
}

#[test]
fn jump_resets_progress() {
    let mut clock = StageClock::at(Stage::Outbound, 0.9);
    clock.jump_to(Stage::Inbound);
    assert_eq!(clock.stage(), Stage::Inbound);
    assert_eq!(clock.progress(), 0.0);
}

#[test]
fn set_progress_clamps() {
    let mut clock = StageClock::new();
    clock.set_progress(1.7);
    assert_eq!(clock.progress(), 1.0);
    clock.set_progress(-0.2);
    assert_eq!(clock.progress(), 0.0);
    clock.set_progress(f64::NAN);
    assert_eq!(clock.progress(), 0.0);
}

#[test]
fn advance_by_rolls_into_next_stage() {
    let mut clock = StageClock::at(Stage::Outbound, 0.99);
    assert_eq!(clock.advance_by(0.005), ClockStep::Running);
    assert!((clock.progress() - 0.995).abs() < 1e-12);
    assert_eq!(
        clock.advance_by(0.005),
        ClockStep::StageChanged(Stage::Turnaround)
    );
    assert_eq!(clock.progress(), 0.0);
}

#[test]
fn advance_by_freezes_at_the_end() {
    let mut clock = StageClock::at(Stage::Conclusion, 0.999);
    assert_eq!(clock.advance_by(0.01), ClockStep::Finished);
    assert_eq!(clock.stage(), Stage::Conclusion);
    assert_eq!(clock.progress(), 1.0);
    assert!(clock.is_finished());
    assert_eq!(clock.advance_by(0.01), ClockStep::Finished);
}

#[test]
fn parameters_editable_only_in_setup() {
    for s in Stage::ALL {
        assert_eq!(StageClock::at(s, 0.0).parameters_editable(), s == Stage::Setup);
    }
}

#[test]
fn playback_runs_whole_trip_then_stops() {
    let mut clock = StageClock::new();
    let mut playback = Playback::new();
    playback.toggle(&mut clock);
    assert!(playback.is_playing());

    let mut visited = vec![clock.stage()];
    let mut ticks = 0;
    while playback.is_playing() {
        if let Some(ClockStep::StageChanged(s)) = playback.tick(&mut clock) {
            visited.push(s);
        }
        ticks += 1;
        assert!(ticks < 10_000, "playback never finished");
    }
    assert_eq!(visited, Stage::ALL.to_vec());
    assert!(clock.is_finished());
    // 1 / 0.005 ticks per stage, five stages
    assert!((990..=1010).contains(&ticks), "ticks = {ticks}");
}

#[test]
fn playback_tick_is_inert_when_paused() {
    let mut clock = StageClock::at(Stage::Outbound, 0.5);
    let mut playback = Playback::new();
    assert_eq!(playback.tick(&mut clock), None);
    assert_eq!(clock, StageClock::at(Stage::Outbound, 0.5));
}

#[test]
fn playback_toggle_restarts_when_finished() {
    let mut clock = StageClock::at(Stage::Conclusion, 1.0);
    let mut playback = Playback::new();
    playback.toggle(&mut clock);
    assert!(playback.is_playing());
    assert_eq!(clock.stage(), Stage::Setup);
    assert_eq!(clock.progress(), 0.0);

    playback.toggle(&mut clock);
    assert!(!playback.is_playing());
}

#[test]
fn playback_navigation_pauses() {
    let mut clock = StageClock::new();
    let mut playback = Playback::new();
    playback.toggle(&mut clock);
    playback.navigate(&mut clock, Navigation::Next);
    assert!(!playback.is_playing());
    assert_eq!(clock.stage(), Stage::Outbound);

    playback.navigate(&mut clock, Navigation::Jump(Stage::Conclusion));
    assert_eq!(clock.stage(), Stage::Conclusion);
    playback.navigate(&mut clock, Navigation::Prev);
    assert_eq!(clock.stage(), Stage::Inbound);
}

#[test]
fn playback_speed_is_clamped() {
    let mut playback = Playback::new();
    assert!((playback.speed_multiplier() - 1.0).abs() < 1e-12);
    playback.set_speed(1.0);
    assert_eq!(playback.speed(), PLAYBACK_SPEED_MAX);
    playback.adjust_speed(-1.0);
    assert_eq!(playback.speed(), PLAYBACK_SPEED_MIN);
    playback.set_speed(f64::NAN);
    assert_eq!(playback.speed(), PLAYBACK_SPEED_MIN);
}
