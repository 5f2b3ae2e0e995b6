mod input {
    include!("../src/input.rs");
}

use input::command_for_key;
use twin_core::{Command, Navigation};
use winit::keyboard::KeyCode;

#[test]
fn navigation_and_playback_keys() {
    assert_eq!(command_for_key(KeyCode::Space), Some(Command::TogglePlay));
    assert_eq!(
        command_for_key(KeyCode::ArrowRight),
        Some(Command::Navigate(Navigation::Next))
    );
    assert_eq!(
        command_for_key(KeyCode::ArrowLeft),
        Some(Command::Navigate(Navigation::Prev))
    );
}

#[test]
fn toggle_keys() {
    assert_eq!(command_for_key(KeyCode::KeyG), Some(Command::ToggleGrid));
    assert_eq!(
        command_for_key(KeyCode::KeyS),
        Some(Command::ToggleStationarySignals)
    );
    assert_eq!(
        command_for_key(KeyCode::KeyT),
        Some(Command::ToggleTravelerSignals)
    );
}

#[test]
fn parameter_and_speed_nudges() {
    assert_eq!(command_for_key(KeyCode::ArrowUp), Some(Command::NudgeVelocity(1)));
    assert_eq!(command_for_key(KeyCode::ArrowDown), Some(Command::NudgeVelocity(-1)));
    assert_eq!(command_for_key(KeyCode::BracketRight), Some(Command::NudgeDistance(1)));
    assert_eq!(command_for_key(KeyCode::BracketLeft), Some(Command::NudgeDistance(-1)));
    assert_eq!(command_for_key(KeyCode::Equal), Some(Command::NudgeSpeed(1)));
    assert_eq!(command_for_key(KeyCode::NumpadAdd), Some(Command::NudgeSpeed(1)));
    assert_eq!(command_for_key(KeyCode::Minus), Some(Command::NudgeSpeed(-1)));
}

#[test]
fn unbound_keys_do_nothing() {
    assert_eq!(command_for_key(KeyCode::KeyQ), None);
    assert_eq!(command_for_key(KeyCode::Enter), None);
}
