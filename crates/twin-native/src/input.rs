use twin_core::{Command, Navigation};
use winit::keyboard::KeyCode;

/// Desktop key bindings. Sliders have no widgets here, so the arrow and
/// bracket keys stand in for them.
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Space => Command::TogglePlay,
        KeyCode::ArrowRight => Command::Navigate(Navigation::Next),
        KeyCode::ArrowLeft => Command::Navigate(Navigation::Prev),
        KeyCode::ArrowUp => Command::NudgeVelocity(1),
        KeyCode::ArrowDown => Command::NudgeVelocity(-1),
        KeyCode::BracketRight => Command::NudgeDistance(1),
        KeyCode::BracketLeft => Command::NudgeDistance(-1),
        KeyCode::KeyG => Command::ToggleGrid,
        KeyCode::KeyS => Command::ToggleStationarySignals,
        KeyCode::KeyT => Command::ToggleTravelerSignals,
        KeyCode::Equal | KeyCode::NumpadAdd => Command::NudgeSpeed(1),
        KeyCode::Minus | KeyCode::NumpadSubtract => Command::NudgeSpeed(-1),
        _ => return None,
    };
    Some(command)
}
