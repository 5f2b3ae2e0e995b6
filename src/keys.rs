use twin_core::{Command, Navigation};

/// Map a `KeyboardEvent.key` value to a session command.
#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        " " | "Spacebar" => Some(Command::TogglePlay),
        "ArrowRight" => Some(Command::Navigate(Navigation::Next)),
        "ArrowLeft" => Some(Command::Navigate(Navigation::Prev)),
        "g" | "G" => Some(Command::ToggleGrid),
        "s" | "S" => Some(Command::ToggleStationarySignals),
        "t" | "T" => Some(Command::ToggleTravelerSignals),
        // '=' shares the '+' key on most layouts
        "+" | "=" => Some(Command::NudgeSpeed(1)),
        "-" | "_" => Some(Command::NudgeSpeed(-1)),
        _ => None,
    }
}

/// Keys that the browser would otherwise use to scroll the page.
#[inline]
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "ArrowRight" | "ArrowLeft")
}

/// Shortcuts stay quiet while the user types into a form field.
/// Checkboxes and sliders keep focus after a click, so they do not count.
pub fn is_text_entry(tag_name: &str, input_type: Option<&str>) -> bool {
    if tag_name.eq_ignore_ascii_case("textarea") {
        return true;
    }
    if !tag_name.eq_ignore_ascii_case("input") {
        return false;
    }
    // a missing type attribute means a plain text box
    let kind = input_type.unwrap_or("text");
    ["text", "search", "email", "password", "url", "tel", "number"]
        .iter()
        .any(|t| kind.eq_ignore_ascii_case(t))
}
