use crate::dom;
use crate::keys;
use std::cell::RefCell;
use std::rc::Rc;
use twin_core::{Command, Navigation, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook every control in the page up to the session.
pub fn wire(document: &web::Document, session: &Rc<RefCell<Session>>) {
    wire_buttons(document, session);
    wire_inputs(document, session);
    wire_global_keydown(session.clone());
}

fn send(session: &Rc<RefCell<Session>>, command: Command) {
    if session.borrow_mut().apply(command) {
        log::debug!("[controls] {command:?}");
    }
}

fn wire_buttons(document: &web::Document, session: &Rc<RefCell<Session>>) {
    let buttons = [
        ("btn-prev", Command::Navigate(Navigation::Prev)),
        ("btn-next", Command::Navigate(Navigation::Next)),
        ("btn-play", Command::TogglePlay),
    ];
    for (id, command) in buttons {
        let session = session.clone();
        dom::add_click_listener(document, id, move || send(&session, command));
    }
}

fn wire_inputs(document: &web::Document, session: &Rc<RefCell<Session>>) {
    let sliders: [(&str, fn(f64) -> Command); 3] = [
        ("input-distance", Command::SetDistance),
        ("input-velocity", Command::SetVelocity),
        ("input-speed", Command::SetSpeed),
    ];
    for (id, command) in sliders {
        let session = session.clone();
        dom::add_range_listener(document, id, move |value| send(&session, command(value)));
    }

    let toggles: [(&str, fn(bool) -> Command); 3] = [
        ("toggle-grid", Command::SetGrid),
        ("toggle-stationary-signals", Command::SetStationarySignals),
        ("toggle-traveler-signals", Command::SetTravelerSignals),
    ];
    for (id, command) in toggles {
        let session = session.clone();
        dom::add_checkbox_listener(document, id, move |on| send(&session, command(on)));
    }
}

fn wire_global_keydown(session: Rc<RefCell<Session>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &session);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn handle_keydown(ev: &web::KeyboardEvent, session: &Rc<RefCell<Session>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let typing = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| {
            let input_type = el.get_attribute("type");
            keys::is_text_entry(&el.tag_name(), input_type.as_deref())
        });
    if typing {
        return;
    }
    let key = ev.key();
    if let Some(command) = keys::command_for_key(&key) {
        if keys::suppresses_default(&key) {
            ev.prevent_default();
        }
        send(session, command);
    }
}
