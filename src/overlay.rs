use crate::dom;
use crate::readout::Readout;
use web_sys as web;

/// True when there is no previous readout or the projected field differs.
#[inline]
fn differs<T: PartialEq>(previous: Option<&Readout>, current: &Readout, field: impl Fn(&Readout) -> T) -> bool {
    previous.map_or(true, |p| field(p) != field(current))
}

/// Push a readout into the page. Only fields that differ from `previous`
/// are written, so a slider being dragged is not fought over.
pub fn apply(document: &web::Document, r: &Readout, previous: Option<&Readout>) {
    if differs(previous, r, |x| x.stage_label) {
        dom::set_text(document, "stage-label", r.stage_label);
    }
    if differs(previous, r, |x| x.explanation.clone()) {
        dom::set_text(document, "explanation", &r.explanation);
    }
    if differs(previous, r, |x| x.metrics.clone()) {
        dom::set_text(document, "metrics", &r.metrics);
    }
    if differs(previous, r, |x| x.signal_counts.clone()) {
        dom::set_text(document, "signal-counts", &r.signal_counts);
    }
    if differs(previous, r, |x| x.play_label) {
        dom::set_text(document, "btn-play", r.play_label);
    }
    if differs(previous, r, |x| x.speed_label.clone()) {
        dom::set_text(document, "speed-value", &r.speed_label);
    }

    if differs(previous, r, |x| x.distance) {
        set_value(document, "input-distance", r.distance);
        dom::set_text(document, "distance-value", &format!("{:.1}", r.distance));
    }
    if differs(previous, r, |x| x.velocity) {
        set_value(document, "input-velocity", r.velocity);
        dom::set_text(document, "velocity-value", &format!("{:.2}", r.velocity));
    }
    if differs(previous, r, |x| x.speed) {
        set_value(document, "input-speed", r.speed);
    }

    if differs(previous, r, |x| x.parameters_editable) {
        set_disabled(document, "input-distance", !r.parameters_editable);
        set_disabled(document, "input-velocity", !r.parameters_editable);
    }
    if differs(previous, r, |x| x.can_prev) {
        set_disabled(document, "btn-prev", !r.can_prev);
    }
    if differs(previous, r, |x| x.can_next) {
        set_disabled(document, "btn-next", !r.can_next);
    }

    if differs(previous, r, |x| x.show_grid) {
        set_checked(document, "toggle-grid", r.show_grid);
    }
    if differs(previous, r, |x| x.show_stationary_signals) {
        set_checked(document, "toggle-stationary-signals", r.show_stationary_signals);
    }
    if differs(previous, r, |x| x.show_traveler_signals) {
        set_checked(document, "toggle-traveler-signals", r.show_traveler_signals);
    }
}

fn set_value(document: &web::Document, id: &str, value: f64) {
    if let Some(input) = dom::input_element(document, id) {
        input.set_value(&value.to_string());
    }
}

fn set_checked(document: &web::Document, id: &str, checked: bool) {
    if let Some(input) = dom::input_element(document, id) {
        input.set_checked(checked);
    }
}

fn set_disabled(document: &web::Document, id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        if disabled {
            _ = el.set_attribute("disabled", "");
        } else {
            _ = el.remove_attribute("disabled");
        }
    }
}
