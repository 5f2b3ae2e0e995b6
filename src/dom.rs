use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}");
    }
}

/// Range slider: `handler` gets the parsed value on every `input` event.
pub fn add_range_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(f64) + 'static,
) {
    let Some(input) = input_element(document, element_id) else {
        log::warn!("[dom] missing #{element_id}");
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        handler(source.value().parse::<f64>().unwrap_or(f64::NAN));
    }) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Checkbox: `handler` gets the new checked state on every `change` event.
pub fn add_checkbox_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(bool) + 'static,
) {
    let Some(input) = input_element(document, element_id) else {
        log::warn!("[dom] missing #{element_id}");
        return;
    };
    let source = input.clone();
    let closure =
        Closure::wrap(Box::new(move || handler(source.checked())) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn input_element(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Content of `<meta name="...">`, if present and non-empty.
pub fn meta_content(document: &web::Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .filter(|c| !c.trim().is_empty())
}

pub fn local_storage_item(key: &str) -> Option<String> {
    web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
        .filter(|v| !v.trim().is_empty())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
