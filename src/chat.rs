//! Chat panel wired to the physics tutor over `fetch`.

use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use twin_core::tutor::{self, ChatTurn, Conversation, Role, Transport, TutorError};
use twin_core::Session;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const API_KEY_META: &str = "tutor-api-key";
const API_KEY_STORAGE: &str = "tutor_api_key";
const THINKING_TEXT: &str = "Thinking...";

/// `fetch`-backed transport for the tutor bridge.
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, TutorError> {
        let headers = web::Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        let request = web::Request::new_with_str_and_init(url, &init).map_err(js_error)?;

        let window = web::window().ok_or_else(|| TutorError::Transport("no window".into()))?;
        let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        if !response.ok() {
            return Err(TutorError::Status(response.status()));
        }
        JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| TutorError::Transport("response body is not text".into()))
    }
}

fn js_error(e: JsValue) -> TutorError {
    TutorError::Transport(format!("{e:?}"))
}

/// Credential lookup: page meta tag first, then local storage.
fn api_key(document: &web::Document) -> Option<String> {
    dom::meta_content(document, API_KEY_META).or_else(|| dom::local_storage_item(API_KEY_STORAGE))
}

#[derive(Clone)]
struct ChatPanel {
    document: web::Document,
    session: Rc<RefCell<Session>>,
    conversation: Rc<RefCell<Conversation>>,
    busy: Rc<Cell<bool>>,
}

pub fn wire(document: &web::Document, session: &Rc<RefCell<Session>>) {
    let panel = ChatPanel {
        document: document.clone(),
        session: session.clone(),
        conversation: Rc::new(RefCell::new(Conversation::new())),
        busy: Rc::new(Cell::new(false)),
    };
    panel.render();

    let Some(form) = document.get_element_by_id("chat-form") else {
        log::warn!("[chat] missing #chat-form; tutor disabled");
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        panel.submit();
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

impl ChatPanel {
    fn submit(&self) {
        let Some(input) = dom::input_element(&self.document, "chat-input") else {
            return;
        };
        let question = input.value().trim().to_string();
        if question.is_empty() || self.busy.get() {
            return;
        }
        input.set_value("");

        // history is captured before the question joins the transcript
        let history: Vec<ChatTurn> = self.conversation.borrow().turns().to_vec();
        self.conversation
            .borrow_mut()
            .push(ChatTurn::user(question.clone()));
        self.busy.set(true);
        self.render();

        let (params, stage) = {
            let s = self.session.borrow();
            (s.params(), s.clock().stage())
        };
        let key = api_key(&self.document);
        let panel = self.clone();
        spawn_local(async move {
            let started = Instant::now();
            let answer = tutor::ask(
                &FetchTransport,
                key.as_deref(),
                &question,
                params,
                stage,
                &history,
            )
            .await;
            log::info!(
                "[chat] answered in {:.0} ms",
                started.elapsed().as_secs_f64() * 1000.0
            );
            panel.conversation.borrow_mut().push(ChatTurn::model(answer));
            panel.busy.set(false);
            panel.render();
        });
    }

    fn render(&self) {
        let Some(log_el) = self.document.get_element_by_id("chat-log") else {
            return;
        };
        log_el.set_inner_html("");
        let conversation = self.conversation.borrow();
        for turn in conversation.turns() {
            self.append_turn(&log_el, turn.role, &turn.text);
        }
        if self.busy.get() {
            self.append_turn(&log_el, Role::Model, THINKING_TEXT);
        }
        log_el.set_scroll_top(log_el.scroll_height());
    }

    fn append_turn(&self, log_el: &web::Element, role: Role, text: &str) {
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        el.set_class_name(match role {
            Role::User => "chat-turn chat-user",
            Role::Model => "chat-turn chat-model",
        });
        el.set_text_content(Some(text));
        _ = log_el.append_child(&el);
    }
}
