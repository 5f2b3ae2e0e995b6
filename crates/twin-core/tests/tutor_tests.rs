// Tests for the tutor bridge using an in-memory transport.

use std::cell::RefCell;
use twin_core::tutor::*;
use twin_core::{SimulationParameters, Stage};

struct MockTransport {
    reply: Result<String, u16>,
    calls: RefCell<Vec<(String, String)>>,
}

impl MockTransport {
    fn answering(text: &str) -> Self {
        let body = serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        });
        Self {
            reply: Ok(body.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn raw(body: &str) -> Self {
        Self {
            reply: Ok(body.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, TutorError> {
        self.calls.borrow_mut().push((url.to_string(), body));
        self.reply.clone().map_err(TutorError::Status)
    }
}

fn ask_blocking(transport: &MockTransport, key: Option<&str>, history: &[ChatTurn]) -> String {
    pollster::block_on(ask(
        transport,
        key,
        "Why does the line tilt?",
        SimulationParameters::default(),
        Stage::Outbound,
        history,
    ))
}

#[test]
fn missing_key_degrades_without_network() {
    let transport = MockTransport::answering("unused");
    for key in [None, Some(""), Some("   ")] {
        assert_eq!(ask_blocking(&transport, key, &[]), UNAVAILABLE_MESSAGE);
    }
    assert!(transport.calls.borrow().is_empty());
}

#[test]
fn answer_is_returned() {
    let transport = MockTransport::answering("Because simultaneity is relative.");
    let answer = ask_blocking(&transport, Some("k3y"), &[]);
    assert_eq!(answer, "Because simultaneity is relative.");

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, endpoint(TUTOR_MODEL, "k3y"));
    assert!(calls[0].0.ends_with(":generateContent?key=k3y"));
}

#[test]
fn service_failure_becomes_apology() {
    let transport = MockTransport::failing(503);
    assert_eq!(ask_blocking(&transport, Some("k"), &[]), ERROR_MESSAGE);
}

#[test]
fn malformed_body_becomes_apology() {
    let transport = MockTransport::raw("<html>quota exceeded</html>");
    assert_eq!(ask_blocking(&transport, Some("k"), &[]), ERROR_MESSAGE);
}

#[test]
fn empty_answer_has_its_own_message() {
    let transport = MockTransport::raw(r#"{"candidates":[]}"#);
    assert_eq!(ask_blocking(&transport, Some("k"), &[]), EMPTY_ANSWER_MESSAGE);
    assert!(matches!(parse_answer("{}"), Err(TutorError::Empty)));
}

#[test]
fn request_body_carries_context_and_history() {
    let transport = MockTransport::answering("ok");
    let conversation = {
        let mut c = Conversation::new();
        c.push(ChatTurn::user("What is gamma?"));
        c.push(ChatTurn::model("About 2 here."));
        c
    };
    ask_blocking(&transport, Some("k"), conversation.turns());

    let calls = transport.calls.borrow();
    let body: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
    let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
    assert!(system.contains("Distance to star: 5.2 light years"));
    assert!(system.contains("0.866c"));
    assert!(system.contains("Current Stage: OUTBOUND"));
    assert!(body["systemInstruction"].get("role").is_none());

    let contents = body["contents"].as_array().unwrap();
    // greeting dropped, question appended once
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "What is gamma?");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[2]["role"], "user");
    assert_eq!(contents[2]["parts"][0]["text"], "Why does the line tilt?");
}

#[test]
fn conversation_starts_with_greeting() {
    let c = Conversation::new();
    assert_eq!(c.turns(), &[ChatTurn::model(GREETING)]);
}

#[test]
fn parse_answer_joins_parts() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"Time "},{"text":"dilation."}]}}]}"#;
    assert_eq!(parse_answer(body).unwrap(), "Time dilation.");
}

#[test]
fn error_messages_map_to_user_text() {
    assert_eq!(TutorError::Status(401).user_message(), ERROR_MESSAGE);
    assert_eq!(
        TutorError::Transport("offline".into()).user_message(),
        ERROR_MESSAGE
    );
    assert_eq!(TutorError::Empty.user_message(), EMPTY_ANSWER_MESSAGE);
}
