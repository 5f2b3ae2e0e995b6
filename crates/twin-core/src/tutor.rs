//! Bridge to the conversational physics tutor.
//!
//! This module owns everything except the network call itself: the system
//! instruction built from the current diagram, the request body, answer
//! parsing and the fallback messages. Frontends supply a [`Transport`].
//! [`ask`] never fails; every error becomes a fixed user-visible message.

use crate::params::SimulationParameters;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TUTOR_MODEL: &str = "gemini-2.0-flash";
pub const TUTOR_ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const GREETING: &str =
    "I'm your AI Physics Tutor. Confused about the graph? Ask me anything about the Twin Paradox!";
pub const UNAVAILABLE_MESSAGE: &str = "AI chat feature is not available. Provide a tutor API key \
    (the tutor-api-key meta tag or the tutor_api_key local storage entry) to enable this feature.";
pub const ERROR_MESSAGE: &str =
    "Sorry, I encountered an error communicating with the AI physics tutor.";
pub const EMPTY_ANSWER_MESSAGE: &str = "I couldn't generate a response.";

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("tutor service returned HTTP {0}")]
    Status(u16),
    #[error("malformed tutor response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("tutor returned no text")]
    Empty,
}

impl TutorError {
    /// Message shown in the chat in place of an answer.
    pub fn user_message(&self) -> &'static str {
        match self {
            TutorError::Empty => EMPTY_ANSWER_MESSAGE,
            _ => ERROR_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Chat transcript as shown in the panel, seeded with the tutor's greeting.
#[derive(Clone, Debug)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            turns: vec![ChatTurn::model(GREETING)],
        }
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }
}

/// What the tutor is told about the diagram the user is looking at.
#[derive(Clone, Copy, Debug)]
pub struct TutorContext {
    pub params: SimulationParameters,
    pub stage: Stage,
}

impl TutorContext {
    pub fn system_instruction(&self) -> String {
        format!(
            "You are an expert physics tutor specializing in Special Relativity.\n\
             The user is interacting with a visualization of the Twin Paradox.\n\
             \n\
             Current Simulation Parameters:\n\
             - Distance to star: {} light years.\n\
             - Velocity of Alice (traveler): {}c.\n\
             - Current Stage: {}.\n\
             \n\
             Calculated Values:\n\
             - Gamma Factor: {}\n\
             \n\
             Explain concepts simply but accurately. Focus on Time Dilation, Relativity of \
             Simultaneity, and Minkowski Diagrams.\n\
             Keep answers concise (under 150 words) unless asked for deep detail.",
            self.params.distance(),
            self.params.velocity(),
            self.stage,
            self.params.gamma(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<Role>, text: &str) -> Self {
        Self {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

/// JSON body of a `generateContent` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

impl TutorRequest {
    /// Leading model turns (the greeting) are dropped because the service
    /// expects the conversation to open with the user. The question goes
    /// last, exactly once.
    pub fn new(context: &TutorContext, history: &[ChatTurn], question: &str) -> Self {
        let contents = history
            .iter()
            .skip_while(|turn| turn.role == Role::Model)
            .map(|turn| Content::text(Some(turn.role), &turn.text))
            .chain(std::iter::once(Content::text(Some(Role::User), question)))
            .collect();
        Self {
            system_instruction: Content::text(None, &context.system_instruction()),
            contents,
        }
    }

    pub fn to_json(&self) -> Result<String, TutorError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Pull the answer text out of a `generateContent` response body.
pub fn parse_answer(body: &str) -> Result<String, TutorError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        Err(TutorError::Empty)
    } else {
        Ok(text)
    }
}

pub fn endpoint(model: &str, api_key: &str) -> String {
    format!("{TUTOR_ENDPOINT_BASE}/{model}:generateContent?key={api_key}")
}

/// The network leg of a tutor call: POST a JSON body, return the response
/// body. Implementations report non-success HTTP codes as
/// [`TutorError::Status`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, TutorError>;
}

/// Ask the tutor a question about the current diagram.
///
/// Without a credential the unavailable message is returned and the
/// transport is never touched. Failures are logged and replaced by a fixed
/// message; nothing propagates to the caller.
pub async fn ask<T: Transport>(
    transport: &T,
    api_key: Option<&str>,
    question: &str,
    params: SimulationParameters,
    stage: Stage,
    history: &[ChatTurn],
) -> String {
    let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
        return UNAVAILABLE_MESSAGE.to_string();
    };
    let context = TutorContext { params, stage };
    match request_answer(transport, key, &context, history, question).await {
        Ok(answer) => answer,
        Err(err) => {
            log::warn!("[tutor] {err}");
            err.user_message().to_string()
        }
    }
}

async fn request_answer<T: Transport>(
    transport: &T,
    key: &str,
    context: &TutorContext,
    history: &[ChatTurn],
    question: &str,
) -> Result<String, TutorError> {
    let body = TutorRequest::new(context, history, question).to_json()?;
    let response = transport.post_json(&endpoint(TUTOR_MODEL, key), body).await?;
    parse_answer(&response)
}
