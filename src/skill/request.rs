//! Inbound skill events.

use std::collections::HashMap;

use serde::Deserialize;

/// A platform event: the session it belongs to and the request itself.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    /// Session the request belongs to.
    pub session: Session,
    /// The request.
    pub request: SkillRequest,
}

/// Session metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True for the first request of a session.
    #[serde(rename = "new")]
    pub is_new: bool,
    /// Session identifier.
    pub session_id: String,
    /// Application the session was opened for.
    #[serde(default)]
    pub application: Option<Application>,
}

/// Application metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Skill application identifier.
    pub application_id: String,
}

/// Request payload, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    /// The user opened the skill without asking anything.
    #[serde(rename_all = "camelCase")]
    LaunchRequest {
        /// Request identifier.
        request_id: String,
    },
    /// The user asked something the language model mapped to an intent.
    #[serde(rename_all = "camelCase")]
    IntentRequest {
        /// Request identifier.
        request_id: String,
        /// Matched intent.
        intent: Intent,
    },
    /// The platform closed the session.
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        /// Request identifier.
        request_id: String,
        /// Why the session ended, if given.
        #[serde(default)]
        reason: Option<String>,
    },
    /// Any request type this skill does not know about.
    #[serde(other)]
    Unsupported,
}

impl SkillRequest {
    /// Returns the request identifier, if the request type carries one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::LaunchRequest { request_id }
            | Self::IntentRequest { request_id, .. }
            | Self::SessionEndedRequest { request_id, .. } => Some(request_id.as_str()),
            Self::Unsupported => None,
        }
    }
}

/// A matched intent and its slots.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    /// Intent name, e.g. `GetDailyFractals`.
    pub name: String,
    /// Slots keyed by slot name.
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Returns the value of a filled slot.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot)?.value.as_deref()
    }
}

/// A single intent slot.
#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    /// Slot name.
    #[serde(default)]
    pub name: String,
    /// Spoken value, absent when the user did not fill the slot.
    #[serde(default)]
    pub value: Option<String>,
}
