//! Outbound response envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response schema version.
pub const RESPONSE_VERSION: &str = "1.0";

/// Top-level response returned to the voice platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Schema version, always [`RESPONSE_VERSION`].
    pub version: String,
    /// Session attributes; this skill keeps no session state.
    pub session_attributes: Map<String, Value>,
    /// The speechlet response.
    pub response: SpeechletResponse,
}

impl ResponseEnvelope {
    /// Wraps a speechlet response with empty session attributes.
    pub fn new(response: SpeechletResponse) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: Map::new(),
            response,
        }
    }
}

impl From<SpeechletResponse> for ResponseEnvelope {
    fn from(response: SpeechletResponse) -> Self {
        Self::new(response)
    }
}

/// What the device says and shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    /// Spoken output.
    pub output_speech: OutputSpeech,
    /// Card shown in the companion app.
    pub card: Card,
    /// Spoken again if the user stays silent; omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Whether the session closes after this response.
    pub should_end_session: bool,
}

impl SpeechletResponse {
    /// Builds a plain-text response whose card repeats the spoken output.
    pub fn new(
        title: impl Into<String>,
        output: impl Into<String>,
        reprompt: Option<&str>,
        should_end_session: bool,
    ) -> Self {
        let output = output.into();
        Self {
            output_speech: OutputSpeech::plain(output.clone()),
            card: Card::Simple {
                title: title.into(),
                content: output,
            },
            reprompt: reprompt.map(|text| Reprompt {
                output_speech: OutputSpeech::plain(text),
            }),
            should_end_session,
        }
    }

    /// Returns the spoken text.
    pub fn speech_text(&self) -> &str {
        match &self.output_speech {
            OutputSpeech::PlainText { text } => text.as_str(),
        }
    }
}

/// Speech output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Unmarked text.
    PlainText {
        /// Text to speak.
        text: String,
    },
}

impl OutputSpeech {
    /// Creates plain-text speech.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }
}

/// Companion app card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Title and text body.
    Simple {
        /// Card title.
        title: String,
        /// Card body.
        content: String,
    },
}

/// Speech used when the user does not answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// Reprompt speech.
    pub output_speech: OutputSpeech,
}
