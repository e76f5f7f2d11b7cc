//! Request routing by request type and intent name.

use tracing::{info, warn};

use super::request::{Intent, SkillEvent, SkillRequest};
use super::response::{ResponseEnvelope, SpeechletResponse};
use crate::error::SkillError;
use crate::fractals::{DailyResolver, ScaleTable};
use crate::gw2::AchievementSource;

/// Slot carrying the scale in `GetFractalAtScale`.
pub const SCALE_SLOT: &str = "fractalScale";

const WELCOME_TITLE: &str = "Hello";
const WELCOME_SPEECH: &str = "Welcome to the Mistlock Observatory. Ask me what today's daily \
    fractals are, or about which fractal exists at different difficulty scales.";
const WELCOME_REPROMPT: &str = "I'm not sure I understand. Try asking me for today's daily \
    fractals, or which fractal exists at a specific difficulty scale.";

const FAREWELL_TITLE: &str = "Session Ended";
const FAREWELL_SPEECH: &str = "Good luck in exploring the fractals, please tread carefully!";

const DAILY_TITLE: &str = "Today's Daily Fractals";
const SCALE_TITLE: &str = "Fractal at Difficulty Scale";

/// Intents this skill answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIntent {
    /// Today's daily fractals and recommended scales.
    GetDailyFractals,
    /// The fractal found at a given scale.
    GetFractalAtScale,
    /// Built-in help.
    Help,
    /// Built-in cancel.
    Cancel,
    /// Built-in stop.
    Stop,
}

impl SkillIntent {
    /// Maps a platform intent name to a skill intent.
    pub fn from_name(name: &str) -> Result<Self, SkillError> {
        match name {
            "GetDailyFractals" => Ok(Self::GetDailyFractals),
            "GetFractalAtScale" => Ok(Self::GetFractalAtScale),
            "AMAZON.HelpIntent" => Ok(Self::Help),
            "AMAZON.CancelIntent" => Ok(Self::Cancel),
            "AMAZON.StopIntent" => Ok(Self::Stop),
            other => Err(SkillError::UnrecognizedIntent(other.to_string())),
        }
    }
}

/// Routes platform events to fractal answers.
pub struct SkillHandler<'a> {
    source: &'a dyn AchievementSource,
    scales: &'a ScaleTable,
    concurrent: bool,
}

impl<'a> SkillHandler<'a> {
    /// Creates a handler over an achievement source and scale table.
    pub fn new(source: &'a dyn AchievementSource, scales: &'a ScaleTable) -> Self {
        Self {
            source,
            scales,
            concurrent: true,
        }
    }

    /// Chooses concurrent or sequential achievement lookups for daily answers.
    #[must_use]
    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Handles one platform event.
    ///
    /// Returns `Ok(None)` for events that need no response body.
    pub async fn handle(&self, event: &SkillEvent) -> Result<Option<ResponseEnvelope>, SkillError> {
        let session = &event.session;

        if let Some(application) = &session.application {
            info!(application_id = %application.application_id, "Received skill event");
        }

        if session.is_new {
            info!(
                request_id = event.request.request_id().unwrap_or_default(),
                session_id = %session.session_id,
                "Session started"
            );
        }

        match &event.request {
            SkillRequest::LaunchRequest { request_id } => {
                info!(request_id = %request_id, session_id = %session.session_id, "Launch");
                Ok(Some(Self::welcome()))
            }
            SkillRequest::IntentRequest { request_id, intent } => {
                info!(
                    request_id = %request_id,
                    session_id = %session.session_id,
                    intent = %intent.name,
                    "Intent"
                );
                self.on_intent(intent).await.map(Some)
            }
            SkillRequest::SessionEndedRequest { request_id, reason } => {
                info!(
                    request_id = %request_id,
                    session_id = %session.session_id,
                    reason = reason.as_deref().unwrap_or_default(),
                    "Session ended"
                );
                Ok(None)
            }
            SkillRequest::Unsupported => {
                warn!(session_id = %session.session_id, "Ignoring unsupported request type");
                Ok(None)
            }
        }
    }

    async fn on_intent(&self, intent: &Intent) -> Result<ResponseEnvelope, SkillError> {
        match SkillIntent::from_name(&intent.name)? {
            SkillIntent::GetDailyFractals => self.daily_fractals().await,
            SkillIntent::GetFractalAtScale => Ok(self.fractal_at_scale(intent.slot_value(SCALE_SLOT))),
            SkillIntent::Help => Ok(Self::welcome()),
            SkillIntent::Cancel | SkillIntent::Stop => Ok(Self::farewell()),
        }
    }

    /// Welcome message; keeps the session open.
    pub fn welcome() -> ResponseEnvelope {
        SpeechletResponse::new(WELCOME_TITLE, WELCOME_SPEECH, Some(WELCOME_REPROMPT), false).into()
    }

    /// Farewell message; ends the session.
    pub fn farewell() -> ResponseEnvelope {
        SpeechletResponse::new(FAREWELL_TITLE, FAREWELL_SPEECH, None, true).into()
    }

    /// Today's daily fractals; ends the session.
    pub async fn daily_fractals(&self) -> Result<ResponseEnvelope, SkillError> {
        let speech = DailyResolver::new(self.source, self.scales)
            .concurrent(self.concurrent)
            .resolve_daily_challenges()
            .await?;
        Ok(SpeechletResponse::new(DAILY_TITLE, speech, None, true).into())
    }

    /// The fractal at the spoken scale; ends the session.
    pub fn fractal_at_scale(&self, scale: Option<&str>) -> ResponseEnvelope {
        let scale = scale.unwrap_or_default().trim();
        let title = if scale.is_empty() {
            SCALE_TITLE.to_string()
        } else {
            format!("{SCALE_TITLE} {scale}")
        };
        let speech = self.scales.resolve(scale).verbose();
        SpeechletResponse::new(title, speech, None, true).into()
    }
}
