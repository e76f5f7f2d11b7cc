//! Voice platform adapter: inbound events, response envelopes and routing.

pub mod request;
pub mod response;
pub mod router;

pub use request::{Intent, Session, SkillEvent, SkillRequest, Slot};
pub use response::{Card, OutputSpeech, Reprompt, ResponseEnvelope, SpeechletResponse};
pub use router::{SkillHandler, SkillIntent};
