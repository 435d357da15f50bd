//! Alexa-style skill wire protocol / 语音技能协议
//!
//! Only the subset the skill reads and writes is modelled

pub mod request;
pub mod response;

pub use request::{IntentPayload, RequestEnvelope, SessionInfo, SkillRequest, Slot};
pub use response::{Card, OutputSpeech, ResponseEnvelope, SpeechResponse};
