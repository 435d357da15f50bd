//! Response building / 响应构建
//!
//! `SpeechResponse` is assembled as a value and converted to the wire
//! envelope exactly once / 先组装不可变值，再一次性转换为响应信封

use serde::Serialize;

use crate::session::SessionAttributes;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn new(text: &str, ssml: bool) -> Self {
        if ssml {
            OutputSpeech::Ssml {
                ssml: format!("<speak>{}</speak>", escape_ssml(text)),
            }
        } else {
            OutputSpeech::PlainText {
                text: text.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

/// Escape text for SSML / 转义SSML特殊字符
pub fn escape_ssml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Spoken response / 语音响应
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechResponse {
    speech: String,
    reprompt: Option<String>,
    card: Option<Card>,
    end_session: bool,
}

impl SpeechResponse {
    /// Speak and close the session / 播报并结束会话
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
            card: None,
            end_session: true,
        }
    }

    /// Speak and keep the session open with a reprompt / 播报并等待用户回复
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: Some(reprompt.into()),
            card: None,
            end_session: false,
        }
    }

    pub fn with_card(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            card: Some(Card::Simple {
                title: title.into(),
                content: content.into(),
            }),
            ..self
        }
    }

    /// Convert into the wire envelope / 转换为响应信封
    ///
    /// Attributes are only attached while the session stays open
    pub fn into_envelope(self, ssml: bool, attributes: Option<SessionAttributes>) -> ResponseEnvelope {
        let reprompt = if self.end_session {
            None
        } else {
            self.reprompt.map(|text| Reprompt {
                output_speech: OutputSpeech::new(&text, ssml),
            })
        };

        ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::new(&self.speech, ssml)),
                reprompt,
                card: self.card,
                should_end_session: Some(self.end_session),
            },
            session_attributes: if self.end_session { None } else { attributes },
        }
    }
}

impl ResponseEnvelope {
    /// Empty acknowledgement, used for session-ended notifications / 空确认响应
    pub fn acknowledge() -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody::default(),
            session_attributes: None,
        }
    }
}
