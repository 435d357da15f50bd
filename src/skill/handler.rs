//! Request dispatch / 请求分发

use super::intent::Intent;
use super::speech;
use super::FoodSkill;
use crate::alexa::{RequestEnvelope, ResponseEnvelope, SkillRequest, SpeechResponse};
use crate::error::SkillError;
use crate::session::Session;

impl FoodSkill {
    /// Handle one request envelope; every turn gets an answer / 处理请求，每个轮次都有回复
    pub fn handle(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let mut session = Session::restore(envelope.session_id(), envelope.attributes());

        if envelope.is_new_session() {
            tracing::debug!(
                "Session started requestId={}, sessionId={}",
                envelope.request_id(),
                session.id
            );
        }

        let response = match &envelope.request {
            SkillRequest::LaunchRequest { request_id } => {
                tracing::debug!("Launch requestId={}, sessionId={}", request_id, session.id);
                SpeechResponse::ask(speech::WELCOME, speech::WELCOME_REPROMPT)
            }
            SkillRequest::IntentRequest { intent, .. } => {
                let intent = Intent::from(intent);
                tracing::debug!("Intent {:?} sessionId={}", intent, session.id);
                self.on_intent(&mut session, intent)
            }
            SkillRequest::SessionEndedRequest { request_id, reason } => {
                tracing::debug!(
                    "Session ended requestId={}, sessionId={}, reason={:?}",
                    request_id,
                    session.id,
                    reason
                );
                self.stop_turn(&mut session);
                return ResponseEnvelope::acknowledge();
            }
            SkillRequest::Unsupported => {
                tracing::warn!("Unsupported request type, sessionId={}", session.id);
                self.stop_turn(&mut session);
                SpeechResponse::tell(speech::INVALID_TURN)
            }
        };

        response.into_envelope(self.ssml, session.attributes())
    }

    fn on_intent(&self, session: &mut Session, intent: Intent) -> SpeechResponse {
        match intent {
            Intent::GetNutritionInfo { food_item } => {
                let phrase = food_item.unwrap_or_default();
                match self.begin_search_turn(session, &phrase) {
                    Ok(turn) if turn.result_count == 0 => {
                        SpeechResponse::tell(speech::not_found(&phrase))
                    }
                    Ok(turn) => {
                        let card = speech::card_content(&turn.displayed);
                        let found = speech::calories(&turn.displayed);
                        let response = if turn.has_more {
                            SpeechResponse::ask(found + speech::MORE_RESULTS, speech::MORE_REPROMPT)
                        } else {
                            SpeechResponse::tell(found)
                        };
                        response.with_card(format!("{}: {}", speech::CARD_TITLE, phrase), card)
                    }
                    Err(e) => fallback(e),
                }
            }
            Intent::MoreResults => match self.continue_turn(session) {
                Ok(turn) => SpeechResponse::tell(speech::more_results(
                    turn.result_count,
                    &turn.displayed,
                )),
                Err(e) => fallback(e),
            },
            Intent::Stop => {
                self.stop_turn(session);
                SpeechResponse::tell(speech::GOODBYE)
            }
            Intent::Unknown(name) => {
                tracing::warn!("Unknown intent {}", name);
                self.stop_turn(session);
                SpeechResponse::tell(speech::UNKNOWN_INTENT)
            }
        }
    }
}

/// Spoken fallback for a failed turn / 失败轮次的兜底播报
fn fallback(error: SkillError) -> SpeechResponse {
    let text = match error {
        SkillError::EmptyQuery => speech::EMPTY_QUERY,
        SkillError::NoPendingResults => speech::NOTHING_TO_CONTINUE,
        SkillError::InvalidTurn(_) => speech::INVALID_TURN,
    };
    SpeechResponse::tell(text)
}
