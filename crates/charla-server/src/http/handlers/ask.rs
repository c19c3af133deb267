//! The chat API handler.
//!
//! Every non-rate-limited outcome, including upstream failure, answers
//! HTTP 200 with `{ "answer": … }` so the widget always has something to
//! display. The only non-200 is the 429 from the rate limiter, and even
//! that carries a displayable answer body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use charla_core::{Lang, Turn};
use charla_relay::fallback;

use crate::notices;
use crate::policy::Verdict;
use crate::ratelimit::Decision;
use crate::state::AppState;

/// Request body for POST /api/ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The live question.
    #[serde(default)]
    pub question: String,

    /// Client-held transcript, oldest first.
    #[serde(default)]
    pub history: Vec<Turn>,

    /// Language tag deciding which language answers lead with.
    #[serde(default)]
    pub lang: Option<String>,
}

/// Response body: always present, always displayable.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /api/ask: relay one question.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    json_result: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let signature = &state.config.signature;

    // Malformed bodies still get a 200 with an apologetic answer; a raw
    // 4xx would dead-end the widget.
    let req = match json_result {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(%request_id, error = %rejection, "Malformed ask request body");
            return answer(
                StatusCode::OK,
                fallback::temporary(Lang::default(), "invalid request body", signature),
            );
        }
    };

    let lang = req
        .lang
        .as_deref()
        .map(Lang::from_tag)
        .unwrap_or_default();

    if state.limiter.check(addr.ip()).await == Decision::Limited {
        warn!(%request_id, ip = %addr.ip(), "Rate limit exceeded");
        return answer(
            StatusCode::TOO_MANY_REQUESTS,
            notices::rate_limited(lang, signature),
        );
    }

    if req.question.trim().is_empty() {
        return answer(StatusCode::OK, notices::empty_question(lang, signature));
    }

    if state.policy.check(&req.question, &req.history) == Verdict::Blocked {
        info!(%request_id, "Question declined by policy guard");
        return answer(StatusCode::OK, notices::blocked(lang, signature));
    }

    let persona = state.personas.select(&req.question).await;
    let system_prompt = persona.system_prompt(lang, signature);
    let messages = state
        .builder
        .build(&system_prompt, &req.question, &req.history);

    info!(
        %request_id,
        persona = persona.id,
        %lang,
        history_turns = req.history.len(),
        prompt_messages = messages.len(),
        "Relaying question upstream"
    );

    let text = state.relay.ask(&messages, lang).await;
    answer(StatusCode::OK, text)
}

fn answer(status: StatusCode, text: String) -> Response {
    (status, Json(AskResponse { answer: text })).into_response()
}
