use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::survey::dto::{SubmitRequest, SubmitResponse, SurveyRow};
use crate::survey::repo::SurveyResponse;

pub fn survey_routes() -> Router<AppState> {
    Router::new().route("/survey", post(submit).get(list))
}

#[instrument(skip(state, payload))]
pub async fn submit(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let row = SurveyResponse::create(
        &state.db,
        user.id,
        &payload.question,
        &payload.description,
        &payload.answer,
    )
    .await?;

    info!(user_id = %user.id, response_id = %row.id, "survey response saved");
    Ok(Json(SubmitResponse {
        message: "Response saved".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<SurveyRow>>, ApiError> {
    let rows = SurveyResponse::list_by_user(&state.db, user.id).await?;
    let items = rows
        .into_iter()
        .map(|r| SurveyRow {
            id: r.id,
            question: r.question,
            description: r.description,
            answer: r.answer,
        })
        .collect();
    Ok(Json(items))
}
