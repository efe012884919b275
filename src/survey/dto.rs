use serde::{Deserialize, Serialize};

/// Request body for saving a submission. The three fields are stored
/// verbatim; `answer` is never validated for shape.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
}

/// Stored row projected for the owner: no `user_id`, no timestamps.
#[derive(Debug, Serialize)]
pub struct SurveyRow {
    pub id: i64,
    pub question: String,
    pub description: String,
    pub answer: String,
}
