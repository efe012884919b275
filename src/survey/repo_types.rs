use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Stored questionnaire submission. `answer` is an opaque serialized
/// string; the server never inspects its internal shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveyResponse {
    pub id: i64,
    pub user_id: i64,
    pub question: String,
    pub description: String,
    pub answer: String,
    pub created_at: OffsetDateTime,
}
