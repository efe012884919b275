pub use crate::survey::repo_types::SurveyResponse;
use sqlx::PgPool;

impl SurveyResponse {
    /// Insert a submission scoped to its owner; payload fields stored verbatim.
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        question: &str,
        description: &str,
        answer: &str,
    ) -> Result<SurveyResponse, sqlx::Error> {
        sqlx::query_as::<_, SurveyResponse>(
            r#"
            INSERT INTO survey_responses (user_id, question, description, answer)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, question, description, answer, created_at
            "#,
        )
        .bind(user_id)
        .bind(question)
        .bind(description)
        .bind(answer)
        .fetch_one(db)
        .await
    }

    /// All submissions owned by one user, in insertion order.
    pub async fn list_by_user(
        db: &PgPool,
        user_id: i64,
    ) -> Result<Vec<SurveyResponse>, sqlx::Error> {
        sqlx::query_as::<_, SurveyResponse>(
            r#"
            SELECT id, user_id, question, description, answer, created_at
            FROM survey_responses
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
