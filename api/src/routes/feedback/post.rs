//! POST handlers for `/feedback`.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use super::common::FeedbackRequestBody;
use crate::response::{ApiError, FeedbackBody};
use crate::state::AppState;

/// POST `/feedback`
///
/// Generates a short feedback paragraph for one game result. The rubric entry
/// for `(level, score)` guides the text, which comes from the language model.
///
/// # Request body
/// ```json
/// {
///   "level": 1,
///   "score": 10,
///   "game": "WordHunt",
///   "teacherNote": "Sangat teliti hari ini"
/// }
/// ```
///
/// ## Field notes
/// - `level` is optional and defaults to `1`.
/// - `level` and `score` may also be numeric strings.
/// - `note` is accepted in place of `teacherNote`. `userRole: "student"` marks
///   it as the student's own note.
///
/// # Responses
///
/// ## 200 OK
/// ```json
/// { "feedback": "Kerja bagus di game WordHunt! ..." }
/// ```
///
/// ## 400 Bad Request (missing `game`/`score`, malformed body)
/// ```json
/// { "error": "Validasi gagal: game: game wajib diisi" }
/// ```
///
/// ## 404 Not Found (pair not covered by the rubric)
/// ```json
/// { "error": "Kombinasi level 4 dan skor 10 tidak ditemukan dalam panduan." }
/// ```
///
/// ## 500 Internal Server Error (text generation failed)
/// ```json
/// { "error": "Gagal membuat feedback AI", "details": "Gemini returned 429: ..." }
/// ```
pub async fn create_feedback(
    State(app): State<AppState>,
    payload: Result<Json<FeedbackRequestBody>, JsonRejection>,
) -> Result<Json<FeedbackBody>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        ApiError::Validation(format!("Body permintaan tidak valid: {}", e.body_text()))
    })?;
    let request = body.into_request()?;

    let feedback = app
        .generator()
        .generate(&request)
        .await
        .map_err(|e| ApiError::from_feedback(e, app.expose_error_details()))?;

    info!(
        level = request.level,
        score = request.score,
        game = %request.game,
        chars = feedback.chars().count(),
        "Feedback generated"
    );

    Ok(Json(FeedbackBody { feedback }))
}
