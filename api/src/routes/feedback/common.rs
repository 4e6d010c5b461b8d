use feedback::FeedbackRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::ApiError;

/// Level used when the request does not name one.
pub const DEFAULT_LEVEL: i64 = 1;

/// A number sent as a JSON integer, an integral float (`7.0`) or a numeric
/// string (`"7"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberLike {
    fn to_i64(&self, field: &str) -> Result<i64, ApiError> {
        let not_integer = || ApiError::Validation(format!("{field} harus berupa angka bulat"));
        match self {
            NumberLike::Int(n) => Ok(*n),
            NumberLike::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Ok(*f as i64)
            }
            NumberLike::Float(_) => Err(not_integer()),
            NumberLike::Text(s) => s.trim().parse().map_err(|_| not_integer()),
        }
    }
}

/// Request body for POST `/feedback`.
///
/// Accepts both shapes seen from clients:
/// - `{ level, score, game, teacherNote? }`
/// - `{ score, game, note?, userRole? }`, where the level defaults to [`DEFAULT_LEVEL`]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequestBody {
    pub level: Option<NumberLike>,
    #[validate(required(message = "score wajib diisi"))]
    pub score: Option<NumberLike>,
    #[validate(
        required(message = "game wajib diisi"),
        length(min = 1, message = "game wajib diisi")
    )]
    pub game: Option<String>,
    #[serde(alias = "note")]
    pub teacher_note: Option<String>,
    pub user_role: Option<String>,
}

impl FeedbackRequestBody {
    /// Validates required fields and converts the body into a [`FeedbackRequest`].
    pub fn into_request(mut self) -> Result<FeedbackRequest, ApiError> {
        self.game = self.game.map(|g| g.trim().to_string());
        self.validate()
            .map_err(|e| ApiError::Validation(format!("Validasi gagal: {e}")))?;

        let level = match &self.level {
            Some(level) => level.to_i64("level")?,
            None => DEFAULT_LEVEL,
        };
        let score = match &self.score {
            Some(score) => score.to_i64("score")?,
            None => return Err(ApiError::Validation("score wajib diisi".into())),
        };

        Ok(FeedbackRequest {
            level,
            score,
            game: self.game.unwrap_or_default(),
            note: self.teacher_note,
            user_role: self.user_role,
        })
    }
}
