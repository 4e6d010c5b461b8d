#[cfg(test)]
mod tests {
    use crate::helpers::app::{
        Reply, StubGenerator, get_json_body, make_test_app, make_test_app_with,
    };
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use feedback::FALLBACK_FEEDBACK;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_feedback(body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/feedback")
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    /// Test Case: Stubbed model reply is sanitized and returned
    #[tokio::test]
    async fn test_feedback_success_end_to_end() {
        let stub = StubGenerator::new(Reply::Text("**Great job!**   Keep it up."));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 10, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json, json!({ "feedback": "Great job! Keep it up." }));
        assert_eq!(stub.calls(), 1);
    }

    /// Test Case: Prompt carries game, score, rubric text and teacher note
    #[tokio::test]
    async fn test_feedback_prompt_contents() {
        let stub = StubGenerator::new(Reply::Text("Kerja bagus!"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({
                "level": 2,
                "score": 8,
                "game": "Detektif Kata",
                "teacherNote": "Perhatikan grafik"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let prompt = stub.last_prompt().unwrap();
        assert!(prompt.contains("Nama Game: \"Detektif Kata\""));
        assert!(prompt.contains("Skor Siswa: 8 dari 10"));
        assert!(prompt.contains("Gunakan latihan membandingkan 2 teks"));
        assert!(prompt.contains("Pesan Tambahan dari Guru: \"Perhatikan grafik\""));
    }

    /// Test Case: Level-less request shape with `note` and `userRole`
    #[tokio::test]
    async fn test_feedback_level_less_shape() {
        let stub = StubGenerator::new(Reply::Text("Hebat!"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({
                "score": "6",
                "game": "Cari Kata",
                "note": "Saya mencoba lebih teliti",
                "userRole": "student"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let prompt = stub.last_prompt().unwrap();
        assert!(prompt.contains("Catatan dari Siswa: \"Saya mencoba lebih teliti\""));
        // Level 1, score 6 description
        assert!(prompt.contains("Kemampuan menemukan informasi masih terbatas."));
    }

    /// Test Case: Missing game never reaches the model
    #[tokio::test]
    async fn test_feedback_missing_game() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 5 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert!(!json["error"].as_str().unwrap().is_empty());
        assert_eq!(stub.calls(), 0);
    }

    /// Test Case: Blank game is treated as missing
    #[tokio::test]
    async fn test_feedback_blank_game() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 5, "game": "  " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.calls(), 0);
    }

    /// Test Case: Missing score is rejected
    #[tokio::test]
    async fn test_feedback_missing_score() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert!(json["error"].as_str().unwrap().contains("score"));
        assert_eq!(stub.calls(), 0);
    }

    /// Test Case: Malformed JSON is a 400 with an error body
    #[tokio::test]
    async fn test_feedback_malformed_json() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub.clone());

        let req = Request::builder()
            .method("POST")
            .uri("/feedback")
            .header("Content-Type", "application/json")
            .body(AxumBody::from("{ \"level\": 1, "))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert!(json["error"].as_str().unwrap().starts_with("Body permintaan tidak valid"));
        assert_eq!(stub.calls(), 0);
    }

    /// Test Case: Uncovered (level, score) pair is a 404 naming the pair
    #[tokio::test]
    async fn test_feedback_rubric_miss() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 4, "score": 10, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(
            json["error"],
            "Kombinasi level 4 dan skor 10 tidak ditemukan dalam panduan."
        );
        assert_eq!(stub.calls(), 0);
    }

    /// Test Case: Score above the maximum is a rubric miss too
    #[tokio::test]
    async fn test_feedback_score_out_of_range() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub);

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 11, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert!(json["error"].as_str().unwrap().contains("skor 11"));
    }

    /// Test Case: Upstream failure becomes a 500 without crashing
    #[tokio::test]
    async fn test_feedback_upstream_failure() {
        let stub = StubGenerator::new(Reply::Fail);
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 3, "score": 2, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "Gagal membuat feedback AI");
        assert_eq!(json["details"], "Gemini returned 503: The model is overloaded");
        assert_eq!(stub.calls(), 1);
    }

    /// Test Case: Upstream details are hidden when disabled
    #[tokio::test]
    async fn test_feedback_upstream_failure_without_details() {
        let stub = StubGenerator::new(Reply::Fail);
        let app = make_test_app_with(stub, false);

        let response = app
            .oneshot(post_feedback(json!({ "level": 3, "score": 2, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "Gagal membuat feedback AI");
        assert!(json.get("details").is_none());
    }

    /// Test Case: Reply without text falls back to the fixed phrase
    #[tokio::test]
    async fn test_feedback_no_candidates_fallback() {
        let stub = StubGenerator::new(Reply::Nothing);
        let app = make_test_app(stub);

        let response = app
            .oneshot(post_feedback(json!({ "level": 2, "score": 0, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["feedback"], FALLBACK_FEEDBACK);
    }

    /// Test Case: Whitespace-only reply falls back to the fixed phrase
    #[tokio::test]
    async fn test_feedback_blank_reply_fallback() {
        let stub = StubGenerator::new(Reply::Text("   \n "));
        let app = make_test_app(stub);

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 4, "game": "WordHunt" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["feedback"], FALLBACK_FEEDBACK);
    }

    /// Test Case: Integral float score resolves like the integer
    #[tokio::test]
    async fn test_feedback_integral_float_score() {
        let stub = StubGenerator::new(Reply::Text("Bagus"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 7.0, "game": "W" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(stub.last_prompt().unwrap().contains("Skor Siswa: 7 dari 10"));
    }

    /// Test Case: Fractional score is a 400
    #[tokio::test]
    async fn test_feedback_fractional_score() {
        let stub = StubGenerator::new(Reply::Text("unused"));
        let app = make_test_app(stub.clone());

        let response = app
            .oneshot(post_feedback(json!({ "level": 1, "score": 7.5, "game": "W" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.calls(), 0);
    }
}
