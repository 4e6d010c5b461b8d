#[cfg(test)]
mod tests {
    use crate::helpers::app::{ALLOWED_ORIGIN, Reply, StubGenerator, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    fn preflight(origin: &str) -> Request<AxumBody> {
        Request::builder()
            .method("OPTIONS")
            .uri("/feedback")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_from_allowed_origin_is_accepted() {
        let app = make_test_app(StubGenerator::new(Reply::Text("unused")));

        let response = app.oneshot(preflight(ALLOWED_ORIGIN)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            ALLOWED_ORIGIN
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("POST"));
    }

    #[tokio::test]
    async fn preflight_from_unknown_origin_gets_no_allow_header() {
        let app = make_test_app(StubGenerator::new(Reply::Text("unused")));

        let response = app
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn simple_request_from_allowed_origin_is_tagged() {
        let app = make_test_app(StubGenerator::new(Reply::Text("unused")));

        let req = Request::builder()
            .method("GET")
            .uri("/health")
            .header(header::ORIGIN, ALLOWED_ORIGIN)
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            ALLOWED_ORIGIN
        );
    }
}
