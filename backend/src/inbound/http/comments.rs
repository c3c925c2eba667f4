//! Comments API handlers.
//!
//! ```text
//! GET /api/v1/comments
//! ```

use actix_web::{get, web};

use crate::domain::{CommentSummary, Envelope};
use crate::inbound::http::schemas::CommentEnvelopeSchema;
use crate::inbound::http::state::HttpState;

/// List every comment as a summary record.
///
/// The HTTP status mirrors the envelope code, as for the users endpoints.
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    responses(
        (status = 200, description = "Comments", body = CommentEnvelopeSchema),
        (status = 404, description = "Upstream returned no comments", body = CommentEnvelopeSchema),
        (status = 500, description = "Upstream fetch failed", body = CommentEnvelopeSchema)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/comments")]
pub async fn list_comments(state: web::Data<HttpState>) -> Envelope<CommentSummary> {
    state.directory.list_comments().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test, web};
    use pagination::PageLimits;
    use serde_json::Value;

    use super::list_comments;
    use crate::domain::DirectoryService;
    use crate::domain::ports::{CommentRecord, DirectorySourceError, MockDirectorySource};
    use crate::inbound::http::state::HttpState;

    fn comment(id: u64) -> CommentRecord {
        CommentRecord {
            post_id: 1,
            id,
            name: format!("comment {id}"),
            email: "author@example.net".into(),
            body: "laudantium enim quasi".into(),
        }
    }

    async fn get_comments(source: MockDirectorySource) -> (actix_web::http::StatusCode, Value) {
        let state = HttpState::new(DirectoryService::new(
            Arc::new(source),
            PageLimits::default(),
        ));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(list_comments)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/comments")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("response JSON");
        (status, value)
    }

    #[actix_web::test]
    async fn list_comments_serves_summaries_in_wire_casing() {
        let mut source = MockDirectorySource::new();
        source
            .expect_fetch_comments()
            .times(1)
            .return_once(|| Ok(vec![comment(1), comment(2)]));

        let (status, value) = get_comments(source).await;
        assert_eq!(status, actix_web::http::StatusCode::OK);
        let data = value
            .get("data")
            .and_then(Value::as_array)
            .expect("data array");
        assert_eq!(data.len(), 2);
        let first = data[0].as_object().expect("summary object");
        assert!(first.contains_key("postId"), "wire casing is postId");
        assert!(!first.contains_key("post_id"));
    }

    #[actix_web::test]
    async fn list_comments_reports_an_empty_upstream_as_404() {
        let mut source = MockDirectorySource::new();
        source
            .expect_fetch_comments()
            .times(1)
            .return_once(|| Ok(Vec::new()));

        let (status, value) = get_comments(source).await;
        assert_eq!(status, actix_web::http::StatusCode::NOT_FOUND);
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("not found")
        );
    }

    #[actix_web::test]
    async fn list_comments_reports_a_failed_fetch_as_500() {
        let mut source = MockDirectorySource::new();
        source
            .expect_fetch_comments()
            .times(1)
            .return_once(|| Err(DirectorySourceError::upstream_status(502, "status 502")));

        let (status, value) = get_comments(source).await;
        assert_eq!(
            status,
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(value.get("code").and_then(Value::as_u64), Some(500));
    }
}
