use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::api::error::{handle_content_type_error, handle_payload_error};
use crate::api::pages::assets::static_asset;
use crate::config::server_config::ServerConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    /// Assembles API, pages, docs and static assets into one endpoint.
    pub fn build_app(container: DependencyContainer, server_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.question_api,
                container.summary_api,
                container.page_api,
            ),
            "Opinion Summary API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .at("/static/:file", get(static_asset))
            .catch_error(handle_payload_error)
            .catch_error(handle_content_type_error)
    }

    pub async fn run(
        config: ServerConfig,
        cors: Cors,
        container: DependencyContainer,
    ) -> anyhow::Result<()> {
        let addr = config.bind_address();
        let app = Self::build_app(container, &format!("http://{}", addr))
            .with(cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::summary::errors::SummaryError;
    use business::domain::summary::prompt::SummaryPrompt;
    use business::domain::summary::services::SummarizerService;
    use logger::TracingLogger;
    use persistence::question::repository::QuestionRepositoryInMemory;

    use super::*;

    mock! {
        pub Summarizer {}

        #[async_trait]
        impl SummarizerService for Summarizer {
            fn is_configured(&self) -> bool;
            async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummaryError>;
        }
    }

    fn app(summarizer: MockSummarizer) -> impl Endpoint {
        let container = DependencyContainer::with_adapters(
            Arc::new(QuestionRepositoryInMemory::new()),
            Arc::new(summarizer),
            Arc::new(TracingLogger),
        );
        Server::build_app(container, "http://localhost:5000")
    }

    fn idle_summarizer() -> MockSummarizer {
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_is_configured().return_const(true);
        summarizer.expect_summarize().never();
        summarizer
    }

    async fn create_question<E: Endpoint>(cli: &TestClient<E>, text: &str) {
        cli.post("/api/create-question")
            .body_json(&json!({ "question": text }))
            .send()
            .await
            .assert_status_is_ok();
    }

    async fn submit_opinion<E: Endpoint>(cli: &TestClient<E>, id: &str, text: &str) {
        cli.post(format!("/api/submit-opinion/{}", id))
            .body_json(&json!({ "opinion": text }))
            .send()
            .await
            .assert_status_is_ok();
    }

    fn owned<T: 'static>(value: T) -> T {
        value
    }

    #[tokio::test]
    async fn should_outlive_a_temporary_server_url() {
        let container = DependencyContainer::with_adapters(
            Arc::new(QuestionRepositoryInMemory::new()),
            Arc::new(idle_summarizer()),
            Arc::new(TracingLogger),
        );
        let app = owned(Server::build_app(
            container,
            &format!("http://{}", "127.0.0.1:5000"),
        ));
        let cli = TestClient::new(app);

        cli.get("/healthz").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_report_health() {
        let cli = TestClient::new(app(idle_summarizer()));

        let resp = cli.get("/healthz").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "ok": true })).await;
    }

    #[tokio::test]
    async fn should_create_questions_with_sequential_links() {
        let cli = TestClient::new(app(idle_summarizer()));

        let first = cli
            .post("/api/create-question")
            .body_json(&json!({ "question": "Pineapple on pizza?" }))
            .send()
            .await;
        first.assert_status_is_ok();
        first.assert_json(json!({ "link": "/question/q1" })).await;

        let second = cli
            .post("/api/create-question")
            .body_json(&json!({ "question": "Tabs or spaces?" }))
            .send()
            .await;
        second.assert_json(json!({ "link": "/question/q2" })).await;
    }

    #[tokio::test]
    async fn should_reject_empty_question_without_allocating_id() {
        let cli = TestClient::new(app(idle_summarizer()));

        let blank = cli
            .post("/api/create-question")
            .body_json(&json!({ "question": "   " }))
            .send()
            .await;
        blank.assert_status(StatusCode::BAD_REQUEST);
        blank
            .assert_json(json!({ "error": "Question is required" }))
            .await;

        let missing = cli
            .post("/api/create-question")
            .body_json(&json!({}))
            .send()
            .await;
        missing.assert_status(StatusCode::BAD_REQUEST);

        let created = cli
            .post("/api/create-question")
            .body_json(&json!({ "question": "Real question?" }))
            .send()
            .await;
        created.assert_json(json!({ "link": "/question/q1" })).await;
    }

    #[tokio::test]
    async fn should_report_malformed_body_as_json_error() {
        let cli = TestClient::new(app(idle_summarizer()));

        let resp = cli
            .post("/api/create-question")
            .content_type("application/json")
            .body("{not json")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let body = resp.json().await;
        assert!(
            body.value()
                .object()
                .get("error")
                .string()
                .starts_with("Invalid request body")
        );
    }

    #[tokio::test]
    async fn should_return_question_text() {
        let cli = TestClient::new(app(idle_summarizer()));
        create_question(&cli, "  Cats or dogs?  ").await;

        let resp = cli.get("/api/question/q1").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "question": "Cats or dogs?" })).await;
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_question() {
        let cli = TestClient::new(app(idle_summarizer()));

        let resp = cli.get("/api/question/q9").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "error": "Question not found" }))
            .await;
    }

    #[tokio::test]
    async fn should_not_accept_opinions_for_unknown_question() {
        let cli = TestClient::new(app(idle_summarizer()));

        let submit = cli
            .post("/api/submit-opinion/q1")
            .body_json(&json!({ "opinion": "hello" }))
            .send()
            .await;
        submit.assert_status(StatusCode::NOT_FOUND);

        let count = cli.get("/api/opinion-count/q1").send().await;
        count.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_empty_opinion() {
        let cli = TestClient::new(app(idle_summarizer()));
        create_question(&cli, "Anything?").await;

        let resp = cli
            .post("/api/submit-opinion/q1")
            .body_json(&json!({ "opinion": "" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "Opinion is required" }))
            .await;
        cli.get("/api/opinion-count/q1")
            .send()
            .await
            .assert_json(json!({ "count": 0 }))
            .await;
    }

    #[tokio::test]
    async fn should_count_submitted_opinions() {
        let cli = TestClient::new(app(idle_summarizer()));
        create_question(&cli, "Pineapple on pizza?").await;

        let resp = cli
            .post("/api/submit-opinion/q1")
            .body_json(&json!({ "opinion": "yes" }))
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({ "success": true })).await;
        submit_opinion(&cli, "q1", "no").await;

        let count = cli.get("/api/opinion-count/q1").send().await;
        count.assert_status_is_ok();
        count.assert_json(json!({ "count": 2 })).await;
    }

    #[tokio::test]
    async fn should_summarize_with_single_model_call() {
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_is_configured().return_const(true);
        summarizer
            .expect_summarize()
            .withf(|prompt| {
                prompt.user.contains("Pineapple on pizza?")
                    && prompt.user.contains("- yes")
                    && prompt.user.contains("- no")
            })
            .times(1)
            .returning(|_| Ok("Mixed: a nation divided by fruit.".to_string()));

        let cli = TestClient::new(app(summarizer));
        create_question(&cli, "Pineapple on pizza?").await;
        submit_opinion(&cli, "q1", "yes").await;
        submit_opinion(&cli, "q1", "no").await;

        let resp = cli.get("/api/summarize/q1").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "summary": "Mixed: a nation divided by fruit." }))
            .await;
    }

    #[tokio::test]
    async fn should_return_placeholder_with_too_few_opinions() {
        let cli = TestClient::new(app(idle_summarizer()));
        create_question(&cli, "Lonely question?").await;
        submit_opinion(&cli, "q1", "just me").await;

        let resp = cli.get("/api/summarize/q1").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "summary": "Not enough opinions to generate a summary." }))
            .await;
    }

    #[tokio::test]
    async fn should_fail_summary_when_api_key_missing() {
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_is_configured().return_const(false);
        summarizer.expect_summarize().never();

        let cli = TestClient::new(app(summarizer));
        create_question(&cli, "Anything?").await;

        let resp = cli.get("/api/summarize/q1").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({ "error": "Missing OPENAI_API_KEY on server" }))
            .await;
    }

    #[tokio::test]
    async fn should_convert_upstream_failure_to_error_message() {
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_is_configured().return_const(true);
        summarizer
            .expect_summarize()
            .times(1)
            .returning(|_| Err(SummaryError::GenerationFailed("upstream returned 500".to_string())));

        let cli = TestClient::new(app(summarizer));
        create_question(&cli, "Anything?").await;
        submit_opinion(&cli, "q1", "a").await;
        submit_opinion(&cli, "q1", "b").await;

        let resp = cli.get("/api/summarize/q1").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({ "error": "Summarization failed: upstream returned 500" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_not_found_when_summarizing_unknown_question() {
        let cli = TestClient::new(app(idle_summarizer()));

        let resp = cli.get("/api/summarize/q5").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_pages_only_for_existing_questions() {
        let cli = TestClient::new(app(idle_summarizer()));

        let index = cli.get("/").send().await;
        index.assert_status_is_ok();

        let missing = cli.get("/question/q1").send().await;
        missing.assert_status(StatusCode::NOT_FOUND);
        missing.assert_text("Question not found.").await;

        create_question(&cli, "Now it exists?").await;

        cli.get("/question/q1").send().await.assert_status_is_ok();
        cli.get("/summary/q1").send().await.assert_status_is_ok();
        cli.get("/summary/q2")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_page_scripts() {
        let cli = TestClient::new(app(idle_summarizer()));

        let script = cli.get("/static/script.js").send().await;
        script.assert_status_is_ok();
        script.assert_content_type("application/javascript; charset=utf-8");

        cli.get("/static/missing.js")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
