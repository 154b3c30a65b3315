use app::api::{DocumentError, PORTFOLIO_SOURCE, RESUME_SOURCE, ViewState, fetch_document};
use app::types::{ExperienceDetail, PortfolioDocument, ResumeDocument};
use assert_matches::assert_matches;
use axum::{Router, http::StatusCode, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

#[cfg(test)]
mod document_loading_tests {
    use super::*;

    const PORTFOLIO_JSON: &str =
        r#"{"portfolio":[{"title":"A","summary":"S","url":"http://x"},{"title":"B","summary":"T","url":"http://y"}]}"#;
    const RESUME_JSON: &str = r#"{
        "name": "J",
        "subtitle": "Dev",
        "email": "j@example.com",
        "github": "https://github.com/j",
        "experienceData": [
            {"company": "Acme", "title": "Engineer", "duration": "2021 - 2024",
             "projects": [{"title": "P", "description": "D", "tags": ["Go"]}]},
            {"company": "Beta", "title": "Intern", "duration": "2020", "description": "Ops"}
        ],
        "skillsData": ["Go", "Rust"],
        "awardsData": [],
        "educationData": []
    }"#;

    /// Serves a handful of canned documents on an ephemeral port and counts
    /// the requests it receives.
    async fn spawn_document_server() -> (SocketAddr, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let app = Router::new()
            .route("/portfolio.json", get(|| async { PORTFOLIO_JSON }))
            .route("/resume.json", get(|| async { RESUME_JSON }))
            .route("/empty.json", get(|| async { r#"{"portfolio":[]}"# }))
            .route("/missing.json", get(|| async { "{}" }))
            .route("/array.json", get(|| async { "[1, 2, 3]" }))
            .route("/text", get(|| async { "<html>not json</html>" }))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .layer(axum::middleware::from_fn(
                move |req: axum::extract::Request, next: axum::middleware::Next| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { next.run(req).await }
                },
            ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (addr, hits)
    }

    async fn load_portfolio(url: &str) -> ViewState<PortfolioDocument> {
        let client = reqwest::Client::new();
        ViewState::settle(fetch_document(&client, url).await, &PORTFOLIO_SOURCE)
    }

    #[tokio::test]
    async fn test_portfolio_populated_in_array_order() {
        let (addr, hits) = spawn_document_server().await;

        let state = load_portfolio(&format!("http://{addr}/portfolio.json")).await;

        assert_matches!(state, ViewState::Populated(doc) => {
            let titles: Vec<_> = doc.items.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(titles, vec!["A", "B"]);
            assert_eq!(doc.items[0].url, "http://x");
        });
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_or_absent_portfolio_is_empty_not_failed() {
        let (addr, _) = spawn_document_server().await;

        for path in ["empty.json", "missing.json"] {
            let state = load_portfolio(&format!("http://{addr}/{path}")).await;
            assert_eq!(
                state,
                ViewState::Empty(PORTFOLIO_SOURCE.empty_message.unwrap())
            );
        }
    }

    #[tokio::test]
    async fn test_server_error_is_failed_without_retry() {
        let (addr, hits) = spawn_document_server().await;
        let client = reqwest::Client::new();

        let result =
            fetch_document::<PortfolioDocument>(&client, &format!("http://{addr}/broken")).await;
        assert_matches!(result, Err(DocumentError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR);

        let state = ViewState::settle(result, &PORTFOLIO_SOURCE);
        assert_eq!(state, ViewState::Failed(PORTFOLIO_SOURCE.failure_message));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (addr, _) = spawn_document_server().await;
        let client = reqwest::Client::new();

        let result =
            fetch_document::<PortfolioDocument>(&client, &format!("http://{addr}/text")).await;
        assert_matches!(result, Err(DocumentError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_non_object_root_is_malformed() {
        let (addr, _) = spawn_document_server().await;
        let client = reqwest::Client::new();

        let result =
            fetch_document::<ResumeDocument>(&client, &format!("http://{addr}/array.json")).await;
        assert_matches!(result, Err(DocumentError::Malformed(_)));

        let state = ViewState::settle(result, &RESUME_SOURCE);
        assert_eq!(state, ViewState::Failed(RESUME_SOURCE.failure_message));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::new();
        let result =
            fetch_document::<PortfolioDocument>(&client, &format!("http://{addr}/portfolio.json"))
                .await;
        assert_matches!(result, Err(DocumentError::Transport(_)));

        let state = ViewState::settle(result, &PORTFOLIO_SOURCE);
        assert_eq!(state, ViewState::Failed(PORTFOLIO_SOURCE.failure_message));
        assert_ne!(
            Some(PORTFOLIO_SOURCE.failure_message),
            PORTFOLIO_SOURCE.empty_message
        );
    }

    #[tokio::test]
    async fn test_resume_loads_both_experience_variants() {
        let (addr, _) = spawn_document_server().await;
        let client = reqwest::Client::new();

        let resume: ResumeDocument =
            fetch_document(&client, &format!("http://{addr}/resume.json"))
                .await
                .expect("resume document");

        assert_eq!(resume.name, "J");
        assert_eq!(resume.skills, vec!["Go", "Rust"]);
        assert_matches!(&resume.experience[0].detail, ExperienceDetail::MultiProject(projects) if projects.len() == 1);
        assert_matches!(
            &resume.experience[1].detail,
            ExperienceDetail::SingleDescription { description, tags } if description == "Ops" && tags.is_empty()
        );
    }
}
