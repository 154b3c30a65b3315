//! Loading of the remote documents behind the portfolio and resume pages.
//!
//! Each page owns one [`DocumentSource`]. When the page mounts in the browser
//! it issues a single GET for that source and settles into one of the
//! mutually exclusive [`ViewState`]s. There is no retry, no timeout beyond the
//! transport default and no cache; reloading the page is the only way to try
//! again.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use leptos::prelude::*;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::Document;

/// A fixed, page-specific remote document and the messages shown while it is
/// being fetched or when it could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSource {
    pub url: &'static str,
    pub loading_message: &'static str,
    pub failure_message: &'static str,
    /// `None` for documents that have no empty state of their own.
    pub empty_message: Option<&'static str>,
}

pub const PORTFOLIO_SOURCE: DocumentSource = DocumentSource {
    url: "https://raw.githubusercontent.com/hyunsoojin/first-deploy/refs/heads/main/service/resume_portfolio_service.json",
    loading_message: "포트폴리오 데이터를 불러오는 중...",
    failure_message: "포트폴리오 데이터를 불러오는데 실패했습니다.",
    empty_message: Some("아직 등록된 프로젝트가 없습니다."),
};

pub const RESUME_SOURCE: DocumentSource = DocumentSource {
    url: "https://raw.githubusercontent.com/hyunsoojin/first-deploy/refs/heads/0.3/general_info/service/resume_general_info_service.json",
    loading_message: "이력서 데이터를 불러오는 중...",
    failure_message: "이력서 데이터를 불러오는데 실패했습니다.",
    empty_message: None,
};

/// Every way a document fetch can fail. All of them collapse into
/// [`ViewState::Failed`]; the detail only reaches the logs.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Issues exactly one GET for `url` and parses the body into `T`.
///
/// # Errors
///
/// Returns [`DocumentError::Transport`] when the request cannot be completed,
/// [`DocumentError::Status`] for a non-2xx response and
/// [`DocumentError::Malformed`] when the body is not JSON or its root is not
/// an object.
pub async fn fetch_document<T>(client: &reqwest::Client, url: &str) -> Result<T, DocumentError>
where
    T: DeserializeOwned,
{
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DocumentError::Status(status));
    }

    let body = response.text().await?;
    log::debug!("fetched {url}: {body}");

    Ok(serde_json::from_str(&body)?)
}

/// What a remote page shows. Exactly one state is rendered at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Failed(&'static str),
    Empty(&'static str),
    Populated(T),
}

impl<T: Document> ViewState<T> {
    /// Maps a settled fetch onto the state the page should render.
    pub fn settle(result: Result<T, DocumentError>, source: &DocumentSource) -> Self {
        match result {
            Ok(document) if document.is_empty() => match source.empty_message {
                Some(message) => Self::Empty(message),
                None => Self::Populated(document),
            },
            Ok(document) => Self::Populated(document),
            Err(err) => {
                log::error!("failed to load {}: {err}", source.url);
                Self::Failed(source.failure_message)
            }
        }
    }
}

/// Tracks whether the page that started a fetch is still mounted.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Creates a guard that is released when the current reactive owner is
    /// cleaned up.
    #[must_use]
    pub fn attach() -> Self {
        let guard = Self::new();
        let handle = guard.clone();
        on_cleanup(move || handle.release());
        guard
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Writes `next` into `state` if the page is still mounted. Returns
    /// whether the value was applied.
    pub fn commit<T>(&self, state: RwSignal<T>, next: T) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.is_live() && state.try_set(next).is_none()
    }
}

/// Fetches `source` once the page is mounted on the client and exposes the
/// resulting view state.
///
/// The request is started from an effect, so server rendering always emits
/// the loading state and the browser performs the only fetch. A response that
/// arrives after the page was torn down is dropped.
pub fn use_remote_document<T>(source: DocumentSource) -> ReadSignal<ViewState<T>>
where
    T: Document + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(ViewState::Loading);
    let guard = MountGuard::attach();

    Effect::new(move |_| {
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let client = reqwest::Client::new();
            let result = fetch_document::<T>(&client, source.url).await;
            let next = ViewState::settle(result, &source);
            if !guard.commit(state, next) {
                log::debug!("discarded response for {} after unmount", source.url);
            }
        });
    });

    state.read_only()
}
