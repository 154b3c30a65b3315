//! This module defines the `portfolio` component, which lists the projects
//! published in the remote portfolio document.
//!
//! The page fetches the document once when it mounts and shows a loading
//! message, a failure notice, an empty notice, or the project grid.

use leptos::{
    html::{a, div, h1, header, main, p, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::components::{A, AProps};

use crate::{
    api::{DocumentSource, PORTFOLIO_SOURCE, ViewState, use_remote_document},
    components::{loader, notice, section},
    types::{PortfolioDocument, PortfolioItem},
};

/// Renders the portfolio page.
///
/// The `state` signal starts out as `ViewState::Loading` and is settled by the
/// single document fetch started after mount.
pub fn component() -> impl IntoView {
    let state = use_remote_document::<PortfolioDocument>(PORTFOLIO_SOURCE);

    div().class("min-h-screen bg-gradient-to-br from-accent to-accent-deep").child(
        div().class("p-5 mx-auto max-w-[1200px]").child((
            Title(TitleProps::builder().text("Portfolio").build()),
            header().class("py-16 mb-10 text-center text-white").child((
                h1().class("mb-2.5 text-4xl md:text-6xl text-shadow animate-fade-in-down").child("Portfolio"),
                p().class("mb-8 text-xl opacity-90 animate-fade-in-up [animation-delay:0.3s]")
                    .child("제가 작업한 프로젝트들을 소개합니다"),
                A(AProps::builder()
                    .href("/")
                    .children(ToChildren::to_children(|| {
                        span().class("inline-flex gap-2.5 items-center py-3 px-6 font-medium rounded-full border transition-all duration-300 bg-white/20 border-white/30 backdrop-blur-md hover:-translate-y-0.5 hover:bg-white/30 animate-fade-in-up [animation-delay:0.6s]")
                            .child("← 메인으로 돌아가기")
                    }))
                    .build()),
            )),
            main().class("overflow-hidden mb-10 bg-white rounded-[20px] shadow-2xl animate-fade-in-up [animation-delay:0.9s]")
                .child(section::component(
                    "프로젝트",
                    move || body(state.get(), &PORTFOLIO_SOURCE),
                )),
        )),
    )
}

/// Renders whichever view state the page is in.
pub fn body(state: ViewState<PortfolioDocument>, source: &DocumentSource) -> AnyView {
    match state {
        ViewState::Loading => loader::component(source.loading_message).into_any(),
        ViewState::Failed(message) | ViewState::Empty(message) => notice::component(message).into_any(),
        ViewState::Populated(document) => grid(document.items).into_any(),
    }
}

/// Renders one card per item, in document order.
pub fn grid(items: Vec<PortfolioItem>) -> impl IntoView {
    div()
        .class("grid grid-cols-1 gap-8 md:grid-cols-[repeat(auto-fit,minmax(400px,1fr))]")
        .child(items.into_iter().map(card).collect::<Vec<_>>())
}

fn card(item: PortfolioItem) -> impl IntoView {
    div()
        .class("portfolio-card p-8 rounded-2xl border-2 border-transparent transition-all duration-300 bg-tint hover:-translate-y-1 hover:shadow-xl hover:border-accent")
        .child((
            div().class("mb-4 text-2xl font-bold text-gray-800").child(item.title),
            div().class("mb-5 leading-relaxed text-gray-600").child(item.summary),
            a().href(item.url)
                .target("_blank")
                .rel("noopener noreferrer")
                .class("inline-flex gap-2 items-center py-2.5 px-5 font-medium text-white rounded-full transition-all duration-300 bg-gradient-to-br from-accent to-accent-deep hover:translate-x-1")
                .child((span().child("🔗"), "프로젝트 보기")),
        ))
}
