//! This module defines the `home` component, the static landing page of the
//! site.
//!
//! It fetches nothing: it shows the profile picture and greeting, and links to
//! the portfolio and resume pages.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Paths the landing page navigates to, in display order.
pub const NAVIGATION: [(&str, &str, &str); 2] = [
    ("/portfolio", "💼", "Portfolio"),
    ("/resume", "📄", "Resume"),
];

pub fn component() -> impl IntoView {
    view! {
        <Title text="Jinny \u{2013} Backend Developer"/>
        <div class="flex flex-col justify-center items-center p-5 min-h-screen bg-gradient-to-br from-accent to-accent-deep">
            <div class="text-center animate-fade-in-up">
                <div class="overflow-hidden relative mx-auto mb-8 rounded-full border-4 shadow-xl transition-transform duration-300 size-[200px] border-white/30 animate-float hover:scale-105">
                    <img
                        src="/hyunsoojin.jpg"
                        alt="Profile Picture"
                        class="object-cover w-full h-full transition-transform duration-300 hover:scale-110"
                    />
                </div>
                <h1 class="mb-4 text-4xl text-white md:text-5xl text-shadow animate-fade-in-up [animation-delay:0.2s]">
                    "안녕하세요, Jinny입니다"
                </h1>
                <p class="mb-10 text-lg md:text-xl text-white/90 animate-fade-in-up [animation-delay:0.4s]">
                    "안정적인 웹 서비스를 개발하는 백엔드 개발자"
                </p>
                <nav class="flex flex-col gap-5 md:flex-row md:gap-8 animate-fade-in-up [animation-delay:0.6s]">
                    {NAVIGATION
                        .into_iter()
                        .map(|(href, icon, label)| {
                            view! {
                                <A href=href attr:class="nav-link flex gap-2.5 items-center py-4 px-8 text-lg font-semibold text-white rounded-full border-2 transition-all duration-300 bg-white/10 border-white/30 backdrop-blur-md hover:-translate-y-1 hover:bg-white/20 hover:border-white/50 hover:shadow-xl">
                                    <span class="text-xl">{icon}</span>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_targets() {
        let targets: Vec<_> = NAVIGATION.iter().map(|(href, _, _)| *href).collect();
        assert_eq!(targets, vec!["/portfolio", "/resume"]);
    }
}
