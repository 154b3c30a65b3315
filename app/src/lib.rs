// Core application modules and components
use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
mod components;
mod home;
pub mod portfolio;
pub mod resume;
pub mod types;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("ko").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Jinny \u{2013} Portfolio & Resume").build()),
        )),
        body().class("overflow-x-hidden font-sans leading-relaxed text-gray-800").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <FlatRoutes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(AppError::NotFound);
                error_template::component(outside_errors)
            }>
                <Route path=StaticSegment("") view=home::component/>
                <Route path=StaticSegment("mainpage") view=home::component/>
                <Route path=StaticSegment("portfolio") view=portfolio::component/>
                <Route path=StaticSegment("resume") view=resume::component/>
            </FlatRoutes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("portfolio").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("portfolio").build();
        assert_eq!(options.site_addr.port(), 3000);
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1");
    }
}
