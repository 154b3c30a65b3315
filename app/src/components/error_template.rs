//! This module defines the `error_template` component, rendered for any path
//! the router does not know about.
//!
//! On the server it also propagates the matching HTTP status code.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s held by `errors`, ignoring anything else.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page for the given errors.
///
/// On the server the status code of the first `AppError` is written to the
/// response.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div()
        .class("grid place-content-center px-4 min-h-screen text-white antialiased bg-gradient-to-br from-accent to-accent-deep")
        .child((
            h1().class("mb-6 text-4xl text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
            errors
                .into_iter()
                .map(|error| {
                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest uppercase text-white/80")
                            .child(format!("{}| {error}", error.status_code())),
                        div().class("mt-6 text-center hover:underline").child(
                            A(AProps::builder()
                                .href("/")
                                .children(ToChildren::to_children(|| "← 메인으로 돌아가기"))
                                .build()),
                        ),
                    ))
                })
                .collect::<Vec<_>>(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_app_errors_extracts_only_app_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        let found = app_errors(errors);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status_code(), StatusCode::NOT_FOUND);
    }
}
