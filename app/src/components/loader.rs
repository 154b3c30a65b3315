//! This module defines the `loader` component, which is shown while a remote
//! document is still being fetched.

use leptos::{
    html::{div, p},
    prelude::*,
};

/// Renders a spinner with a page-specific loading message.
pub fn component(message: &'static str) -> impl IntoView {
    div()
        .class("loader flex flex-col gap-3 justify-center items-center h-[200px] text-accent text-lg")
        .child((
            div().class("rounded-full border-4 animate-spin size-8 border-accent/30 border-t-accent"),
            p().child(message),
        ))
}
