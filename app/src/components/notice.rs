use leptos::{
    html::{div, p},
    prelude::*,
};

/// Centered message panel used when a document has nothing to show or could
/// not be loaded.
pub fn component(message: &'static str) -> impl IntoView {
    div()
        .class("notice py-16 px-5 text-center text-gray-500")
        .child(p().child(message))
}
