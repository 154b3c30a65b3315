use leptos::{
    html::{h2, section},
    prelude::*,
};

/// A white-card content section with an accent-underlined heading.
pub fn component<C>(title: &'static str, children: C) -> impl IntoView
where
    C: IntoView,
{
    section()
        .class("p-5 border-b border-gray-100 md:p-10 last:border-b-0")
        .child((
            h2().class("relative pb-2.5 mb-8 text-3xl text-accent after:absolute after:bottom-0 after:left-0 after:h-[3px] after:w-[50px] after:rounded-sm after:bg-gradient-to-r after:from-accent after:to-accent-deep")
                .child(title),
            children,
        ))
}
