//! This module defines the `resume` component, which renders the remote resume
//! document: contact header, work experience, skills, education and awards.
//!
//! Unlike the portfolio the resume has no empty state. Once the fetch succeeds
//! every section is rendered, and absent fields simply show up blank.

use leptos::{
    html::{a, br, div, h1, header, main, p, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    api::{DocumentSource, RESUME_SOURCE, ViewState, use_remote_document},
    components::{loader, notice, section},
    types::{Award, Education, Experience, ExperienceDetail, Project, ResumeDocument},
};

const ABOUT_ME: [&str; 3] = [
    "운영, 개발 모든 요소에 있어서 가리지 않고 최선을 다하는 개발자입니다.",
    "기술적으로 부족한 부분에 대해서 스터디와 교육과정 이수, 온라인 강의 등을 통해",
    "기술력을 높이는 데에도 힘쓰고 있습니다.",
];

/// Renders the resume page.
pub fn component() -> impl IntoView {
    let state = use_remote_document::<ResumeDocument>(RESUME_SOURCE);

    div().class("min-h-screen bg-gradient-to-br from-accent to-accent-deep").child(
        div().class("p-5 mx-auto max-w-[1200px]").child((
            Title(TitleProps::builder().text("Resume").build()),
            move || body(state.get(), &RESUME_SOURCE),
        )),
    )
}

/// Renders whichever view state the page is in. The header and content card
/// are only shown once the document is available.
pub fn body(state: ViewState<ResumeDocument>, source: &DocumentSource) -> AnyView {
    match state {
        ViewState::Loading => status_card(loader::component(source.loading_message)).into_any(),
        ViewState::Failed(message) | ViewState::Empty(message) => {
            status_card(notice::component(message)).into_any()
        }
        ViewState::Populated(document) => resume(document).into_any(),
    }
}

fn status_card<C: IntoView>(content: C) -> impl IntoView {
    main()
        .class("overflow-hidden my-10 bg-white rounded-[20px] shadow-2xl")
        .child(content)
}

/// Renders a fully loaded resume.
pub fn resume(document: ResumeDocument) -> impl IntoView {
    let ResumeDocument {
        name,
        subtitle,
        email,
        github,
        experience,
        skills,
        awards,
        education,
    } = document;

    (
        header().class("py-16 mb-10 text-center text-white").child((
            h1().class("resume-name mb-2.5 text-4xl md:text-6xl text-shadow animate-fade-in-down").child(name),
            p().class("resume-subtitle mb-8 text-xl opacity-90 animate-fade-in-up [animation-delay:0.3s]").child(subtitle),
            div().class("flex flex-col gap-8 items-center md:flex-row md:justify-center animate-fade-in-up [animation-delay:0.6s]").child((
                a().href(format!("mailto:{email}"))
                    .class("contact-link py-3 px-6 font-medium text-white rounded-full border transition-all duration-300 bg-white/20 border-white/30 backdrop-blur-md hover:-translate-y-0.5 hover:bg-white/30")
                    .child("📧 Email"),
                a().href(github)
                    .target("_blank")
                    .rel("noopener noreferrer")
                    .class("contact-link py-3 px-6 font-medium text-white rounded-full border transition-all duration-300 bg-white/20 border-white/30 backdrop-blur-md hover:-translate-y-0.5 hover:bg-white/30")
                    .child("💻 GitHub"),
            )),
        )),
        main().class("overflow-hidden mb-10 bg-white rounded-[20px] shadow-2xl animate-fade-in-up [animation-delay:0.9s]").child((
            section::component(
                "About Me",
                p().class("mx-auto max-w-3xl text-lg text-center text-gray-600").child(
                    ABOUT_ME
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| (line, (i + 1 < ABOUT_ME.len()).then(br)))
                        .collect::<Vec<_>>(),
                ),
            ),
            section::component(
                "Work Experience",
                experience.into_iter().map(experience_entry).collect::<Vec<_>>(),
            ),
            section::component(
                "Technical Skills",
                div().class("grid grid-cols-[repeat(auto-fit,minmax(120px,1fr))] gap-4 md:grid-cols-[repeat(auto-fit,minmax(150px,1fr))]")
                    .child(skills.into_iter().map(skill_chip).collect::<Vec<_>>()),
            ),
            (!education.is_empty()).then(|| {
                section::component(
                    "Education",
                    education.into_iter().map(education_entry).collect::<Vec<_>>(),
                )
            }),
            section::component(
                "Awards & Certifications",
                awards.into_iter().map(award_entry).collect::<Vec<_>>(),
            ),
        )),
    )
}

/// Renders one work-experience entry. The variant was fixed when the document
/// was parsed; only its fields are consulted here.
pub fn experience_entry(experience: Experience) -> impl IntoView {
    let detail = match experience.detail {
        ExperienceDetail::MultiProject(projects) => div()
            .class("project-list mt-5")
            .child(projects.into_iter().map(project_entry).collect::<Vec<_>>())
            .into_any(),
        ExperienceDetail::SingleDescription { description, tags } => (
            div().class("single-description mb-2.5 text-gray-600").child(description),
            tag_list(tags),
        )
            .into_any(),
    };

    div()
        .class("experience-entry p-8 mb-10 rounded-r-xl border-l-4 transition-all duration-300 border-accent bg-tint animate-slide-in-left hover:translate-x-1 hover:shadow-lg")
        .child((
            div().class("flex flex-col flex-wrap gap-2.5 justify-between items-start mb-4 md:flex-row").child((
                div().child((
                    div().class("text-xl font-bold text-gray-800").child(experience.title),
                    div().class("text-lg font-semibold text-accent").child(experience.company),
                )),
                div().class("py-1 px-3 text-sm text-gray-500 rounded-2xl bg-tint-strong").child(experience.duration),
            )),
            detail,
        ))
}

fn project_entry(project: Project) -> impl IntoView {
    div()
        .class("project-entry p-5 mb-5 bg-white rounded-lg shadow-sm transition-all duration-300 hover:-translate-y-0.5 hover:shadow-lg")
        .child((
            div().class("mb-2 font-bold text-gray-800").child(project.title),
            div().class("mb-2.5 text-gray-600").child(project.description),
            tag_list(project.tags),
        ))
}

fn tag_list(tags: Vec<String>) -> impl IntoView {
    div().class("flex flex-wrap gap-2 mt-4").child(
        tags.into_iter()
            .map(|tag| {
                span()
                    .class("tech-tag py-1 px-3 text-sm font-medium text-white rounded-full transition-all duration-300 bg-gradient-to-br from-accent to-accent-deep hover:scale-105")
                    .child(tag)
            })
            .collect::<Vec<_>>(),
    )
}

fn skill_chip(skill: String) -> impl IntoView {
    div()
        .class("skill-chip p-4 font-medium text-center text-gray-800 rounded-xl border-2 border-transparent transition-all duration-300 cursor-pointer bg-tint hover:-translate-y-0.5 hover:border-accent hover:bg-tint-strong")
        .child(skill)
}

fn education_entry(education: Education) -> impl IntoView {
    div().class("education-entry p-6 mb-5 rounded-xl bg-tint").child((
        div().class("mb-1 text-xl font-bold text-gray-800").child(education.title),
        div().class("text-gray-600").child(education.department),
        div().class("text-gray-600").child(education.details),
    ))
}

fn award_entry(award: Award) -> impl IntoView {
    div()
        .class("award-entry p-5 mb-4 rounded-xl border-l-4 transition-all duration-300 border-accent bg-gradient-to-br from-accent/10 to-accent-deep/10 hover:translate-x-1")
        .child((
            div().class("mb-1 font-bold text-gray-800").child(award.title),
            div().class("text-sm text-gray-500").child(award.date),
        ))
}
