//! Reusable building blocks shared by the pages of the site.
//!
//! Each sub-module renders one piece of chrome: the not-found page, the
//! loading indicator, the message panel used for empty and failed documents,
//! and the titled content section.

pub mod error_template;
pub mod loader;
pub mod notice;
pub mod section;
