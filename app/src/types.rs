//! Typed projections of the remote JSON documents rendered by the portfolio
//! and resume pages.
//!
//! The documents are published without a schema, so every field is pulled out
//! of the raw `serde_json::Value` on its own: a missing or wrong-typed field
//! falls back to the empty value of its type and never prevents its siblings
//! from being read. Only a document whose root is not a JSON object is
//! rejected outright.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// The root of a fetched document was not a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a JSON object at the document root, found {0}")]
pub struct ShapeError(pub &'static str);

/// A document that can be rendered by one of the remote pages.
pub trait Document: TryFrom<Value, Error = ShapeError> {
    /// Whether the primary collection of the document holds nothing to show.
    fn is_empty(&self) -> bool {
        false
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn root_object(value: Value) -> Result<Map<String, Value>, ShapeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ShapeError(kind_of(&other))),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .unwrap_or_default()
}

fn list_field<T>(value: &Value, key: &str, parse: impl Fn(&Value) -> T) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(parse).collect())
        .unwrap_or_default()
}

fn string_list_field(value: &Value, key: &str) -> Vec<String> {
    list_field(value, key, |item| {
        item.as_str().map(ToOwned::to_owned).unwrap_or_default()
    })
}

/// A single project card on the portfolio page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl PortfolioItem {
    pub fn from_json(value: &Value) -> Self {
        Self {
            title: string_field(value, "title"),
            summary: string_field(value, "summary"),
            url: string_field(value, "url"),
        }
    }
}

/// `{"portfolio": [PortfolioItem, ...]}`, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct PortfolioDocument {
    pub items: Vec<PortfolioItem>,
}

impl PortfolioDocument {
    pub fn from_json(value: &Value) -> Self {
        Self {
            items: list_field(value, "portfolio", PortfolioItem::from_json),
        }
    }
}

impl TryFrom<Value> for PortfolioDocument {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let root = Value::Object(root_object(value)?);
        Ok(Self::from_json(&root))
    }
}

impl Document for PortfolioDocument {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Project {
    pub fn from_json(value: &Value) -> Self {
        Self {
            title: string_field(value, "title"),
            description: string_field(value, "description"),
            tags: string_list_field(value, "tags"),
        }
    }
}

/// The two shapes a work-experience entry can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceDetail {
    /// The entry lists its own projects, each carrying its tags.
    MultiProject(Vec<Project>),
    /// The entry carries one description and one tag list directly.
    SingleDescription { description: String, tags: Vec<String> },
}

impl Default for ExperienceDetail {
    fn default() -> Self {
        Self::SingleDescription {
            description: String::new(),
            tags: Vec::new(),
        }
    }
}

impl ExperienceDetail {
    /// Picks the variant by the presence of `projects`. An explicit `null`
    /// counts as absent; a present value that is not an array still selects
    /// the project list, which is then empty.
    pub fn from_json(value: &Value) -> Self {
        match value.get("projects") {
            None | Some(Value::Null) => Self::SingleDescription {
                description: string_field(value, "description"),
                tags: string_list_field(value, "tags"),
            },
            Some(_) => Self::MultiProject(list_field(value, "projects", Project::from_json)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub duration: String,
    pub detail: ExperienceDetail,
}

impl Experience {
    pub fn from_json(value: &Value) -> Self {
        Self {
            company: string_field(value, "company"),
            title: string_field(value, "title"),
            duration: string_field(value, "duration"),
            detail: ExperienceDetail::from_json(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Award {
    pub title: String,
    pub date: String,
}

impl Award {
    pub fn from_json(value: &Value) -> Self {
        Self {
            title: string_field(value, "title"),
            date: string_field(value, "date"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Education {
    pub title: String,
    pub department: String,
    pub details: String,
}

impl Education {
    pub fn from_json(value: &Value) -> Self {
        Self {
            title: string_field(value, "title"),
            department: string_field(value, "department"),
            details: string_field(value, "details"),
        }
    }
}

/// The flat resume document. It has no empty state: a document with nothing
/// in it renders as a page of blank fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ResumeDocument {
    pub name: String,
    pub subtitle: String,
    pub email: String,
    pub github: String,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub awards: Vec<Award>,
    pub education: Vec<Education>,
}

impl ResumeDocument {
    pub fn from_json(value: &Value) -> Self {
        Self {
            name: string_field(value, "name"),
            subtitle: string_field(value, "subtitle"),
            email: string_field(value, "email"),
            github: string_field(value, "github"),
            experience: list_field(value, "experienceData", Experience::from_json),
            skills: string_list_field(value, "skillsData"),
            awards: list_field(value, "awardsData", Award::from_json),
            education: list_field(value, "educationData", Education::from_json),
        }
    }
}

impl TryFrom<Value> for ResumeDocument {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let root = Value::Object(root_object(value)?);
        Ok(Self::from_json(&root))
    }
}

impl Document for ResumeDocument {}
