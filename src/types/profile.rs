// src/types/profile.rs
//! Candidate profile returned by the parsing service
//!
//! The service response is never validated against a schema. These types are a
//! lenient projection of whatever JSON came back: every field is optional and
//! anything of an unexpected shape is treated as absent.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub contact_info: Option<ContactInfo>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub role: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub graduation_year: Option<String>,
}

impl CandidateProfile {
    /// Project a raw service response. Never fails: a non-object yields an empty profile.
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: text_field(root, "name"),
            contact_info: root
                .get("contact_info")
                .and_then(Value::as_object)
                .map(ContactInfo::from_map),
            experience: entries(root, "experience")
                .map(|entry| Experience::from_map(entry.as_object()))
                .collect(),
            education: entries(root, "education")
                .map(|entry| Education::from_map(entry.as_object()))
                .collect(),
            skills: entries(root, "skills").filter_map(scalar_text).collect(),
        }
    }
}

impl ContactInfo {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            email: text_field(map, "email"),
            phone: text_field(map, "phone"),
            linkedin: text_field(map, "linkedin"),
            github: text_field(map, "github"),
        }
    }
}

impl Experience {
    fn from_map(map: Option<&Map<String, Value>>) -> Self {
        let Some(map) = map else {
            return Self::default();
        };
        Self {
            role: text_field(map, "role"),
            company: text_field(map, "company"),
            start_date: text_field(map, "start_date"),
            end_date: text_field(map, "end_date"),
            description: text_field(map, "description"),
        }
    }
}

impl Education {
    fn from_map(map: Option<&Map<String, Value>>) -> Self {
        let Some(map) = map else {
            return Self::default();
        };
        Self {
            institution: text_field(map, "institution"),
            degree: text_field(map, "degree"),
            graduation_year: text_field(map, "graduation_year"),
        }
    }
}

/// Treat `None` and `Some("")` alike when deciding whether to show a field.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn entries<'a>(map: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    map.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
