//! Portfolio profile document: data model and validation.
//!
//! A profile is a JSON document. [`validate_profile`] checks the required
//! structure, fills defaults for optional fields and then deserializes it into
//! [`Profile`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Top-level fields every profile document must carry.
pub const REQUIRED_FIELDS: [&str; 6] =
    ["name", "title", "bio", "projects", "contact", "color_scheme"];

/// Fields every project entry must carry.
pub const REQUIRED_PROJECT_FIELDS: [&str; 4] = ["name", "description", "url", "tech_stack"];

/// Keys every colour scheme must define.
pub const REQUIRED_COLOR_KEYS: [&str; 5] =
    ["primary", "secondary", "background", "text", "accent"];

/// Fields every social link must carry.
pub const REQUIRED_SOCIAL_FIELDS: [&str; 3] = ["name", "url", "icon"];

/// Full portfolio profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Headline shown under the name.
    pub title: String,
    /// Free-form biography.
    pub bio: String,
    /// Showcased projects, in display order.
    pub projects: Vec<Project>,
    /// Contact details.
    pub contact: Contact,
    /// Page colours.
    pub color_scheme: ColorScheme,
    /// Social links, possibly empty.
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Union of every project's tech stack, see
    /// [`aggregate_skills`](crate::aggregate_skills). Never read from the
    /// document.
    #[serde(skip_deserializing, default)]
    pub skills: Vec<String>,
}

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Source or landing page.
    pub url: String,
    /// Technology labels, matched by the project filter.
    pub tech_stack: Vec<String>,
    /// Screenshot URL, empty when there is none.
    #[serde(default)]
    pub screenshot: String,
    /// Live demo URL, empty when there is none.
    #[serde(default)]
    pub demo_url: String,
}

/// Contact block. Only `email` is mandatory; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact email address.
    pub email: String,
    /// Extra contact entries (phone, location, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page colours, rendered as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Primary brand colour.
    pub primary: String,
    /// Secondary brand colour.
    pub secondary: String,
    /// Page background.
    pub background: String,
    /// Body text colour.
    pub text: String,
    /// Accent colour.
    pub accent: String,
}

/// A link to an external social profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Network name.
    pub name: String,
    /// Profile URL.
    pub url: String,
    /// Icon class name.
    pub icon: String,
}

/// Why a profile document was rejected.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON, or a field has the wrong shape.
    #[error("malformed profile: {0}")]
    Json(#[from] serde_json::Error),
    /// A value that must be a JSON object is something else.
    #[error("{0} should be an object")]
    NotAnObject(&'static str),
    /// A required top-level field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// `projects` is not an array.
    #[error("projects should be a list")]
    ProjectsNotList,
    /// A project entry is not an object.
    #[error("project #{0} should be an object")]
    ProjectNotObject(usize),
    /// A project entry lacks a required field.
    #[error("project #{index} missing required field: {field}")]
    ProjectField {
        /// Position of the project in `projects`.
        index: usize,
        /// Missing field name.
        field: &'static str,
    },
    /// `contact` has no `email`.
    #[error("contact must include an email")]
    MissingEmail,
    /// `color_scheme` lacks one of [`REQUIRED_COLOR_KEYS`].
    #[error("color scheme missing: {0}")]
    ColorKey(&'static str),
    /// A social link is not an object.
    #[error("social link #{0} should be an object")]
    SocialNotObject(usize),
    /// A social link lacks a required field.
    #[error("social link #{index} missing required field: {field}")]
    SocialField {
        /// Position of the link in `social`.
        index: usize,
        /// Missing field name.
        field: &'static str,
    },
}

/// Parse and validate a profile from JSON text.
pub fn parse_profile(raw: &str) -> Result<Profile, ProfileError> {
    let value: Value = serde_json::from_str(raw)?;
    validate_profile(value)
}

/// Validate a profile document and sanitize its optional parts.
///
/// Checks run in document order and the first failure is reported:
/// top-level fields, then projects, contact, colour scheme and social links.
/// A project whose `tech_stack` is not a list gets an empty one; `screenshot`
/// and `demo_url` default to `""` when absent or not a string; a missing or
/// non-list `social` becomes empty. Any `skills` in the document is ignored.
pub fn validate_profile(mut value: Value) -> Result<Profile, ProfileError> {
    let root = value
        .as_object_mut()
        .ok_or(ProfileError::NotAnObject("profile"))?;

    if let Some(field) = missing_key(root, &REQUIRED_FIELDS) {
        return Err(ProfileError::MissingField(field));
    }

    let projects = root
        .get_mut("projects")
        .and_then(Value::as_array_mut)
        .ok_or(ProfileError::ProjectsNotList)?;
    for (index, project) in projects.iter_mut().enumerate() {
        sanitize_project(index, project)?;
    }

    let contact = root
        .get("contact")
        .and_then(Value::as_object)
        .ok_or(ProfileError::NotAnObject("contact"))?;
    if !contact.contains_key("email") {
        return Err(ProfileError::MissingEmail);
    }

    let colors = root
        .get("color_scheme")
        .and_then(Value::as_object)
        .ok_or(ProfileError::NotAnObject("color_scheme"))?;
    if let Some(key) = missing_key(colors, &REQUIRED_COLOR_KEYS) {
        return Err(ProfileError::ColorKey(key));
    }

    if let Some(Value::Array(links)) = root.get("social") {
        for (index, link) in links.iter().enumerate() {
            let link = link.as_object().ok_or(ProfileError::SocialNotObject(index))?;
            if let Some(field) = missing_key(link, &REQUIRED_SOCIAL_FIELDS) {
                return Err(ProfileError::SocialField {
                    index,
                    field,
                });
            }
        }
    } else {
        root.insert("social".to_string(), Value::Array(Vec::new()));
    }

    let profile: Profile = serde_json::from_value(value)?;
    tracing::debug!(
        projects = profile.projects.len(),
        social = profile.social.len(),
        "profile validated"
    );
    Ok(profile)
}

/// Read, parse and validate a profile file.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_profile(path: impl AsRef<std::path::Path>) -> Result<Profile, ProfileError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_profile(&raw)
}

fn sanitize_project(index: usize, project: &mut Value) -> Result<(), ProfileError> {
    let project = project
        .as_object_mut()
        .ok_or(ProfileError::ProjectNotObject(index))?;
    if let Some(field) = missing_key(project, &REQUIRED_PROJECT_FIELDS) {
        return Err(ProfileError::ProjectField {
            index,
            field,
        });
    }
    if !project.get("tech_stack").is_some_and(Value::is_array) {
        project.insert("tech_stack".to_string(), Value::Array(Vec::new()));
    }
    for optional in ["screenshot", "demo_url"] {
        if !project.get(optional).is_some_and(Value::is_string) {
            project.insert(optional.to_string(), Value::String(String::new()));
        }
    }
    Ok(())
}

fn missing_key(object: &Map<String, Value>, keys: &[&'static str]) -> Option<&'static str> {
    keys.iter().copied().find(|key| !object.contains_key(*key))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn minimal() -> Value {
        json!({
            "name": "Ada",
            "title": "Engineer",
            "bio": "Builds things.",
            "projects": [],
            "contact": { "email": "ada@example.com" },
            "color_scheme": {
                "primary": "#111", "secondary": "#222", "background": "#fff",
                "text": "#000", "accent": "#f60"
            }
        })
    }

    #[test]
    fn reports_first_missing_top_level_field() {
        let mut value = minimal();
        let root = value.as_object_mut().expect("object");
        root.remove("bio");
        root.remove("contact");
        let err = validate_profile(value).expect_err("must fail");
        assert!(matches!(err, ProfileError::MissingField("bio")));
    }

    #[test]
    fn missing_social_becomes_empty() {
        let profile = validate_profile(minimal()).expect("valid");
        assert!(profile.social.is_empty());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn non_list_social_becomes_empty() {
        let mut value = minimal();
        value["social"] = json!("github");
        let profile = validate_profile(value).expect("valid");
        assert!(profile.social.is_empty());
    }

    #[test]
    fn contact_keeps_extra_entries() {
        let mut value = minimal();
        value["contact"]["phone"] = json!("555-0100");
        let profile = validate_profile(value).expect("valid");
        assert_eq!(profile.contact.extra.get("phone"), Some(&json!("555-0100")));
    }

    #[test]
    fn document_skills_are_ignored() {
        let mut value = minimal();
        value["skills"] = json!({ "languages": ["rust"] });
        let profile = validate_profile(value).expect("valid");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn null_optional_project_fields_become_empty() {
        let mut value = minimal();
        value["projects"] = json!([{
            "name": "Loom", "description": "Cards", "url": "https://example.com/loom",
            "tech_stack": ["rust"], "screenshot": null, "demo_url": null
        }]);
        let profile = validate_profile(value).expect("valid");
        assert_eq!(profile.projects[0].screenshot, "");
        assert_eq!(profile.projects[0].demo_url, "");
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = validate_profile(json!([1, 2])).expect_err("must fail");
        assert!(matches!(err, ProfileError::NotAnObject("profile")));
    }
}
