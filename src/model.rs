//! Record types for the four data documents
//!
//! Decoded verbatim from `data/*.json`. No validation is applied beyond
//! what serde needs to build the structs.

use serde::{Deserialize, Deserializer};

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub avatar: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon font classes, e.g. "fab fa-github"
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    /// Either "2019" or 2019 in the source file
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
}

// ============================================================================
// Experience
// ============================================================================

/// One job on the timeline.
///
/// The timeline is rendered in file order, so `experience.json` must list
/// jobs newest-first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    /// When set, `end_date` is ignored and "Present" is shown.
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Vec<String>,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub image: String,
    pub external_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// Publications
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub year: i32,
    pub venue: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub pdf: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

impl Publication {
    /// PDF URL, treating an empty string as absent.
    pub fn pdf_url(&self) -> Option<&str> {
        non_empty(self.pdf.as_deref())
    }

    /// DOI URL, treating an empty string as absent.
    pub fn doi_url(&self) -> Option<&str> {
        non_empty(self.doi.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
