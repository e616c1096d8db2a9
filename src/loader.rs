//! Data Loader
//!
//! Fetches the four data documents concurrently and decodes them into an
//! immutable [`SiteData`] snapshot. All-or-nothing: the first fetch or
//! decode failure aborts the join and nothing is returned.
//!
//! No retry, no timeout.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, SiteError};
use crate::model::{Experience, Profile, Project, Publication};

/// The fixed set of data documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Profile,
    Experience,
    Projects,
    Publications,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Profile,
        Resource::Experience,
        Resource::Projects,
        Resource::Publications,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Profile => "profile",
            Resource::Experience => "experience",
            Resource::Projects => "projects",
            Resource::Publications => "publications",
        }
    }

    /// Origin-relative path, e.g. `data/profile.json`.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Profile => "data/profile.json",
            Resource::Experience => "data/experience.json",
            Resource::Projects => "data/projects.json",
            Resource::Publications => "data/publications.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the renderers read. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteData {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
}

// ============================================================================
// Fetch seam
// ============================================================================

/// Retrieves the raw bytes of an origin-relative path.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Reads documents from a directory standing in for the site origin.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetch for FsFetcher {
    async fn fetch(&self, path: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(path)).await
    }
}

/// Serves documents from memory. Unknown paths are `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    files: FxHashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), body.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }
}

impl Fetch for MemoryFetcher {
    async fn fetch(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)))
    }
}

// ============================================================================
// Loading
// ============================================================================

async fn fetch_json<F, T>(fetcher: &F, resource: Resource) -> Result<T>
where
    F: Fetch,
    T: DeserializeOwned,
{
    let bytes = fetcher
        .fetch(resource.path())
        .await
        .map_err(|source| SiteError::Fetch { resource, source })?;

    let value = serde_json::from_slice(&bytes)
        .map_err(|source| SiteError::Decode { resource, source })?;

    tracing::debug!("Decoded {} ({} bytes)", resource, bytes.len());
    Ok(value)
}

/// Fetch and decode all four documents concurrently.
pub async fn load_site_data<F: Fetch>(fetcher: &F) -> Result<SiteData> {
    let (profile, experience, projects, publications) = tokio::try_join!(
        fetch_json::<_, Profile>(fetcher, Resource::Profile),
        fetch_json::<_, Vec<Experience>>(fetcher, Resource::Experience),
        fetch_json::<_, Vec<Project>>(fetcher, Resource::Projects),
        fetch_json::<_, Vec<Publication>>(fetcher, Resource::Publications),
    )?;

    tracing::info!(
        "Loaded site data: {} jobs, {} projects, {} publications",
        experience.len(),
        projects.len(),
        publications.len()
    );

    Ok(SiteData {
        profile,
        experience,
        projects,
        publications,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const PROFILE: &str = r#"{
        "name": "Ada Lovelace",
        "role": "Research Engineer",
        "organization": "Analytical Engines Ltd",
        "avatar": "img/ada.jpg",
        "social": [
            {"name": "GitHub", "url": "https://github.com/ada", "icon": "fab fa-github"},
            {"name": "Email", "url": "mailto:ada@example.com", "icon": "fas fa-envelope"}
        ],
        "bio": "Writes programs for machines that do not exist yet.",
        "interests": ["Compilers", "Mathematics"],
        "education": [
            {"degree": "Mathematics", "institution": "Private tutoring", "year": 1833}
        ]
    }"#;

    pub const EXPERIENCE: &str = r#"[
        {"title": "Lead Programmer", "company": "Engine Works", "startDate": "2022-03-01",
         "endDate": "1999-01-01", "current": true, "description": ["Wrote the first loop"]},
        {"title": "Translator", "company": "Scientific Memoirs", "startDate": "2019-09",
         "endDate": "2021-12", "current": false, "description": ["Added notes A to G"]}
    ]"#;

    pub const PROJECTS: &str = r#"[
        {"title": "Bernoulli", "summary": "Computes Bernoulli numbers.", "image": "img/b.png",
         "externalLink": "https://example.com/bernoulli", "tags": ["math", "engine"]}
    ]"#;

    pub const PUBLICATIONS: &str = r#"[
        {"title": "Second", "authors": ["A"], "year": 2020, "venue": "V2", "type": "journal",
         "featured": true, "doi": "https://doi.org/10.2/b"},
        {"title": "First", "authors": ["A", "B"], "year": 2019, "venue": "V1", "type": "conference",
         "featured": true, "pdf": "papers/first.pdf"},
        {"title": "Hidden", "authors": ["C"], "year": 2021, "venue": "V3", "type": "journal",
         "featured": false}
    ]"#;

    pub fn complete_fetcher() -> MemoryFetcher {
        MemoryFetcher::new()
            .with_file(Resource::Profile.path(), PROFILE)
            .with_file(Resource::Experience.path(), EXPERIENCE)
            .with_file(Resource::Projects.path(), PROJECTS)
            .with_file(Resource::Publications.path(), PUBLICATIONS)
    }

    pub fn site_data() -> SiteData {
        SiteData {
            profile: serde_json::from_str(PROFILE).unwrap(),
            experience: serde_json::from_str(EXPERIENCE).unwrap(),
            projects: serde_json::from_str(PROJECTS).unwrap(),
            publications: serde_json::from_str(PUBLICATIONS).unwrap(),
        }
    }
}
