// projects.rs - Read-only project records looked up by picked identifier
use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_PROJECTS: &str = include_str!("../assets/projects.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub role: String,
    pub summary: String,
    /// Long description; falls back to the summary when empty
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// External link shown on the overlay
    #[serde(default, rename = "liveUrl")]
    pub link: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub wall_side: WallSide,
    pub z_position: f32,
}

impl ProjectRecord {
    pub fn long_description(&self) -> &str {
        if self.description.is_empty() {
            &self.summary
        } else {
            &self.description
        }
    }

    /// First three technologies joined for the placard
    pub fn placard_line(&self) -> String {
        self.tech_stack.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(" · ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub resume_path: String,
}

impl Default for PersonalDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            bio: String::new(),
            resume_path: "/resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRegistry {
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    personal: PersonalDetails,
}

impl ProjectRegistry {
    /// The placeholder set compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PROJECTS).context("parsing built-in projects")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading projects {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing projects {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(text)?;
        let mut seen = HashSet::new();
        for project in &registry.projects {
            if !seen.insert(project.id.as_str()) {
                bail!("duplicate project id '{}'", project.id);
            }
        }
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn personal(&self) -> &PersonalDetails {
        &self.personal
    }
}
