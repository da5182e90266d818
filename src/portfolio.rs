use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Validated site content, parsed once from the embedded document.
pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("embedded portfolio content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Portfolio content not found")]
    Missing,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate project id {0}")]
    DuplicateProjectId(ProjectId),
    #[error("Project {0} has no categories")]
    EmptyCategory(ProjectId),
    #[error("Project {0} lists category {1:?} more than once")]
    DuplicateCategory(ProjectId, String),
    #[error("Resume path must be absolute, got {0:?}")]
    InvalidResumePath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub client: Option<String>,
    pub category: Vec<String>,
    pub description: String,
    pub impact: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Project {
    pub fn in_category(&self, label: &str) -> bool {
        self.category.iter().any(|c| c == label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub availability: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub photo: String,
}

/// Downloadable resume: served from `public/` at `path`, saved as `filename`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAsset {
    pub path: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: Personal,
    pub resume: ResumeAsset,
    pub summary: String,
    pub expertise: Vec<String>,
    pub experience: Vec<Job>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
}

impl Portfolio {
    /// Parse and validate the embedded content document.
    pub fn load() -> Result<Self, PortfolioError> {
        let file = Content::get(PORTFOLIO_FILE).ok_or(PortfolioError::Missing)?;
        Self::from_slice(&file.data)
    }

    fn from_slice(data: &[u8]) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio = serde_json::from_slice(data)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(PortfolioError::DuplicateProjectId(project.id));
            }
            if project.category.is_empty() {
                return Err(PortfolioError::EmptyCategory(project.id));
            }
            let mut labels = HashSet::new();
            if let Some(dup) = project.category.iter().find(|c| !labels.insert(c.as_str())) {
                return Err(PortfolioError::DuplicateCategory(project.id, dup.clone()));
            }
        }
        if !self.resume.path.starts_with('/') {
            return Err(PortfolioError::InvalidResumePath(self.resume.path.clone()));
        }
        Ok(())
    }
}
