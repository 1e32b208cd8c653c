//! Static JSON content: profile, skills and projects.
//!
//! Content lives in three files under one directory. Records are read once
//! and never mutated, apart from the optional project shuffle on load.

use std::fs;
use std::path::Path;

use prism_common::ContentError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const PROFILE_FILE: &str = "profile.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const PROJECTS_FILE: &str = "projects.json";

/// Shown in place of the showcase when content cannot be loaded.
pub const OFFLINE_MESSAGE: &str = "PORTFOLIO IS CURRENTLY OFFLINE";

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    /// Proficiency from 1 to 10; the bar fills to `level * 10` percent.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub body: String,
    /// Image URLs in display order. The first one textures the 3D box.
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

impl Project {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

impl Content {
    /// Parse the three documents and validate the records.
    pub fn from_json(profile: &str, skills: &str, projects: &str) -> Result<Self, ContentError> {
        let content = Self {
            profile: parse(PROFILE_FILE, profile)?,
            skills: parse(SKILLS_FILE, skills)?,
            projects: parse(PROJECTS_FILE, projects)?,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::Invalid("no projects".into()));
        }
        for project in &self.projects {
            if project.images.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "project '{}' has no images",
                    project.title
                )));
            }
            let mut urls = project.images.iter().chain(&project.videos);
            if urls.any(|url| url.trim().is_empty()) {
                return Err(ContentError::Invalid(format!(
                    "project '{}' has an empty media url",
                    project.title
                )));
            }
        }
        for group in &self.skills {
            for skill in &group.skills {
                if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&skill.level) {
                    return Err(ContentError::Invalid(format!(
                        "skill '{}' has level {} (expected {MIN_SKILL_LEVEL}-{MAX_SKILL_LEVEL})",
                        skill.title, skill.level
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn shuffle_projects(&mut self, rng: &mut impl Rng) {
        self.projects.shuffle(rng);
    }

    /// Image counts per project, in order.
    pub fn image_counts(&self) -> Vec<usize> {
        self.projects.iter().map(Project::image_count).collect()
    }

    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().flat_map(|g| g.skills.iter())
    }
}

fn parse<T: DeserializeOwned>(file: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|e| ContentError::Parse {
        file: file.into(),
        message: e.to_string(),
    })
}

fn read(dir: &Path, file: &str) -> Result<String, ContentError> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|e| ContentError::Read(format!("{}: {e}", path.display())))
}

/// Load and validate the content under `dir`.
pub fn load_content(dir: &Path) -> Result<Content, ContentError> {
    let content = Content::from_json(
        &read(dir, PROFILE_FILE)?,
        &read(dir, SKILLS_FILE)?,
        &read(dir, PROJECTS_FILE)?,
    )?;
    info!(
        dir = %dir.display(),
        projects = content.projects.len(),
        skills = content.all_skills().count(),
        "content loaded"
    );
    Ok(content)
}

/// What the showcase section renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseStatus {
    Ready(Content),
    /// Content failed to load. Shown as a static message; there is no retry.
    Offline,
}

impl ShowcaseStatus {
    pub fn from_load(result: Result<Content, ContentError>) -> Self {
        match result {
            Ok(content) => ShowcaseStatus::Ready(content),
            Err(e) => {
                warn!(error = %e, "showcase offline");
                ShowcaseStatus::Offline
            }
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ShowcaseStatus::Ready(_) => None,
            ShowcaseStatus::Offline => Some(OFFLINE_MESSAGE),
        }
    }

    pub fn content(&self) -> Option<&Content> {
        match self {
            ShowcaseStatus::Ready(content) => Some(content),
            ShowcaseStatus::Offline => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PROFILE: &str = r#"{"name": "Ada", "headline": "motion engineer", "paragraphs": ["Hi."]}"#;
    const SKILLS: &str = r#"[{"category": "Web", "skills": [{"title": "CSS", "level": 10}, {"title": "GLSL", "level": 6}]}]"#;
    const PROJECTS: &str = r#"[
        {"title": "One", "tools": ["gsap"], "body": "<p>x</p>", "images": ["a.png", "b.png"], "videos": ["a.mp4"]},
        {"title": "Two", "images": ["c.png"]}
    ]"#;

    #[test]
    fn parses_all_documents() {
        let content = Content::from_json(PROFILE, SKILLS, PROJECTS).unwrap();
        assert_eq!(content.profile.name, "Ada");
        assert_eq!(content.image_counts(), vec![2, 1]);
        assert!(content.projects[0].has_videos());
        assert!(!content.projects[1].has_videos());
        assert!(content.projects[1].tools.is_empty());
        assert_eq!(content.all_skills().count(), 2);
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = Content::from_json(PROFILE, "[", PROJECTS).unwrap_err();
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, SKILLS_FILE),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_project_without_images() {
        let projects = r#"[{"title": "Empty", "images": []}]"#;
        let err = Content::from_json(PROFILE, SKILLS, projects).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
        assert!(err.to_string().contains("Empty"));
    }

    #[test]
    fn rejects_empty_media_urls() {
        let projects = r#"[{"title": "Blank", "images": ["a.png"], "videos": [""]}]"#;
        let err = Content::from_json(PROFILE, SKILLS, projects).unwrap_err();
        assert!(err.to_string().contains("Blank"));
        let projects = r#"[{"title": "Blank", "images": ["a.png", " "]}]"#;
        assert!(Content::from_json(PROFILE, SKILLS, projects).is_err());
    }

    #[test]
    fn rejects_out_of_range_skill_level() {
        let skills = r#"[{"category": "Web", "skills": [{"title": "CSS", "level": 11}]}]"#;
        assert!(matches!(
            Content::from_json(PROFILE, skills, PROJECTS),
            Err(ContentError::Invalid(_))
        ));
        let skills = r#"[{"category": "Web", "skills": [{"title": "CSS", "level": 0}]}]"#;
        assert!(Content::from_json(PROFILE, skills, PROJECTS).is_err());
    }

    #[test]
    fn rejects_empty_project_list() {
        assert!(Content::from_json(PROFILE, SKILLS, "[]").is_err());
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROFILE_FILE), PROFILE).unwrap();
        fs::write(dir.path().join(SKILLS_FILE), SKILLS).unwrap();
        fs::write(dir.path().join(PROJECTS_FILE), PROJECTS).unwrap();
        let content = load_content(dir.path()).unwrap();
        assert_eq!(content.projects.len(), 2);
    }

    #[test]
    fn missing_file_goes_offline() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_content(dir.path());
        assert!(matches!(result, Err(ContentError::Read(_))));
        let status = ShowcaseStatus::from_load(result);
        assert_eq!(status.message(), Some(OFFLINE_MESSAGE));
        assert!(status.content().is_none());
    }

    #[test]
    fn shuffle_keeps_every_project() {
        let mut content = Content::from_json(PROFILE, SKILLS, PROJECTS).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        content.shuffle_projects(&mut rng);
        let mut titles: Vec<_> = content.projects.iter().map(|p| p.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}
