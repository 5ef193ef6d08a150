// src/types/personal_info.rs
//! Candidate profile used to personalize generated drafts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub university: String,
    pub degree: String,
    pub skills: Vec<String>,
    pub linkedin: String,
    pub github: String,
    pub email: String,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
}

impl PersonalInfo {
    /// True when nothing has been filled in yet
    pub fn is_empty(&self) -> bool {
        *self == PersonalInfo::default()
    }

    /// Parse a comma separated skills field, dropping blanks
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
