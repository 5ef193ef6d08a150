// src/types/job_posting.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting text picked off a page, stamped with when it was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedJobPosting {
    pub text: String,
    pub extracted_at: DateTime<Utc>,
}

impl ExtractedJobPosting {
    pub fn new(text: String) -> Self {
        Self {
            text,
            extracted_at: Utc::now(),
        }
    }
}

/// Where the extractor found its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    Selector,
    Selection,
    MainContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub source: ExtractionSource,
    /// Selector that matched, for `ExtractionSource::Selector`
    pub selector: Option<&'static str>,
}
