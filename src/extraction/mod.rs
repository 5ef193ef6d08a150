// src/extraction/mod.rs
//! Finding job posting text in an HTML page

pub mod extractor;
pub mod selectors;
pub mod text;

pub use extractor::{JobPostingExtractor, PageFetcher};
pub use selectors::{SelectorRule, SiteHint, JOB_DESCRIPTION_RULES};
pub use text::normalize_whitespace;
