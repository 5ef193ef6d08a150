// src/types/mod.rs
pub mod draft;
pub mod job_posting;
pub mod personal_info;

pub use draft::{EmailDraft, GenerateEmailRequest, GenerateEmailResponse, HealthStatus};
pub use job_posting::{ExtractedJobPosting, Extraction, ExtractionSource};
pub use personal_info::{Experience, PersonalInfo, Project};
