// src/error.rs
use thiserror::Error;

/// User-visible failure categories. Everything here degrades to a message and
/// a retry path; none of it is fatal to the process.
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Please paste a job posting first.")]
    EmptyJobPosting,

    #[error("No job posting found on this page. Please select the text manually.")]
    ExtractionMiss,

    #[error("Backend returned error {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("No subject or body received from server")]
    IncompleteDraft,

    #[error("No email generated yet.")]
    NoDraft,

    #[error("Unsupported attachment type: {0}")]
    UnsupportedAttachment(String),
}
