// src/types/draft.rs
//! Draft email and the wire shapes exchanged with the generation backend

use serde::{Deserialize, Serialize};

use crate::error::MailerError;
use crate::types::personal_info::PersonalInfo;

pub const DEFAULT_SUBJECT: &str = "Internship Application";
pub const ERROR_SUBJECT: &str = "Error";
pub const ERROR_BODY: &str = "Sorry, there was an error generating your email. Please try again.";
pub const PLACEHOLDER: &str = "Your personalized internship email will appear here...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Placeholder shown after a failed generation
    pub fn error_placeholder() -> Self {
        Self::new(ERROR_SUBJECT, ERROR_BODY)
    }

    /// Parse `Subject: ...` followed by the body. Every subject line is
    /// dropped from the body; the first one wins.
    pub fn from_raw_text(raw: &str) -> Self {
        let mut subject: Option<String> = None;
        let mut body_lines = Vec::new();

        for line in raw.lines() {
            match subject_line(line) {
                Some(found) => {
                    if subject.is_none() {
                        subject = Some(found.to_string());
                    }
                }
                None => body_lines.push(line),
            }
        }

        Self {
            subject: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            body: body_lines.join("\n").trim().to_string(),
        }
    }

    pub fn render(&self) -> String {
        format!("Subject: {}\n\n{}", self.subject, self.body)
    }
}

fn subject_line(line: &str) -> Option<&str> {
    let prefix = line.get(..8)?;
    if !prefix.eq_ignore_ascii_case("subject:") {
        return None;
    }
    let rest = line[8..].trim();
    (!rest.is_empty()).then_some(rest)
}

/// Body of `POST /generate-email`. Empty optional fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateEmailRequest {
    pub job_posting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateEmailResponse {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateEmailResponse {
    /// A draft is only usable when both fields came back non-empty
    pub fn into_draft(self) -> Result<EmailDraft, MailerError> {
        match (self.subject, self.body) {
            (Some(subject), Some(body)) if !subject.is_empty() && !body.is_empty() => {
                Ok(EmailDraft { subject, body })
            }
            _ => Err(MailerError::IncompleteDraft),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}
