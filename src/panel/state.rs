// src/panel/state.rs
use std::fmt;

/// Lifecycle of one draft: `Idle -> Generating -> Displayed | Failed`.
/// `Displayed` and `Failed` go back to `Generating` on resubmission; clearing
/// returns to `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    Generating,
    Displayed,
    Failed,
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelState::Idle => "idle",
            PanelState::Generating => "generating",
            PanelState::Displayed => "displayed",
            PanelState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The user-editable fields of the panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelForm {
    pub job_posting: String,
    pub recipient: String,
    pub additional_context: String,
    pub existing_email: String,
}

impl PanelForm {
    pub fn clear(&mut self) {
        *self = PanelForm::default();
    }

    pub fn recipient(&self) -> Option<&str> {
        non_blank(&self.recipient)
    }

    pub fn additional_context(&self) -> Option<&str> {
        non_blank(&self.additional_context)
    }

    pub fn existing_email(&self) -> Option<&str> {
        non_blank(&self.existing_email)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
