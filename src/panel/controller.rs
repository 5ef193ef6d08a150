// src/panel/controller.rs
use anyhow::Result;
use tracing::{error, info};

use super::state::{PanelForm, PanelState};
use crate::core::{keys, EmailBackend, LocalStore};
use crate::error::MailerError;
use crate::mail::{LaunchOutcome, MailLauncher};
use crate::notifier::{Notice, Notifier};
use crate::types::draft::PLACEHOLDER;
use crate::types::{EmailDraft, ExtractedJobPosting, GenerateEmailRequest, PersonalInfo};

/// Where a restored job posting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoredFrom {
    Extraction,
    SavedDraft,
}

/// Owns the panel's state. The interface layer only edits fields and calls
/// the intent methods (`submit`, `clear`, `launch_*`).
pub struct PanelController<'a> {
    backend: &'a dyn EmailBackend,
    notifier: &'a dyn Notifier,
    store: &'a LocalStore,
    form: PanelForm,
    profile: Option<PersonalInfo>,
    state: PanelState,
    output: Option<EmailDraft>,
}

impl<'a> PanelController<'a> {
    pub fn new(
        backend: &'a dyn EmailBackend,
        notifier: &'a dyn Notifier,
        store: &'a LocalStore,
    ) -> Self {
        Self {
            backend,
            notifier,
            store,
            form: PanelForm::default(),
            profile: None,
            state: PanelState::Idle,
            output: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn form(&self) -> &PanelForm {
        &self.form
    }

    /// Whatever is in the output area: the draft, the error draft, or nothing
    pub fn output(&self) -> Option<&EmailDraft> {
        self.output.as_ref()
    }

    pub fn rendered_output(&self) -> String {
        self.output
            .as_ref()
            .map(EmailDraft::render)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Profile attached to requests; an empty profile is never sent
    pub fn set_profile(&mut self, profile: PersonalInfo) {
        self.profile = (!profile.is_empty()).then_some(profile);
    }

    /// Edit the job posting and remember it across sessions. The edited text
    /// supersedes any earlier extraction.
    pub async fn set_job_posting(&mut self, text: impl Into<String>) -> Result<()> {
        self.form.job_posting = text.into();
        self.store
            .set(keys::SAVED_JOB_POSTING, &self.form.job_posting)
            .await?;
        self.store.remove(keys::EXTRACTED_JOB_POSTING).await?;
        Ok(())
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.form.recipient = recipient.into();
    }

    pub fn set_additional_context(&mut self, context: impl Into<String>) {
        self.form.additional_context = context.into();
    }

    pub fn set_existing_email(&mut self, existing: impl Into<String>) {
        self.form.existing_email = existing.into();
    }

    /// Pre-fill the job posting from an extraction newer than the last edit,
    /// else the last typed text
    pub async fn restore_job_posting(&mut self) -> Result<Option<RestoredFrom>> {
        if let Some(extracted) = self
            .store
            .get::<ExtractedJobPosting>(keys::EXTRACTED_JOB_POSTING)
            .await?
        {
            if !extracted.text.trim().is_empty() {
                info!("Restored job posting extracted at {}", extracted.extracted_at);
                self.form.job_posting = extracted.text;
                return Ok(Some(RestoredFrom::Extraction));
            }
        }

        if let Some(saved) = self.store.get::<String>(keys::SAVED_JOB_POSTING).await? {
            if !saved.trim().is_empty() {
                self.form.job_posting = saved;
                return Ok(Some(RestoredFrom::SavedDraft));
            }
        }

        Ok(None)
    }

    pub fn submit_enabled(&self) -> bool {
        self.state != PanelState::Generating
    }

    pub fn regenerate_enabled(&self) -> bool {
        self.submit_enabled() && self.form.existing_email().is_some()
    }

    /// Mail launch only works off a successful generation
    pub fn mail_actions_enabled(&self) -> bool {
        self.state == PanelState::Displayed && self.output.is_some()
    }

    fn build_request(&self) -> Result<GenerateEmailRequest, MailerError> {
        let job_posting = self.form.job_posting.trim();
        if job_posting.is_empty() {
            return Err(MailerError::EmptyJobPosting);
        }

        Ok(GenerateEmailRequest {
            job_posting: job_posting.to_string(),
            additional_context: self.form.additional_context().map(str::to_string),
            existing_email: self.form.existing_email().map(str::to_string),
            personal_info: self.profile.clone(),
        })
    }

    /// Generate (or regenerate) a draft. Validation failures leave the state
    /// untouched; backend failures end in `Failed` with the error draft shown.
    pub async fn submit(&mut self) -> Result<PanelState, MailerError> {
        if !self.submit_enabled() {
            return Ok(self.state);
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => {
                self.notifier.notify(Notice::error(e.to_string()));
                return Err(e);
            }
        };

        self.state = PanelState::Generating;
        self.notifier
            .notify(Notice::info("Generating your personalized email..."));

        let result = self
            .backend
            .generate_email(&request)
            .await
            .and_then(|response| response.into_draft().map_err(anyhow::Error::from));

        match result {
            Ok(draft) => {
                info!("Draft generated: {}", draft.subject);
                self.output = Some(draft);
                self.state = PanelState::Displayed;
                self.notifier
                    .notify(Notice::success("Email generated successfully!"));
            }
            Err(e) => {
                error!("Error generating email: {:#}", e);
                self.output = Some(EmailDraft::error_placeholder());
                self.state = PanelState::Failed;
                self.notifier.notify(Notice::error(format!("Error: {:#}", e)));
            }
        }

        info!("Panel is now {}", self.state);
        Ok(self.state)
    }

    /// Reset to `Idle`: fields, draft and the remembered job posting are wiped
    pub async fn clear(&mut self) -> Result<()> {
        self.form.clear();
        self.output = None;
        self.state = PanelState::Idle;
        info!("Panel is now {}", self.state);
        self.notifier.clear();

        self.store.remove(keys::SAVED_JOB_POSTING).await?;
        self.store.remove(keys::EXTRACTED_JOB_POSTING).await?;
        Ok(())
    }

    fn actionable_draft(&self) -> Result<&EmailDraft, MailerError> {
        match self.output.as_ref() {
            Some(draft) if self.mail_actions_enabled() => Ok(draft),
            _ => {
                self.notifier
                    .notify(Notice::error(MailerError::NoDraft.to_string()));
                Err(MailerError::NoDraft)
            }
        }
    }

    pub async fn launch_web(
        &self,
        launcher: &MailLauncher<'_>,
    ) -> Result<LaunchOutcome, MailerError> {
        let draft = self.actionable_draft()?;
        Ok(launcher.open_web(draft, self.form.recipient()).await)
    }

    pub fn launch_mail_client(
        &self,
        launcher: &MailLauncher<'_>,
    ) -> Result<LaunchOutcome, MailerError> {
        let draft = self.actionable_draft()?;
        Ok(launcher.open_mail_client(draft, self.form.recipient()))
    }
}
