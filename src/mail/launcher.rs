// src/mail/launcher.rs
use std::time::Duration;
use tracing::{info, warn};

use super::links::{mailto_url, web_compose_url};
use super::opener::{UrlOpener, WindowStatus};
use crate::notifier::{Notice, Notifier};
use crate::types::EmailDraft;

/// Wait before checking on an opened compose window. Only picks the status
/// message; nothing is retried or aborted.
pub const VERIFY_DELAY: Duration = Duration::from_secs(1);

pub const MANUAL_COPY_MESSAGE: &str =
    "Please copy the email and paste it into your mail client manually.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Web compose view opened and still up after the verification delay
    WebOpened,
    /// Web compose view opened but was already gone at verification
    WebClosed,
    /// Handed to the local mail client via `mailto:`
    MailClient,
    /// Nothing could be opened; the user has to copy the draft
    ManualCopy,
}

pub struct MailLauncher<'a> {
    opener: &'a dyn UrlOpener,
    notifier: &'a dyn Notifier,
    compose_url: String,
}

impl<'a> MailLauncher<'a> {
    pub fn new(opener: &'a dyn UrlOpener, notifier: &'a dyn Notifier, compose_url: String) -> Self {
        Self {
            opener,
            notifier,
            compose_url,
        }
    }

    /// Open the webmail compose deep link, dropping to `mailto:` when the open
    /// is refused or fails, up front or by the time the window is checked
    pub async fn open_web(&self, draft: &EmailDraft, recipient: Option<&str>) -> LaunchOutcome {
        let url = web_compose_url(&self.compose_url, &draft.subject, &draft.body, recipient);

        let mut window = match self.opener.open(&url) {
            Ok(Some(window)) => window,
            Ok(None) => {
                warn!("Web compose open was blocked, falling back to mailto");
                return self.open_mail_client(draft, recipient);
            }
            Err(e) => {
                warn!("Web compose open failed, falling back to mailto: {:#}", e);
                return self.open_mail_client(draft, recipient);
            }
        };

        self.notifier.notify(Notice::info("Opening webmail compose..."));
        tokio::time::sleep(VERIFY_DELAY).await;

        match window.status() {
            Ok(WindowStatus::Refused) => {
                warn!("Web compose window never opened, falling back to mailto");
                self.open_mail_client(draft, recipient)
            }
            Ok(WindowStatus::Closed) => {
                self.notifier
                    .notify(Notice::info("Webmail compose window was closed."));
                LaunchOutcome::WebClosed
            }
            Ok(WindowStatus::Open) => {
                self.notifier
                    .notify(Notice::success("Webmail compose opened successfully!"));
                LaunchOutcome::WebOpened
            }
            Err(e) => {
                // Unable to inspect the window is not the same as it failing.
                info!("Could not verify compose window: {:#}", e);
                self.notifier
                    .notify(Notice::success("Webmail compose opened successfully!"));
                LaunchOutcome::WebOpened
            }
        }
    }

    /// Open a `mailto:` link; a failure here is terminal
    pub fn open_mail_client(&self, draft: &EmailDraft, recipient: Option<&str>) -> LaunchOutcome {
        let url = mailto_url(&draft.subject, &draft.body, recipient);

        match self.opener.open(&url) {
            Ok(_) => {
                self.notifier
                    .notify(Notice::info("Opening your mail client..."));
                LaunchOutcome::MailClient
            }
            Err(e) => {
                warn!("mailto open failed: {:#}", e);
                self.notifier.notify(Notice::error(MANUAL_COPY_MESSAGE));
                LaunchOutcome::ManualCopy
            }
        }
    }
}
