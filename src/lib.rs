//! Job posting extraction, email draft generation and mail deep links.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod mail;
pub mod notifier;
pub mod panel;
pub mod profile;
pub mod types;

pub use config::{AppConfig, ConfigManager};
pub use error::MailerError;
pub use extraction::JobPostingExtractor;
pub use mail::MailLauncher;
pub use notifier::{Notice, NoticeKind, Notifier};
pub use panel::{PanelController, PanelState};
pub use profile::{ProfileStore, SaveOutcome};
pub use types::{EmailDraft, PersonalInfo};
