// src/mail/mod.rs
pub mod attachment;
pub mod launcher;
pub mod links;
pub mod opener;

pub use launcher::{LaunchOutcome, MailLauncher, VERIFY_DELAY};
pub use links::{mailto_url, web_compose_url};
pub use opener::{OpenedWindow, SystemOpener, UrlOpener, WindowStatus};
