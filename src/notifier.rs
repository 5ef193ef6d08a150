// src/notifier.rs
//! Transient success/error/info feedback shown to the user

use std::fmt;
use std::time::Duration;

/// How long auto-hiding notices stay visible
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// `None` keeps the notice up until it is replaced or cleared
    pub auto_hide: Option<Duration>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            auto_hide: Some(AUTO_HIDE_AFTER),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            auto_hide: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            auto_hide: None,
        }
    }

    pub fn with_auto_hide(mut self, after: Duration) -> Self {
        self.auto_hide = Some(after);
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
            NoticeKind::Info => "ℹ",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    /// Hide whatever is currently shown
    fn clear(&self) {}
}

/// Prints notices to the terminal; errors go to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => eprintln!("{}", notice),
            _ => println!("{}", notice),
        }
    }
}
