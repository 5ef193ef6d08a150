// src/mail/opener.rs
//! Hands URLs to whatever the platform uses to open them

use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::debug;

/// What an opened window looks like when checked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    Open,
    /// Was shown, then closed by the user
    Closed,
    /// Never shown; treated like a blocked popup
    Refused,
}

/// Something opened on the user's behalf that can be checked on later
pub trait OpenedWindow: Send {
    fn status(&mut self) -> Result<WindowStatus>;
}

pub trait UrlOpener: Send + Sync {
    /// `Ok(None)` means the open was refused up front (the popup-blocked case)
    fn open(&self, url: &str) -> Result<Option<Box<dyn OpenedWindow>>>;
}

/// Delegates to `open` on macOS, the URL protocol handler on Windows and
/// `xdg-open` elsewhere. Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }

        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler").arg(url);
            cmd
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<Option<Box<dyn OpenedWindow>>> {
        debug!("Opening URL ({} bytes)", url.len());
        let window = ChildWindow::spawn(Self::command(url))?;
        Ok(Some(Box::new(window)))
    }
}

/// A launcher process standing in for the window it opens. Dropped handles
/// are reaped by the tokio runtime.
struct ChildWindow(Child);

impl ChildWindow {
    fn spawn(mut cmd: Command) -> Result<Self> {
        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to launch URL opener")?;
        Ok(Self(child))
    }
}

impl OpenedWindow for ChildWindow {
    /// A launcher that exited with a failure status never showed anything
    fn status(&mut self) -> Result<WindowStatus> {
        let status = self
            .0
            .try_wait()
            .context("Failed to check URL opener status")?;
        Ok(match status {
            Some(exit) if !exit.success() => WindowStatus::Refused,
            _ => WindowStatus::Open,
        })
    }
}
