#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use job_mailer::core::{EmailBackend, LocalStore};
use job_mailer::mail::{OpenedWindow, UrlOpener, WindowStatus};
use job_mailer::notifier::{Notice, NoticeKind, Notifier};
use job_mailer::types::{GenerateEmailRequest, GenerateEmailResponse, PersonalInfo};

/// Backend double: `None` replies simulate transport failures
#[derive(Default)]
pub struct FakeBackend {
    pub reply: Mutex<Option<GenerateEmailResponse>>,
    pub remote_profile: Mutex<Option<PersonalInfo>>,
    pub fail_updates: bool,
    pub requests: Mutex<Vec<GenerateEmailRequest>>,
    pub updates: Mutex<Vec<PersonalInfo>>,
}

impl FakeBackend {
    pub fn replying(subject: Option<&str>, body: Option<&str>) -> Self {
        let reply = GenerateEmailResponse {
            subject: subject.map(str::to_string),
            body: body.map(str::to_string),
            status: Some("success".to_string()),
            error: None,
        };
        Self {
            reply: Mutex::new(Some(reply)),
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail_updates: true,
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> Option<GenerateEmailRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailBackend for FakeBackend {
    async fn generate_email(
        &self,
        request: &GenerateEmailRequest,
    ) -> Result<GenerateEmailResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn fetch_personal_info(&self) -> Result<PersonalInfo> {
        self.remote_profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn update_personal_info(&self, info: &PersonalInfo) -> Result<()> {
        if self.fail_updates {
            anyhow::bail!("connection refused");
        }
        self.updates.lock().unwrap().push(info.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    clears: AtomicUsize,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn has(&self, kind: NoticeKind, message: &str) -> bool {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .any(|n| n.kind == kind && n.message == message)
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum OpenBehaviour {
    /// Opens; the window reports this closed state at verification
    Opens { closed: bool },
    /// Opens, but the launch has failed by verification time
    OpensThenRefused,
    /// Opens, but the window cannot be inspected
    OpensUninspectable,
    Blocked,
    Fails,
}

pub struct FakeOpener {
    web: OpenBehaviour,
    mailto: OpenBehaviour,
    opened: Mutex<Vec<String>>,
}

impl FakeOpener {
    pub fn new(web: OpenBehaviour, mailto: OpenBehaviour) -> Self {
        Self {
            web,
            mailto,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn working() -> Self {
        Self::new(
            OpenBehaviour::Opens { closed: false },
            OpenBehaviour::Opens { closed: false },
        )
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

struct FakeWindow {
    status: Option<WindowStatus>,
}

impl OpenedWindow for FakeWindow {
    fn status(&mut self) -> Result<WindowStatus> {
        self.status
            .ok_or_else(|| anyhow::anyhow!("cross-origin window"))
    }
}

impl UrlOpener for FakeOpener {
    fn open(&self, url: &str) -> Result<Option<Box<dyn OpenedWindow>>> {
        self.opened.lock().unwrap().push(url.to_string());
        let behaviour = if url.starts_with("mailto:") {
            self.mailto
        } else {
            self.web
        };
        match behaviour {
            OpenBehaviour::Opens { closed } => {
                let status = if closed {
                    WindowStatus::Closed
                } else {
                    WindowStatus::Open
                };
                Ok(Some(Box::new(FakeWindow {
                    status: Some(status),
                })))
            }
            OpenBehaviour::OpensThenRefused => Ok(Some(Box::new(FakeWindow {
                status: Some(WindowStatus::Refused),
            }))),
            OpenBehaviour::OpensUninspectable => Ok(Some(Box::new(FakeWindow { status: None }))),
            OpenBehaviour::Blocked => Ok(None),
            OpenBehaviour::Fails => anyhow::bail!("no handler for URL"),
        }
    }
}

pub fn temp_store() -> (tempfile::TempDir, LocalStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path().join("storage.json"));
    (dir, store)
}

pub fn sample_posting() -> String {
    "Software Engineering Intern at Acme. You will build Rust services, review code, \
     and ship features to millions of users. Requirements: Rust, SQL, Git."
        .to_string()
}
