// src/mail/attachment.rs
//! Compose links cannot carry files; this checks one and tells the user what to attach

use anyhow::Result;
use std::path::Path;

use crate::core::FsOps;
use crate::error::MailerError;

pub const ALLOWED_ATTACHMENT_EXTENSIONS: &[&str] =
    &["pdf", "doc", "docx", "txt", "jpg", "jpeg", "png"];

/// Rejections name the file, whether its extension is missing or not allowed
pub fn validate_attachment(path: &Path) -> Result<(), MailerError> {
    let allowed = FsOps::get_extension(path)
        .is_some_and(|ext| ALLOWED_ATTACHMENT_EXTENSIONS.contains(&ext.as_str()));

    if !allowed {
        return Err(MailerError::UnsupportedAttachment(file_name(path)));
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `Selected: resume.pdf (12.3 KB)`
pub async fn describe_attachment(path: &Path) -> Result<String> {
    validate_attachment(path)?;
    let size = FsOps::file_size(path).await?;
    Ok(format!(
        "Selected: {} ({:.1} KB)",
        file_name(path),
        size as f64 / 1024.0
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_attachment() {
        assert!(validate_attachment(Path::new("cv.PDF")).is_ok());
        assert!(validate_attachment(Path::new("photo.jpeg")).is_ok());
        assert!(matches!(
            validate_attachment(Path::new("bin/run.exe")),
            Err(MailerError::UnsupportedAttachment(name)) if name == "run.exe"
        ));
        assert!(matches!(
            validate_attachment(Path::new("docs/README")),
            Err(MailerError::UnsupportedAttachment(name)) if name == "README"
        ));
    }

    #[tokio::test]
    async fn test_describe_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::write(&path, vec![0u8; 2048]).await.unwrap();

        assert_eq!(
            describe_attachment(&path).await.unwrap(),
            "Selected: resume.pdf (2.0 KB)"
        );
    }

    #[tokio::test]
    async fn test_describe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe_attachment(&dir.path().join("gone.pdf")).await.is_err());
    }
}
