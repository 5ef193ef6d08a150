mod common;

use common::{temp_store, FakeBackend};
use job_mailer::core::keys;
use job_mailer::notifier::NoticeKind;
use job_mailer::types::{Experience, PersonalInfo, Project};
use job_mailer::{ProfileStore, SaveOutcome};

fn profile() -> PersonalInfo {
    PersonalInfo {
        name: "Ada Lovelace".to_string(),
        university: "University of Waterloo".to_string(),
        degree: "Mathematics".to_string(),
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        linkedin: "https://linkedin.com/in/ada".to_string(),
        github: "https://github.com/ada".to_string(),
        email: "ada@example.com".to_string(),
        experience: vec![Experience {
            role: "Systems Analyst".to_string(),
            company: "Analytical Engines".to_string(),
            summary: "Optimized capital allocation".to_string(),
        }],
        projects: vec![Project {
            name: "Scheduler".to_string(),
            description: "Class scheduler for students".to_string(),
        }],
    }
}

#[tokio::test]
async fn test_save_mirrors_to_backend() {
    let backend = FakeBackend::default();
    let (_dir, store) = temp_store();
    let profiles = ProfileStore::new(&store, &backend);

    let outcome = profiles.save(&profile()).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Synced);
    assert_eq!(outcome.notice().kind, NoticeKind::Success);
    assert_eq!(backend.updates.lock().unwrap().as_slice(), &[profile()]);
}

#[tokio::test]
async fn test_remote_failure_keeps_local_copy() {
    let backend = FakeBackend::unreachable();
    let (_dir, store) = temp_store();
    let profiles = ProfileStore::new(&store, &backend);
    let info = PersonalInfo {
        skills: vec!["Rust".to_string()],
        ..Default::default()
    };

    let outcome = profiles.save(&info).await.unwrap();

    assert!(matches!(outcome, SaveOutcome::LocalOnly { .. }));
    assert_eq!(outcome.notice().kind, NoticeKind::Error);
    assert_eq!(profiles.load().await, info);
}

#[tokio::test]
async fn test_load_prefers_local_copy() {
    let backend = FakeBackend::default();
    *backend.remote_profile.lock().unwrap() = Some(PersonalInfo {
        name: "Remote".to_string(),
        ..Default::default()
    });
    let (_dir, store) = temp_store();
    store.set(keys::PERSONAL_INFO, &profile()).await.unwrap();

    let profiles = ProfileStore::new(&store, &backend);
    assert_eq!(profiles.load().await, profile());
}

#[tokio::test]
async fn test_load_falls_back_to_backend() {
    let backend = FakeBackend::default();
    *backend.remote_profile.lock().unwrap() = Some(PersonalInfo {
        name: "Remote".to_string(),
        ..Default::default()
    });
    let (_dir, store) = temp_store();

    let profiles = ProfileStore::new(&store, &backend);
    assert_eq!(profiles.load().await.name, "Remote");
}

#[tokio::test]
async fn test_load_failure_is_an_empty_profile() {
    let backend = FakeBackend::unreachable();
    let (_dir, store) = temp_store();

    let profiles = ProfileStore::new(&store, &backend);
    assert!(profiles.load().await.is_empty());
}

#[tokio::test]
async fn test_unreadable_local_copy_falls_back_to_backend() {
    let backend = FakeBackend::default();
    *backend.remote_profile.lock().unwrap() = Some(profile());
    let (_dir, store) = temp_store();
    store
        .set(keys::PERSONAL_INFO, &"not a profile")
        .await
        .unwrap();

    let profiles = ProfileStore::new(&store, &backend);
    assert_eq!(profiles.load().await, profile());
}
