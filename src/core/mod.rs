// src/core/mod.rs
//! Storage, file system and backend plumbing shared by the panel and the CLI

pub mod fs_ops;
pub mod service_client;
pub mod storage;

pub use fs_ops::FsOps;
pub use service_client::{EmailBackend, ServiceClient};
pub use storage::{keys, LocalStore};
