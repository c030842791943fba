// src/core/mod.rs
//! Outbound service access and upload scratch files

pub mod fs_ops;
pub mod service_client;

pub use fs_ops::FsOps;
pub use service_client::{ParseService, ServiceClient};
