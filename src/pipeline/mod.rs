// src/pipeline/mod.rs
//! Submission & render pipeline: Idle -> Loading -> {Success | Failure} -> Idle

pub mod session;
pub mod state;
pub mod view;

pub use session::Session;
pub use state::{transition, Effect, Event, PipelineState};
pub use view::PageView;
