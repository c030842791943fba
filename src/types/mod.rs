// src/types/mod.rs
pub mod profile;

pub use profile::{CandidateProfile, ContactInfo, Education, Experience};
