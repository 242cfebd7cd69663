//! Client-side interaction engine for the AI interviewer.
//!
//! A user selects a resume and enters a job description; the [`session`]
//! validates both, posts them once to the analysis service, and then reveals
//! the generated questions one at a time.

pub mod analysis_client;
pub mod config;
pub mod errors;
pub mod resume;
pub mod revealer;
pub mod session;
pub mod terminal;
pub mod validation;
pub mod view;
