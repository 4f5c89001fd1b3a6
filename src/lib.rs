//! revu - LLM-assisted pull request review
//!
//! Fetches a GitHub pull request's description and changed-file contents,
//! then runs a fixed sequence of LLM analysis stages over a shared review
//! state, ending in a structured review document.
//!
//! The library is organized around two collaborator traits and a runner:
//!
//! - [`fetch::ChangeFetcher`] retrieves PR metadata and file contents
//! - [`llm::TextGenerator`] produces analysis text from prompts
//! - [`pipeline::Reviewer`] threads a [`types::ReviewState`] through the
//!   five stages in order and returns the final state

pub mod auth;
pub mod error;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod report;
pub mod types;
