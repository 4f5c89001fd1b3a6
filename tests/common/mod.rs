//! Shared test utilities

pub mod fixtures;
pub mod mock_fetcher;
pub mod mock_generator;
